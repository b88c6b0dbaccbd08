//! String utilities for the domain layer.

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whitespace-separated word count
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Vague words (English and Spanish) that signal an underspecified prompt
pub const VAGUE_WORDS: &[&str] = &[
    "nice", "pretty", "good", "cool", "stuff", "things", "something", "some", "maybe", "etc",
    "bonito", "bonita", "lindo", "linda", "cosas", "algo", "chulo",
];

/// Whether an already-lowercased token is a vague word
pub fn is_vague_word(word: &str) -> bool {
    VAGUE_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("hazme una tabla"), "Hazme una tabla");
        assert_eq!(capitalize_first("ñandú"), "Ñandú");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_is_vague_word() {
        assert!(is_vague_word("stuff"));
        assert!(is_vague_word("bonita"));
        assert!(!is_vague_word("schema"));
        assert!(!is_vague_word("Stuff"));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("  one two\nthree  "), 3);
        assert_eq!(word_count(""), 0);
    }
}
