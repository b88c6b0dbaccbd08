//! Domain detection scoring
//!
//! Each detection-pattern match is worth [`PATTERN_MATCH_WEIGHT`]; each
//! analyzer hint mapping to a registered domain adds [`HINT_BONUS`]. The
//! strictly highest score wins (ties go to the earliest registered domain)
//! and anything under [`DETECTION_FLOOR`] falls back to `general`.

use crate::core::domain::Domain;
use serde::Serialize;

pub const PATTERN_MATCH_WEIGHT: u32 = 2;
pub const HINT_BONUS: u32 = 3;
/// Minimum winning score before a specific domain is trusted over `general`
pub const DETECTION_FLOOR: u32 = 2;

/// Fixed analyzer-hint lookup table (lowercase hint -> domain)
const HINT_TABLE: &[(&str, Domain)] = &[
    ("database", Domain::Sql),
    ("sql", Domain::Sql),
    ("query", Domain::Sql),
    ("data", Domain::Sql),
    ("branding", Domain::Branding),
    ("brand", Domain::Branding),
    ("marketing", Domain::Branding),
    ("logo", Domain::Branding),
    ("design", Domain::Branding),
    ("video", Domain::Cine),
    ("film", Domain::Cine),
    ("cinema", Domain::Cine),
    ("cine", Domain::Cine),
    ("movie", Domain::Cine),
    ("screenplay", Domain::Cine),
    ("saas", Domain::Saas),
    ("software", Domain::Saas),
    ("startup", Domain::Saas),
    ("subscription", Domain::Saas),
    ("product", Domain::Saas),
    ("devops", Domain::Devops),
    ("infrastructure", Domain::Devops),
    ("deployment", Domain::Devops),
    ("cloud", Domain::Devops),
    ("ci/cd", Domain::Devops),
    ("containers", Domain::Devops),
];

/// Map an analyzer hint to a domain. Unknown hints yield `None`.
pub fn hint_domain(hint: &str) -> Option<Domain> {
    let hint = hint.trim().to_lowercase();
    HINT_TABLE
        .iter()
        .find(|(key, _)| *key == hint)
        .map(|(_, domain)| *domain)
}

/// Detection outcome together with the per-domain score table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainDetection {
    pub domain: Domain,
    /// Scores in registration order
    pub scores: Vec<(Domain, u32)>,
}

impl DomainDetection {
    /// Pick the winner from scores listed in registration order.
    pub fn from_scores(scores: Vec<(Domain, u32)>) -> Self {
        let mut best: Option<(Domain, u32)> = None;
        for &(domain, score) in &scores {
            // Strictly greater: the earliest registered domain keeps a tie
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((domain, score));
            }
        }

        let domain = match best {
            Some((domain, score)) if score >= DETECTION_FLOOR => domain,
            _ => Domain::General,
        };

        Self { domain, scores }
    }

    pub fn score_of(&self, domain: Domain) -> u32 {
        self.scores
            .iter()
            .find(|(d, _)| *d == domain)
            .map_or(0, |(_, s)| *s)
    }

    /// Highest score in the table (0 when nothing is registered)
    pub fn top_score(&self) -> u32 {
        self.scores.iter().map(|(_, s)| *s).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_lookup() {
        assert_eq!(hint_domain("database"), Some(Domain::Sql));
        assert_eq!(hint_domain(" Marketing "), Some(Domain::Branding));
        assert_eq!(hint_domain("ci/cd"), Some(Domain::Devops));
        assert_eq!(hint_domain("astrology"), None);
    }

    #[test]
    fn test_highest_score_wins() {
        let detection = DomainDetection::from_scores(vec![
            (Domain::Sql, 2),
            (Domain::Branding, 6),
            (Domain::Cine, 4),
        ]);
        assert_eq!(detection.domain, Domain::Branding);
        assert_eq!(detection.top_score(), 6);
        assert_eq!(detection.score_of(Domain::Cine), 4);
    }

    #[test]
    fn test_tie_goes_to_first_registered() {
        let detection = DomainDetection::from_scores(vec![
            (Domain::Sql, 4),
            (Domain::Devops, 4),
        ]);
        assert_eq!(detection.domain, Domain::Sql);

        let detection = DomainDetection::from_scores(vec![
            (Domain::Devops, 4),
            (Domain::Sql, 4),
        ]);
        assert_eq!(detection.domain, Domain::Devops);
    }

    #[test]
    fn test_floor_falls_back_to_general() {
        let detection = DomainDetection::from_scores(vec![(Domain::Sql, 1), (Domain::Saas, 0)]);
        assert_eq!(detection.domain, Domain::General);

        let detection = DomainDetection::from_scores(vec![(Domain::Sql, 2)]);
        assert_eq!(detection.domain, Domain::Sql);
    }

    #[test]
    fn test_empty_scores_is_general() {
        let detection = DomainDetection::from_scores(vec![]);
        assert_eq!(detection.domain, Domain::General);
        assert_eq!(detection.top_score(), 0);
    }
}
