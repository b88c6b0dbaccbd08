//! Application-level configuration.
//!
//! Controls which optional collaborators the refine use case consults.

/// Refinement behavior configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefineOptions {
    /// Run the analyzer before detection and scoring.
    pub analyze: bool,
    /// Run the structural validator on the refined prompt.
    pub validate: bool,
    /// Persist refinements unless the caller says otherwise.
    pub save: bool,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            analyze: true,
            validate: true,
            save: false,
        }
    }
}
