//! Prompt store adapters.
//!
//! Provides [`JsonFilePromptStore`], which implements the
//! [`PromptStore`](refinery_application::PromptStore) port on top of a
//! single JSON file (or purely in memory).

mod json_file;

pub use json_file::JsonFilePromptStore;
