//! Rule engines
//!
//! - [`pattern`]: substitution and enhancement rule primitives
//! - [`library`]: an ordered per-domain rule set
//! - [`engine`]: the five-stage rule pipeline
//! - [`general`]: fallback engine for `general` prompts

pub mod engine;
pub mod general;
pub mod library;
pub mod pattern;
