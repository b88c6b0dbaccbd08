//! Refinement outcome types shared by the use cases and formatters

pub mod report;

pub use report::{DomainSource, RefinementReport, ValidationIssue};
