//! Logging infrastructure: structured refinement event logging.
//!
//! Provides [`JsonlRefinementLogger`], a JSONL file writer that implements
//! the [`RefinementLogger`](refinery_application::RefinementLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlRefinementLogger;
