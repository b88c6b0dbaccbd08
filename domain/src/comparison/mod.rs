//! Side-by-side comparison of prompt variants

pub mod comparator;
pub mod result;

pub use comparator::{MARGINAL_GAP, PromptComparator};
pub use result::{ComparisonResult, MetricComparison, MetricDirection, MetricValue, VariantResult};
