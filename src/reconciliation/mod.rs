mod execute;
mod plan;
mod scan;

pub use execute::{reconcile, ReconcileError, ReconcileResult};
pub use plan::{build_source_plan, ReconcileOutcome, SourceListPlan};
pub use scan::scan_sources;
