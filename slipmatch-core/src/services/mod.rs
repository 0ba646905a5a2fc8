//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case.

mod matcher;
mod reconcile;
mod report;

pub use matcher::MatchService;
pub use reconcile::ReconcileService;
pub use report::{ReportService, Summary};
