//! Dispatch engine and result aggregation
//!
//! This module contains:
//! - The [`Dispatcher`], which resolves a category and runs its strategy
//! - The [`ResultEnvelope`] wrapping each payload with its source and capture time
//! - Target classification and the per-kind source plan used for fan-out runs
//! - Custody digests identifying exactly what each envelope reported

mod custody;
mod engine;
mod envelope;
mod plan;

pub use custody::{payload_digest, CustodyEntry, COLLECTION_METHOD};
pub use engine::Dispatcher;
pub use envelope::ResultEnvelope;
pub use plan::{InvestigationPlan, TargetKind};
