//! Error types produced by binding and loading.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedDiagnostics;
pub use types::{BindError, CoercionError};
