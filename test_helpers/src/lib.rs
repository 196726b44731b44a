//! Test helpers shared across the keypath-config workspace.
//!
//! Integration tests reach for these when they need to observe how the walker
//! talks to its collaborators: which paths were looked up, which secrets were
//! read, and which diagnostics came back.

pub mod diagnostics;
pub mod jail;
pub mod source;
pub mod store;

pub use diagnostics::{expect_paths, rendered_paths};
pub use jail::{with_jail, write_document};
pub use source::RecordingSource;
pub use store::RecordingStore;
