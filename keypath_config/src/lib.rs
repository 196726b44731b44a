//! Schema-driven configuration binding over hierarchical key/value sources.
//!
//! Destination types describe their fields through the [`Bind`] trait,
//! usually via `#[derive(Bind)]` from the companion `keypath_config_macros`
//! crate. A [`Walker`] visits those fields, derives a [`KeyPath`] for each
//! one, fetches a [`RawValue`] from a [`Source`], coerces it into the field's
//! kind, and assigns it. Fields that cannot be bound keep their prior value
//! and are reported to a [`DiagnosticSink`].
//!
//! ```
//! use keypath_config::{Bind, Diagnostics, KeyPath, MapSource, PathResolver, Walker};
//!
//! #[derive(Bind, Default)]
//! struct Database {
//!     #[bind(tag = "val=host")]
//!     address: String,
//!     port: u16,
//!     replicas: Vec<String>,
//! }
//!
//! #[derive(Bind, Default)]
//! struct Settings {
//!     database: Database,
//!     #[bind(skip)]
//!     cache: String,
//! }
//!
//! let source = MapSource::new()
//!     .with("app/database/host", "db.internal")
//!     .with("app/database/port", "5432")
//!     .with("app/database/replicas", "[r1, r2]");
//! let resolver = PathResolver::default();
//! let mut diagnostics = Diagnostics::new();
//! let mut settings = Settings::default();
//!
//! Walker::new(&source, &resolver, &mut diagnostics)
//!     .populate(Some(&mut settings), &KeyPath::root().child("app"))?;
//!
//! assert_eq!(settings.database.address, "db.internal");
//! assert_eq!(settings.database.port, 5432);
//! assert_eq!(settings.database.replicas, ["r1", "r2"]);
//! assert!(diagnostics.is_empty());
//! # Ok::<(), keypath_config::BindError>(())
//! ```

extern crate self as keypath_config;

pub use keypath_config_macros::Bind;

mod coerce;
mod diagnostics;
mod error;
mod loader;
mod path;
mod schema;
mod source;
mod value;
mod walker;

pub use coerce::{coerce_list, coerce_scalar, coerce_value};
pub use diagnostics::{Diagnostic, DiagnosticSink, Diagnostics, FieldError, TracingSink};
pub use error::{AggregatedDiagnostics, BindError, CoercionError};
pub use loader::{LoadOptions, Loaded, Provider, load_config};
pub use path::{FieldAnnotation, KeyPath, PathResolver, PathSyntax, Resolution};
pub use schema::{
    Bind, FieldDescriptor, FieldRole, ScalarKind, ScalarLeaf, Shape, ValueKind,
};
pub use source::{
    DocumentFormat, DocumentSource, HierarchicalSource, MapSource, MemoryStore, Secret,
    SecretStore, Source, SourceError, StoreError,
};
pub use value::{RawValue, Scalar, Value};
pub use walker::{Walker, populate};
