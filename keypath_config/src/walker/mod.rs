//! Recursive population of a destination record from a [`Source`].
//!
//! The walker visits fields in declaration order. Leaves are fetched and
//! coerced one at a time; nested records are walked under their own path
//! segment and flattened records under the parent's path. Only structural
//! misuse of the top-level destination is fatal. Every per-field failure is
//! reported to the [`DiagnosticSink`] and the field keeps its prior value.

use tracing::{debug, trace};

use crate::{
    Bind, BindError, CoercionError, Diagnostic, DiagnosticSink, FieldDescriptor, FieldError,
    FieldRole, KeyPath, PathResolver, Shape, Source, TracingSink, ValueKind, coerce_value,
};

/// Single-use binding pass over one source.
///
/// # Examples
///
/// ```
/// use keypath_config::{Bind, Diagnostics, KeyPath, MapSource, PathResolver, Walker};
///
/// #[derive(Bind, Default)]
/// struct Database {
///     #[bind(key = "host")]
///     address: String,
///     port: u16,
/// }
///
/// let source = MapSource::new().with("db/host", "db.internal");
/// let resolver = PathResolver::default();
/// let mut diagnostics = Diagnostics::new();
/// let mut database = Database::default();
///
/// Walker::new(&source, &resolver, &mut diagnostics)
///     .populate(Some(&mut database), &KeyPath::root().child("db"))?;
///
/// assert_eq!(database.address, "db.internal");
/// assert_eq!(diagnostics.len(), 1, "port was not set");
/// # Ok::<(), keypath_config::BindError>(())
/// ```
pub struct Walker<'w> {
    source: &'w dyn Source,
    resolver: &'w PathResolver,
    sink: &'w mut dyn DiagnosticSink,
}

impl<'w> Walker<'w> {
    /// Prepare a walk reading from `source` and reporting to `sink`.
    #[must_use]
    pub fn new(
        source: &'w dyn Source,
        resolver: &'w PathResolver,
        sink: &'w mut dyn DiagnosticSink,
    ) -> Self {
        Self {
            source,
            resolver,
            sink,
        }
    }

    /// Fill `destination` with values found under `base`.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::MissingTarget`] when `destination` is `None` and
    /// [`BindError::NotARecord`] when it is a leaf. Neither touches the
    /// source. Field-level failures are reported to the sink instead.
    pub fn populate(
        &mut self,
        destination: Option<&mut dyn Bind>,
        base: &KeyPath,
    ) -> Result<(), BindError> {
        let record = destination.ok_or(BindError::MissingTarget)?;
        self.walk_record(record, base)
    }

    fn walk_record(&mut self, record: &mut dyn Bind, path: &KeyPath) -> Result<(), BindError> {
        let fields = match record.shape() {
            Shape::Record(fields) => fields,
            Shape::Leaf(kind) => return Err(BindError::NotARecord { kind }),
        };
        debug!(
            path = %self.resolver.render(path),
            fields = fields.len(),
            "binding record"
        );
        for (index, descriptor) in fields.iter().enumerate() {
            self.visit(record, index, descriptor, path);
        }
        Ok(())
    }

    fn visit(
        &mut self,
        record: &mut dyn Bind,
        index: usize,
        descriptor: &FieldDescriptor,
        parent: &KeyPath,
    ) {
        if self.resolver.is_skipped(&descriptor.annotation) {
            trace!(field = descriptor.name, "skipping field");
            return;
        }
        let field = record.field_mut(index);
        match descriptor.role {
            FieldRole::Flatten => self.walk_nested(field, descriptor.name, parent),
            FieldRole::Record => {
                let resolved = self
                    .resolver
                    .resolve(parent, descriptor.name, &descriptor.annotation);
                self.walk_nested(field, descriptor.name, &resolved.child_path);
            }
            FieldRole::Leaf(kind) => {
                let resolved = self
                    .resolver
                    .resolve(parent, descriptor.name, &descriptor.annotation);
                self.bind_leaf(field, descriptor.name, kind, &resolved.child_path);
            }
        }
    }

    fn walk_nested(&mut self, field: Option<&mut dyn Bind>, name: &'static str, path: &KeyPath) {
        let outcome = match field {
            Some(nested) => self.walk_record(nested, path),
            None => Err(BindError::MissingTarget),
        };
        if let Err(err) = outcome {
            self.report(path, name, FieldError::Nested(Box::new(err)));
        }
    }

    fn bind_leaf(
        &mut self,
        field: Option<&mut dyn Bind>,
        name: &'static str,
        kind: ValueKind,
        path: &KeyPath,
    ) {
        trace!(path = %self.resolver.render(path), field = name, %kind, "binding leaf");
        let raw = match self.source.get(path) {
            Ok(raw) => raw,
            Err(err) => return self.report(path, name, err.into()),
        };
        let value = match coerce_value(&raw, kind) {
            Ok(value) => value,
            Err(CoercionError::UnsupportedKind { kind: declared }) => {
                return self.report(path, name, FieldError::UnsupportedKind { kind: declared });
            }
            Err(err) => return self.report(path, name, err.into()),
        };
        let Some(target) = field else {
            return self.report(
                path,
                name,
                FieldError::Nested(Box::new(BindError::MissingTarget)),
            );
        };
        if let Err(err) = target.assign(value) {
            self.report(path, name, err.into());
        }
    }

    fn report(&mut self, path: &KeyPath, field: &'static str, error: FieldError) {
        self.sink
            .record(Diagnostic::new(self.resolver.render(path), field, error));
    }
}

/// Fill `destination` from `source` under `base` using the default path
/// syntax, logging every diagnostic through [`TracingSink`].
///
/// # Errors
///
/// Returns [`BindError::NotARecord`] when `destination` is a leaf.
///
/// # Examples
///
/// ```
/// use keypath_config::{Bind, KeyPath, MapSource, populate};
///
/// #[derive(Bind, Default)]
/// struct Limits {
///     retries: u8,
///     hosts: Vec<String>,
/// }
///
/// let source = MapSource::new()
///     .with("limits/retries", "3")
///     .with("limits/hosts", "[a, b]");
/// let mut limits = Limits::default();
/// populate(&mut limits, &source, &KeyPath::root().child("limits"))?;
/// assert_eq!(limits.retries, 3);
/// assert_eq!(limits.hosts, ["a", "b"]);
/// # Ok::<(), keypath_config::BindError>(())
/// ```
pub fn populate(
    destination: &mut dyn Bind,
    source: &dyn Source,
    base: &KeyPath,
) -> Result<(), BindError> {
    let resolver = PathResolver::default();
    let mut sink = TracingSink;
    Walker::new(source, &resolver, &mut sink).populate(Some(destination), base)
}
