//! Service catalog: the explicit registry of implementation types that a
//! registration pass scans.
//!
//! Rust has no runtime type enumeration, so the catalog replaces
//! assembly scanning with one explicit entry per implementation type,
//! made at startup. Each entry names the concrete type, the lifetime
//! capabilities it claims, and the service traits it provides; the
//! compiler checks every claim and binding, where a reflective scanner
//! would discover them at runtime.

use std::any::TypeId;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::descriptors::SharedCtor;
use crate::markers::{Capabilities, ScopedService, Service, SingletonService, TransientService};
use crate::traits::{AnyArc, ResolverCore};

/// One service-trait binding on a catalog entry.
pub(crate) struct Binding {
    pub(crate) service_id: TypeId,
    pub(crate) service_name: &'static str,
    pub(crate) ctor: SharedCtor,
}

/// One cataloged implementation type.
pub(crate) struct TypeEntry {
    pub(crate) impl_id: TypeId,
    pub(crate) impl_name: &'static str,
    pub(crate) capabilities: Capabilities,
    pub(crate) bindings: Vec<Binding>,
}

/// An ordered registry of implementation types and the service traits
/// they provide.
///
/// Entries are added with [`add_type`](ServiceCatalog::add_type) and
/// configured through the returned [`TypeRegistration`] builder. The
/// catalog itself records everything permissively: entering the same
/// type twice creates two independent entries, and no conflict checking
/// is performed at any point.
///
/// # Examples
///
/// ```rust
/// use scrutineer::{Service, ServiceCatalog, TransientService};
/// use std::sync::Arc;
///
/// trait Notifier: Service {
///     fn notify(&self, message: &str);
/// }
///
/// struct LogNotifier;
///
/// impl Service for LogNotifier {}
/// impl TransientService for LogNotifier {}
/// impl Notifier for LogNotifier {
///     fn notify(&self, _message: &str) {}
/// }
///
/// let mut catalog = ServiceCatalog::new();
/// catalog
///     .add_type::<LogNotifier>()
///     .as_transient()
///     .implements::<dyn Notifier, _>(|_| Arc::new(LogNotifier));
///
/// assert_eq!(catalog.len(), 1);
/// ```
#[derive(Default)]
pub struct ServiceCatalog {
    pub(crate) entries: Vec<TypeEntry>,
}

impl ServiceCatalog {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Enters a concrete implementation type into the catalog.
    ///
    /// Returns the per-type builder used to claim lifetime capabilities
    /// and declare service-trait bindings. An entry left without
    /// bindings is legal and simply produces no records.
    pub fn add_type<T: 'static + Send + Sync>(&mut self) -> TypeRegistration<'_, T> {
        self.entries.push(TypeEntry {
            impl_id: TypeId::of::<T>(),
            impl_name: std::any::type_name::<T>(),
            capabilities: Capabilities::default(),
            bindings: Vec::new(),
        });
        let index = self.entries.len() - 1;
        TypeRegistration { catalog: self, index, _impl: PhantomData }
    }

    /// Number of cataloged implementation types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for one catalog entry.
///
/// Borrows the catalog; capability claims and bindings mutate the entry
/// in place, so plain method chaining finishes the registration with no
/// separate commit step.
pub struct TypeRegistration<'c, T> {
    catalog: &'c mut ServiceCatalog,
    index: usize,
    _impl: PhantomData<T>,
}

impl<'c, T: 'static + Send + Sync> TypeRegistration<'c, T> {
    fn entry(&mut self) -> &mut TypeEntry {
        &mut self.catalog.entries[self.index]
    }

    /// Claims singleton lifetime for this implementation.
    pub fn as_singleton(mut self) -> Self
    where
        T: SingletonService,
    {
        self.entry().capabilities.singleton = true;
        self
    }

    /// Claims scoped lifetime for this implementation.
    pub fn as_scoped(mut self) -> Self
    where
        T: ScopedService,
    {
        self.entry().capabilities.scoped = true;
        self
    }

    /// Claims transient lifetime for this implementation.
    pub fn as_transient(mut self) -> Self
    where
        T: TransientService,
    {
        self.entry().capabilities.transient = true;
        self
    }

    /// Binds the implementation to a service trait.
    ///
    /// `S` must carry the [`Service`] supertrait to qualify. The factory
    /// runs at resolution time against the consuming container's
    /// resolver and should construct the cataloged implementation; the
    /// closure performs the concrete-to-trait-object coercion at its
    /// concrete call site, which generic code cannot do on stable Rust.
    ///
    /// Multiple calls declare multiple bindings; each produces its own
    /// registration record.
    pub fn implements<S, F>(mut self, factory: F) -> Self
    where
        S: ?Sized + Service + 'static,
        F: Fn(&dyn ResolverCore) -> Arc<S> + Send + Sync + 'static,
    {
        // Stored as Arc<Arc<S>> so the outer Arc has a sized payload.
        let ctor: SharedCtor = Arc::new(move |r: &dyn ResolverCore| Ok(Arc::new(factory(r)) as AnyArc));
        self.entry().bindings.push(Binding {
            service_id: TypeId::of::<S>(),
            service_name: std::any::type_name::<S>(),
            ctor,
        });
        self
    }
}
