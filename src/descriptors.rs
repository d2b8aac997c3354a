//! Service descriptors: the registration records accumulated by a
//! [`ServiceCollection`](crate::ServiceCollection).

use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

use crate::error::DiResult;
use crate::key::Key;
use crate::lifetime::Lifetime;
use crate::traits::{AnyArc, ResolverCore};

/// Shared, type-erased service factory.
pub(crate) type SharedCtor = Arc<dyn Fn(&dyn ResolverCore) -> DiResult<AnyArc> + Send + Sync>;

/// A single registration record.
///
/// Carries the service key, the recorded [`Lifetime`], the identity of
/// the implementation type behind the record, and the factory a
/// consuming container invokes to produce an instance. Since types
/// cannot be constructed from runtime metadata in Rust, the factory is
/// what stands in for the "implementation type" slot of the classic
/// (interface, implementation, lifetime) triple.
///
/// Descriptors are cheap to clone: the factory is shared.
///
/// # Examples
///
/// ```rust
/// use scrutineer::{Lifetime, ServiceCollection};
///
/// #[derive(Debug)]
/// struct AppConfig {
///     name: &'static str,
/// }
///
/// let mut services = ServiceCollection::new();
/// services.add_instance(AppConfig { name: "demo" }, Lifetime::Singleton);
///
/// let record = &services.descriptors()[0];
/// assert_eq!(record.lifetime(), Lifetime::Singleton);
/// assert!(record.type_name().contains("AppConfig"));
/// ```
#[derive(Clone)]
pub struct ServiceDescriptor {
    pub(crate) key: Key,
    pub(crate) lifetime: Lifetime,
    pub(crate) impl_id: Option<TypeId>,
    pub(crate) impl_name: Option<&'static str>,
    pub(crate) ctor: SharedCtor,
}

impl ServiceDescriptor {
    pub(crate) fn new(
        key: Key,
        lifetime: Lifetime,
        impl_id: Option<TypeId>,
        impl_name: Option<&'static str>,
        ctor: SharedCtor,
    ) -> Self {
        Self { key, lifetime, impl_id, impl_name, ctor }
    }

    /// The service key this record registers.
    pub fn key(&self) -> Key {
        self.key
    }

    /// The registered service's type or trait name.
    pub fn type_name(&self) -> &'static str {
        self.key.display_name()
    }

    /// The lifetime recorded for this registration.
    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// `TypeId` of the implementation behind the factory, when known.
    ///
    /// Records produced by a catalog pass always know their
    /// implementation; hand-added trait factories do not.
    pub fn impl_type_id(&self) -> Option<TypeId> {
        self.impl_id
    }

    /// Name of the implementation type, when known.
    pub fn impl_type_name(&self) -> Option<&'static str> {
        self.impl_name
    }

    /// Invokes the factory against a resolver.
    ///
    /// Concrete-type records yield `Arc<T>`; trait records yield
    /// `Arc<Arc<dyn Trait>>`, matching what
    /// [`Resolver::get_trait`](crate::Resolver::get_trait) expects.
    pub fn create(&self, resolver: &dyn ResolverCore) -> DiResult<AnyArc> {
        (self.ctor)(resolver)
    }
}

impl fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("key", &self.key)
            .field("lifetime", &self.lifetime)
            .field("impl_type_name", &self.impl_name)
            .finish_non_exhaustive()
    }
}
