//! Service collection: the append-only builder that accumulates
//! registration records.

use std::any::TypeId;
use std::sync::Arc;

use crate::descriptors::{ServiceDescriptor, SharedCtor};
use crate::key::{key_of_trait, key_of_type};
use crate::lifetime::Lifetime;
use crate::traits::{AnyArc, ResolverCore};

/// An ordered, append-only list of [`ServiceDescriptor`] records.
///
/// The collection is the builder a consuming container is constructed
/// from. Records arrive either through the convention pass
/// ([`ServiceCollectionCatalogExt`](crate::ServiceCollectionCatalogExt))
/// or through the direct registration methods below; the collection does
/// not deduplicate and does not reorder. Mutation is not thread-safe;
/// build the collection on one thread, then hand the records off.
///
/// # Examples
///
/// ```rust
/// use scrutineer::{Lifetime, ServiceCollection};
///
/// struct Clock;
///
/// let mut services = ServiceCollection::new();
/// services
///     .add_instance(8080u16, Lifetime::Singleton)
///     .add_factory::<Clock, _>(Lifetime::Transient, |_| Clock);
///
/// assert_eq!(services.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ServiceCollection {
    descriptors: Vec<ServiceDescriptor>,
}

impl ServiceCollection {
    /// Creates a new empty service collection.
    pub fn new() -> Self {
        Self { descriptors: Vec::new() }
    }

    /// Number of records accumulated so far.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// All accumulated records, in append order.
    pub fn descriptors(&self) -> &[ServiceDescriptor] {
        &self.descriptors
    }

    /// Iterates the accumulated records in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, ServiceDescriptor> {
        self.descriptors.iter()
    }

    /// Appends a record.
    pub fn add(&mut self, descriptor: ServiceDescriptor) -> &mut Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Registers a pre-built instance under its concrete type.
    ///
    /// The instance is wrapped in an `Arc` once and cloned out on every
    /// factory invocation, whatever lifetime the record carries.
    pub fn add_instance<T: 'static + Send + Sync>(&mut self, value: T, lifetime: Lifetime) -> &mut Self {
        let arc = Arc::new(value);
        let ctor: SharedCtor = Arc::new(move |_| Ok(arc.clone() as AnyArc));
        self.add(ServiceDescriptor::new(
            key_of_type::<T>(),
            lifetime,
            Some(TypeId::of::<T>()),
            Some(std::any::type_name::<T>()),
            ctor,
        ))
    }

    /// Registers a factory under the concrete type it produces.
    pub fn add_factory<T, F>(&mut self, lifetime: Lifetime, factory: F) -> &mut Self
    where
        T: 'static + Send + Sync,
        F: Fn(&dyn ResolverCore) -> T + Send + Sync + 'static,
    {
        let ctor: SharedCtor = Arc::new(move |r| Ok(Arc::new(factory(r)) as AnyArc));
        self.add(ServiceDescriptor::new(
            key_of_type::<T>(),
            lifetime,
            Some(TypeId::of::<T>()),
            Some(std::any::type_name::<T>()),
            ctor,
        ))
    }

    /// Registers a factory under a service trait.
    ///
    /// This is the direct, non-convention path for trait registrations;
    /// the concrete implementation type behind the factory is not
    /// recorded. Use a [`ServiceCatalog`](crate::ServiceCatalog) when
    /// implementation identity and lifetime markers should drive the
    /// registration instead.
    pub fn add_trait_factory<S, F>(&mut self, lifetime: Lifetime, factory: F) -> &mut Self
    where
        S: ?Sized + 'static + Send + Sync,
        F: Fn(&dyn ResolverCore) -> Arc<S> + Send + Sync + 'static,
    {
        // Stored as Arc<Arc<S>> so the outer Arc has a sized payload.
        let ctor: SharedCtor = Arc::new(move |r| Ok(Arc::new(factory(r)) as AnyArc));
        self.add(ServiceDescriptor::new(key_of_trait::<S>(), lifetime, None, None, ctor))
    }
}
