//! The convention-based registration pass from a [`ServiceCatalog`] into
//! a [`ServiceCollection`].

use std::any::TypeId;

use tracing::{debug, trace};

use crate::catalog::ServiceCatalog;
use crate::collection::ServiceCollection;
use crate::descriptors::ServiceDescriptor;
use crate::key::Key;
use crate::lifetime::Lifetime;
use crate::markers::Service;

/// Extension trait adding catalog registration to [`ServiceCollection`].
///
/// The pass walks catalog entries in insertion order and appends one
/// record per (implementation, service trait) binding. The lifetime is
/// resolved once per implementation from its capability claims and
/// applied to every record that implementation produces. Bindings
/// against the bare [`Service`] marker are skipped. Nothing is
/// deduplicated: running the same pass twice appends every record twice.
///
/// # Examples
///
/// ```rust
/// use scrutineer::{
///     Lifetime, Service, ServiceCatalog, ServiceCollection,
///     ServiceCollectionCatalogExt, SingletonService,
/// };
/// use std::sync::Arc;
///
/// trait Cache: Service {
///     fn get(&self, key: &str) -> Option<String>;
/// }
///
/// struct MemoryCache;
///
/// impl Service for MemoryCache {}
/// impl SingletonService for MemoryCache {}
/// impl Cache for MemoryCache {
///     fn get(&self, _key: &str) -> Option<String> {
///         None
///     }
/// }
///
/// let mut catalog = ServiceCatalog::new();
/// catalog
///     .add_type::<MemoryCache>()
///     .as_singleton()
///     .implements::<dyn Cache, _>(|_| Arc::new(MemoryCache));
///
/// let mut services = ServiceCollection::new();
/// services.add_services_from_with(&catalog, Lifetime::Scoped);
///
/// // The singleton claim wins over the supplied default.
/// assert_eq!(services.descriptors()[0].lifetime(), Lifetime::Singleton);
/// ```
pub trait ServiceCollectionCatalogExt {
    /// Registers every cataloged (implementation, service trait) pair,
    /// falling back to [`Lifetime::default`] (transient) for
    /// implementations that claim no lifetime capability.
    fn add_services_from(&mut self, catalog: &ServiceCatalog) -> &mut Self;

    /// Registers every cataloged (implementation, service trait) pair
    /// with an explicit fallback lifetime.
    fn add_services_from_with(
        &mut self,
        catalog: &ServiceCatalog,
        default_lifetime: Lifetime,
    ) -> &mut Self;
}

impl ServiceCollectionCatalogExt for ServiceCollection {
    fn add_services_from(&mut self, catalog: &ServiceCatalog) -> &mut Self {
        self.add_services_from_with(catalog, Lifetime::default())
    }

    fn add_services_from_with(
        &mut self,
        catalog: &ServiceCatalog,
        default_lifetime: Lifetime,
    ) -> &mut Self {
        let marker = TypeId::of::<dyn Service>();
        for entry in &catalog.entries {
            // One resolution per implementation, shared by all its bindings.
            let lifetime = entry.capabilities.resolve(default_lifetime);
            for binding in &entry.bindings {
                if binding.service_id == marker {
                    trace!(
                        implementation = entry.impl_name,
                        "skipping binding against the bare service marker"
                    );
                    continue;
                }
                debug!(
                    service = binding.service_name,
                    implementation = entry.impl_name,
                    lifetime = ?lifetime,
                    "registering cataloged service"
                );
                self.add(ServiceDescriptor::new(
                    Key::Trait(binding.service_id, binding.service_name),
                    lifetime,
                    Some(entry.impl_id),
                    Some(entry.impl_name),
                    binding.ctor.clone(),
                ));
            }
        }
        self
    }
}
