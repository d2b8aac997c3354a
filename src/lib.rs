//! # scrutineer
//!
//! Convention-based service registration for dependency injection,
//! inspired by Scrutor and Microsoft.Extensions.DependencyInjection.
//!
//! Instead of wiring every service registration by hand, implementations
//! are entered once into a [`ServiceCatalog`] together with the service
//! traits they provide and the lifetime they want. A single registration
//! pass then appends one record per (service trait, implementation) pair
//! to a [`ServiceCollection`], resolving each implementation's lifetime
//! from its marker-trait claims with a caller-supplied fallback.
//!
//! ## Features
//!
//! - **Marker-trait conventions**: [`Service`] qualifies a trait as a
//!   registrable service interface; [`SingletonService`],
//!   [`ScopedService`], and [`TransientService`] declare lifetimes
//! - **Compile-time checked catalog**: no runtime reflection; every
//!   capability claim and service binding is verified by the compiler
//! - **Container-agnostic records**: [`ServiceDescriptor`] carries the
//!   service key, lifetime, implementation identity, and factory, ready
//!   for any container that implements the [`ResolverCore`] seam
//! - **Permissive by design**: duplicate registrations and multi-trait
//!   implementations are recorded as-is, never deduplicated
//!
//! ## Quick Start
//!
//! ```rust
//! use scrutineer::{
//!     Lifetime, Service, ServiceCatalog, ServiceCollection,
//!     ServiceCollectionCatalogExt, SingletonService,
//! };
//! use std::sync::Arc;
//!
//! // Define a service trait; the Service supertrait qualifies it for
//! // convention-based registration.
//! trait Greeter: Service {
//!     fn greet(&self, name: &str) -> String;
//! }
//!
//! struct EnglishGreeter;
//!
//! impl Service for EnglishGreeter {}
//! impl SingletonService for EnglishGreeter {}
//! impl Greeter for EnglishGreeter {
//!     fn greet(&self, name: &str) -> String {
//!         format!("Hello, {}!", name)
//!     }
//! }
//!
//! // Catalog the implementation once, at startup.
//! let mut catalog = ServiceCatalog::new();
//! catalog
//!     .add_type::<EnglishGreeter>()
//!     .as_singleton()
//!     .implements::<dyn Greeter, _>(|_| Arc::new(EnglishGreeter));
//!
//! // Run the registration pass.
//! let mut services = ServiceCollection::new();
//! services.add_services_from(&catalog);
//!
//! let record = &services.descriptors()[0];
//! assert!(record.type_name().contains("Greeter"));
//! assert_eq!(record.lifetime(), Lifetime::Singleton);
//! ```
//!
//! ## Lifetime conventions
//!
//! A lifetime claim is made on the catalog entry (`as_singleton()`,
//! `as_scoped()`, `as_transient()`), and each claim is bounded on the
//! matching marker trait, so an implementation cannot claim a lifetime
//! it does not declare. When an implementation makes several claims the
//! precedence is singleton, then scoped, then transient; with no claim
//! the pass applies the caller's default (transient unless given).
//!
//! ## Consuming the records
//!
//! This crate ships no container. A container consumes the accumulated
//! [`ServiceDescriptor`] records and implements [`ResolverCore`]; the
//! [`Resolver`] conveniences (`get`, `get_trait`, and the panicking
//! `get_required` variants) come for free on top and are what service
//! factories use to pull their dependencies.

pub mod catalog;
pub mod collection;
pub mod descriptors;
pub mod error;
pub mod key;
pub mod lifetime;
pub mod markers;
pub mod registrar;
pub mod traits;

pub use catalog::{ServiceCatalog, TypeRegistration};
pub use collection::ServiceCollection;
pub use descriptors::ServiceDescriptor;
pub use error::{DiError, DiResult};
pub use key::{key_of_trait, key_of_type, Key};
pub use lifetime::Lifetime;
pub use markers::{Capabilities, ScopedService, Service, SingletonService, TransientService};
pub use registrar::ServiceCollectionCatalogExt;
pub use traits::{AnyArc, Resolver, ResolverCore};
