//! Resolver traits: the seam between registration records and the
//! container that consumes them.

use std::any::Any;
use std::sync::Arc;

use crate::error::{DiError, DiResult};
use crate::key::{key_of_trait, key_of_type, Key};

/// Type-erased service instance as transported across the seam.
///
/// Concrete services travel as `Arc<T>` erased to `Arc<dyn Any>`; trait
/// objects travel as `Arc<Arc<dyn Trait>>` so the outer `Arc` has a
/// sized payload to downcast.
pub type AnyArc = Arc<dyn Any + Send + Sync>;

/// Core object-safe resolution seam.
///
/// Consuming containers implement this one method; service factories
/// receive it as `&dyn ResolverCore` and use the generic conveniences of
/// [`Resolver`] (blanket-implemented on top) to pull their dependencies.
/// This crate ships no container of its own.
pub trait ResolverCore: Send + Sync {
    /// Resolves a single service by key.
    fn resolve_any(&self, key: &Key) -> DiResult<AnyArc>;
}

/// High-level resolver interface with generic, type-safe methods.
///
/// Blanket-implemented for every [`ResolverCore`], including the
/// `&dyn ResolverCore` handed to service factories, so factories can
/// write `r.get_required_trait::<dyn UserStore>()` directly.
///
/// # Examples
///
/// ```rust
/// use scrutineer::{AnyArc, DiError, DiResult, Key, Resolver, ResolverCore};
/// use std::sync::Arc;
///
/// // A deliberately tiny container: one pre-built u32.
/// struct FixedProvider(Arc<u32>);
///
/// impl ResolverCore for FixedProvider {
///     fn resolve_any(&self, key: &Key) -> DiResult<AnyArc> {
///         if *key == scrutineer::key_of_type::<u32>() {
///             Ok(self.0.clone())
///         } else {
///             Err(DiError::NotFound(key.display_name()))
///         }
///     }
/// }
///
/// let provider = FixedProvider(Arc::new(42));
/// assert_eq!(*provider.get::<u32>().unwrap(), 42);
/// assert!(provider.get::<String>().is_err());
/// ```
pub trait Resolver: ResolverCore {
    /// Resolves a concrete service type.
    fn get<T: 'static + Send + Sync>(&self) -> DiResult<Arc<T>> {
        let any = self.resolve_any(&key_of_type::<T>())?;
        any.downcast::<T>()
            .map_err(|_| DiError::TypeMismatch(std::any::type_name::<T>()))
    }

    /// Resolves a service trait implementation.
    fn get_trait<S: ?Sized + 'static + Send + Sync>(&self) -> DiResult<Arc<S>>
    where
        Arc<S>: 'static,
    {
        let any = self.resolve_any(&key_of_trait::<S>())?;
        // Trait objects are stored as Arc<Arc<S>>; unwrap the outer Arc.
        any.downcast::<Arc<S>>()
            .map(|outer| (*outer).clone())
            .map_err(|_| DiError::TypeMismatch(std::any::type_name::<S>()))
    }

    /// Resolves a concrete service type, panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics if the service cannot be resolved.
    fn get_required<T: 'static + Send + Sync>(&self) -> Arc<T> {
        self.get::<T>()
            .unwrap_or_else(|e| panic!("Failed to resolve {}: {:?}", std::any::type_name::<T>(), e))
    }

    /// Resolves a service trait implementation, panicking on failure.
    ///
    /// # Panics
    ///
    /// Panics if the trait cannot be resolved.
    fn get_required_trait<S: ?Sized + 'static + Send + Sync>(&self) -> Arc<S>
    where
        Arc<S>: 'static,
    {
        self.get_trait::<S>()
            .unwrap_or_else(|e| panic!("Failed to resolve trait {}: {:?}", std::any::type_name::<S>(), e))
    }
}

impl<R: ?Sized + ResolverCore> Resolver for R {}
