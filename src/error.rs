//! Error types shared across the registration seam.

use std::fmt;

/// Errors surfaced through the resolution seam.
///
/// Registration itself is infallible; failures appear later, when a
/// consuming container (or a service factory resolving its dependencies)
/// cannot produce an instance for a key. `DiError` is the vocabulary
/// containers, factories, and this crate's [`Resolver`](crate::Resolver)
/// conveniences share for those failures.
///
/// # Examples
///
/// ```rust
/// use scrutineer::DiError;
///
/// let not_found = DiError::NotFound("myapp::UserStore");
/// assert_eq!(not_found.to_string(), "Service not found: myapp::UserStore");
///
/// let mismatch = DiError::TypeMismatch("alloc::string::String");
/// assert_eq!(mismatch.to_string(), "Type mismatch for: alloc::string::String");
/// ```
#[derive(Debug, Clone)]
pub enum DiError {
    /// Service not registered
    NotFound(&'static str),
    /// Type downcast failed
    TypeMismatch(&'static str),
}

impl fmt::Display for DiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiError::NotFound(name) => write!(f, "Service not found: {}", name),
            DiError::TypeMismatch(name) => write!(f, "Type mismatch for: {}", name),
        }
    }
}

impl std::error::Error for DiError {}

/// Result type for DI operations.
///
/// A convenience alias for `Result<T, DiError>` used throughout the
/// crate's resolution seam and by factories that resolve dependencies.
pub type DiResult<T> = Result<T, DiError>;
