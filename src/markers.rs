//! Marker traits driving convention-based registration.
//!
//! Four markers make up the convention surface: the base [`Service`]
//! marker that qualifies a trait as a registrable service interface, and
//! three lifetime markers implementations use to declare how they want
//! to be cached. Lifetime markers are claimed on a catalog entry through
//! [`TypeRegistration`](crate::TypeRegistration), which bounds each
//! claim on the matching marker so the claim cannot be made without the
//! trait actually being implemented.

use crate::lifetime::Lifetime;

/// Base marker for registrable service traits.
///
/// A service trait qualifies for convention-based registration by naming
/// `Service` as a supertrait, and concrete implementations implement it
/// alongside the service trait. The marker itself is never a
/// registration target: bindings declared against `dyn Service` are
/// skipped by the registration pass.
///
/// `Send + Sync` is required up front so every registered trait object
/// can be shared across threads by the consuming container.
///
/// # Examples
///
/// ```rust
/// use scrutineer::Service;
///
/// trait Mailer: Service {
///     fn send(&self, to: &str, body: &str);
/// }
///
/// struct SmtpMailer;
///
/// impl Service for SmtpMailer {}
/// impl Mailer for SmtpMailer {
///     fn send(&self, _to: &str, _body: &str) {}
/// }
/// ```
pub trait Service: Send + Sync {}

/// Lifetime marker: the implementation wants one shared instance for the
/// whole application.
///
/// Lifetime markers tag implementation types, not service traits, and do
/// not imply [`Service`].
pub trait SingletonService {}

/// Lifetime marker: the implementation wants one instance per scope.
pub trait ScopedService {}

/// Lifetime marker: the implementation wants a fresh instance per
/// resolution.
pub trait TransientService {}

/// Lifetime capability set claimed by an implementation type.
///
/// Each flag records one lifetime-marker claim made on a catalog entry.
/// Claims are combinable; [`Capabilities::resolve`] picks the effective
/// lifetime with a fixed precedence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Singleton claim, via [`SingletonService`].
    pub singleton: bool,
    /// Scoped claim, via [`ScopedService`].
    pub scoped: bool,
    /// Transient claim, via [`TransientService`].
    pub transient: bool,
}

impl Capabilities {
    /// Resolves the effective lifetime for an implementation.
    ///
    /// Precedence: singleton, then scoped, then transient; with no claim
    /// at all the caller's default applies.
    pub fn resolve(self, default_lifetime: Lifetime) -> Lifetime {
        if self.singleton {
            Lifetime::Singleton
        } else if self.scoped {
            Lifetime::Scoped
        } else if self.transient {
            Lifetime::Transient
        } else {
            default_lifetime
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclaimed_capabilities_fall_back_to_default() {
        let caps = Capabilities::default();
        assert_eq!(caps.resolve(Lifetime::Singleton), Lifetime::Singleton);
        assert_eq!(caps.resolve(Lifetime::Scoped), Lifetime::Scoped);
        assert_eq!(caps.resolve(Lifetime::Transient), Lifetime::Transient);
    }

    #[test]
    fn single_claim_overrides_default() {
        let caps = Capabilities { scoped: true, ..Capabilities::default() };
        assert_eq!(caps.resolve(Lifetime::Transient), Lifetime::Scoped);
        assert_eq!(caps.resolve(Lifetime::Singleton), Lifetime::Scoped);
    }

    #[test]
    fn singleton_claim_wins_over_all_others() {
        let caps = Capabilities { singleton: true, scoped: true, transient: true };
        assert_eq!(caps.resolve(Lifetime::Transient), Lifetime::Singleton);
    }

    #[test]
    fn scoped_claim_wins_over_transient_claim() {
        let caps = Capabilities { scoped: true, transient: true, ..Capabilities::default() };
        assert_eq!(caps.resolve(Lifetime::Singleton), Lifetime::Scoped);
    }
}
