//! Navigation authorization.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host UI calls [`Router::navigate`] once per navigation attempt, before
//! the target page commits. The router resolves the path against the page
//! registry, reads the session fresh from the store, evaluates [`guard`] and
//! applies the session-clearing side effect of the auth rule.

mod guard;
pub mod registry;


pub use guard::{GuardOutcome, GuardRule, LANDING_PATH, NavigationDecision, guard};
pub use registry::{RouteDescriptor, RouteMatch, RouteRegistry, normalize_path};

use crate::session::{SessionStorage, SessionStore};

/// Upper bound for [`Router::settle`]. The rule table settles after one
/// redirect; the slack only matters for custom registries.
pub const MAX_REDIRECTS: usize = 4;

/// Outcome of one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Normalized path that was evaluated.
    pub path: String,
    /// Registered page for `path`, or `None` for the not-found page.
    pub route: Option<RouteDescriptor>,
    pub decision: NavigationDecision,
    pub rule: GuardRule,
}

impl Navigation {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.decision.allow && self.route.is_none()
    }
}

/// Registry plus session, threaded explicitly instead of read from globals.
pub struct Router<S> {
    registry: RouteRegistry,
    session: SessionStore<S>,
}

impl<S: SessionStorage> Router<S> {
    /// Router over the application's page registry.
    #[must_use]
    pub fn new(session: SessionStore<S>) -> Self {
        Self::with_registry(RouteRegistry::default(), session)
    }

    #[must_use]
    pub fn with_registry(registry: RouteRegistry, session: SessionStore<S>) -> Self {
        Self { registry, session }
    }

    #[must_use]
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Decide one navigation attempt.
    pub fn navigate(&self, path: &str) -> Navigation {
        let route = self.registry.resolve(path);
        let session = self.session.get_session();
        let outcome = guard(&route, &session);

        if outcome.clear_session {
            self.session.clear_session();
        }

        tracing::debug!(
            path = route.path(),
            rule = ?outcome.rule,
            allow = outcome.decision.allow,
            redirect = outcome.decision.redirect_target.as_deref(),
            "navigation evaluated"
        );

        Navigation {
            path: route.path().to_owned(),
            route: match route {
                RouteMatch::Page(descriptor) => Some(*descriptor),
                RouteMatch::NotFound(_) => None,
            },
            decision: outcome.decision,
            rule: outcome.rule,
        }
    }

    /// Follow redirects from `path` until a page is allowed.
    ///
    /// Stops after [`MAX_REDIRECTS`] and returns the last evaluation.
    pub fn settle(&self, path: &str) -> Navigation {
        let mut navigation = self.navigate(path);
        for _ in 0..MAX_REDIRECTS {
            let Some(target) = navigation.decision.redirect_target.clone() else {
                break;
            };
            navigation = self.navigate(&target);
        }
        navigation
    }
}
