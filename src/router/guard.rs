//! Navigation guard: the allow/redirect rule table.
//!
//! DESIGN
//! ======
//! `guard` is pure. It reports whether the session must be cleared instead
//! of clearing it, so the rule table can be tested without storage and the
//! caller ([`super::Router`]) owns the side effect.
//!
//! Rules, first match wins:
//! 1. `/` redirects to the landing page when authenticated, else to `/login`.
//! 2. A protected page without a full session clears it and redirects to `/login`.
//! 3. `/login` while authenticated redirects to the landing page.
//! 4. `/register` and `/forgot-password` while authenticated redirect there too.
//! 5. An unregistered path renders the not-found page.
//! 6. Anything else renders.
//!
//! Every redirect target is a page the same session is allowed to render
//! (rule 2 targets `/login` after clearing), so a redirect is never followed
//! by another.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::registry::{FORGOT_PASSWORD_PATH, LOGIN_PATH, REGISTER_PATH, ROOT_PATH, RouteMatch, SETTINGS_PATH};
use crate::session::Session;

/// Where an authenticated user lands.
pub const LANDING_PATH: &str = SETTINGS_PATH;

/// Allow-or-redirect outcome of one guard evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationDecision {
    pub allow: bool,
    pub redirect_target: Option<String>,
}

impl NavigationDecision {
    #[must_use]
    pub fn allow() -> Self {
        Self { allow: true, redirect_target: None }
    }

    #[must_use]
    pub fn redirect(target: &str) -> Self {
        Self { allow: false, redirect_target: Some(target.to_owned()) }
    }
}

/// Which row of the rule table produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardRule {
    Root,
    AuthRequired,
    LoginWhileAuthenticated,
    GuestOnlyWhileAuthenticated,
    NotFound,
    Allowed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardOutcome {
    pub decision: NavigationDecision,
    pub rule: GuardRule,
    /// The caller must clear the stored session before redirecting.
    pub clear_session: bool,
}

impl GuardOutcome {
    fn allow(rule: GuardRule) -> Self {
        Self { decision: NavigationDecision::allow(), rule, clear_session: false }
    }

    fn redirect(rule: GuardRule, target: &str) -> Self {
        Self { decision: NavigationDecision::redirect(target), rule, clear_session: false }
    }
}

/// Evaluate the rule table for one navigation attempt.
#[must_use]
pub fn guard(route: &RouteMatch<'_>, session: &Session) -> GuardOutcome {
    let authenticated = session.is_authenticated();
    let path = route.path();

    if path == ROOT_PATH {
        let target = if authenticated { LANDING_PATH } else { LOGIN_PATH };
        return GuardOutcome::redirect(GuardRule::Root, target);
    }

    if route.requires_auth() && !authenticated {
        return GuardOutcome { clear_session: true, ..GuardOutcome::redirect(GuardRule::AuthRequired, LOGIN_PATH) };
    }

    if path == LOGIN_PATH && authenticated {
        return GuardOutcome::redirect(GuardRule::LoginWhileAuthenticated, LANDING_PATH);
    }

    if (path == REGISTER_PATH || path == FORGOT_PASSWORD_PATH) && authenticated {
        return GuardOutcome::redirect(GuardRule::GuestOnlyWhileAuthenticated, LANDING_PATH);
    }

    if matches!(route, RouteMatch::NotFound(_)) {
        return GuardOutcome::allow(GuardRule::NotFound);
    }

    GuardOutcome::allow(GuardRule::Allowed)
}
