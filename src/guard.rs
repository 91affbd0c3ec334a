//! Pre-navigation authorization.
//!
//! The guard decides, for each attempted navigation, whether the router may
//! render the target, must go somewhere else first, or should refresh the
//! session on the way. It keeps no state between calls: the token is read
//! again every time because another tab may have replaced or removed it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use dioxus::logger::tracing;

use crate::auth::service::AuthService;
use crate::auth::session::SessionProvider;
use crate::router::Route;

/// What to do when the session refresh in front of a protected route fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Log the failure and navigate anyway.
    #[default]
    Ignore,
    /// Send the user to the login page instead.
    RequireSuccess,
}

impl RefreshPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ignore" => Some(Self::Ignore),
            "require-success" => Some(Self::RequireSuccess),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    Proceed,
    Redirect(Route),
}

/// A resolved decision, checked against the navigation still in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum Settled {
    Admit(Route),
    Redirect(Route),
    /// The user moved on while the decision was pending.
    Stale,
}

impl Navigation {
    pub fn settle(self, pending: Option<&Route>, evaluated: Route) -> Settled {
        if pending != Some(&evaluated) {
            return Settled::Stale;
        }

        match self {
            Navigation::Proceed => Settled::Admit(evaluated),
            Navigation::Redirect(target) => Settled::Redirect(target),
        }
    }
}

/// The matched page renders only once the guard admitted that exact route.
pub fn is_admitted(admitted: Option<&Route>, current: &Route) -> bool {
    admitted == Some(current)
}

pub struct NavigationGuard<S, A> {
    session: S,
    auth: A,
    policy: RefreshPolicy,
}

impl<S, A> NavigationGuard<S, A>
where
    S: SessionProvider,
    A: AuthService,
{
    pub fn new(session: S, auth: A) -> Self {
        Self {
            session,
            auth,
            policy: RefreshPolicy::default(),
        }
    }

    pub fn with_refresh_policy(mut self, policy: RefreshPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub async fn before_each(&self, to: &Route, from: Option<&Route>) -> Navigation {
        let has_token = self.session.token().is_some();
        self.auth.maintenance();

        let required_auth = to.meta().required_auth;

        let decision = if required_auth && !has_token {
            Navigation::Redirect(Route::Login {})
        } else if to.is_root() && has_token {
            self.refresh_then(Navigation::Redirect(Route::Home {})).await
        } else if required_auth {
            self.refresh_then(Navigation::Proceed).await
        } else {
            Navigation::Proceed
        };

        let origin = from.map(Route::name).unwrap_or("-");
        let target = to.name();
        tracing::debug!("navigation {origin} -> {target}: {decision:?}");

        decision
    }

    async fn refresh_then(&self, decision: Navigation) -> Navigation {
        let Err(error) = self.auth.refresh_token().await else {
            return decision;
        };

        tracing::warn!("failed to refresh token: {error:?}");

        match self.policy {
            RefreshPolicy::Ignore => decision,
            RefreshPolicy::RequireSuccess => Navigation::Redirect(Route::Login {}),
        }
    }
}
