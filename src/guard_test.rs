use std::cell::{Cell, RefCell};
use std::str::FromStr;

use futures::executor::block_on;

use super::*;
use crate::auth::session::SessionToken;

#[derive(Default)]
struct MemorySession {
    token: RefCell<Option<String>>,
}

impl MemorySession {
    fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_owned())),
        }
    }
}

impl SessionProvider for MemorySession {
    fn token(&self) -> Option<SessionToken> {
        self.token.borrow().clone().and_then(SessionToken::new)
    }

    fn store(&self, token: &SessionToken) -> anyhow::Result<()> {
        *self.token.borrow_mut() = Some(token.as_str().to_owned());
        Ok(())
    }

    fn clear(&self) -> anyhow::Result<()> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}

#[derive(Default)]
struct FakeAuth {
    fail_refresh: bool,
    refreshes: Cell<usize>,
    maintenance_checks: Cell<usize>,
}

impl FakeAuth {
    fn failing() -> Self {
        Self {
            fail_refresh: true,
            ..Self::default()
        }
    }
}

impl AuthService for FakeAuth {
    async fn refresh_token(&self) -> anyhow::Result<()> {
        self.refreshes.set(self.refreshes.get() + 1);
        if self.fail_refresh {
            anyhow::bail!("refresh rejected");
        }
        Ok(())
    }

    fn maintenance(&self) {
        self.maintenance_checks.set(self.maintenance_checks.get() + 1);
    }
}

fn navigate(guard: &NavigationGuard<MemorySession, FakeAuth>, path: &str) -> Navigation {
    let Ok(to) = Route::from_str(path) else {
        panic!("unparseable path {path}");
    };
    block_on(guard.before_each(&to, None))
}

fn protected_routes() -> Vec<Route> {
    Route::flattened()
        .into_iter()
        .filter(|d| d.meta.required_auth)
        .map(|d| d.route)
        .collect()
}

fn public_routes() -> Vec<Route> {
    Route::flattened()
        .into_iter()
        .filter(|d| !d.meta.required_auth)
        .map(|d| d.route)
        .collect()
}

// =============================================================
// Branch 1: protected route without a token
// =============================================================

#[test]
fn protected_routes_without_token_redirect_to_login() {
    let session = MemorySession::default();
    let auth = FakeAuth::default();
    let guard = NavigationGuard::new(session, auth);

    for route in protected_routes() {
        let decision = block_on(guard.before_each(&route, None));
        assert_eq!(decision, Navigation::Redirect(Route::Login {}), "{}", route.name());
    }
    assert_eq!(guard.auth.refreshes.get(), 0);
}

#[test]
fn blank_token_counts_as_missing() {
    let session = MemorySession::with_token("  ");
    let auth = FakeAuth::default();
    let guard = NavigationGuard::new(session, auth);

    assert_eq!(navigate(&guard, "/vm"), Navigation::Redirect(Route::Login {}));
}

#[test]
fn root_without_token_redirects_to_login() {
    let session = MemorySession::default();
    let auth = FakeAuth::default();
    let guard = NavigationGuard::new(session, auth);

    assert_eq!(navigate(&guard, "/"), Navigation::Redirect(Route::Login {}));
    assert_eq!(guard.auth.refreshes.get(), 0);
}

// =============================================================
// Branch 2: root with a token
// =============================================================

#[test]
fn root_with_token_refreshes_then_goes_home() {
    let session = MemorySession::with_token("abc");
    let auth = FakeAuth::default();
    let guard = NavigationGuard::new(session, auth);

    assert_eq!(navigate(&guard, "/"), Navigation::Redirect(Route::Home {}));
    assert_eq!(guard.auth.refreshes.get(), 1);
}

#[test]
fn root_refresh_failure_is_ignored_by_default() {
    let session = MemorySession::with_token("abc");
    let auth = FakeAuth::failing();
    let guard = NavigationGuard::new(session, auth);

    assert_eq!(navigate(&guard, "/"), Navigation::Redirect(Route::Home {}));
    assert_eq!(guard.auth.refreshes.get(), 1);
}

#[test]
fn root_refresh_failure_redirects_to_login_when_required() {
    let session = MemorySession::with_token("abc");
    let auth = FakeAuth::failing();
    let guard = NavigationGuard::new(session, auth).with_refresh_policy(RefreshPolicy::RequireSuccess);

    assert_eq!(navigate(&guard, "/"), Navigation::Redirect(Route::Login {}));
}

// =============================================================
// Branch 3: protected route with a token
// =============================================================

#[test]
fn protected_routes_with_token_refresh_and_proceed() {
    let session = MemorySession::with_token("abc");
    let auth = FakeAuth::default();
    let guard = NavigationGuard::new(session, auth);

    let routes: Vec<Route> = protected_routes().into_iter().filter(|r| !r.is_root()).collect();
    for route in &routes {
        assert_eq!(block_on(guard.before_each(route, None)), Navigation::Proceed, "{}", route.name());
    }
    assert_eq!(guard.auth.refreshes.get(), routes.len());
}

#[test]
fn protected_refresh_failure_still_proceeds_by_default() {
    let session = MemorySession::with_token("abc");
    let auth = FakeAuth::failing();
    let guard = NavigationGuard::new(session, auth);

    assert_eq!(navigate(&guard, "/profile"), Navigation::Proceed);
}

#[test]
fn protected_refresh_failure_redirects_when_required() {
    let session = MemorySession::with_token("abc");
    let auth = FakeAuth::failing();
    let guard = NavigationGuard::new(session, auth).with_refresh_policy(RefreshPolicy::RequireSuccess);

    assert_eq!(navigate(&guard, "/profile"), Navigation::Redirect(Route::Login {}));
}

#[test]
fn successful_refresh_with_strict_policy_proceeds() {
    let session = MemorySession::with_token("abc");
    let auth = FakeAuth::default();
    let guard = NavigationGuard::new(session, auth).with_refresh_policy(RefreshPolicy::RequireSuccess);

    assert_eq!(navigate(&guard, "/k8s"), Navigation::Proceed);
}

// =============================================================
// Branch 4: public routes
// =============================================================

#[test]
fn public_routes_proceed_without_token() {
    let session = MemorySession::default();
    let auth = FakeAuth::default();
    let guard = NavigationGuard::new(session, auth);

    for route in public_routes() {
        assert_eq!(block_on(guard.before_each(&route, None)), Navigation::Proceed, "{}", route.name());
    }
    assert_eq!(guard.auth.refreshes.get(), 0);
}

#[test]
fn public_routes_proceed_with_token_without_refresh() {
    let session = MemorySession::with_token("abc");
    let auth = FakeAuth::default();
    let guard = NavigationGuard::new(session, auth);

    for route in public_routes() {
        assert_eq!(block_on(guard.before_each(&route, None)), Navigation::Proceed, "{}", route.name());
    }
    assert_eq!(guard.auth.refreshes.get(), 0);
}

#[test]
fn unknown_path_proceeds_to_not_found() {
    let session = MemorySession::default();
    let auth = FakeAuth::default();
    let guard = NavigationGuard::new(session, auth);

    assert_eq!(navigate(&guard, "/nonexistent-xyz"), Navigation::Proceed);
}

// =============================================================
// Cross-cutting
// =============================================================

#[test]
fn maintenance_runs_once_per_navigation_in_every_branch() {
    let session = MemorySession::default();
    let auth = FakeAuth::default();
    let guard = NavigationGuard::new(session, auth);

    navigate(&guard, "/vm");
    navigate(&guard, "/about");
    guard.session.store(&SessionToken::new("abc").unwrap()).unwrap();
    navigate(&guard, "/");
    navigate(&guard, "/vm");

    assert_eq!(guard.auth.maintenance_checks.get(), 4);
}

#[test]
fn same_inputs_give_same_decision() {
    let session = MemorySession::with_token("abc");
    let auth = FakeAuth::default();
    let guard = NavigationGuard::new(session, auth);
    let from = Route::About {};

    for route in Route::flattened().into_iter().map(|d| d.route) {
        let first = block_on(guard.before_each(&route, Some(&from)));
        let second = block_on(guard.before_each(&route, Some(&from)));
        assert_eq!(first, second, "{}", route.name());
    }
}

#[test]
fn token_is_read_on_every_call() {
    let session = MemorySession::with_token("abc");
    let auth = FakeAuth::default();
    let guard = NavigationGuard::new(session, auth);

    assert_eq!(navigate(&guard, "/home"), Navigation::Proceed);

    guard.session.clear().unwrap();
    assert_eq!(navigate(&guard, "/home"), Navigation::Redirect(Route::Login {}));
}

#[test]
fn logout_with_token_does_not_refresh() {
    let session = MemorySession::with_token("abc");
    let auth = FakeAuth::failing();
    let guard = NavigationGuard::new(session, auth).with_refresh_policy(RefreshPolicy::RequireSuccess);

    assert_eq!(navigate(&guard, "/logout"), Navigation::Proceed);
    assert_eq!(guard.auth.refreshes.get(), 0);
}

// =============================================================
// Settling resolved decisions
// =============================================================

#[test]
fn proceed_for_pending_route_is_admitted() {
    let pending = Route::Vm {};
    let settled = Navigation::Proceed.settle(Some(&pending), Route::Vm {});
    assert_eq!(settled, Settled::Admit(Route::Vm {}));
}

#[test]
fn redirect_for_pending_route_is_applied() {
    let pending = Route::Root {};
    let settled = Navigation::Redirect(Route::Home {}).settle(Some(&pending), Route::Root {});
    assert_eq!(settled, Settled::Redirect(Route::Home {}));
}

#[test]
fn late_proceed_for_superseded_route_is_dropped() {
    let pending = Route::About {};
    let settled = Navigation::Proceed.settle(Some(&pending), Route::Vm {});
    assert_eq!(settled, Settled::Stale);
}

#[test]
fn late_redirect_for_superseded_route_is_dropped() {
    let pending = Route::Profile {};
    let settled = Navigation::Redirect(Route::Login {}).settle(Some(&pending), Route::K8s {});
    assert_eq!(settled, Settled::Stale);
}

#[test]
fn decision_without_pending_navigation_is_dropped() {
    assert_eq!(Navigation::Proceed.settle(None, Route::Home {}), Settled::Stale);
}

#[test]
fn only_the_admitted_route_renders() {
    let admitted = Route::Home {};
    assert!(is_admitted(Some(&admitted), &Route::Home {}));
    assert!(!is_admitted(Some(&admitted), &Route::Profile {}));
    assert!(!is_admitted(None, &Route::Home {}));
}
