// Navigation shell: current route plus the guarded entry point
//
// Each navigation carries a generation number; when a guard check resolves
// under a stale generation its outcome is discarded, so a superseded
// navigation cannot move the shell.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use comptoir_core::{Navigator, LOGIN_ROUTE};
use parking_lot::Mutex;

use crate::client::ApiClient;
use crate::guard::{GuardDecision, RouteGuard};

/// Current-route state shared by the router and the session store's
/// logout redirect.
pub struct RouteCell {
    current: Mutex<String>,
}

impl RouteCell {
    pub fn new() -> Self {
        Self {
            current: Mutex::new("/".to_string()),
        }
    }

    pub fn current(&self) -> String {
        self.current.lock().clone()
    }
}

impl Default for RouteCell {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouteCell {
    fn navigate(&self, path: &str) {
        tracing::info!("navigating to {path}");
        *self.current.lock() = path.to_string();
    }
}

/// Outcome of a guarded navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The guard allowed the navigation
    Moved,
    /// The guard redirected to the login route
    RedirectedToLogin,
    /// A later navigation started before this one's check resolved;
    /// the outcome was discarded
    Superseded,
}

pub struct Router {
    guard: RouteGuard,
    cell: Arc<RouteCell>,
    generation: AtomicU64,
}

impl Router {
    pub fn new(client: Arc<ApiClient>, cell: Arc<RouteCell>) -> Self {
        Self {
            guard: RouteGuard::new(client),
            cell,
            generation: AtomicU64::new(0),
        }
    }

    pub fn current_route(&self) -> String {
        self.cell.current()
    }

    /// Navigate to `path`, suspending until the guard decision is final.
    pub async fn open(&self, path: &str) -> NavOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let decision = self.guard.check(path).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("navigation to {path} superseded, discarding");
            return NavOutcome::Superseded;
        }

        match decision {
            GuardDecision::Allow => {
                self.cell.navigate(path);
                NavOutcome::Moved
            }
            GuardDecision::RedirectToLogin => {
                self.cell.navigate(LOGIN_ROUTE);
                NavOutcome::RedirectedToLogin
            }
        }
    }
}
