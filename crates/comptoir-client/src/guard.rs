// Route guard: gates navigation to non-public routes
//
// A synchronous gate with an asynchronous check — the caller suspends on
// `check` until the verification call resolves, so the decision is always
// final before any page logic runs.

use std::sync::Arc;

use comptoir_core::is_public;

use crate::client::ApiClient;
use crate::verify::verify_token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
}

pub struct RouteGuard {
    client: Arc<ApiClient>,
}

impl RouteGuard {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Decide whether navigation to `path` may proceed.
    ///
    /// Public routes pass unconditionally. Otherwise the cookie-mirror token
    /// is required and must verify against the backend; a missing token
    /// redirects without any network call, and any verification failure
    /// tears the session down (fail-closed).
    pub async fn check(&self, path: &str) -> GuardDecision {
        if is_public(path) {
            return GuardDecision::Allow;
        }

        let session = self.client.session();
        let Some(token) = session.cookie_token() else {
            tracing::warn!("no token found, redirecting to login");
            return GuardDecision::RedirectToLogin;
        };

        if verify_token(&self.client, &token).await {
            tracing::debug!("access granted to {path}");
            GuardDecision::Allow
        } else {
            tracing::warn!("token invalid or expired, redirecting to login");
            session.logout();
            GuardDecision::RedirectToLogin
        }
    }
}
