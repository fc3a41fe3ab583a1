// Session store: single source of truth for the caller's authentication state
//
// All mutation goes through the operations below; the mirrors are never
// written from anywhere else. Mirror write failures are logged and skipped
// rather than surfaced — the in-memory session stays authoritative and the
// mirrors catch up on the next write or the next startup reconciliation.

use std::sync::Arc;

use comptoir_core::{Navigator, UserProfile, LOGIN_ROUTE};
use parking_lot::Mutex;

use crate::backend::{StateBackend, AUTH_COOKIE, TOKEN_KEY, USER_KEY};

#[derive(Default)]
struct SessionState {
    token: Option<String>,
    user: Option<UserProfile>,
    /// Bumped on every token change and teardown; lets late 401 handlers
    /// detect that the token they saw has since been replaced.
    generation: u64,
}

/// Holds the current token and user profile, mirrored into the cookie and
/// durable stores on every mutation.
pub struct SessionStore {
    backend: StateBackend,
    navigator: Arc<dyn Navigator>,
    state: Mutex<SessionState>,
}

impl SessionStore {
    /// Open the store and reconcile the mirrors.
    ///
    /// The in-memory token starts from the cookie; a durable token overrides
    /// it and is re-mirrored into the cookie (the cookie is the shorter-lived
    /// of the two and may have been dropped by policy). The stored profile is
    /// restored last.
    pub fn open(backend: StateBackend, navigator: Arc<dyn Navigator>) -> Self {
        let mut state = SessionState::default();

        match backend.read_cookie(AUTH_COOKIE) {
            Ok(cookie) => state.token = cookie,
            Err(e) => tracing::warn!("could not read session cookie: {e}"),
        }

        match backend.read_entry(TOKEN_KEY) {
            Ok(Some(stored)) => {
                if state.token.as_deref() != Some(stored.as_str()) {
                    if let Err(e) = backend.write_cookie(AUTH_COOKIE, &stored) {
                        tracing::warn!("could not re-mirror token into cookie: {e}");
                    }
                }
                state.token = Some(stored);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("could not read stored token: {e}"),
        }

        let store = Self {
            backend,
            navigator,
            state: Mutex::new(state),
        };
        store.restore_user();
        store
    }

    /// Store `token` as the current token and write through to both mirrors.
    pub fn set_token(&self, token: &str) {
        let mut state = self.state.lock();
        state.token = Some(token.to_string());
        state.generation += 1;
        if let Err(e) = self.backend.write_cookie(AUTH_COOKIE, token) {
            tracing::warn!("could not mirror token into cookie: {e}");
        }
        if let Err(e) = self.backend.write_entry(TOKEN_KEY, token) {
            tracing::warn!("could not mirror token into durable storage: {e}");
        }
    }

    /// Store `profile` and mirror it into durable storage as JSON.
    pub fn set_user(&self, profile: UserProfile) {
        let mut state = self.state.lock();
        match serde_json::to_string(&profile) {
            Ok(json) => {
                if let Err(e) = self.backend.write_entry(USER_KEY, &json) {
                    tracing::warn!("could not mirror user profile: {e}");
                }
            }
            Err(e) => tracing::warn!("could not serialize user profile: {e}"),
        }
        state.user = Some(profile);
    }

    /// Load a previously stored profile into memory, if any.
    ///
    /// Malformed stored data is logged and treated as absent.
    pub fn restore_user(&self) {
        let stored = match self.backend.read_entry(USER_KEY) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("could not read stored user profile: {e}");
                return;
            }
        };
        if let Some(json) = stored {
            match serde_json::from_str::<UserProfile>(&json) {
                Ok(profile) => self.state.lock().user = Some(profile),
                Err(e) => tracing::warn!("stored user profile is malformed, ignoring: {e}"),
            }
        }
    }

    /// Clear the session and both mirrors, then navigate to the login route.
    ///
    /// Idempotent: when already logged out only the navigation happens.
    /// Returns whether this call performed the live teardown, so concurrent
    /// failure handlers can tell which of them actually cleared the session.
    pub fn logout(&self) -> bool {
        let torn_down = self.teardown(None);
        self.navigator.navigate(LOGIN_ROUTE);
        torn_down
    }

    /// Like [`logout`](Self::logout), but only tears down while the session
    /// is still at `generation` — a 401 that raced a re-login must not
    /// destroy the replacement session. No navigation happens on the stale
    /// path.
    pub fn logout_if_generation(&self, generation: u64) -> bool {
        let torn_down = self.teardown(Some(generation));
        if torn_down {
            self.navigator.navigate(LOGIN_ROUTE);
        } else {
            tracing::debug!("skipping stale session teardown");
        }
        torn_down
    }

    fn teardown(&self, expected_generation: Option<u64>) -> bool {
        let mut state = self.state.lock();
        if let Some(expected) = expected_generation {
            if state.generation != expected {
                return false;
            }
        }
        if state.token.is_none() && state.user.is_none() {
            return false;
        }
        state.token = None;
        state.user = None;
        state.generation += 1;
        if let Err(e) = self.backend.remove_cookie(AUTH_COOKIE) {
            tracing::warn!("could not clear session cookie: {e}");
        }
        if let Err(e) = self.backend.remove_entry(TOKEN_KEY) {
            tracing::warn!("could not clear stored token: {e}");
        }
        if let Err(e) = self.backend.remove_entry(USER_KEY) {
            tracing::warn!("could not clear stored user profile: {e}");
        }
        true
    }

    pub fn token(&self) -> Option<String> {
        self.state.lock().token.clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.lock().user.clone()
    }

    /// Current session generation; see [`logout_if_generation`](Self::logout_if_generation).
    pub fn generation(&self) -> u64 {
        self.state.lock().generation
    }

    /// Token as seen through the cookie mirror — the route guard's read path.
    /// An expired or unreadable cookie reads as absent.
    pub fn cookie_token(&self) -> Option<String> {
        match self.backend.read_cookie(AUTH_COOKIE) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("could not read session cookie: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingNavigator {
        routes: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.routes.lock().push(path.to_string());
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: 1,
            username: "alice".to_string(),
            email: None,
            role: None,
        }
    }

    fn open(backend: &StateBackend) -> (SessionStore, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let store = SessionStore::open(backend.clone(), navigator.clone());
        (store, navigator)
    }

    #[test]
    fn test_set_token_writes_both_mirrors() {
        let backend = StateBackend::in_memory();
        let (store, _) = open(&backend);

        store.set_token("abc123");

        assert_eq!(store.cookie_token(), Some("abc123".to_string()));
        assert_eq!(
            backend.read_entry(TOKEN_KEY).unwrap(),
            Some("abc123".to_string())
        );
        assert_eq!(store.token(), Some("abc123".to_string()));
    }

    #[test]
    fn test_logout_clears_everything_and_navigates() {
        let backend = StateBackend::in_memory();
        let (store, navigator) = open(&backend);

        store.set_token("abc123");
        store.set_user(profile());

        assert!(store.logout());
        assert_eq!(store.token(), None);
        assert_eq!(store.user(), None);
        assert_eq!(store.cookie_token(), None);
        assert_eq!(backend.read_entry(TOKEN_KEY).unwrap(), None);
        assert_eq!(backend.read_entry(USER_KEY).unwrap(), None);
        assert_eq!(navigator.routes.lock().as_slice(), ["/login"]);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let backend = StateBackend::in_memory();
        let (store, navigator) = open(&backend);

        store.set_token("abc123");
        assert!(store.logout());
        // second call finds nothing to tear down but still navigates
        assert!(!store.logout());
        assert_eq!(store.token(), None);
        assert_eq!(navigator.routes.lock().as_slice(), ["/login", "/login"]);
    }

    #[test]
    fn test_restore_user_after_restart() {
        let backend = StateBackend::in_memory();
        {
            let (store, _) = open(&backend);
            store.set_token("abc123");
            store.set_user(profile());
        }

        // simulated restart over the same durable storage
        let (reopened, _) = open(&backend);
        assert_eq!(reopened.user(), Some(profile()));
        assert_eq!(reopened.token(), Some("abc123".to_string()));
    }

    #[test]
    fn test_startup_promotes_durable_token_into_cookie() {
        let backend = StateBackend::in_memory();
        // durable token present, cookie gone (e.g. dropped by policy)
        backend.write_entry(TOKEN_KEY, "durable-tok").unwrap();

        let (store, _) = open(&backend);
        assert_eq!(store.token(), Some("durable-tok".to_string()));
        assert_eq!(
            backend.read_cookie(AUTH_COOKIE).unwrap(),
            Some("durable-tok".to_string())
        );
    }

    #[test]
    fn test_malformed_stored_user_is_ignored() {
        let backend = StateBackend::in_memory();
        backend.write_entry(USER_KEY, "{not-json").unwrap();

        let (store, _) = open(&backend);
        assert_eq!(store.user(), None);
    }

    #[test]
    fn test_stale_generation_does_not_tear_down() {
        let backend = StateBackend::in_memory();
        let (store, navigator) = open(&backend);

        store.set_token("first");
        let seen = store.generation();
        // the user logged in again while a 401 was in flight
        store.set_token("second");

        assert!(!store.logout_if_generation(seen));
        assert_eq!(store.token(), Some("second".to_string()));
        assert!(navigator.routes.lock().is_empty());

        // a current-generation teardown still works
        assert!(store.logout_if_generation(store.generation()));
        assert_eq!(store.token(), None);
    }
}
