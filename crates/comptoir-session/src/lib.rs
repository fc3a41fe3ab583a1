// Session state for the Comptoir client
// Decision: The store owns the in-memory session; the cookie and durable
// key-value entries are write-through mirrors, reconciled at startup

mod backend;
mod store;

pub use backend::{FileStore, MemoryStore, StateBackend, StateError, AUTH_COOKIE, TOKEN_KEY, USER_KEY};
pub use store::SessionStore;
