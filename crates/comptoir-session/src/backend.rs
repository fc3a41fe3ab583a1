// Persistence mirrors for the session store
// Decision: Enum dispatch over file-backed (production) and in-memory (tests)
// variants rather than trait objects
//
// Two mirrors live behind one backend: a cookie store whose entries carry an
// absolute expiry, and a durable key-value store with no expiry. There is no
// transactional guarantee across the two; the session store reconciles them
// lazily at startup.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Cookie holding the session token; readable by the guard.
pub const AUTH_COOKIE: &str = "auth_token";

/// Durable key for the session token.
pub const TOKEN_KEY: &str = "access_token";

/// Durable key for the serialized user profile.
pub const USER_KEY: &str = "user";

/// Cookie lifetime, matching the backend session length.
const COOKIE_MAX_AGE_HOURS: i64 = 24;

#[derive(Error, Debug)]
pub enum StateError {
    #[error("state I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("state serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Cookie value with its absolute expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CookieEntry {
    value: String,
    expires_at: DateTime<Utc>,
}

impl CookieEntry {
    fn fresh(value: &str) -> Self {
        Self {
            value: value.to_string(),
            expires_at: Utc::now() + Duration::hours(COOKIE_MAX_AGE_HOURS),
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Storage behind the session store's two mirrors.
#[derive(Clone)]
pub enum StateBackend {
    /// JSON documents under the state directory
    File(FileStore),
    /// Process-local maps (tests)
    InMemory(Arc<MemoryStore>),
}

impl StateBackend {
    /// File-backed storage rooted at `dir`, created if missing.
    pub fn file(dir: impl Into<PathBuf>) -> Result<Self, StateError> {
        Ok(Self::File(FileStore::new(dir.into())?))
    }

    /// File-backed storage at `COMPTOIR_STATE_DIR`, falling back to the
    /// platform data directory.
    pub fn file_from_env() -> Result<Self, StateError> {
        let dir = std::env::var("COMPTOIR_STATE_DIR")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::data_local_dir().map(|d| d.join("comptoir")))
            .unwrap_or_else(|| PathBuf::from(".comptoir"));
        Self::file(dir)
    }

    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(MemoryStore::default()))
    }

    /// Read a cookie; expired entries are dropped and read as absent.
    pub fn read_cookie(&self, name: &str) -> Result<Option<String>, StateError> {
        match self {
            Self::File(store) => store.read_cookie(name),
            Self::InMemory(store) => Ok(store.read_cookie(name)),
        }
    }

    /// Write a cookie with a fresh expiry.
    pub fn write_cookie(&self, name: &str, value: &str) -> Result<(), StateError> {
        match self {
            Self::File(store) => store.write_cookie(name, CookieEntry::fresh(value)),
            Self::InMemory(store) => {
                store.write_cookie(name, CookieEntry::fresh(value));
                Ok(())
            }
        }
    }

    pub fn remove_cookie(&self, name: &str) -> Result<(), StateError> {
        match self {
            Self::File(store) => store.remove_cookie(name),
            Self::InMemory(store) => {
                store.remove_cookie(name);
                Ok(())
            }
        }
    }

    pub fn read_entry(&self, key: &str) -> Result<Option<String>, StateError> {
        match self {
            Self::File(store) => store.read_entry(key),
            Self::InMemory(store) => Ok(store.read_entry(key)),
        }
    }

    pub fn write_entry(&self, key: &str, value: &str) -> Result<(), StateError> {
        match self {
            Self::File(store) => store.write_entry(key, value),
            Self::InMemory(store) => {
                store.write_entry(key, value);
                Ok(())
            }
        }
    }

    pub fn remove_entry(&self, key: &str) -> Result<(), StateError> {
        match self {
            Self::File(store) => store.remove_entry(key),
            Self::InMemory(store) => {
                store.remove_entry(key);
                Ok(())
            }
        }
    }
}

/// File-backed mirrors: `cookies.json` and `storage.json` under one directory.
#[derive(Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    fn new(dir: PathBuf) -> Result<Self, StateError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn cookies_path(&self) -> PathBuf {
        self.dir.join("cookies.json")
    }

    fn storage_path(&self) -> PathBuf {
        self.dir.join("storage.json")
    }

    fn load<T: for<'de> Deserialize<'de> + Default>(path: &Path) -> Result<T, StateError> {
        if !path.exists() {
            return Ok(T::default());
        }
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }

    fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), StateError> {
        fs::write(path, serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    fn read_cookie(&self, name: &str) -> Result<Option<String>, StateError> {
        let mut cookies: HashMap<String, CookieEntry> = Self::load(&self.cookies_path())?;
        match cookies.get(name) {
            Some(entry) if entry.is_expired() => {
                cookies.remove(name);
                Self::save(&self.cookies_path(), &cookies)?;
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    fn write_cookie(&self, name: &str, entry: CookieEntry) -> Result<(), StateError> {
        let mut cookies: HashMap<String, CookieEntry> = Self::load(&self.cookies_path())?;
        cookies.insert(name.to_string(), entry);
        Self::save(&self.cookies_path(), &cookies)
    }

    fn remove_cookie(&self, name: &str) -> Result<(), StateError> {
        let mut cookies: HashMap<String, CookieEntry> = Self::load(&self.cookies_path())?;
        if cookies.remove(name).is_some() {
            Self::save(&self.cookies_path(), &cookies)?;
        }
        Ok(())
    }

    fn read_entry(&self, key: &str) -> Result<Option<String>, StateError> {
        let storage: HashMap<String, String> = Self::load(&self.storage_path())?;
        Ok(storage.get(key).cloned())
    }

    fn write_entry(&self, key: &str, value: &str) -> Result<(), StateError> {
        let mut storage: HashMap<String, String> = Self::load(&self.storage_path())?;
        storage.insert(key.to_string(), value.to_string());
        Self::save(&self.storage_path(), &storage)
    }

    fn remove_entry(&self, key: &str) -> Result<(), StateError> {
        let mut storage: HashMap<String, String> = Self::load(&self.storage_path())?;
        if storage.remove(key).is_some() {
            Self::save(&self.storage_path(), &storage)?;
        }
        Ok(())
    }
}

/// In-memory mirrors; data is lost when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    cookies: RwLock<HashMap<String, CookieEntry>>,
    storage: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    fn read_cookie(&self, name: &str) -> Option<String> {
        let mut cookies = self.cookies.write();
        match cookies.get(name) {
            Some(entry) if entry.is_expired() => {
                cookies.remove(name);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    fn write_cookie(&self, name: &str, entry: CookieEntry) {
        self.cookies.write().insert(name.to_string(), entry);
    }

    fn remove_cookie(&self, name: &str) {
        self.cookies.write().remove(name);
    }

    fn read_entry(&self, key: &str) -> Option<String> {
        self.storage.read().get(key).cloned()
    }

    fn write_entry(&self, key: &str, value: &str) {
        self.storage
            .write()
            .insert(key.to_string(), value.to_string());
    }

    fn remove_entry(&self, key: &str) {
        self.storage.write().remove(key);
    }
}
