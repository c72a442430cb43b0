//! # Session Context
//!
//! Holds the session token issued at login. A [`Session`] is created once and
//! handed to both the API client and the session guard; there is no ambient
//! global lookup.
//!
//! The token can be backed by a [`TokenStore`] so it survives restarts. The
//! file store keeps exactly one value under the fixed key [`TOKEN_KEY`].

use crate::core::error::Result;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Key under which the token is persisted
pub const TOKEN_KEY: &str = "token";

/// Durable storage for the session token
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any
    fn load(&self) -> Result<Option<String>>;

    /// Persist the token, replacing any previous value
    fn save(&self, token: &str) -> Result<()>;

    /// Remove the stored token
    fn remove(&self) -> Result<()>;
}

/// JSON file token store: `{"token": "..."}`
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_vec_pretty(map)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(TOKEN_KEY).filter(|t| !t.is_empty()))
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut map = self.read_map().unwrap_or_default();
        map.insert(TOKEN_KEY.to_string(), token.to_string());
        self.write_map(&map)
    }

    fn remove(&self) -> Result<()> {
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!(error = %err, path = %self.path.display(), "Unreadable session file, overwriting");
                BTreeMap::new()
            }
        };
        if map.remove(TOKEN_KEY).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.write_map(&map)
    }
}

/// Session context shared by the API client and the session guard.
///
/// Cloning is cheap; clones observe the same token.
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
    store: Option<Arc<dyn TokenStore>>,
}

impl Session {
    /// Session that lives only as long as the process
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Session backed by a durable store, seeded with whatever it holds
    pub fn with_store(store: Arc<dyn TokenStore>) -> Result<Self> {
        let token = store.load()?;
        tracing::debug!(restored = token.is_some(), "Session loaded from store");
        Ok(Self {
            token: Arc::new(RwLock::new(token)),
            store: Some(store),
        })
    }

    /// Current token, if any
    pub fn get(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// True if a token is present. Says nothing about its validity.
    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Store a new token.
    ///
    /// The in-memory token is always updated; an error only means the durable
    /// copy could not be written.
    pub fn set(&self, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        *self.token.write() = Some(token.clone());
        match &self.store {
            Some(store) => store.save(&token),
            None => Ok(()),
        }
    }

    /// Drop the token from memory and from the durable store
    pub fn clear(&self) -> Result<()> {
        *self.token.write() = None;
        match &self.store {
            Some(store) => store.remove(),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .field("persistent", &self.store.is_some())
            .finish()
    }
}
