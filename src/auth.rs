//! File-backed credential store: registration and authentication.
//!
//! Accounts live in a single JSON file mapping email to a hex-encoded
//! SHA-256 digest of the password:
//!
//! ```json
//! { "user@example.com": "5e884898da2804715..." }
//! ```
//!
//! Every operation loads the whole file, and registration rewrites it
//! in full. Within one process, all load→mutate→persist cycles are
//! serialized behind an internal mutex (single-writer policy); writers
//! in *other* processes can still race on the file, and the rewrite is
//! not done via temp-file-plus-rename, so a crash mid-write can leave
//! the file truncated. Callers needing cross-process safety must wrap
//! this store themselves.
//!
//! # Known weakness
//!
//! Password digests are unsalted SHA-256, kept for compatibility with
//! the existing stored-file format. Unsalted fast hashes are vulnerable
//! to precomputed-table attacks; do not reuse this store where that
//! matters.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info, instrument};

/// Basic `local@domain.tld` shape check: word characters, dots, and
/// hyphens in the local and domain parts, at least one character after
/// the final dot.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").unwrap());

/// Whether a string passes the email pattern check used by both the
/// register and login paths.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Hex-encoded SHA-256 digest of a password.
fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    format!("{digest:x}")
}

/// Email → password-digest store persisted as one JSON file.
pub struct CredentialStore {
    path: PathBuf,
    /// Serializes every load→mutate→persist cycle in this process.
    write_lock: Mutex<()>,
}

impl CredentialStore {
    /// Open a store backed by `path`. The file is not created until the
    /// first successful registration; a missing file reads as an empty
    /// store.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Take the write lock, shrugging off poisoning. The guard protects
    /// no in-memory data (the mapping is reloaded from disk every
    /// cycle), so a panic in an earlier holder leaves nothing torn.
    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Load the full mapping from disk.
    fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let users = serde_json::from_str(&raw)?;
        Ok(users)
    }

    /// Rewrite the full mapping to disk, replacing the prior content.
    fn persist(&self, users: &BTreeMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string(users)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Create an account.
    ///
    /// Fails with [`Error::InvalidInput`] when the email or password is
    /// empty or the email fails the pattern check, and with
    /// [`Error::AlreadyExists`] when the email is already registered
    /// (the stored digest is left untouched in that case).
    #[instrument(level = "info", skip(self, password), fields(email = %email))]
    pub fn register(&self, email: &str, password: &str) -> Result<()> {
        if email.is_empty() || password.is_empty() {
            return Err(Error::InvalidInput(
                "email and password cannot be empty".to_string(),
            ));
        }
        if !is_valid_email(email) {
            return Err(Error::InvalidInput(format!("not a valid email address: {email}")));
        }

        let _guard = self.lock();
        let mut users = self.load()?;
        if users.contains_key(email) {
            debug!("registration refused, email already present");
            return Err(Error::AlreadyExists);
        }
        users.insert(email.to_string(), hash_password(password));
        self.persist(&users)?;
        info!(total_accounts = users.len(), "registered new account");
        Ok(())
    }

    /// Check credentials.
    ///
    /// Returns `Ok(true)` iff the email is registered and the supplied
    /// password hashes to the stored digest. Unknown email and wrong
    /// password are indistinguishable (`Ok(false)`), so callers cannot
    /// be used to enumerate accounts. A malformed email is rejected
    /// with [`Error::InvalidInput`] before the store is consulted.
    #[instrument(level = "info", skip(self, password), fields(email = %email))]
    pub fn authenticate(&self, email: &str, password: &str) -> Result<bool> {
        if !is_valid_email(email) {
            return Err(Error::InvalidInput(format!("not a valid email address: {email}")));
        }

        let _guard = self.lock();
        let users = self.load()?;
        let supplied = hash_password(password);
        let ok = users.get(email).map(String::as_str) == Some(supplied.as_str());
        debug!(ok, "authentication attempt");
        Ok(ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_store() -> (tempfile::TempDir, CredentialStore) {
        let dir = tempdir().expect("failed to create temp dir");
        let store = CredentialStore::open(dir.path().join("users.json"));
        (dir, store)
    }

    #[test]
    fn test_register_then_authenticate_roundtrip() {
        let (_dir, store) = test_store();
        store.register("user@example.com", "hunter2").unwrap();
        assert!(store.authenticate("user@example.com", "hunter2").unwrap());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let (_dir, store) = test_store();
        store.register("user@example.com", "hunter2").unwrap();
        assert!(!store.authenticate("user@example.com", "hunter3").unwrap());
    }

    #[test]
    fn test_unknown_user_rejected() {
        let (_dir, store) = test_store();
        assert!(!store.authenticate("nobody@example.com", "anything").unwrap());
    }

    #[test]
    fn test_duplicate_register_keeps_original_hash() {
        let (_dir, store) = test_store();
        store.register("user@example.com", "first").unwrap();

        let err = store.register("user@example.com", "second").unwrap_err();
        assert!(matches!(err, Error::AlreadyExists));

        // The first password still authenticates; the second never took.
        assert!(store.authenticate("user@example.com", "first").unwrap());
        assert!(!store.authenticate("user@example.com", "second").unwrap());
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let (_dir, store) = test_store();
        assert!(matches!(
            store.register("", "pw").unwrap_err(),
            Error::InvalidInput(_)
        ));
        assert!(matches!(
            store.register("user@example.com", "").unwrap_err(),
            Error::InvalidInput(_)
        ));
    }

    #[test]
    fn test_email_pattern_both_paths() {
        let (_dir, store) = test_store();
        assert!(matches!(
            store.register("not-an-email", "pw").unwrap_err(),
            Error::InvalidInput(_)
        ));
        assert!(matches!(
            store.authenticate("not-an-email", "pw").unwrap_err(),
            Error::InvalidInput(_)
        ));
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@news-site.co.uk"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_stored_file_format() {
        let (dir, store) = test_store();
        store.register("user@example.com", "password").unwrap();

        let raw = std::fs::read_to_string(dir.path().join("users.json")).unwrap();
        let parsed: std::collections::BTreeMap<String, String> =
            serde_json::from_str(&raw).unwrap();
        // Unsalted SHA-256 hex digest, for stored-file compatibility.
        assert_eq!(
            parsed.get("user@example.com").map(String::as_str),
            Some("5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8")
        );
    }

    #[test]
    fn test_store_survives_poisoned_lock() {
        let dir = tempdir().expect("failed to create temp dir");
        let store = std::sync::Arc::new(CredentialStore::open(dir.path().join("users.json")));
        store.register("user@example.com", "hunter2").unwrap();

        // Poison the write lock by panicking while holding it.
        let poisoner = std::sync::Arc::clone(&store);
        std::thread::spawn(move || {
            let _guard = poisoner.write_lock.lock().unwrap();
            panic!("poison the lock");
        })
        .join()
        .unwrap_err();
        assert!(store.write_lock.is_poisoned());

        // The store keeps working: nothing in memory was torn.
        assert!(store.authenticate("user@example.com", "hunter2").unwrap());
        store.register("second@example.com", "pw").unwrap();
        assert!(store.authenticate("second@example.com", "pw").unwrap());
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let (_dir, store) = test_store();
        assert!(!store.authenticate("user@example.com", "pw").unwrap());
    }
}
