//! Password gate for the analytics view.
//!
//! This is a single string comparison with a remembered session marker, not
//! an authentication system.

use crate::environment::{KeyValueStore, ADMIN_SESSION_KEY};
use crate::error::Result;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

pub const DEFAULT_PASSWORD: &str = "admin123";

/// Marker stored for a logged-in session. Derived from the configured
/// password so that changing it ends existing sessions.
fn session_marker(password: &str) -> String {
    let digest = Sha256::digest(format!("donorscore-admin:{password}").as_bytes());
    format!("{digest:x}")
}

pub fn authenticate(store: &mut dyn KeyValueStore, attempt: &str, expected: &str) -> Result<bool> {
    if attempt != expected {
        warn!("admin login rejected");
        return Ok(false);
    }
    store.set(ADMIN_SESSION_KEY, &session_marker(expected))?;
    info!("admin session started");
    Ok(true)
}

pub fn is_admin(store: &dyn KeyValueStore, expected: &str) -> Result<bool> {
    Ok(store
        .get(ADMIN_SESSION_KEY)?
        .is_some_and(|marker| marker == session_marker(expected)))
}

pub fn logout(store: &mut dyn KeyValueStore) -> Result<()> {
    store.remove(ADMIN_SESSION_KEY)
}
