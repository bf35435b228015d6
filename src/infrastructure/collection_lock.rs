// Process-wide mutation locks, one per collection directory
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use tokio::sync::Mutex as AsyncMutex;

type LockMap = HashMap<PathBuf, Arc<AsyncMutex<()>>>;

static LOCKS: OnceLock<Mutex<LockMap>> = OnceLock::new();

/// Returns the lock shared by every store opened on `dir`.
///
/// The directory need not exist yet; when it does, its canonical path is
/// used as the key so different spellings of the same directory share a lock.
pub fn lock_for(dir: &Path) -> Arc<AsyncMutex<()>> {
    let key = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    let locks = LOCKS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut locks = match locks.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    locks.entry(key).or_default().clone()
}
