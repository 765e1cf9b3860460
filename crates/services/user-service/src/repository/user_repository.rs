//! User registry guarded by a single lock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use domain::{NewUser, UserRecord};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User registry trait for dependency injection.
///
/// Neither operation can fail: creation never validates its input.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// All records in insertion order
    fn list(&self) -> Vec<UserRecord>;

    /// Assign the next id, append, and return the stored record
    fn create(&self, new: NewUser) -> UserRecord;
}

#[derive(Debug)]
struct Registry {
    users: Vec<UserRecord>,
    next_id: u64,
}

/// Process-lifetime registry. Reads and appends both take the same lock
/// for their whole critical section, so a listing never sees a half-built
/// record and ids are never reused.
///
/// The lock must not be held across an await point or a network call.
#[derive(Debug)]
pub struct UserStore {
    inner: Mutex<Registry>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Registry {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        // Every critical section leaves the registry consistent, so a
        // poisoned lock still guards valid data.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for UserStore {
    fn list(&self) -> Vec<UserRecord> {
        self.lock().users.clone()
    }

    fn create(&self, new: NewUser) -> UserRecord {
        let mut registry = self.lock();
        let record = UserRecord::from_new(registry.next_id, new);
        registry.next_id += 1;
        registry.users.push(record.clone());
        record
    }
}
