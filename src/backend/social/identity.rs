//! Identity Store
//!
//! Maps identity keys to `Identity` records. Records are created on first
//! contact and live for the lifetime of the process. The store has no locking
//! of its own; the hub serializes access.

use std::collections::HashMap;

use crate::shared::social::{Identity, IdentityKey};

/// Result of `IdentityStore::resolve_or_create`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The key was already known; supplied profile fields were ignored
    Existing,
    /// A new record was created
    Created,
}

#[derive(Debug, Clone)]
pub struct IdentityStore {
    identities: HashMap<IdentityKey, Identity>,
    avatar_base_url: String,
}

impl IdentityStore {
    /// Create an empty store whose avatar references start with `avatar_base_url`
    pub fn new(avatar_base_url: impl Into<String>) -> Self {
        Self {
            identities: HashMap::new(),
            avatar_base_url: avatar_base_url.into(),
        }
    }

    /// Return the record for `key`, creating it if the key is new
    ///
    /// Name and date of birth are only used on creation. A repeat login with a
    /// different name leaves the stored profile untouched.
    pub fn resolve_or_create(
        &mut self,
        key: &str,
        display_name: &str,
        dob: Option<&str>,
    ) -> (&Identity, Resolution) {
        let mut resolution = Resolution::Existing;
        let avatar_base_url = &self.avatar_base_url;
        let identity = self.identities.entry(key.to_string()).or_insert_with(|| {
            resolution = Resolution::Created;
            Identity::new(
                key,
                display_name,
                format!("{}{}", avatar_base_url, key),
                dob.map(str::to_string),
            )
        });
        (identity, resolution)
    }

    pub fn get(&self, key: &str) -> Option<&Identity> {
        self.identities.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut Identity> {
        self.identities.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.identities.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }

    /// All records ordered by key
    pub fn snapshot(&self) -> Vec<Identity> {
        let mut all: Vec<Identity> = self.identities.values().cloned().collect();
        all.sort_by(|a, b| a.key.cmp(&b.key));
        all
    }
}
