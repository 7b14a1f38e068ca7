//! Store and auth seams for the landing page.
//!
//! The page consumes both as injected services rather than ambient globals,
//! so tests can swap in seeded in-memory implementations.

pub mod auth;
pub mod kv;
pub mod types;

pub use auth::*;
pub use kv::*;
pub use types::*;

use std::sync::Arc;

/// Services injected into the page components.
#[derive(Clone)]
pub struct Services {
    /// Key-value store holding serialized resume records.
    pub kv: Arc<dyn KvStore>,
    /// Authentication state provider.
    pub auth: Arc<dyn AuthProvider>,
    /// What to do with undecodable stored records.
    pub parse_policy: ParsePolicy,
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.kv, &other.kv)
            && Arc::ptr_eq(&self.auth, &other.auth)
            && self.parse_policy == other.parse_policy
    }
}
