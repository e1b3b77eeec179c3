//! Document store boundary.
//!
//! Handlers perform read-modify-write sequences against these traits (like
//! toggles, experience/education splices) with no optimistic-concurrency
//! guard; the store offers no transactions, so two concurrent requests
//! touching the same resource can interleave.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Post, Profile, User};

pub mod memory;

pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store operation failed: {0}")]
    Backend(String),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert_user(&self, user: User) -> Result<(), StoreError>;
    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError>;
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Insert or replace the profile keyed by its owning user.
    async fn save_profile(&self, profile: Profile) -> Result<(), StoreError>;
    async fn profile_by_user(&self, user: Uuid) -> Result<Option<Profile>, StoreError>;
    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError>;
    async fn delete_profile_by_user(&self, user: Uuid) -> Result<(), StoreError>;
}

#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert or replace a post by id.
    async fn save_post(&self, post: Post) -> Result<(), StoreError>;
    async fn post_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError>;
    /// All posts, newest first.
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;
    async fn delete_post(&self, id: Uuid) -> Result<(), StoreError>;
    async fn delete_posts_by_user(&self, user: Uuid) -> Result<(), StoreError>;
}

pub trait Store: UserStore + ProfileStore + PostStore {}

impl<T: UserStore + ProfileStore + PostStore> Store for T {}

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}
