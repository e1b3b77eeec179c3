use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Post, Profile, User};

use super::{PostStore, ProfileStore, StoreError, UserStore};

/// In-process store backing the server and the integration tests.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    // keyed by owning user id; one profile per user
    profiles: RwLock<HashMap<Uuid, Profile>>,
    posts: RwLock<HashMap<Uuid, Post>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: User) -> Result<(), StoreError> {
        self.users.write().await.insert(user.id, user);
        Ok(())
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn delete_user(&self, id: Uuid) -> Result<(), StoreError> {
        self.users.write().await.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn save_profile(&self, profile: Profile) -> Result<(), StoreError> {
        self.profiles.write().await.insert(profile.user, profile);
        Ok(())
    }

    async fn profile_by_user(&self, user: Uuid) -> Result<Option<Profile>, StoreError> {
        Ok(self.profiles.read().await.get(&user).cloned())
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        let mut profiles: Vec<Profile> = self.profiles.read().await.values().cloned().collect();
        profiles.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(profiles)
    }

    async fn delete_profile_by_user(&self, user: Uuid) -> Result<(), StoreError> {
        self.profiles.write().await.remove(&user);
        Ok(())
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn save_post(&self, post: Post) -> Result<(), StoreError> {
        self.posts.write().await.insert(post.id, post);
        Ok(())
    }

    async fn post_by_id(&self, id: Uuid) -> Result<Option<Post>, StoreError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(posts)
    }

    async fn delete_post(&self, id: Uuid) -> Result<(), StoreError> {
        self.posts.write().await.remove(&id);
        Ok(())
    }

    async fn delete_posts_by_user(&self, user: Uuid) -> Result<(), StoreError> {
        self.posts.write().await.retain(|_, p| p.user != user);
        Ok(())
    }
}
