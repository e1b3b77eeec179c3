use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Registered account. The password hash never serializes into a response.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String, avatar: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password: password_hash,
            avatar,
            date: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Social {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Developer profile, one per user. Experience and education entries are
/// kept newest-first.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub user: Uuid,
    pub status: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    pub social: Social,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

/// A single like; posts track an ordered list of these, one per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Like {
    pub user: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(user: Uuid, text: String, name: String, avatar: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            text,
            name,
            avatar,
            date: Utc::now(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LikeError {
    #[error("Post already liked")]
    AlreadyLiked,
    #[error("Post was not liked")]
    NotLiked,
}

/// Post with the author's name and avatar denormalized onto it.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub date: DateTime<Utc>,
}

impl Post {
    pub fn new(user: Uuid, text: String, name: String, avatar: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            text,
            name,
            avatar,
            likes: Vec::new(),
            comments: Vec::new(),
            date: Utc::now(),
        }
    }

    /// Record a like, newest first. At most one like per user.
    pub fn like(&mut self, user: Uuid) -> Result<(), LikeError> {
        if self.likes.iter().any(|l| l.user == user) {
            return Err(LikeError::AlreadyLiked);
        }
        self.likes.insert(0, Like { user });
        Ok(())
    }

    /// Remove the caller's like, if present.
    pub fn unlike(&mut self, user: Uuid) -> Result<(), LikeError> {
        let index = self
            .likes
            .iter()
            .position(|l| l.user == user)
            .ok_or(LikeError::NotLiked)?;
        self.likes.remove(index);
        Ok(())
    }
}
