use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::AuthUser;
use crate::models::{Education, Experience, Profile, Social};
use crate::services::github::{self, GithubError};
use crate::store::AppState;

/// GET /api/profile/me - the caller's own profile.
pub async fn my_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<Profile>, ApiError> {
    let profile = state
        .store
        .profile_by_user(auth_user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    Ok(Json(profile))
}

#[derive(Debug, Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub status: String,
    /// Comma-separated on the wire, e.g. "rust, sql , http".
    #[serde(default)]
    pub skills: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// POST /api/profile - create the caller's profile, or update it in place.
/// An update keeps the existing experience and education entries.
pub async fn upsert_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(input): Json<ProfileInput>,
) -> Result<Json<Profile>, ApiError> {
    let mut errors = Vec::new();
    if input.status.trim().is_empty() {
        errors.push("Status is required");
    }
    if input.skills.trim().is_empty() {
        errors.push("Skills is required");
    }
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let skills: Vec<String> = input
        .skills
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let social = Social {
        youtube: input.youtube,
        twitter: input.twitter,
        facebook: input.facebook,
        linkedin: input.linkedin,
        instagram: input.instagram,
    };

    let profile = match state.store.profile_by_user(auth_user.id).await? {
        Some(mut existing) => {
            existing.status = input.status;
            existing.skills = skills;
            existing.company = input.company;
            existing.website = input.website;
            existing.location = input.location;
            existing.bio = input.bio;
            existing.githubusername = input.githubusername;
            existing.social = social;
            existing
        }
        None => Profile {
            id: Uuid::new_v4(),
            user: auth_user.id,
            status: input.status,
            skills,
            company: input.company,
            website: input.website,
            location: input.location,
            bio: input.bio,
            githubusername: input.githubusername,
            social,
            experience: Vec::new(),
            education: Vec::new(),
            date: Utc::now(),
        },
    };

    state.store.save_profile(profile.clone()).await?;

    Ok(Json(profile))
}

/// GET /api/profile - all profiles, public.
pub async fn list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Profile>>, ApiError> {
    Ok(Json(state.store.list_profiles().await?))
}

/// GET /api/profile/user/:user_id - profile by owning user, public.
pub async fn profile_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let user_id = super::parse_id(&user_id, "Profile not Found")?;

    let profile = state
        .store
        .profile_by_user(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Profile not Found"))?;

    Ok(Json(profile))
}

/// DELETE /api/profile - remove the caller's account: posts, then profile,
/// then the user record. Each step is best-effort so a failure in one does
/// not strand the others.
pub async fn delete_account(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Json<Value>, ApiError> {
    if let Err(e) = state.store.delete_posts_by_user(auth_user.id).await {
        tracing::error!("account delete: posts for {}: {}", auth_user.id, e);
    }
    if let Err(e) = state.store.delete_profile_by_user(auth_user.id).await {
        tracing::error!("account delete: profile for {}: {}", auth_user.id, e);
    }
    if let Err(e) = state.store.delete_user(auth_user.id).await {
        tracing::error!("account delete: user {}: {}", auth_user.id, e);
    }

    Ok(Json(json!({ "msg": "user deleted" })))
}

#[derive(Debug, Deserialize)]
pub struct ExperienceInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    pub location: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// PUT /api/profile/experience - add an entry to the caller's profile,
/// newest first.
pub async fn add_experience(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(input): Json<ExperienceInput>,
) -> Result<Json<Profile>, ApiError> {
    let mut errors = Vec::new();
    if input.title.trim().is_empty() {
        errors.push("Title is required");
    }
    if input.company.trim().is_empty() {
        errors.push("Company is required");
    }
    let Some(from) = input.from else {
        errors.push("From Date is required");
        return Err(ApiError::validation(errors));
    };
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let mut profile = state
        .store
        .profile_by_user(auth_user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    profile.experience.insert(
        0,
        Experience {
            id: Uuid::new_v4(),
            title: input.title,
            company: input.company,
            location: input.location,
            from,
            to: input.to,
            current: input.current,
            description: input.description,
        },
    );
    state.store.save_profile(profile.clone()).await?;

    Ok(Json(profile))
}

/// DELETE /api/profile/experience/:exp_id - remove the addressed entry
/// from the caller's profile.
pub async fn delete_experience(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(exp_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let exp_id = super::parse_id(&exp_id, "Experience not found")?;

    let mut profile = state
        .store
        .profile_by_user(auth_user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    let index = profile
        .experience
        .iter()
        .position(|e| e.id == exp_id)
        .ok_or_else(|| ApiError::not_found("Experience not found"))?;
    profile.experience.remove(index);

    state.store.save_profile(profile.clone()).await?;

    Ok(Json(profile))
}

#[derive(Debug, Deserialize)]
pub struct EducationInput {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub fieldofstudy: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// PUT /api/profile/education - add an entry to the caller's profile,
/// newest first.
pub async fn add_education(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(input): Json<EducationInput>,
) -> Result<Json<Profile>, ApiError> {
    let mut errors = Vec::new();
    if input.school.trim().is_empty() {
        errors.push("School is required");
    }
    if input.degree.trim().is_empty() {
        errors.push("Degree is required");
    }
    if input.fieldofstudy.trim().is_empty() {
        errors.push("Field Of Study is required");
    }
    let Some(from) = input.from else {
        errors.push("From Date is required");
        return Err(ApiError::validation(errors));
    };
    if !errors.is_empty() {
        return Err(ApiError::validation(errors));
    }

    let mut profile = state
        .store
        .profile_by_user(auth_user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    profile.education.insert(
        0,
        Education {
            id: Uuid::new_v4(),
            school: input.school,
            degree: input.degree,
            fieldofstudy: input.fieldofstudy,
            from,
            to: input.to,
            current: input.current,
            description: input.description,
        },
    );
    state.store.save_profile(profile.clone()).await?;

    Ok(Json(profile))
}

/// DELETE /api/profile/education/:edu_id - remove the addressed entry
/// from the caller's profile.
pub async fn delete_education(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Path(edu_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let edu_id = super::parse_id(&edu_id, "Education not found")?;

    let mut profile = state
        .store
        .profile_by_user(auth_user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    let index = profile
        .education
        .iter()
        .position(|e| e.id == edu_id)
        .ok_or_else(|| ApiError::not_found("Education not found"))?;
    profile.education.remove(index);

    state.store.save_profile(profile.clone()).await?;

    Ok(Json(profile))
}

/// GET /api/profile/github/:username - five most recent public repos,
/// fetched live from GitHub.
pub async fn github_repos(Path(username): Path<String>) -> Result<Json<Value>, ApiError> {
    let repos = github::recent_repos(&username).await.map_err(|e| match e {
        GithubError::ProfileNotFound(_) => ApiError::not_found("No github profile found"),
        GithubError::Transport(msg) => ApiError::internal(msg),
    })?;

    Ok(Json(repos))
}
