mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn profile_create_update_and_fetch() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let token = common::register(&client, &server.base_url, "A", "a@x.com", "secret1").await?;

    // No profile yet
    let res = client
        .get(format!("{}/api/profile/me", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Create
    let res = client
        .post(format!("{}/api/profile", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .json(&json!({
            "status": "Developer",
            "skills": "rust, sql , http",
            "company": "Acme",
            "twitter": "https://twitter.com/a",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "Developer");
    assert_eq!(body["skills"], json!(["rust", "sql", "http"]));
    assert_eq!(body["company"], "Acme");
    assert_eq!(body["social"]["twitter"], "https://twitter.com/a");

    // Update keeps it a single profile
    let res = client
        .post(format!("{}/api/profile", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .json(&json!({ "status": "Senior Developer", "skills": "rust" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/api/profile", server.base_url))
        .send()
        .await?;
    let all = res.json::<Vec<Value>>().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["status"], "Senior Developer");
    Ok(())
}

#[tokio::test]
async fn profile_requires_status_and_skills() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let token = common::register(&client, &server.base_url, "A", "a@x.com", "secret1").await?;

    let res = client
        .post(format!("{}/api/profile", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .json(&json!({}))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    let msgs: Vec<&str> = body["errors"]
        .as_array()
        .expect("itemized errors")
        .iter()
        .filter_map(|e| e["msg"].as_str())
        .collect();
    assert!(msgs.contains(&"Status is required"), "{:?}", msgs);
    assert!(msgs.contains(&"Skills is required"), "{:?}", msgs);
    Ok(())
}

#[tokio::test]
async fn profile_mutations_require_auth() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/profile", server.base_url))
        .json(&json!({ "status": "Developer", "skills": "rust" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Listing stays public
    let res = client
        .get(format!("{}/api/profile", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn profile_lookup_by_user_id() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let token = common::register(&client, &server.base_url, "A", "a@x.com", "secret1").await?;
    client
        .post(format!("{}/api/profile", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .json(&json!({ "status": "Developer", "skills": "rust" }))
        .send()
        .await?;

    let me = client
        .get(format!("{}/api/auth", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    let user_id = me["id"].as_str().expect("user id").to_string();

    let res = client
        .get(format!("{}/api/profile/user/{}", server.base_url, user_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["user"], json!(user_id));

    // Unknown and malformed ids read identically
    for bad in [uuid::Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let res = client
            .get(format!("{}/api/profile/user/{}", server.base_url, bad))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = res.json::<Value>().await?;
        assert_eq!(body["msg"], "Profile not Found");
    }
    Ok(())
}

#[tokio::test]
async fn experience_entries_are_added_newest_first_and_deleted_by_id() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let token = common::register(&client, &server.base_url, "A", "a@x.com", "secret1").await?;
    client
        .post(format!("{}/api/profile", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .json(&json!({ "status": "Developer", "skills": "rust" }))
        .send()
        .await?;

    for (title, from) in [("First", "2019-01-01"), ("Second", "2021-06-01")] {
        let res = client
            .put(format!("{}/api/profile/experience", server.base_url))
            .header(common::AUTH_HEADER, &token)
            .json(&json!({ "title": title, "company": "Acme", "from": from }))
            .send()
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let profile = client
        .get(format!("{}/api/profile/me", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .send()
        .await?
        .json::<Value>()
        .await?;
    let experience = profile["experience"].as_array().expect("experience");
    assert_eq!(experience.len(), 2);
    assert_eq!(experience[0]["title"], "Second");
    assert_eq!(experience[1]["title"], "First");

    // Delete the newest entry by its id; the other survives
    let exp_id = experience[0]["id"].as_str().expect("entry id");
    let res = client
        .delete(format!(
            "{}/api/profile/experience/{}",
            server.base_url, exp_id
        ))
        .header(common::AUTH_HEADER, &token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    let remaining = body["experience"].as_array().expect("experience");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["title"], "First");

    // Deleting it again reads as missing
    let res = client
        .delete(format!(
            "{}/api/profile/experience/{}",
            server.base_url, exp_id
        ))
        .header(common::AUTH_HEADER, &token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn experience_input_is_validated() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let token = common::register(&client, &server.base_url, "A", "a@x.com", "secret1").await?;
    client
        .post(format!("{}/api/profile", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .json(&json!({ "status": "Developer", "skills": "rust" }))
        .send()
        .await?;

    let res = client
        .put(format!("{}/api/profile/experience", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .json(&json!({}))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    let msgs: Vec<&str> = body["errors"]
        .as_array()
        .expect("itemized errors")
        .iter()
        .filter_map(|e| e["msg"].as_str())
        .collect();
    assert!(msgs.contains(&"Title is required"), "{:?}", msgs);
    assert!(msgs.contains(&"Company is required"), "{:?}", msgs);
    assert!(msgs.contains(&"From Date is required"), "{:?}", msgs);
    Ok(())
}

#[tokio::test]
async fn education_entries_follow_the_same_lifecycle() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let token = common::register(&client, &server.base_url, "A", "a@x.com", "secret1").await?;
    client
        .post(format!("{}/api/profile", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .json(&json!({ "status": "Developer", "skills": "rust" }))
        .send()
        .await?;

    let res = client
        .put(format!("{}/api/profile/education", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .json(&json!({
            "school": "State University",
            "degree": "BSc",
            "fieldofstudy": "CS",
            "from": "2015-09-01",
            "to": "2019-06-01",
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    let education = body["education"].as_array().expect("education");
    assert_eq!(education.len(), 1);
    assert_eq!(education[0]["school"], "State University");

    let edu_id = education[0]["id"].as_str().expect("entry id");
    let res = client
        .delete(format!(
            "{}/api/profile/education/{}",
            server.base_url, edu_id
        ))
        .header(common::AUTH_HEADER, &token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert!(body["education"].as_array().expect("education").is_empty());
    Ok(())
}

#[tokio::test]
async fn account_delete_cascades_posts_profile_then_user() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let token = common::register(&client, &server.base_url, "A", "a@x.com", "secret1").await?;
    let other = common::register(&client, &server.base_url, "B", "b@x.com", "secret1").await?;

    client
        .post(format!("{}/api/profile", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .json(&json!({ "status": "Developer", "skills": "rust" }))
        .send()
        .await?;
    client
        .post(format!("{}/api/post", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .json(&json!({ "text": "soon gone" }))
        .send()
        .await?;

    let res = client
        .delete(format!("{}/api/profile", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["msg"], "user deleted");

    // User record is gone, so the still-valid token resolves to nothing
    let res = client
        .get(format!("{}/api/auth", server.base_url))
        .header(common::AUTH_HEADER, &token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Profile listing is empty and the posts went with the account
    let profiles = client
        .get(format!("{}/api/profile", server.base_url))
        .send()
        .await?
        .json::<Vec<Value>>()
        .await?;
    assert!(profiles.is_empty());

    let posts = client
        .get(format!("{}/api/post", server.base_url))
        .header(common::AUTH_HEADER, &other)
        .send()
        .await?
        .json::<Vec<Value>>()
        .await?;
    assert!(posts.is_empty());
    Ok(())
}
