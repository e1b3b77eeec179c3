use sha2::{Digest, Sha256};

/// Gravatar URL derived from the account email: 200px, PG-rated, with the
/// "mystery man" fallback for addresses without a gravatar.
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    let hash: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    format!("https://www.gravatar.com/avatar/{}?s=200&r=pg&d=mm", hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_normalized_before_hashing() {
        assert_eq!(gravatar_url("  A@X.com "), gravatar_url("a@x.com"));
    }

    #[test]
    fn url_carries_the_expected_parameters() {
        let url = gravatar_url("a@x.com");
        assert!(url.starts_with("https://www.gravatar.com/avatar/"));
        assert!(url.ends_with("?s=200&r=pg&d=mm"));

        let hash = url
            .trim_start_matches("https://www.gravatar.com/avatar/")
            .trim_end_matches("?s=200&r=pg&d=mm");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
