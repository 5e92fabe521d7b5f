//! One-time invite token issuance

use chrono::{Duration, Utc};
use portal_core::MemberSeed;
use rand::Rng;

/// Issues one-time invite tokens with a fixed validity window
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    validity_hours: i64,
}

impl TokenIssuer {
    /// Create a new issuer with the given validity window in hours
    pub fn new(validity_hours: i64) -> Self {
        Self { validity_hours }
    }

    /// Issue a fresh invite token and its expiry
    pub fn issue(&self) -> MemberSeed {
        MemberSeed {
            invite_token: generate_token(),
            token_expiry: Utc::now() + Duration::hours(self.validity_hours),
        }
    }
}

/// Build the registration link a new member completes sign-up through
pub fn registration_url(base_url: &str, token: &str) -> String {
    format!("{}/register?token={token}", base_url.trim_end_matches('/'))
}

/// Generate a random alphanumeric invite token
fn generate_token() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LENGTH: usize = 32;

    let mut rng = rand::thread_rng();
    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
