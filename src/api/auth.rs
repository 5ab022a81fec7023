use serde::{Deserialize, Serialize};

use super::{ApiError, Session, decode, expect_ok};

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// The authenticated user as reported by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub username: String,
}

impl Session {
    /// Create a new account. The backend returns no body on success.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url("/auth/register"))
            .json(&RegisterRequest {
                username,
                email,
                password,
            })
            .send()
            .await?;
        expect_ok(resp).await
    }

    /// Exchange credentials for an access token. The token is stored on the
    /// session so subsequent calls are authenticated.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<String, ApiError> {
        tracing::debug!(email, "logging in");
        let resp = self
            .http
            .post(self.url("/auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let token: TokenResponse = decode(resp).await?;
        self.token = Some(token.access_token.clone());
        Ok(token.access_token)
    }

    /// Fetch the profile behind the current token.
    pub async fn me(&self) -> Result<Profile, ApiError> {
        let resp = self
            .http
            .get(self.url("/auth/me"))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        decode(resp).await
    }
}
