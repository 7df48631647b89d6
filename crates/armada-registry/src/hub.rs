use serde::{Deserialize, Serialize};

const HUB_API: &str = "https://hub.docker.com/v2";

/// Docker Hub API client, used to refresh the repository's
/// human-readable description from the README.
pub struct HubClient {
    http: reqwest::Client,
    base_url: String,
}

impl HubClient {
    pub fn new() -> Self {
        Self::with_base_url(HUB_API)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Exchange registry credentials for a Hub JWT.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, HubError> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
        }

        #[derive(Deserialize)]
        struct LoginResponse {
            token: String,
        }

        let response = self
            .http
            .post(format!("{}/users/login", self.base_url))
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| HubError::Request { source: e })?;

        if !response.status().is_success() {
            return Err(HubError::Api {
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let login: LoginResponse = response
            .json()
            .await
            .map_err(|e| HubError::Request { source: e })?;

        Ok(login.token)
    }

    /// Replace the repository's full description.
    pub async fn update_description(
        &self,
        token: &str,
        repository: &str,
        full_description: &str,
    ) -> Result<(), HubError> {
        #[derive(Serialize)]
        struct DescriptionPatch<'a> {
            full_description: &'a str,
        }

        let response = self
            .http
            .patch(format!("{}/repositories/{repository}/", self.base_url))
            .header("Authorization", format!("JWT {token}"))
            .json(&DescriptionPatch { full_description })
            .send()
            .await
            .map_err(|e| HubError::Request { source: e })?;

        if !response.status().is_success() {
            return Err(HubError::Api {
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        Ok(())
    }
}

impl Default for HubClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("Docker Hub request failed")]
    Request { source: reqwest::Error },

    #[error("Docker Hub API returned {status}: {body}")]
    Api { status: u16, body: String },
}
