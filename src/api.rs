//! HTTP access to the users endpoint.

use reqwest::Client;

use crate::error::FetchError;
use crate::model::User;

pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Client for the one request this application makes.
#[derive(Clone, Debug)]
pub struct UserApi {
    client: Client,
    url: String,
}

impl UserApi {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// GET the user list. No parameters, no headers, no retry, no timeout.
    pub async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        response.json::<Vec<User>>().await.map_err(FetchError::Decode)
    }
}
