// Login against the backend token endpoint

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiError};

const TOKEN_PATH: &str = "/api/token/";

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Token pair returned by the backend on successful login.
#[derive(Debug, Deserialize)]
pub struct TokenPairResponse {
    pub access: String,
    /// Present in the response but unused — there is no refresh flow
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Exchange credentials for a token pair and store the access token.
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<(), ApiError> {
    let pair: TokenPairResponse = client
        .post(TOKEN_PATH, &LoginRequest { username, password })
        .await?;
    client.session().set_token(&pair.access);
    tracing::info!("logged in as {username}");
    Ok(())
}
