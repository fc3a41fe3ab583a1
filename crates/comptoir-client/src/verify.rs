// Token verification against the backend

use serde::Serialize;

use crate::client::ApiClient;

pub(crate) const VERIFY_PATH: &str = "/api/token/verify/";

#[derive(Serialize)]
struct VerifyRequest<'a> {
    token: &'a str,
}

/// Ask the backend whether `token` is still valid.
///
/// Fail-closed: any non-2xx response or transport failure reports invalid.
/// A 401 from the endpoint flows through the wrapper's teardown path like
/// any other unauthorized response.
pub async fn verify_token(client: &ApiClient, token: &str) -> bool {
    match client
        .post::<serde_json::Value, _>(VERIFY_PATH, &VerifyRequest { token })
        .await
    {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("token verification failed: {e}");
            false
        }
    }
}
