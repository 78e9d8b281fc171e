// Credential exchange
//
// Two hops: username/password-hash plus API key against the auth host
// yields a long-lived refresh token; the refresh token against the API
// host yields a short-lived access token. Only the refresh token is worth
// persisting -- the access token lives in memory.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::WyzeClient;
use crate::error::Error;
use crate::models::{AccessTokenData, LoginResponse};

/// Login endpoint on the auth host.
const LOGIN_PATH: &str = "/api/user/login";
/// Access-token exchange endpoint on the API host.
const REFRESH_TOKEN_PATH: &str = "/app/user/refresh_token";

impl WyzeClient {
    /// Exchange account credentials for a refresh token.
    ///
    /// `password_hash` is the triple-MD5 of the account password (the cloud
    /// never sees the plaintext); `key_id`/`api_key` come from the Wyze
    /// developer portal and ride in the `Keyid`/`Apikey` headers.
    pub async fn login(
        &self,
        username: &str,
        password_hash: &SecretString,
        key_id: &str,
        api_key: &SecretString,
    ) -> Result<String, Error> {
        let url = self.auth_url(LOGIN_PATH)?;
        debug!("logging in at {url}");

        let body = json!({
            "email": username,
            "password": password_hash.expose_secret(),
        });

        let resp = self
            .http()
            .post(url)
            .header("Keyid", key_id)
            .header("Apikey", api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        let login: LoginResponse = serde_json::from_str(&body).map_err(|e| {
            let preview = &body[..body.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })?;

        if !status.is_success() {
            return Err(Error::Authentication {
                message: match login.description {
                    Some(desc) => format!("login rejected (HTTP {status}): {desc}"),
                    None => format!("login rejected (HTTP {status})"),
                },
            });
        }

        match login.refresh_token {
            Some(token) if !token.is_empty() => {
                debug!("login successful");
                Ok(token)
            }
            _ => Err(Error::Authentication {
                message: login.description.unwrap_or_else(|| {
                    "login response carried no refresh token \
                     (check the API key, and that 2FA is not required)"
                        .into()
                }),
            }),
        }
    }

    /// Exchange a refresh token for an access token.
    ///
    /// `POST /app/user/refresh_token` on the API host. The refresh token
    /// rides in the body next to the client-identity parameters.
    pub async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<String, Error> {
        let mut body = Self::base_body(crate::client::DEVELOPER_API_ID);
        body.insert("refresh_token".into(), refresh_token.into());

        let data: AccessTokenData = self.post_api(REFRESH_TOKEN_PATH, &body).await?;

        if data.access_token.is_empty() {
            return Err(Error::Authentication {
                message: "refresh token was not accepted (no access token issued)".into(),
            });
        }

        debug!("access token issued");
        Ok(data.access_token)
    }
}
