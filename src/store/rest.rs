//! REST implementation of the record store client
//!
//! Talks to the hosted service's PostgREST-style data API and its
//! password-grant auth endpoint. The public API key travels on every
//! request; a signed-in admin token is only needed upstream for
//! sign-out.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    models::{NewVisitor, Session, VisitorRecord},
};

use super::RecordStore;

const RECORDS_PATH: &str = "/rest/v1/visitors";

#[derive(Clone)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    user: TokenUser,
}

#[derive(Deserialize)]
struct TokenUser {
    email: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: reqwest::Response) -> AppResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Store(format!(
            "record store returned {status}: {body}"
        )))
    }
}

#[async_trait]
impl RecordStore for RestStore {
    async fn list_records(&self) -> AppResult<Vec<VisitorRecord>> {
        let response = self
            .client
            .get(self.url(RECORDS_PATH))
            .query(&[("select", "*"), ("order", "in_time.desc")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let records = Self::check(response).await?.json().await?;
        Ok(records)
    }

    async fn insert_record(&self, visitor: &NewVisitor) -> AppResult<()> {
        // id and in_time are assigned by the store, not sent
        let response = self
            .client
            .post(self.url(RECORDS_PATH))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(&json!([visitor]))
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session> {
        let response = self
            .client
            .post(self.url("/auth/v1/token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.api_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::BAD_REQUEST || status == reqwest::StatusCode::UNAUTHORIZED
        {
            return Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        let token: TokenResponse = Self::check(response).await?.json().await?;
        Ok(Session {
            access_token: token.access_token,
            token_type: token.token_type,
            email: token.user.email,
        })
    }

    async fn sign_out(&self, access_token: &str) -> AppResult<()> {
        let response = self
            .client
            .post(self.url("/auth/v1/logout"))
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}
