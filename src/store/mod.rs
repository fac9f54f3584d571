//! Record store client
//!
//! Narrow interface to the hosted data/auth service that owns visitor
//! record persistence and admin credentials. Only the contract below is
//! relied on anywhere else in the server.

pub mod rest;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{NewVisitor, Session, VisitorRecord},
};

pub use rest::RestStore;

/// Contract with the hosted record store.
///
/// `list_records` returns the full set ordered by `in_time` descending.
/// Record `id` and `in_time` are assigned upstream at insert and are
/// never supplied by this server. None of these calls retry
/// automatically; failures surface to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_records(&self) -> AppResult<Vec<VisitorRecord>>;

    async fn insert_record(&self, visitor: &NewVisitor) -> AppResult<()>;

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Session>;

    async fn sign_out(&self, access_token: &str) -> AppResult<()>;
}
