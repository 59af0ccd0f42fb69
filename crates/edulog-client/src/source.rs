use std::future::Future;
use std::pin::Pin;

use edulog_core::models::record::BasicRecord;
use edulog_core::models::session::{Identity, Session};

use crate::error::ClientError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Page parameters forwarded to the session call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    pub token: String,
    pub p_id: String,
    pub einrichtung_id: Option<String>,
}

/// Authenticates a page load and returns the session payload.
pub trait SessionProvider: Send + Sync {
    fn authenticate<'a>(
        &'a self,
        request: &'a SessionRequest,
    ) -> BoxFuture<'a, Result<Session, ClientError>>;
}

/// Reads the raw records a worksheet is built from.
pub trait RecordSource: Send + Sync {
    /// Demographic record of the patient, scoped to the session's identity.
    fn basic_data<'a>(
        &'a self,
        identity: &'a Identity,
        p_id: &'a str,
        token: &'a str,
    ) -> BoxFuture<'a, Result<BasicRecord, ClientError>>;

    /// The full test-result object; each category reads its own key.
    fn test_result<'a>(
        &'a self,
        p_id: &'a str,
        token: &'a str,
    ) -> BoxFuture<'a, Result<serde_json::Value, ClientError>>;
}
