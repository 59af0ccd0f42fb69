//! reqwest implementation of the API calls.
//!
//! ```text
//! POST {auth_url}                         Authorization: Bearer {token}
//!      {"p_id": ..., "einrichtung_id": ...}
//! GET  {base_url}/view-all-data?p_id=..&Einrichtung_id=..|privat_kunde_id=..
//! GET  {base_url}/view-data/{p_id}        TOKEN, API-KEY headers
//! ```
//!
//! One attempt per call. Non-2xx statuses are errors.

use edulog_core::api_paths;
use edulog_core::models::record::BasicRecord;
use edulog_core::models::session::{Identity, Session, SessionEnvelope};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::ClientError;
use crate::source::{BoxFuture, RecordSource, SessionProvider, SessionRequest};

pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Session call. The token is sent as a bearer credential and never
    /// logged.
    pub async fn authenticate(&self, request: &SessionRequest) -> Result<Session, ClientError> {
        let url = self.config.auth_url.as_str();
        info!(p_id = %request.p_id, "authenticating session");

        let response = self
            .client
            .post(url)
            .bearer_auth(&request.token)
            .json(&json!({
                "p_id": request.p_id,
                "einrichtung_id": request.einrichtung_id,
            }))
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(url, e))?;

        let body = read_json(url, response).await?;
        let envelope: SessionEnvelope =
            serde_json::from_value(body).map_err(|e| ClientError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        Ok(envelope.data)
    }

    pub async fn basic_data(
        &self,
        identity: &Identity,
        p_id: &str,
        token: &str,
    ) -> Result<BasicRecord, ClientError> {
        let url = api_paths::basic_data(&self.config.base_url);
        let scope = match identity {
            Identity::Institution(id) => (api_paths::INSTITUTION_PARAM, id.as_str()),
            Identity::PrivateCustomer(id) => (api_paths::PRIVATE_CUSTOMER_PARAM, id.as_str()),
        };
        debug!(p_id, scope = scope.0, "fetching basic data");

        let response = self
            .data_request(self.client.get(&url), token)
            .query(&[(api_paths::PATIENT_PARAM, p_id), scope])
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(&url, e))?;

        let body = read_json(&url, response).await?;
        BasicRecord::from_response(body).ok_or(ClientError::EmptyResponse { url })
    }

    pub async fn test_result(&self, p_id: &str, token: &str) -> Result<Value, ClientError> {
        let url = self.test_result_url(p_id)?;
        debug!(p_id, "fetching test result");

        let response = self
            .data_request(self.client.get(url.clone()), token)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(url.as_str(), e))?;

        read_json(url.as_str(), response).await
    }

    /// `{base_url}/view-data/{p_id}` with the id kept as one path segment,
    /// so `/`, `?` or `..` in it cannot change the request target.
    fn test_result_url(&self, p_id: &str) -> Result<Url, ClientError> {
        let base = &self.config.base_url;
        let mut url = Url::parse(base)
            .map_err(|e| ClientError::Config(format!("invalid base_url {base}: {e}")))?;
        url.path_segments_mut()
            .map_err(|()| ClientError::Config(format!("base_url {base} cannot carry a path")))?
            .pop_if_empty()
            .push(api_paths::TEST_RESULT)
            .push(p_id);
        Ok(url)
    }

    fn data_request(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request
            .header(api_paths::TOKEN_HEADER, token)
            .header(api_paths::API_KEY_HEADER, &self.config.api_key)
            .header(CONTENT_TYPE, "application/json")
    }
}

async fn read_json(url: &str, response: Response) -> Result<Value, ClientError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    response.json::<Value>().await.map_err(|e| ClientError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

impl SessionProvider for HttpApi {
    fn authenticate<'a>(
        &'a self,
        request: &'a SessionRequest,
    ) -> BoxFuture<'a, Result<Session, ClientError>> {
        Box::pin(HttpApi::authenticate(self, request))
    }
}

impl RecordSource for HttpApi {
    fn basic_data<'a>(
        &'a self,
        identity: &'a Identity,
        p_id: &'a str,
        token: &'a str,
    ) -> BoxFuture<'a, Result<BasicRecord, ClientError>> {
        Box::pin(HttpApi::basic_data(self, identity, p_id, token))
    }

    fn test_result<'a>(
        &'a self,
        p_id: &'a str,
        token: &'a str,
    ) -> BoxFuture<'a, Result<Value, ClientError>> {
        Box::pin(HttpApi::test_result(self, p_id, token))
    }
}
