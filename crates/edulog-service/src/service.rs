use std::sync::Arc;

use jiff::civil::Date;
use jiff::Zoned;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use edulog_client::http::HttpApi;
use edulog_client::source::{RecordSource, SessionProvider};
use edulog_core::models::record::RawTestResult;
use edulog_core::models::session::Session;
use edulog_core::models::view_model::ViewModel;
use edulog_scoring::assemble::{assemble, fallback};
use edulog_scoring::{all_categories, get_category, Category};

use crate::cache::ReportCache;
use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::params::PageParams;

type SessionKey = (String, String);
type ViewKey = (&'static str, String, String);

/// Fetches and assembles worksheet view-models.
///
/// Constructed once per page process and passed to whoever renders;
/// holds the API handles and both caches. Only successful results are
/// cached, so a failed authentication or a record scored without its test
/// result is fetched again on the next call.
pub struct ReportService {
    sessions: Arc<dyn SessionProvider>,
    records: Arc<dyn RecordSource>,
    session_cache: Mutex<ReportCache<SessionKey, Session>>,
    view_cache: Mutex<ReportCache<ViewKey, ViewModel>>,
    today: fn() -> Date,
}

fn today() -> Date {
    Zoned::now().date()
}

impl ReportService {
    pub fn new(
        config: &ServiceConfig,
        sessions: Arc<dyn SessionProvider>,
        records: Arc<dyn RecordSource>,
    ) -> Self {
        Self {
            sessions,
            records,
            session_cache: Mutex::new(ReportCache::new(config.cache_capacity)),
            view_cache: Mutex::new(ReportCache::new(config.cache_capacity)),
            today,
        }
    }

    /// Service backed by the HTTP API described in `config`.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let api = Arc::new(HttpApi::new(config.api())?);
        Ok(Self::new(config, api.clone(), api))
    }

    /// Replace the clock used for the age column.
    pub fn with_clock(mut self, today: fn() -> Date) -> Self {
        self.today = today;
        self
    }

    /// View-model of one category.
    ///
    /// Without page parameters no request is made and the fallback record
    /// is returned. Any upstream failure is logged and also ends in the
    /// fallback record. The only error is an unknown category id.
    pub async fn fetch_data(
        &self,
        category_id: &str,
        params: Option<&PageParams>,
    ) -> Result<ViewModel, ServiceError> {
        let category = get_category(category_id)
            .ok_or_else(|| ServiceError::UnknownCategory(category_id.to_string()))?;

        let Some(params) = params else {
            warn!(category = category.id, "token or p_id missing, using fallback data");
            return Ok(fallback(category));
        };

        let key = (category.id, params.p_id.clone(), params.token.clone());
        if let Some(cached) = self.view_cache.lock().await.get(&key) {
            debug!(category = category.id, p_id = %params.p_id, "view-model cache hit");
            return Ok(cached);
        }

        match self.load(category, params).await {
            Ok((view_model, complete)) => {
                info!(category = category.id, p_id = %params.p_id, complete, "view-model assembled");
                if complete {
                    self.view_cache.lock().await.insert(key, view_model.clone());
                }
                Ok(view_model)
            }
            Err(e) => {
                warn!(category = category.id, p_id = %params.p_id, error = %e, "using fallback data");
                Ok(fallback(category))
            }
        }
    }

    /// View-models of every registered category, in registry order.
    pub async fn fetch_all(&self, params: Option<&PageParams>) -> Vec<(&'static Category, ViewModel)> {
        let mut out = Vec::with_capacity(all_categories().len());
        for category in all_categories() {
            let view_model = match self.fetch_data(category.id, params).await {
                Ok(vm) => vm,
                Err(_) => fallback(category),
            };
            out.push((category, view_model));
        }
        out
    }

    /// Assemble one view-model. The flag is `false` when the test-result
    /// call failed and the record was scored with defaults.
    async fn load(
        &self,
        category: &Category,
        params: &PageParams,
    ) -> Result<(ViewModel, bool), ServiceError> {
        let session = self.session(params).await?;
        let identity = session.identity()?;

        let (basic, result) = tokio::join!(
            self.records.basic_data(&identity, &params.p_id, &params.token),
            self.records.test_result(&params.p_id, &params.token),
        );
        let basic = basic.map_err(ServiceError::BasicData)?;

        let (result, complete) = match result {
            Ok(response) => {
                let raw = RawTestResult::from_response(&response, category.result_key);
                if raw.is_none() {
                    debug!(category = category.id, key = category.result_key, "no result for category");
                }
                (raw, true)
            }
            Err(e) => {
                warn!(category = category.id, error = %e, "test result unavailable, scoring with defaults");
                (None, false)
            }
        };

        let view_model = assemble(category, &basic, &session, result.as_ref(), (self.today)());
        Ok((view_model, complete))
    }

    async fn session(&self, params: &PageParams) -> Result<Session, ServiceError> {
        let key = (params.p_id.clone(), params.token.clone());
        if let Some(session) = self.session_cache.lock().await.get(&key) {
            return Ok(session);
        }

        let session = self
            .sessions
            .authenticate(&params.session_request())
            .await
            .map_err(ServiceError::Authentication)?;
        self.session_cache.lock().await.insert(key, session.clone());
        Ok(session)
    }
}
