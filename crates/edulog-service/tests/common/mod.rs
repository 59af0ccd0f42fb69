use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use edulog_client::error::ClientError;
use edulog_client::source::{BoxFuture, RecordSource, SessionProvider, SessionRequest};
use edulog_core::models::record::BasicRecord;
use edulog_core::models::session::{Identity, Session, SessionEnvelope};
use edulog_service::config::ServiceConfig;
use edulog_service::params::PageParams;
use edulog_service::service::ReportService;
use jiff::civil::{date, Date};
use serde_json::{json, Value};

/// In-memory API double that counts every call.
pub struct FakeApi {
    pub session: Session,
    pub basic: Value,
    pub results: Value,
    pub fail_auth: bool,
    pub fail_basic: bool,
    pub fail_results: AtomicBool,
    pub auth_calls: AtomicUsize,
    pub basic_calls: AtomicUsize,
    pub result_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            session: session_with_thresholds("Feinmotorik"),
            basic: json!([{
                "vorname": "Paul",
                "nachname": "Wagner",
                "geburtsdatum": "15/03/2018",
                "sprache": "Deutsch",
            }]),
            results: json!({
                "feinmotorik": {
                    "fm_score": 7,
                    "items": [{"stifthaltung": true, "schneiden": false}]
                }
            }),
            fail_auth: false,
            fail_basic: false,
            fail_results: AtomicBool::new(false),
            auth_calls: AtomicUsize::new(0),
            basic_calls: AtomicUsize::new(0),
            result_calls: AtomicUsize::new(0),
        }
    }

    pub fn total_calls(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
            + self.basic_calls.load(Ordering::SeqCst)
            + self.result_calls.load(Ordering::SeqCst)
    }
}

fn failure(url: &str, status: u16) -> ClientError {
    ClientError::Status {
        status,
        url: url.to_string(),
    }
}

impl SessionProvider for FakeApi {
    fn authenticate<'a>(
        &'a self,
        _request: &'a SessionRequest,
    ) -> BoxFuture<'a, Result<Session, ClientError>> {
        self.auth_calls.fetch_add(1, Ordering::SeqCst);
        let out = if self.fail_auth {
            Err(failure("fake://auth", 401))
        } else {
            Ok(self.session.clone())
        };
        Box::pin(async move { out })
    }
}

impl RecordSource for FakeApi {
    fn basic_data<'a>(
        &'a self,
        _identity: &'a Identity,
        _p_id: &'a str,
        _token: &'a str,
    ) -> BoxFuture<'a, Result<BasicRecord, ClientError>> {
        self.basic_calls.fetch_add(1, Ordering::SeqCst);
        let out = if self.fail_basic {
            Err(failure("fake://view-all-data", 500))
        } else {
            BasicRecord::from_response(self.basic.clone()).ok_or(ClientError::EmptyResponse {
                url: "fake://view-all-data".to_string(),
            })
        };
        Box::pin(async move { out })
    }

    fn test_result<'a>(
        &'a self,
        _p_id: &'a str,
        _token: &'a str,
    ) -> BoxFuture<'a, Result<Value, ClientError>> {
        self.result_calls.fetch_add(1, Ordering::SeqCst);
        let out = if self.fail_results.load(Ordering::SeqCst) {
            Err(failure("fake://view-data", 503))
        } else {
            Ok(self.results.clone())
        };
        Box::pin(async move { out })
    }
}

pub fn session_with_thresholds(category: &str) -> Session {
    let bands = [
        (1, 0, 2, "sehr auffällig"),
        (2, 3, 4, "auffällig"),
        (3, 5, 6, "grenzwertig"),
        (4, 7, 8, "auffällig"),
        (5, 9, 10, "gut"),
        (6, 11, 13, "sehr gut"),
    ];
    let thresholds: Vec<Value> = bands
        .iter()
        .map(|(level, min, max, text)| {
            json!({"kategorie": category, "stufe": level, "min": min, "max": max, "beschreibung": text})
        })
        .collect();

    serde_json::from_value::<SessionEnvelope>(json!({
        "data": {
            "einrichtung": {"id": 3, "name": "Kita am Park", "ort": "Leipzig"},
            "parameters": {"colors": ["c1", "c2", "c3", "c4", "c5", "c6"], "edulog_thresholds": thresholds}
        }
    }))
    .expect("valid session fixture")
    .data
}

pub fn fixed_today() -> Date {
    date(2024, 6, 1)
}

pub fn service_for(api: &Arc<FakeApi>) -> ReportService {
    let config = ServiceConfig::new("fake://api", "fake://auth");
    ReportService::new(&config, api.clone(), api.clone()).with_clock(fixed_today)
}

pub fn params() -> PageParams {
    PageParams::from_query("token=tok&p_id=42").expect("valid params")
}
