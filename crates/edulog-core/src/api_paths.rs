//! Path and header conventions of the edulog HTTP API.
//!
//! Pure string functions; no HTTP client dependency. These define the
//! canonical request layout used by `edulog-client`.

pub const TOKEN_HEADER: &str = "TOKEN";

pub const API_KEY_HEADER: &str = "API-KEY";

pub const BASIC_DATA: &str = "view-all-data";

/// Path segment of the test-result call; the patient id follows as its own
/// percent-encoded segment.
pub const TEST_RESULT: &str = "view-data";

/// Query parameter carrying the patient id on the basic-data call.
pub const PATIENT_PARAM: &str = "p_id";

/// Query parameter used when the session belongs to an institution.
pub const INSTITUTION_PARAM: &str = "Einrichtung_id";

/// Query parameter used when the session belongs to a private customer.
pub const PRIVATE_CUSTOMER_PARAM: &str = "privat_kunde_id";

pub fn basic_data(base_url: &str) -> String {
    format!("{}/{BASIC_DATA}", base_url.trim_end_matches('/'))
}
