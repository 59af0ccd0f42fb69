use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::fields::{de_null_default, de_optional_id, de_text};
use crate::models::colors::ColorSpec;
use crate::models::threshold::Threshold;

/// Body of the session call: `{ "data": { ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEnvelope {
    pub data: Session,
}

/// Authenticated identity and per-institution configuration.
///
/// Obtained once per (patient, token) pair and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user: Option<Value>,
    #[serde(default, rename = "einrichtung", alias = "institution")]
    pub institution: Option<Party>,
    #[serde(default, rename = "privat_kunde", alias = "privateCustomer")]
    pub private_customer: Option<Party>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub parameters: Parameters,
}

/// An institution or a private customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    #[serde(default, deserialize_with = "de_optional_id")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "de_text")]
    pub name: String,
    #[serde(default, alias = "ort", deserialize_with = "de_text")]
    pub city: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    #[serde(default)]
    pub colors: ColorSpec,
    #[serde(
        default,
        rename = "edulog_thresholds",
        alias = "thresholds",
        deserialize_with = "de_null_default"
    )]
    pub thresholds: Vec<Threshold>,
}

/// Who the session acts for. Decides which id goes on the basic-data call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Institution(String),
    PrivateCustomer(String),
}

impl Session {
    /// Institution id first, private-customer id second.
    pub fn identity(&self) -> Result<Identity, CoreError> {
        if let Some(id) = self.institution.as_ref().and_then(|p| p.id.clone()) {
            return Ok(Identity::Institution(id));
        }
        if let Some(id) = self.private_customer.as_ref().and_then(|p| p.id.clone()) {
            return Ok(Identity::PrivateCustomer(id));
        }
        Err(CoreError::MissingIdentity)
    }

    /// Company name shown on the worksheet header.
    pub fn company_name(&self) -> String {
        self.first_non_empty(|p| &p.name)
    }

    /// City shown next to the company name.
    pub fn location(&self) -> String {
        self.first_non_empty(|p| &p.city)
    }

    fn first_non_empty(&self, field: impl Fn(&Party) -> &String) -> String {
        [self.institution.as_ref(), self.private_customer.as_ref()]
            .into_iter()
            .flatten()
            .map(&field)
            .find(|s| !s.is_empty())
            .cloned()
            .unwrap_or_default()
    }
}
