use reqwest::Url;

use edulog_client::source::SessionRequest;

/// Parameters a worksheet page carries in its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams {
    pub token: String,
    pub p_id: String,
    pub einrichtung_id: Option<String>,
}

impl PageParams {
    /// Read `token`, `p_id` and the optional `einrichtung_id` from a full
    /// page URL. `None` when the URL is invalid or either required
    /// parameter is missing or empty.
    pub fn from_url(url: &str) -> Option<Self> {
        let url = Url::parse(url).ok()?;
        Self::from_pairs(url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())))
    }

    /// Same as [`PageParams::from_url`] for a bare query string, with or
    /// without the leading `?`.
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.trim_start_matches('?');
        Self::from_url(&format!("http://localhost/?{query}"))
    }

    fn from_pairs(pairs: impl Iterator<Item = (String, String)>) -> Option<Self> {
        let mut token = None;
        let mut p_id = None;
        let mut einrichtung_id = None;
        for (key, value) in pairs {
            let value = value.trim().to_string();
            if value.is_empty() {
                continue;
            }
            match key.as_str() {
                "token" => token = Some(value),
                "p_id" => p_id = Some(value),
                "einrichtung_id" => einrichtung_id = Some(value),
                _ => {}
            }
        }
        Some(Self {
            token: token?,
            p_id: p_id?,
            einrichtung_id,
        })
    }

    pub fn session_request(&self) -> SessionRequest {
        SessionRequest {
            token: self.token.clone(),
            p_id: self.p_id.clone(),
            einrichtung_id: self.einrichtung_id.clone(),
        }
    }
}
