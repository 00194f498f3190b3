//! Remote record panel: fetch one JSON record and show its fields.
//!
//! Only runs on pages that carry the panel markup. Failures are logged and
//! not retried.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use serde::{Deserialize, Serialize};

/// Element id whose presence enables the panel.
pub const PANEL_MARKER_ID: &str = "userId";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseRecord {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

impl ShowcaseRecord {
    /// `(element id, text)` pairs to write into the panel.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, String); 4] {
        [
            ("userId", self.user_id.to_string()),
            ("id", self.id.to_string()),
            ("completed", self.completed.to_string()),
            ("title", self.title.clone()),
        ]
    }
}

#[cfg(feature = "hydrate")]
pub use browser::fetch_record;

#[cfg(feature = "hydrate")]
mod browser {
    use super::ShowcaseRecord;

    pub async fn fetch_record(endpoint: &str) -> Result<ShowcaseRecord, gloo_net::Error> {
        let response = gloo_net::http::Request::get(endpoint).send().await?;
        response.json::<ShowcaseRecord>().await
    }
}
