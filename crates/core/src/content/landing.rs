//! The landing page copy: one document per site.
//!
//! The document is free-form. The service only requires a top-level JSON
//! object and otherwise stores and serves it exactly as written, so the
//! editor can change the shape of the page without a server change.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sections the editor writes (`hero`, `stats`, `features`, `faqs`).
pub const KNOWN_SECTIONS: [&str; 4] = ["hero", "stats", "features", "faqs"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandingCopy(Map<String, Value>);

impl LandingCopy {
    /// A top-level section such as `hero`.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Known sections absent from this document.
    pub fn missing_sections(&self) -> Vec<&'static str> {
        KNOWN_SECTIONS
            .into_iter()
            .filter(|name| !self.0.contains_key(*name))
            .collect()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for LandingCopy {
    fn from(doc: Map<String, Value>) -> Self {
        Self(doc)
    }
}
