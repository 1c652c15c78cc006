use std::collections::HashMap;

use serde::Deserialize;

use crate::utils::{parse_bool, valid_langs};

/// Query string of an inbound request.
///
/// Blank values are treated as absent everywhere.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Params(HashMap<String, String>);

impl Params {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// First present value among `keys`, e.g. `["page", "p"]`.
    pub fn any(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }

    /// Value or `""`, for passing straight to the query builder.
    pub fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(parse_bool)
    }

    pub fn raw(&self) -> bool {
        self.flag("raw")
    }

    pub fn mini(&self) -> bool {
        self.flag("mini")
    }

    /// `page` or `p`, passed through as text.
    pub fn page(&self) -> String {
        self.any(&["page", "p"]).unwrap_or_default().to_string()
    }

    /// Supported languages of `lang` / `language`, comma joined.
    pub fn langs(&self) -> String {
        self.any(&["lang", "language"])
            .map(valid_langs)
            .unwrap_or_default()
    }

    pub fn limit(&self) -> Option<usize> {
        self.get("limit").and_then(|v| v.parse().ok())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
