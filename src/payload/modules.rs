use serde::Serialize;
use serde_json::Value;

use super::trending::{TrendingItem, trending_item};
use crate::{saavn::models::LaunchDataRaw, utils::decode_html};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleSection {
    pub key: String,
    pub title: String,
    pub subtitle: String,
    pub position: u64,
    pub items: Vec<TrendingItem>,
}

/// Sections of the home / browse screens, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Modules {
    pub sections: Vec<ModuleSection>,
}

/// Pairs every described module with its items. Sections whose items are
/// missing or all invalid are left out.
pub fn modules(raw: &LaunchDataRaw, mini: bool) -> Modules {
    let mut sections: Vec<ModuleSection> = raw
        .modules
        .iter()
        .filter_map(|(key, info)| {
            let source = if info.source.is_empty() {
                key
            } else {
                &info.source
            };
            let items: Vec<TrendingItem> = match raw.content.get(source) {
                Some(Value::Array(items)) => items
                    .iter()
                    .filter_map(|item| trending_item(item, mini).ok())
                    .collect(),
                _ => return None,
            };
            if items.is_empty() {
                return None;
            }

            Some(ModuleSection {
                key: key.clone(),
                title: decode_html(&info.title),
                subtitle: decode_html(&info.subtitle),
                position: info.position,
                items,
            })
        })
        .collect();

    sections.sort_by_key(|section| section.position);
    Modules { sections }
}
