//! Query-string assembly for `api.php` calls.

pub const DEFAULT_LANGUAGES: &str = "hindi,english";

/// Which flavour of the provider API a call expects.
///
/// Most calls want `api_version=4`; `webapi.get`, `autocomplete.get` and a
/// few others answer in the legacy shape and break when the marker is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    V4,
    Legacy,
}

/// Builds the full ordered parameter list for one upstream call.
///
/// Fixed protocol parameters come first; caller overrides replace them on
/// key collision. Overrides with an empty value are skipped so the provider
/// falls back to its own default.
pub fn build_query(
    call: &str,
    overrides: &[(&str, String)],
    version: ApiVersion,
) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = vec![
        ("__call".into(), call.into()),
        ("_format".into(), "json".into()),
        ("_marker".into(), "0".into()),
        ("ctx".into(), "web6dot0".into()),
    ];
    if version == ApiVersion::V4 {
        params.push(("api_version".into(), "4".into()));
    }

    for (key, value) in overrides {
        if value.is_empty() {
            continue;
        }
        match params.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value.clone(),
            None => params.push((key.to_string(), value.clone())),
        }
    }
    params
}

/// Value of the `L` cookie, derived from the `language` parameter.
pub fn language_cookie(params: &[(String, String)]) -> String {
    params
        .iter()
        .find(|(k, v)| k == "language" && !v.is_empty())
        .map(|(_, v)| v.clone())
        .unwrap_or_else(|| DEFAULT_LANGUAGES.to_string())
}
