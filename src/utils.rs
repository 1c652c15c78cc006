use base64::{Engine, engine::general_purpose::STANDARD};
use des::{
    Des,
    cipher::{BlockDecrypt, KeyInit, generic_array::GenericArray},
};
use serde_json::{Map, Value};
use thiserror::Error;
use url::Url;

pub const PROVIDER_DOMAIN: &str = "jiosaavn.com";

/// Languages the provider accepts in its `L` cookie and `language` params.
pub const SUPPORTED_LANGUAGES: [&str; 16] = [
    "hindi",
    "english",
    "punjabi",
    "tamil",
    "telugu",
    "marathi",
    "gujarati",
    "bengali",
    "kannada",
    "bhojpuri",
    "malayalam",
    "urdu",
    "haryanvi",
    "rajasthani",
    "odia",
    "assamese",
];

const MEDIA_URL_KEY: &[u8; 8] = b"38346591";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("invalid link: {0}")]
    InvalidLink(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediaUrlError {
    #[error("encrypted media url is not valid base64")]
    Encoding,
    #[error("encrypted media url has an invalid length")]
    Length,
    #[error("decrypted media url is not valid utf-8")]
    Utf8,
}

/// Coerces the provider's boolean-like strings.
///
/// `"1"` and `"true"` (any case) are true, everything else is false.
pub fn parse_bool(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

/// Keeps only supported languages of a comma separated list, in order.
pub fn valid_langs(csv: &str) -> String {
    csv.split(',')
        .map(|lang| lang.trim().to_lowercase())
        .filter(|lang| SUPPORTED_LANGUAGES.contains(&lang.as_str()))
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_link(link: &str) -> Option<Url> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }
    Url::parse(link)
        .ok()
        .filter(|u| u.has_host())
        .or_else(|| Url::parse(&format!("https://{link}")).ok())
}

pub fn is_provider_link(link: &str) -> bool {
    parse_link(link)
        .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
        .is_some_and(|host| {
            host == PROVIDER_DOMAIN || host.ends_with(&format!(".{PROVIDER_DOMAIN}"))
        })
}

/// True when the link's path contains one of `markers` as a full segment.
pub fn link_has_segment(link: &str, markers: &[&str]) -> bool {
    parse_link(link)
        .and_then(|u| {
            u.path_segments()
                .map(|segments| segments.into_iter().any(|s| markers.contains(&s)))
        })
        .unwrap_or(false)
}

/// Extracts the canonical token: the last non-empty path segment.
pub fn token_from_link(link: &str) -> Result<String, LinkError> {
    let url = parse_link(link).ok_or_else(|| LinkError::InvalidLink(link.to_string()))?;
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(str::to_string)
        .ok_or_else(|| LinkError::InvalidLink(link.to_string()))
}

/// Replaces anything that is not a word character or whitespace by a space.
pub fn sanitize_query(query: &str) -> String {
    query
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Decodes HTML entities in free text returned by the provider.
///
/// Handles the named entities the provider emits plus decimal and hex
/// numeric references. Unknown entities are left untouched.
pub fn decode_html(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let decoded = tail
            .find(';')
            .filter(|end| *end <= 10)
            .and_then(|end| decode_entity(&tail[1..end]).map(|c| (c, end)));
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    if let Some(num) = entity.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    let c = match entity {
        "amp" => '&',
        "quot" => '"',
        "apos" => '\'',
        "lt" => '<',
        "gt" => '>',
        "nbsp" => '\u{a0}',
        "copy" => '©',
        "reg" => '®',
        "trade" => '™',
        "hellip" => '…',
        "ndash" => '–',
        "mdash" => '—',
        "lsquo" => '‘',
        "rsquo" => '’',
        "ldquo" => '“',
        "rdquo" => '”',
        _ => return None,
    };
    Some(c)
}

/// Converts a snake_case or kebab-case key to camelCase.
pub fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' || c == '-' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Recursively converts every object key of a JSON value to camelCase.
pub fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (to_camel_case(&k), camelize_keys(v)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_keys).collect()),
        other => other,
    }
}

/// Decrypts `more_info.encrypted_media_url` into a playable URL.
///
/// The provider encrypts the 96 kbps stream URL with DES-ECB and PKCS#7
/// padding and ships it base64 encoded.
pub fn decrypt_media_url(encrypted: &str) -> Result<String, MediaUrlError> {
    let mut data = STANDARD
        .decode(encrypted.trim())
        .map_err(|_| MediaUrlError::Encoding)?;
    if data.is_empty() || data.len() % 8 != 0 {
        return Err(MediaUrlError::Length);
    }

    let cipher = Des::new(GenericArray::from_slice(MEDIA_URL_KEY));
    for block in data.chunks_mut(8) {
        cipher.decrypt_block(GenericArray::from_mut_slice(block));
    }

    let pad = usize::from(*data.last().ok_or(MediaUrlError::Length)?);
    if (1..=8).contains(&pad) && data[data.len() - pad..].iter().all(|b| usize::from(*b) == pad) {
        data.truncate(data.len() - pad);
    }

    String::from_utf8(data).map_err(|_| MediaUrlError::Utf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use des::cipher::BlockEncrypt;

    fn encrypt(plain: &str) -> String {
        let mut data = plain.as_bytes().to_vec();
        let pad = 8 - data.len() % 8;
        data.extend(std::iter::repeat_n(pad as u8, pad));
        let cipher = Des::new(GenericArray::from_slice(MEDIA_URL_KEY));
        for block in data.chunks_mut(8) {
            cipher.encrypt_block(GenericArray::from_mut_slice(block));
        }
        STANDARD.encode(data)
    }

    #[test]
    fn media_url_decrypts_back() {
        let url = "https://aac.saavncdn.com/815/abc_96.mp4";
        assert_eq!(decrypt_media_url(&encrypt(url)).unwrap(), url);
    }

    #[test]
    fn media_url_rejects_garbage() {
        assert_eq!(decrypt_media_url("***"), Err(MediaUrlError::Encoding));
        assert_eq!(decrypt_media_url("YWJj"), Err(MediaUrlError::Length));
    }

    #[test]
    fn decode_leaves_unknown_entities() {
        assert_eq!(decode_html("a &bogus; b"), "a &bogus; b");
        assert_eq!(decode_html("fish & chips"), "fish & chips");
    }

    #[test]
    fn camel_case_ignores_leading_underscore() {
        assert_eq!(to_camel_case("_format"), "format");
        assert_eq!(to_camel_case("320kbps"), "320kbps");
    }
}
