//! # Payload Module
//!
//! Pure functions turning the raw records of [`crate::saavn::models`] into
//! the service's output records.
//!
//! Every normalizer has the shape `fn(&RawX, mini: bool) -> Result<X, PayloadError>`:
//!
//! - free text goes through [`decode_html`]
//! - boolean-like strings go through [`parse_bool`]
//! - image and download URLs are expanded into ascending quality lists
//! - a missing entity id is an error, anything else optional falls back to
//!   an empty value
//!
//! `mini` trims verbose sub-fields for list contexts. Items nested in a
//! container (songs of an album, results of a search) that lack an id are
//! skipped instead of failing the whole container.

use serde::Serialize;
use thiserror::Error;

use crate::{
    saavn::models::{ArtistMapRaw, ArtistMiniRaw, MiniRaw},
    types::Link,
    utils::{decode_html, decrypt_media_url, parse_bool},
};

pub mod album;
pub mod artist;
pub mod get;
pub mod modules;
pub mod playlist;
pub mod podcast;
pub mod radio;
pub mod search;
pub mod song;
pub mod trending;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("{entity} not found")]
    MissingId { entity: &'static str },
}

/// Image sizes the CDN serves, ascending.
pub const IMAGE_QUALITIES: [&str; 3] = ["50x50", "150x150", "500x500"];

/// Stream bitrates derivable from the decrypted media URL, ascending.
pub const DOWNLOAD_QUALITIES: [(&str, &str); 3] =
    [("_96", "96kbps"), ("_160", "160kbps"), ("_320", "320kbps")];

pub(crate) fn require_id(id: &str, entity: &'static str) -> Result<String, PayloadError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(PayloadError::MissingId { entity });
    }
    Ok(id.to_string())
}

/// Expands one CDN image URL into every size tier.
pub fn image_links(url: &str) -> Vec<Link> {
    let url = url.trim();
    if url.is_empty() {
        return Vec::new();
    }
    let url = match url.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    };

    let current = IMAGE_QUALITIES
        .iter()
        .rev()
        .find(|tier| url.contains(*tier));

    IMAGE_QUALITIES
        .iter()
        .map(|quality| {
            let link = match current {
                Some(tier) => url.replacen(tier, quality, 1),
                None => url.clone(),
            };
            Link::new(*quality, link)
        })
        .collect()
}

/// Decrypts `encrypted_media_url` and expands it into every bitrate.
///
/// Returns an empty list when the value is absent or does not decrypt.
pub fn download_links(encrypted: &str) -> Vec<Link> {
    if encrypted.trim().is_empty() {
        return Vec::new();
    }
    let url = match decrypt_media_url(encrypted) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!("skipping download links: {e}");
            return Vec::new();
        }
    };

    DOWNLOAD_QUALITIES
        .iter()
        .map(|(suffix, quality)| Link::new(*quality, url.replacen("_96", suffix, 1)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistMini {
    pub id: String,
    pub name: String,
    pub url: String,
    pub role: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image: Vec<Link>,
}

pub fn artist_mini(raw: &ArtistMiniRaw) -> ArtistMini {
    ArtistMini {
        id: raw.id.clone(),
        name: decode_html(&raw.name),
        url: raw.perma_url.clone(),
        role: raw.role.clone(),
        kind: raw.kind.clone(),
        image: image_links(&raw.image),
    }
}

pub(crate) fn artist_minis(raw: &[ArtistMiniRaw]) -> Vec<ArtistMini> {
    raw.iter().map(artist_mini).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistMap {
    pub primary_artists: Vec<ArtistMini>,
    pub featured_artists: Vec<ArtistMini>,
    pub artists: Vec<ArtistMini>,
}

pub fn artist_map(raw: &ArtistMapRaw) -> ArtistMap {
    ArtistMap {
        primary_artists: artist_minis(&raw.primary_artists),
        featured_artists: artist_minis(&raw.featured_artists),
        artists: artist_minis(&raw.artists),
    }
}

/// Compact record used by charts, top searches and featured listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mini {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub image: Vec<Link>,
    pub explicit: bool,
    pub description: String,
}

pub fn mini(raw: &MiniRaw) -> Result<Mini, PayloadError> {
    let description = if raw.description.is_empty() {
        &raw.header_desc
    } else {
        &raw.description
    };

    Ok(Mini {
        id: require_id(&raw.id, "item")?,
        name: decode_html(&raw.title),
        subtitle: decode_html(&raw.subtitle),
        kind: raw.kind.clone(),
        url: raw.perma_url.clone(),
        image: image_links(&raw.image),
        explicit: parse_bool(&raw.explicit_content),
        description: decode_html(description),
    })
}

/// Normalizes every item of a nested list, dropping the ones without an id.
pub(crate) fn collect_valid<R, T>(
    raw: &[R],
    f: impl Fn(&R) -> Result<T, PayloadError>,
) -> Vec<T> {
    raw.iter().filter_map(|item| f(item).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_tiers_are_ascending_and_https() {
        let links = image_links("http://c.saavncdn.com/123/cover-150x150.jpg");
        let qualities: Vec<_> = links.iter().map(|l| l.quality.as_str()).collect();
        assert_eq!(qualities, IMAGE_QUALITIES);
        assert_eq!(links[0].link, "https://c.saavncdn.com/123/cover-50x50.jpg");
        assert_eq!(links[2].link, "https://c.saavncdn.com/123/cover-500x500.jpg");
    }

    #[test]
    fn image_without_tier_repeats_the_url() {
        let links = image_links("https://c.saavncdn.com/artist.jpg");
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|l| l.link == "https://c.saavncdn.com/artist.jpg"));
        assert!(image_links("").is_empty());
    }

    #[test]
    fn undecryptable_media_url_gives_no_links() {
        assert!(download_links("").is_empty());
        assert!(download_links("%%%").is_empty());
    }

    #[test]
    fn mini_requires_an_id() {
        let raw = MiniRaw {
            title: "Top 50".into(),
            ..Default::default()
        };
        assert_eq!(
            mini(&raw),
            Err(PayloadError::MissingId { entity: "item" })
        );
    }

    #[test]
    fn mini_decodes_text() {
        let raw = MiniRaw {
            id: "42".into(),
            title: "Rock &amp; Roll".into(),
            header_desc: "Best of &quot;90s&quot;".into(),
            explicit_content: "1".into(),
            ..Default::default()
        };
        let out = mini(&raw).unwrap();
        assert_eq!(out.name, "Rock & Roll");
        assert_eq!(out.description, "Best of \"90s\"");
        assert!(out.explicit);
    }
}
