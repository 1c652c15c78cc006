//! Preconditions checked before any upstream call.

use super::{ApiError, Params};
use crate::utils::{is_provider_link, link_has_segment, token_from_link, valid_langs};

/// Entity a link is expected to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Song,
    Album,
    Playlist,
    Artist,
    Show,
    Episode,
    Mix,
    Label,
}

impl LinkKind {
    fn markers(self) -> &'static [&'static str] {
        match self {
            LinkKind::Song => &["song"],
            LinkKind::Album => &["album"],
            LinkKind::Playlist => &["featured", "playlist"],
            LinkKind::Artist => &["artist"],
            LinkKind::Show | LinkKind::Episode => &["shows"],
            LinkKind::Mix => &["mix"],
            LinkKind::Label => &["label"],
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            LinkKind::Song => "song",
            LinkKind::Album => "album",
            LinkKind::Playlist => "playlist",
            LinkKind::Artist => "artist",
            LinkKind::Show => "podcast",
            LinkKind::Episode => "episode",
            LinkKind::Mix => "mix",
            LinkKind::Label => "label",
        }
    }

    /// `type` value of `webapi.get` for this kind.
    pub fn webapi_type(self) -> &'static str {
        match self {
            LinkKind::Show => "show",
            other => other.noun(),
        }
    }
}

/// A client identifier reduced to one upstream parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Id(String),
    Token(String),
}

pub fn require<'a>(params: &'a Params, key: &str, message: &str) -> Result<&'a str, ApiError> {
    params
        .get(key)
        .ok_or_else(|| ApiError::validation(message))
}

/// Checks that `link` belongs to the provider and points at `kind`, then
/// extracts its token.
pub fn link_token(link: &str, kind: LinkKind) -> Result<String, ApiError> {
    if !is_provider_link(link) || !link_has_segment(link, kind.markers()) {
        return Err(ApiError::validation(format!(
            "Please provide a valid JioSaavn {} link",
            kind.noun()
        )));
    }
    Ok(token_from_link(link)?)
}

/// Resolves `id`, `link` or `token`. `id` and `link` are mutually exclusive.
pub fn identifier(params: &Params, kind: LinkKind) -> Result<Identifier, ApiError> {
    let noun = kind.noun();

    match (params.get("id"), params.get("link"), params.get("token")) {
        (Some(_), Some(_), _) => Err(ApiError::validation(format!(
            "Please provide either the {noun} id or link, not both"
        ))),
        (Some(id), None, _) => Ok(Identifier::Id(id.to_string())),
        (None, Some(link), _) => Ok(Identifier::Token(link_token(link, kind)?)),
        (None, None, Some(token)) => Ok(Identifier::Token(token.to_string())),
        (None, None, None) => Err(ApiError::validation(format!(
            "Please provide the {noun} id, link or token"
        ))),
    }
}

/// Like [`identifier`] for routes that only accept `token` or `link`.
pub fn token(params: &Params, kind: LinkKind) -> Result<String, ApiError> {
    let noun = kind.noun();

    match (params.get("token"), params.get("link")) {
        (Some(_), Some(_)) => Err(ApiError::validation(format!(
            "Please provide either the {noun} token or link, not both"
        ))),
        (Some(token), None) => Ok(token.to_string()),
        (None, Some(link)) => link_token(link, kind),
        (None, None) => Err(ApiError::validation(format!(
            "Please provide the {noun} token or link"
        ))),
    }
}

/// Accepts `value` only when it is one of `allowed` (case-insensitive) and
/// returns the canonical spelling.
pub fn one_of(
    value: &str,
    allowed: &[&'static str],
    name: &str,
) -> Result<&'static str, ApiError> {
    allowed
        .iter()
        .find(|a| a.eq_ignore_ascii_case(value))
        .copied()
        .ok_or_else(|| {
            ApiError::validation(format!(
                "Invalid {name} '{value}', expected one of: {}",
                allowed.join(", ")
            ))
        })
}

/// `language` of the search routes: when supplied it must keep at least one
/// supported language.
pub fn search_language(params: &Params) -> Result<String, ApiError> {
    match params.any(&["language", "lang"]) {
        None => Ok(String::new()),
        Some(raw) => {
            let langs = valid_langs(raw);
            if langs.is_empty() {
                return Err(ApiError::validation(format!(
                    "Invalid language '{raw}', none of the given languages is supported"
                )));
            }
            Ok(langs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs.iter().copied().collect()
    }

    #[test]
    fn id_wins_over_token() {
        let p = params(&[("id", "abc"), ("token", "xyz")]);
        assert_eq!(
            identifier(&p, LinkKind::Song).unwrap(),
            Identifier::Id("abc".into())
        );
    }

    #[test]
    fn id_and_link_conflict() {
        let p = params(&[
            ("id", "abc"),
            ("link", "https://www.jiosaavn.com/song/x/abc"),
        ]);
        assert!(matches!(
            identifier(&p, LinkKind::Song),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn link_is_reduced_to_its_token() {
        let p = params(&[("link", "https://www.jiosaavn.com/album/some-name/XYZ123")]);
        assert_eq!(
            identifier(&p, LinkKind::Album).unwrap(),
            Identifier::Token("XYZ123".into())
        );
    }

    #[test]
    fn foreign_or_mismatched_links_are_rejected() {
        let p = params(&[("link", "https://example.com/album/x/XYZ123")]);
        assert!(identifier(&p, LinkKind::Album).is_err());

        let p = params(&[("link", "https://www.jiosaavn.com/song/x/XYZ123")]);
        assert!(identifier(&p, LinkKind::Album).is_err());
    }

    #[test]
    fn mix_and_label_links_yield_tokens() {
        let p = params(&[("link", "https://www.jiosaavn.com/s/mix/weekend-vibes/Mx9TQ")]);
        assert_eq!(token(&p, LinkKind::Mix).unwrap(), "Mx9TQ");

        let p = params(&[("link", "https://www.jiosaavn.com/label/t-series-albums/LcqX")]);
        assert_eq!(token(&p, LinkKind::Label).unwrap(), "LcqX");
        assert!(token(&p, LinkKind::Mix).is_err());
    }

    #[test]
    fn nothing_supplied_is_rejected() {
        assert!(identifier(&Params::default(), LinkKind::Playlist).is_err());
        assert!(token(&Params::default(), LinkKind::Show).is_err());
    }

    #[test]
    fn enum_membership_is_case_insensitive() {
        assert_eq!(
            one_of("320_kbps", &["96_KBPS", "160_KBPS", "320_KBPS"], "quality").unwrap(),
            "320_KBPS"
        );
        assert!(one_of("64_KBPS", &["96_KBPS"], "quality").is_err());
    }

    #[test]
    fn fully_invalid_search_language_is_rejected() {
        assert!(search_language(&params(&[("language", "klingon")])).is_err());
        assert_eq!(search_language(&Params::default()).unwrap(), "");
        assert_eq!(
            search_language(&params(&[("language", "hindi,xx")])).unwrap(),
            "hindi"
        );
    }
}
