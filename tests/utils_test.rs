use saavn_gateway::utils::*;
use serde_json::json;

#[test]
fn test_parse_bool() {
    for truthy in ["1", "true", "TRUE", "True", " true "] {
        assert!(parse_bool(truthy), "{truthy:?} should be true");
    }
    for falsy in ["0", "false", "", "yes", "2", "truee"] {
        assert!(!parse_bool(falsy), "{falsy:?} should be false");
    }
}

#[test]
fn test_valid_langs_keeps_supported_in_order() {
    assert_eq!(valid_langs("Hindi, english"), "hindi,english");
    assert_eq!(valid_langs("tamil,klingon,punjabi"), "tamil,punjabi");

    // Already filtered input comes back unchanged
    let all = SUPPORTED_LANGUAGES.join(",");
    assert_eq!(valid_langs(&all), all);
}

#[test]
fn test_valid_langs_all_unsupported() {
    assert_eq!(valid_langs("klingon,elvish"), "");
    assert_eq!(valid_langs(""), "");
    assert_eq!(valid_langs(",,"), "");
}

#[test]
fn test_token_from_link() {
    assert_eq!(
        token_from_link("https://www.jiosaavn.com/album/some-name/XYZ123").unwrap(),
        "XYZ123"
    );
    // Trailing slash and missing scheme
    assert_eq!(
        token_from_link("www.jiosaavn.com/song/tum-hi-ho/EToxUyFpcwQ/").unwrap(),
        "EToxUyFpcwQ"
    );
    assert!(token_from_link("").is_err());
    assert!(token_from_link("https://www.jiosaavn.com/").is_err());
}

#[test]
fn test_is_provider_link() {
    assert!(is_provider_link("https://www.jiosaavn.com/album/x/abc"));
    assert!(is_provider_link("jiosaavn.com/song/x/abc"));
    assert!(is_provider_link("HTTPS://WWW.JIOSAAVN.COM/featured/x/abc"));
    assert!(!is_provider_link("https://example.com/album/x/abc"));
    assert!(!is_provider_link("https://notjiosaavn.com/album/x/abc"));
    assert!(!is_provider_link(""));
}

#[test]
fn test_link_has_segment() {
    let link = "https://www.jiosaavn.com/featured/lets-play/LdbVc1Z5i9E_";
    assert!(link_has_segment(link, &["featured", "playlist"]));
    assert!(!link_has_segment(link, &["album"]));
    // Substrings of a segment do not count
    assert!(!link_has_segment("https://www.jiosaavn.com/albums-x/abc", &["album"]));
}

#[test]
fn test_sanitize_query() {
    assert_eq!(sanitize_query("  tum hi ho!  "), "tum hi ho");
    assert_eq!(sanitize_query("a+b"), "a b");
    assert_eq!(sanitize_query("arijit_singh"), "arijit_singh");
    assert_eq!(sanitize_query("???"), "");
}

#[test]
fn test_decode_html() {
    assert_eq!(decode_html("Tom &amp; Jerry"), "Tom & Jerry");
    assert_eq!(decode_html("&quot;Kesariya&quot;"), "\"Kesariya\"");
    assert_eq!(decode_html("It&#039;s"), "It's");
    assert_eq!(decode_html("&#x41;BC"), "ABC");
    assert_eq!(decode_html("plain text"), "plain text");
}

#[test]
fn test_camelize_keys_recursively() {
    let value = json!({
        "song_count": 3,
        "more_info": { "release_date": "2024-01-01", "320kbps": true },
        "download_url": [{ "link_type": "x" }],
        "plain": "keep_me",
    });

    assert_eq!(
        camelize_keys(value),
        json!({
            "songCount": 3,
            "moreInfo": { "releaseDate": "2024-01-01", "320kbps": true },
            "downloadUrl": [{ "linkType": "x" }],
            "plain": "keep_me",
        })
    );
}

#[test]
fn test_to_camel_case() {
    assert_eq!(to_camel_case("primary_artists"), "primaryArtists");
    assert_eq!(to_camel_case("same-year"), "sameYear");
    assert_eq!(to_camel_case("id"), "id");
}
