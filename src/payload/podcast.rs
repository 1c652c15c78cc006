use serde::Serialize;

use super::{
    ArtistMini, Mini, PayloadError, artist_minis, collect_valid, image_links, mini, require_id,
};
use crate::{
    saavn::models::{EpisodeRaw, ShowDetailsRaw, ShowRaw, TopShowsRaw},
    types::Link,
    utils::{decode_html, parse_bool},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Show {
    pub id: String,
    pub name: String,
    pub subtitle: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub image: Vec<Link>,
    pub url: String,
    pub explicit: bool,
    pub description: String,
    pub season: u64,
    pub episodes: u64,
    pub release_date: String,
    pub language: String,
    pub category: String,
    pub artists: Vec<ArtistMini>,
    pub featured_artists: Vec<ArtistMini>,
    pub primary_artists: Vec<ArtistMini>,
}

pub fn show(raw: &ShowRaw) -> Result<Show, PayloadError> {
    Ok(Show {
        id: require_id(&raw.id, "podcast")?,
        name: decode_html(&raw.title),
        subtitle: decode_html(&raw.subtitle),
        kind: raw.kind.clone(),
        image: image_links(&raw.image),
        url: raw.url.clone(),
        explicit: parse_bool(&raw.explicit_content),
        description: decode_html(&raw.description),
        season: raw.season_number,
        episodes: raw.episode_count,
        release_date: raw.release_date.clone(),
        language: raw.language.clone(),
        category: raw.category.clone(),
        artists: artist_minis(&raw.artists),
        featured_artists: artist_minis(&raw.featured_artists),
        primary_artists: artist_minis(&raw.primary_artists),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: u64,
    pub image: Vec<Link>,
    pub url: String,
    pub release_date: String,
    pub download_url: Vec<Link>,
}

pub fn episode(raw: &EpisodeRaw) -> Result<Episode, PayloadError> {
    Ok(Episode {
        id: require_id(&raw.id, "episode")?,
        title: decode_html(&raw.title),
        description: decode_html(&raw.description),
        duration: raw.duration,
        image: image_links(&raw.image),
        url: raw.url.clone(),
        release_date: raw.release_date.clone(),
        download_url: raw.download_url.clone(),
    })
}

pub fn episodes(raw: &[EpisodeRaw]) -> Vec<Episode> {
    collect_valid(raw, episode)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowDetails {
    pub show: Show,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<Vec<Episode>>,
}

/// `mini` leaves out the embedded first page of episodes.
pub fn show_details(raw: &ShowDetailsRaw, mini: bool) -> Result<ShowDetails, PayloadError> {
    Ok(ShowDetails {
        show: show(&raw.show_details)?,
        episodes: (!mini).then(|| episodes(&raw.episodes)),
    })
}

/// `content.getTopShows` answers either with a flat `data` list or with
/// `trendingPodcasts` groups depending on the region.
pub fn top_shows(raw: &TopShowsRaw) -> Vec<Mini> {
    if !raw.data.is_empty() {
        return collect_valid(&raw.data, mini);
    }
    raw.trending_podcasts
        .iter()
        .flat_map(|group| collect_valid(&group.items, mini))
        .collect()
}

/// Shows of the first `trendingPodcasts` group.
pub fn trending_shows(raw: &TopShowsRaw) -> Vec<Mini> {
    raw.trending_podcasts
        .first()
        .map(|group| collect_valid(&group.items, mini))
        .unwrap_or_default()
}

/// Shows of the flat `data` list (featured, new and per-category listings).
pub fn featured_shows(raw: &TopShowsRaw) -> Vec<Mini> {
    collect_valid(&raw.data, mini)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn show_details_are_normalized() {
        let raw: ShowDetailsRaw = serde_json::from_value(json!({
            "show_details": {
                "id": "1101",
                "title": "On Purpose with Jay Shetty",
                "type": "show",
                "perma_url": "https://www.jiosaavn.com/shows/on-purpose/1/abc",
                "explicit_content": "0",
                "season_number": 3,
                "episode_count": "412",
                "primary_artists": [{ "id": "9", "name": "Jay Shetty" }]
            },
            "episodes": [
                { "id": "e1", "title": "Episode &#39;1&#39;", "duration": "1820" },
                { "title": "no id" }
            ]
        }))
        .unwrap();

        let out = show_details(&raw, false).unwrap();
        assert_eq!(out.show.url, "https://www.jiosaavn.com/shows/on-purpose/1/abc");
        assert_eq!(out.show.episodes, 412);
        assert_eq!(out.show.primary_artists[0].name, "Jay Shetty");
        let episodes = out.episodes.unwrap();
        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].title, "Episode '1'");
        assert_eq!(episodes[0].duration, 1820);

        assert!(show_details(&raw, true).unwrap().episodes.is_none());
    }

    #[test]
    fn missing_ids_are_rejected() {
        assert_eq!(
            show(&ShowRaw::default()),
            Err(PayloadError::MissingId { entity: "podcast" })
        );
        assert_eq!(
            episode(&EpisodeRaw::default()),
            Err(PayloadError::MissingId { entity: "episode" })
        );
    }

    #[test]
    fn top_shows_fall_back_to_trending_groups() {
        let raw: TopShowsRaw = serde_json::from_value(json!({
            "trendingPodcasts": [{ "items": [{ "id": "1", "title": "A" }, { "id": "2", "title": "B" }] }]
        }))
        .unwrap();
        assert_eq!(top_shows(&raw).len(), 2);
    }

    #[test]
    fn trending_and_featured_shows_read_their_own_lists() {
        let raw: TopShowsRaw = serde_json::from_value(json!({
            "data": [{ "id": "f1", "title": "Featured" }, { "title": "no id" }],
            "trendingPodcasts": [
                { "items": [{ "id": "t1", "title": "Trending" }] },
                { "items": [{ "id": "t2", "title": "Second group" }] }
            ]
        }))
        .unwrap();

        let trending: Vec<_> = trending_shows(&raw).into_iter().map(|s| s.id).collect();
        assert_eq!(trending, ["t1"]);
        let featured: Vec<_> = featured_shows(&raw).into_iter().map(|s| s.id).collect();
        assert_eq!(featured, ["f1"]);
        assert!(trending_shows(&TopShowsRaw::default()).is_empty());
    }
}
