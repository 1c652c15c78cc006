//! Internal `__call` names of the provider API.

/// Resolves a vanity-link token of any entity type.
pub const WEBAPI_GET: &str = "webapi.get";

pub mod modules {
    pub const LAUNCH_DATA: &str = "webapi.getLaunchData";
    pub const BROWSE: &str = "content.getBrowseModules";
}

pub mod song {
    pub const DETAILS: &str = "song.getDetails";
    pub const RECOMMEND: &str = "reco.getRecommendedSongs";
}

pub mod album {
    pub const DETAILS: &str = "album.getDetails";
    pub const RECOMMEND: &str = "reco.getRecommendedAlbums";
    pub const SAME_YEAR: &str = "search.topAlbumsoftheYear";
}

pub mod playlist {
    pub const DETAILS: &str = "playlist.getDetails";
    pub const RECOMMEND: &str = "reco.getRecommendedPlaylists";
}

pub mod artist {
    pub const DETAILS: &str = "content.getArtistDetails";
    pub const SONGS: &str = "content.getArtistTopSongs";
    pub const ALBUMS: &str = "content.getArtistAlbums";
    pub const TOP_SONGS: &str = "content.getArtistTopSongs";
}

pub mod search {
    pub const ALL: &str = "autocomplete.get";
    pub const TOP: &str = "content.getTopSearches";
    pub const SONGS: &str = "search.getResults";
    pub const ALBUMS: &str = "search.getAlbumResults";
    pub const ARTISTS: &str = "search.getArtistResults";
    pub const PLAYLISTS: &str = "search.getPlaylistResults";
    pub const MORE: &str = "content.getMoreResults";
}

pub mod radio {
    pub const FEATURED: &str = "webradio.createFeaturedStation";
    pub const ARTIST: &str = "webradio.createArtistStation";
    pub const ENTITY: &str = "webradio.createEntityStation";
    pub const SONGS: &str = "webradio.getSongs";
}

pub mod show {
    pub const DETAILS: &str = "show.getDetails";
    pub const EPISODES: &str = "show.getEpisodes";
    pub const EPISODE_DETAILS: &str = "episode.getDetails";
}

pub mod get {
    pub const TRENDING: &str = "content.getTrending";
    pub const FEATURED_PLAYLISTS: &str = "content.getFeaturedPlaylists";
    pub const CHARTS: &str = "content.getCharts";
    pub const TOP_SHOWS: &str = "content.getTopShows";
    pub const TOP_ARTISTS: &str = "content.getTopArtists";
    pub const TOP_ALBUMS: &str = "content.getTopAlbums";
    pub const MIX_DETAILS: &str = "playlist.getDetails";
    pub const LABEL_DETAILS: &str = "label.getDetails";
    pub const MEGA_MENU: &str = "content.getMegaMenu";
    pub const FEATURED_STATIONS: &str = "webradio.getFeaturedStations";
    pub const LYRICS: &str = "lyrics.getLyrics";
}
