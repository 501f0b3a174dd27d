//! Music domain fixtures
//!
//! Field values are kept as [`Value`]s so tests can share a name or an
//! artist list between several objects.

use telepath_core::{Media, TelepathResult, Value, MEDIUM_ALL};
use telepath_pack::{AdapterRegistry, ObjectAdapter};

pub const ARTIST_CONSTRUCTOR: &str = "music.Artist";
pub const ALBUM_CONSTRUCTOR: &str = "music.Album";
pub const PLAYLIST_CONSTRUCTOR: &str = "music.Playlist";

pub const MUSIC_PLAYER_JS: &str = "music_player.js";
pub const PLAYLIST_JS: &str = "playlist.js";
pub const PLAYLIST_CSS: &str = "playlist.css";

/// A performing artist
#[derive(Debug)]
pub struct Artist {
    pub name: Value,
}

impl Artist {
    pub fn new(name: impl Into<Value>) -> Self {
        Artist { name: name.into() }
    }
}

/// An album credited to a list of artists
#[derive(Debug)]
pub struct Album {
    pub title: Value,
    pub artists: Value,
}

impl Album {
    pub fn new(title: impl Into<Value>, artists: impl Into<Value>) -> Self {
        Album {
            title: title.into(),
            artists: artists.into(),
        }
    }
}

/// A named playlist with free-form metadata
#[derive(Debug)]
pub struct Playlist {
    pub name: String,
    pub metadata: Vec<(String, Value)>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Playlist {
            name: name.into(),
            metadata: Vec::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }
}

pub struct ArtistAdapter;

impl ObjectAdapter<Artist> for ArtistAdapter {
    fn js_constructor(&self) -> &str {
        ARTIST_CONSTRUCTOR
    }

    fn js_args(&self, obj: &Artist) -> TelepathResult<Vec<Value>> {
        Ok(vec![obj.name.clone()])
    }
}

pub struct AlbumAdapter;

impl ObjectAdapter<Album> for AlbumAdapter {
    fn js_constructor(&self) -> &str {
        ALBUM_CONSTRUCTOR
    }

    fn js_args(&self, obj: &Album) -> TelepathResult<Vec<Value>> {
        Ok(vec![obj.title.clone(), obj.artists.clone()])
    }

    fn media(&self) -> Media {
        Media::with_js([MUSIC_PLAYER_JS])
    }
}

pub struct PlaylistAdapter;

impl ObjectAdapter<Playlist> for PlaylistAdapter {
    fn js_constructor(&self) -> &str {
        PLAYLIST_CONSTRUCTOR
    }

    fn js_args(&self, obj: &Playlist) -> TelepathResult<Vec<Value>> {
        Ok(vec![
            obj.name.clone().into(),
            Value::Dict(obj.metadata.clone()),
        ])
    }

    fn media(&self) -> Media {
        Media::with_js([MUSIC_PLAYER_JS, PLAYLIST_JS]).css(MEDIUM_ALL, [PLAYLIST_CSS])
    }
}

/// Bind the music adapters
pub fn register_music(registry: &AdapterRegistry) {
    registry.register::<Artist, _>(ArtistAdapter);
    registry.register::<Album, _>(AlbumAdapter);
    registry.register::<Playlist, _>(PlaylistAdapter);
}

/// Fresh registry with the music adapters bound
pub fn music_registry() -> AdapterRegistry {
    let registry = AdapterRegistry::new();
    register_music(&registry);
    registry
}
