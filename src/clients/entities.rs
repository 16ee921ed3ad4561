//! Typed views of the `artist.getInfo` and `track.getInfo` payloads.
//!
//! Last.fm may omit any field, so every struct decodes missing keys to their
//! empty value and ignores keys it does not know. Counts, durations and flags
//! are kept as the strings the service sends. An explicit `null` decodes the
//! same way as a missing key.

use serde::{Deserialize, Deserializer, Serialize};

/// Artist as returned by `artist.getInfo`, also nested in similar artists and tracks
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Artist {
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// `MusicBrainz` identifier
    #[serde(deserialize_with = "null_as_default")]
    pub mbid: String,
    /// Last.fm page of the artist
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Artwork in several sizes
    #[serde(deserialize_with = "null_as_default")]
    pub image: Vec<Image>,
    /// Listener and play counts
    #[serde(deserialize_with = "null_as_default")]
    pub stats: ArtistStats,
    /// `"0"` or `"1"`
    #[serde(deserialize_with = "null_as_default")]
    pub streamable: String,
    /// `"0"` or `"1"`
    #[serde(rename = "ontour", deserialize_with = "null_as_default")]
    pub on_tour: String,
    /// Artists Last.fm considers similar
    #[serde(deserialize_with = "null_as_default")]
    pub similar: SimilarArtists,
    /// Top tags of the artist
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Tags,
    /// Biography
    #[serde(deserialize_with = "null_as_default")]
    pub bio: ArtistBio,
}

/// One artwork variant
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Image {
    /// Image location
    #[serde(rename = "#text", deserialize_with = "null_as_default")]
    pub url: String,
    /// Size label such as `small` or `extralarge`
    #[serde(deserialize_with = "null_as_default")]
    pub size: String,
}

/// Listener and play counts of an artist
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ArtistStats {
    /// Number of distinct listeners
    #[serde(deserialize_with = "null_as_default")]
    pub listeners: String,
    /// Total number of scrobbles
    #[serde(deserialize_with = "null_as_default")]
    pub playcount: String,
}

/// `similar` container, keeps the service order
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SimilarArtists {
    /// Similar artists
    #[serde(deserialize_with = "null_as_default")]
    pub artist: Vec<Artist>,
}

/// `tags` / `toptags` container
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Tags {
    /// Tags
    #[serde(deserialize_with = "null_as_default")]
    pub tag: Vec<Tag>,
}

/// A user-applied tag
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Tag {
    /// Tag name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Last.fm page of the tag
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Wiki excerpt attached to artists and tracks
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WikiInfo {
    /// Publication date as formatted by Last.fm
    #[serde(deserialize_with = "null_as_default")]
    pub published: String,
    /// Short HTML summary
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    /// Full HTML content
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}

/// Artist biography. The wiki keys live directly in the `bio` object.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ArtistBio {
    /// Related links
    #[serde(deserialize_with = "null_as_default")]
    pub links: Links,
    /// Year the artist was formed
    #[serde(rename = "yearformed", deserialize_with = "null_as_default")]
    pub year_formed: String,
    /// Published date, summary and content
    #[serde(flatten)]
    pub wiki: WikiInfo,
}

/// `links` container of a biography
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Links {
    /// Single link element
    #[serde(deserialize_with = "null_as_default")]
    pub link: Link,
}

/// An outbound link
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Link {
    /// Display text
    #[serde(rename = "#text", deserialize_with = "null_as_default")]
    pub text: String,
    /// Relation type
    #[serde(deserialize_with = "null_as_default")]
    pub rel: String,
    /// Target URL
    #[serde(rename = "href", deserialize_with = "null_as_default")]
    pub url: String,
}

/// Track as returned by `track.getInfo`
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Track {
    /// Last.fm track id
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Track title
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// `MusicBrainz` identifier
    #[serde(deserialize_with = "null_as_default")]
    pub mbid: String,
    /// Last.fm page of the track
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Duration in milliseconds, as text
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
    /// Number of distinct listeners
    #[serde(deserialize_with = "null_as_default")]
    pub listeners: String,
    /// Total number of scrobbles
    #[serde(deserialize_with = "null_as_default")]
    pub playcount: String,
    /// Streaming availability
    #[serde(deserialize_with = "null_as_default")]
    pub streamable: Streamable,
    /// Performing artist, usually only name, mbid and url
    #[serde(deserialize_with = "null_as_default")]
    pub artist: Artist,
    /// Album the track appears on
    #[serde(deserialize_with = "null_as_default")]
    pub album: Album,
    /// Top tags of the track
    #[serde(rename = "toptags", deserialize_with = "null_as_default")]
    pub top_tags: Tags,
    /// Wiki excerpt
    #[serde(deserialize_with = "null_as_default")]
    pub wiki: WikiInfo,
}

/// Streaming flags of a track
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Streamable {
    /// Preview streamable flag
    #[serde(rename = "#text", deserialize_with = "null_as_default")]
    pub text: String,
    /// Full track streamable flag
    #[serde(rename = "fulltrack", deserialize_with = "null_as_default")]
    pub full_track: String,
}

/// Album reference inside a track
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Album {
    /// Album artist name
    #[serde(deserialize_with = "null_as_default")]
    pub artist: String,
    /// Album title
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// `MusicBrainz` identifier
    #[serde(deserialize_with = "null_as_default")]
    pub mbid: String,
    /// Last.fm page of the album
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Cover art in several sizes
    #[serde(deserialize_with = "null_as_default")]
    pub image: Vec<Image>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
