/// Data entities for artists, tracks and albums
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Last.fm API client
pub mod lastfm;

pub use lastfm::LastFmClient;
