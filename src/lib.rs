//! Lastfm-info - Fetch artist and track info from Last.fm
//!
//! This library provides a small typed client for the `artist.getInfo` and
//! `track.getInfo` methods of the Last.fm API 2.0.

/// Client modules for interacting with the Last.fm API
pub mod clients;
