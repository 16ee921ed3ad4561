use log::debug;
use reqwest::Request;
use serde::{Deserialize, de::DeserializeOwned};

use crate::clients::{
    entities::{Artist, Track},
    errors::Result,
};

/// Last.fm API 2.0 endpoint
pub const API_URL: &str = "http://ws.audioscrobbler.com/2.0/";

/// Environment variable read by [`LastFmClient::try_default`]
pub const API_KEY_ENV: &str = "LASTFM_API_KEY";

// Last.fm wraps every payload in a single-key object. A body without that key,
// such as {"error": 6, "message": "..."}, fails to decode.
#[derive(Deserialize, Debug)]
struct ArtistInfoResponse {
    artist: Artist,
}

#[derive(Deserialize, Debug)]
struct TrackInfoResponse {
    track: Track,
}

/// Read-only Last.fm client authenticated by a static API key.
///
/// Cloning is cheap and clones share the same connection pool.
#[derive(Clone, Debug)]
pub struct LastFmClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl LastFmClient {
    /// Create a client for the public Last.fm endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, API_URL)
    }

    pub(crate) fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        LastFmClient {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client from the `LASTFM_API_KEY` environment variable
    pub fn try_default() -> Result<Self> {
        Self::from_env_var(API_KEY_ENV)
    }

    fn from_env_var(name: &str) -> Result<Self> {
        let api_key = std::env::var(name)?;
        Ok(LastFmClient::new(api_key))
    }

    /// Fetch `artist.getInfo` for `artist`.
    ///
    /// `lang` and `username` are accepted but not sent to the service yet.
    pub async fn artist_info_by_name(
        &self,
        artist: &str,
        _lang: Option<&str>,
        _username: Option<&str>,
    ) -> Result<Artist> {
        let request = self.build_request("artist.getInfo", &[("artist", artist)])?;
        let response: ArtistInfoResponse = self.send(request).await?;
        debug!("Fetched LastFM artist info for {:?}", response.artist.name);
        Ok(response.artist)
    }

    /// Fetch `track.getInfo` for `track` by `artist`.
    ///
    /// `username` is accepted but not sent to the service yet.
    pub async fn track_info_by_name(
        &self,
        track: &str,
        artist: &str,
        _username: Option<&str>,
    ) -> Result<Track> {
        let request =
            self.build_request("track.getInfo", &[("track", track), ("artist", artist)])?;
        let response: TrackInfoResponse = self.send(request).await?;
        debug!(
            "Fetched LastFM track info for {:?} - {:?}",
            response.track.artist.name, response.track.name
        );
        Ok(response.track)
    }

    // Query order: method, format, call parameters, api_key
    fn build_request(&self, method: &str, parameters: &[(&str, &str)]) -> Result<Request> {
        let request = self
            .client
            .get(&self.base_url)
            .query(&[("method", method), ("format", "json")])
            .query(parameters)
            .query(&[("api_key", self.api_key.as_str())])
            .build()?;
        Ok(request)
    }

    async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        debug!("Sending LastFM request to {}", request.url().path());
        let bytes = self.client.execute(request).await?.bytes().await?;
        debug!("Received {} bytes from LastFM", bytes.len());
        Ok(serde_json::from_slice(&bytes)?)
    }
}
