//! Gemini-backed playlist generator

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};
use crate::schema::{GenerateContentRequest, GenerateContentResponse, GeneratedTracks};
use async_trait::async_trait;
use aura_core::{MediaId, Playlist, Track};
use rand::Rng;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Cover art used when the model returns no usable media identifier.
const PLACEHOLDER_COVER: &str = "https://picsum.photos/seed/aurabeat/400";

/// Turns a free-text prompt into a playlist.
#[async_trait]
pub trait PlaylistGenerator: Send + Sync {
    /// Generate a playlist for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<Playlist>;
}

/// Playlist generator backed by the Gemini generateContent API.
pub struct GeminiGenerator {
    http: Client,
    config: GeneratorConfig,
}

impl GeminiGenerator {
    /// Create a generator from the given configuration.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("AuraBeat/{} (Desktop)", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    /// Whether a credential is present.
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn endpoint(&self, key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            key
        )
    }
}

#[async_trait]
impl PlaylistGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<Playlist> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GeneratorError::NotConfigured)?;

        debug!(model = %self.config.model, prompt_len = prompt.len(), "Requesting playlist generation");

        let request = GenerateContentRequest::for_prompt(prompt);
        let response = self
            .http
            .post(self.endpoint(key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(%status, "Generation request rejected upstream");
            return Err(GeneratorError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::Malformed(format!("Invalid response body: {e}")))?;

        let text = body
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.as_str())
            .ok_or_else(|| GeneratorError::Malformed("Response contained no candidates".into()))?;

        let generated: GeneratedTracks = serde_json::from_str(text.trim())
            .map_err(|e| GeneratorError::Malformed(format!("Invalid track document: {e}")))?;

        let playlist = build_playlist(prompt, generated);
        info!(
            playlist = %playlist.name,
            tracks = playlist.len(),
            "Playlist generated"
        );
        Ok(playlist)
    }
}

/// Assemble a catalog playlist from the model's track document.
///
/// Track identifiers are minted fresh; durations are placeholders until the
/// player adapter reports the real ones on load.
fn build_playlist(prompt: &str, generated: GeneratedTracks) -> Playlist {
    let tracks: Vec<Track> = generated
        .tracks
        .into_iter()
        .map(|t| {
            let media_id = MediaId::new(t.media_id);
            let cover_art = thumbnail_for(&media_id);
            Track::new(t.title, t.artist, t.album, media_id)
                .with_duration(placeholder_duration())
                .with_cover_art(cover_art)
        })
        .collect();

    // The response schema pins 5-10 items; a count outside that range means
    // the upstream stopped honoring it
    if !(5..=10).contains(&tracks.len()) {
        warn!(
            tracks = tracks.len(),
            "Generated track count outside the requested 5-10 range"
        );
    }

    let cover_art = tracks
        .first()
        .map(|t| thumbnail_for(&t.media_id))
        .unwrap_or_else(|| PLACEHOLDER_COVER.to_string());

    Playlist::new(format!("AI: {prompt}"), "Gemini", tracks).with_cover_art(cover_art)
}

fn thumbnail_for(media_id: &MediaId) -> String {
    format!("https://img.youtube.com/vi/{media_id}/hqdefault.jpg")
}

fn placeholder_duration() -> String {
    let mut rng = rand::thread_rng();
    format!("{}:{:02}", rng.gen_range(2..5), rng.gen_range(0..60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::GeneratedTrack;

    fn generated(n: usize) -> GeneratedTracks {
        GeneratedTracks {
            tracks: (0..n)
                .map(|i| GeneratedTrack {
                    title: format!("Song {i}"),
                    artist: "Artist".to_string(),
                    album: "Album".to_string(),
                    media_id: format!("vid{i}"),
                })
                .collect(),
        }
    }

    #[test]
    fn playlist_carries_prompt_and_creator() {
        let playlist = build_playlist("lofi beats for studying", generated(5));
        assert_eq!(playlist.name, "AI: lofi beats for studying");
        assert_eq!(playlist.creator, "Gemini");
        assert_eq!(playlist.len(), 5);
    }

    #[test]
    fn cover_art_derives_from_first_track() {
        let playlist = build_playlist("road trip", generated(6));
        assert_eq!(
            playlist.cover_art,
            "https://img.youtube.com/vi/vid0/hqdefault.jpg"
        );
        assert!(playlist.tracks[3].cover_art.contains("vid3"));
    }

    #[test]
    fn out_of_range_count_still_builds() {
        // Schema drift is logged, never fatal
        let playlist = build_playlist("two songs", generated(2));
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.name, "AI: two songs");
    }

    #[test]
    fn empty_document_falls_back_to_placeholder_cover() {
        let playlist = build_playlist("silence", generated(0));
        assert!(playlist.is_empty());
        assert_eq!(playlist.cover_art, PLACEHOLDER_COVER);
    }

    #[test]
    fn placeholder_durations_look_like_clock_times() {
        let playlist = build_playlist("anything", generated(8));
        for track in &playlist.tracks {
            let (minutes, seconds) = track.duration.split_once(':').unwrap();
            assert!(minutes.parse::<u32>().unwrap() >= 2);
            assert!(seconds.len() == 2 && seconds.parse::<u32>().unwrap() < 60);
        }
    }

    #[test]
    fn minted_track_ids_are_unique() {
        let playlist = build_playlist("dupes", generated(5));
        for (i, a) in playlist.tracks.iter().enumerate() {
            for b in &playlist.tracks[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
