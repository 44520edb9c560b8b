//! Wire types for the generateContent API
//!
//! The request pins a structured-output schema so the model response is a
//! JSON document we can deserialize directly instead of prose we would have
//! to scrape.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Top-level generateContent request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

/// Top-level generateContent response body.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

/// The structured document the model is asked to produce.
#[derive(Debug, Deserialize)]
pub struct GeneratedTracks {
    pub tracks: Vec<GeneratedTrack>,
}

#[derive(Debug, Deserialize)]
pub struct GeneratedTrack {
    pub title: String,
    pub artist: String,
    pub album: String,
    #[serde(rename = "externalMediaId")]
    pub media_id: String,
}

impl GenerateContentRequest {
    /// Build a request asking for a themed playlist of 5-10 real songs.
    pub fn for_prompt(prompt: &str) -> Self {
        let text = format!(
            "Create a playlist of 5 to 10 real, well-known songs matching this theme: \
             \"{prompt}\". For each song give its title, artist, album, and the \
             identifier of an official recording on the external media platform."
        );
        Self {
            contents: vec![Content {
                parts: vec![Part { text }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: tracks_schema(),
            },
        }
    }
}

fn tracks_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "tracks": {
                "type": "ARRAY",
                "minItems": 5,
                "maxItems": 10,
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "artist": { "type": "STRING" },
                        "album": { "type": "STRING" },
                        "externalMediaId": { "type": "STRING" }
                    },
                    "required": ["title", "artist", "album", "externalMediaId"]
                }
            }
        },
        "required": ["tracks"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let request = GenerateContentRequest::for_prompt("rainy day jazz");
        let value = serde_json::to_value(&request).unwrap();

        assert!(value["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("rainy day jazz"));
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            value["generationConfig"]["responseSchema"]["required"][0],
            "tracks"
        );
    }

    #[test]
    fn generated_tracks_deserialize() {
        let doc = r#"{
            "tracks": [
                {"title": "So What", "artist": "Miles Davis",
                 "album": "Kind of Blue", "externalMediaId": "zqNTltOGh5c"}
            ]
        }"#;
        let parsed: GeneratedTracks = serde_json::from_str(doc).unwrap();
        assert_eq!(parsed.tracks.len(), 1);
        assert_eq!(parsed.tracks[0].media_id, "zqNTltOGh5c");
    }

    #[test]
    fn response_tolerates_missing_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
