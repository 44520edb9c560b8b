//! Generated playlists flowing into the playback controller

use aura_catalog::Catalog;
use aura_generate::{GeminiGenerator, GeneratorConfig, PlaylistGenerator};
use aura_playback::{Controller, PlaybackConfig};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn success_body() -> serde_json::Value {
    let tracks: Vec<_> = (0..5)
        .map(|i| {
            json!({
                "title": format!("Song {i}"),
                "artist": "Some Artist",
                "album": "Some Album",
                "externalMediaId": format!("vid{i}"),
            })
        })
        .collect();
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": json!({ "tracks": tracks }).to_string() } ] } }
        ]
    })
}

#[tokio::test]
async fn generated_playlist_lands_first_and_selected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body()))
        .mount(&server)
        .await;

    let generator =
        GeminiGenerator::new(GeneratorConfig::new("test-key").with_base_url(server.uri()))
            .unwrap();
    let playlist = generator.generate("gym warmup").await.unwrap();
    let id = playlist.id.clone();

    let mut controller = Controller::new(Catalog::seeded(), PlaybackConfig::default());
    let seeded = controller.catalog().len();
    controller.on_playlist_generated(playlist);

    assert_eq!(controller.catalog().len(), seeded + 1);
    assert_eq!(controller.catalog().playlists()[0].id, id);
    assert_eq!(controller.selected_playlist().unwrap().id, id);
    assert!(!controller.is_playing());
}

#[tokio::test]
async fn failed_generation_leaves_the_catalog_alone() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("try again later"))
        .mount(&server)
        .await;

    let generator =
        GeminiGenerator::new(GeneratorConfig::new("test-key").with_base_url(server.uri()))
            .unwrap();
    let mut controller = Controller::new(Catalog::seeded(), PlaybackConfig::default());
    let seeded = controller.catalog().len();
    let before = controller.selected_playlist().unwrap().id.clone();

    // A failed generation is surfaced to the user; nothing is applied
    if let Ok(playlist) = generator.generate("gym warmup").await {
        controller.on_playlist_generated(playlist);
    }

    assert_eq!(controller.catalog().len(), seeded);
    assert_eq!(controller.selected_playlist().unwrap().id, before);
}
