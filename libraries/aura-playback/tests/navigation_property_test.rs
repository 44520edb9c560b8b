//! Property tests for circular track navigation

use aura_catalog::Catalog;
use aura_core::{MediaId, Playlist, Track};
use aura_playback::{Controller, PlaybackConfig};
use proptest::prelude::*;

fn playlist_of(n: usize) -> Playlist {
    let tracks = (0..n)
        .map(|i| {
            Track::new(
                format!("Track {i}"),
                "Artist",
                "Album",
                MediaId::new(format!("m{i}")),
            )
        })
        .collect();
    Playlist::new("Generated", "Tester", tracks)
}

fn controller_with(n: usize) -> Controller {
    let catalog = Catalog::from_playlists(vec![playlist_of(n)]);
    Controller::new(catalog, PlaybackConfig::default())
}

proptest! {
    #[test]
    fn next_moves_to_successor_mod_len(n in 1usize..20, start in 0usize..20) {
        let start = start % n;
        let mut c = controller_with(n);
        let track = c.catalog().playlists()[0].tracks[start].clone();
        c.play_track(&track);

        c.next_track();

        let expected = c.catalog().playlists()[0].tracks[(start + 1) % n].id.clone();
        prop_assert_eq!(&c.current_track().unwrap().id, &expected);
        prop_assert!(c.is_playing());
    }

    #[test]
    fn prev_moves_to_predecessor_mod_len(n in 1usize..20, start in 0usize..20) {
        let start = start % n;
        let mut c = controller_with(n);
        let track = c.catalog().playlists()[0].tracks[start].clone();
        c.play_track(&track);

        c.prev_track();

        let expected = c.catalog().playlists()[0].tracks[(start + n - 1) % n].id.clone();
        prop_assert_eq!(&c.current_track().unwrap().id, &expected);
        prop_assert!(c.is_playing());
    }

    #[test]
    fn next_n_times_returns_to_start(n in 1usize..20, start in 0usize..20) {
        let start = start % n;
        let mut c = controller_with(n);
        let track = c.catalog().playlists()[0].tracks[start].clone();
        c.play_track(&track);

        for _ in 0..n {
            c.next_track();
        }

        prop_assert_eq!(&c.current_track().unwrap().id, &track.id);
    }

    #[test]
    fn next_then_prev_is_identity(n in 1usize..20, start in 0usize..20) {
        let start = start % n;
        let mut c = controller_with(n);
        let track = c.catalog().playlists()[0].tracks[start].clone();
        c.play_track(&track);

        c.next_track();
        c.prev_track();

        prop_assert_eq!(&c.current_track().unwrap().id, &track.id);
    }
}
