//! Fixed startup library
//!
//! The catalog is seeded with a small curated set of playlists. Seed IDs
//! are stable strings (not generated) so tests and deep links can rely on
//! them.

use aura_core::{MediaId, Playlist, PlaylistId, Track, TrackId};

fn track(
    id: &str,
    title: &str,
    artist: &str,
    album: &str,
    duration: &str,
    media_id: &str,
    art_seed: &str,
) -> Track {
    Track::new(title, artist, album, MediaId::new(media_id))
        .with_id(TrackId::new(id))
        .with_duration(duration)
        .with_cover_art(format!("https://picsum.photos/seed/{art_seed}/200"))
}

/// The curated playlists the catalog starts with
pub fn initial_playlists() -> Vec<Playlist> {
    let midnight_city = track(
        "t1",
        "Midnight City",
        "M83",
        "Hurry Up, We're Dreaming",
        "4:04",
        "dX3k_QDnzHE",
        "mc",
    );
    let electric_feel = track(
        "t2",
        "Electric Feel",
        "MGMT",
        "Oracular Spectacular",
        "3:49",
        "MmZexg8sxyk",
        "ef",
    );
    let blinding_lights = track(
        "t3",
        "Blinding Lights",
        "The Weeknd",
        "After Hours",
        "3:20",
        "4NRXx6U8ABQ",
        "bl",
    );
    let go_your_own_way = track(
        "t4",
        "Go Your Own Way",
        "Fleetwood Mac",
        "Rumours",
        "3:43",
        "6ul-cZyuYq4",
        "gyow",
    );
    let bohemian_rhapsody = track(
        "t5",
        "Bohemian Rhapsody",
        "Queen",
        "A Night at the Opera",
        "5:55",
        "fJ9rUzIMcZQ",
        "br",
    );
    let rolling_in_the_deep = track(
        "t6",
        "Rolling in the Deep",
        "Adele",
        "21",
        "3:48",
        "rYEDA3JcQqw",
        "ritd",
    );
    let get_lucky = track(
        "t7",
        "Get Lucky",
        "Daft Punk",
        "Random Access Memories",
        "6:09",
        "5NV6Rdv1a3I",
        "gl",
    );
    let teen_spirit = track(
        "t8",
        "Smells Like Teen Spirit",
        "Nirvana",
        "Nevermind",
        "5:01",
        "hTWKbfoikeg",
        "slts",
    );

    vec![
        Playlist::new(
            "Chill Vibes",
            "AuraBeat",
            vec![
                midnight_city,
                electric_feel,
                go_your_own_way.clone(),
            ],
        )
        .with_id(PlaylistId::new("p1"))
        .with_cover_art("https://picsum.photos/seed/chill/400"),
        Playlist::new(
            "80s Power Hits",
            "AuraBeat",
            vec![bohemian_rhapsody, go_your_own_way, teen_spirit],
        )
        .with_id(PlaylistId::new("p2"))
        .with_cover_art("https://picsum.photos/seed/80s/400"),
        Playlist::new(
            "Modern Pop",
            "AuraBeat",
            vec![blinding_lights, rolling_in_the_deep, get_lucky],
        )
        .with_id(PlaylistId::new("p3"))
        .with_cover_art("https://picsum.photos/seed/pop/400"),
    ]
}
