//! Hard-coded landing page content.

use super::model::{Playlist, Track};

fn track(
    id: &str,
    title: &str,
    artist: &str,
    cover_art: &str,
    duration: &str,
    genre: &str,
    mood: &str,
) -> Track {
    Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        cover_art: cover_art.to_string(),
        duration: duration.to_string(),
        genre: genre.to_string(),
        mood: mood.to_string(),
        audio_src: None,
    }
}

fn playlist(id: &str, title: &str, description: &str, cover_art: &str, track_count: u32) -> Playlist {
    Playlist {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        cover_art: cover_art.to_string(),
        track_count,
    }
}

pub fn featured_tracks() -> Vec<Track> {
    vec![
        track(
            "1",
            "Midnight Glow",
            "Electronic Dreams",
            "https://images.unsplash.com/photo-1514525253161-7a46d19cd819",
            "3:24",
            "Electronic",
            "Uplifting",
        ),
        track(
            "2",
            "Urban Rhythm",
            "City Beats",
            "https://images.unsplash.com/photo-1501386761578-eac5c94b800a",
            "2:56",
            "Hip-Hop",
            "Energetic",
        ),
        track(
            "3",
            "Gentle Wind",
            "Nature Sounds",
            "https://images.unsplash.com/photo-1459749411175-04bf5292ceea",
            "4:12",
            "Ambient",
            "Calm",
        ),
        track(
            "4",
            "Sunset Drive",
            "Coastal Vibes",
            "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f",
            "3:45",
            "Indie",
            "Relaxed",
        ),
        track(
            "5",
            "Digital Dawn",
            "Future Sound",
            "https://images.unsplash.com/photo-1470225620780-dba8ba36b745",
            "3:18",
            "Electronic",
            "Focused",
        ),
        track(
            "6",
            "City Lights",
            "Urban Jazz",
            "https://images.unsplash.com/photo-1504898770365-14faca6a7320",
            "4:02",
            "Jazz",
            "Smooth",
        ),
        track(
            "7",
            "Mountain Echo",
            "Wild Symphony",
            "https://images.unsplash.com/photo-1446057032654-9d8885db76c6",
            "5:16",
            "Orchestral",
            "Epic",
        ),
        track(
            "8",
            "Neon Dreams",
            "Synthwave Collective",
            "https://images.unsplash.com/photo-1508700115892-45ecd05ae2ad",
            "3:37",
            "Synthwave",
            "Nostalgic",
        ),
    ]
}

pub fn playlists() -> Vec<Playlist> {
    vec![
        playlist(
            "p1",
            "Focus & Concentration",
            "Background music to help you stay focused and productive",
            "https://images.unsplash.com/photo-1551817958-20204d6ab212",
            42,
        ),
        playlist(
            "p2",
            "YouTube Ready",
            "Copyright-free tracks perfect for content creation",
            "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7",
            38,
        ),
        playlist(
            "p3",
            "Corporate & Presentations",
            "Professional background music for business videos",
            "https://images.unsplash.com/photo-1556761175-5973dc0f32e7",
            27,
        ),
        playlist(
            "p4",
            "Cinematic Soundscapes",
            "Emotional orchestral pieces for dramatic scenes",
            "https://images.unsplash.com/photo-1485579149621-3123dd979885",
            31,
        ),
    ]
}
