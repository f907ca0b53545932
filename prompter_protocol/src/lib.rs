use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the model is asked to produce.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    #[serde(rename = "Full Song")]
    FullSong,
    #[serde(rename = "Lyrics Only")]
    LyricsOnly,
    #[serde(rename = "Instrumentation Only")]
    InstrumentationOnly,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::FullSong, Mode::LyricsOnly, Mode::InstrumentationOnly];

    pub fn label(self) -> &'static str {
        match self {
            Mode::FullSong => "Full Song",
            Mode::LyricsOnly => "Lyrics Only",
            Mode::InstrumentationOnly => "Instrumentation Only",
        }
    }

    pub fn wants_lyrics(self) -> bool {
        matches!(self, Mode::FullSong | Mode::LyricsOnly)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown mode {:?} (expected one of: Full Song, Lyrics Only, Instrumentation Only)",
            self.0
        )
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match norm.as_str() {
            "full song" | "full" | "song" => Ok(Mode::FullSong),
            "lyrics only" | "lyrics" => Ok(Mode::LyricsOnly),
            "instrumentation only" | "instrumentation" | "instrumental" => {
                Ok(Mode::InstrumentationOnly)
            }
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LyricsRequest {
    pub mode: Mode,
    pub specifications: String,
}

/// Some model variants echo the form fields back next to the lyrics.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LyricsOutput {
    #[serde(default)]
    pub lyrics: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicPromptRequest {
    pub genres: Vec<String>,
    pub moods: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MusicPromptOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_prompt: Option<String>,
}
