use crate::modules::formatter::reformat;
use crate::modules::gemini::PromptClient;
use crate::modules::protocol::{LyricsRequest, Mode, MusicPromptRequest};
use crate::modules::selection::MultiSelect;
use std::io::Write;
use thiserror::Error;
use tracing::{info, warn};

pub const NO_RESPONSE: &str = "No response received.";
pub const NO_THEME: &str = "No theme generated.";

/// `submit` and `generate_theme` borrow the session mutably, so `Busy` cannot
/// occur through the public API; it guards the loading flag if that ever changes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("a generation request is already in flight")]
    Busy,
}

/// Renders the block shown to the user after a song request.
pub fn render_response(
    mode: Mode,
    genres: &[&str],
    moods: &[&str],
    theme: &str,
    formatted_lyrics: &str,
) -> String {
    format!(
        "Mode: {mode}\nGenre: {}\nMood: {}\nTheme: {theme}\nLYRICS:\n{formatted_lyrics}",
        genres.join(", "),
        moods.join(", ")
    )
}

/// Holds the loading flag for one request; clears it even if the request future is dropped.
struct Loading<'a>(&'a mut bool);

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

fn begin(flag: &mut bool) -> Result<Loading<'_>, SessionError> {
    if *flag {
        return Err(SessionError::Busy);
    }
    *flag = true;
    Ok(Loading(flag))
}

const ERROR_PREFIX: &str = "Error: ";

pub fn error_message(err: &impl std::fmt::Display) -> String {
    format!("{ERROR_PREFIX}{err}")
}

/// True for text produced by [`error_message`].
pub fn is_error_text(text: &str) -> bool {
    text.starts_with(ERROR_PREFIX)
}

/// Form state behind one prompter screen.
#[derive(Debug, Clone)]
pub struct Session {
    pub mode: Mode,
    pub genres: MultiSelect,
    pub moods: MultiSelect,
    pub theme: String,
    pub specifications: String,
    response: String,
    is_loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            genres: MultiSelect::genres(),
            moods: MultiSelect::moods(),
            theme: String::new(),
            specifications: String::new(),
            response: String::new(),
            is_loading: false,
        }
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading {
            "Generating..."
        } else {
            "Generate Song Output"
        }
    }

    pub fn theme_label(&self) -> &'static str {
        if self.is_loading {
            "Generating Theme..."
        } else {
            "Generate Theme Suggestion"
        }
    }

    /// Asks the model for a theme from the selected genres and moods.
    ///
    /// Failures end up in `theme` as displayable text.
    pub async fn generate_theme<C: PromptClient>(
        &mut self,
        client: &C,
    ) -> Result<&str, SessionError> {
        let _loading = begin(&mut self.is_loading)?;
        let req = MusicPromptRequest {
            genres: self.genres.to_vec(),
            moods: self.moods.to_vec(),
        };
        info!(genres = req.genres.len(), moods = req.moods.len(), "generating theme");

        self.theme = match client.generate_music_prompt(&req).await {
            Ok(out) => out
                .music_prompt
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| NO_THEME.to_string()),
            Err(e) => {
                warn!("theme generation failed: {e}");
                error_message(&e)
            }
        };
        Ok(self.theme.as_str())
    }

    /// Sends mode and specifications, then assembles the display text into `response`.
    pub async fn submit<C: PromptClient>(&mut self, client: &C) -> Result<&str, SessionError> {
        let _loading = begin(&mut self.is_loading)?;
        let req = LyricsRequest {
            mode: self.mode,
            specifications: self.specifications.clone(),
        };
        info!(mode = %req.mode, "generating song output");

        self.response = match client.generate_lyrics(&req).await {
            Ok(out) => {
                let formatted = if out.lyrics.is_empty() {
                    NO_RESPONSE.to_string()
                } else {
                    reformat(Some(&out.lyrics))
                };
                render_response(
                    self.mode,
                    self.genres.selected(),
                    self.moods.selected(),
                    &self.theme,
                    &formatted,
                )
            }
            Err(e) => {
                warn!("song generation failed: {e}");
                error_message(&e)
            }
        };
        Ok(self.response.as_str())
    }

    /// Writes the current response out. Returns `false` when there is nothing to copy.
    pub fn copy_to(&self, mut out: impl Write) -> std::io::Result<bool> {
        if self.response.is_empty() {
            return Ok(false);
        }
        out.write_all(self.response.as_bytes())?;
        out.flush()?;
        Ok(true)
    }
}
