use reqwest::StatusCode;
use std::sync::Mutex;
use studio_core::gemini::{GeminiError, PromptClient};
use studio_core::presentation::{Session, NO_RESPONSE, NO_THEME};
use studio_core::protocol::{LyricsOutput, LyricsRequest, Mode, MusicPromptOutput, MusicPromptRequest};

enum Reply<T> {
    Ok(T),
    BadStatus(&'static str),
}

struct MockPromptClient {
    lyrics: Reply<LyricsOutput>,
    theme: Reply<MusicPromptOutput>,
    lyric_requests: Mutex<Vec<LyricsRequest>>,
    theme_requests: Mutex<Vec<MusicPromptRequest>>,
}

impl MockPromptClient {
    fn new(lyrics: Reply<LyricsOutput>, theme: Reply<MusicPromptOutput>) -> Self {
        Self {
            lyrics,
            theme,
            lyric_requests: Mutex::new(Vec::new()),
            theme_requests: Mutex::new(Vec::new()),
        }
    }

    fn with_lyrics(text: &str) -> Self {
        Self::new(
            Reply::Ok(LyricsOutput {
                lyrics: text.to_string(),
                ..LyricsOutput::default()
            }),
            Reply::Ok(MusicPromptOutput::default()),
        )
    }
}

fn bad_status(body: &str) -> GeminiError {
    GeminiError::BadStatus {
        status: StatusCode::TOO_MANY_REQUESTS,
        body: body.to_string(),
    }
}

impl PromptClient for MockPromptClient {
    async fn generate_lyrics(&self, req: &LyricsRequest) -> Result<LyricsOutput, GeminiError> {
        self.lyric_requests.lock().unwrap().push(req.clone());
        match &self.lyrics {
            Reply::Ok(out) => Ok(out.clone()),
            Reply::BadStatus(body) => Err(bad_status(body)),
        }
    }

    async fn generate_music_prompt(
        &self,
        req: &MusicPromptRequest,
    ) -> Result<MusicPromptOutput, GeminiError> {
        self.theme_requests.lock().unwrap().push(req.clone());
        match &self.theme {
            Reply::Ok(out) => Ok(out.clone()),
            Reply::BadStatus(body) => Err(bad_status(body)),
        }
    }
}

#[tokio::test]
async fn submit_formats_lyrics_into_response() {
    let client = MockPromptClient::with_lyrics(
        "Sure! Here you go:\n[Verse 1]\n  Line one\nLine two\n[Chorus]\nHook\n\n[Outro]",
    );
    let mut session = Session::new();
    session.mode = Mode::LyricsOnly;
    session.genres.select("funk").unwrap();
    session.genres.select("Disco").unwrap();
    session.moods.select("Happy").unwrap();
    session.theme = "Dancing at dawn".to_string();
    session.specifications = "tempo 120, brass section".to_string();

    let response = session.submit(&client).await.unwrap().to_string();
    assert_eq!(
        response,
        "Mode: Lyrics Only\nGenre: Funk, Disco\nMood: Happy\nTheme: Dancing at dawn\nLYRICS:\n\
         [Verse 1]\nLine one\nLine two\n\n[Chorus]\nHook\n\n[Outro]"
    );
    assert!(!session.is_loading());

    let sent = client.lyric_requests.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].mode, Mode::LyricsOnly);
    assert_eq!(sent[0].specifications, "tempo 120, brass section");
}

#[tokio::test]
async fn empty_lyrics_show_placeholder() {
    let client = MockPromptClient::with_lyrics("");
    let mut session = Session::new();
    let response = session.submit(&client).await.unwrap();
    assert!(response.starts_with("Mode: Full Song\n"));
    assert!(response.ends_with(&format!("LYRICS:\n{NO_RESPONSE}")));
}

#[tokio::test]
async fn failed_submit_surfaces_error_text() {
    let client = MockPromptClient::new(
        Reply::BadStatus("quota exceeded"),
        Reply::Ok(MusicPromptOutput::default()),
    );
    let mut session = Session::new();
    let response = session.submit(&client).await.unwrap().to_string();
    assert!(response.starts_with("Error: "), "{response}");
    assert!(response.contains("quota exceeded"));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn theme_generation_sends_selection_and_stores_result() {
    let client = MockPromptClient::new(
        Reply::Ok(LyricsOutput::default()),
        Reply::Ok(MusicPromptOutput {
            music_prompt: Some("THEME: A lighthouse keeper's last night.".to_string()),
        }),
    );
    let mut session = Session::new();
    session.genres.toggle("Folk").unwrap();
    session.moods.toggle("Wistful").unwrap();
    session.moods.toggle("Calm").unwrap();

    let theme = session.generate_theme(&client).await.unwrap().to_string();
    assert_eq!(theme, "THEME: A lighthouse keeper's last night.");
    assert_eq!(session.theme, theme);

    let sent = client.theme_requests.lock().unwrap();
    assert_eq!(sent[0].genres, vec!["Folk"]);
    assert_eq!(sent[0].moods, vec!["Wistful", "Calm"]);
}

#[tokio::test]
async fn missing_or_empty_theme_uses_placeholder() {
    for out in [
        MusicPromptOutput { music_prompt: None },
        MusicPromptOutput {
            music_prompt: Some(String::new()),
        },
    ] {
        let client = MockPromptClient::new(Reply::Ok(LyricsOutput::default()), Reply::Ok(out));
        let mut session = Session::new();
        assert_eq!(session.generate_theme(&client).await.unwrap(), NO_THEME);
    }
}

#[tokio::test]
async fn whitespace_theme_is_kept_verbatim() {
    let client = MockPromptClient::new(
        Reply::Ok(LyricsOutput::default()),
        Reply::Ok(MusicPromptOutput {
            music_prompt: Some("  ".to_string()),
        }),
    );
    let mut session = Session::new();
    assert_eq!(session.generate_theme(&client).await.unwrap(), "  ");
}

#[tokio::test]
async fn failed_theme_surfaces_error_text() {
    let client = MockPromptClient::new(
        Reply::Ok(LyricsOutput::default()),
        Reply::BadStatus("model overloaded"),
    );
    let mut session = Session::new();
    let theme = session.generate_theme(&client).await.unwrap().to_string();
    assert!(theme.starts_with("Error: gemini request failed"), "{theme}");
    assert!(theme.contains("model overloaded"));
}

#[tokio::test]
async fn theme_flows_into_later_submission() {
    let client = MockPromptClient::new(
        Reply::Ok(LyricsOutput {
            lyrics: "[Chorus]\nOh".to_string(),
            ..LyricsOutput::default()
        }),
        Reply::Ok(MusicPromptOutput {
            music_prompt: Some("Night drive".to_string()),
        }),
    );
    let mut session = Session::new();
    session.generate_theme(&client).await.unwrap();
    let response = session.submit(&client).await.unwrap();
    assert!(response.contains("\nTheme: Night drive\n"));

    let mut copied = Vec::new();
    assert!(session.copy_to(&mut copied).unwrap());
    assert_eq!(String::from_utf8(copied).unwrap(), session.response());
}
