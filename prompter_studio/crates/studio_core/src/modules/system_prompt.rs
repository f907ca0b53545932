use crate::modules::protocol::Mode;

pub const LYRICS_SYSTEM_PROMPT: &str = "You are an expert AI songwriter and musical prompt engineer. When given user specifications, you must check the top-line “Mode:” and then produce only what’s asked.";

pub const LYRICS_STRUCTURE: &str = "LYRICS: [Verse 1] – 4 lines  [Pre-Chorus] – 2 lines (omit if not requested)  [Chorus] – 4 lines, hook repeated twice  [Verse 2] – 4 lines  [Bridge] – 2 lines (optional)  [Chorus] – repeat or vary 1–2 keywords";

pub const MUSIC_PROMPT_STRUCTURE: &str = "MUSIC PROMPT: (200–350 chars to fit Udio’s box) • Genres; Moods; Theme; Tempo; Core groove; Instrumentation; Production; Vocal tone • STOP WORDS: neon, echoes, {any music references}";

pub const THEME_SYSTEM_PROMPT: &str = "You are an expert AI songwriter and musical theme engineer. Given the genres and moods, you must generate a song theme, strictly following the specified output format, including the headers and structure shown in the examples below.";

const THEME_INSTRUCTIONS: &str = r#"Produce ONLY the THEME section below, starting with 'THEME:' on a new line, followed by the content.
THEME: (1-2 short sentences.)

---

EXAMPLES: --- Example 1 ---
Genres: Neo-Soul, Contemporary R&B, Soul
Moods: Exciting, Thrilling, Invigorating, Energetic, Lively.
THEME: A journey of self-discovery, symbolized by finding a hidden forest waterfall. The song explores themes of wonder, energy, and the connection between nature and personal growth.

---

IMPORTANT: Ensure the output ONLY contains the requested section (THEME) with its header on separate lines, as demonstrated in the EXAMPLES section, and no conversational text or extra formatting outside of the generated content."#;

pub fn structure_for(mode: Mode) -> &'static str {
    if mode.wants_lyrics() {
        LYRICS_STRUCTURE
    } else {
        MUSIC_PROMPT_STRUCTURE
    }
}

pub fn lyrics_prompt(mode: Mode, specifications: &str) -> String {
    format!(
        "{LYRICS_SYSTEM_PROMPT}\n\nMode: {mode}\n\n{}\n\nUser specifications: {}\n",
        structure_for(mode),
        specifications.trim()
    )
}

pub fn music_prompt_prompt(genres: &[String], moods: &[String]) -> String {
    format!(
        "{THEME_SYSTEM_PROMPT}\n\nGenres: {}. Moods: {}\n\n\n{THEME_INSTRUCTIONS}",
        genres.join(", "),
        moods.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lyric_modes_ask_for_section_labels() {
        for mode in [Mode::FullSong, Mode::LyricsOnly] {
            let p = lyrics_prompt(mode, "  rainy tempo 90  ");
            assert!(p.contains(&format!("Mode: {}", mode.label())));
            assert!(p.contains("[Verse 1]"));
            assert!(p.contains("[Pre-Chorus]"));
            assert!(!p.contains("MUSIC PROMPT:"));
            assert!(p.ends_with("User specifications: rainy tempo 90\n"));
        }
    }

    #[test]
    fn instrumentation_mode_asks_for_music_prompt() {
        let p = lyrics_prompt(Mode::InstrumentationOnly, "synths");
        assert!(p.contains("Mode: Instrumentation Only"));
        assert!(p.contains("MUSIC PROMPT:"));
        assert!(p.contains("STOP WORDS"));
        assert!(!p.contains("[Verse 1]"));
    }

    #[test]
    fn theme_prompt_lists_selection() {
        let p = music_prompt_prompt(
            &["Funk".to_string(), "Soul".to_string()],
            &["Happy".to_string()],
        );
        assert!(p.contains("Genres: Funk, Soul. Moods: Happy"));
        assert!(p.contains("starting with 'THEME:'"));
        assert!(p.contains("EXAMPLES:"));
    }
}
