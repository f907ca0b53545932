pub use prompter_protocol::{
    LyricsOutput, LyricsRequest, Mode, MusicPromptOutput, MusicPromptRequest, UnknownMode,
};
