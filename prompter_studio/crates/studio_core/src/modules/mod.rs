pub mod catalog;
pub mod formatter;
pub mod gemini;
pub mod presentation;
pub mod protocol;
pub mod selection;
pub mod system_prompt;
