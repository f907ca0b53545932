pub mod modules;

pub use modules::{catalog, formatter, gemini, presentation, protocol, selection, system_prompt};
