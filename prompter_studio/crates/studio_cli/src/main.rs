use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use studio_core::catalog;
use studio_core::formatter::reformat;
use studio_core::gemini::{parse_backend, GeminiClient, GeminiConfig};
use studio_core::presentation::{is_error_text, Session};
use studio_core::protocol::Mode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "prompter", about = "Generate song lyrics, music prompts and themes with Gemini")]
struct Args {
    #[command(flatten)]
    gemini: GeminiArgs,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(clap::Args, Debug)]
struct GeminiArgs {
    /// auto, aistudio, oauth or vertex.
    #[arg(long, global = true)]
    backend: Option<String>,

    #[arg(long, global = true)]
    model: Option<String>,

    /// Read the AI Studio API key from a file instead of GEMINI_API_KEY.
    #[arg(long, value_name = "PATH", global = true)]
    api_key_file: Option<PathBuf>,

    #[arg(long, global = true)]
    vertex_project: Option<String>,

    #[arg(long, global = true)]
    vertex_location: Option<String>,

    #[arg(long, global = true)]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// List the genres that can be selected.
    Genres {
        #[arg(long)]
        search: Option<String>,
    },
    /// List the moods that can be selected.
    Moods {
        #[arg(long)]
        search: Option<String>,
    },
    /// Suggest a song theme for the selected genres and moods.
    Theme {
        #[arg(long = "genre", value_name = "GENRE")]
        genres: Vec<String>,
        #[arg(long = "mood", value_name = "MOOD")]
        moods: Vec<String>,
    },
    /// Generate lyrics or a music prompt and print the assembled output.
    Song {
        #[arg(long, default_value = "Full Song")]
        mode: Mode,
        #[arg(long = "genre", value_name = "GENRE")]
        genres: Vec<String>,
        #[arg(long = "mood", value_name = "MOOD")]
        moods: Vec<String>,
        #[arg(long, conflicts_with = "suggest_theme")]
        theme: Option<String>,
        /// Ask the model for a theme first and use it in the output.
        #[arg(long, default_value_t = false)]
        suggest_theme: bool,
        /// Free-text specifications (instruments, tempo, lyrical ideas...).
        #[arg(long)]
        spec: Option<String>,
        #[arg(long, value_name = "PATH", conflicts_with = "spec")]
        spec_file: Option<PathBuf>,
        /// Also write the output to this file.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Re-segment text by its [Section] labels, reading a file or stdin.
    Format {
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        Cmd::Genres { search } => {
            print_list(catalog::GENRES, search.as_deref());
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Moods { search } => {
            print_list(catalog::MOODS, search.as_deref());
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Format { file } => {
            let raw = match file {
                Some(path) => read_file(&path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            println!("{}", reformat(Some(&raw)));
            Ok(ExitCode::SUCCESS)
        }
        Cmd::Theme { genres, moods } => {
            let client = GeminiClient::new(gemini_config(&args.gemini)?)?;
            let mut session = Session::new();
            select_all(&mut session, &genres, &moods)?;

            let theme = session.generate_theme(&client).await?;
            println!("{theme}");
            Ok(exit_code_for(theme))
        }
        Cmd::Song {
            mode,
            genres,
            moods,
            theme,
            suggest_theme,
            spec,
            spec_file,
            out,
        } => {
            let client = GeminiClient::new(gemini_config(&args.gemini)?)?;
            let mut session = Session::new();
            session.mode = mode;
            select_all(&mut session, &genres, &moods)?;
            session.specifications = match (spec, spec_file) {
                (Some(s), _) => s,
                (None, Some(path)) => read_file(&path)?,
                (None, None) => String::new(),
            };

            if suggest_theme {
                let suggested = session.generate_theme(&client).await?;
                eprintln!("theme: {suggested}");
                if is_error_text(suggested) {
                    return Ok(ExitCode::FAILURE);
                }
            } else if let Some(t) = theme {
                session.theme = t;
            }

            let response = session.submit(&client).await?;
            println!("{response}");
            let code = exit_code_for(response);

            if let Some(path) = out {
                let file = std::fs::File::create(&path).map_err(|e| {
                    anyhow::anyhow!("failed to create output file {}: {e}", path.display())
                })?;
                if session.copy_to(file)? {
                    eprintln!("wrote {}", path.display());
                }
            }
            Ok(code)
        }
    }
}

fn gemini_config(args: &GeminiArgs) -> anyhow::Result<GeminiConfig> {
    let mut cfg = GeminiConfig::from_env();
    if let Some(b) = args.backend.as_deref() {
        cfg.backend = parse_backend(b);
    }
    if let Some(m) = args.model.as_deref() {
        cfg.model = m.trim().to_string();
    }
    if let Some(path) = args.api_key_file.as_deref() {
        cfg.api_key = Some(read_file(path)?.trim().to_string());
    }
    if let Some(p) = args.vertex_project.as_deref() {
        cfg.vertex_project = Some(p.trim().to_string());
    }
    if let Some(loc) = args.vertex_location.as_deref() {
        cfg.vertex_location = Some(loc.trim().to_string());
    }
    if args.timeout_secs.is_some() {
        cfg.timeout_secs = args.timeout_secs;
    }
    tracing::debug!(backend = ?cfg.resolved_backend(), model = %cfg.model, "gemini config");
    Ok(cfg)
}

fn select_all(session: &mut Session, genres: &[String], moods: &[String]) -> anyhow::Result<()> {
    for g in genres {
        session.genres.select(g)?;
    }
    for m in moods {
        session.moods.select(m)?;
    }
    Ok(())
}

fn read_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))
}

fn print_list(items: &[&str], search: Option<&str>) {
    for item in catalog::filter(items, search.unwrap_or("")) {
        println!("{item}");
    }
}

fn exit_code_for(text: &str) -> ExitCode {
    if is_error_text(text) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
