use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cambly_coach::io::DEFAULT_BASE_DIR;
use cambly_coach::llm::{
    render_correction_document, DEFAULT_BASE_URL, DEFAULT_LEARNER, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
};
use cambly_coach::stages::DEFAULT_SPEAKER_SUFFIX;
use cambly_coach::{
    format_session, is_minimal_interjection, merge_utterances, parse_transcript,
    read_formatted_transcript, read_raw_transcript, write_markdown, OpenAiClient, OpenAiConfig,
    ParseConfig, SessionId, SessionLayout,
};

#[derive(Parser)]
#[command(name = "cambly-coach")]
#[command(author, version, about = "Format Cambly transcripts and get English feedback", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory containing raw/, formatted/, output/ and .env
    #[arg(long, global = true, default_value = DEFAULT_BASE_DIR)]
    base_dir: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Format raw/<YYYYMMDD>.txt into formatted/<YYYYMMDD>.md
    Format {
        /// Session date (YYYYMMDD)
        session: String,

        /// Suffix marking a speaker label line
        #[arg(long, default_value = DEFAULT_SPEAKER_SUFFIX)]
        label_suffix: String,
    },

    /// Send formatted/<YYYYMMDD>.md for correction, saving output/<YYYYMMDD>.md
    Correct {
        /// Session date (YYYYMMDD)
        session: String,

        /// Chat model to use
        #[arg(long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Sampling temperature
        #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
        temperature: f32,

        /// Speaker name of the learner in the transcript
        #[arg(long, default_value = DEFAULT_LEARNER)]
        learner: String,

        /// Root URL of an OpenAI-compatible API
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Print utterance and turn statistics for a raw transcript
    Analyze {
        /// Session date (YYYYMMDD)
        session: String,

        /// Suffix marking a speaker label line
        #[arg(long, default_value = DEFAULT_SPEAKER_SUFFIX)]
        label_suffix: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn run(cli: Cli) -> Result<()> {
    let layout = SessionLayout::new(cli.base_dir);

    match cli.command {
        Commands::Format {
            session,
            label_suffix,
        } => {
            let config = ParseConfig {
                speaker_suffix: label_suffix,
            };
            let result = format_session(&layout, &session, &config)?;
            info!(
                "Formatted {} utterances into {} turns",
                result.utterance_count, result.turn_count
            );
            info!("Done!");
            Ok(())
        }
        Commands::Correct {
            session,
            model,
            temperature,
            learner,
            base_url,
        } => {
            let session: SessionId = session.parse()?;
            correct_session(&layout, &session, model, temperature, base_url, &learner).await
        }
        Commands::Analyze {
            session,
            label_suffix,
        } => {
            let session: SessionId = session.parse()?;
            let config = ParseConfig {
                speaker_suffix: label_suffix,
            };
            analyze_session(&layout, &session, &config)
        }
    }
}

async fn correct_session(
    layout: &SessionLayout,
    session: &SessionId,
    model: String,
    temperature: f32,
    base_url: String,
    learner: &str,
) -> Result<()> {
    let transcript = read_formatted_transcript(layout, session)?;

    let config = OpenAiConfig::from_env_file(&layout.env_path())?
        .with_model(model)
        .with_temperature(temperature)
        .with_base_url(base_url);
    let client = OpenAiClient::new(config);

    info!("Sending to OpenAI API ({})...", client.model());
    let correction = client.request_correction(&transcript, learner).await?;

    let document = render_correction_document(session, &correction);
    let path = layout.output_path(session);
    write_markdown(&path, &document)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Done!");
    Ok(())
}

fn analyze_session(layout: &SessionLayout, session: &SessionId, config: &ParseConfig) -> Result<()> {
    let raw = read_raw_transcript(layout, session)?;
    let parsed = parse_transcript(&raw, config);
    let turns = merge_utterances(&parsed.utterances);

    println!("Session {}", session.display_date());
    println!("==================");
    println!("Utterances: {}", parsed.utterances.len());
    println!("Turns: {}", turns.len());
    println!("Speakers: {:?}", parsed.speakers);
    println!();

    println!("Speaker Statistics");
    println!("------------------");
    for speaker in &parsed.speakers {
        let utterances: Vec<_> = parsed
            .utterances
            .iter()
            .filter(|u| u.speaker == *speaker)
            .collect();
        let word_count: usize = utterances.iter().map(|u| u.word_count()).sum();
        let interjections = utterances
            .iter()
            .filter(|u| is_minimal_interjection(&u.text))
            .count();
        let turn_count = turns.iter().filter(|t| t.speaker == *speaker).count();

        println!(
            "{}: {} utterances, {} turns, {} words, {} interjections",
            speaker,
            utterances.len(),
            turn_count,
            word_count,
            interjections
        );
    }

    Ok(())
}
