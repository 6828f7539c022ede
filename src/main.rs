use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use owlnotes::{CornellSheet, ServerConfig, build_cornell_notes, load_request, run_server, write_json};

#[derive(Parser)]
#[command(name = "owlnotes")]
#[command(author, version, about = "Cornell-style study notes from lecture transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        /// Address to bind (overrides OWLNOTES_HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides OWLNOTES_PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate notes from files without starting the server
    Generate {
        /// Transcript text file, or a JSON note request
        #[arg(short, long)]
        input: PathBuf,

        /// Slides file with one slide per line
        #[arg(short, long)]
        slides: Option<PathBuf>,

        /// Output file for the notes JSON (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for a human-readable Cornell sheet
        #[arg(long)]
        human_readable: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            verbose,
        } => {
            setup_logging(verbose);
            let config = ServerConfig::from_env().with_overrides(host, port);
            run_server(config).await
        }
        Commands::Generate {
            input,
            slides,
            output,
            human_readable,
            verbose,
        } => {
            setup_logging(verbose);
            generate(input, slides, output, human_readable)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn generate(
    input: PathBuf,
    slides: Option<PathBuf>,
    output: Option<PathBuf>,
    human_readable: Option<PathBuf>,
) -> Result<()> {
    info!("Loading request from {:?}", input);
    let request = load_request(&input, slides.as_deref()).context("Failed to load note request")?;

    info!(
        "Loaded transcript of {} characters and {} slides",
        request.transcript.chars().count(),
        request.slides.len()
    );

    let response = build_cornell_notes(&request);

    info!(
        "Generated {} cues, {} notes, {} key concepts, {} questions, {} citations",
        response.cues.len(),
        response.notes.len(),
        response.key_concepts.len(),
        response.questions.len(),
        response.citations.len()
    );

    match output {
        Some(path) => {
            write_json(&response, &path)?;
            info!("Notes written to {:?}", path);
        }
        None => {
            let json = serde_json::to_string_pretty(&response).context("Failed to serialize notes")?;
            println!("{}", json);
        }
    }

    if let Some(path) = human_readable {
        CornellSheet::new(&response).write_file(&path)?;
        info!("Cornell sheet written to {:?}", path);
    }

    Ok(())
}
