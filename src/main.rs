use abjad::catalog::Catalog;
use abjad::narrator::{EspeakNarrator, Narrator, Utterance};
use abjad::session::{LearningSession, Mode};
use abjad::{App, Config};
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "abjad")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a deck to stdout
    List {
        /// Which deck to print
        #[arg(short, long, value_enum, default_value = "letters")]
        mode: DeckArg,
    },
    /// Speak a piece of text with the configured engine
    Speak {
        /// Text to speak
        text: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DeckArg {
    Letters,
    Numbers,
}

impl From<DeckArg> for Mode {
    fn from(arg: DeckArg) -> Self {
        match arg {
            DeckArg::Letters => Mode::Letters,
            DeckArg::Numbers => Mode::Numbers,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "abjad=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List { mode }) => {
            let catalog = Catalog::load();
            for record in catalog.records(mode.into()) {
                println!(
                    "{:>3}  {}  {}  —  {}",
                    record.position, record.character, record.name, record.examples
                );
            }
        }
        Some(Commands::Speak { text }) => {
            let config = Config::load()?;
            let narrator = EspeakNarrator::new(config.speech.program.clone());
            narrator.speak(Utterance::new(text, &config.speech)).await?;
        }
        None => {
            // Launch TUI
            let config = Config::load()?;
            let session = LearningSession::new(Catalog::load());
            let mut app = App::new(config, session)?;
            app.run().await?;
        }
    }

    Ok(())
}
