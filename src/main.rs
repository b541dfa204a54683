use clap::Parser;
use glossalalia_words::config::{DeckConfig, LocalityPolicy};
use glossalalia_words::deck::DeckLoader;
use glossalalia_words::export::{export_entries, ExportFormat};
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "glossalalia-words")]
#[command(about = "Load a Glossalalia word deck and print its entries")]
struct Cli {
    /// Deck CSV with an `english,spanish[,image][,id]` header.
    deck: PathBuf,

    #[arg(long, value_enum, default_value_t = ExportFormat::Markdown)]
    format: ExportFormat,

    /// JSON deck config. Falls back to defaults plus GLOSSALALIA_* env vars.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    locality: Option<LocalityPolicy>,

    /// Swap local and remote on every entry after loading.
    #[arg(long)]
    flip: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => DeckConfig::from_file(path)?,
        None => DeckConfig::from_env()?,
    };
    if let Some(locality) = cli.locality {
        config.locality = locality;
    }

    let mut loader = DeckLoader::new(config);
    let mut deck = loader.load_path(&cli.deck)?;
    if cli.flip {
        deck.flip_all();
    }

    print!("{}", export_entries(deck.entries(), cli.format)?);
    Ok(())
}
