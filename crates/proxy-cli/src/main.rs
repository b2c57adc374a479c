use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use proxy_layout::{GuideStyle, SheetOptions};
use proxy_sources::ScryfallClient;

mod output;
mod prompt;

/// Default output for the folder variant
const DEFAULT_FOLDER_OUTPUT: &str = "proxies_with_thin_gaps_and_cropmarks.pdf";

/// Default output for the fetch variant
const DEFAULT_FETCH_OUTPUT: &str = "mtg_cards.pdf";

#[derive(Parser)]
#[command(name = "proxyprint", about = "Print-and-cut card proxy sheets", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out card images from a local folder, with crop marks and thin gaps
    Folder {
        /// Folder to scan for card images
        #[arg(short, long, default_value = "./images")]
        dir: PathBuf,

        /// Output PDF file (.pdf is appended if missing)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the interactive extra-copies prompt
        #[arg(long)]
        no_prompt: bool,
    },

    /// Fetch card artwork from Scryfall by name, with dashed cut outlines
    Fetch {
        /// Card names, e.g. 'Black Lotus' 'Ancestral Recall'
        #[arg(required = true)]
        card_names: Vec<String>,

        /// Output PDF file (.pdf is appended if missing)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Folder {
            dir,
            output,
            no_prompt,
        } => run_folder(dir, output, no_prompt).await,
        Commands::Fetch { card_names, output } => run_fetch(card_names, output).await,
    }
}

async fn run_folder(dir: PathBuf, output: Option<PathBuf>, no_prompt: bool) -> Result<()> {
    let scan = proxy_sources::scan_folder(&dir).await?;
    for card in &scan.cards {
        println!("Loaded: {}", card.name);
    }
    for skipped in &scan.skipped {
        eprintln!("Failed to load '{}': {}", skipped.name, skipped.reason);
    }
    if scan.cards.is_empty() {
        bail!("No valid images found in {}", dir.display());
    }

    // One copy of each loaded card, in scan order; requested extras append.
    let mut sequence: Vec<usize> = (0..scan.cards.len()).collect();
    if !no_prompt {
        let names: Vec<&str> = scan.cards.iter().map(|card| card.name.as_str()).collect();
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        sequence.extend(prompt::collect_extra_copies(
            &mut stdin.lock(),
            &mut stdout,
            &names,
        )?);
    }

    let output = output::ensure_pdf_extension(
        output.unwrap_or_else(|| PathBuf::from(DEFAULT_FOLDER_OUTPUT)),
    );
    let options = SheetOptions::with_cut_gaps();
    proxy_layout::generate_pdf(&scan.cards, &sequence, &options, GuideStyle::CropMarks, &output)
        .await?;
    println!("PDF generated: {}", output.display());
    Ok(())
}

async fn run_fetch(card_names: Vec<String>, output: Option<PathBuf>) -> Result<()> {
    let client = ScryfallClient::new();

    let mut deck = Vec::new();
    for name in &card_names {
        match client.named(name).await {
            Ok(card) => {
                println!("Fetched: {}", card.name);
                deck.push(card);
            }
            Err(err) => eprintln!("{err}"),
        }
    }
    if deck.is_empty() {
        bail!("No valid cards found");
    }

    let sequence: Vec<usize> = (0..deck.len()).collect();
    let output =
        output::ensure_pdf_extension(output.unwrap_or_else(|| PathBuf::from(DEFAULT_FETCH_OUTPUT)));
    let options = SheetOptions::default();
    proxy_layout::generate_pdf(&deck, &sequence, &options, GuideStyle::DashedOutline, &output)
        .await?;
    println!("PDF generated: {}", output.display());
    Ok(())
}
