/// Farewell: prints randomized farewell messages.
///
/// Usage: farewell [--name <name>] [--location <place>] [--count <n>] [--seed <n>] ...
///
/// Options come from `--options <file.ron|file.json>` first; individual
/// flags override the file.

use anyhow::Context;
use clap::Parser;
use farewell_engine::{Corpus, CorpusSource, FarewellGenerator, GenerationOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "farewell")]
#[command(about = "Print randomized farewell messages")]
struct Cli {
    /// Recipient name (max 50 characters)
    #[arg(long)]
    name: Option<String>,
    /// Location (max 100 characters)
    #[arg(long)]
    location: Option<String>,
    /// Date text; defaults to today in the chosen timezone
    #[arg(long)]
    date: Option<String>,
    /// Time text; defaults to now in the chosen timezone
    #[arg(long)]
    time: Option<String>,
    /// IANA timezone, e.g. America/New_York
    #[arg(long)]
    timezone: Option<String>,
    /// Language code, e.g. en-GB
    #[arg(long)]
    language: Option<String>,
    /// Remove emoji from the output
    #[arg(long)]
    strip_emojis: bool,
    /// Number of messages to print
    #[arg(long, default_value_t = 1)]
    count: usize,
    /// Seed for reproducible selection
    #[arg(long)]
    seed: Option<u64>,
    /// Options file (RON, or JSON with a .json extension)
    #[arg(long)]
    options: Option<PathBuf>,
    /// Corpus text file to use instead of the embedded corpus
    #[arg(long)]
    corpus: Option<PathBuf>,
}

impl Cli {
    fn apply(&self, options: &mut GenerationOptions) {
        if let Some(ref name) = self.name {
            options.template_args.name = Some(name.clone());
        }
        if let Some(ref location) = self.location {
            options.template_args.location = Some(location.clone());
        }
        if let Some(ref date) = self.date {
            options.template_args.date = Some(date.clone());
        }
        if let Some(ref time) = self.time {
            options.template_args.time = Some(time.clone());
        }
        if let Some(ref timezone) = self.timezone {
            options.timezone = Some(timezone.clone());
        }
        if let Some(ref language) = self.language {
            options.language_code = Some(language.clone());
        }
        if self.strip_emojis {
            options.strip_emojis = true;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut options = match cli.options {
        Some(ref path) => GenerationOptions::load(path)
            .with_context(|| format!("failed to load options from '{}'", path.display()))?,
        None => GenerationOptions::default(),
    };
    cli.apply(&mut options);

    let source = match cli.corpus {
        Some(ref path) => Some(
            CorpusSource::load(path)
                .with_context(|| format!("failed to load corpus '{}'", path.display()))?,
        ),
        None => None,
    };
    let refs: Vec<&str> = source
        .as_ref()
        .map(CorpusSource::message_refs)
        .unwrap_or_default();
    let corpus = if source.is_some() {
        Corpus::new(&refs)?
    } else {
        Corpus::embedded()
    };
    let generator = FarewellGenerator::new(corpus);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for _ in 0..cli.count {
        println!("{}", generator.generate_with_rng(&options, &mut rng));
    }

    Ok(())
}
