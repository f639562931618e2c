/// Corpus Compiler: turns a farewell corpus text file into a Rust module.
///
/// Usage: corpus_compiler --input <corpus.txt> [--output <corpus.rs>]

use anyhow::Context;
use clap::Parser;
use farewell_engine::CorpusSource;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "corpus_compiler")]
#[command(about = "Compile a farewell corpus text file into a Rust module")]
struct Cli {
    /// Corpus source, one template per line
    #[arg(long)]
    input: PathBuf,
    /// Where to write the generated module (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let source = CorpusSource::load(&cli.input)
        .with_context(|| format!("failed to compile corpus '{}'", cli.input.display()))?;

    let stats = source.stats();
    eprintln!("Corpus statistics for '{}':", cli.input.display());
    eprintln!("  Total lines:        {}", stats.total_lines);
    eprintln!("  Comments:           {}", stats.comments);
    eprintln!("  Empty lines:        {}", stats.empty_lines);
    eprintln!("  Duplicates removed: {}", stats.duplicates);
    eprintln!("  Unique messages:    {}", stats.unique_messages);

    let origin = cli
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.input.display().to_string());
    let rendered = source.render_rust(&origin);

    match cli.output {
        Some(ref path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            eprintln!("Module written to '{}'", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
