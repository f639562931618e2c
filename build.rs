//! Build script for `farewell-engine`.
//!
//! Compiles `corpus/en-GB.txt` into a Rust module holding the message corpus
//! as a `'static` slice. A missing or empty corpus fails the build.

#[allow(dead_code)]
#[path = "src/core/corpus_source.rs"]
mod corpus_source;

use corpus_source::CorpusSource;

const CORPUS_FILE: &str = "corpus/en-GB.txt";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let source_path = std::path::Path::new(manifest_dir).join(CORPUS_FILE);

    println!("cargo:rerun-if-changed={}", source_path.display());
    println!("cargo:rerun-if-changed=src/core/corpus_source.rs");

    let source = CorpusSource::load(&source_path)
        .map_err(|e| format!("failed to compile {}: {}", source_path.display(), e))?;

    let out_path = std::path::Path::new(&std::env::var("OUT_DIR")?).join("corpus.rs");
    std::fs::write(out_path, source.render_rust(CORPUS_FILE))?;

    Ok(())
}
