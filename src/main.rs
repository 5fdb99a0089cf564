//! notedex — regenerate a README index of the markdown notes tracked by git.
//!
//! Every tracked `*.md` below the root must carry a one-line summary in its
//! first ten lines:
//!
//! ```markdown
//! <!-- desc: How the mempool evicts transactions -->
//! ```
//!
//! Notes are grouped by directory into `README.md`. A note without a summary
//! aborts the run and leaves the existing README untouched.

mod error;
mod extract;
mod group;
mod index;
mod model;
mod render;
mod source;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "notedex",
    about = "Generate a directory-grouped README index from annotated markdown notes"
)]
struct Cli {
    /// Working tree root
    #[arg(short = 'C', long = "repo", default_value = ".")]
    repo: PathBuf,

    /// Index file, relative to the working tree root
    #[arg(short = 'o', long, default_value = "README.md")]
    output: PathBuf,

    /// Do not write; fail if the index on disk is out of date
    #[arg(long, conflicts_with = "stdout")]
    check: bool,

    /// Print the index to stdout instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Log to stderr so stdout stays clean for `--stdout`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "notedex=warn",
        1 => "notedex=info",
        _ => "notedex=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let tree = source::GitWorkTree::new(&cli.repo);
    let document = index::build(&tree, &cli.output)?;
    let output = tree.root().join(&cli.output);

    if cli.stdout {
        print!("{document}");
        return Ok(());
    }

    if cli.check {
        if !index::is_current(&output, &document)? {
            anyhow::bail!("{} is out of date; run notedex to regenerate it", cli.output.display());
        }
        println!("{} is up to date.", cli.output.display());
        return Ok(());
    }

    index::write(&output, &document)?;
    println!("{} generated successfully.", cli.output.display());
    Ok(())
}
