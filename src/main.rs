//! treealign CLI - align two rooted trees under a weight matrix
//!
//! Prints the alignment score of `<TREE1>` against `<TREE2>` on stdout.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use treealign::{input, run_with_stack, Aligner, Alignment};

#[derive(Parser)]
#[command(name = "treealign")]
#[command(about = "Score the best antichain/path alignment of two rooted trees")]
#[command(version)]
struct Cli {
    /// First tree: node count followed by undirected edges
    #[arg(value_name = "TREE1")]
    tree1: PathBuf,

    /// Second tree, same format
    #[arg(value_name = "TREE2")]
    tree2: PathBuf,

    /// Weight matrix: rows, columns, then cells row by row ('-' reads stdin)
    #[arg(value_name = "MATRIX")]
    matrix: PathBuf,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Verbose level: 0=error, 1=warning, 2=info, 3=debug, 4+=trace
    #[arg(short, long, value_name = "INT", default_value = "1")]
    verbosity: u8,

    /// Stack size of the alignment worker thread, in MiB
    #[arg(long, value_name = "MIB", default_value = "256")]
    stack_size_mb: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    alignment: &'a Alignment,
    tree1_nodes: usize,
    tree2_nodes: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbosity {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let a = input::read_tree(&cli.tree1)?;
    let b = input::read_tree(&cli.tree2)?;
    let weights = input::read_matrix(&cli.matrix)?;

    let stack_size = cli
        .stack_size_mb
        .checked_mul(1 << 20)
        .context("stack size overflows usize")?;
    let alignment = run_with_stack(stack_size, || {
        Aligner::new(&a, &b, &weights).map(|mut aligner| aligner.run())
    })??;
    log::info!(
        "forward {}, reverse {}, reported {}",
        alignment.forward,
        alignment.reverse,
        alignment.score
    );

    match cli.format {
        OutputFormat::Text => println!("{}", alignment.score),
        OutputFormat::Json => {
            let report = Report {
                alignment: &alignment,
                tree1_nodes: a.len(),
                tree2_nodes: b.len(),
            };
            println!("{}", serde_json::to_string(&report)?);
        }
    }

    Ok(())
}
