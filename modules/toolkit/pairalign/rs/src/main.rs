use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::{bail, Result};

use optalign_alignment_rs::pairwise::Mode;
use optalign_core_rs::parallelism;
use optalign_pairalign_rs::{read_manifest, Job, PairAlign};

#[derive(Parser)]
#[command(name = "pairalign")]
#[command(about = "Exhaustive optimal pairwise alignment (Needleman-Wunsch / Smith-Waterman)", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Align the two sequences of a FASTA file
    Align {
        /// FASTA file with exactly two records (plain or gzip)
        #[arg(value_name = "INPUT.FA")]
        input: PathBuf,

        /// Substitution matrix (e.g. PAM250)
        #[arg(short, long, value_name = "FILE")]
        matrix: PathBuf,

        /// Output file for the alignment blocks
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Alignment mode: global or local
        #[arg(long, value_name = "MODE", default_value = "global")]
        mode: Mode,

        /// Linear gap penalty, must be <= 0
        #[arg(short, long, value_name = "INT", default_value = "-10", allow_hyphen_values = true)]
        gap: i32,

        /// Stop after this many distinct optimal alignments
        #[arg(long, value_name = "INT")]
        max_paths: Option<NonZeroUsize>,
    },

    /// Run every job listed in a tab-separated manifest
    Batch {
        /// Manifest lines: mode, gap, input, matrix, output
        #[arg(value_name = "MANIFEST")]
        manifest: PathBuf,

        /// Worker threads: 0 = 1, negative = all but N-1
        #[arg(short, long, value_name = "INT", default_value = "1", allow_hyphen_values = true)]
        threads: isize,

        /// Stop after this many distinct optimal alignments per job
        #[arg(long, value_name = "INT")]
        max_paths: Option<NonZeroUsize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .init();

    match cli.command {
        Commands::Align {
            input,
            matrix,
            output,
            mode,
            gap,
            max_paths,
        } => {
            Job::new(mode, gap, input, matrix, output, max_paths).run()?;
        }
        Commands::Batch {
            manifest,
            threads,
            max_paths,
        } => {
            let jobs = read_manifest(&manifest)?
                .into_iter()
                .map(|job| job.with_max_paths(max_paths))
                .collect::<Vec<_>>();

            let threads = parallelism::available(threads)?;
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            log::info!("Running {} job(s) on {} thread(s)", jobs.len(), threads);

            let results = PairAlign::new().set_thread_pool(pool).run(&jobs);
            let failed = results.iter().filter(|x| x.is_err()).count();
            if failed > 0 {
                bail!("{failed} of {} alignment job(s) failed", jobs.len());
            }
        }
    }
    Ok(())
}
