use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;
use eyre::{ensure, Result, WrapErr};

use optalign_alignment_rs::pairwise::{Aligner, Mode};
use optalign_io_rs::{alignment, fasta, matrix, WriteRecord};

/// Score type used by the driver.
pub type Score = i32;

/// A single alignment job: align the two records of `input` under the substitution `matrix` and
/// write the reported alignments to `output`.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Constructor, Getters, Dissolve)]
pub struct Job {
    mode: Mode,
    gap: Score,
    input: PathBuf,
    matrix: PathBuf,
    output: PathBuf,
    max_paths: Option<NonZeroUsize>,
}

/// Outcome of a finished job.
#[derive(Debug, Clone, Eq, PartialEq, Getters, Dissolve)]
pub struct Summary {
    score: Score,
    /// Number of distinct optimal alignments found.
    found: usize,
    /// Number of alignment blocks written to the output.
    written: usize,
    truncated: bool,
}

impl Job {
    /// Parses a manifest line: `mode<TAB>gap<TAB>input<TAB>matrix<TAB>output`.
    /// Relative paths are resolved against `root`.
    pub fn from_manifest_line(line: &str, root: &Path) -> Result<Self> {
        let fields = line.trim_end_matches(['\r', '\n']).split('\t').collect::<Vec<_>>();
        ensure!(
            fields.len() == 5,
            "Expected 5 tab-separated fields (mode, gap, input, matrix, output), got {}",
            fields.len()
        );

        let mode = fields[0].parse::<Mode>()?;
        let gap = fields[1]
            .trim()
            .parse::<Score>()
            .wrap_err_with(|| format!("Invalid gap penalty: {:?}", fields[1]))?;
        let [input, matrix, output] = [fields[2], fields[3], fields[4]].map(|x| root.join(x.trim()));
        Ok(Self::new(mode, gap, input, matrix, output, None))
    }

    pub fn with_max_paths(mut self, max_paths: Option<NonZeroUsize>) -> Self {
        self.max_paths = max_paths;
        self
    }

    /// Loads the inputs, aligns the sequences and writes the result.
    pub fn run(&self) -> Result<Summary> {
        log::debug!(
            "Running {} alignment (gap {}) of {} with {}",
            self.mode,
            self.gap,
            self.input.display(),
            self.matrix.display()
        );

        let (first, second) = fasta::read_pair(&self.input)?;
        let scores = matrix::Reader::from_path(&self.matrix)?
            .read::<Score>()
            .wrap_err_with(|| format!("Failed to load substitution matrix {}", self.matrix.display()))?;

        let alignments = Aligner::new(scores, self.gap, self.mode)?
            .with_max_paths(self.max_paths)
            .align(first.seq(), second.seq())
            .wrap_err_with(|| format!("Failed to align sequences from {}", self.input.display()))?;

        for pair in alignments.reported() {
            log::debug!("{} vs {}:\n{}", first.id(), second.id(), pair);
        }

        let mut writer = alignment::Writer::from_path(&self.output)?;
        let written = writer.write_alignments(&first.label(), &second.label(), &alignments)?;
        writer.flush()?;

        let summary = Summary {
            score: *alignments.score(),
            found: alignments.len(),
            written,
            truncated: *alignments.truncated(),
        };
        log::info!(
            "{} -> {}: score {}, {} optimal alignment(s), {} written",
            self.input.display(),
            self.output.display(),
            summary.score,
            summary.found,
            summary.written
        );
        Ok(summary)
    }
}

/// Reads a batch manifest: one job per line, blank lines and '#' comments are skipped.
/// Relative paths inside the manifest are resolved against its directory.
pub fn read_manifest(path: impl AsRef<Path>) -> Result<Vec<Job>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read manifest {}", path.display()))?;
    let root = path.parent().unwrap_or(Path::new(""));

    let mut jobs = Vec::new();
    for (ind, line) in content.lines().enumerate() {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        let job = Job::from_manifest_line(line, root)
            .wrap_err_with(|| format!("Invalid job at {}:{}", path.display(), ind + 1))?;
        jobs.push(job);
    }
    log::info!("Loaded {} job(s) from {}", jobs.len(), path.display());
    Ok(jobs)
}
