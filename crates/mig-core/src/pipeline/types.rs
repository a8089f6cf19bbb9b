use std::path::PathBuf;

/// What became of an experiment's report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportOutcome {
    Written(PathBuf),
    /// No samples and the empty-experiment policy said to skip.
    Skipped,
}

/// Result of processing one experiment folder.
#[derive(Clone, Debug)]
pub struct ExperimentSummary {
    pub name: String,
    pub output_dir: PathBuf,
    /// MIG per reported frame, in sorted frame order.
    pub samples: Vec<f64>,
    pub average: Option<f64>,
    /// Frames left out under the skip-and-log decode policy.
    pub skipped: Vec<PathBuf>,
    pub report: ReportOutcome,
}

/// Result of a full run, experiments in the order they were processed.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub experiments: Vec<ExperimentSummary>,
}

impl RunSummary {
    pub fn total_frames(&self) -> usize {
        self.experiments.iter().map(|e| e.samples.len()).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.experiments.iter().map(|e| e.skipped.len()).sum()
    }
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// Scoring of an experiment with `total_frames` sorted files has started.
    fn begin_experiment(&self, _name: &str, _total_frames: usize) {}

    /// One more frame of the current experiment has been scored.
    fn advance(&self, _frames_done: usize) {}

    /// The experiment's report has been handled.
    fn finish_experiment(&self, _summary: &ExperimentSummary) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
