use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use mig_core::pipeline::config::{
    DecodeFailurePolicy, EmptyExperimentPolicy, MigConfig, SortKeyMethod,
};
use mig_core::pipeline::{run_pipeline_reported, ExperimentSummary, ProgressReporter};

use crate::summary::{print_config_summary, print_run_summary};

#[derive(Clone, Copy, ValueEnum)]
pub enum SortKeyArg {
    Leading,
    Trailing,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EmptyArg {
    HeaderOnly,
    Skip,
    Fail,
}

#[derive(Args)]
pub struct RunArgs {
    /// Config file (TOML); command-line flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Folder holding one sub-folder per experiment
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Folder receiving the MIG reports
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Leave undecodable images out of the report instead of aborting
    #[arg(long)]
    pub skip_unreadable: bool,

    /// Score the frames of each experiment in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Which number in the file name orders the frames
    #[arg(long, value_enum)]
    pub sort_key: Option<SortKeyArg>,

    /// What to do with experiments that have no frames
    #[arg(long, value_enum)]
    pub empty: Option<EmptyArg>,
}

/// Drives one progress bar per experiment.
struct BarReporter {
    pb: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_experiment(&self, name: &str, total_frames: usize) {
        self.pb.reset();
        self.pb.set_length(total_frames as u64);
        self.pb.set_message(name.to_string());
    }

    fn advance(&self, frames_done: usize) {
        self.pb.set_position(frames_done as u64);
    }

    fn finish_experiment(&self, summary: &ExperimentSummary) {
        let avg = summary
            .average
            .map_or_else(|| "n/a".to_string(), |avg| format!("{avg:.6}"));
        self.pb.println(format!(
            "{}: {} frames, avg MIG {}",
            summary.name,
            summary.samples.len(),
            avg
        ));
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = build_config(args)?;
    print_config_summary(&config);

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = BarReporter { pb };

    let summary = run_pipeline_reported(&config, &reporter);
    reporter.pb.finish_and_clear();
    print_run_summary(&summary?);

    Ok(())
}

fn build_config(args: &RunArgs) -> Result<MigConfig> {
    let mut config: MigConfig = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid MIG config")?
    } else {
        MigConfig::default()
    };

    if let Some(ref input) = args.input {
        config.input_root = input.clone();
    }
    if let Some(ref output) = args.output {
        config.results_root = output.clone();
    }
    if args.skip_unreadable {
        config.on_decode_error = DecodeFailurePolicy::SkipAndLog;
    }
    if args.parallel {
        config.parallel = true;
    }
    if let Some(sort_key) = args.sort_key {
        config.sort_key = match sort_key {
            SortKeyArg::Leading => SortKeyMethod::Leading,
            SortKeyArg::Trailing => SortKeyMethod::Trailing,
        };
    }
    if let Some(empty) = args.empty {
        config.on_empty_experiment = match empty {
            EmptyArg::HeaderOnly => EmptyExperimentPolicy::WriteHeaderOnly,
            EmptyArg::Skip => EmptyExperimentPolicy::Skip,
            EmptyArg::Fail => EmptyExperimentPolicy::Fail,
        };
    }

    Ok(config)
}
