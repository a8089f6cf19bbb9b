use tracing::{debug, info, warn};

use crate::error::{MigError, Result};
use crate::frame::ExperimentDir;
use crate::io::scan::{ensure_dir, experiment_dirs, image_files, validate_root};
use crate::quality::mig::score_files;
use crate::report::{write_report, MigReport};
use crate::sort::{sort_files, strategy_for, SortKeyStrategy};

use super::config::{DecodeFailurePolicy, EmptyExperimentPolicy, MigConfig};
use super::types::{ExperimentSummary, NoOpReporter, ProgressReporter, ReportOutcome, RunSummary};

/// Run the MIG pipeline over every experiment folder under the input root.
pub fn run_pipeline(config: &MigConfig) -> Result<RunSummary> {
    run_pipeline_reported(config, &NoOpReporter)
}

/// Run the MIG pipeline with a thread-safe progress reporter.
///
/// Experiments are processed one at a time in filesystem enumeration order.
/// The first fatal error (missing root, unsortable file name, decode failure
/// under [`DecodeFailurePolicy::Abort`], report write failure) ends the run.
pub fn run_pipeline_reported(
    config: &MigConfig,
    reporter: &dyn ProgressReporter,
) -> Result<RunSummary> {
    validate_root(&config.input_root)?;
    ensure_dir(&config.results_root);
    info!(
        input = %config.input_root.display(),
        results = %config.results_root.display(),
        sort_key = %config.sort_key,
        "Scanning experiments"
    );

    let strategy = strategy_for(&config.sort_key);
    let mut summary = RunSummary::default();

    for experiment in experiment_dirs(&config.input_root)? {
        let experiment = experiment?;
        let result = process_experiment(&experiment, config, strategy, reporter)?;
        reporter.finish_experiment(&result);
        summary.experiments.push(result);
    }

    info!(
        experiments = summary.experiments.len(),
        frames = summary.total_frames(),
        "Run complete"
    );
    Ok(summary)
}

fn process_experiment(
    experiment: &ExperimentDir,
    config: &MigConfig,
    strategy: &dyn SortKeyStrategy,
    reporter: &dyn ProgressReporter,
) -> Result<ExperimentSummary> {
    let output_dir = config.results_root.join(&experiment.name);
    ensure_dir(&output_dir);

    let paths = image_files(&experiment.path)?.collect::<Result<Vec<_>>>()?;
    let files = sort_files(paths, strategy)?;
    for file in &files {
        debug!(
            experiment = %experiment.name,
            file = %file.file_name,
            frame = file.sort_key,
            path = %file.path.display(),
            "File path"
        );
    }

    reporter.begin_experiment(&experiment.name, files.len());
    let fail_fast = config.on_decode_error == DecodeFailurePolicy::Abort;
    let scores = score_files(&files, config.parallel, fail_fast, |done| {
        reporter.advance(done)
    });

    let mut samples = Vec::with_capacity(files.len());
    let mut skipped = Vec::new();
    for (file, score) in files.iter().zip(scores) {
        match score {
            Ok(mig) => samples.push(mig),
            Err(e) if !fail_fast => {
                warn!("{e}; frame left out of the report");
                skipped.push(file.path.clone());
            }
            Err(e) => return Err(e),
        }
    }

    let report = MigReport::new(samples);
    let outcome = if report.is_empty() {
        match config.on_empty_experiment {
            EmptyExperimentPolicy::WriteHeaderOnly => {
                warn!(experiment = %experiment.name, "No frames scored, average left empty");
                ReportOutcome::Written(write_report(&report, &output_dir)?)
            }
            EmptyExperimentPolicy::Skip => {
                warn!(experiment = %experiment.name, "No frames scored, report skipped");
                ReportOutcome::Skipped
            }
            EmptyExperimentPolicy::Fail => {
                return Err(MigError::EmptyExperiment {
                    path: experiment.path.clone(),
                })
            }
        }
    } else {
        ReportOutcome::Written(write_report(&report, &output_dir)?)
    };

    let average = report.average();
    info!(
        experiment = %experiment.name,
        frames = report.len(),
        average = ?average,
        "Experiment complete"
    );

    Ok(ExperimentSummary {
        name: experiment.name.clone(),
        output_dir,
        samples: report.samples().to_vec(),
        average,
        skipped,
        report: outcome,
    })
}
