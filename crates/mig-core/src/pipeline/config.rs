use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_INPUT_ROOT, DEFAULT_RESULTS_ROOT};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MigConfig {
    /// Folder holding one sub-folder per experiment.
    pub input_root: PathBuf,
    /// Folder receiving the mirrored experiment folders and their reports.
    pub results_root: PathBuf,
    pub sort_key: SortKeyMethod,
    pub on_decode_error: DecodeFailurePolicy,
    pub on_empty_experiment: EmptyExperimentPolicy,
    /// Score the frames of an experiment on the Rayon pool.
    pub parallel: bool,
}

impl Default for MigConfig {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from(DEFAULT_INPUT_ROOT),
            results_root: PathBuf::from(DEFAULT_RESULTS_ROOT),
            sort_key: SortKeyMethod::default(),
            on_decode_error: DecodeFailurePolicy::default(),
            on_empty_experiment: EmptyExperimentPolicy::default(),
            parallel: false,
        }
    }
}

/// Where the frame number is taken from in a file name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKeyMethod {
    /// First digit run in the name.
    #[default]
    Leading,
    /// Last digit run in the stem.
    Trailing,
}

impl std::fmt::Display for SortKeyMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leading => write!(f, "Leading number"),
            Self::Trailing => write!(f, "Trailing number"),
        }
    }
}

/// What happens when a frame cannot be decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecodeFailurePolicy {
    /// Stop the whole run with the decode error.
    #[default]
    Abort,
    /// Leave the frame out of the report and keep going.
    SkipAndLog,
}

impl std::fmt::Display for DecodeFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abort => write!(f, "Abort"),
            Self::SkipAndLog => write!(f, "Skip and log"),
        }
    }
}

/// What happens to an experiment that ends up with no MIG samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyExperimentPolicy {
    /// Write the header row and leave the average cell empty.
    #[default]
    WriteHeaderOnly,
    /// Write no report for the experiment.
    Skip,
    /// Stop the run with an empty-experiment error.
    Fail,
}

impl std::fmt::Display for EmptyExperimentPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WriteHeaderOnly => write!(f, "Write header only"),
            Self::Skip => write!(f, "Skip"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}
