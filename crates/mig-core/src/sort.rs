use std::path::{Path, PathBuf};

use crate::error::{MigError, Result};
use crate::frame::ImageFileRef;
use crate::pipeline::config::SortKeyMethod;

/// Extracts the frame number that orders files within an experiment.
pub trait SortKeyStrategy: Send + Sync {
    /// Frame number for `file_name`, or `None` when the name carries none.
    fn key(&self, file_name: &str) -> Option<u64>;

    fn name(&self) -> &'static str;
}

/// First run of decimal digits anywhere in the name (`"f10_raw.png"` -> 10).
pub struct LeadingNumber;

impl SortKeyStrategy for LeadingNumber {
    fn key(&self, file_name: &str) -> Option<u64> {
        leading_number(file_name)
    }

    fn name(&self) -> &'static str {
        "leading"
    }
}

/// Last run of decimal digits in the file stem (`"cam2_f10.png"` -> 10).
pub struct TrailingNumber;

impl SortKeyStrategy for TrailingNumber {
    fn key(&self, file_name: &str) -> Option<u64> {
        trailing_number(file_name)
    }

    fn name(&self) -> &'static str {
        "trailing"
    }
}

/// Resolve the configured method to its strategy.
pub fn strategy_for(method: &SortKeyMethod) -> &'static dyn SortKeyStrategy {
    match method {
        SortKeyMethod::Leading => &LeadingNumber,
        SortKeyMethod::Trailing => &TrailingNumber,
    }
}

/// Parse the digit run starting at the first digit of `name`.
///
/// Anything after the run is ignored. Returns `None` when the name has no
/// digit or the run does not fit in a `u64`.
pub fn leading_number(name: &str) -> Option<u64> {
    let start = name.find(|c: char| c.is_ascii_digit())?;
    let rest = &name[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// Parse the last digit run of the file stem (extension excluded).
pub fn trailing_number(name: &str) -> Option<u64> {
    let stem = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    let end = stem.rfind(|c: char| c.is_ascii_digit())? + 1;
    let head = &stem[..end];
    let start = head
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(0, |(i, c)| i + c.len_utf8());
    head[start..].parse().ok()
}

/// Order image files ascending by frame number.
///
/// The sort is stable, so files sharing a number keep their enumeration
/// order. A file name without a number fails the whole sort.
pub fn sort_files(
    paths: impl IntoIterator<Item = PathBuf>,
    strategy: &dyn SortKeyStrategy,
) -> Result<Vec<ImageFileRef>> {
    let mut files = paths
        .into_iter()
        .map(|path| {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            match strategy.key(&file_name) {
                Some(sort_key) => Ok(ImageFileRef {
                    path,
                    file_name,
                    sort_key,
                }),
                None => Err(MigError::FilenameSort { path }),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    files.sort_by_key(|f| f.sort_key);
    Ok(files)
}
