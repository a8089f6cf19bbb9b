use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, XlsxError};
use tracing::info;

use crate::consts::{HEADER_AVERAGE, HEADER_SINGLE_FRAME, REPORT_FILE_NAME, REPORT_SHEET_NAME};
use crate::error::{MigError, Result};

/// Per-frame MIG values of one experiment, in sorted frame order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MigReport {
    samples: Vec<f64>,
}

impl MigReport {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Arithmetic mean of all samples, `None` when there are none.
    pub fn average(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }
}

/// Write `MIG.xlsx` into `dir`, replacing any previous report.
///
/// Layout of the single worksheet:
///   row 0      "MIG Single Frame" | "Avg. MIG"
///   row 1      frame 1            | average
///   rows 2..N  frame 2..N         |
///
/// The average cell stays empty for a report without samples.
pub fn write_report(report: &MigReport, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(REPORT_FILE_NAME);

    build_workbook(report)
        .and_then(|mut workbook| workbook.save(&path))
        .map_err(|source| MigError::ReportWrite {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), frames = report.len(), "Report written");
    Ok(path)
}

fn build_workbook(report: &MigReport) -> std::result::Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(REPORT_SHEET_NAME)?;
    sheet.write_string(0, 0, HEADER_SINGLE_FRAME)?;
    sheet.write_string(0, 1, HEADER_AVERAGE)?;

    for (i, &mig) in report.samples().iter().enumerate() {
        sheet.write_number(i as u32 + 1, 0, mig)?;
    }
    if let Some(avg) = report.average() {
        sheet.write_number(1, 1, avg)?;
    }

    Ok(workbook)
}
