/// Root directory scanned for experiment folders when no override is given.
pub const DEFAULT_INPUT_ROOT: &str = "../images";

/// Root directory receiving one mirrored folder per experiment.
pub const DEFAULT_RESULTS_ROOT: &str = "../MIG_results";

/// File name of the per-experiment spreadsheet.
pub const REPORT_FILE_NAME: &str = "MIG.xlsx";

/// Worksheet holding the MIG table.
pub const REPORT_SHEET_NAME: &str = "MIG_Results";

/// Header of the per-frame column (column 0).
pub const HEADER_SINGLE_FRAME: &str = "MIG Single Frame";

/// Header of the average column (column 1).
pub const HEADER_AVERAGE: &str = "Avg. MIG";

/// Minimum frame count to use frame-level Rayon parallelism.
pub const PARALLEL_FRAME_THRESHOLD: usize = 4;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;
