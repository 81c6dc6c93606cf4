use std::path::PathBuf;

/// Array size compared by the snapshot charts.
pub const DEFAULT_SNAPSHOT_SIZE: u64 = 10000;
pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

/// Settings for one plotting run.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub snapshot_size: u64,
    /// Directory the images are written to.
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            snapshot_size: DEFAULT_SNAPSHOT_SIZE,
            output_dir: PathBuf::from("."),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}
