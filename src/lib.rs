pub mod cli;
pub mod error;
pub mod logger;
pub mod merge;
pub mod reader;
pub mod waypoint;
pub mod writer;

pub use cli::{CliConfig, MergePaths};
pub use error::{GpxError, Result};
pub use merge::{merge_files, report_error, run};
pub use reader::{parse_document, read_waypoints};
pub use waypoint::Waypoint;
pub use writer::{write_gpx, write_gpx_file};
