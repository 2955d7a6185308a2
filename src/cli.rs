use clap::Parser;
use std::path::PathBuf;

/// Merge the waypoints of two .GPX files into one GPX 1.1 file
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None, trailing_var_arg = true)]
pub struct CliConfig {
    /// <INPUT1> <INPUT2> <OUTPUT>; anything after the output is ignored
    #[clap(value_parser, allow_hyphen_values = true)]
    pub paths: Vec<PathBuf>,

    /// Log each stage and waypoint to stderr
    #[clap(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergePaths {
    pub first: PathBuf,
    pub second: PathBuf,
    pub output: PathBuf,
}

impl CliConfig {
    /// `None` when fewer than three paths were given.
    pub fn merge_paths(&self) -> Option<MergePaths> {
        match self.paths.as_slice() {
            [first, second, output, ..] => Some(MergePaths {
                first: first.clone(),
                second: second.clone(),
                output: output.clone(),
            }),
            _ => None,
        }
    }
}
