use crate::cli::MergePaths;
use crate::error::{GpxError, Result};
use crate::reader::{parse_document, read_waypoints};
use crate::writer::write_gpx_file;
use console::{style, Term};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Reads both inputs, writes the merged file and reports each step on `term`.
///
/// Returns the number of waypoints written. The second input is not touched
/// when the first one fails.
pub fn run(paths: &MergePaths, term: &Term) -> Result<usize> {
    let count = merge_with(paths, |path| report(term, "Input file", path))?;
    report(term, "Result file", &paths.output)?;

    Ok(count)
}

/// Same as [`run`] without any terminal output.
pub fn merge_files(paths: &MergePaths) -> Result<usize> {
    merge_with(paths, |_| Ok(()))
}

fn merge_with<F>(paths: &MergePaths, mut on_input: F) -> Result<usize>
where
    F: FnMut(&Path) -> io::Result<()>,
{
    let first_text = load(&paths.first)?;
    let first_doc = parse_document(&first_text).map_err(|e| e.for_input(&paths.first))?;
    let first = read_waypoints(&first_doc).map_err(|e| e.for_input(&paths.first))?;
    info!("Read {} waypoint(s) from {}", first.len(), paths.first.display());
    on_input(&paths.first)?;

    let second_text = load(&paths.second)?;
    let second_doc = parse_document(&second_text).map_err(|e| e.for_input(&paths.second))?;
    let second = read_waypoints(&second_doc).map_err(|e| e.for_input(&paths.second))?;
    info!("Read {} waypoint(s) from {}", second.len(), paths.second.display());
    on_input(&paths.second)?;

    for wpt in first.iter().chain(second.iter()) {
        debug!("{}", wpt);
    }

    write_gpx_file(&paths.output, &[first.as_slice(), second.as_slice()])?;

    let count = first.len() + second.len();
    info!("Wrote {} waypoint(s) to {}", count, paths.output.display());

    Ok(count)
}

fn load(path: &Path) -> Result<String> {
    debug!("Loading {}", path.display());
    fs::read_to_string(path).map_err(|e| GpxError::from(e).for_input(path))
}

fn report(term: &Term, label: &str, path: &Path) -> io::Result<()> {
    term.write_line(&format!(
        "{} {}: {}",
        style(">").bold(),
        style(label).bold().dim(),
        path.display()
    ))
}

pub fn report_error(term: &Term, error: &GpxError) -> io::Result<()> {
    term.write_line(&format!(
        "{} {} {}",
        style(">").bold(),
        style("Error:").red().bold(),
        error
    ))
}
