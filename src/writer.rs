use crate::error::{GpxError, Result};
use crate::waypoint::Waypoint;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";
const GPX_OPEN: &str = concat!(
    "<gpx version=\"1.1\" ",
    "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" ",
    "xmlns=\"http://www.topografix.com/GPX/1/1\" ",
    "xsi:schemaLocation=\"http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd\">"
);
const GPX_CLOSE: &str = "</gpx>";

/// Writes one GPX 1.1 document holding every list, in order.
///
/// Field values are copied verbatim; nothing is escaped.
pub fn write_gpx<W: Write>(mut out: W, lists: &[&[Waypoint<'_>]]) -> io::Result<()> {
    writeln!(out, "{XML_DECLARATION}")?;
    writeln!(out, "{GPX_OPEN}")?;

    for wpt in lists.iter().flat_map(|list| list.iter()) {
        write_waypoint(&mut out, wpt)?;
    }

    writeln!(out, "{GPX_CLOSE}")?;
    out.flush()
}

fn write_waypoint<W: Write>(out: &mut W, wpt: &Waypoint<'_>) -> io::Result<()> {
    writeln!(
        out,
        " <wpt lat=\"{}\" lon=\"{}\" iswarning=\"0\">",
        wpt.lat(),
        wpt.lon()
    )?;
    writeln!(out, "  <ele>{}</ele>", wpt.ele())?;
    writeln!(out, "  <time>{}</time>", wpt.time())?;
    writeln!(out, "  <name>{}</name>", wpt.name())?;
    writeln!(out, "  <cmt>{}</cmt>", wpt.cmt())?;
    writeln!(out, " </wpt>")
}

pub fn write_gpx_file(path: &Path, lists: &[&[Waypoint<'_>]]) -> Result<()> {
    let file = File::create(path).map_err(|source| GpxError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Writing {} waypoint list(s) to {}", lists.len(), path.display());

    write_gpx(BufWriter::new(file), lists).map_err(|source| GpxError::Write {
        path: path.to_path_buf(),
        source,
    })
}
