use clap::{ErrorKind, Parser};
use console::Term;
use gpxmerge::{logger, report_error, run, CliConfig};
use std::error::Error;
use std::process;

fn main() -> Result<(), Box<dyn Error>> {
    // Unparseable or too short command lines are a silent no-op.
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => return Ok(()),
    };

    let Some(paths) = config.merge_paths() else {
        return Ok(());
    };

    logger::init_cli_logger(config.verbose);

    let term = Term::stdout();
    if let Err(e) = run(&paths, &term) {
        tracing::error!("Merge failed: {}", e);
        report_error(&term, &e).ok();
        process::exit(-1);
    }

    Ok(())
}
