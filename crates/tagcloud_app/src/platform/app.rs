use std::io;
use std::process::ExitCode;

use engine_logging::{engine_error, engine_info};
use tagcloud_engine::generate_tag_cloud;

use super::error::AppError;
use super::logging::{self, LogSettings};
use super::prompt::read_request;

pub fn run_app() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            engine_error!("Run failed: {}", err);
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let request = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        read_request(&mut stdin.lock(), &mut stdout.lock())?
    };

    // Only a valid request gets a logger, so a rejected run touches no files.
    logging::initialize(LogSettings::from_env(), &request);
    engine_info!(
        "Generating top {} words from {:?} into {:?}",
        request.limit,
        request.input_path,
        request.output_path
    );

    let summary = generate_tag_cloud(&request)?;
    engine_info!(
        "Selected {} of {} distinct words ({} input)",
        summary.selected,
        summary.distinct_words,
        summary.encoding_label
    );
    Ok(())
}
