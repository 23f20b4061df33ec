use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use cardex::{
    AnalysisSession, DailyLog, LOG_SOURCE, Printer, default_dataset_path, default_logs_dir,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Cardex explores vehicle datasets from the terminal.", long_about = None)]
struct Args {
    /// Dataset file to analyze; defaults to the configured path.
    #[arg(short = 'p', long = "path")]
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log = match DailyLog::open(LOG_SOURCE, &default_logs_dir()) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut printer = Printer::stdout();
    if let Err(e) = printer.clear() {
        log.error(&error_chain(&e));
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let path = args.path.unwrap_or_else(default_dataset_path);
    let stdin = io::stdin();
    let mut session = AnalysisSession::new(path, stdin.lock(), printer, &log);
    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log.error(&error_chain(&e));
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn error_chain(e: &dyn Error) -> String {
    let mut text = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        text.push_str(&format!(" caused by: {cause}"));
        source = cause.source();
    }
    text
}
