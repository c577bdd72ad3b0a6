use line_extract::validate::parse_args;
use line_extract::{extract_edges_traced, Error, OutputLocation, ValidationError};
use std::env;
use std::ffi::OsString;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        if matches!(
            err,
            Error::Validation(ValidationError::InvalidArguments { .. })
        ) {
            eprintln!("{}", usage());
        }
        std::process::exit(1);
    }
}

fn run() -> line_extract::Result<()> {
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    let raw = parse_args(&args)?;
    let request = raw.validate()?;
    let location = OutputLocation::beside_executable()?;
    // the written path is already printed by the call trace
    extract_edges_traced(&request, &location)?;
    Ok(())
}

fn usage() -> String {
    "Usage: line_extract <input_file_path> <lower_threshold> <upper_threshold>".to_string()
}
