use line_extract::config::extract::load_config;
use line_extract::diagnostics::traced;
use line_extract::extract::extract_edges_with_summary;
use line_extract::image::io::write_json_file;
use line_extract::validate::validate;
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args_os().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let request = validate(&config.input, config.thresholds.lower, config.thresholds.upper)
        .map_err(|e| e.to_string())?;
    let location = config.output.location()?;

    let args = (
        &request.input,
        request.thresholds.lower,
        request.thresholds.upper,
    );
    let summary = traced("extract_edges", &args, || {
        extract_edges_with_summary(&request.input, request.thresholds, &location)
    })
    .map_err(|e| e.to_string())?;

    println!(
        "Saved edge map to {} ({} edge pixels, {}x{})",
        summary.output.display(),
        summary.edge_pixel_count,
        summary.width,
        summary.height
    );

    if let Some(summary_path) = &config.output.summary_json {
        write_json_file(summary_path, &summary)?;
        println!("Saved summary to {}", summary_path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: extract_from_config <config.json>".to_string()
}
