use border_segments::config::scan;
use border_segments::diagnostics::run_scan;
use border_segments::io::write_json_file;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = scan::load_config(Path::new(&config_path))?;

    let dim = config.dimension().map_err(|e| e.to_string())?;
    let options = config.sweep.to_sweep_options();
    let summary =
        run_scan(dim, options, config.sweep.exact_endpoints).map_err(|e| e.to_string())?;

    write_json_file(&config.output.summary_json, &summary)?;

    println!(
        "Grid {}: {} boundary pairs ({} skipped), {} sweep candidates over {} orientations",
        summary.dimension,
        summary.pairs,
        summary.skipped_pairs,
        summary.sweep_candidates,
        summary.orientations.len()
    );
    println!(
        "Saved scan summary to {} ({:.3} ms)",
        config.output.summary_json.display(),
        summary.timing.total_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: border_scan <config.json>".to_string()
}
