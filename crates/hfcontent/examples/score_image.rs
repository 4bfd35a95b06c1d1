use hfcontent::{ErrorKind, Scorer};
use std::path::Path;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <image> [out.json]", args[0]);
        std::process::exit(2);
    }

    let path = Path::new(&args[1]);
    let report = match Scorer::new().analyze_path(path) {
        Ok(report) => report,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("Error: Image file not found at {}", path.display());
            std::process::exit(2);
        }
        Err(e) => {
            println!("An error occurred: {e}");
            std::process::exit(1);
        }
    };

    println!("High-frequency content measure: {}", report.score);
    println!(
        "  {:.2}% of spectral magnitude beyond radius {}",
        report.high_frequency_ratio * 100.0,
        report.cutoff_radius
    );

    if let Some(out_path) = args.get(2) {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                if let Err(e) = std::fs::write(out_path, json) {
                    eprintln!("failed to write {out_path}: {e}");
                    std::process::exit(1);
                }
                println!("Wrote {out_path}");
            }
            Err(e) => eprintln!("failed to serialize report: {e}"),
        }
    }
}
