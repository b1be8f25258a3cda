use barcode_check::detector::RegionDetector;
use barcode_check::tools::{bench_limit_from_env, dataset_iter, dataset_root_from_env, load_rgba};
use barcode_check::utils::brightness::brightness_stats;
use barcode_check::{
    DetectionConfig, LogReporter, StandardsConfig, ValidationReport, Validator, render_text,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Exit status for unreadable images and bad configuration
const EXIT_INPUT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "barcode_check", version, about = "ISBN/EAN-13 barcode print checks")]
struct Cli {
    /// JSON file overriding the print standards
    #[arg(long, global = true)]
    standards: Option<PathBuf>,
    /// JSON file overriding the detector settings
    #[arg(long, global = true)]
    detection: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the barcode on a rendered page image
    Check {
        #[arg(long)]
        image: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Scan the block grid in parallel
        #[arg(long)]
        parallel: bool,
    },
    /// Print brightness stats and detector telemetry for a page image
    DebugDetect {
        #[arg(long)]
        image: PathBuf,
    },
    /// Validate every page image under a directory
    Batch {
        #[arg(long)]
        root: Option<PathBuf>,
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let validator = match build_validator(cli.standards.as_deref(), cli.detection.as_deref()) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(EXIT_INPUT_ERROR);
        }
    };

    match cli.command {
        Command::Check {
            image,
            json,
            parallel,
        } => ExitCode::from(check_cmd(&validator.parallel(parallel), &image, json)),
        Command::DebugDetect { image } => debug_detect_cmd(&validator, &image),
        Command::Batch { root, limit } => batch_cmd(&validator, root, limit),
    }
}

fn build_validator(
    standards: Option<&Path>,
    detection: Option<&Path>,
) -> barcode_check::Result<Validator> {
    let standards = match standards {
        Some(path) => StandardsConfig::from_json_file(path)?,
        None => StandardsConfig::default(),
    };
    let detection = match detection {
        Some(path) => DetectionConfig::from_json_file(path)?,
        None => DetectionConfig::default(),
    };
    Validator::with_config(standards, detection)
}

fn check_cmd(validator: &Validator, image: &Path, json: bool) -> u8 {
    let page = match load_rgba(image) {
        Ok(page) => page,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", image.display(), err);
            return EXIT_INPUT_ERROR;
        }
    };

    let report = match validator.validate_with_reporter(Some(&page), &mut LogReporter) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("{err}");
            return EXIT_INPUT_ERROR;
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("Failed to serialize report: {err}");
                return EXIT_INPUT_ERROR;
            }
        }
    } else {
        println!("Image: {}", image.display());
        print!("{}", render_text(&report));
    }

    if report.overall_pass { 0 } else { 1 }
}

fn debug_detect_cmd(validator: &Validator, image: &Path) -> ExitCode {
    let page = match load_rgba(image) {
        Ok(page) => page,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", image.display(), err);
            return ExitCode::from(EXIT_INPUT_ERROR);
        }
    };

    println!("Image: {} ({}x{})", image.display(), page.width(), page.height());

    let stats = brightness_stats(&page);
    println!(
        "Brightness range: {:.1}-{:.1}, average: {:.1}",
        stats.min, stats.max, stats.avg
    );

    let detection = validator.detection();
    let (region, telemetry) =
        RegionDetector::detect_with_stats(&page, detection, validator.standards().dpi);
    println!(
        "Blocks: sampled={} above_threshold={} (block={}px, threshold={})",
        telemetry.blocks_sampled,
        telemetry.blocks_above_threshold,
        detection.block_size,
        detection.contrast_threshold
    );

    let mut blocks = RegionDetector::sample_grid(&page, detection.block_size);
    blocks.sort_by(|a, b| b.contrast.total_cmp(&a.contrast));
    for (i, block) in blocks.iter().take(5).enumerate() {
        println!(
            "  Block {}: origin=({}, {}) contrast={:.1}",
            i, block.x, block.y, block.contrast
        );
    }

    match (telemetry.best_block, region) {
        (Some(best), Some(region)) => {
            println!(
                "Best block: ({}, {}) contrast={:.1}",
                best.x, best.y, best.contrast
            );
            println!(
                "Region: x={} y={} {}x{} px = {:.2}\" x {:.2}\"",
                region.x,
                region.y,
                region.width,
                region.height,
                region.width_inches(),
                region.height_inches()
            );
        }
        _ => println!("No barcode detected"),
    }

    ExitCode::SUCCESS
}

fn batch_cmd(validator: &Validator, root: Option<PathBuf>, limit: Option<usize>) -> ExitCode {
    let root = root.unwrap_or_else(dataset_root_from_env);
    let limit = limit.or_else(bench_limit_from_env);

    if !root.exists() {
        eprintln!("Dataset root not found: {}", root.display());
        return ExitCode::from(EXIT_INPUT_ERROR);
    }

    let images: Vec<PathBuf> = dataset_iter(&root, limit).collect();
    if images.is_empty() {
        println!("No images found under {}", root.display());
        return ExitCode::SUCCESS;
    }

    let mut passed = 0usize;
    let mut total = 0usize;
    let mut total_elapsed = std::time::Duration::default();

    for path in images {
        let page = match load_rgba(&path) {
            Ok(page) => page,
            Err(err) => {
                println!("  {} -> load_failed ({})", path.display(), err);
                continue;
            }
        };
        total += 1;

        let start = Instant::now();
        let report = match validator.validate(Some(&page)) {
            Ok(report) => report,
            Err(err) => {
                println!("  {} -> error ({})", path.display(), err);
                continue;
            }
        };
        let elapsed = start.elapsed();
        total_elapsed += elapsed;

        if report.overall_pass {
            passed += 1;
        }
        println!(
            "  [{}] {} -> {} ({:.2?})",
            total,
            path.display(),
            summarize(&report),
            elapsed
        );
    }

    if total > 0 {
        let rate = (passed as f64 / total as f64) * 100.0;
        println!("Pass rate: {}/{} = {:.2}%", passed, total, rate);
    }
    println!("Total time: {:.2?}", total_elapsed);
    ExitCode::SUCCESS
}

fn summarize(report: &ValidationReport) -> String {
    if report.overall_pass {
        return "pass".to_string();
    }
    let failed: Vec<&str> = report.failures().map(|v| v.title.as_str()).collect();
    format!("fail: {}", failed.join(", "))
}
