use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "waygraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark suite and compare shortest-path strategies
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Criterion baseline to save and read back
        #[arg(long, default_value = "waygraph")]
        baseline: String,

        /// Where to write the markdown report
        #[arg(long, default_value = "benchmark_results/report.md")]
        output: PathBuf,
    },
}

/// Strategies measured by the `shortest_path` group of `benches/suite.rs`.
const STRATEGIES: &[&str] = &["linear_scan", "binary_heap"];

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            baseline,
            output,
        } => {
            if !report_only {
                run_benchmarks(quick, &baseline)?;
            }
            generate_report(&baseline, &output)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, baseline: &str) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", "suite", "--release"])
        .status()?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    println!("\n>>> Running suite (baseline: {baseline})");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", "suite", "--"]);
    cmd.arg("--save-baseline").arg(baseline);

    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("Failed to run benchmark suite")?;
    if !status.success() {
        anyhow::bail!("Benchmark suite failed");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

/// Mean time in nanoseconds of `group/function/parameter` under `baseline`.
fn mean_ns(root: &Path, group: &str, function: &str, parameter: &str, baseline: &str) -> Option<f64> {
    let path = root
        .join(group)
        .join(function)
        .join(parameter)
        .join(baseline)
        .join("estimates.json");
    let content = fs::read_to_string(path).ok()?;
    let estimates: Estimates = serde_json::from_str(&content).ok()?;
    Some(estimates.mean.point_estimate)
}

fn format_ns(ns: f64) -> String {
    if ns >= 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns >= 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

/// Parameters (graph sizes) measured for `group/function`, numerically sorted.
fn parameters(root: &Path, group: &str, function: &str) -> Vec<String> {
    let Ok(entries) = fs::read_dir(root.join(group).join(function)) else {
        return Vec::new();
    };
    let mut sizes: BTreeMap<u64, String> = BTreeMap::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Ok(n) = name.parse::<u64>() {
            sizes.insert(n, name);
        }
    }
    sizes.into_values().collect()
}

fn generate_report(baseline: &str, output: &Path) -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(output).with_context(|| format!("creating {}", output.display()))?;

    writeln!(file, "# Shortest-Path Strategy Report")?;
    writeln!(file)?;
    write!(file, "| Vertices |")?;
    for strategy in STRATEGIES {
        write!(file, " {strategy} |")?;
    }
    writeln!(file, " heap vs linear |")?;
    write!(file, "|---|")?;
    for _ in STRATEGIES {
        write!(file, "---|")?;
    }
    writeln!(file, "---|")?;

    for size in parameters(criterion_dir, "shortest_path", STRATEGIES[0]) {
        write!(file, "| {size} |")?;
        let times: Vec<Option<f64>> = STRATEGIES
            .iter()
            .map(|s| mean_ns(criterion_dir, "shortest_path", s, &size, baseline))
            .collect();
        for time in &times {
            match time {
                Some(ns) => write!(file, " {} |", format_ns(*ns))?,
                None => write!(file, " N/A |")?,
            }
        }
        match (times[0], times[1]) {
            (Some(linear), Some(heap)) if heap > 0.0 => writeln!(file, " **{:.2}x** |", linear / heap)?,
            _ => writeln!(file, " - |")?,
        }
    }

    writeln!(file)?;
    writeln!(file, "## Enumeration")?;
    writeln!(file)?;
    writeln!(file, "| Benchmark | Bound | Mean |")?;
    writeln!(file, "|---|---|---|")?;
    for function in ["by_hops", "by_exact_hops", "within_range"] {
        for bound in parameters(criterion_dir, "enumeration", function) {
            if let Some(ns) = mean_ns(criterion_dir, "enumeration", function, &bound, baseline) {
                writeln!(file, "| {function} | {bound} | {} |", format_ns(ns))?;
            }
        }
    }

    println!("Report written to {}", output.display());
    Ok(())
}
