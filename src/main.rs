//! Command-line front end: 3-CNF, maximum clique and vertex cover batches

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use np_reduce::{
    config::{CliOverrides, OutputFormat, Settings},
    graph::load_graph_file,
    sat::load_cnf_file,
    solve::BatchSolver,
    utils::{ColorOutput, ReportFormatter},
};
use std::path::{Path, PathBuf};
use std::time::Instant;

const EXAMPLE_CNF: &str = "\
1 2 3
1 -1 1
1 2 3 -1 -2 -3
2 -1 -1 -3 -2 -4 4 -3 -1
1 1 2 1 1 -2 -1 -1 2 -1 -1 -2
";

const EXAMPLE_GRAPHS: &str = "\
3
1 1 1
1 1 1
1 1 1
5
1 1 1 0 0
1 1 1 0 0
1 1 1 1 0
0 0 1 1 1
0 0 0 1 1
4
1 1 0 1
1 1 1 0
0 1 1 1
1 0 1 1
0
";

#[derive(Parser)]
#[command(name = "np_reduce")]
#[command(about = "3-CNF, clique and vertex cover solver by reduction")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve each 3-CNF formula (one per line) via k-clique and vertex cover
    Sat {
        /// Formula batch file
        file: PathBuf,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Find a maximum clique of each graph via minimum vertex cover
    Clique {
        /// Graph batch file
        file: PathBuf,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Find a minimum vertex cover of each graph, or one of a given size
    Cover {
        /// Graph batch file
        file: PathBuf,

        /// Look for a cover of exactly this many vertices
        #[arg(short, long)]
        size: Option<usize>,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Create a default configuration and example input files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Per-instance search timeout in seconds, 0 for none (overrides config)
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Seed for fallback assignments (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Solve the instances of the batch concurrently
    #[arg(long)]
    parallel: bool,

    /// Save results to this directory (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Format of saved results (overrides config)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sat { file, run } => sat_command(file, run),
        Commands::Clique { file, run } => clique_command(file, run),
        Commands::Cover { file, size, run } => cover_command(file, size, run),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Load the config file if present, then apply command line overrides
fn load_settings(run: &RunArgs) -> Result<Settings> {
    let mut settings = if run.config.exists() {
        Settings::from_file(&run.config)
            .with_context(|| format!("Failed to load config from {}", run.config.display()))?
    } else {
        if run.verbose {
            println!(
                "{}",
                ColorOutput::warning(&format!(
                    "Config file {} not found, using defaults",
                    run.config.display()
                ))
            );
        }
        Settings::default()
    };

    settings.merge_with_cli(&CliOverrides {
        timeout_seconds: run.timeout,
        random_seed: run.seed,
        parallel: run.parallel,
        format: run.format.map(OutputFormat::from),
        output_dir: run.output.clone(),
    });
    settings.validate().context("Configuration validation failed")?;

    if run.verbose {
        println!("Configuration:");
        println!("  Timeout: {}s", settings.search.timeout_seconds);
        println!("  Seed: {:?}", settings.search.random_seed);
        println!("  Parallel: {}", settings.search.parallel);
        if settings.output.save {
            println!("  Output dir: {}", settings.output.output_directory.display());
        }
        println!();
    }

    Ok(settings)
}

fn save_if_requested<T: serde::Serialize>(settings: &Settings, kind: &str, text: &str, reports: &[T]) -> Result<()> {
    if !settings.output.save {
        return Ok(());
    }
    let path = ReportFormatter::save_reports(
        kind,
        text,
        reports,
        &settings.output.output_directory,
        settings.output.format,
    )
    .context("Failed to save results")?;
    println!("{}", ColorOutput::success(&format!("Results saved to {}", path.display())));
    Ok(())
}

fn warn_timed_out(count: usize) {
    if count > 0 {
        println!(
            "{}",
            ColorOutput::warning(&format!("{} instance(s) hit the search timeout", count))
        );
    }
}

fn source_name(file: &Path) -> String {
    file.display().to_string()
}

fn sat_command(file: PathBuf, run: RunArgs) -> Result<()> {
    let settings = load_settings(&run)?;
    let cnfs = load_cnf_file(&file)?;
    println!(
        "{}",
        ColorOutput::info(&format!("Reducing {} formula(s) to vertex cover...", cnfs.len()))
    );

    let start_time = Instant::now();
    let reports = BatchSolver::from_settings(&settings)
        .solve_3sat(&cnfs)
        .context("Failed to solve formulas")?;
    let total_time = start_time.elapsed();

    let text = ReportFormatter::format_sat_reports(&source_name(&file), &reports);
    println!("{}", text);

    if run.verbose {
        for (i, report) in reports.iter().enumerate() {
            println!(
                "3CNF No.{}: cover search V={} E={} K={}, {} nodes",
                i + 1,
                report.cover.vertices,
                report.cover.edges,
                report.cover.k,
                report.nodes
            );
        }
    }

    warn_timed_out(reports.iter().filter(|r| r.timed_out()).count());
    let satisfied = reports.iter().filter(|r| r.is_satisfied()).count();
    let unverified = reports.iter().filter(|r| r.is_satisfied() && !r.verified).count();
    if unverified > 0 {
        println!(
            "{}",
            ColorOutput::error(&format!("{} solution(s) failed verification", unverified))
        );
    }
    println!(
        "{}",
        ColorOutput::success(&format!(
            "{} of {} formula(s) satisfied in {:.3}s",
            satisfied,
            reports.len(),
            total_time.as_secs_f64()
        ))
    );

    save_if_requested(&settings, "sat", &text, &reports)
}

fn clique_command(file: PathBuf, run: RunArgs) -> Result<()> {
    let settings = load_settings(&run)?;
    let graphs = load_graph_file(&file)?;

    let start_time = Instant::now();
    let reports = BatchSolver::from_settings(&settings)
        .solve_max_clique(&graphs)
        .context("Failed to find cliques")?;

    let text = ReportFormatter::format_clique_reports(&source_name(&file), &reports);
    println!("{}", text);

    if run.verbose {
        for (i, report) in reports.iter().enumerate() {
            match report.cover_size {
                Some(size) => println!("G{}: cover of size {} on the complement, {} nodes", i + 1, size, report.nodes),
                None => println!("G{}: timed out on the complement, {} nodes", i + 1, report.nodes),
            }
        }
    }
    warn_timed_out(reports.iter().filter(|r| r.timed_out()).count());
    println!(
        "{}",
        ColorOutput::success(&format!(
            "{} graph(s) in {:.3}s",
            reports.len(),
            start_time.elapsed().as_secs_f64()
        ))
    );

    save_if_requested(&settings, "clique", &text, &reports)
}

fn cover_command(file: PathBuf, size: Option<usize>, run: RunArgs) -> Result<()> {
    let settings = load_settings(&run)?;
    let graphs = load_graph_file(&file)?;

    let start_time = Instant::now();
    let reports = BatchSolver::from_settings(&settings)
        .solve_vertex_cover(&graphs, size)
        .context("Failed to find vertex covers")?;

    let text = ReportFormatter::format_cover_reports(&source_name(&file), size, &reports);
    println!("{}", text);

    if run.verbose {
        for (i, report) in reports.iter().enumerate() {
            println!("G{}: {} nodes", i + 1, report.nodes);
        }
    }

    warn_timed_out(reports.iter().filter(|r| r.timed_out).count());
    let missing = reports.iter().filter(|r| r.cover.is_none() && !r.timed_out).count();
    if missing > 0 {
        println!(
            "{}",
            ColorOutput::warning(&format!("{} graph(s) have no cover of the requested size", missing))
        );
    }
    println!(
        "{}",
        ColorOutput::success(&format!(
            "{} graph(s) in {:.3}s",
            reports.len(),
            start_time.elapsed().as_secs_f64()
        ))
    );

    save_if_requested(&settings, "cover", &text, &reports)
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input");
    for dir in [&config_dir, &input_dir] {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    for (name, content) in [("cnf.txt", EXAMPLE_CNF), ("graphs.txt", EXAMPLE_GRAPHS)] {
        let path = input_dir.join(name);
        if path.exists() && !force {
            println!("Skipped: {} (already exists)", path.display());
            continue;
        }
        std::fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Created: {}", path.display());
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. cargo run -- sat {}", input_dir.join("cnf.txt").display());
    println!("2. cargo run -- clique {}", input_dir.join("graphs.txt").display());
    println!("3. cargo run -- cover {}", input_dir.join("graphs.txt").display());

    Ok(())
}
