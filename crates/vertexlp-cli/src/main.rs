use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use vertexlp_lang::{Compiler, ProblemForm};
use vertexlp_solver::{Solution, SolveError, Solver};

#[derive(Parser)]
#[command(name = "vertexlp")]
#[command(about = "Solve two-variable linear programs by the graphical method", long_about = None)]
struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a problem form and list every feasible vertex
    Solve {
        /// JSON file containing the problem form
        file: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
        /// Decimal places for coordinates and objective values
        #[arg(short, long, default_value_t = vertexlp_solver::DEFAULT_DECIMALS)]
        precision: u32,
    },
    /// Check a problem form for errors
    Check {
        /// JSON file containing the problem form
        file: PathBuf,
    },
    /// Evaluate a coefficient expression
    Eval {
        /// Expression such as "1,5 * (2 + 1)"; put `--` before a leading minus
        expr: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Pretty,
    Json,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() {
    let cli = Cli::parse();

    SubscriberBuilder::default()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Solve { file, format, precision } => {
            let form = read_form(&file);
            let solver = Solver::new().with_precision(precision);

            let solution = match Compiler::new().solve(&form, &solver) {
                Ok(s) => s,
                Err(vertexlp_lang::CompileError::Solve(SolveError::NoFeasibleSolution)) => {
                    println!("Status: INFEASIBLE");
                    println!("No intersection point satisfies every constraint.");
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Compile error: {}", e);
                    std::process::exit(1);
                }
            };

            match format {
                Format::Json => match serde_json::to_string_pretty(&solution) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error writing JSON: {}", e);
                        std::process::exit(1);
                    }
                },
                Format::Pretty => print!("{}", render_results(&solution)),
            }
        }
        Commands::Check { file } => {
            let form = read_form(&file);
            let errors = Compiler::new().check(&form);

            if errors.is_empty() {
                println!("✓ {} is valid", file.display());
                println!("  {} constraints", form.constraints.len());
                println!("  {}", if form.maximize { "maximize" } else { "minimize" });
            } else {
                eprintln!("✗ {} has errors:", file.display());
                for e in &errors {
                    eprintln!("  {}", e);
                }
                std::process::exit(1);
            }
        }
        Commands::Eval { expr } => match vertexlp_lang::evaluate_str(&expr) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn read_form(file: &Path) -> ProblemForm {
    let source = match std::fs::read_to_string(file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        }
    };

    match serde_json::from_str(&source) {
        Ok(form) => form,
        Err(e) => {
            eprintln!("Invalid problem form: {}", e);
            std::process::exit(1);
        }
    }
}

/// One line per vertex, best first, the way the result panel lists them
fn render_results(solution: &Solution) -> String {
    let mut out = String::new();
    for (i, v) in solution.vertices.iter().enumerate() {
        out.push_str(&format!(
            "{}) ({}, {})  Z({}, {}) = {}",
            i + 1,
            v.x,
            v.y,
            v.x,
            v.y,
            v.z
        ));
        if i == 0 {
            out.push_str(&format!(
                "  <- this point {} the objective function",
                solution.sense.verb()
            ));
        }
        out.push('\n');
    }
    out
}
