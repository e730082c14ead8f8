use arc_solver::constants::{
    DEFAULT_GUESS, DEFAULT_LOWER, DEFAULT_MAX_ITERATIONS, DEFAULT_PRECISION, DEFAULT_SPACE,
    DEFAULT_UPPER,
};
use arc_solver::{ArcInputs, ArcSolution, ArcSolver, TracingReporter};
use clap::{Parser, ValueEnum};
use std::error::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arc-cli")]
#[command(version)]
#[command(allow_negative_numbers = true)]
#[command(about = "Find the radius and sector angle joining a lower and upper arc", long_about = None)]
struct Cli {
    /// Lower arc length
    #[arg(long, default_value_t = DEFAULT_LOWER)]
    lower: f64,

    /// Upper arc length
    #[arg(long, default_value_t = DEFAULT_UPPER)]
    upper: f64,

    /// Space between the arcs (height)
    #[arg(long, default_value_t = DEFAULT_SPACE)]
    space: f64,

    /// Initial guess at core radius
    #[arg(long, default_value_t = DEFAULT_GUESS)]
    guess: f64,

    /// Precision within which to target search
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: f64,

    /// Give up after this many refinement steps
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Log every refinement step
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let inputs = ArcInputs {
        lower: cli.lower,
        upper: cli.upper,
        space: cli.space,
        guess: cli.guess,
        precision: cli.precision,
    };
    inputs.validate()?;

    info!("Upper: {}  Lower: {}  Space: {}", inputs.upper, inputs.lower, inputs.space);
    info!("Initial guess is {}", inputs.guess);
    info!("Precision is {}", inputs.precision);

    let mut solver = ArcSolver::new(inputs);
    solver.set_max_iterations(cli.max_iterations);

    let solution = solver.solve_with(&mut TracingReporter)?;

    info!(
        "Upper arc [{}] within precision: base radius is {}",
        solution.upper_arc, solution.radius
    );
    info!("Sagitta is [{:.2}]", solution.sagitta);
    info!("Theta is [{:.2}]", solution.theta);
    info!("Calculated in [{}] iterations", solution.iterations);

    display_solution(&inputs, &solution, cli.output)?;

    Ok(())
}

fn display_solution(
    inputs: &ArcInputs,
    solution: &ArcSolution,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║            ARC SOLUTION                ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Lower Arc:       {:>12.4}          ║", inputs.lower);
            println!("║ Upper Arc:       {:>12.4}          ║", inputs.upper);
            println!("║ Space:           {:>12.4}          ║", inputs.space);
            println!("╠════════════════════════════════════════╣");
            println!("║ Radius:          {:>12.4}          ║", solution.radius);
            println!("║ Theta:           {:>12.4}          ║", solution.theta);
            println!("║ Computed Upper:  {:>12.4}          ║", solution.upper_arc);
            println!("║ Sagitta:         {:>12.4}          ║", solution.sagitta);
            println!("║ Half Chord:      {:>12.4}          ║", solution.half_chord);
            println!("║ Iterations:      {:>12}          ║", solution.iterations);
            println!("╚════════════════════════════════════════╝");
        }

        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(solution)?);
        }

        OutputFormat::Csv => {
            println!("radius,theta,upper_arc,sagitta,half_chord,iterations");
            println!(
                "{:.6},{:.6},{:.6},{:.6},{:.6},{}",
                solution.radius,
                solution.theta,
                solution.upper_arc,
                solution.sagitta,
                solution.half_chord,
                solution.iterations
            );
        }
    }

    Ok(())
}
