//! Grover's Search Demo
//!
//! Builds a Grover search circuit for a set of marked basis states, runs it
//! on the local statevector backend, and compares the measured histogram
//! against the exact final-state distribution.

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use skoll_demos::{print_header, print_info, print_result, print_section, print_success};
use skoll_grover::{GroverSearch, Rounds};
use skoll_ir::Circuit;
use skoll_sim::{ExecutionResult, SimulatorBackend};

#[derive(Parser, Debug)]
#[command(name = "demo-grover")]
#[command(about = "Grover's search on the Skoll statevector backend")]
struct Args {
    /// Number of qubits (search space size = 2^n)
    #[arg(short = 'n', long, default_value = "3")]
    qubits: u32,

    /// Marked basis states, comma separated (each 0 to 2^n - 1)
    #[arg(short, long, value_delimiter = ',', default_value = "5")]
    marked: Vec<usize>,

    /// Amplification rounds (omit to use the optimal count)
    #[arg(short, long)]
    rounds: Option<usize>,

    /// Number of measurement shots
    #[arg(short, long, default_value = "1024")]
    shots: u32,

    /// RNG seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Print the measurement counts as JSON
    #[arg(long)]
    json: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Setup logging
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    print_header("Grover's Search on the Statevector Backend");

    let rounds = match args.rounds {
        Some(fixed) => Rounds::Fixed(fixed),
        None => Rounds::Auto,
    };
    let search = GroverSearch::new(args.qubits, args.marked.iter().copied()).with_rounds(rounds);
    let resolved = search.resolved_rounds()?;

    let width = args.qubits as usize;
    let dim = 1usize << args.qubits;

    print_section("Problem Setup");
    print_result("Qubits", args.qubits);
    print_result("Search space size", dim);
    for &index in search.marked() {
        print_result("Marked state", format!("|{index}⟩ = |{index:0width$b}⟩"));
    }
    match rounds {
        Rounds::Auto => print_result("Rounds", format!("{resolved} (optimal)")),
        Rounds::Fixed(_) => print_result("Rounds", format!("{resolved} (fixed)")),
    }

    print_section("Circuit Generation");
    let circuit = search.build()?;
    print_result("Instructions", circuit.num_instructions());
    print_result("Qubits", circuit.num_qubits());
    print_result("Classical bits", circuit.num_clbits());

    let backend = SimulatorBackend::new();

    // Exact distribution before sampling noise.
    let sv = backend.statevector(&circuit)?;
    let predicted: f64 = search.marked().iter().map(|&i| sv.probability(i)).sum();

    if args.qubits <= 5 {
        print_section("Final State");
        println!(
            "  {:>w$}  {:>17}  {:>8}",
            "State",
            "Amplitude",
            "P",
            w = width + 4
        );
        println!("  {}", "─".repeat(width + 33));
        for (index, amplitude) in sv.amplitudes().iter().enumerate() {
            let marker = if search.marked().contains(&index) {
                " ◀ marked"
            } else {
                ""
            };
            println!(
                "  {:>w$}  {:>+8.4} {:>+7.4}i  {:>8.4}{}",
                format!("|{index:0width$b}⟩"),
                amplitude.re,
                amplitude.im,
                sv.probability(index),
                marker,
                w = width + 4,
            );
        }
    }

    print_section("Execution");
    let result = run_backend(&backend, &circuit, args.shots, args.seed)?;
    print_result("Shots", result.shots);
    if let Some(millis) = result.execution_time_ms {
        print_result("Execution time", format!("{millis} ms"));
    }

    let marked_keys: Vec<String> = search
        .marked()
        .iter()
        .map(|&index| format!("{index:0width$b}"))
        .collect();

    print_section("Measured Histogram");
    for (bits, count) in result.counts.sorted() {
        let freq = result.frequency(bits);
        let bar = "█".repeat((freq * 40.0).round() as usize);
        let marker = if marked_keys.iter().any(|key| key == bits) {
            " ◀ marked"
        } else {
            ""
        };
        println!(
            "  |{bits}⟩  {count:>6}  {:>5.1}%  {bar}{marker}",
            freq * 100.0
        );
    }

    print_section("Success Metrics");
    let measured: f64 = marked_keys.iter().map(|key| result.frequency(key)).sum();
    print_result("Predicted P(marked)", format!("{:.1}%", predicted * 100.0));
    print_result("Measured P(marked)", format!("{:.1}%", measured * 100.0));

    println!();
    match result.counts.most_frequent() {
        Some((winner, count)) if marked_keys.iter().any(|key| key == winner) => {
            print_success(&format!(
                "Most frequent outcome |{winner}⟩ ({count} shots) is marked after {resolved} round(s)"
            ));
        }
        Some((winner, count)) => {
            print_info(&format!(
                "Most frequent outcome |{winner}⟩ ({count} shots) is unmarked; adjust the round count"
            ));
        }
        None => {
            print_info("No outcomes recorded");
        }
    }

    if args.json {
        print_section("Counts (JSON)");
        println!("{}", serde_json::to_string_pretty(&result.counts)?);
    }

    println!();
    Ok(())
}

fn run_backend(
    backend: &SimulatorBackend,
    circuit: &Circuit,
    shots: u32,
    seed: Option<u64>,
) -> anyhow::Result<ExecutionResult> {
    let result = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            backend.run_with_rng(circuit, shots, &mut rng)?
        }
        None => backend.run(circuit, shots)?,
    };
    Ok(result)
}
