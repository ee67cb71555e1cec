mod base;
mod bench;
mod comm;
mod dist;
mod partition;
mod runlog;
mod segment;
mod sequential;
mod threads;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use partition::DEFAULT_SEGMENT_LEN;

#[derive(Parser)]
#[command(name = "psieve")]
#[command(about = "Segmented prime-counting sieve - sequential, threaded, and distributed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Count primes up to n with the sequential segmented sieve")]
    Sequential {
        #[arg(help = "Inclusive upper bound to count primes up to")]
        n: u64,
    },
    #[command(about = "Count primes up to n with a shared-memory thread pool")]
    Threads {
        #[arg(help = "Inclusive upper bound to count primes up to")]
        n: u64,
    },
    #[command(about = "Count primes up to n with a thread pool and an explicit segment length")]
    Segmented {
        #[arg(help = "Inclusive upper bound to count primes up to")]
        n: u64,
        #[arg(
            help = "Segment length in numbers",
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        segment_len: u64,
    },
    #[command(about = "Count primes up to n across a group of rank processes")]
    Distributed {
        #[arg(help = "Inclusive upper bound to count primes up to")]
        n: u64,
    },
    // Internal entry point for spawned rank processes.
    #[command(hide = true)]
    Worker {
        rank: u64,
        world: u64,
        addr: String,
    },
    #[command(about = "Sweep bounds and worker counts, writing CSV result files")]
    Bench {
        #[arg(long, default_value = "8", help = "Highest thread/process count to sweep")]
        max_workers: usize,
        #[arg(long, default_value = ".", help = "Directory for the CSV result files")]
        out_dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sequential { n } => {
            let start = Instant::now();
            let count = sequential::count_primes(n, DEFAULT_SEGMENT_LEN);
            report("sequential", n, 1, count, start);
        }
        Commands::Threads { n } => {
            let num_threads = threads::num_threads_from_env();
            let start = Instant::now();
            let count = threads::count_primes(n, DEFAULT_SEGMENT_LEN, num_threads);
            report("threads", n, num_threads, count, start);
        }
        Commands::Segmented { n, segment_len } => {
            let num_threads = threads::num_threads_from_env();
            let start = Instant::now();
            let count = threads::count_primes(n, segment_len, num_threads);
            report("segmented", n, num_threads, count, start);
        }
        Commands::Distributed { n } => {
            let world = dist::num_procs_from_env();
            let start = Instant::now();
            match dist::count_primes(n, world) {
                Ok(count) => report("distributed", n, world as usize, count, start),
                Err(e) => {
                    eprintln!("Distributed run failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Worker { rank, world, addr } => {
            // Rank processes print nothing on success; the coordinator reports.
            if let Err(e) = dist::run_worker(rank, world, &addr) {
                eprintln!("Worker rank {} failed: {}", rank, e);
                std::process::exit(1);
            }
        }
        Commands::Bench { max_workers, out_dir } => {
            if let Err(e) = bench::run(max_workers, &out_dir) {
                eprintln!("Benchmark sweep failed: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn report(strategy: &str, n: u64, workers: usize, count: u64, start: Instant) {
    let elapsed_secs = start.elapsed().as_secs_f64();

    println!("Total primes up to {}: {}", n, count);
    println!("Execution Time: {:.6} seconds", elapsed_secs);

    if let Err(e) = runlog::log_execution(strategy, n, workers, elapsed_secs) {
        eprintln!("Warning: Failed to log execution: {}", e);
    }
}
