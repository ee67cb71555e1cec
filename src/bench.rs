//! Benchmark sweep: repeatedly invoke the built binary across a matrix of
//! bounds and worker counts, wall-time each run, and append rows to headed
//! CSV result files. The measured child prints its own count and elapsed
//! time; here we only care that it exits cleanly and how long it took.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

const N_VALUES: &[u64] = &[
    10, 100, 1000, 10_000, 100_000, 1_000_000, 10_000_000,
];

pub fn run(max_workers: usize, out_dir: &Path) -> io::Result<()> {
    let exe = std::env::current_exe()?;

    let mut seq_file = BufWriter::new(File::create(out_dir.join("results_sequential.csv"))?);
    let mut threads_file = BufWriter::new(File::create(out_dir.join("results_threads.csv"))?);
    let mut dist_file = BufWriter::new(File::create(out_dir.join("results_distributed.csv"))?);

    writeln!(seq_file, "n,Execution_Time")?;
    writeln!(threads_file, "n,num_threads,Execution_Time")?;
    writeln!(dist_file, "n,num_processes,Execution_Time")?;

    for &n in N_VALUES {
        println!("Running strategies for n = {}", n);

        let seq_time = time_run(Command::new(&exe).arg("sequential").arg(n.to_string()))?;
        println!("Sequential time: {} seconds", seq_time);
        writeln!(seq_file, "{},{}", n, seq_time)?;

        for workers in 1..=max_workers {
            let threads_time = time_run(
                Command::new(&exe)
                    .arg("threads")
                    .arg(n.to_string())
                    .env("PSIEVE_NUM_THREADS", workers.to_string()),
            )?;
            println!("Threads time ({} threads): {} seconds", workers, threads_time);
            writeln!(threads_file, "{},{},{}", n, workers, threads_time)?;

            let dist_time = time_run(
                Command::new(&exe)
                    .arg("distributed")
                    .arg(n.to_string())
                    .env("PSIEVE_NUM_PROCS", workers.to_string()),
            )?;
            println!("Distributed time ({} processes): {} seconds", workers, dist_time);
            writeln!(dist_file, "{},{},{}", n, workers, dist_time)?;
        }
    }

    seq_file.flush()?;
    threads_file.flush()?;
    dist_file.flush()?;

    println!(
        "Results stored in {}",
        out_dir.join("results_*.csv").display()
    );

    Ok(())
}

fn time_run(command: &mut Command) -> io::Result<f64> {
    let start = Instant::now();
    let status = command.stdout(Stdio::null()).status()?;
    let elapsed = start.elapsed().as_secs_f64();

    if !status.success() {
        eprintln!("Warning: benchmarked run exited with {}", status);
    }

    Ok(elapsed)
}
