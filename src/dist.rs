use std::env;
use std::io;
use std::net::TcpListener;
use std::process::{Child, Command};

use crate::base::base_primes;
use crate::comm::{Coordinator, Worker};
use crate::partition::static_interval;
use crate::segment::SegmentSieve;

/// Distributed strategy, rank 0 side.
///
/// Rank 0 computes the base primes, spawns ranks 1..world as processes of the
/// current executable, broadcasts `[n, base primes...]`, sieves its own static
/// interval, and reduces every rank's local count. The two collectives are the
/// only synchronization points; a rank that never reaches one stalls the whole
/// run (no timeout, no recovery).
pub fn count_primes(n: u64, world: u64) -> io::Result<u64> {
    let base = base_primes(n);

    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?.to_string();
    let mut children = spawn_workers(world, &addr)?;

    let mut streams = Vec::with_capacity(children.len());
    for _ in 0..children.len() {
        let (stream, _) = listener.accept()?;
        streams.push(stream);
    }
    let mut group = Coordinator::new(streams);

    let mut payload = Vec::with_capacity(base.len() + 1);
    payload.push(n);
    payload.extend_from_slice(&base);
    group.broadcast(&payload)?;

    let (low, high) = static_interval(n, world, 0);
    let mut sieve = SegmentSieve::new();
    let local_count = sieve.count_range(low, high, &base);

    let total = group.reduce(local_count)?;

    for child in &mut children {
        child.wait()?;
    }

    Ok(total + base.len() as u64)
}

fn spawn_workers(world: u64, addr: &str) -> io::Result<Vec<Child>> {
    let exe = env::current_exe()?;
    let mut children = Vec::new();
    for rank in 1..world {
        let child = Command::new(&exe)
            .arg("worker")
            .arg(rank.to_string())
            .arg(world.to_string())
            .arg(addr)
            .spawn()?;
        children.push(child);
    }
    Ok(children)
}

/// Worker rank entry point: no computation happens before the broadcast has
/// delivered n and the base primes. The rank derives its own interval from
/// (rank, world), sieves it once, and contributes one count to the reduction.
/// Workers produce no output.
pub fn run_worker(rank: u64, world: u64, addr: &str) -> io::Result<()> {
    let mut worker = Worker::connect(addr)?;

    let payload = worker.recv_broadcast()?;
    let (&n, base) = payload
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "empty broadcast payload"))?;

    let (low, high) = static_interval(n, world, rank);
    let mut sieve = SegmentSieve::new();
    let local_count = sieve.count_range(low, high, base);

    worker.send_count(local_count)
}

/// Process count supplied by the execution environment, not the CLI.
pub fn num_procs_from_env() -> u64 {
    env::var("PSIEVE_NUM_PROCS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&w| w > 0)
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get() as u64)
                .unwrap_or(4)
        })
}
