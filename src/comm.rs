//! Collective operations for the distributed strategy.
//!
//! Rank 0 holds one TCP stream per worker rank. Two collectives exist, both
//! blocking and group-wide: a broadcast (payload pushed to every worker, then
//! every worker's acknowledgement collected before rank 0 proceeds) and a sum
//! reduction (rank 0 blocks until every worker's count frame has arrived).
//! Frames are a u32 little-endian byte length followed by little-endian u64
//! words.

use std::io::{self, Read, Write};
use std::net::TcpStream;

const ACK: u8 = 1;

fn write_frame(stream: &mut TcpStream, words: &[u64]) -> io::Result<()> {
    let mut data = Vec::with_capacity(4 + words.len() * 8);
    data.extend(&((words.len() * 8) as u32).to_le_bytes());
    for &word in words {
        data.extend(&word.to_le_bytes());
    }
    stream.write_all(&data)
}

fn read_frame(stream: &mut TcpStream) -> io::Result<Vec<u64>> {
    let mut len_buf = [0u8; 4];
    stream.read_exact(&mut len_buf)?;
    let len = u32::from_le_bytes(len_buf) as usize;
    if len % 8 != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "frame length is not a multiple of 8",
        ));
    }

    let mut data = vec![0u8; len];
    stream.read_exact(&mut data)?;

    Ok(data
        .chunks_exact(8)
        .map(|chunk| u64::from_le_bytes(chunk.try_into().unwrap()))
        .collect())
}

/// Rank 0's side of the collectives.
pub struct Coordinator {
    workers: Vec<TcpStream>,
}

impl Coordinator {
    pub fn new(workers: Vec<TcpStream>) -> Self {
        Coordinator { workers }
    }

    /// Push `payload` to every worker, then block until each one has
    /// acknowledged receipt. No rank proceeds past the broadcast before all
    /// ranks hold the data.
    pub fn broadcast(&mut self, payload: &[u64]) -> io::Result<()> {
        for worker in &mut self.workers {
            write_frame(worker, payload)?;
        }
        for worker in &mut self.workers {
            let mut ack = [0u8; 1];
            worker.read_exact(&mut ack)?;
            if ack[0] != ACK {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "unexpected broadcast acknowledgement",
                ));
            }
        }
        Ok(())
    }

    /// Blocking sum reduction: combine `local_count` with one count frame
    /// from every worker. Arrival order does not matter; addition over
    /// disjoint intervals commutes.
    pub fn reduce(&mut self, local_count: u64) -> io::Result<u64> {
        let mut total = local_count;
        for worker in &mut self.workers {
            let frame = read_frame(worker)?;
            match frame.as_slice() {
                [count] => total += count,
                _ => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        "reduction frame must hold exactly one count",
                    ));
                }
            }
        }
        Ok(total)
    }
}

/// A worker rank's side of the collectives.
pub struct Worker {
    stream: TcpStream,
}

impl Worker {
    pub fn connect(addr: &str) -> io::Result<Self> {
        Ok(Worker {
            stream: TcpStream::connect(addr)?,
        })
    }

    /// Block until the broadcast payload arrives, then acknowledge it.
    pub fn recv_broadcast(&mut self) -> io::Result<Vec<u64>> {
        let payload = read_frame(&mut self.stream)?;
        self.stream.write_all(&[ACK])?;
        Ok(payload)
    }

    /// Contribute this rank's local count to the reduction.
    pub fn send_count(&mut self, count: u64) -> io::Result<()> {
        write_frame(&mut self.stream, &[count])
    }
}
