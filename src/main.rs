/*!
 * bsched - Batch Scheduler Console
 *
 * Console collaborator for the batch scheduler core:
 * - Reads the process count and per-process attributes
 * - Dispatches menu choices to policy applications
 * - Prints the resulting process order
 */

use anyhow::{bail, Context, Result};
use batch_sched::{Policy, ProcessRecord, Session, SessionStats};
use log::info;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

#[derive(Serialize)]
struct SnapshotExport<'a> {
    processes: &'a [ProcessRecord],
    stats: SessionStats,
}

fn prompt<R, T>(input: &mut R, label: &str) -> Result<T>
where
    R: BufRead,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }
    let value = line.trim();
    value
        .parse()
        .with_context(|| format!("invalid input {value:?}"))
}

fn display(records: &[ProcessRecord]) {
    let rule = "=".repeat(40);
    println!("\n{rule}");
    println!("     ORDER OF PROCESSES");
    println!("{rule}");
    for (rank, record) in records.iter().enumerate() {
        println!(
            "{}. {:<20} | ID: {} | Priority: {} | Burst: {} ms",
            rank + 1,
            record.name,
            record.pid,
            record.priority,
            record.burst_ms
        );
    }
    println!("{rule}\n");
}

fn read_processes<R: BufRead>(input: &mut R) -> Result<Session> {
    let n: usize = prompt(input, "Enter number of processes: ")?;
    let mut session = Session::new(n)?;

    println!("\nEnter details for {n} processes:\n");
    for i in 1..=n {
        println!("Process {i}:");
        let name: String = prompt(input, "  Name             : ")?;
        let size_kb: u64 = prompt(input, "  Size (KB)        : ")?;
        let burst_ms: u64 = prompt(input, "  Burst time (ms)  : ")?;
        let priority: i32 = prompt(input, &format!("  Priority (1-{n})  : "))?;
        println!("----------------------------------------");

        session.insert(name, size_kb, burst_ms, priority)?;
    }

    Ok(session)
}

fn run_menu<R: BufRead>(input: &mut R, session: &mut Session) -> Result<()> {
    loop {
        println!("\nCPU SCHEDULING MENU");
        println!("1. Priority Scheduling");
        println!("2. Shortest Job First (SJF)");
        println!("3. First Come First Serve (FCFS)");
        println!("4. Export snapshot (JSON)");
        println!("5. Exit");

        let choice: u32 = prompt(input, "Enter choice: ")?;
        match choice {
            1 => {
                session.apply(Policy::Priority);
                println!("\nAfter PRIORITY scheduling:");
                display(session.snapshot());
            }
            2 => {
                session.apply(Policy::ShortestJob);
                println!("\nAfter SJF scheduling:");
                display(session.snapshot());
            }
            3 => {
                session.apply(Policy::FirstCome);
                println!("\nAfter FCFS scheduling:");
                display(session.snapshot());
            }
            4 => {
                let export = SnapshotExport {
                    processes: session.snapshot(),
                    stats: session.stats(),
                };
                println!("{}", serde_json::to_string_pretty(&export)?);
            }
            5 => {
                println!("Exiting...");
                return Ok(());
            }
            _ => println!("Invalid choice! Please try again."),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    info!("bsched starting");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let mut session = read_processes(&mut input)?;
    display(session.snapshot());

    run_menu(&mut input, &mut session)
}
