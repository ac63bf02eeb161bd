//! lobby — a ten-floor office lobby bank driven by random hall calls.
//!
//! Usage: `lobby [config.json] [calls.csv]`
//!
//! Phase 1 runs random traffic.  The bank is then reset and phase 2 replays
//! a scripted morning rush (the embedded schedule below, or `calls.csv`).
//! Set `RUST_LOG=lift_sim=debug` to see every controller event.

use std::io::Cursor;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use lift_core::BankConfig;
use lift_output::{BankOutputObserver, CsvWriter};
use lift_schedule::{RandomTraffic, ScriptedTraffic, load_calls_csv, load_calls_reader};
use lift_sim::{BankBuilder, RunSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:           u64 = 42;
const TICK_MS:        u64 = 1_000;
const RANDOM_MINUTES: u64 = 30;
const RUSH_MINUTES:   u64 = 10;
const LOG_TAIL:       usize = 12;

// ── Schedule CSV ──────────────────────────────────────────────────────────────

// Morning rush: everyone enters at the lobby, a few go down for coffee.
const MORNING_CALLS_CSV: &str = "\
at_ms,floor,direction\n\
0,1,up\n\
4000,1,up\n\
9000,1,up\n\
12000,6,down\n\
20000,1,up\n\
31000,3,up\n\
45000,9,down\n\
46000,1,up\n\
60000,4,down\n\
75000,1,up\n\
";

fn print_summary(label: &str, summary: &RunSummary) {
    println!(
        "{label}: {} ticks, {} calls ({} accepted, {} deduplicated, {} rejected)",
        summary.ticks, summary.calls, summary.accepted, summary.deduplicated, summary.rejected
    );
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    // 1. Bank configuration.
    let config = match args.get(1) {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {path}"))?;
            serde_json::from_str::<BankConfig>(&text)
                .with_context(|| format!("parsing config {path}"))?
        }
        None => BankConfig::default(),
    };

    println!("=== lobby — rust_lift elevator bank ===");
    println!(
        "Cars: {}  |  Floors: {}  |  Loading: {} ms  |  Travel: {} ms  |  Seed: {SEED}",
        config.car_count, config.total_floors, config.loading_latency_ms, config.travel_latency_ms
    );
    println!();

    // 2. Output.
    let writer = CsvWriter::new(Path::new("output/lobby"))?;

    // 3. Build the bank.
    let total_floors = config.total_floors;
    let mut bank = BankBuilder::new(config)
        .observer(BankOutputObserver::new(writer))
        .build()?;
    let tick = Duration::from_millis(TICK_MS);

    // 4. Phase 1: random traffic.
    let t0 = Instant::now();
    let mut traffic = RandomTraffic::new(SEED, total_floors);
    bank.note("Random traffic started");
    let summary = bank.run_with_traffic(Duration::from_secs(RANDOM_MINUTES * 60), tick, &mut traffic)?;
    print_summary("Random traffic", &summary);

    // 5. Phase 2: reset and replay the morning rush.
    bank.reset();
    let calls = match args.get(2) {
        Some(path) => load_calls_csv(Path::new(path))?,
        None => load_calls_reader(Cursor::new(MORNING_CALLS_CSV))?,
    };
    println!("Loaded {} scripted calls", calls.len());
    let mut rush = ScriptedTraffic::new(calls);
    let summary = bank.run_with_traffic(Duration::from_secs(RUSH_MINUTES * 60), tick, &mut rush)?;
    print_summary("Morning rush", &summary);
    let elapsed = t0.elapsed();

    println!("Simulated {} in {:.3} s", bank.clock(), elapsed.as_secs_f64());
    println!();

    // 6. Final car table.
    let state = bank.state();
    println!("{:<6} {:<6} {:<6} {:<8} {:<16}", "Car", "Floor", "Dir", "Motion", "Queue");
    println!("{}", "-".repeat(44));
    for car in &state.cars {
        let queue = car
            .destinations
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!(
            "{:<6} {:<6} {:<6} {:<8} {:<16}",
            car.id, car.current_floor, car.direction, car.motion, queue
        );
    }
    println!("Pending requests: {}", state.pending_requests.len());
    println!();

    // 7. Log tail.
    let skip = state.recent_log.len().saturating_sub(LOG_TAIL);
    for entry in &state.recent_log[skip..] {
        println!("{entry}");
    }

    // 8. Flush output.
    let mut obs = bank.into_observer();
    obs.finish();
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    println!();
    println!("Trace written to output/lobby/");

    Ok(())
}
