//! venue: runs the conference seating simulation a few times on one floor
//! plan and prints the final occupancy of each run.
//!
//! ```text
//! venue [CONFIG.json] [KEY=VALUE ...]
//! ```
//!
//! `CONFIG.json` holds any subset of `SimConfig` fields (see `venue.json`);
//! `KEY=VALUE` pairs override it by parameter name, e.g. `BACK_PREF=3.5`.
//! Set `RUST_LOG=info` (or `debug`) to see engine logs.

mod render;

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use seat_core::{ConfigStore, ParamKey, ParamValue, SimConfig, Tick};
use seat_output::{CsvWriter, OutputWriter, SimOutputObserver};
use seat_sim::{RunSummary, Sample, SeatingSim, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const RUNS:           u64 = 3;
const OUTPUT_DIR:     &str = "output/venue";
const PROGRESS_EVERY: u64 = 100;

// ── Observer wrapper: pacing + progress ──────────────────────────────────────

struct PacedObserver<W: OutputWriter> {
    inner: SimOutputObserver<W>,
    pause: Duration,
    rows:  usize,
}

impl<W: OutputWriter> PacedObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, pause: Duration::ZERO, rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for PacedObserver<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, sample: &Sample) {
        self.rows += 1;
        if tick.0 % PROGRESS_EVERY == 0 {
            println!("  T{:<6} seated {:>4}  standing {:>4}", tick.0, sample.seated, sample.standing);
        }
        self.inner.on_tick_end(tick, sample);
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
    }

    fn on_sim_end(&mut self, summary: &RunSummary) {
        self.inner.on_sim_end(summary);
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

/// Base config from an optional JSON file, then `KEY=VALUE` overrides.
fn load_store(args: &[String]) -> Result<ConfigStore> {
    let mut overrides = args;
    let base = match args.first() {
        Some(path) if path.ends_with(".json") => {
            overrides = &args[1..];
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str::<SimConfig>(&text).with_context(|| format!("parsing {path}"))?
        }
        _ => SimConfig::default(),
    };

    let mut store = ConfigStore::new(base);
    store.subscribe(|change| {
        info!(key = %change.key, old = %change.old, new = %change.new, "parameter changed");
        Ok(())
    });

    for arg in overrides {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("expected KEY=VALUE, got {arg:?}");
        };
        if !store.set_str(key, value).with_context(|| format!("override {arg}"))? {
            let kept = store.get(key.parse()?);
            warn!(key, value, %kept, "override rejected, keeping previous value");
        }
    }
    Ok(store)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut store = load_store(&args)?;
    let config = store.config().clone().validated().context("invalid configuration")?;
    let base_seed = config.seed;

    println!("=== venue: conference seating simulation ===");
    println!(
        "Grid: {} × {}  |  Blocks: {}  |  Agents: {}  |  Max ticks: {}  |  Runs: {RUNS}",
        config.rows, config.cols, config.num_blocks, config.num_agents, config.max_time
    );
    println!(
        "Prefs: back {:.2}  aisle {:.2}  social {:.2}  row fill {:.2}  assigned seats {}",
        config.back_pref, config.aisle_pref, config.social_distance, config.row_fill_limit, config.assigned_seats
    );
    println!();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = PacedObserver::new(SimOutputObserver::new(writer));
    let mut sim = SeatingSim::new();

    for run in 0..RUNS {
        let seed = i64::try_from(base_seed.saturating_add(run)).context("seed overflow")?;
        store.set(ParamKey::Seed, ParamValue::Int(seed));
        obs.pause = Duration::from_millis(store.config().speed_ms);

        println!("── run {run} (seed {seed}) ──");
        sim.initialize(store.config())?;
        let t0 = Instant::now();
        let summary = sim.run(&mut obs)?;
        let elapsed = t0.elapsed();

        if let Some(err) = sim.take_error() {
            eprintln!("run {run} faulted: {err}");
        }
        println!(
            "Completed at {} in {:.3} s: {} spawned, {} seated, {} standing ({:.1}% seated, {:.3} seated/tick)",
            summary.final_tick,
            elapsed.as_secs_f64(),
            summary.spawned,
            summary.seated,
            summary.standing,
            summary.seated_pct,
            summary.seating_speed,
        );
        if let Some(grid) = sim.grid() {
            print!("{}", render::grid(grid));
        }
        print!("{}", render::chart(sim.samples()));
        println!();
    }

    if let Some(err) = obs.inner.take_error() {
        eprintln!("output error: {err}");
    }

    println!("Run history (newest first)");
    print!("{}", render::history(sim.history()));
    println!();
    println!("Wrote {} sample rows to {OUTPUT_DIR}/", obs.rows);
    Ok(())
}
