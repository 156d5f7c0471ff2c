use anyhow::{ensure, Context, Result};
use tempo_time::logging::{init_logging, LoggingConfig};
use tempo_time::time::{ElapsedTimer, ManualClock, ManualTimer};

const DEFAULT_TARGET_MS: i64 = 2_000;
const DEFAULT_TICKS: u32 = 12;
const DEFAULT_TICK_MS: i64 = 250;
const MAX_TICKS: u32 = 1_000_000;

/// Run parameters, taken positionally: `tempo-demo [TARGET_MS] [TICKS] [TICK_MS]`.
#[derive(Debug, Copy, Clone)]
struct Settings {
    target_ms: i64,
    ticks: u32,
    tick_ms: i64,
}

impl Settings {
    fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut args = args.into_iter();
        let target_ms = match args.next() {
            Some(s) => s.parse::<i64>().with_context(|| format!("invalid TARGET_MS '{s}'"))?,
            None => DEFAULT_TARGET_MS,
        };
        let ticks = match args.next() {
            Some(s) => s.parse::<u32>().with_context(|| format!("invalid TICKS '{s}'"))?,
            None => DEFAULT_TICKS,
        };
        let tick_ms = match args.next() {
            Some(s) => s.parse::<i64>().with_context(|| format!("invalid TICK_MS '{s}'"))?,
            None => DEFAULT_TICK_MS,
        };
        ensure!(args.next().is_none(), "usage: tempo-demo [TARGET_MS] [TICKS] [TICK_MS]");
        ensure!(ticks <= MAX_TICKS, "TICKS must be at most {MAX_TICKS}, got {ticks}");
        ensure!(tick_ms >= 0, "TICK_MS must not be negative, got {tick_ms}");
        Ok(Self { target_ms, ticks, tick_ms })
    }
}

/// One row of the tick table.
#[derive(Debug, Copy, Clone, PartialEq)]
struct TickReport {
    tick: u32,
    clocked_fired: bool,
    clocked_elapsed: i64,
    clocked_completion: f32,
    manual_fired: bool,
    manual_elapsed: i64,
    manual_completion: f32,
}

/// Drives both computers over simulated time, one tick at a time.
///
/// Each tick's report is handed to `sink` as soon as it is produced. The
/// manual computer's elapsed counter is kept here and restarted from zero
/// whenever it fires.
fn simulate(settings: Settings, mut sink: impl FnMut(TickReport)) -> Result<()> {
    let clock = ManualClock::new(0);
    let mut clocked = ElapsedTimer::with_clock(settings.target_ms, clock.clone())
        .context("failed to create self-clocking timer")?;
    let mut manual =
        ManualTimer::new(settings.target_ms).context("failed to create manual timer")?;

    let mut accumulated = 0_i64;

    for tick in 1..=settings.ticks {
        clock.advance(settings.tick_ms);
        accumulated = accumulated.saturating_add(settings.tick_ms);

        let clocked_fired = clocked.is_time_elapsed();
        let manual_fired = manual.is_time_elapsed(accumulated);
        if clocked_fired {
            log::info!("tick {tick}: self-clocking timer fired after {} ms", clocked.elapsed_time());
        }
        if manual_fired {
            log::info!("tick {tick}: manual timer fired after {accumulated} ms");
            accumulated = 0;
        }

        sink(TickReport {
            tick,
            clocked_fired,
            clocked_elapsed: clocked.elapsed_time(),
            clocked_completion: clocked.completion(),
            manual_fired,
            manual_elapsed: manual.elapsed_time(),
            manual_completion: manual.completion(),
        });
    }

    Ok(())
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let settings = Settings::from_args(std::env::args().skip(1))?;
    log::debug!("running with {settings:?}");

    println!();
    println!("  target {} ms · {} ticks of {} ms", settings.target_ms, settings.ticks, settings.tick_ms);
    println!();
    println!("  tick │ clocked  elapsed  ratio │ manual  elapsed  ratio");
    println!("  ─────┼────────────────────────┼───────────────────────");

    simulate(settings, |r| {
        println!(
            "  {:>4} │ {:<7} {:>8} {:>6.2} │ {:<6} {:>8} {:>6.2}",
            r.tick,
            if r.clocked_fired { "FIRED" } else { "-" },
            r.clocked_elapsed,
            r.clocked_completion,
            if r.manual_fired { "FIRED" } else { "-" },
            r.manual_elapsed,
            r.manual_completion,
        );
    })?;
    println!();

    Ok(())
}
