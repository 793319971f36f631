//! Text rendering: the venue grid and an occupancy chart.

use std::fmt::Write;

use seat_core::{CellType, Grid};
use seat_sim::{RunHistory, Sample};

const CHART_WIDTH: usize = 60;
const CHART_HEIGHT: usize = 10;

/// The grid with a one-line legend underneath.
pub fn grid(grid: &Grid) -> String {
    let mut out = grid.to_string();
    let legend: Vec<String> = [
        CellType::Seat,
        CellType::Corridor,
        CellType::Gate,
        CellType::SeatedAgent,
        CellType::Standing,
    ]
    .iter()
    .map(|ty| format!("'{}' {}", ty.glyph(), ty))
    .collect();
    out.push_str(&legend.join("  "));
    out.push('\n');
    out
}

/// Seated (`#`) and standing (`s`) counts over time, scaled to
/// `CHART_WIDTH × CHART_HEIGHT`.  Where both would share a cell the seated
/// mark wins.
pub fn chart(samples: &[Sample]) -> String {
    let Some(last) = samples.last() else {
        return String::from("(no samples)\n");
    };
    let peak = samples.iter().map(|s| s.seated.max(s.standing)).max().unwrap_or(0).max(1);
    let columns = CHART_WIDTH.min(samples.len());

    let mut canvas = vec![vec![' '; columns]; CHART_HEIGHT];
    for (x, column) in (0..columns).map(|x| (x, x * samples.len() / columns)) {
        let s = &samples[column];
        for (value, mark) in [(s.standing, 's'), (s.seated, '#')] {
            if value == 0 {
                continue;
            }
            let y = (value * (CHART_HEIGHT - 1)) / peak;
            canvas[CHART_HEIGHT - 1 - y][x] = mark;
        }
    }

    let mut out = String::new();
    for (i, row) in canvas.iter().enumerate() {
        let label = if i == 0 { peak.to_string() } else if i == CHART_HEIGHT - 1 { "0".into() } else { String::new() };
        let line: String = row.iter().collect();
        let _ = writeln!(out, "{label:>5} |{line}");
    }
    let _ = writeln!(out, "      +{}", "-".repeat(columns));
    let _ = writeln!(out, "       ticks 1..={}", last.tick.0);
    out
}

/// One line per completed run, newest first.
pub fn history(history: &RunHistory) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:>6} {:>8} {:>7} {:>9} {:>8} {:>8}",
        "run", "ticks", "spawned", "seated", "standing", "seated%", "speed"
    );
    let _ = writeln!(out, "{}", "-".repeat(60));
    for (age, run) in history.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<6} {:>6} {:>8} {:>7} {:>9} {:>7.1}% {:>8.3}{}",
            format!("-{age}"),
            run.final_tick.0,
            run.spawned,
            run.seated,
            run.standing,
            run.seated_pct,
            run.seating_speed,
            if run.faulted { "  FAULT" } else { "" },
        );
    }
    out
}
