use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use nhl_cohorts::config::DEFAULT_INPUT;
use nhl_cohorts::data::loader::save_workbook;
use nhl_cohorts::data::model::{CellValue, RawTable};
use nhl_cohorts::data::schema::CANONICAL_COLUMNS;

const FIRST_NAMES: [&str; 12] = [
    "Alex", "Connor", "Sidney", "Nathan", "Leon", "Auston", "Patrick", "Evgeni", "Steven",
    "Mikko", "Jack", "Elias",
];
const LAST_NAMES: [&str; 14] = [
    "Kovac", "Lindqvist", "Marchand", "Okafor", "Petrov", "Reinhart", "Sauve", "Tkachenko",
    "Uhlig", "Virtanen", "Walsh", "Yelle", "Zadina", "Bergeron",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn ratio(num: i64, den: i64) -> CellValue {
    if den == 0 {
        CellValue::Null
    } else {
        CellValue::Float(((num as f64 / den as f64) * 100.0).round() / 100.0)
    }
}

/// One synthetic career line, in canonical column order.
fn player_row(rank: usize, rng: &mut SimpleRng) -> Vec<CellValue> {
    let name = format!(
        "{} {}",
        FIRST_NAMES[rng.below(FIRST_NAMES.len())],
        LAST_NAMES[rng.below(LAST_NAMES.len())]
    );
    let born = 1975 + rng.below(31) as i64;

    // Younger players have had less time to pile up games.
    let career_cap = ((2024 - born - 19).max(1) * 82) as f64;
    let gp = rng.gauss(career_cap * 0.45, career_cap * 0.25).clamp(1.0, career_cap) as i64;
    let gpg = rng.gauss(0.22, 0.12).clamp(0.0, 0.75);
    let apg = rng.gauss(0.35, 0.15).clamp(0.0, 1.1);
    let g = (gp as f64 * gpg) as i64;
    let a = (gp as f64 * apg) as i64;
    let p = g + a;
    let ppg = g / 4;
    let ppa = a / 3;
    let shots = ((g as f64) / rng.gauss(0.1, 0.02).clamp(0.04, 0.2)) as i64;

    // A handful of rows carry the kind of mess a hand-kept sheet has.
    let (name_cell, born_cell) = match rank % 17 {
        3 => (CellValue::Text(format!("{name} ({born})")), CellValue::Integer(born)),
        7 => (CellValue::Text(name), CellValue::Text("N/A".into())),
        _ => (CellValue::Text(name), CellValue::Integer(born)),
    };
    let points_cell = if rank % 23 == 11 {
        CellValue::Text("--".into())
    } else {
        CellValue::Integer(p)
    };

    vec![
        CellValue::Integer(rank as i64),
        name_cell,
        born_cell,
        CellValue::Integer(gp),
        CellValue::Integer(g),
        CellValue::Integer(a),
        points_cell,
        CellValue::Integer(g - ppg),
        CellValue::Integer(ppg),
        CellValue::Integer(g / 8),
        CellValue::Integer(a - ppa),
        CellValue::Integer(ppa),
        CellValue::Integer(p - ppg - ppa),
        CellValue::Integer(ppg + ppa),
        ratio(g, gp),
        ratio(a, gp),
        ratio(p, gp),
        CellValue::Integer(shots),
        ratio(g * 100, shots),
        CellValue::Integer((gp as f64 * rng.gauss(1.2, 0.5).max(0.0)) as i64),
        CellValue::Integer((gp as f64 * rng.gauss(0.5, 0.3).max(0.0)) as i64),
    ]
}

#[derive(Parser)]
#[command(name = "generate_sample")]
#[command(about = "Write a synthetic player-statistics workbook")]
struct Cli {
    /// Output workbook path
    #[arg(default_value = DEFAULT_INPUT)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let output_path = Cli::parse().output;

    let mut rng = SimpleRng::new(42);
    let rows: Vec<Vec<CellValue>> = (1..=400).map(|rank| player_row(rank, &mut rng)).collect();
    let n_rows = rows.len();

    let headers = CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect();
    save_workbook(&output_path, &RawTable::new(headers, rows))?;

    println!(
        "Wrote {n_rows} players ({} columns) to {}",
        CANONICAL_COLUMNS.len(),
        output_path.display()
    );
    Ok(())
}
