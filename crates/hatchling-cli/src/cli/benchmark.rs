//! Benchmark command implementation.
//!
//! Times the clipper and the line fill on a random star polygon, so runs
//! with the same seed are comparable across builds.

use std::f64::consts::TAU;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Args;
use hatchling::{DEFAULT_EPS, FillOptions, Point, Polygon, Segment, clip_lines_to_polygon, generate_line_fill};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Args, Debug)]
pub struct BenchmarkArgs {
    /// Polygon vertex count
    #[arg(long, default_value_t = 64)]
    pub vertices: usize,

    /// Number of random lines to clip
    #[arg(long, default_value_t = 10_000)]
    pub lines: usize,

    /// Fill line spacing
    #[arg(long, default_value_t = 1.0)]
    pub spacing: f64,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// A star-shaped polygon with radii in [50, 100).
pub fn random_star(rng: &mut impl Rng, vertices: usize) -> Polygon {
    let outer = (0..vertices)
        .map(|i| {
            let a = TAU * i as f64 / vertices as f64;
            let r = rng.random_range(50.0..100.0);
            Point::new(r * a.cos(), r * a.sin())
        })
        .collect();
    Polygon::new(outer)
}

/// Lines with endpoints scattered over a box a little larger than the star.
pub fn random_lines(rng: &mut impl Rng, count: usize) -> Vec<Segment> {
    (0..count)
        .map(|_| {
            Segment::from_coords(
                rng.random_range(-120.0..120.0),
                rng.random_range(-120.0..120.0),
                rng.random_range(-120.0..120.0),
                rng.random_range(-120.0..120.0),
            )
        })
        .collect()
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Execute the benchmark command.
pub fn run(args: BenchmarkArgs) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let polygon = random_star(&mut rng, args.vertices.max(3));
    let lines = random_lines(&mut rng, args.lines);
    tracing::info!(vertices = polygon.outer.len(), lines = lines.len(), seed = args.seed, "benchmark input");

    let start = Instant::now();
    let clipped = clip_lines_to_polygon(&lines, &polygon, DEFAULT_EPS);
    let clip_time = start.elapsed();

    let start = Instant::now();
    let filled = generate_line_fill(&polygon, args.spacing, 45.0, &FillOptions::default())?;
    let fill_time = start.elapsed();

    println!();
    println!("═══════════════════════════════════════════════");
    println!("  HATCHLING BENCHMARK");
    println!("═══════════════════════════════════════════════");
    println!("  Polygon vertices: {}", polygon.outer.len());
    println!("  Clip: {} lines -> {} segments", lines.len(), clipped.len());
    println!("  Clip time (ms): {:.2}", ms(clip_time));
    if !lines.is_empty() {
        println!("  Avg per line: {:.3}µs", ms(clip_time) * 1000.0 / lines.len() as f64);
    }
    println!("  Fill: spacing {} -> {} segments", args.spacing, filled.len());
    println!("  Fill time (ms): {:.2}", ms(fill_time));
    println!("═══════════════════════════════════════════════");

    Ok(())
}
