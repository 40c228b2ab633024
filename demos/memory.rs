//! Delayed-recall example.
//!
//! Evolves herds of recurrent networks that must remember a cue across a few
//! silent steps, once with dense connectivity and once with a blocked layout
//! that forbids feedback into the sensor.
//!
//! Run with: `RUST_LOG=debug cargo run --example memory`

use log::info;
use neuroherd::{Herd, HerdConfig, Init, MemoryTask};

const GENERATIONS: usize = 40;
const DELAY: usize = 3;

fn run(label: &str, config: HerdConfig) -> Result<Vec<f32>, neuroherd::ConfigError> {
    let mut herd = Herd::new(config, MemoryTask::new(DELAY, 7))?;
    let means = herd.evolve_parallel(GENERATIONS);

    info!(
        "{}: first mean {:.3}, last mean {:.3}",
        label,
        means.first().copied().unwrap_or_default(),
        means.last().copied().unwrap_or_default()
    );
    if let Some(champion) = herd.champion() {
        info!("{} champion:\n{}", label, champion);
    }
    Ok(means)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let base = HerdConfig {
        population_size: 30,
        mutation_rate: 0.02,
        trials_per_eval: 5,
        seed: Some(2020),
        ..HerdConfig::new(1, 1, 4)
    };

    let dense = run("dense", base.clone())?;

    // Groups: sensor, two hidden groups of 2, actor.
    // Sensor feeds the first hidden group, which feeds itself and the second,
    // which feeds the actor. Nothing flows back into the sensor.
    let blocked = HerdConfig {
        init: Init::Blocked {
            slices: vec![2, 2],
            regions: vec![
                vec![false, false, false, false],
                vec![true, true, false, false],
                vec![false, true, true, false],
                vec![false, false, true, false],
            ],
        },
        ..base
    };
    let layered = run("blocked", blocked)?;

    println!("generation  dense   blocked");
    for (generation, (d, b)) in dense.iter().zip(&layered).enumerate() {
        println!("{generation:>10}  {d:>6.3}  {b:>7.3}");
    }

    Ok(())
}
