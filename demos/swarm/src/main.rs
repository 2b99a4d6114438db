//! swarm: a two-group swarm of automaton-driven robots in a synthetic arena.
//!
//! Group 0 explores and stops on the black patch, resuming after a while.
//! Group 1 glows red, follows the light, and clusters once it has company.
//!
//! Usage: `swarm [config.json]`.  The JSON holds a `ControllerConfig`
//! (`{"fsm_config": "...", "seed": 7}`); without one a built-in descriptor is
//! assembled.  Set `RUST_LOG=debug` to see every decoded state and transition.

mod arena;

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use am_behavior::{BehaviourKind, ConditionKind, Parameters};
use am_controller::{Controller, ControllerConfig};
use am_core::{LedColor, RobotId, StateIndex};
use am_descriptor::{GroupLayout, tokenize};
use am_fsm::{AutomatonSpec, StateSpec, encode_descriptor};

use arena::{Arena, ArenaActuators};

// ── Constants ─────────────────────────────────────────────────────────────────

const EXPLORERS: u32 = 5;
const FOLLOWERS: u32 = 3;
const SEED:      u64 = 42;
const STEPS:     u64 = 1_200; // 2 minutes at 10 Hz
const DT:        f64 = 0.1;   // seconds per control step

// ── Built-in descriptor ───────────────────────────────────────────────────────

fn explorer() -> AutomatonSpec {
    AutomatonSpec::new(vec![
        StateSpec::new(BehaviourKind::Exploration, Parameters::from([("rwm", 20.0)]))
            .to(StateIndex(1), ConditionKind::BlackFloor, Parameters::from([("p", 0.9)])),
        StateSpec::new(BehaviourKind::Stop, Parameters::from([("cle", LedColor::Blue.as_parameter())]))
            .to(StateIndex(0), ConditionKind::FixedProbability, Parameters::from([("p", 0.01)])),
    ])
}

fn follower() -> AutomatonSpec {
    let red = LedColor::Red.as_parameter();
    AutomatonSpec::new(vec![
        StateSpec::new(BehaviourKind::Phototaxis, Parameters::from([("cle", red)]))
            .to(StateIndex(1), ConditionKind::NeighborsCount, Parameters::from([("p", 2.0), ("w", 4.0)])),
        StateSpec::new(BehaviourKind::Attraction, Parameters::from([("att", 4.0), ("cle", red)]))
            .to(StateIndex(0), ConditionKind::InvertedNeighborsCount, Parameters::from([("p", 1.0), ("w", 4.0)])),
    ])
}

fn load_config() -> Result<ControllerConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
        }
        None => {
            let descriptor = encode_descriptor(&[(EXPLORERS, explorer()), (FOLLOWERS, follower())])?;
            Ok(ControllerConfig::new(descriptor, SEED))
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // 1. Configuration.
    let config = load_config()?;
    config.validate()?;
    let layout = GroupLayout::from_tokens(&tokenize(&config.fsm_config))?;
    info!(groups = layout.group_count(), robots = layout.population(), seed = config.seed, "configuration loaded");
    println!("Descriptor: {}", config.fsm_config);
    println!();

    // 2. One controller per robot, addressed by platform name.
    let population = usize::try_from(layout.population())?;
    let mut controllers = (0..population)
        .map(|i| Controller::init(&config, RobotId::from_name(&format!("epuck{i}"))?))
        .collect::<Result<Vec<_>, _>>()?;

    // 3. Arena, with every robot announcing its id.
    let mut arena = Arena::new(population);
    for (i, controller) in controllers.iter().enumerate() {
        let mut actuators = ArenaActuators::default();
        controller.announce(&mut actuators);
        arena.actuate(i, actuators);
    }

    // 4. Run.
    let t0 = Instant::now();
    let mut transitions = vec![0u64; population];
    for _ in 0..STEPS {
        for (i, controller) in controllers.iter_mut().enumerate() {
            let before = controller.active_state();
            let mut sensors = arena.sense(i);
            let mut actuators = ArenaActuators::default();
            controller.control_step(&mut sensors, &mut actuators);
            arena.actuate(i, actuators);
            if controller.active_state() != before {
                transitions[i] += 1;
            }
        }
        arena.advance(DT);
    }
    info!(steps = STEPS, elapsed_ms = t0.elapsed().as_millis() as u64, "run complete");

    // 5. Summary.
    println!("{:<8} {:<6} {:<16} {:<8} {:<12} {:<8} {:>6}", "Robot", "Group", "Behaviour", "LED", "Position", "Patch", "Trans");
    println!("{}", "-".repeat(70));
    for (i, controller) in controllers.iter().enumerate() {
        let body = &arena.bodies[i];
        let kind = controller.fsm().active_behaviour().kind();
        println!(
            "{:<8} {:<6} {:<16} {:<8} {:<12} {:<8} {:>6}",
            controller.robot().0,
            controller.group().0,
            kind.as_str(),
            body.led.as_str(),
            format!("({:.0},{:.0})", body.position.x, body.position.y),
            if arena.on_patch(i) { "yes" } else { "no" },
            transitions[i],
        );
    }

    Ok(())
}
