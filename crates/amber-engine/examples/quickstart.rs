//! Amber Quickstart: build the tutorial corridor, inspect its dynamics,
//! and run a few episodes.
//!
//! Demonstrates:
//!   1. Building and validating a DomainConfig
//!   2. Enumerating exact successor distributions (planning view)
//!   3. Stepping a seeded SimulatedEnvironment (learning view)
//!   4. Evaluating a fixed policy over many rollouts
//!
//! Run with:
//!   RUST_LOG=amber_engine=debug cargo run --example quickstart

use std::sync::Arc;

use amber_core::{Action, LightPhase, State};
use amber_engine::{evaluate_policy, Domain, DomainConfig, SimulatedEnvironment};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

const SEED: u64 = 42;
const MAX_STEPS: usize = 200;
const GAMMA: f64 = 0.99;
const TRIALS: usize = 500;

/// Drive forward, but wait one cell short of the light while it is red.
fn wait_on_red(state: &State) -> Action {
    if state.position() == 5 && state.light_phase() == LightPhase::Red {
        Action::Stop
    } else {
        Action::Forward
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // ─── Domain ─────────────────────────────────────────────────

    let domain = Arc::new(Domain::new(DomainConfig::tutorial())?);
    let start = State::new(0, LightPhase::Green);
    println!(
        "corridor of {} cells, {} reachable states",
        domain.corridor_length(),
        domain.reachable_states(start)?.len()
    );

    // ─── Planning view ──────────────────────────────────────────

    let approach = State::new(5, LightPhase::Yellow);
    println!("\nsuccessors of ({approach}) under FORWARD:");
    for outcome in domain.enumerate(approach, Action::Forward) {
        println!(
            "  p={:.2}  ({})  reward {}",
            outcome.probability,
            outcome.state,
            domain.reward(Action::Forward, outcome.state)
        );
    }

    // ─── Learning view ──────────────────────────────────────────

    let mut env = SimulatedEnvironment::new(Arc::clone(&domain), start, SEED)?;
    let mut policy = wait_on_red;
    let episode = env.run_episode(&mut policy, MAX_STEPS);
    println!("\nepisode from ({start}):");
    for step in episode.steps() {
        println!(
            "  {:>7} -> ({})  reward {}{}",
            step.action,
            step.next_state,
            step.reward,
            if step.done { "  [goal]" } else { "" }
        );
    }
    println!("  total reward {}", episode.total_reward());

    // ─── Evaluation ─────────────────────────────────────────────

    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let mut always_forward = |_: &State| Action::Forward;
    let forward = evaluate_policy(
        &domain,
        &mut always_forward,
        start,
        TRIALS,
        GAMMA,
        MAX_STEPS,
        &mut rng,
    )?;
    let cautious = evaluate_policy(&domain, &mut policy, start, TRIALS, GAMMA, MAX_STEPS, &mut rng)?;
    println!("\nover {} rollouts (gamma {GAMMA}):", forward.trials);
    println!(
        "  always forward: mean {:.2}, worst {:.2}",
        forward.mean_return, forward.worst_return
    );
    println!(
        "  wait on red:    mean {:.2}, worst {:.2}",
        cautious.mean_return, cautious.worst_return
    );

    Ok(())
}
