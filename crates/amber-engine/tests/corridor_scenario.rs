//! Integration test: the tutorial corridor driven step by step.
//!
//! Forces the light with scripted draws and checks positions, rewards and
//! termination along the way to the goal.

use std::sync::Arc;

use amber_core::{Action, LightPhase, State};
use amber_engine::{Domain, DomainConfig, SimulatedEnvironment};
use amber_test_utils::ScriptedRng;

// Above every tutorial advance probability, so the light always holds.
const HOLD: f64 = 0.99;

fn tutorial_domain() -> Arc<Domain> {
    Arc::new(Domain::new(DomainConfig::tutorial()).unwrap())
}

fn holding_env(start: State) -> SimulatedEnvironment<ScriptedRng> {
    SimulatedEnvironment::with_rng(tutorial_domain(), start, ScriptedRng::always(HOLD)).unwrap()
}

#[test]
fn six_forwards_on_green_reach_the_light() {
    let mut env = holding_env(State::new(0, LightPhase::Green));

    for expected in 1..=6 {
        let r = env.step(Action::Forward);
        assert_eq!(r.next_state, State::new(expected, LightPhase::Green));
        assert_eq!(r.reward, -1.0);
        assert!(!r.done);
    }
    assert_eq!(env.current().position(), 6);
}

#[test]
fn leaving_the_light_on_red_is_not_penalized() {
    let mut env = holding_env(State::new(0, LightPhase::Green));
    env.reset(State::new(6, LightPhase::Red)).unwrap();

    let r = env.step(Action::Forward);
    assert_eq!(r.next_state, State::new(7, LightPhase::Red));
    assert_eq!(r.reward, -1.0);
    assert!(!r.done);
}

#[test]
fn arriving_at_the_light_on_red_is_penalized() {
    let mut env = holding_env(State::new(5, LightPhase::Red));

    let r = env.step(Action::Forward);
    assert_eq!(r.next_state, State::new(6, LightPhase::Red));
    assert_eq!(r.reward, -20.0 + -1.0);
}

#[test]
fn goal_is_rewarded_and_terminal_in_every_phase() {
    for phase in LightPhase::ALL {
        let mut env = holding_env(State::new(9, phase));
        let r = env.step(Action::Forward);
        assert_eq!(r.next_state, State::new(10, phase));
        assert_eq!(r.reward, 20.0 + -1.0, "phase {phase}");
        assert!(r.done);
        assert!(env.is_in_terminal_state());
    }
}

#[test]
fn goal_on_the_light_cell_ignores_red() {
    let config = DomainConfig::tutorial().with_light_position(10);
    let domain = Arc::new(Domain::new(config).unwrap());
    let start = State::new(9, LightPhase::Red);
    let mut env = SimulatedEnvironment::with_rng(domain, start, ScriptedRng::always(HOLD)).unwrap();

    let r = env.step(Action::Forward);
    assert_eq!(r.next_state, State::new(10, LightPhase::Red));
    assert_eq!(r.reward, 19.0);
    assert!(r.done);
}

#[test]
fn full_trip_to_the_goal() {
    let mut env = holding_env(State::new(0, LightPhase::Green));
    let mut forward = |_: &State| Action::Forward;

    let episode = env.run_episode(&mut forward, 100);

    assert_eq!(episode.len(), 10);
    assert!(episode.reached_terminal());
    assert_eq!(episode.total_reward(), 9.0 * -1.0 + 19.0);
    assert_eq!(env.current(), State::new(10, LightPhase::Green));
}

#[test]
fn walls_clamp_motion() {
    let mut env = holding_env(State::new(0, LightPhase::Yellow));
    let r = env.step(Action::Reverse);
    assert_eq!(r.next_state, State::new(0, LightPhase::Yellow));
    assert_eq!(r.reward, -3.0);

    let mut env = holding_env(State::new(10, LightPhase::Yellow));
    let r = env.step(Action::Forward);
    assert_eq!(r.next_state.position(), 10);
}

#[test]
fn stop_holds_position_while_light_cycles() {
    let domain = Arc::new(Domain::new(DomainConfig::tutorial().with_cycling_lights()).unwrap());
    let mut env =
        SimulatedEnvironment::with_rng(domain, State::new(3, LightPhase::Green), ScriptedRng::always(HOLD))
            .unwrap();

    let phases: Vec<LightPhase> = (0..4)
        .map(|_| env.step(Action::Stop))
        .inspect(|r| {
            assert_eq!(r.next_state.position(), 3);
            assert_eq!(r.reward, -2.0);
        })
        .map(|r| r.next_state.light_phase())
        .collect();

    assert_eq!(
        phases,
        vec![
            LightPhase::Yellow,
            LightPhase::Red,
            LightPhase::Green,
            LightPhase::Yellow
        ]
    );
}
