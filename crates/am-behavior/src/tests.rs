//! Unit tests for am-behavior.

use am_core::{LedColor, RobotId, RobotRng, StateIndex, TransitionIndex};
use am_robot::{CameraBlob, GroundReadings, LightReading, NeighborMessage, ProximityReading, RobotState};

use crate::{
    BehaviorError, Behaviour, BehaviourKind, Condition, ConditionKind, ControlLaw, Parameters,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn robot() -> RobotState {
    RobotState::new(RobotId(0))
}

fn rng() -> RobotRng {
    RobotRng::new(42, RobotId(0))
}

fn behaviour(kind: BehaviourKind, params: Parameters) -> Behaviour {
    Behaviour::new(StateIndex(0), kind, params).unwrap()
}

fn condition(kind: ConditionKind, params: Parameters) -> Condition {
    Condition::new(StateIndex(0), StateIndex(1), TransitionIndex(0), kind, params).unwrap()
}

fn neighbours(n: u32) -> Vec<NeighborMessage> {
    (0..n)
        .map(|i| NeighborMessage { sender: RobotId(i + 1), range: 10.0, bearing: 0.0 })
        .collect()
}

// ── Kind tables ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod kind_tests {
    use super::*;

    #[test]
    fn behaviour_ids_roundtrip() {
        for kind in BehaviourKind::ALL {
            assert_eq!(BehaviourKind::from_id(kind.id()).unwrap(), kind);
        }
    }

    #[test]
    fn unassigned_behaviour_ids_are_rejected() {
        for id in [6, 7, 10, 255] {
            assert!(matches!(
                BehaviourKind::from_id(id),
                Err(BehaviorError::UnknownBehaviour(got)) if got == id
            ));
        }
    }

    #[test]
    fn condition_ids_roundtrip() {
        for kind in ConditionKind::ALL {
            assert_eq!(ConditionKind::from_id(kind.id()).unwrap(), kind);
        }
    }

    #[test]
    fn unassigned_condition_ids_are_rejected() {
        for id in [6, 8, 100] {
            assert!(matches!(
                ConditionKind::from_id(id),
                Err(BehaviorError::UnknownCondition(got)) if got == id
            ));
        }
    }
}

// ── Parameters ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parameter_tests {
    use super::*;

    #[test]
    fn get_or_supplies_default() {
        let p = Parameters::from([("rwm", 12.0)]);
        assert_eq!(p.get_or("rwm", 5.0), 12.0);
        assert_eq!(p.get_or("att", 5.0), 5.0);
        assert!(!p.contains("att"));
    }

    #[test]
    fn non_finite_parameter_is_rejected() {
        let err = Behaviour::new(StateIndex(0), BehaviourKind::Stop, Parameters::from([("vel", f64::NAN)]))
            .unwrap_err();
        assert!(matches!(err, BehaviorError::InvalidParameter { name: "vel", .. }));

        let err = Condition::new(
            StateIndex(0),
            StateIndex(1),
            TransitionIndex(0),
            ConditionKind::FixedProbability,
            Parameters::from([("p", f64::INFINITY)]),
        )
        .unwrap_err();
        assert!(matches!(err, BehaviorError::InvalidParameter { name: "p", .. }));
    }
}

// ── Behaviours ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod behaviour_tests {
    use super::*;

    #[test]
    fn stop_halts_wheels() {
        let mut r = robot();
        r.set_wheel_velocity(5.0, 5.0);
        behaviour(BehaviourKind::Stop, Parameters::new()).control_step(&mut r, &mut rng());
        assert!(r.command().is_stopped());
    }

    #[test]
    fn exploration_drives_straight_in_open_space() {
        let mut r = robot();
        behaviour(BehaviourKind::Exploration, Parameters::from([("vel", 10.0)]))
            .control_step(&mut r, &mut rng());
        assert_eq!(r.left_wheel(), 10.0);
        assert_eq!(r.right_wheel(), 10.0);
    }

    #[test]
    fn exploration_turns_away_from_obstacle_on_the_right() {
        let mut r = robot();
        r.set_proximity(vec![ProximityReading { value: 0.9, angle: -0.3 }]);
        behaviour(BehaviourKind::Exploration, Parameters::new()).control_step(&mut r, &mut rng());
        // Spinning left: left wheel backward, right wheel forward.
        assert!(r.left_wheel() < 0.0);
        assert!(r.right_wheel() > 0.0);
    }

    #[test]
    fn exploration_turn_lasts_at_most_rwm_extra_steps() {
        let mut law = crate::laws::Exploration::default();
        law.init(&Parameters::from([("rwm", 3.0)]));
        let mut r = robot();
        let mut g = rng();
        r.set_proximity(vec![ProximityReading { value: 0.9, angle: 0.3 }]);
        law.control_step(&mut r, &mut g);
        r.set_proximity(vec![]);
        let mut extra = 0;
        while law.is_turning() {
            law.control_step(&mut r, &mut g);
            extra += 1;
        }
        assert!(extra <= 3);
        law.control_step(&mut r, &mut g);
        assert_eq!(r.left_wheel(), r.right_wheel());
    }

    #[test]
    fn phototaxis_turns_toward_light() {
        let mut r = robot();
        r.set_light(vec![LightReading { value: 1.0, angle: 1.0 }]);
        behaviour(BehaviourKind::Phototaxis, Parameters::new()).control_step(&mut r, &mut rng());
        assert!(r.right_wheel() > r.left_wheel());
    }

    #[test]
    fn anti_phototaxis_turns_away_from_light() {
        let mut r = robot();
        r.set_light(vec![LightReading { value: 1.0, angle: 1.0 }]);
        behaviour(BehaviourKind::AntiPhototaxis, Parameters::new()).control_step(&mut r, &mut rng());
        assert!(r.left_wheel() > r.right_wheel());
    }

    #[test]
    fn attraction_and_repulsion_are_opposite() {
        let mut r = robot();
        r.set_messages(vec![NeighborMessage { sender: RobotId(1), range: 5.0, bearing: -1.0 }]);
        behaviour(BehaviourKind::Attraction, Parameters::from([("att", 2.0)])).control_step(&mut r, &mut rng());
        assert!(r.left_wheel() > r.right_wheel());
        behaviour(BehaviourKind::Repulsion, Parameters::from([("rep", 2.0)])).control_step(&mut r, &mut rng());
        assert!(r.right_wheel() > r.left_wheel());
    }

    #[test]
    fn go_to_color_follows_clr_and_emits_cle() {
        let mut r = robot();
        r.set_camera(vec![
            CameraBlob { color: LedColor::Blue, distance: 10.0, angle: 1.2 },
            CameraBlob { color: LedColor::Red,  distance: 10.0, angle: -1.2 },
        ]);
        let params = Parameters::from([("clr", LedColor::Blue.as_parameter()), ("cle", 4.0)]);
        behaviour(BehaviourKind::GoToColor, params).control_step(&mut r, &mut rng());
        assert!(r.right_wheel() > r.left_wheel());
        assert_eq!(r.led(), LedColor::Yellow);
    }

    #[test]
    fn go_away_color_defaults_to_red() {
        let mut r = robot();
        r.set_camera(vec![CameraBlob { color: LedColor::Red, distance: 10.0, angle: 1.2 }]);
        behaviour(BehaviourKind::GoAwayColor, Parameters::new()).control_step(&mut r, &mut rng());
        assert!(r.left_wheel() > r.right_wheel());
        assert_eq!(r.led(), LedColor::Black);
    }

    #[test]
    fn equality_ignores_runtime_state() {
        let mut a = behaviour(BehaviourKind::Exploration, Parameters::from([("rwm", 2.0)]));
        let b = behaviour(BehaviourKind::Exploration, Parameters::from([("rwm", 2.0)]));
        let mut r = robot();
        r.set_proximity(vec![ProximityReading { value: 1.0, angle: 0.0 }]);
        a.control_step(&mut r, &mut rng());
        assert_eq!(a, b);
    }
}

// ── Conditions ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod condition_tests {
    use super::*;

    #[test]
    fn fixed_probability_extremes() {
        let mut g = rng();
        let r = robot();
        let mut always = condition(ConditionKind::FixedProbability, Parameters::from([("p", 1.0)]));
        let mut never  = condition(ConditionKind::FixedProbability, Parameters::from([("p", 0.0)]));
        for _ in 0..20 {
            assert!(always.verify(&r, &mut g));
            assert!(!never.verify(&r, &mut g));
        }
    }

    #[test]
    fn floor_conditions_match_their_shade() {
        let mut g = rng();
        let mut r = robot();
        let mut black = condition(ConditionKind::BlackFloor, Parameters::new());
        let mut gray  = condition(ConditionKind::GrayFloor, Parameters::new());
        let mut white = condition(ConditionKind::WhiteFloor, Parameters::new());

        r.set_ground(GroundReadings::uniform(0.0));
        assert!(black.verify(&r, &mut g));
        assert!(!gray.verify(&r, &mut g));
        assert!(!white.verify(&r, &mut g));

        r.set_ground(GroundReadings::uniform(0.5));
        assert!(gray.verify(&r, &mut g));

        r.set_ground(GroundReadings::uniform(1.0));
        assert!(white.verify(&r, &mut g));
        assert!(!black.verify(&r, &mut g));
    }

    #[test]
    fn neighbours_count_sigmoid() {
        let guard = crate::guards::NeighborsCount::new(false);
        // Default threshold 5: exactly one half at n = 5.
        assert!((guard.probability(5) - 0.5).abs() < 1e-12);
        assert!(guard.probability(10) > 0.99);
        assert!(guard.probability(0) < 0.01);

        let inverted = crate::guards::NeighborsCount::new(true);
        assert!((inverted.probability(10) + guard.probability(10) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn neighbours_count_fires_in_a_crowd() {
        let mut g = rng();
        let mut r = robot();
        r.set_messages(neighbours(30));
        let params = Parameters::from([("w", 10.0), ("p", 2.0)]);
        let mut crowd = condition(ConditionKind::NeighborsCount, params.clone());
        let mut alone = condition(ConditionKind::InvertedNeighborsCount, params);
        assert!(crowd.verify(&r, &mut g));
        assert!(!alone.verify(&r, &mut g));
    }

    #[test]
    fn prob_color_needs_the_watched_color() {
        let mut g = rng();
        let mut r = robot();
        let mut c = condition(ConditionKind::ProbColor, Parameters::from([("l", 2.0), ("p", 1.0)]));
        r.set_camera(vec![CameraBlob { color: LedColor::Red, distance: 1.0, angle: 0.0 }]);
        assert!(!c.verify(&r, &mut g));
        r.set_camera(vec![CameraBlob { color: LedColor::Blue, distance: 1.0, angle: 0.0 }]);
        assert!(c.verify(&r, &mut g));
    }

    #[test]
    fn accessors() {
        let c = condition(ConditionKind::WhiteFloor, Parameters::from([("p", 0.3)]));
        assert_eq!(c.origin(), StateIndex(0));
        assert_eq!(c.destination(), StateIndex(1));
        assert_eq!(c.index(), TransitionIndex(0));
        assert_eq!(c.kind(), ConditionKind::WhiteFloor);
        assert_eq!(c.params().get("p"), Some(0.3));
    }
}
