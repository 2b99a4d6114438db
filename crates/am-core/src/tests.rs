//! Unit tests for am-core primitives.

#[cfg(test)]
mod ids {
    use crate::{RobotId, StateIndex, TransitionIndex};

    #[test]
    fn index_roundtrip() {
        let id = StateIndex(4);
        assert_eq!(id.index(), 4);
        assert_eq!(StateIndex::try_from(4usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(RobotId::INVALID.0, u32::MAX);
        assert_eq!(TransitionIndex::default(), TransitionIndex::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(RobotId(7).to_string(), "RobotId(7)");
    }

    #[test]
    fn robot_id_from_trailing_digits() {
        assert_eq!(RobotId::from_name("epuck12").unwrap(), RobotId(12));
        assert_eq!(RobotId::from_name("epuck_0").unwrap(), RobotId(0));
        assert_eq!(RobotId::from_name("42").unwrap(), RobotId(42));
    }

    #[test]
    fn robot_id_without_digits_is_an_error() {
        assert!(RobotId::from_name("epuck").is_err());
        assert!(RobotId::from_name("").is_err());
    }
}

#[cfg(test)]
mod vector {
    use std::f64::consts::FRAC_PI_2;

    use crate::Vector2;

    #[test]
    fn polar_roundtrip() {
        let v = Vector2::from_polar(2.0, FRAC_PI_2);
        assert!((v.length() - 2.0).abs() < 1e-9);
        assert!((v.angle() - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn sum_of_opposites_is_zero() {
        let a = Vector2::from_polar(1.0, 0.3);
        let total: Vector2 = [a, -a].into_iter().sum();
        assert!(total.length() < 1e-12);
    }

    #[test]
    fn clamp_length_keeps_bearing() {
        let v = Vector2::new(3.0, 4.0).clamp_length(1.0);
        assert!((v.length() - 1.0).abs() < 1e-9);
        assert!((v.angle() - Vector2::new(3.0, 4.0).angle()).abs() < 1e-9);
    }

    #[test]
    fn normalizing_zero_is_zero() {
        assert_eq!(Vector2::ZERO.normalized(), Vector2::ZERO);
    }
}

#[cfg(test)]
mod color {
    use crate::LedColor;

    #[test]
    fn parameter_catalog() {
        assert_eq!(LedColor::from_parameter(0.0), Some(LedColor::Black));
        assert_eq!(LedColor::from_parameter(3.0), Some(LedColor::Red));
        assert_eq!(LedColor::from_parameter(5.8), Some(LedColor::Cyan));
        assert_eq!(LedColor::from_parameter(7.0), None);
        assert_eq!(LedColor::from_parameter(f64::NAN), None);
    }

    #[test]
    fn as_parameter_inverts_from_parameter() {
        for c in [LedColor::Green, LedColor::Blue, LedColor::Yellow, LedColor::Magenta] {
            assert_eq!(LedColor::from_parameter(c.as_parameter()), Some(c));
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::{RobotId, RobotRng};

    #[test]
    fn same_seed_same_stream() {
        let mut a = RobotRng::new(7, RobotId(3));
        let mut b = RobotRng::new(7, RobotId(3));
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..u64::MAX), b.gen_range(0..u64::MAX));
        }
    }

    #[test]
    fn robots_get_distinct_streams() {
        let mut a = RobotRng::new(7, RobotId(0));
        let mut b = RobotRng::new(7, RobotId(1));
        let draws = |rng: &mut RobotRng| (0..4).map(|_| rng.gen_range(0..u64::MAX)).collect::<Vec<_>>();
        assert_ne!(draws(&mut a), draws(&mut b));
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = RobotRng::new(1, RobotId(0));
        for _ in 0..32 {
            assert!(rng.gen_bool(1.0));
            assert!(!rng.gen_bool(0.0));
            assert!(!rng.gen_bool(f64::NAN));
            assert!(rng.gen_bool(2.5));
        }
    }
}

#[cfg(test)]
mod time {
    use crate::Step;

    #[test]
    fn next_and_since() {
        let s = Step::ZERO.next().next();
        assert_eq!(s, Step(2));
        assert_eq!((s + 3).since(s), 3);
        assert_eq!(s.to_string(), "S2");
    }
}
