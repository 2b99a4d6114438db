//! Unit tests for am-descriptor.

use am_core::{GroupId, RobotId, StateIndex, TransitionIndex};

use crate::{
    DescriptorError, FlagKey, FlagTable, GroupLayout, extract_group, partition, tokenize,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const TWO_GROUPS: &str = "\
--ngroups 2 --g0 3 --g1 2 \
--nstates_0 2 --s0_0 1 --n0_0 1 --n0x0_0 0 --c0x0_0 5 --p0x0_0 1.0 --s1_0 0 --rwm1_0 7 \
--nstates_1 1 --s0_1 2";

// ── Lexer ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lexer_tests {
    use super::*;

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn splits_on_any_whitespace() {
        assert_eq!(tokenize("--s0_0  1\n--rwm0_0\t2.5"), vec!["--s0_0", "1", "--rwm0_0", "2.5"]);
    }
}

// ── FlagKey ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod flag_key_tests {
    use super::*;

    fn g(n: u32) -> GroupId {
        GroupId(n)
    }

    #[test]
    fn group_definitions() {
        assert_eq!(FlagKey::parse("--ngroups"), Some(FlagKey::GroupCount));
        assert_eq!(FlagKey::parse("--g12"), Some(FlagKey::GroupSize(g(12))));
        assert_eq!(FlagKey::parse("--nstates_3"), Some(FlagKey::StateCount(g(3))));
    }

    #[test]
    fn state_scoped_flags() {
        let state = StateIndex(4);
        assert_eq!(FlagKey::parse("--s4_1"), Some(FlagKey::StateKind { state, group: g(1) }));
        assert_eq!(FlagKey::parse("--n4_1"), Some(FlagKey::TransitionCount { state, group: g(1) }));
        assert_eq!(
            FlagKey::parse("--rwm4_1"),
            Some(FlagKey::StateParam { name: "rwm", state, group: g(1) })
        );
    }

    #[test]
    fn transition_scoped_flags() {
        let state = StateIndex(2);
        let transition = TransitionIndex(10);
        assert_eq!(
            FlagKey::parse("--n2x10_0"),
            Some(FlagKey::TransitionDestination { state, transition, group: g(0) })
        );
        assert_eq!(
            FlagKey::parse("--c2x10_0"),
            Some(FlagKey::TransitionKind { state, transition, group: g(0) })
        );
        assert_eq!(
            FlagKey::parse("--w2x10_0"),
            Some(FlagKey::TransitionParam { name: "w", state, transition, group: g(0) })
        );
    }

    #[test]
    fn colour_parameter_is_not_a_condition_kind() {
        assert_eq!(
            FlagKey::parse("--cle0_0"),
            Some(FlagKey::StateParam { name: "cle", state: StateIndex(0), group: g(0) })
        );
    }

    #[test]
    fn malformed_flags_are_rejected() {
        for flag in ["ngroups", "--", "--_0", "--s_0", "--s0_", "--s0_x", "--rwm", "--x0", "--s0x_0", "--s+1_0"] {
            assert_eq!(FlagKey::parse(flag), None, "{flag}");
        }
    }

    #[test]
    fn display_writes_descriptor_form() {
        for flag in ["--ngroups", "--g1", "--nstates_0", "--s3_2", "--vel3_2", "--n3_2", "--n3x1_2", "--c3x1_2", "--l3x1_2"] {
            assert_eq!(FlagKey::parse(flag).unwrap().to_string(), flag);
        }
    }
}

// ── FlagTable ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod table_tests {
    use super::*;

    #[test]
    fn indexes_values_and_positions() {
        let tokens = tokenize("--nstates_0 2 --s0_0 1 --rwm0_0 2.5 --s1_0 0");
        let table = FlagTable::from_tokens(&tokens);
        let rwm = table
            .get(&FlagKey::StateParam { name: "rwm", state: StateIndex(0), group: GroupId(0) })
            .unwrap();
        assert_eq!(rwm.parse_f64().unwrap(), 2.5);
        assert_eq!(rwm.position, 4);
        assert_eq!(table.position(&FlagKey::StateKind { state: StateIndex(1), group: GroupId(0) }), Some(6));
        assert_eq!(table.token_count(), 8);
    }

    #[test]
    fn first_occurrence_wins() {
        let tokens = tokenize("--s0_0 1 --s0_0 4");
        let table = FlagTable::from_tokens(&tokens);
        let kind = table.require(&FlagKey::StateKind { state: StateIndex(0), group: GroupId(0) }).unwrap();
        assert_eq!(kind.parse_u32().unwrap(), 1);
        assert_eq!(table.flags().len(), 2);
    }

    #[test]
    fn span_lookup_finds_a_later_occurrence() {
        let tokens = tokenize("--rwm1_0 3 --s1_0 0 --rwm1_0 7");
        let table = FlagTable::from_tokens(&tokens);
        let key = FlagKey::StateParam { name: "rwm", state: StateIndex(1), group: GroupId(0) };

        assert_eq!(table.occurrences(&key).count(), 2);
        assert_eq!(table.get(&key).unwrap().position, 0);
        let inside = table.get_within(&key, &(2..6)).unwrap();
        assert_eq!(inside.position, 4);
        assert_eq!(inside.parse_f64().unwrap(), 7.0);
        assert!(table.get_within(&key, &(2..4)).is_none());
    }

    #[test]
    fn unrecognised_flags_are_skipped() {
        let tokens = tokenize("--bogus 3 --s0_0 1");
        let table = FlagTable::from_tokens(&tokens);
        assert_eq!(table.flags().len(), 1);
    }

    #[test]
    fn flag_without_value() {
        let tokens = tokenize("--n0_0 --s0_0 1");
        let table = FlagTable::from_tokens(&tokens);
        let n = table.get(&FlagKey::TransitionCount { state: StateIndex(0), group: GroupId(0) }).unwrap();
        assert!(matches!(n.parse_u32(), Err(DescriptorError::MissingValue(_))));
    }

    #[test]
    fn integer_values() {
        let tokens = tokenize("--n0_0 3.0 --n1_0 2.5 --n2_0 -1 --n3_0 abc");
        let table = FlagTable::from_tokens(&tokens);
        let count = |s| {
            table
                .get(&FlagKey::TransitionCount { state: StateIndex(s), group: GroupId(0) })
                .unwrap()
                .parse_u32()
        };
        assert_eq!(count(0).unwrap(), 3);
        assert!(matches!(count(1), Err(DescriptorError::InvalidValue { .. })));
        assert!(matches!(count(2), Err(DescriptorError::InvalidValue { .. })));
        assert!(matches!(count(3), Err(DescriptorError::InvalidValue { .. })));
    }

    #[test]
    fn missing_required_flag_names_it() {
        let table = FlagTable::from_tokens(&[]);
        match table.require(&FlagKey::StateCount(GroupId(2))) {
            Err(DescriptorError::MissingFlag(flag)) => assert_eq!(flag, "--nstates_2"),
            other => panic!("unexpected {other:?}"),
        }
    }
}

// ── Partitioning ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod partition_tests {
    use super::*;

    #[test]
    fn robots_map_to_groups_in_id_order() {
        let tokens = tokenize("--ngroups 2 --g0 3 --g1 2");
        let layout = GroupLayout::from_tokens(&tokens).unwrap();
        for id in 0..3 {
            assert_eq!(layout.group_of(RobotId(id)).unwrap(), GroupId(0));
        }
        for id in 3..5 {
            assert_eq!(layout.group_of(RobotId(id)).unwrap(), GroupId(1));
        }
        assert!(matches!(
            layout.group_of(RobotId(5)),
            Err(DescriptorError::RobotOutOfRange { population: 5, .. })
        ));
    }

    #[test]
    fn robots_range_per_group() {
        let layout = GroupLayout::from_sizes(vec![3, 2]);
        assert_eq!(layout.robots(GroupId(0)), 0..3);
        assert_eq!(layout.robots(GroupId(1)), 3..5);
        assert_eq!(layout.robots(GroupId(7)), 5..5);
        assert_eq!(layout.population(), 5);
    }

    #[test]
    fn empty_group_owns_no_robots() {
        let layout = GroupLayout::from_sizes(vec![2, 0, 1]);
        assert_eq!(layout.group_of(RobotId(1)).unwrap(), GroupId(0));
        assert_eq!(layout.group_of(RobotId(2)).unwrap(), GroupId(2));
    }

    #[test]
    fn group_count_mismatch() {
        let tokens = tokenize("--ngroups 3 --g0 3 --g1 2");
        assert!(matches!(
            GroupLayout::from_tokens(&tokens),
            Err(DescriptorError::GroupCountMismatch { declared: 3, found: 2 })
        ));
    }

    #[test]
    fn missing_ngroups() {
        let tokens = tokenize("--g0 3");
        assert!(matches!(GroupLayout::from_tokens(&tokens), Err(DescriptorError::MissingFlag(_))));
    }

    #[test]
    fn duplicate_and_skipped_groups() {
        let dup = tokenize("--ngroups 2 --g0 3 --g0 2");
        assert!(matches!(GroupLayout::from_tokens(&dup), Err(DescriptorError::DuplicateGroup(GroupId(0)))));

        let gap = tokenize("--ngroups 2 --g0 3 --g2 2");
        assert!(matches!(GroupLayout::from_tokens(&gap), Err(DescriptorError::MissingGroup(GroupId(1)))));
    }

    #[test]
    fn extract_keeps_only_the_group_suffix() {
        let tokens = tokenize(TWO_GROUPS);
        assert_eq!(extract_group(&tokens, GroupId(1)), vec!["--nstates_1", "1", "--s0_1", "2"]);

        let g0 = extract_group(&tokens, GroupId(0));
        assert_eq!(g0.first(), Some(&"--nstates_0"));
        assert_eq!(g0.len(), 16);
        assert!(!g0.iter().any(|t| *t == "--g0" || *t == "--ngroups"));
    }

    #[test]
    fn suffix_match_is_exact() {
        let tokens = tokenize("--ngroups 2 --g0 1 --g1 1 --s0_11 3 --s0_1 2");
        assert_eq!(extract_group(&tokens, GroupId(1)), vec!["--s0_1", "2"]);
    }

    #[test]
    fn partition_selects_robot_group() {
        let tokens = tokenize(TWO_GROUPS);
        let (group, slice) = partition(&tokens, RobotId(4)).unwrap();
        assert_eq!(group, GroupId(1));
        assert_eq!(slice, vec!["--nstates_1", "1", "--s0_1", "2"]);
        assert!(partition(&tokens, RobotId(5)).is_err());
    }
}
