//! Group partitioning: which slice of a multi-group descriptor belongs to a
//! given robot.
//!
//! Groups own contiguous runs of robot ids in declaration order: group 0 owns
//! `[0, size0)`, group 1 owns `[size0, size0 + size1)`, and so on.  A robot's
//! flags are exactly those whose name ends in `_<its group>`.

use std::ops::Range;

use am_core::{GroupId, RobotId};
use tracing::debug;

use crate::lexer::flag_pairs;
use crate::{DescriptorError, DescriptorResult, FlagKey};

// ── GroupLayout ───────────────────────────────────────────────────────────────

/// The declared group sizes of a descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupLayout {
    sizes: Vec<u32>,
}

impl GroupLayout {
    /// Read `--ngroups` and one `--g<i>` per group.
    ///
    /// Fails if `--ngroups` is missing, if the number of group sizes differs
    /// from the declared count, or if a group index is repeated or skipped.
    pub fn from_tokens(tokens: &[&str]) -> DescriptorResult<GroupLayout> {
        let mut declared: Option<u32> = None;
        let mut sizes: Vec<(GroupId, u32)> = Vec::new();

        for (_, text, value) in flag_pairs(tokens) {
            match FlagKey::parse(text) {
                Some(FlagKey::GroupCount) if declared.is_none() => {
                    declared = Some(parse_count(text, value)?);
                }
                Some(FlagKey::GroupSize(group)) => {
                    sizes.push((group, parse_count(text, value)?));
                }
                _ => {}
            }
        }

        let declared = declared
            .ok_or_else(|| DescriptorError::MissingFlag(FlagKey::GroupCount.to_string()))?;
        if sizes.len() != declared as usize {
            return Err(DescriptorError::GroupCountMismatch { declared, found: sizes.len() });
        }

        let mut ordered: Vec<Option<u32>> = vec![None; declared as usize];
        for (group, size) in sizes {
            // An index past the declared count leaves some lower group unset,
            // which is reported below.
            let Some(slot) = ordered.get_mut(group.index()) else {
                continue;
            };
            if slot.replace(size).is_some() {
                return Err(DescriptorError::DuplicateGroup(group));
            }
        }

        let sizes = ordered
            .into_iter()
            .enumerate()
            .map(|(g, size)| size.ok_or(DescriptorError::MissingGroup(GroupId(g as u32))))
            .collect::<DescriptorResult<Vec<u32>>>()?;

        Ok(GroupLayout { sizes })
    }

    /// Build a layout directly from group sizes.
    pub fn from_sizes(sizes: Vec<u32>) -> Self {
        Self { sizes }
    }

    pub fn group_count(&self) -> usize {
        self.sizes.len()
    }

    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    /// Total number of robots across all groups.
    pub fn population(&self) -> u64 {
        self.sizes.iter().map(|&s| s as u64).sum()
    }

    /// The group owning `robot`: the first whose cumulative size strictly
    /// exceeds the robot id.
    pub fn group_of(&self, robot: RobotId) -> DescriptorResult<GroupId> {
        let mut accumulated: u64 = 0;
        for (g, &size) in self.sizes.iter().enumerate() {
            accumulated += size as u64;
            if (robot.0 as u64) < accumulated {
                return Ok(GroupId(g as u32));
            }
        }
        Err(DescriptorError::RobotOutOfRange { robot, population: self.population() })
    }

    /// Robot ids owned by `group` (empty for an unknown group).
    pub fn robots(&self, group: GroupId) -> Range<u64> {
        let start: u64 = self.sizes.iter().take(group.index()).map(|&s| s as u64).sum();
        let size = self.sizes.get(group.index()).copied().unwrap_or(0) as u64;
        start..start + size
    }
}

fn parse_count(text: &str, value: Option<&str>) -> DescriptorResult<u32> {
    let value = value.ok_or_else(|| DescriptorError::MissingValue(text.to_owned()))?;
    value.parse::<u32>().map_err(|_| DescriptorError::InvalidValue {
        flag:  text.to_owned(),
        value: value.to_owned(),
    })
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// Every `(flag, value)` pair addressed to `group`, in original order, with
/// the group definitions removed.
pub fn extract_group<'a>(tokens: &[&'a str], group: GroupId) -> Vec<&'a str> {
    let suffix = format!("_{}", group.0);
    let mut out = Vec::new();
    for (_, text, value) in flag_pairs(tokens) {
        if FlagKey::parse(text).is_some_and(|k| k.is_group_definition()) {
            continue;
        }
        if text.len() > suffix.len() && text.ends_with(&suffix) {
            out.push(text);
            out.extend(value);
        }
    }
    out
}

/// Locate `robot`'s group and return it with the group's tokens.
pub fn partition<'a>(tokens: &[&'a str], robot: RobotId) -> DescriptorResult<(GroupId, Vec<&'a str>)> {
    let layout = GroupLayout::from_tokens(tokens)?;
    let group = layout.group_of(robot)?;
    let slice = extract_group(tokens, group);
    debug!(%robot, %group, tokens = slice.len(), "partitioned descriptor");
    Ok((group, slice))
}
