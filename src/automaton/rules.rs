//! Rulestring parsing and birth/survival rule application

use crate::error::SetupError;
use std::fmt;

/// Maximum neighbor count in a Moore neighborhood
pub const MAX_NEIGHBORS: u8 = 8;

/// Birth/survival rule for a two-state automaton, parsed from a
/// `B<digits>/S<digits>` rulestring.
///
/// Membership is by neighbor count: a dead cell is born when its live
/// neighbor count is in the birth set, a live cell survives when its count
/// is in the survival set. An explicitly empty survival set (e.g. `"B2/S"`)
/// follows the documented convention for that family of rules: the cell
/// survives with any live neighbor at all, and dies only in total isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    birth: [bool; 9],
    survival: [bool; 9],
}

impl RuleSet {
    /// Parse a rulestring of the form `B<digits>/S<digits>`.
    ///
    /// Digits are neighbor counts 0-8; either side may be empty; duplicates
    /// and ordering are irrelevant. Anything outside that grammar is
    /// rejected with a reason naming the offending part.
    pub fn parse(spec: &str) -> Result<Self, SetupError> {
        let rest = spec
            .strip_prefix('B')
            .ok_or_else(|| SetupError::invalid_rule(spec, "must start with 'B'"))?;

        let (birth_digits, survival_part) = rest
            .split_once('/')
            .ok_or_else(|| SetupError::invalid_rule(spec, "missing '/' separator"))?;

        let survival_digits = survival_part.strip_prefix('S').ok_or_else(|| {
            SetupError::invalid_rule(spec, "survival part must start with 'S'")
        })?;

        Ok(Self {
            birth: Self::parse_digits(spec, birth_digits)?,
            survival: Self::parse_digits(spec, survival_digits)?,
        })
    }

    fn parse_digits(spec: &str, digits: &str) -> Result<[bool; 9], SetupError> {
        let mut set = [false; 9];
        for ch in digits.chars() {
            match ch.to_digit(10) {
                Some(d) if d <= MAX_NEIGHBORS as u32 => set[d as usize] = true,
                _ => {
                    return Err(SetupError::invalid_rule(
                        spec,
                        format!("'{}' is not a neighbor count 0-8", ch),
                    ))
                }
            }
        }
        Ok(set)
    }

    /// Conway's classic rule, B3/S23
    pub fn conway() -> Self {
        Self {
            birth: Self::set_of(&[3]),
            survival: Self::set_of(&[2, 3]),
        }
    }

    /// HighLife, B36/S23
    pub fn highlife() -> Self {
        Self {
            birth: Self::set_of(&[3, 6]),
            survival: Self::set_of(&[2, 3]),
        }
    }

    /// Live Free or Die, B2/S: birth on 2, survival with any neighbor
    pub fn live_free_or_die() -> Self {
        Self {
            birth: Self::set_of(&[2]),
            survival: [false; 9],
        }
    }

    fn set_of(counts: &[u8]) -> [bool; 9] {
        let mut set = [false; 9];
        for &c in counts {
            set[c as usize] = true;
        }
        set
    }

    /// Whether a dead cell with this many live neighbors becomes alive
    pub fn births_on(&self, neighbors: u8) -> bool {
        self.birth[neighbors as usize]
    }

    /// Whether a live cell with this many live neighbors stays alive.
    ///
    /// An empty survival set is permissive, not lethal: the cell survives
    /// unless it has zero live neighbors.
    pub fn survives_on(&self, neighbors: u8) -> bool {
        if self.survival_is_empty() {
            neighbors >= 1
        } else {
            self.survival[neighbors as usize]
        }
    }

    /// Next state of a cell given its current state and live neighbor count
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.survives_on(neighbors)
        } else {
            self.births_on(neighbors)
        }
    }

    /// Neighbor counts in the birth set, ascending
    pub fn birth_counts(&self) -> Vec<u8> {
        Self::members(&self.birth)
    }

    /// Neighbor counts in the survival set, ascending (empty for rules like
    /// `"B2/S"`, where survival is handled by the isolation convention)
    pub fn survival_counts(&self) -> Vec<u8> {
        Self::members(&self.survival)
    }

    fn survival_is_empty(&self) -> bool {
        !self.survival.iter().any(|&m| m)
    }

    fn members(set: &[bool; 9]) -> Vec<u8> {
        (0..=MAX_NEIGHBORS).filter(|&c| set[c as usize]).collect()
    }
}

impl fmt::Display for RuleSet {
    /// Canonical rulestring, digits ascending
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for c in self.birth_counts() {
            write!(f, "{}", c)?;
        }
        write!(f, "/S")?;
        for c in self.survival_counts() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_conway() {
        let rule = RuleSet::parse("B3/S23").unwrap();
        assert_eq!(rule, RuleSet::conway());
        assert_eq!(rule.birth_counts(), vec![3]);
        assert_eq!(rule.survival_counts(), vec![2, 3]);
    }

    #[test]
    fn test_parse_highlife() {
        let rule = RuleSet::parse("B36/S23").unwrap();
        assert_eq!(rule, RuleSet::highlife());
        assert_eq!(rule.birth_counts(), vec![3, 6]);
        assert_eq!(rule.survival_counts(), vec![2, 3]);
    }

    #[test]
    fn test_parse_empty_survival() {
        let rule = RuleSet::parse("B2/S").unwrap();
        assert_eq!(rule, RuleSet::live_free_or_die());
        assert_eq!(rule.birth_counts(), vec![2]);
        assert_eq!(rule.survival_counts(), Vec::<u8>::new());
    }

    #[test]
    fn test_parse_deduplicates_and_ignores_order() {
        let rule = RuleSet::parse("B633/S32").unwrap();
        assert_eq!(rule.birth_counts(), vec![3, 6]);
        assert_eq!(rule.survival_counts(), vec![2, 3]);
    }

    #[test]
    fn test_parse_rejects_malformed_strings() {
        for spec in ["", "B3S23", "3/23", "S23/B3", "B3/23", "B9/S23", "B3/S2x"] {
            let err = RuleSet::parse(spec);
            assert!(
                matches!(err, Err(SetupError::InvalidRule { .. })),
                "expected InvalidRule for {:?}",
                spec
            );
        }
    }

    #[test]
    fn test_conway_transitions() {
        let rule = RuleSet::conway();
        assert!(rule.next_state(true, 2));
        assert!(rule.next_state(true, 3));
        assert!(rule.next_state(false, 3));
        assert!(!rule.next_state(true, 1));
        assert!(!rule.next_state(true, 4));
        assert!(!rule.next_state(false, 2));
        assert!(!rule.next_state(false, 0));
    }

    #[test]
    fn test_empty_survival_is_permissive_except_isolation() {
        let rule = RuleSet::parse("B2/S").unwrap();

        // Isolation is the only lethal count for a live cell
        assert!(!rule.next_state(true, 0));
        for neighbors in 1..=MAX_NEIGHBORS {
            assert!(rule.next_state(true, neighbors));
        }

        // Birth still requires exactly 2
        assert!(rule.next_state(false, 2));
        assert!(!rule.next_state(false, 3));
    }

    #[test]
    fn test_canonical_display() {
        assert_eq!(RuleSet::parse("B63/S32").unwrap().to_string(), "B36/S23");
        assert_eq!(RuleSet::live_free_or_die().to_string(), "B2/S");
    }
}
