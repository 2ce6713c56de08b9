//! The six core ability scores.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lowest score a creature may have.
pub const MIN_ABILITY_SCORE: i32 = 1;
/// Highest score a creature may have.
pub const MAX_ABILITY_SCORE: i32 = 30;

/// Domain identifiers for the six abilities, in sheet order.
pub const ABILITY_IDS: [&str; 6] = ["str", "dex", "con", "int", "wis", "cha"];

/// Calculate an ability modifier: floor((score - 10) / 2).
pub fn ability_modifier(score: i32) -> i32 {
    score.saturating_sub(10).div_euclid(2)
}

/// A full set of ability scores.
///
/// A zero score means "not assigned yet"; drafts may carry partially assigned
/// sets, but [`AbilityScores::new`] only accepts complete, in-range sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbilityScores {
    strength: i32,
    dexterity: i32,
    constitution: i32,
    intelligence: i32,
    wisdom: i32,
    charisma: i32,
}

impl AbilityScores {
    /// Create a validated, fully assigned set of scores.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if any score is outside 1..=30.
    pub fn new(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Result<Self, DomainError> {
        let scores = Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        };
        for (id, score) in scores.iter() {
            if !(MIN_ABILITY_SCORE..=MAX_ABILITY_SCORE).contains(&score) {
                return Err(DomainError::validation(format!(
                    "Ability score {} must be between {} and {}, got {}",
                    id, MIN_ABILITY_SCORE, MAX_ABILITY_SCORE, score
                )));
            }
        }
        Ok(scores)
    }

    /// Build a set without range checks (stored or provider data).
    pub fn from_raw(
        strength: i32,
        dexterity: i32,
        constitution: i32,
        intelligence: i32,
        wisdom: i32,
        charisma: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            constitution,
            intelligence,
            wisdom,
            charisma,
        }
    }

    pub fn strength(&self) -> i32 {
        self.strength
    }

    pub fn dexterity(&self) -> i32 {
        self.dexterity
    }

    pub fn constitution(&self) -> i32 {
        self.constitution
    }

    pub fn intelligence(&self) -> i32 {
        self.intelligence
    }

    pub fn wisdom(&self) -> i32 {
        self.wisdom
    }

    pub fn charisma(&self) -> i32 {
        self.charisma
    }

    /// Look up a score by domain ability id ("str", "dex", ...).
    pub fn get(&self, ability_id: &str) -> Option<i32> {
        match ability_id {
            "str" => Some(self.strength),
            "dex" => Some(self.dexterity),
            "con" => Some(self.constitution),
            "int" => Some(self.intelligence),
            "wis" => Some(self.wisdom),
            "cha" => Some(self.charisma),
            _ => None,
        }
    }

    /// Whether every score has been assigned (non-zero).
    pub fn is_assigned(&self) -> bool {
        self.iter().all(|(_, score)| score > 0)
    }

    /// Returns a copy with `bonus` added to the given ability, saturating at
    /// the `i32` bounds.
    ///
    /// Unknown ability ids leave the scores untouched.
    pub fn with_bonus(mut self, ability_id: &str, bonus: i32) -> Self {
        let score = match ability_id {
            "str" => &mut self.strength,
            "dex" => &mut self.dexterity,
            "con" => &mut self.constitution,
            "int" => &mut self.intelligence,
            "wis" => &mut self.wisdom,
            "cha" => &mut self.charisma,
            _ => return self,
        };
        *score = score.saturating_add(bonus);
        self
    }

    /// Returns a copy with every score pulled into 1..=30.
    pub fn clamped(self) -> Self {
        let clamp = |score: i32| score.clamp(MIN_ABILITY_SCORE, MAX_ABILITY_SCORE);
        Self {
            strength: clamp(self.strength),
            dexterity: clamp(self.dexterity),
            constitution: clamp(self.constitution),
            intelligence: clamp(self.intelligence),
            wisdom: clamp(self.wisdom),
            charisma: clamp(self.charisma),
        }
    }

    /// Iterate `(ability_id, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i32)> {
        let values = [
            self.strength,
            self.dexterity,
            self.constitution,
            self.intelligence,
            self.wisdom,
            self.charisma,
        ];
        ABILITY_IDS.into_iter().zip(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_uses_floor_division() {
        assert_eq!(ability_modifier(10), 0);
        assert_eq!(ability_modifier(11), 0);
        assert_eq!(ability_modifier(15), 2);
        assert_eq!(ability_modifier(9), -1);
        assert_eq!(ability_modifier(8), -1);
        assert_eq!(ability_modifier(1), -5);
        assert_eq!(ability_modifier(i32::MIN), i32::MIN / 2);
        assert_eq!(ability_modifier(i32::MAX), (i32::MAX - 10) / 2);
    }

    #[test]
    fn extreme_bonuses_saturate_and_clamp() {
        let scores = AbilityScores::from_raw(15, 14, 13, 12, 10, 8)
            .with_bonus("con", i32::MAX)
            .with_bonus("con", 5)
            .with_bonus("dex", i32::MIN);
        assert_eq!(scores.constitution(), i32::MAX);
        assert_eq!(scores.dexterity(), 14 + i32::MIN);

        let clamped = scores.clamped();
        assert_eq!(clamped.constitution(), MAX_ABILITY_SCORE);
        assert_eq!(clamped.dexterity(), MIN_ABILITY_SCORE);
        assert_eq!(clamped.strength(), 15);
    }

    #[test]
    fn new_rejects_out_of_range_scores() {
        assert!(AbilityScores::new(15, 14, 13, 12, 10, 8).is_ok());
        assert!(AbilityScores::new(0, 14, 13, 12, 10, 8).is_err());
        assert!(AbilityScores::new(15, 14, 13, 12, 10, 31).is_err());
    }

    #[test]
    fn partially_assigned_scores_are_not_assigned() {
        let scores = AbilityScores::from_raw(15, 0, 13, 12, 10, 8);
        assert!(!scores.is_assigned());
        assert!(!AbilityScores::default().is_assigned());
    }

    #[test]
    fn with_bonus_targets_single_ability() {
        let scores = AbilityScores::from_raw(15, 14, 13, 12, 10, 8)
            .with_bonus("con", 2)
            .with_bonus("unknown", 5);
        assert_eq!(scores.get("con"), Some(15));
        assert_eq!(scores.get("str"), Some(15));
        assert_eq!(scores.get("unknown"), None);
    }
}
