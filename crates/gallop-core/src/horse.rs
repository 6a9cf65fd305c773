//! Horses and the registry that creates them

use crate::{HorseId, Randomness};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Lowest possible condition
pub const MIN_CONDITION: u8 = 80;
/// Highest possible condition
pub const MAX_CONDITION: u8 = 100;

/// A competing horse
///
/// Immutable once created. `condition` drives how far the horse moves on
/// every tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horse {
    /// Unique within the registry batch that created it
    pub id: HorseId,
    /// Display name, unique within its batch
    pub name: String,
    /// `#RRGGBB` color
    pub color: String,
    /// Speed attribute in `[MIN_CONDITION, MAX_CONDITION]`
    pub condition: u8,
}

/// Creates the pool of competing horses
pub struct HorseRegistry;

impl HorseRegistry {
    /// Generate `count` horses with ids `0..count`
    ///
    /// Names come from the randomness source and are made unique across the
    /// batch by appending the smallest free numeric suffix starting at 2.
    ///
    /// ```
    /// use gallop_core::{HorseRegistry, RaceRng};
    ///
    /// let horses = HorseRegistry::generate(5, &mut RaceRng::new(1));
    /// assert_eq!(horses.len(), 5);
    /// assert!(horses.iter().all(|h| (80..=100).contains(&h.condition)));
    /// ```
    pub fn generate<R: Randomness>(count: usize, rng: &mut R) -> Vec<Horse> {
        let mut used_names = IndexSet::with_capacity(count);
        let mut horses = Vec::with_capacity(count);

        for index in 0..count {
            let condition = roll_condition(rng);
            let color = rng.color();
            let name = disambiguate(rng.name(), &used_names);
            used_names.insert(name.clone());

            horses.push(Horse {
                id: HorseId::new(index as u32),
                name,
                color,
                condition,
            });
        }

        horses
    }
}

/// `MIN_CONDITION + floor(unit * 21)`
fn roll_condition<R: Randomness>(rng: &mut R) -> u8 {
    let span = MAX_CONDITION - MIN_CONDITION;
    let offset = (rng.unit() * f64::from(span + 1)).floor() as u8;
    MIN_CONDITION + offset.min(span)
}

fn disambiguate(candidate: String, used: &IndexSet<String>) -> String {
    if !used.contains(&candidate) {
        return candidate;
    }

    // At most used.len() names are taken, so this stops within
    // used.len() + 1 suffixes.
    let mut suffix = 2usize;
    loop {
        let name = format!("{} {}", candidate, suffix);
        if !used.contains(&name) {
            return name;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRandom;
    use crate::RaceRng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_ids_and_conditions() {
        let horses = HorseRegistry::generate(5, &mut RaceRng::new(3));
        assert_eq!(horses.len(), 5);
        for (i, horse) in horses.iter().enumerate() {
            assert_eq!(horse.id, HorseId::new(i as u32));
            assert!((MIN_CONDITION..=MAX_CONDITION).contains(&horse.condition));
        }
    }

    #[test]
    fn test_generate_zero() {
        assert!(HorseRegistry::generate(0, &mut RaceRng::new(3)).is_empty());
    }

    #[test]
    fn test_condition_from_unit() {
        let mut rng = ScriptedRandom::new();
        let horses = HorseRegistry::generate(1, &mut rng);
        assert_eq!(horses[0].condition, 90);

        rng.unit = 0.0;
        assert_eq!(HorseRegistry::generate(1, &mut rng)[0].condition, 80);

        rng.unit = 0.9999;
        assert_eq!(HorseRegistry::generate(1, &mut rng)[0].condition, 100);

        // Out-of-contract source still yields a valid condition
        rng.unit = 1.0;
        assert_eq!(HorseRegistry::generate(1, &mut rng)[0].condition, 100);
    }

    #[test]
    fn test_name_collisions_get_suffix() {
        let mut rng = ScriptedRandom::new();
        let horses = HorseRegistry::generate(4, &mut rng);
        let names: Vec<&str> = horses.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Test Horse", "Test Horse 2", "Test Horse 3", "Test Horse 4"]
        );
        assert!(horses.iter().all(|h| h.color == "#FF0000"));
    }

    #[test]
    fn test_suffix_skips_taken_names() {
        let mut used = IndexSet::new();
        used.insert("Swift Thunder".to_string());
        used.insert("Swift Thunder 2".to_string());
        assert_eq!(
            disambiguate("Swift Thunder".to_string(), &used),
            "Swift Thunder 3"
        );
        assert_eq!(disambiguate("Noble Blaze".to_string(), &used), "Noble Blaze");
    }

    #[test]
    fn test_names_unique_in_large_batch() {
        // More horses than word combinations forces suffixing
        let horses = HorseRegistry::generate(700, &mut RaceRng::new(11));
        let names: HashSet<_> = horses.iter().map(|h| h.name.clone()).collect();
        assert_eq!(names.len(), 700);
    }
}
