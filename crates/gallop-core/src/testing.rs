//! Test doubles shared by the unit tests

use crate::{Horse, HorseId, Randomness};

/// Randomness with fixed answers: every draw returns the same unit value,
/// color and name, and subsets are the first `k` entries of the pool.
pub(crate) struct ScriptedRandom {
    pub unit: f64,
    pub color: String,
    pub name: String,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self {
            unit: 0.5,
            color: "#FF0000".to_string(),
            name: "Test Horse".to_string(),
        }
    }
}

impl Randomness for ScriptedRandom {
    fn unit(&mut self) -> f64 {
        self.unit
    }

    fn color(&mut self) -> String {
        self.color.clone()
    }

    fn name(&mut self) -> String {
        self.name.clone()
    }

    fn subset<T: Clone>(&mut self, pool: &[T], k: usize) -> Vec<T> {
        pool.iter().take(k).cloned().collect()
    }
}

/// A horse with the given id and condition
pub(crate) fn horse(id: u32, condition: u8) -> Horse {
    Horse {
        id: HorseId::new(id),
        name: format!("Horse {}", id),
        color: "#00FF00".to_string(),
        condition,
    }
}
