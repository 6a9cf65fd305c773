//! Identity types for horses

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a horse within a registry
///
/// Assigned sequentially from zero in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HorseId(pub u32);

impl HorseId {
    /// Create a new horse ID
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for HorseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "horse:{}", self.0)
    }
}

impl From<u32> for HorseId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horse_id() {
        let id = HorseId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "horse:7");
        assert!(HorseId::new(1) < HorseId::new(2));
    }
}
