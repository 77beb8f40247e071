use serde::{Deserialize, Serialize};

pub mod state;
pub mod theme;

pub const MIN_SCALE: f32 = 0.8;
pub const MAX_SCALE: f32 = 1.5;

/// UI scale factor, clamped to a sane range on construction. Deserialization
/// goes through the same clamp so a hand-edited saved state cannot smuggle in
/// an out-of-range value.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ScaleFactor(f32);

impl Default for ScaleFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

impl From<f32> for ScaleFactor {
    fn from(value: f32) -> Self {
        ScaleFactor(value.clamp(MIN_SCALE, MAX_SCALE))
    }
}

impl<'de> Deserialize<'de> for ScaleFactor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = f32::deserialize(deserializer)?;
        Ok(ScaleFactor::from(value))
    }
}

impl From<ScaleFactor> for f32 {
    fn from(value: ScaleFactor) -> Self {
        value.0
    }
}

/// Saved-state load/save failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_scale_factor_is_clamped() {
        let too_big: ScaleFactor = serde_json::from_str("10.0").unwrap();
        assert_eq!(f32::from(too_big), MAX_SCALE);

        let too_small: ScaleFactor = serde_json::from_str("0.1").unwrap();
        assert_eq!(f32::from(too_small), MIN_SCALE);

        let in_range: ScaleFactor = serde_json::from_str("1.2").unwrap();
        assert_eq!(f32::from(in_range), 1.2);
    }
}
