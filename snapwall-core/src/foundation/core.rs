pub use kurbo::{Point, Rect, Size, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Opaque photo identifier, assigned at capture time and unique within a
/// session (across the current photo and every wall photo).
pub struct PhotoId(pub u64);

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Session-relative timestamp in milliseconds.
///
/// The engine never reads a wall clock; the presentation layer pumps time in
/// through [`crate::Session::advance_to`], and tests simulate it directly.
pub struct TimeMs(pub u64);

impl TimeMs {
    /// Session start.
    pub const ZERO: TimeMs = TimeMs(0);

    /// This timestamp plus `ms`, saturating at the numeric ceiling.
    pub fn saturating_add(self, ms: u64) -> TimeMs {
        TimeMs(self.0.saturating_add(ms))
    }
}

#[derive(Clone, Copy, Debug)]
/// Small deterministic RNG used for caption selection.
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seed the generator; equal seeds reproduce the same sequence.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next value in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
