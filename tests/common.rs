#![allow(dead_code)]

//! Shared helpers: a seeded LCG so randomized comparisons are reproducible.

/// Linear congruential generator (same multiplier/increment family as the
/// synth's noise source).
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn next_word(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// A sample in [-1.5, 1.5), wide enough to exercise Q23 saturation on
    /// both rails.
    pub fn next_sample(&mut self) -> f32 {
        (self.next_word() as f32 / 4294967296.0 - 0.5) * 3.0
    }

    pub fn fill_block(&mut self, len: usize) -> Vec<f32> {
        (0..len).map(|_| self.next_sample()).collect()
    }
}
