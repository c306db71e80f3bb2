//! Trapped-water computation.
//!
//! Three linear passes: running maximum from the left, running maximum from
//! the right, then `water[i] = min(left_max[i], right_max[i]) - height[i]`
//! clipped at zero.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Per-column water levels for one height sequence.
///
/// Built fresh by [`WaterProfile::compute`]; nothing is shared between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterProfile {
    /// Highest column in `[0..=i]`
    pub left_max: Vec<u32>,
    /// Highest column in `[i..n]`
    pub right_max: Vec<u32>,
    /// Depth of water resting above column `i`
    pub water: Vec<u32>,
    /// Sum of `water`
    pub total: u64,
}

impl WaterProfile {
    /// Compute the profile for `heights`.
    #[must_use]
    pub fn compute(heights: &[u32]) -> Self {
        let n = heights.len();
        if n == 0 {
            return Self::default();
        }

        let mut left_max = Vec::with_capacity(n);
        let mut running = 0;
        for &h in heights {
            running = running.max(h);
            left_max.push(running);
        }

        let mut right_max = vec![0; n];
        running = 0;
        for (i, &h) in heights.iter().enumerate().rev() {
            running = running.max(h);
            right_max[i] = running;
        }

        let mut water = Vec::with_capacity(n);
        let mut total = 0u64;
        for (i, &h) in heights.iter().enumerate() {
            let depth = left_max[i].min(right_max[i]).saturating_sub(h);
            water.push(depth);
            total += u64::from(depth);
        }

        Self {
            left_max,
            right_max,
            water,
            total,
        }
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.water.len()
    }

    /// True when there are no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.water.is_empty()
    }

    /// Tallest stacked column (block plus water), zero for an empty profile.
    #[must_use]
    pub fn max_level(&self, heights: &[u32]) -> u64 {
        heights
            .iter()
            .zip(&self.water)
            .map(|(&h, &w)| u64::from(h) + u64::from(w))
            .max()
            .unwrap_or(0)
    }

    /// Maximal runs of columns holding water.
    #[must_use]
    pub fn basins(&self) -> Vec<Range<usize>> {
        let mut basins = Vec::new();
        let mut start = None;
        for (i, &w) in self.water.iter().enumerate() {
            match (w > 0, start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    basins.push(s..i);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            basins.push(s..self.water.len());
        }
        basins
    }
}
