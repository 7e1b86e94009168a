//! Text-Fit Sizer
//!
//! Coarse step function: every `step_chars` characters the longest word runs
//! past `chunk_threshold` costs `step_points`, never going below `min_size`.

use crate::profile::SizingRule;

/// Longest whitespace-delimited chunk, first occurrence on ties.
pub fn longest_chunk(name: &str) -> &str {
    name.split_whitespace().fold("", |longest, chunk| {
        if chunk.chars().count() > longest.chars().count() {
            chunk
        } else {
            longest
        }
    })
}

impl SizingRule {
    pub fn size_for(&self, name: &str) -> u32 {
        let longest = longest_chunk(name).chars().count();
        if longest <= self.chunk_threshold {
            return self.base_size;
        }

        let excess = longest - self.chunk_threshold;
        let steps = excess.checked_div(self.step_chars).unwrap_or(0);
        let reduction = u32::try_from(steps)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.step_points);

        self.base_size.saturating_sub(reduction).max(self.min_size)
    }
}

/// Name size under the reference rule (40pt default, 20pt floor).
pub fn compute_name_font_size(name: &str) -> u32 {
    SizingRule::default().size_for(name)
}
