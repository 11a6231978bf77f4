use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;

/// Picks `count` distinct random colors.
pub fn distinct_colors(rng: &mut SmallRng, count: usize) -> Vec<Color> {
    let mut picked = BTreeSet::new();
    let mut colors = Vec::with_capacity(count);

    while colors.len() < count {
        let color = Color::from_rgb(rng.random_range(0..=0xFF_FF_FF));
        if picked.insert(color) {
            colors.push(color);
        } else {
            log::trace!("color {} already used, drawing again", color);
        }
    }

    colors
}
