use rand::prelude::*;

use crate::*;

/// Yields `count` positions in reading order: left to right, wrapping to a new row whenever the next
/// element would cross the right edge of the viewport.
#[derive(Debug)]
pub struct ReadingOrder {
    metrics: ElementMetrics,
    viewport_width: Px,
    next: Position,
    remaining: usize,
}

impl ReadingOrder {
    pub fn new(count: usize, viewport: Viewport, metrics: ElementMetrics) -> Self {
        Self {
            metrics,
            viewport_width: viewport.width,
            next: Position::ORIGIN,
            remaining: count,
        }
    }
}

impl Iterator for ReadingOrder {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let step_x = self.metrics.outer_width();
        // never wrap an empty row, a single element wider than the viewport still needs a slot
        if self.next.left > 0 && self.next.left + step_x > self.viewport_width {
            self.next = Position::new(self.next.top + self.metrics.outer_height(), 0);
        }

        let current = self.next;
        self.next.left += step_x;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ReadingOrder {}

/// Uniformly random position at which an element stays fully visible.
pub fn random_position(rng: &mut SmallRng, viewport: Viewport, metrics: ElementMetrics) -> Position {
    let max = metrics.max_position(viewport);
    Position::new(rng.random_range(0..=max.top), rng.random_range(0..=max.left))
}
