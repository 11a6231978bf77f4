use serde::{Deserialize, Serialize};

use crate::*;

/// On-screen footprint of an element, in CSS pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementMetrics {
    pub width: Px,
    pub height: Px,
    pub margin: Px,
}

impl ElementMetrics {
    /// Horizontal space one element occupies including its margin on both sides.
    pub const fn outer_width(&self) -> Px {
        self.width + 2 * self.margin
    }

    pub const fn outer_height(&self) -> Px {
        self.height + 2 * self.margin
    }

    /// Largest `(top, left)` an element may be placed at and still be fully inside `viewport`.
    pub fn max_position(&self, viewport: Viewport) -> Position {
        Position::new(
            (viewport.height - self.outer_height()).max(0),
            (viewport.width - self.outer_width()).max(0),
        )
    }
}

impl Default for ElementMetrics {
    fn default() -> Self {
        Self {
            width: 160,
            height: 80,
            margin: 10,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Time between two shuffle steps.
    pub shuffle_period_ms: u32,
    /// Time between a click and the validation of the sequence, so the revealed label can render.
    pub validation_delay_ms: u32,
    pub metrics: ElementMetrics,
}

impl GameConfig {
    pub const DEFAULT_SHUFFLE_PERIOD_MS: u32 = 2000;
    pub const DEFAULT_VALIDATION_DELAY_MS: u32 = 100;

    pub fn with_shuffle_period(self, shuffle_period_ms: u32) -> Self {
        Self {
            shuffle_period_ms: shuffle_period_ms.max(1),
            ..self
        }
    }

    pub fn with_validation_delay(self, validation_delay_ms: u32) -> Self {
        Self {
            validation_delay_ms,
            ..self
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            shuffle_period_ms: Self::DEFAULT_SHUFFLE_PERIOD_MS,
            validation_delay_ms: Self::DEFAULT_VALIDATION_DELAY_MS,
            metrics: Default::default(),
        }
    }
}
