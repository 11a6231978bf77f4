use core::fmt;
use serde::{Deserialize, Serialize};

/// Order index carried by an element, `1..=N`.
pub type Order = u8;

/// Screen coordinate in CSS pixels.
pub type Px = i32;

/// Index of an element within its round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Absolute position of an element's top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub top: Px,
    pub left: Px,
}

impl Position {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(top: Px, left: Px) -> Self {
        Self { top, left }
    }
}

/// Visible area elements are placed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: Px,
    pub height: Px,
}

impl Viewport {
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

/// 24-bit RGB color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Color(u32);

impl Color {
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0xFF_FF_FF)
    }

    pub const fn rgb(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}
