//! Engine of the Recallo memory game: elements are shown in order, shuffled around the screen with
//! their labels hidden, and must be clicked back in their original order.

#![no_std]

extern crate alloc;

pub use config::*;
pub use controller::*;
pub use element::*;
pub use error::*;
pub use input::*;
pub use layout::*;
pub use messages::*;
pub use palette::*;
pub use round::*;
pub use scheduler::*;
pub use types::*;

mod config;
mod controller;
mod element;
mod error;
mod input;
mod layout;
mod messages;
mod palette;
mod round;
mod scheduler;
mod types;
