//! Core value types shared by every system.

pub mod math;

pub use math::Vec2;
