#![no_std]

pub mod detector;
pub mod full_math;

pub use detector::*;
pub use full_math::*;
