#![no_std]

pub mod full_math;
pub mod reserve_math;
pub mod swap_math;

pub use full_math::*;
pub use reserve_math::*;
pub use swap_math::*;
