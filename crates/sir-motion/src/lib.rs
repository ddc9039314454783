//! `sir-motion`: per-step agent movement.
//!
//! # Crate layout
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`model`]  | `MotionModel` trait, `Move` result                     |
//! | [`bounce`] | `BounceMotion`: constant speed, optional heading jitter, reflection at walls |
//!
//! Motion is the first pass of every step.  It only touches `position` and
//! `heading`; health state is never read or written here.

pub mod bounce;
pub mod model;

#[cfg(test)]
mod tests;

pub use bounce::BounceMotion;
pub use model::{Move, MotionModel, Stationary};
