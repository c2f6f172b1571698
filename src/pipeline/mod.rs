//! Composable transformation pipelines.
//!
//! - [`compose`], [`pipe`] and the `compose!`/`pipe!` macros chain plain functions
//! - [`Transform`] is the step interface; [`bind`] and [`from_fn`] adapt free
//!   functions and closures into steps
//! - [`Pipeline`] holds an input series and an immutable, growable chain of steps

mod chain;
mod compose;
mod transform;

pub use chain::Pipeline;
pub use compose::{compose, compose2, identity, pipe, pipe2, try_pipe2};
pub use transform::{
    bind, from_fn, Bound, Detect, Difference, FnTransform, MovingAverage, Normalize,
    SlidingWindow, Transform,
};
