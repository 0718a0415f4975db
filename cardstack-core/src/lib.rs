//! Interaction model for the stacked card screen.
//!
//! Platform-free logic shared by the mobile frontend: layout constants,
//! piecewise-linear interpolation, the drag/release state machine, the
//! snap spring, and the scroll-to-pose presentation mapping. Everything
//! here is plain math over `f64`s so it can be tested on the host.

pub mod gesture;
pub mod interpolate;
pub mod layout;
pub mod presentation;
pub mod spring;

pub use gesture::CardStack;
pub use interpolate::{Interpolation, MotionError};
pub use layout::{CardMetrics, Layout, Viewport};
pub use presentation::{CardPose, PoseMapper};
pub use spring::{Spring, SpringConfig};
