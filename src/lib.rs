//! # Transmission Models
//!
//! Motion-control mappings for a robotic arm driven through a coupled
//! transmission: a 4-input/3-output differential and the gear trains that
//! feed it.
//!
//! ## Crate layout
//!
//! - [`models`]: The transmission models themselves: the differential's
//!   output-to-input delta transform and the gear-train ratio engine.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Scope
//!
//! Everything here is single-step, pure computation: given a desired change
//! in the arm's three output motions, the differential solver returns the
//! four actuator deltas that produce it; given a chain of meshed and coaxial
//! gear placements, the gear train derives its end-to-end ratio and net
//! direction flip. Trajectory generation, calibration, and hardware I/O are
//! the caller's business.
//!
//! Angular deltas are [`uom::si::f64::Angle`] quantities and gear ratios are
//! [`uom::si::f64::Ratio`] quantities throughout the public API.

pub mod models;
pub mod support;
