//! Gear and gear-train ratio models.
//!
//! A [`Gear`] is an immutable value: an identity plus a positive tooth count,
//! with a private memo of the pairwise ratios it has been asked for. A
//! [`GearTrain`] chains gears through meshed and coaxial placements and
//! derives the end-to-end speed ratio and net rotational direction flip from
//! its first gear to its last.

pub mod gear;
pub mod train;

pub use gear::{Gear, GearId, InvalidGearError};
pub use train::{CapacityError, DegenerateTrainError, GearTrain, Placement};
