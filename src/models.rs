//! Transmission models.

pub mod differential;
pub mod gearing;
