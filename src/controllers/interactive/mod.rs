//! Interactive exploration: the fixed-cadence control loop body and the
//! ports it presents frames through.

pub mod cadence;
pub mod data;
pub mod ports;
pub mod session;
