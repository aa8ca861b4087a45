//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: concrete gateway implementations.

pub mod adapters;
pub mod ports;
