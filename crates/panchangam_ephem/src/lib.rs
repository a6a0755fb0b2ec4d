//! Ephemeris provider capability consumed by the panchangam engine.
//!
//! The engine needs only four astronomical answers: Sun longitude, Moon
//! longitude, sunrise, and sunset. Any implementation meeting the
//! [`EphemerisProvider`] contract is interchangeable: a Moshier-style
//! analytic engine, a full JPL-kernel engine, or the deterministic stubs
//! shipped here for tests and demos.

pub mod error;
pub mod provider;
pub mod stub;

pub use error::EphemerisError;
pub use provider::{EphemerisProvider, GeoLocation};
pub use stub::{FixedEphemeris, MeanMotionEphemeris};
