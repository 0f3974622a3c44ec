//! World Module
//!
//! Contains the static spherical bodies the game takes place on.
//!
//! ## Default World
//! Three small planets close enough to hop between. Each body has its own
//! gravity well; whichever surface is nearest is the one you stand on.

pub mod planets;

pub use planets::{Body, BodyId, PlanetRegistry};
