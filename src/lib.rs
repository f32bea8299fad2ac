//! Closed-form crossings of charged-particle helices with planar measurement layers,
//! for use inside Kalman-filter track fits.
//!
//! The central piece is [`ParallelPlanarLayer`]: a detector plane parallel to the
//! solenoid (z) axis, placed at a distance and azimuth from it. Because its trace in
//! the transverse plane is a straight line, the crossing with a helix reduces to a
//! circle / line intersection that is solved exactly, without iteration:
//!
//! ```
//! use trackplane::{CrossingMode, CrossingOptions, Helix, ParallelPlanarLayer, SurfaceWithCrossing};
//! use nalgebra::{Point3, Vector3};
//!
//! let layer = ParallelPlanarLayer::builder(100.0, 0.0).bz(3.5).build().unwrap();
//! let helix = Helix::from_momentum(Point3::origin(), Vector3::new(1.0, 0.2, 0.3), 1.0, 3.5).unwrap();
//!
//! let crossing = layer
//!     .crossing(&helix, &CrossingOptions::with_mode(CrossingMode::Forward))
//!     .unwrap()
//!     .expect("a 1 GeV track reaches 10 cm");
//! assert!((crossing.point.x - 100.0).abs() < 1e-9);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod crossing;
pub mod errors;
pub mod float_types;
pub mod helix;
pub mod layer;
pub mod material;
pub mod traits;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use crossing::{Candidate, Candidates, Crossing, CrossingKind, CrossingMode, CrossingOptions};
pub use errors::GeometryError;
pub use helix::{Helix, HelixParameters, HelixTrajectory};
pub use layer::{ParallelPlanarLayer, ParallelPlanarLayerBuilder, PlanarLayer};
pub use material::Material;
pub use traits::SurfaceWithCrossing;
