//! Helix / surface crossings
//!
//! A crossing query first collects every geometric solution as [`Candidates`]
//! (none, one tangent point, or a pair) and then picks one of them according to a
//! [`CrossingMode`]. Everything here is `Copy` and allocation-free so it can sit inside
//! a fit loop.

pub mod solver;

use crate::errors::GeometryError;
use crate::float_types::{Real, TAU, tolerance};
use crate::helix::HelixTrajectory;
use nalgebra::{Point2, Point3};

/// Which of two geometric solutions a crossing query should report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrossingMode {
    /// Smallest turn angle from the helix reference point, in either direction.
    #[default]
    Nearest,
    /// First crossing reached when moving along the direction of travel.
    Forward,
    /// First crossing reached when moving against the direction of travel.
    Backward,
}

impl CrossingMode {
    /// Legacy integer encoding: `0` nearest, `+1` forward, `-1` backward.
    pub const fn code(self) -> i32 {
        match self {
            CrossingMode::Nearest => 0,
            CrossingMode::Forward => 1,
            CrossingMode::Backward => -1,
        }
    }

    /// Shift `candidate` by a full turn where needed so that it lies on the requested
    /// side of the reference point. Nearest mode leaves it untouched.
    fn orient<H: HelixTrajectory + ?Sized>(self, candidate: Candidate, helix: &H) -> Candidate {
        let turn = TAU * helix.signed_radius().signum();
        let s = helix.arc_length(candidate.phi);
        let phi = match self {
            CrossingMode::Nearest => return candidate,
            CrossingMode::Forward if s < 0.0 => candidate.phi - turn,
            CrossingMode::Backward if s > 0.0 => candidate.phi + turn,
            _ => return candidate,
        };
        Candidate::on_helix(candidate.point.xy(), phi, helix)
    }

    /// Ordering key, smaller wins.
    fn key<H: HelixTrajectory + ?Sized>(self, candidate: &Candidate, helix: &H) -> Real {
        match self {
            CrossingMode::Nearest => candidate.phi.abs(),
            CrossingMode::Forward | CrossingMode::Backward => helix.arc_length(candidate.phi).abs(),
        }
    }
}

impl TryFrom<i32> for CrossingMode {
    type Error = GeometryError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(CrossingMode::Nearest),
            1 => Ok(CrossingMode::Forward),
            -1 => Ok(CrossingMode::Backward),
            other => Err(GeometryError::InvalidMode(other)),
        }
    }
}

/// Named options of a crossing query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingOptions {
    pub mode: CrossingMode,
    /// Length tolerance separating the tangent case from the miss and secant cases.
    pub eps: Real,
    /// Report a crossing only when the selected point lies within the finite layer.
    pub require_on_surface: bool,
}

impl Default for CrossingOptions {
    fn default() -> Self {
        Self {
            mode: CrossingMode::Nearest,
            eps: tolerance(),
            require_on_surface: false,
        }
    }
}

impl CrossingOptions {
    pub fn with_mode(mode: CrossingMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub const fn eps(mut self, eps: Real) -> Self {
        self.eps = eps;
        self
    }

    pub const fn require_on_surface(mut self, require: bool) -> Self {
        self.require_on_surface = require;
        self
    }
}

/// One geometric solution: a point on both the helix and the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub point: Point3<Real>,
    /// Helix turn angle at `point`
    pub phi: Real,
}

impl Candidate {
    /// Lift a transverse solution onto the helix: the axial coordinate follows the
    /// helix at `phi`, the transverse coordinates are kept as solved.
    pub fn on_helix<H: HelixTrajectory + ?Sized>(transverse: Point2<Real>, phi: Real, helix: &H) -> Self {
        let z = helix.point_at(phi).z;
        Self {
            point: Point3::new(transverse.x, transverse.y, z),
            phi,
        }
    }
}

/// All solutions of a helix / surface intersection before disambiguation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Candidates {
    None,
    Tangent(Candidate),
    Pair(Candidate, Candidate),
}

impl Candidates {
    pub const fn len(&self) -> usize {
        match self {
            Candidates::None => 0,
            Candidates::Tangent(_) => 1,
            Candidates::Pair(..) => 2,
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Candidates::None)
    }

    /// Pick one solution according to `mode`. On an exact tie the candidate with the
    /// smaller turn angle wins.
    pub fn select<H: HelixTrajectory + ?Sized>(
        self,
        mode: CrossingMode,
        helix: &H,
    ) -> Option<(Candidate, CrossingKind)> {
        match self {
            Candidates::None => None,
            Candidates::Tangent(c) => Some((mode.orient(c, helix), CrossingKind::Tangent)),
            Candidates::Pair(a, b) => {
                let a = mode.orient(a, helix);
                let b = mode.orient(b, helix);
                let order = mode
                    .key(&a, helix)
                    .total_cmp(&mode.key(&b, helix))
                    .then(a.phi.total_cmp(&b.phi));
                let chosen = if order.is_le() { a } else { b };
                Some((chosen, CrossingKind::Secant))
            },
        }
    }
}

/// How the accepted crossing was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossingKind {
    /// The helix touches the surface line in a single point.
    Tangent,
    /// One of two proper intersections.
    Secant,
}

impl CrossingKind {
    /// Status code of an accepted crossing: `1` tangent, `2` secant.
    pub const fn status(self) -> i32 {
        match self {
            CrossingKind::Tangent => 1,
            CrossingKind::Secant => 2,
        }
    }
}

/// The accepted crossing of a helix with a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Crossing point in the global frame
    pub point: Point3<Real>,
    /// Crossing point in the surface's `(xi, zeta)` frame
    pub local: Point2<Real>,
    /// Helix turn angle at the crossing
    pub phi: Real,
    pub kind: CrossingKind,
}

impl Crossing {
    pub const fn status(&self) -> i32 {
        self.kind.status()
    }
}

/// Status code of a crossing query result: `0` when nothing was accepted.
pub fn status_code(crossing: Option<&Crossing>) -> i32 {
    crossing.map_or(0, Crossing::status)
}
