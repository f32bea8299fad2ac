//! Material descriptors for the media on either side of a measurement layer.
//!
//! Materials are only carried as bookkeeping here; energy-loss and scattering
//! computations belong to the track fit.

use crate::float_types::Real;

/// An immutable description of a detector medium.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    name: String,
    /// Density in g/cm³
    density: Real,
    /// Radiation length in mm
    radiation_length: Real,
}

impl Material {
    pub fn new(name: impl Into<String>, density: Real, radiation_length: Real) -> Self {
        Self {
            name: name.into(),
            density,
            radiation_length,
        }
    }

    /// Near-empty medium used for gaps between layers.
    pub fn vacuum() -> Self {
        Self::new("vacuum", 1e-25, Real::MAX)
    }

    /// Bulk silicon.
    pub fn silicon() -> Self {
        Self::new("silicon", 2.33, 93.7)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn density(&self) -> Real {
        self.density
    }

    pub const fn radiation_length(&self) -> Real {
        self.radiation_length
    }

    /// Thickness `t` (mm) expressed in radiation lengths.
    pub fn thickness_in_radiation_lengths(&self, thickness: Real) -> Real {
        thickness / self.radiation_length
    }
}
