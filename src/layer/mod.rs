//! Planar measurement layers
//!
//! A [`PlanarLayer`] is a finite rectangle lying in a plane parallel to the z axis.
//! Points on it are addressed by local coordinates `(xi, zeta)`:
//! `xi` runs along `ẑ × n` in the transverse plane, `zeta` along z, both measured
//! from the layer origin.

pub mod parallel;

pub use parallel::{ParallelPlanarLayer, ParallelPlanarLayerBuilder};

use crate::errors::GeometryError;
use crate::float_types::{ON_SURFACE_TOLERANCE, Real};
use crate::material::Material;
use nalgebra::{Point2, Point3, Unit, Vector3};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct PlanarLayer {
    origin: Point3<Real>,
    normal: Unit<Vector3<Real>>,
    /// Unit direction of increasing `xi`
    xi_axis: Unit<Vector3<Real>>,
    material_inner: Arc<Material>,
    material_outer: Arc<Material>,
    bz: Real,
    sorting_policy: Real,
    xi_width: Real,
    zeta_width: Real,
    xi_offset: Real,
    is_sensitive: bool,
    cell_id: i32,
    name: String,
}

impl PlanarLayer {
    /// Build a layer through `origin` with `normal` (need not be unit, must have no z
    /// component).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        material_inner: Arc<Material>,
        material_outer: Arc<Material>,
        origin: Point3<Real>,
        normal: Vector3<Real>,
        bz: Real,
        sorting_policy: Real,
        xi_width: Real,
        zeta_width: Real,
        xi_offset: Real,
        is_sensitive: bool,
        cell_id: i32,
        name: impl Into<String>,
    ) -> Result<Self, GeometryError> {
        let name = name.into();
        if !origin.coords.iter().all(|c| c.is_finite()) {
            return Err(GeometryError::DegenerateLayer(format!(
                "layer {} has a non-finite origin {}",
                name, origin
            )));
        }

        let perp = normal.xy().norm();
        if !perp.is_finite() || perp <= Real::EPSILON {
            return Err(GeometryError::DegenerateLayer(format!(
                "layer {} normal {} has no transverse component",
                name, normal
            )));
        }
        if normal.z.abs() > ON_SURFACE_TOLERANCE * perp {
            return Err(GeometryError::DegenerateLayer(format!(
                "layer {} normal {} is not perpendicular to the z axis",
                name, normal
            )));
        }

        for (label, width) in [("xi", xi_width), ("zeta", zeta_width)] {
            if !width.is_finite() || width < 0.0 {
                return Err(GeometryError::DegenerateLayer(format!(
                    "layer {} has invalid {} width {}",
                    name, label, width
                )));
            }
        }
        if !xi_offset.is_finite() {
            return Err(GeometryError::DegenerateLayer(format!(
                "layer {} has invalid xi offset {}",
                name, xi_offset
            )));
        }

        let normal = Unit::new_normalize(Vector3::new(normal.x, normal.y, 0.0));
        let xi_axis = Unit::new_unchecked(Vector3::new(-normal.y, normal.x, 0.0));

        Ok(Self {
            origin,
            normal,
            xi_axis,
            material_inner,
            material_outer,
            bz,
            sorting_policy,
            xi_width,
            zeta_width,
            xi_offset,
            is_sensitive,
            cell_id,
            name,
        })
    }

    pub const fn origin(&self) -> &Point3<Real> {
        &self.origin
    }

    pub const fn normal(&self) -> &Unit<Vector3<Real>> {
        &self.normal
    }

    pub const fn xi_axis(&self) -> &Unit<Vector3<Real>> {
        &self.xi_axis
    }

    pub fn material_inner(&self) -> &Material {
        &self.material_inner
    }

    pub fn material_outer(&self) -> &Material {
        &self.material_outer
    }

    pub const fn bz(&self) -> Real {
        self.bz
    }

    /// Key the surrounding layer catalogue sorts by
    pub const fn sorting_policy(&self) -> Real {
        self.sorting_policy
    }

    pub const fn xi_width(&self) -> Real {
        self.xi_width
    }

    pub const fn zeta_width(&self) -> Real {
        self.zeta_width
    }

    pub const fn xi_offset(&self) -> Real {
        self.xi_offset
    }

    pub const fn is_sensitive(&self) -> bool {
        self.is_sensitive
    }

    pub const fn cell_id(&self) -> i32 {
        self.cell_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Signed distance of `point` from the plane, positive on the side the normal
    /// points to.
    pub fn distance_to(&self, point: &Point3<Real>) -> Real {
        (point - self.origin).dot(self.normal.as_ref())
    }

    /// `(xi, zeta)` of `point` projected onto the plane
    pub fn local_coordinates(&self, point: &Point3<Real>) -> Point2<Real> {
        let rel = point - self.origin;
        Point2::new(rel.dot(self.xi_axis.as_ref()), rel.z)
    }

    /// Global position of the plane point with local coordinates `local`
    pub fn global_point(&self, local: &Point2<Real>) -> Point3<Real> {
        self.origin + self.xi_axis.into_inner() * local.x + Vector3::z() * local.y
    }

    /// Whether `point` lies on the plane and inside the layer's rectangle.
    pub fn is_on_surface(&self, point: &Point3<Real>) -> bool {
        if self.distance_to(point).abs() >= ON_SURFACE_TOLERANCE {
            return false;
        }

        let local = self.local_coordinates(point);
        let half_xi = 0.5 * self.xi_width;
        (local.x - self.xi_offset).abs() <= half_xi && local.y.abs() <= 0.5 * self.zeta_width
    }
}
