use crate::crossing::{Candidates, Crossing, CrossingOptions, solver::check_tolerance};
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::helix::HelixTrajectory;
use crate::layer::PlanarLayer;
use nalgebra::Point3;

/// A measurement surface that can compute where a helix crosses it.
///
/// Implementors only provide the geometric solutions ([`candidates`](Self::candidates));
/// selection, status reporting and the finite-extent check are shared.
pub trait SurfaceWithCrossing {
    /// The planar layer description backing this surface
    fn layer(&self) -> &PlanarLayer;

    /// Every intersection of `helix` with the infinite surface, before disambiguation.
    fn candidates(
        &self,
        helix: &dyn HelixTrajectory,
        eps: Real,
    ) -> Result<Candidates, GeometryError>;

    /// Whether `point` lies within the finite extent of the surface.
    fn is_on_surface(&self, point: &Point3<Real>) -> bool {
        self.layer().is_on_surface(point)
    }

    /// The crossing of `helix` with this surface selected by `options.mode`.
    ///
    /// Returns `Ok(None)` when the helix misses the surface (status `0`), and when
    /// `options.require_on_surface` is set and the selected point lies outside it.
    fn crossing(
        &self,
        helix: &dyn HelixTrajectory,
        options: &CrossingOptions,
    ) -> Result<Option<Crossing>, GeometryError> {
        check_tolerance(options.eps)?;

        let Some((candidate, kind)) = self.candidates(helix, options.eps)?.select(options.mode, helix) else {
            return Ok(None);
        };

        if options.require_on_surface && !self.is_on_surface(&candidate.point) {
            log::trace!(
                "crossing at {} lies outside layer {}",
                candidate.point,
                self.layer().name()
            );
            return Ok(None);
        }

        log::trace!(
            "helix crosses layer {} at {} (phi = {}, {:?})",
            self.layer().name(),
            candidate.point,
            candidate.phi,
            kind
        );

        Ok(Some(Crossing {
            point: candidate.point,
            local: self.layer().local_coordinates(&candidate.point),
            phi: candidate.phi,
            kind,
        }))
    }
}
