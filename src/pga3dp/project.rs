//! Projection, reflection and distance for points, lines and planes.

use super::{BiVec3dp, TriVec3dp, Vec3dp};
use crate::traits::{
    ProjectOnto, ReflectOn, RegressiveGeometric, RegressiveWedge, RightBulkExpansion,
    RightWeightExpansion, Unitize, WeightNorm, Wedge,
};
use num_traits::Float;

/// Foot of the perpendicular from the point to the line.
impl<T: Float> ProjectOnto<BiVec3dp<T>> for Vec3dp<T> {
    #[inline]
    fn project_onto(self, l: BiVec3dp<T>) -> Self {
        l.rwdg(self.right_weight_expand(l))
    }
}

/// Foot of the perpendicular from the point to the plane.
impl<T: Float> ProjectOnto<TriVec3dp<T>> for Vec3dp<T> {
    #[inline]
    fn project_onto(self, pl: TriVec3dp<T>) -> Self {
        pl.rwdg(self.right_weight_expand(pl))
    }
}

/// Orthogonal projection of a line into a plane.
impl<T: Float> ProjectOnto<TriVec3dp<T>> for BiVec3dp<T> {
    #[inline]
    fn project_onto(self, pl: TriVec3dp<T>) -> Self {
        pl.rwdg(self.right_weight_expand(pl))
    }
}

/// Mirror image of a point in a unitized plane.
impl<T: Float> ReflectOn<TriVec3dp<T>> for Vec3dp<T> {
    #[inline]
    fn reflect_on(self, pl: TriVec3dp<T>) -> Self {
        pl.rgpr(self).rgpr(pl).gr1()
    }
}

/// Intersection of the plane with the line through `p` and the origin.
#[inline]
pub fn central_project_onto<T: Float>(p: Vec3dp<T>, pl: TriVec3dp<T>) -> Vec3dp<T> {
    pl.rwdg(p.right_bulk_expand(pl))
}

/// Euclidean distance between two points.
#[inline]
pub fn dist3dp<T: Float>(p: Vec3dp<T>, q: Vec3dp<T>) -> T {
    p.unitize().wdg(q.unitize()).weight_nrm().value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pga3dp::{direction, horizon, line, origin, plane, point};
    use crate::traits::Attitude;

    fn plane_z1() -> TriVec3dp<f64> {
        plane(point(0., 0., 1.), point(1., 0., 1.), point(0., 1., 1.))
    }

    #[test]
    fn point_onto_plane() {
        assert_eq!(TriVec3dp::new(0., 0., 1., -1.), plane_z1());
        assert_eq!(point(2., 3., 1.), point(2., 3., 5.).project_onto(plane_z1()).unitize());
    }

    #[test]
    fn point_onto_line() {
        let l = line(point(0., 0., 1.), point(1., 0., 1.));
        assert_eq!(point(2., 0., 1.), point(2., 3., 5.).project_onto(l).unitize());
    }

    #[test]
    fn line_onto_plane() {
        let l = line(origin(), point(1., 1., 1.));
        let expected = line(point(0., 0., 1.), point(1., 1., 1.));
        assert_eq!(expected, l.project_onto(plane_z1()));

        let floor = plane(origin(), point(1_f64, 0., 0.), point(0., 1., 0.));
        let l = line(point(1., 0., 2.), point(3., 1., 5.));
        assert_eq!(line(point(1., 0., 0.), point(3., 1., 0.)), l.project_onto(floor));
    }

    #[test]
    fn central_projection_moves_toward_origin() {
        let p = central_project_onto(point(2., 3., 5.), plane_z1());
        assert_eq!(point(0.4, 0.6, 1.), p.unitize());
    }

    #[test]
    fn reflection_in_plane() {
        assert_eq!(point(2., 3., -3.), point(2., 3., 5.).reflect_on(plane_z1()));

        let x1 = plane(point(1., 0., 0.), point(1., 1., 0.), point(1., 0., 1.)).unitize();
        assert_eq!(point(-1., 2., 1.), point(3., 2., 1.).reflect_on(x1));
    }

    #[test]
    fn distance_between_points() {
        assert_eq!(3., dist3dp(point(1., 2., 3.), point(3., 4., 4.)));
    }

    #[test]
    fn attitude() {
        let l = line(point(1_f64, 1., 1.), point(2., 3., 4.));
        assert_eq!(direction(1., 2., 3.), l.att());
        assert_eq!(l.rwdg(horizon::<f64>()), l.att());

        let floor = plane(origin(), point(1_f64, 0., 0.), point(0., 1., 0.));
        assert_eq!(BiVec3dp::new(0., 0., 0., 0., 0., 1.), floor.att());
        assert_eq!(floor.rwdg(horizon::<f64>()), floor.att());
    }
}
