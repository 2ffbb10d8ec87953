//! Projection, reflection and distance for points and lines.

use super::{BiVec2dp, Vec2dp};
use crate::traits::{
    ProjectOnto, ReflectOn, RegressiveGeometric, RegressiveWedge, RightBulkExpansion,
    RightWeightExpansion, Unitize, WeightNorm, Wedge,
};
use num_traits::Float;

/// Orthogonal projection: the line through `p` perpendicular to `l`, met with `l`.
impl<T: Float> ProjectOnto<BiVec2dp<T>> for Vec2dp<T> {
    #[inline]
    fn project_onto(self, l: BiVec2dp<T>) -> Self {
        l.rwdg(self.right_weight_expand(l))
    }
}

/// Mirror image of a point in a line.
impl<T: Float> ReflectOn<BiVec2dp<T>> for Vec2dp<T> {
    #[inline]
    fn reflect_on(self, l: BiVec2dp<T>) -> Self {
        -l.rgpr(self).rgpr(l).gr1()
    }
}

/// Mirror image of a line in another line.
impl<T: Float> ReflectOn<BiVec2dp<T>> for BiVec2dp<T> {
    #[inline]
    fn reflect_on(self, l: BiVec2dp<T>) -> Self {
        l.rgpr(self).rgpr(l).gr2()
    }
}

/// Central projection of `p` onto `l` along the line through `p` and the origin.
#[inline]
pub fn central_project_onto<T: Float>(p: Vec2dp<T>, l: BiVec2dp<T>) -> Vec2dp<T> {
    l.rwdg(p.right_bulk_expand(l))
}

/// Euclidean distance between two points.
#[inline]
pub fn dist2dp<T: Float>(p: Vec2dp<T>, q: Vec2dp<T>) -> T {
    p.unitize().wdg(q.unitize()).weight_nrm().value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pga2dp::{direction, horizon, line, point};
    use crate::traits::Attitude;

    #[test]
    fn orthogonal_projection_onto_line() {
        let l = line(point(0., 1.), point(1., 1.));
        assert_eq!(point(3., 1.), point(3., 5.).project_onto(l).unitize());

        let diagonal = line(point(0., 0.), point(1., 1.));
        assert_eq!(point(1., 1.), point(2., 0.).project_onto(diagonal).unitize());
    }

    #[test]
    fn projection_is_independent_of_line_scale() {
        let l = line(point(0., 1.), point(1., 1.));
        let p = point(-4., 2.);
        assert_eq!(p.project_onto(l).unitize(), p.project_onto(l * 7.).unitize());
    }

    #[test]
    fn central_projection_moves_toward_origin() {
        let l = line(point(0., 1.), point(1., 1.));
        assert_eq!(point(0.6, 1.), central_project_onto(point(3., 5.), l).unitize());
    }

    #[test]
    fn reflection_in_line() {
        let l = line(point(0., 1.), point(1., 1.));
        assert_eq!(point(3., -3.), point(3., 5.).reflect_on(l));

        let x_axis = line(point(0., 0.), point(1., 0.));
        let m = line(point(0., 1.), point(1., 2.));
        assert_eq!(line(point(0., -1.), point(1., -2.)), m.reflect_on(x_axis));
    }

    #[test]
    fn distance_between_points() {
        assert_eq!(5., dist2dp(point(0., 0.), point(3., 4.)));
        assert_eq!(5., dist2dp(Vec2dp::new(0., 0., 2.), Vec2dp::new(-6., -8., -2.)));
    }

    #[test]
    fn attitude_of_line_is_its_direction() {
        let l = line(point(1_f64, 1.), point(4., 5.));
        assert_eq!(l.rwdg(horizon::<f64>()), l.att());
        assert_eq!(direction(3., 4.), l.att());
    }
}
