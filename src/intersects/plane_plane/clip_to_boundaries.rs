use itertools::Itertools;
use nalgebra::Point3;

use crate::{
    misc::{
        edge_parameter_tolerance, geometric_epsilon, minimum_segment_separation, FloatingPoint,
        PlanarPolygon, Ray, Segment,
    },
    plane::TrackedPlane,
};

use super::{compute_infinite_intersection, PlaneIntersectionError};

/// Which plane's boundary produced a crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    First,
    Second,
}

#[derive(Debug, Clone)]
struct Crossing<T: FloatingPoint> {
    point: Point3<T>,
    source: Source,
}

/// Clip the intersection line of two planes to both boundary polygons.
///
/// Boundary edges of each plane are intersected with the other plane. A crossing is kept when it
/// lies inside its own polygon (boundary inclusive, tested in the polygon's local frame):
/// * two or more crossings: the farthest pair is the segment
/// * a single crossing: the segment runs to the closest projection of the other boundary onto the line
/// * none: the segment joins the closest projections of both boundaries
///
/// Projections land on the line shared by both planes. They only consider boundary vertices
/// closer than `max_distance` to the line, and the projected point must lie within `max_distance`
/// of the reference point from [`compute_infinite_intersection`].
pub fn clip_to_boundaries<T: FloatingPoint>(
    a: &TrackedPlane<T>,
    b: &TrackedPlane<T>,
    max_distance: T,
) -> Result<Segment<T>, PlaneIntersectionError> {
    if !a.has_boundary() || !b.has_boundary() {
        return Err(PlaneIntersectionError::EmptyBoundary);
    }

    let line = compute_infinite_intersection(a, b)?;
    let reference = line.origin();

    // Both normals have a usable length once the cross product passed
    let (polygon_a, polygon_b) = a
        .polygon()
        .zip(b.polygon())
        .ok_or(PlaneIntersectionError::ParallelPlanes)?;
    let shared = a
        .plane()
        .intersect_plane(&b.plane(), geometric_epsilon())
        .ok_or(PlaneIntersectionError::ParallelPlanes)?;

    let crossings = merge_coincident(
        boundary_crossings(a, b, &polygon_a, Source::First)
            .chain(boundary_crossings(b, a, &polygon_b, Source::Second))
            .collect(),
    );

    let project = |plane: &TrackedPlane<T>| {
        closest_boundary_projection(&shared, reference, plane.boundary(), max_distance)
            .ok_or(PlaneIntersectionError::NoOverlap)
    };

    match crossings.as_slice() {
        [] => separated(project(a)?, project(b)?),
        [single] => {
            let other = match single.source {
                Source::First => b,
                Source::Second => a,
            };
            separated(single.point, project(other)?)
        }
        _ => {
            let (start, end) = farthest_pair(&crossings);
            separated(start, end)
        }
    }
}

/// Crossings of `origin`'s boundary edges with the plane supporting `other`,
/// kept when they lie inside `origin`'s own polygon.
fn boundary_crossings<'a, T: FloatingPoint>(
    origin: &'a TrackedPlane<T>,
    other: &TrackedPlane<T>,
    polygon: &'a PlanarPolygon<T>,
    source: Source,
) -> impl Iterator<Item = Crossing<T>> + 'a {
    let plane = other.plane();
    let epsilon = geometric_epsilon();
    let tolerance = edge_parameter_tolerance();

    origin
        .edges()
        .filter_map(move |edge| plane.intersect_segment(&edge, epsilon, tolerance))
        .filter(move |p| polygon.contains(p, tolerance))
        .map(move |point| Crossing { point, source })
}

/// Drop crossings closer than the minimum separation to an earlier one.
/// Adjacent edges sharing a vertex on the line, or both boundaries crossing at the same spot,
/// report the same point more than once.
fn merge_coincident<T: FloatingPoint>(crossings: Vec<Crossing<T>>) -> Vec<Crossing<T>> {
    let separation = minimum_segment_separation::<T>();
    crossings.into_iter().fold(vec![], |mut merged, crossing| {
        if merged
            .iter()
            .all(|c: &Crossing<T>| (c.point - crossing.point).norm() > separation)
        {
            merged.push(crossing);
        }
        merged
    })
}

/// Exhaustive search for the two crossings farthest apart, the first maximum in scan order wins.
fn farthest_pair<T: FloatingPoint>(crossings: &[Crossing<T>]) -> (Point3<T>, Point3<T>) {
    let first = (crossings[0].point, crossings[1].point);
    let (_, pair) = crossings.iter().tuple_combinations::<(_, _)>().fold(
        ((first.0 - first.1).norm(), first),
        |(best, pair), (p, q)| {
            let d = (p.point - q.point).norm();
            if d > best {
                (d, (p.point, q.point))
            } else {
                (best, pair)
            }
        },
    );
    pair
}

/// Project the boundary vertex nearest to the line onto it.
/// Vertices at `max_distance` or farther from the line are ignored, ties keep the first vertex.
/// The projection must lie within `max_distance` of `reference`.
fn closest_boundary_projection<T: FloatingPoint>(
    line: &Ray<T>,
    reference: &Point3<T>,
    boundary: &[Point3<T>],
    max_distance: T,
) -> Option<Point3<T>> {
    let (_, projected) = boundary
        .iter()
        .map(|v| {
            let (_, p) = line.project(v);
            ((v - p).norm(), p)
        })
        .filter(|(d, _)| *d < max_distance)
        .fold(None, |closest: Option<(T, Point3<T>)>, (d, p)| match closest {
            Some((best, _)) if best <= d => closest,
            _ => Some((d, p)),
        })?;

    ((projected - reference).norm() < max_distance).then_some(projected)
}

fn separated<T: FloatingPoint>(
    start: Point3<T>,
    end: Point3<T>,
) -> Result<Segment<T>, PlaneIntersectionError> {
    if (end - start).norm() > minimum_segment_separation() {
        Ok(Segment::new(start, end))
    } else {
        Err(PlaneIntersectionError::DegenerateSegment)
    }
}
