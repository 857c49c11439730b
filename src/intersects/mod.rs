pub mod plane_plane;

pub use plane_plane::*;

/// Intersection between two objects trait
pub trait Intersects<'a, T> {
    type Output;
    type Option;

    fn find_intersection(&'a self, other: T, option: Self::Option) -> Self::Output;
}
