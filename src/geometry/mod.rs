//! Coordinate spaces and the element model.
//!
//! Elements are placed in [`CartesianSpace`]: the origin is the midpoint of the canvas and
//! `y` points up. Drawing happens in [`DeviceSpace`], with the origin in the top-left corner
//! and `y` pointing down.

use euclid::{Point2D, Box2D, Size2D};

pub mod shapes;
pub use shapes::*;

/// Canvas coordinate basis, centered, `y` up
#[derive(Debug, Copy, Clone)]
pub struct CartesianSpace;
/// Pixel coordinate basis, top-left origin, `y` down
#[derive(Debug, Copy, Clone)]
pub struct DeviceSpace;

pub type P2 = Point2D<f64, CartesianSpace>;

/// Side of the square drawing canvas, in logical units.
pub const CANVAS_SIDE: u32 = 600;

pub fn canvas_size() -> Size2D<u32, DeviceSpace> {
  Size2D::new(CANVAS_SIDE, CANVAS_SIDE)
}

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// `x' = width / 2 + x`, `y' = height / 2 - y`.
///
/// Coordinates are truncated to whole units before the translation.
pub fn to_device_space(
  point: P2,
  resolution: Size2D<u32, DeviceSpace>
) -> Point2D<i32, DeviceSpace> {
  Point2D::new(
    (resolution.width / 2) as i32 + point.x as i32,
    (resolution.height / 2) as i32 - point.y as i32
  )
}
