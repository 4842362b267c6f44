//! Signed distance functions of the primitives in device space.
//!
//! Negative inside, positive outside, measured in pixels.

use {
  euclid::{Angle, Box2D, Point2D, Vector2D as V2},
  crate::geometry::{BoundingBox, DeviceSpace}
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, DeviceSpace>) -> T;
}

/// Something inside a rectangular area of the canvas.
pub trait Shape: SDF<f32> + BoundingBox<f32, DeviceSpace> {
  #[cfg(feature = "drawing")]
  fn texture<T>(self, texture: T) -> crate::drawing::Texture<Self, T> where Self: Sized {
    crate::drawing::Texture { shape: self, texture }
  }
}
impl <T> Shape for T where T: SDF<f32> + BoundingBox<f32, DeviceSpace> {}

#[derive(Debug, Copy, Clone)]
pub struct Disc {
  pub center: Point2D<f32, DeviceSpace>,
  pub radius: f32
}

impl SDF<f32> for Disc {
  fn sdf(&self, pixel: Point2D<f32, DeviceSpace>) -> f32 {
    (pixel - self.center).length() - self.radius
  }
}

impl BoundingBox<f32, DeviceSpace> for Disc {
  fn bounding_box(&self) -> Box2D<f32, DeviceSpace> {
    Box2D::new(
      self.center - V2::splat(self.radius),
      self.center + V2::splat(self.radius)
    )
  }
}

/// Circle outline of a given stroke width, centered on `radius`.
#[derive(Debug, Copy, Clone)]
pub struct Ring {
  pub center: Point2D<f32, DeviceSpace>,
  pub radius: f32,
  pub width: f32
}

impl SDF<f32> for Ring {
  fn sdf(&self, pixel: Point2D<f32, DeviceSpace>) -> f32 {
    ((pixel - self.center).length() - self.radius).abs() - self.width / 2.0
  }
}

impl BoundingBox<f32, DeviceSpace> for Ring {
  fn bounding_box(&self) -> Box2D<f32, DeviceSpace> {
    let r = self.radius + self.width / 2.0;
    Box2D::new(
      self.center - V2::splat(r),
      self.center + V2::splat(r)
    )
  }
}

/// Part of a [`Ring`], from `start` to `start + sweep`, counter-clockwise as seen on screen.
/// Ends are rounded.
#[derive(Debug, Copy, Clone)]
pub struct ArcBand {
  pub ring: Ring,
  pub start: Angle<f32>,
  pub sweep: Angle<f32>
}

impl ArcBand {
  /// Screen point of the ring's centerline at `angle`.
  fn point_at(&self, angle: Angle<f32>) -> Point2D<f32, DeviceSpace> {
    let (sin, cos) = angle.sin_cos();
    self.ring.center + V2::new(cos, -sin) * self.ring.radius
  }
}

impl SDF<f32> for ArcBand {
  fn sdf(&self, pixel: Point2D<f32, DeviceSpace>) -> f32 {
    let v = pixel - self.ring.center;
    // screen y points down
    let angle = Angle::radians((-v.y).atan2(v.x));
    if (angle - self.start).positive().radians <= self.sweep.radians {
      return self.ring.sdf(pixel);
    }
    let cap = |a| (pixel - self.point_at(a)).length() - self.ring.width / 2.0;
    cap(self.start).min(cap(self.start + self.sweep))
  }
}

impl BoundingBox<f32, DeviceSpace> for ArcBand {
  fn bounding_box(&self) -> Box2D<f32, DeviceSpace> {
    self.ring.bounding_box()
  }
}
