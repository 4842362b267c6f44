#![allow(non_snake_case)]
use {
  euclid::{Angle, Point2D, Size2D, Vector2D as V2},
  image::{Pixel, Rgba, RgbaImage},
  crate::{
    drawing::{Draw, Texture, FILL_ALPHA, clip_bounding_box, rgba},
    geometry::{self, Arc, BoundingBox, Bubble, DeviceSpace, Element, P2},
    sdf::{ArcBand, Disc, Ring, Shape, SDF}
  }
};

impl <Cutie> Draw<RgbaImage> for Texture<Cutie, Rgba<u8>>
  where Cutie: Shape
{
  fn draw(&self, image: &mut RgbaImage) {
    let resolution: Size2D<_, DeviceSpace> = image.dimensions().into();
    let bounding_box = match clip_bounding_box(self.bounding_box(), resolution) {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };
    let Δp = 1.0;

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .map(|(y, x)| Point2D::<_, DeviceSpace>::from([x, y]))
      .for_each(|pixel| {
        // sample at the pixel center
        let sdf = self.sdf(pixel.to_f32() + V2::splat(0.5));
        let pixel = image.get_pixel_mut(pixel.x, pixel.y);
        *pixel = sdf_overlay_aa(sdf, Δp, *pixel, self.texture);
      });
  }
}

/// Device center and radius, truncated to whole pixels.
fn to_device_circle(center: P2, radius: f64, image: &RgbaImage) -> (Point2D<f32, DeviceSpace>, f32) {
  let center = geometry::to_device_space(center, image.dimensions().into());
  (center.to_f32(), radius.trunc() as f32)
}

impl Draw<RgbaImage> for Bubble {
  fn draw(&self, image: &mut RgbaImage) {
    let (center, radius) = to_device_circle(self.center, self.radius, image);
    Ring { center, radius, width: 1.0 }
      .texture(rgba(self.color, u8::MAX))
      .draw(image);
    Disc { center, radius }
      .texture(rgba(self.color, FILL_ALPHA))
      .draw(image);
  }
}

impl Draw<RgbaImage> for Arc {
  fn draw(&self, image: &mut RgbaImage) {
    let (center, radius) = to_device_circle(self.center, self.radius, image);
    let width = self.stroke_width().max(1) as f32;
    ArcBand {
      ring: Ring { center, radius, width },
      start: Angle::radians(Arc::start_angle().radians as f32),
      sweep: Angle::radians(Arc::sweep_angle().radians as f32)
    }
      .texture(rgba(Arc::COLOR, u8::MAX))
      .draw(image);
  }
}

impl Draw<RgbaImage> for Element {
  fn draw(&self, image: &mut RgbaImage) {
    match self {
      Element::Bubble(bubble) => bubble.draw(image),
      Element::Arc(arc) => arc.draw(image)
    }
  }
}

/// Blend `col2` over `col1`, with coverage derived from the signed distance.
fn sdf_overlay_aa(sdf: f32, Δp: f32, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  let alpha = Δf / Δp;
  // overlay blending with premultiplied alpha
  col2.0[3] = ((col2.0[3] as f32) * alpha) as u8;
  col1.blend(&col2);
  col1
}
