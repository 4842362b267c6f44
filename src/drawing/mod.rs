//! Rasterization of elements onto an [`RgbaImage`], and an observer that redraws a canvas
//! whenever the generator's parameters change.

use {
  crate::{
    color::Color,
    geometry::{self, BoundingBox, CartesianSpace, DeviceSpace, Element, P2},
    profile,
    sdf::SDF,
    subject::{FractalObserver, FractalSubject}
  },
  anyhow::Context,
  euclid::{Box2D, Point2D, Size2D},
  image::{Rgba, RgbaImage},
  log::{debug, trace},
  std::cell::{Cell, Ref, RefCell}
};

mod impl_draw_rgbaimage;

pub trait Draw<Backend> {
  fn draw(&self, surface: &mut Backend);
}

/// 40% opacity of a bubble's fill.
pub const FILL_ALPHA: u8 = 102;
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 255]);

pub fn rgba(color: Color, alpha: u8) -> Rgba<u8> {
  Rgba([color.r, color.g, color.b, alpha])
}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}
impl <S, T> SDF<f32> for Texture<S, T> where S: SDF<f32> {
  fn sdf(&self, pixel: Point2D<f32, DeviceSpace>) -> f32 { self.shape.sdf(pixel) } }
impl <S, T> BoundingBox<f32, DeviceSpace> for Texture<S, T> where S: BoundingBox<f32, DeviceSpace> {
  fn bounding_box(&self) -> Box2D<f32, DeviceSpace> { self.shape.bounding_box() } }

// pixels possibly covered by the shape, including the antialiased edge
fn clip_bounding_box(
  bounding_box: Box2D<f32, DeviceSpace>,
  resolution: Size2D<u32, DeviceSpace>
) -> Option<Box2D<u32, DeviceSpace>> {
  bounding_box
    .inflate(1.0, 1.0)
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f32()))
    .map(|x| x.to_u32())
}

/// Blank canvas of the drawing window.
pub fn canvas() -> RgbaImage {
  let size = geometry::canvas_size();
  RgbaImage::from_pixel(size.width, size.height, BACKGROUND)
}

pub fn clear(surface: &mut RgbaImage) {
  surface.pixels_mut().for_each(|pixel| *pixel = BACKGROUND);
}

/// Whether any pixel of `element` can land on a surface of `resolution`.
///
/// The margin covers the antialiased edge and the truncation to whole pixels.
pub fn on_canvas(element: &Element, resolution: Size2D<u32, DeviceSpace>) -> bool {
  let (w, h) = (resolution.width as f64, resolution.height as f64);
  let canvas = Box2D::<f64, CartesianSpace>::new(
    P2::new(-w / 2.0, -h / 2.0),
    P2::new(w / 2.0, h / 2.0)
  );
  element.bounding_box()
    .inflate(3.0, 3.0)
    .intersects(&canvas)
}

/// Draw in list order, later elements over earlier ones. Elements entirely off the surface
/// are skipped.
pub fn render_all<'a>(elements: impl IntoIterator<Item = &'a Element>, surface: &mut RgbaImage) {
  let resolution: Size2D<u32, DeviceSpace> = surface.dimensions().into();
  let (mut drawn, mut culled) = (0usize, 0usize);
  for element in elements {
    if on_canvas(element, resolution) {
      element.draw(surface);
      drawn += 1;
    } else {
      culled += 1;
    }
  }
  trace!("drew {} elements, culled {}", drawn, culled);
}

/// Keeps a canvas in sync with its subject.
pub struct CanvasObserver {
  canvas: RefCell<RgbaImage>,
  redraws: Cell<usize>
}

impl CanvasObserver {
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      canvas: RefCell::new(RgbaImage::from_pixel(width, height, BACKGROUND)),
      redraws: Cell::new(0)
    }
  }

  pub fn canvas(&self) -> Ref<'_, RgbaImage> {
    self.canvas.borrow()
  }

  pub fn redraws(&self) -> usize {
    self.redraws.get()
  }

  /// Pixels that differ from the background.
  pub fn painted_pixels(&self) -> usize {
    self.canvas.borrow()
      .pixels()
      .filter(|pixel| **pixel != BACKGROUND)
      .count()
  }
}

impl Default for CanvasObserver {
  fn default() -> Self {
    let size = geometry::canvas_size();
    Self::new(size.width, size.height)
  }
}

impl FractalObserver for CanvasObserver {
  fn update(&self, subject: &dyn FractalSubject) -> anyhow::Result<()> {
    let elements = subject.elements();
    let mut canvas = self.canvas.try_borrow_mut()
      .context("canvas is still borrowed")?;
    clear(&mut canvas);
    profile!("render", {
      render_all(&elements, &mut canvas)
    });
    self.redraws.set(self.redraws.get() + 1);
    debug!("redrew {} elements", elements.len());
    Ok(())
  }
}
