use {
  super::{BoundingBox, CartesianSpace, P2},
  crate::color::{Color, LIGHT_GRAY},
  euclid::{Angle, Box2D, Vector2D as V2},
  std::fmt
};

/// Circle, filled with translucent color and outlined with the opaque one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bubble {
  pub center: P2,
  pub radius: f64,
  pub color: Color
}

/// Short decorative arc laid over a bubble.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc {
  pub center: P2,
  pub radius: f64
}

impl Arc {
  pub const COLOR: Color = LIGHT_GRAY;

  /// Counter-clockwise from the positive `x` axis.
  pub fn start_angle() -> Angle<f64> { Angle::degrees(40.0) }
  pub fn sweep_angle() -> Angle<f64> { Angle::degrees(10.0) }

  /// One tenth of the whole radius; zero means hairline.
  pub fn stroke_width(&self) -> u32 {
    (self.radius as i32 / 10).max(0) as u32
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Element {
  Bubble(Bubble),
  Arc(Arc)
}

impl Element {
  pub fn center(&self) -> P2 {
    match self {
      Element::Bubble(bubble) => bubble.center,
      Element::Arc(arc) => arc.center
    }
  }

  pub fn radius(&self) -> f64 {
    match self {
      Element::Bubble(bubble) => bubble.radius,
      Element::Arc(arc) => arc.radius
    }
  }

  pub fn as_bubble(&self) -> Option<&Bubble> {
    match self {
      Element::Bubble(bubble) => Some(bubble),
      Element::Arc(_) => None
    }
  }

  pub fn as_arc(&self) -> Option<&Arc> {
    match self {
      Element::Arc(arc) => Some(arc),
      Element::Bubble(_) => None
    }
  }
}

impl From<Bubble> for Element {
  fn from(bubble: Bubble) -> Self { Element::Bubble(bubble) }
}

impl From<Arc> for Element {
  fn from(arc: Arc) -> Self { Element::Arc(arc) }
}

fn circle_bounds(center: P2, radius: f64) -> Box2D<f64, CartesianSpace> {
  Box2D::new(
    center - V2::splat(radius),
    center + V2::splat(radius)
  )
}

impl BoundingBox<f64, CartesianSpace> for Bubble {
  fn bounding_box(&self) -> Box2D<f64, CartesianSpace> {
    circle_bounds(self.center, self.radius)
  }
}

// whole circle of the arc, widened by half the stroke
impl BoundingBox<f64, CartesianSpace> for Arc {
  fn bounding_box(&self) -> Box2D<f64, CartesianSpace> {
    circle_bounds(self.center, self.radius + self.stroke_width().max(1) as f64 / 2.0)
  }
}

impl BoundingBox<f64, CartesianSpace> for Element {
  fn bounding_box(&self) -> Box2D<f64, CartesianSpace> {
    match self {
      Element::Bubble(bubble) => bubble.bounding_box(),
      Element::Arc(arc) => arc.bounding_box()
    }
  }
}

impl fmt::Display for Element {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Element::Bubble(Bubble { center, radius, color }) => write!(
        f, "bubble r={:.2} at ({:.2}, {:.2}) {}",
        radius, center.x, center.y, color
      ),
      Element::Arc(Arc { center, radius }) => write!(
        f, "arc    r={:.2} at ({:.2}, {:.2})",
        radius, center.x, center.y
      ),
    }
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::color::RED
  };

  #[test] fn arc_stroke_width() {
    let arc = |radius| Arc { center: P2::origin(), radius };
    assert_eq!(arc(75.0).stroke_width(), 7);
    assert_eq!(arc(15.0).stroke_width(), 1);
    assert_eq!(arc(9.9).stroke_width(), 0);
    assert_eq!(arc(0.0).stroke_width(), 0);
  }

  #[test] fn bounding_box_encloses_circle() {
    let bubble = Bubble { center: P2::new(10.0, -20.0), radius: 5.0, color: RED };
    let bounds = Element::from(bubble).bounding_box();
    assert_eq!(bounds.min, P2::new(5.0, -25.0));
    assert_eq!(bounds.max, P2::new(15.0, -15.0));
  }

  #[test] fn arc_bounding_box_includes_stroke() {
    let arc = Element::from(Arc { center: P2::origin(), radius: 75.0 });
    let bounds = arc.bounding_box();
    assert_eq!(bounds.min, P2::new(-78.5, -78.5));
    assert_eq!(bounds.max, P2::new(78.5, 78.5));

    // hairline arcs still occupy a pixel
    let hairline = Arc { center: P2::origin(), radius: 4.0 }.bounding_box();
    assert_eq!(hairline.max, P2::new(4.5, 4.5));
  }

  #[test] fn display() {
    let bubble = Element::from(Bubble { center: P2::new(0.0, 120.0), radius: 20.0, color: RED });
    assert_eq!(bubble.to_string(), "bubble r=20.00 at (0.00, 120.00) #ff0000");
    let arc = Element::from(Arc { center: P2::origin(), radius: 75.0 });
    assert_eq!(arc.to_string(), "arc    r=75.00 at (0.00, 0.00)");
  }
}
