//! Bubble placement.
//!
//! Starting from a bubble of radius [`STARTING_RADIUS`] in the middle of the canvas, every
//! bubble spawns `child_count` children evenly spaced on a circle around it, each
//! `child_ratio` percent of its parent's size, until `recurse_depth` levels are placed.

use {
  crate::{
    color::{self, Color},
    error::{Error, Result},
    geometry::{Arc, Bubble, Element, P2},
    profile,
    subject::{FractalObserver, FractalSubject, ObserverList}
  },
  euclid::{Angle, Vector2D as V2},
  log::debug,
  rand::{Rng, SeedableRng},
  rand_pcg::Pcg64,
  serde::{Deserialize, Serialize},
  std::{
    cell::RefCell,
    f64::consts::{FRAC_PI_2, TAU},
    rc::Rc
  }
};


/// Radius of the root bubble.
pub const STARTING_RADIUS: f64 = 100.0;
/// Arc radius relative to the bubble it decorates.
pub const ARC_RATIO: f64 = 0.75;

/// Inputs of a generation, replaced as a whole on every change.
///
/// Integers are signed: zero or negative `recurse_depth` and `child_count` are accepted and
/// produce fewer (or no) elements.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalParameters {
  /// Number of levels, including the root.
  pub recurse_depth: i32,
  /// Child radius, in percent of the parent radius.
  pub child_ratio: i32,
  pub child_count: i32,
  /// Reserved. Carried through but never consulted by generation.
  pub bedlam_level: i32,
  pub base_color: Color,
  /// Pick every bubble's color from [`color::PASTELS`] instead of `base_color`.
  pub use_random_pastels: bool
}

impl FractalParameters {
  /// The state of a fresh generator: nothing is produced until parameters are set.
  pub fn zeroed() -> Self {
    Self {
      recurse_depth: 0,
      child_ratio: 0,
      child_count: 0,
      bedlam_level: 0,
      base_color: color::RED,
      use_random_pastels: false
    }
  }

  /// Number of elements [`FractalGenerator::elements`] will return, without generating them.
  ///
  /// `2 * Σ_{i=0}^{depth-1} count^i`, saturating at `usize::MAX`.
  pub fn element_count(&self) -> usize {
    let depth = self.recurse_depth.max(0) as usize;
    let nodes = match self.child_count.max(0) as usize {
      _ if depth == 0 => 0,
      0 => 1,
      1 => depth,
      count => {
        let (mut nodes, mut level) = (0usize, 1usize);
        for _ in 0..depth {
          nodes = nodes.saturating_add(level);
          level = level.saturating_mul(count);
          if nodes == usize::MAX { break; }
        }
        nodes
      }
    };
    nodes.saturating_mul(2)
  }

  /// Fails if generation would exceed `limit` elements.
  pub fn check_element_budget(&self, limit: usize) -> Result<usize> {
    match self.element_count() {
      requested if requested > limit => Err(Error::TooManyElements { requested, limit }),
      count => Ok(count)
    }
  }
}

/// Angles of `count` children around their parent, the first one pointing up.
///
/// Empty for `count <= 0`.
pub fn child_angles(count: i32) -> impl Iterator<Item = Angle<f64>> {
  (0..count.max(0))
    .map(move |child| Angle::radians(FRAC_PI_2 + child as f64 * (TAU / count as f64)))
}

/// Holds the current parameters, regenerates elements on demand and notifies observers when
/// the parameters change.
pub struct FractalGenerator<R = Pcg64> {
  params: FractalParameters,
  observers: ObserverList,
  rng: RefCell<R>
}

impl FractalGenerator<Pcg64> {
  pub fn new() -> Self {
    Self::with_rng(Pcg64::from_entropy())
  }

  /// Reproducible pastel selection.
  pub fn seeded(seed: u64) -> Self {
    Self::with_rng(Pcg64::seed_from_u64(seed))
  }
}

impl Default for FractalGenerator<Pcg64> {
  fn default() -> Self { Self::new() }
}

impl<R: Rng> FractalGenerator<R> {
  pub fn with_rng(rng: R) -> Self {
    Self {
      params: FractalParameters::zeroed(),
      observers: ObserverList::default(),
      rng: RefCell::new(rng)
    }
  }

  pub fn parameters(&self) -> &FractalParameters {
    &self.params
  }

  /// Replace the parameters and notify every observer.
  /// Returns the number of observers that failed.
  pub fn set_parameters(&mut self, params: FractalParameters) -> usize {
    self.params = params;
    self.notify_observers()
  }

  pub fn attach(&mut self, observer: Rc<dyn FractalObserver>) {
    self.observers.attach(observer);
  }

  pub fn detach(&mut self, observer: &Rc<dyn FractalObserver>) {
    self.observers.detach(observer);
  }

  pub fn notify_observers(&self) -> usize {
    self.observers.notify(self)
  }

  pub fn observer_count(&self) -> usize {
    self.observers.len()
  }

  /// Generate the whole fractal: every node appends its bubble, then its arc, then the
  /// subtrees of its children in order.
  pub fn elements(&self) -> Vec<Element> {
    let expected = self.params.element_count();
    debug!("generating {} elements for {:?}", expected, self.params);
    let mut elements = Vec::with_capacity(expected.min(1 << 20));
    profile!("elements", {
      self.place(&mut elements)
    });
    elements
  }

  // Depth-first with an explicit stack, so depth is not bounded by the thread's stack.
  fn place(&self, elements: &mut Vec<Element>) {
    let angles = child_angles(self.params.child_count).collect::<Vec<_>>();
    let mut pending = vec![(P2::origin(), self.params.recurse_depth, STARTING_RADIUS)];

    while let Some((center, counter, radius)) = pending.pop() {
      if counter <= 0 {
        continue;
      }
      elements.push(Bubble { center, radius, color: self.bubble_color() }.into());
      elements.push(Arc { center, radius: radius * ARC_RATIO }.into());

      let child_radius = radius * (self.params.child_ratio as f64 / 100.0);
      // reversed, so the first child is popped first
      pending.extend(angles.iter().rev().map(|&theta| (
        center + V2::from_angle_and_length(theta, radius + child_radius),
        counter - 1,
        child_radius
      )));
    }
  }

  fn bubble_color(&self) -> Color {
    if self.params.use_random_pastels {
      color::random_pastel(&mut *self.rng.borrow_mut())
    } else {
      self.params.base_color
    }
  }
}

impl<R: Rng> FractalSubject for FractalGenerator<R> {
  fn attach(&mut self, observer: Rc<dyn FractalObserver>) {
    Self::attach(self, observer)
  }

  fn detach(&mut self, observer: &Rc<dyn FractalObserver>) {
    Self::detach(self, observer)
  }

  fn notify_observers(&self) -> usize {
    Self::notify_observers(self)
  }

  fn elements(&self) -> Vec<Element> {
    Self::elements(self)
  }

  fn parameters(&self) -> &FractalParameters {
    Self::parameters(self)
  }

  fn set_parameters(&mut self, params: FractalParameters) -> usize {
    Self::set_parameters(self, params)
  }
}
