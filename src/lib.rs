//! The "Bubbles and Bedlam" fractal: nested rings of bubbles, each decorated with a short arc.
//!
//! The crate is split into [`generator`], which turns a [`FractalParameters`] set into a flat
//! list of [`Element`]s, [`subject`], which tells observers that the parameters changed, and
//! [`drawing`] for rasterizing the elements (requires `drawing` feature).
//!
//! # Basic usage
//! ```
//! # use bubbles_bedlam::{
//! #   generator::{FractalGenerator, FractalParameters},
//! #   geometry::{Element, P2},
//! # };
//! // A fixed seed makes pastel colors reproducible.
//! let mut generator = FractalGenerator::seeded(0);
//! generator.set_parameters(FractalParameters {
//!   recurse_depth: 3,
//!   child_ratio: 40,
//!   child_count: 4,
//!   ..Default::default()
//! });
//!
//! let elements = generator.elements();
//! // one bubble and one arc per node: 1 + 4 + 16 nodes
//! assert_eq!(elements.len(), 2 * 21);
//! assert!(matches!(elements[0], Element::Bubble(b) if b.center == P2::origin()));
//! ```
//!
//! # Observers
//! Renderers implement [`FractalObserver`](subject::FractalObserver) and pull the elements
//! themselves when notified:
//! ```
//! # use {
//! #   bubbles_bedlam::{
//! #     generator::{FractalGenerator, FractalParameters},
//! #     subject::{FractalObserver, FractalSubject},
//! #   },
//! #   std::{cell::Cell, rc::Rc},
//! # };
//! struct Counter(Cell<usize>);
//!
//! impl FractalObserver for Counter {
//!   fn update(&self, subject: &dyn FractalSubject) -> anyhow::Result<()> {
//!     self.0.set(subject.elements().len());
//!     Ok(())
//!   }
//! }
//!
//! let counter = Rc::new(Counter(Cell::new(0)));
//! let mut generator = FractalGenerator::seeded(0);
//! generator.attach(counter.clone());
//! generator.set_parameters(FractalParameters::default());
//! assert_eq!(counter.0.get(), 4);
//! ```
//!
//! Notification is synchronous, on the caller's thread, in attachment order. A failing
//! observer is logged and counted, and does not prevent the others from being notified.

pub use generator::{FractalGenerator, FractalParameters};
pub use geometry::Element;

pub mod error;
pub mod util;
pub mod color;
pub mod config;
pub mod geometry;
pub mod sdf;
pub mod generator;
pub mod subject;
#[cfg(feature = "drawing")]
pub mod drawing;
