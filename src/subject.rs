//! Subject/observer contract between the generator and whatever renders its output.
//!
//! Observers are notified without data and pull the elements themselves through the
//! subject reference they receive.

use {
  crate::{generator::FractalParameters, geometry::Element},
  log::{trace, warn},
  std::rc::Rc
};

pub trait FractalObserver {
  /// Called synchronously after the subject's parameters changed.
  fn update(&self, subject: &dyn FractalSubject) -> anyhow::Result<()>;
}

pub trait FractalSubject {
  /// Register an observer. The same observer may be attached more than once, and is then
  /// notified once per registration.
  fn attach(&mut self, observer: Rc<dyn FractalObserver>);
  /// Remove the first registration of `observer`; no-op if absent.
  fn detach(&mut self, observer: &Rc<dyn FractalObserver>);
  /// Returns the number of observers that failed.
  fn notify_observers(&self) -> usize;
  fn elements(&self) -> Vec<Element>;
  fn parameters(&self) -> &FractalParameters;
  fn set_parameters(&mut self, params: FractalParameters) -> usize;
}

/// Observers in attachment order.
#[derive(Default)]
pub struct ObserverList {
  observers: Vec<Rc<dyn FractalObserver>>
}

impl ObserverList {
  pub fn attach(&mut self, observer: Rc<dyn FractalObserver>) {
    self.observers.push(observer);
  }

  pub fn detach(&mut self, observer: &Rc<dyn FractalObserver>) {
    if let Some(index) = self.observers.iter()
      .position(|o| std::ptr::addr_eq(Rc::as_ptr(o), Rc::as_ptr(observer)))
    {
      self.observers.remove(index);
    }
  }

  pub fn len(&self) -> usize {
    self.observers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.observers.is_empty()
  }

  /// Call every observer in order. A failing observer is logged and skipped, so the rest
  /// are still notified. Returns the number of failures.
  pub fn notify(&self, subject: &dyn FractalSubject) -> usize {
    trace!("notifying {} observers", self.observers.len());
    let mut failures = 0;
    for (index, observer) in self.observers.iter().enumerate() {
      if let Err(e) = observer.update(subject) {
        warn!("observer #{} failed: {:#}", index, e);
        failures += 1;
      }
    }
    failures
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::generator::FractalGenerator,
    anyhow::{bail, Result},
    std::cell::RefCell
  };

  type Log = Rc<RefCell<Vec<(&'static str, usize)>>>;

  /// Records its name and the number of elements it pulled.
  struct Recorder {
    name: &'static str,
    log: Log,
    fail: bool
  }

  fn recorder(name: &'static str, log: &Log) -> Rc<dyn FractalObserver> {
    Rc::new(Recorder { name, log: log.clone(), fail: false })
  }

  impl FractalObserver for Recorder {
    fn update(&self, subject: &dyn FractalSubject) -> Result<()> {
      self.log.borrow_mut().push((self.name, subject.elements().len()));
      if self.fail {
        bail!("{} refused to draw", self.name);
      }
      Ok(())
    }
  }

  fn params(recurse_depth: i32) -> FractalParameters {
    FractalParameters { recurse_depth, ..Default::default() }
  }

  #[test] fn notifies_each_once_in_order() {
    let log = Log::default();
    let mut generator = FractalGenerator::seeded(0);
    generator.attach(recorder("a", &log));
    generator.attach(recorder("b", &log));
    generator.attach(recorder("c", &log));

    assert_eq!(generator.set_parameters(params(2)), 0);
    assert_eq!(*log.borrow(), vec![("a", 4), ("b", 4), ("c", 4)]);
  }

  #[test] fn observers_pull_fresh_elements() {
    let log = Log::default();
    let mut generator = FractalGenerator::seeded(0);
    generator.attach(recorder("a", &log));

    generator.set_parameters(params(1));
    generator.set_parameters(params(3));
    generator.set_parameters(params(0));
    assert_eq!(*log.borrow(), vec![("a", 2), ("a", 6), ("a", 0)]);
  }

  #[test] fn detached_observer_is_not_notified() {
    let log = Log::default();
    let mut generator = FractalGenerator::seeded(0);
    let a = recorder("a", &log);
    let b = recorder("b", &log);
    generator.attach(a.clone());
    generator.attach(b.clone());
    generator.detach(&a);

    generator.set_parameters(params(1));
    assert_eq!(*log.borrow(), vec![("b", 2)]);
    assert_eq!(generator.observer_count(), 1);
  }

  #[test] fn detach_absent_is_noop() {
    let log = Log::default();
    let mut generator = FractalGenerator::seeded(0);
    generator.attach(recorder("a", &log));
    // same name, different registration
    generator.detach(&recorder("a", &log));
    assert_eq!(generator.observer_count(), 1);
  }

  #[test] fn duplicates_are_notified_twice() {
    let log = Log::default();
    let mut generator = FractalGenerator::seeded(0);
    let a = recorder("a", &log);
    generator.attach(a.clone());
    generator.attach(recorder("b", &log));
    generator.attach(a.clone());

    generator.set_parameters(params(1));
    assert_eq!(*log.borrow(), vec![("a", 2), ("b", 2), ("a", 2)]);

    // only the first registration goes away
    generator.detach(&a);
    log.borrow_mut().clear();
    generator.notify_observers();
    assert_eq!(*log.borrow(), vec![("b", 2), ("a", 2)]);
  }

  #[test] fn failing_observer_does_not_block_the_rest() {
    let log = Log::default();
    let mut generator = FractalGenerator::seeded(0);
    generator.attach(recorder("a", &log));
    generator.attach(Rc::new(Recorder { name: "broken", log: log.clone(), fail: true }));
    generator.attach(recorder("c", &log));

    assert_eq!(generator.set_parameters(params(1)), 1);
    assert_eq!(*log.borrow(), vec![("a", 2), ("broken", 2), ("c", 2)]);
  }

  #[test] fn every_failure_is_counted() {
    let log = Log::default();
    let mut generator = FractalGenerator::seeded(0);
    for name in ["x", "y"] {
      generator.attach(Rc::new(Recorder { name, log: log.clone(), fail: true }));
    }
    generator.attach(recorder("z", &log));

    assert_eq!(generator.set_parameters(params(1)), 2);
    assert_eq!(generator.notify_observers(), 2);
    assert_eq!(log.borrow().len(), 6);
  }

  #[test] fn subject_through_trait_object() {
    let log = Log::default();
    let mut generator = FractalGenerator::seeded(0);
    let subject: &mut dyn FractalSubject = &mut generator;
    subject.attach(recorder("a", &log));
    subject.set_parameters(params(2));
    assert_eq!(subject.parameters().recurse_depth, 2);
    assert_eq!(*log.borrow(), vec![("a", 4)]);
  }

  #[test] fn empty_list_notifies_nobody() {
    let list = ObserverList::default();
    let generator = FractalGenerator::seeded(0);
    assert!(list.is_empty());
    assert_eq!(list.notify(&generator), 0);
  }
}
