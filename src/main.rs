use {
  bubbles_bedlam::{
    color::Color,
    drawing::CanvasObserver,
    generator::{FractalGenerator, FractalParameters},
    geometry::Element,
    subject::{FractalObserver, FractalSubject}
  },
  anyhow::{bail, Context, Result},
  clap::Parser,
  log::info,
  std::{path::PathBuf, rc::Rc}
};

#[derive(Parser)]
#[command(name = "bubbles-bedlam")]
#[command(version)]
#[command(about = "Generate the Bubbles and Bedlam fractal and report what was drawn", long_about = None)]
struct Cli {
  /// Read the parameter set from a TOML file; flags override its values
  #[arg(long)]
  config: Option<PathBuf>,

  /// Recursion depth (2-8)
  #[arg(short, long)]
  depth: Option<i32>,

  /// Child to parent size ratio, in percent (20-70)
  #[arg(short, long)]
  ratio: Option<i32>,

  /// Children per bubble (1-11)
  #[arg(short, long)]
  count: Option<i32>,

  /// Bedlam level (0-4), reserved
  #[arg(short, long)]
  bedlam: Option<i32>,

  /// Bubble color as #rrggbb
  #[arg(long)]
  color: Option<Color>,

  /// Color every bubble with a random pastel
  #[arg(short, long)]
  pastels: bool,

  /// Random seed for reproducible pastels
  #[arg(short, long)]
  seed: Option<u64>,

  /// Pass values outside of the settings ranges through unchanged
  #[arg(long)]
  unclamped: bool,

  /// Refuse to generate more elements than this
  #[arg(long, default_value = "5000000")]
  max_elements: usize,

  /// Print every element
  #[arg(short, long)]
  list: bool,
}

impl Cli {
  fn parameters(&self) -> Result<FractalParameters> {
    let base = match &self.config {
      Some(path) => FractalParameters::load(path)?,
      None => FractalParameters::default()
    };
    let params = FractalParameters {
      recurse_depth: self.depth.unwrap_or(base.recurse_depth),
      child_ratio: self.ratio.unwrap_or(base.child_ratio),
      child_count: self.count.unwrap_or(base.child_count),
      bedlam_level: self.bedlam.unwrap_or(base.bedlam_level),
      base_color: self.color.unwrap_or(base.base_color),
      use_random_pastels: self.pastels || base.use_random_pastels
    };
    Ok(if self.unclamped { params } else { params.clamped() })
  }
}

/// Prints what the subject currently generates.
struct Summary {
  list: bool
}

impl FractalObserver for Summary {
  fn update(&self, subject: &dyn FractalSubject) -> Result<()> {
    let elements = subject.elements();
    let bubbles = elements.iter().filter(|e| matches!(e, Element::Bubble(_))).count();
    let smallest = elements.iter()
      .map(Element::radius)
      .fold(f64::INFINITY, f64::min);

    println!("parameters: {:?}", subject.parameters());
    println!("{} elements: {} bubbles, {} arcs", elements.len(), bubbles, elements.len() - bubbles);
    if smallest.is_finite() {
      println!("smallest radius: {:.3}", smallest);
    }
    if self.list {
      elements.iter()
        .enumerate()
        .for_each(|(index, element)| println!("{:>8} {}", index, element));
    }
    Ok(())
  }
}

fn main() -> Result<()> {
  env_logger::init();
  let cli = Cli::parse();

  let params = cli.parameters()?;
  let count = params.check_element_budget(cli.max_elements)
    .context("use --max-elements to raise the limit")?;
  info!("generating {} elements", count);

  let mut generator = match cli.seed {
    Some(seed) => FractalGenerator::seeded(seed),
    None => FractalGenerator::new()
  };
  let canvas = Rc::new(CanvasObserver::default());
  generator.attach(Rc::new(Summary { list: cli.list }));
  generator.attach(canvas.clone());

  let failures = generator.set_parameters(params);
  if failures > 0 {
    bail!("{} observers failed", failures);
  }

  let size = canvas.canvas().dimensions();
  println!("canvas {}x{}: {} pixels painted", size.0, size.1, canvas.painted_pixels());
  Ok(())
}
