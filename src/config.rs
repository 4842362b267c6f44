//! Parameter ranges of the settings controls, defaults, and TOML loading.
//!
//! ```toml
//! recurse_depth = 4
//! child_ratio = 45
//! child_count = 6
//! bedlam_level = 0
//! base_color = "#94a8d0"   # or [148, 168, 208]
//! use_random_pastels = false
//! ```

use {
  crate::{color, generator::FractalParameters},
  anyhow::{Context, Result},
  std::{fs, path::Path}
};

/// Inclusive range of a slider, with its initial position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Range {
  pub min: i32,
  pub max: i32,
  pub default: i32
}

impl Range {
  pub fn clamp(&self, value: i32) -> i32 {
    value.clamp(self.min, self.max)
  }

  pub fn contains(&self, value: i32) -> bool {
    (self.min..=self.max).contains(&value)
  }
}

pub const RECURSE_DEPTH: Range = Range { min: 2, max: 8, default: 2 };
/// Percent.
pub const CHILD_RATIO: Range = Range { min: 20, max: 70, default: 20 };
pub const CHILD_COUNT: Range = Range { min: 1, max: 11, default: 1 };
pub const BEDLAM_LEVEL: Range = Range { min: 0, max: 4, default: 0 };

impl Default for FractalParameters {
  fn default() -> Self {
    Self {
      recurse_depth: RECURSE_DEPTH.default,
      child_ratio: CHILD_RATIO.default,
      child_count: CHILD_COUNT.default,
      bedlam_level: BEDLAM_LEVEL.default,
      base_color: color::RED,
      use_random_pastels: false
    }
  }
}

impl FractalParameters {
  /// Values the settings controls can actually produce.
  pub fn clamped(self) -> Self {
    Self {
      recurse_depth: RECURSE_DEPTH.clamp(self.recurse_depth),
      child_ratio: CHILD_RATIO.clamp(self.child_ratio),
      child_count: CHILD_COUNT.clamp(self.child_count),
      bedlam_level: BEDLAM_LEVEL.clamp(self.bedlam_level),
      ..self
    }
  }

  pub fn in_range(&self) -> bool {
    RECURSE_DEPTH.contains(self.recurse_depth)
      && CHILD_RATIO.contains(self.child_ratio)
      && CHILD_COUNT.contains(self.child_count)
      && BEDLAM_LEVEL.contains(self.bedlam_level)
  }

  /// Missing keys take their default value.
  pub fn from_toml_str(s: &str) -> Result<Self> {
    toml::from_str(s).context("malformed fractal parameters")
  }

  pub fn to_toml_string(&self) -> Result<String> {
    toml::to_string(self).context("failed to serialize fractal parameters")
  }

  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
      .with_context(|| format!("failed to read {}", path.display()))?;
    Self::from_toml_str(&content)
      .with_context(|| format!("in {}", path.display()))
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crate::color::{Color, PASTELS}
  };

  #[test] fn defaults_match_controls() {
    let params = FractalParameters::default();
    assert_eq!(params.recurse_depth, 2);
    assert_eq!(params.child_ratio, 20);
    assert_eq!(params.child_count, 1);
    assert_eq!(params.bedlam_level, 0);
    assert_eq!(params.base_color, Color::new(255, 0, 0));
    assert!(!params.use_random_pastels);
    assert!(params.in_range());
  }

  #[test] fn clamped_to_controls() {
    let params = FractalParameters {
      recurse_depth: 12,
      child_ratio: 5,
      child_count: -3,
      bedlam_level: 9,
      base_color: PASTELS[2],
      use_random_pastels: true
    };
    assert!(!params.in_range());
    let clamped = params.clamped();
    assert_eq!(clamped, FractalParameters {
      recurse_depth: 8,
      child_ratio: 20,
      child_count: 1,
      bedlam_level: 4,
      ..params
    });
    assert!(clamped.in_range());
  }

  #[test] fn toml_partial() -> Result<()> {
    let params = FractalParameters::from_toml_str(r##"
      recurse_depth = 5
      child_count = 7
      base_color = "#94a8d0"
    "##)?;
    assert_eq!(params, FractalParameters {
      recurse_depth: 5,
      child_count: 7,
      base_color: PASTELS[1],
      ..Default::default()
    });
    Ok(())
  }

  #[test] fn toml_color_channels() -> Result<()> {
    let params = FractalParameters::from_toml_str("base_color = [1, 2, 3]\nuse_random_pastels = true")?;
    assert_eq!(params.base_color, Color::new(1, 2, 3));
    assert!(params.use_random_pastels);
    Ok(())
  }

  #[test] fn toml_bad_color() {
    assert!(FractalParameters::from_toml_str("base_color = \"chartreuse\"").is_err());
    assert!(FractalParameters::from_toml_str("base_color = [1, 2]").is_err());
    assert!(FractalParameters::from_toml_str("recurse_depth = \"deep\"").is_err());
  }

  #[test] fn toml_round_trip() -> Result<()> {
    let params = FractalParameters {
      recurse_depth: 6,
      child_ratio: 33,
      child_count: 4,
      bedlam_level: 2,
      base_color: Color::new(10, 20, 30),
      use_random_pastels: true
    };
    assert_eq!(FractalParameters::from_toml_str(&params.to_toml_string()?)?, params);
    Ok(())
  }

  #[test] fn load_missing_file() {
    let err = FractalParameters::load("/nonexistent/bubbles.toml").unwrap_err();
    assert!(format!("{:#}", err).contains("/nonexistent/bubbles.toml"));
  }
}
