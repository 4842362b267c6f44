use {
  crate::error::{Error, Result},
  rand::Rng,
  serde::{Deserialize, Serialize},
  std::{fmt, str::FromStr}
};

/// Opaque RGB color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr", into = "ColorRepr")]
pub struct Color {
  pub r: u8,
  pub g: u8,
  pub b: u8
}

impl Color {
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }
}

pub const RED: Color = Color::new(255, 0, 0);
pub const LIGHT_GRAY: Color = Color::new(192, 192, 192);

/// Pale yellow, blue, purple, pink, orange.
pub const PASTELS: [Color; 5] = [
  Color::new(255, 255, 176),
  Color::new(148, 168, 208),
  Color::new(221, 212, 240),
  Color::new(251, 182, 209),
  Color::new(255, 223, 211),
];

/// Uniform pick from [`PASTELS`].
pub fn random_pastel<R: Rng + ?Sized>(rng: &mut R) -> Color {
  PASTELS[rng.gen_range(0..PASTELS.len())]
}

impl Default for Color {
  fn default() -> Self { RED }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
  }
}

impl FromStr for Color {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let hex = s.trim().trim_start_matches('#');
    let invalid = || Error::InvalidColor(s.to_string());
    if hex.len() != 6 || !hex.is_ascii() {
      return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16)
      .map_err(|_| invalid());
    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
  }
}

/// TOML accepts either `[r, g, b]` or `"#rrggbb"`.
#[derive(Clone, Deserialize, Serialize)]
#[serde(untagged)]
enum ColorRepr {
  Channels([u8; 3]),
  Hex(String)
}

impl TryFrom<ColorRepr> for Color {
  type Error = Error;

  fn try_from(repr: ColorRepr) -> Result<Self> {
    match repr {
      ColorRepr::Channels([r, g, b]) => Ok(Color::new(r, g, b)),
      ColorRepr::Hex(s) => s.parse()
    }
  }
}

impl From<Color> for ColorRepr {
  fn from(color: Color) -> Self {
    ColorRepr::Hex(color.to_string())
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    rand::SeedableRng
  };

  #[test] fn parse_hex() -> Result<()> {
    assert_eq!("#ff0000".parse::<Color>()?, RED);
    assert_eq!("94a8d0".parse::<Color>()?, PASTELS[1]);
    assert_eq!(" #C0C0C0 ".parse::<Color>()?, LIGHT_GRAY);
    Ok(())
  }

  #[test] fn parse_rejects_garbage() {
    for s in ["", "#fff", "#gg0000", "#ff00001", "red"] {
      assert_eq!(s.parse::<Color>(), Err(Error::InvalidColor(s.to_string())));
    }
  }

  #[test] fn display_round_trips() -> Result<()> {
    let color = Color::new(1, 171, 255);
    assert_eq!(color.to_string(), "#01abff");
    assert_eq!(color.to_string().parse::<Color>()?, color);
    Ok(())
  }

  #[test] fn pastel_pick_covers_palette() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
    let picks = (0..500)
      .map(|_| random_pastel(&mut rng))
      .collect::<Vec<_>>();
    assert!(picks.iter().all(|c| PASTELS.contains(c)));
    assert!(PASTELS.iter().all(|c| picks.contains(c)));
  }
}
