use serde::{Deserialize, Serialize};

/// A color consisting of only a number. Colors are handed out in ascending
/// order, so a lower number is always tried first.
#[derive(
  Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Color(pub usize);

impl Color {
  /// Returns the underlying color number.
  pub fn index(self) -> usize {
    self.0
  }
}

impl From<usize> for Color {
  fn from(n: usize) -> Self {
    Color(n)
  }
}

impl std::fmt::Display for Color {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "c{}", self.0)
  }
}

impl std::fmt::Debug for Color {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "c{}", self.0)
  }
}

/// Holds a number indicating the next color to hand out, bounded by the
/// palette size. A graph with `n` vertices always gets a palette of `n`
/// colors, so giving every vertex its own color is always possible.
///
/// # Examples
/// ```
/// use colorsolve::coloring::palette::{Color, ColorPalette};
///
/// let mut plt = ColorPalette::new(2);
/// assert!(plt.is_brand_new());
///
/// assert_eq!(plt.peek(), Some(Color(0)));
/// assert_eq!(plt.next(), Some(Color(0)));
/// assert_eq!(plt.next(), Some(Color(1)));
/// assert_eq!(plt.next(), None);
///
/// assert!(!plt.is_brand_new());
/// ```
#[derive(Debug, Clone)]
pub struct ColorPalette {
  index: usize,
  size: usize,
}

impl ColorPalette {
  /// Creates a new palette of `size` colors, starting at the zeroth color.
  pub fn new(size: usize) -> Self {
    ColorPalette { index: 0, size }
  }

  /// Creates a palette that resumes at color `start`.
  pub fn starting_at(size: usize, start: usize) -> Self {
    ColorPalette { index: start, size }
  }

  /// Shows if self is an unused palette.
  pub fn is_brand_new(&self) -> bool {
    0 == self.index
  }

  /// Number of colors in the palette, used or not.
  pub fn size(&self) -> usize {
    self.size
  }

  /// Tests whether `c` belongs to this palette.
  pub fn contains(&self, c: Color) -> bool {
    c.0 < self.size
  }

  /// Returns the current color without advancing.
  pub fn peek(&self) -> Option<Color> {
    if self.index < self.size {
      Some(Color(self.index))
    } else {
      None
    }
  }
}

impl Iterator for ColorPalette {
  type Item = Color;

  /// Returns current color, then increments the color index.
  fn next(&mut self) -> Option<Color> {
    let ret = self.peek()?;
    self.index += 1;
    Some(ret)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let left = self.size.saturating_sub(self.index);
    (left, Some(left))
  }
}

#[allow(unused_imports, dead_code)]
mod test {
  use super::*;

  #[test]
  fn test_ops() {
    let mut plt = ColorPalette::new(3);
    assert!(plt.is_brand_new());

    assert_eq!(plt.peek(), Some(Color(0)));
    assert_eq!(plt.next(), Some(Color(0)));
    assert_eq!(plt.peek(), Some(Color(1)));

    assert!(!plt.is_brand_new());
    assert_eq!(plt.collect::<Vec<_>>(), vec![Color(1), Color(2)]);
  }

  #[test]
  fn empty_palette_yields_nothing() {
    let mut plt = ColorPalette::new(0);
    assert_eq!(plt.next(), None);
    assert!(!plt.contains(Color(0)));
  }

  #[test]
  fn resume_mid_palette() {
    let plt = ColorPalette::starting_at(4, 2);
    assert!(plt.contains(Color(3)));
    assert_eq!(plt.collect::<Vec<_>>(), vec![Color(2), Color(3)]);
  }
}
