//! Piecewise-linear color ramps.
//!
//! A [`Ramp`] is an ordered list of [`RampEntry`] intervals, each blending
//! linearly between two colors. Entries are neither sorted nor required to be
//! contiguous or disjoint: lookup walks them in order and the first interval
//! containing the value wins.

use huemap_core::Rgb;
use std::fmt;
use std::io::{self, Write};

/// One interval of a ramp: `[min, max)` blended from `min_color` to `max_color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampEntry {
    /// Lower bound (inclusive)
    pub min: f32,
    /// Upper bound (exclusive)
    pub max: f32,
    pub min_color: Rgb,
    pub max_color: Rgb,
}

impl RampEntry {
    pub const fn new(min: f32, max: f32, min_color: Rgb, max_color: Rgb) -> Self {
        Self {
            min,
            max,
            min_color,
            max_color,
        }
    }

    /// Whether `min <= value < max`. An entry with `min >= max` contains nothing.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= f64::from(self.min) && value < f64::from(self.max)
    }

    /// Normalized position of `value` inside the interval
    #[inline]
    pub fn fraction(&self, value: f64) -> f64 {
        let min = f64::from(self.min);
        (value - min) / (f64::from(self.max) - min)
    }

    /// Color at `value`, assuming the entry contains it
    #[inline]
    pub fn interpolate(&self, value: f64) -> Rgb {
        lerp_color(self.min_color, self.max_color, self.fraction(value))
    }
}

impl fmt::Display for RampEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lo, hi) = (self.min_color, self.max_color);
        write!(
            f,
            "{} {} {} {} {} {} {} {}",
            self.min, self.max, lo.r, lo.g, lo.b, hi.r, hi.g, hi.b
        )
    }
}

// ─── Interpolation ─────────────────────────────────────────────────────

fn lerp(a: u8, b: u8, t: f64) -> f64 {
    f64::from(a) * (1.0 - t) + f64::from(b) * t
}

/// Round half up and clamp into a byte channel. NaN becomes 0.
fn to_channel(c: f64) -> u8 {
    (c + 0.5).floor().clamp(0.0, 255.0) as u8
}

fn lerp_color(c1: Rgb, c2: Rgb, t: f64) -> Rgb {
    Rgb::new(
        to_channel(lerp(c1.r, c2.r, t)),
        to_channel(lerp(c1.g, c2.g, t)),
        to_channel(lerp(c1.b, c2.b, t)),
    )
}

// ─── Ramp ──────────────────────────────────────────────────────────────

/// Ordered ramp entries, in the order they were defined.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ramp {
    entries: Vec<RampEntry>,
}

impl Ramp {
    /// An empty ramp (maps every value to black)
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; it loses to every entry already present on overlap.
    pub fn push(&mut self, entry: RampEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RampEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RampEntry> {
        self.entries.iter()
    }

    /// First entry whose interval contains `value`.
    ///
    /// Linear scan on purpose: ramps hold tens of entries and a sorted index
    /// would change which of two overlapping entries wins.
    #[inline]
    pub fn lookup(&self, value: f64) -> Option<&RampEntry> {
        self.entries.iter().find(|entry| entry.contains(value))
    }

    /// Color of `value`, or black when no entry covers it (NaN included).
    #[inline]
    pub fn color_at(&self, value: f64) -> Rgb {
        self.lookup(value)
            .map_or(Rgb::BLACK, |entry| entry.interpolate(value))
    }

    /// Serialize in the text format, one entry per line.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(writer, "{entry}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Ramp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl FromIterator<RampEntry> for Ramp {
    fn from_iter<I: IntoIterator<Item = RampEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<RampEntry>> for Ramp {
    fn from(entries: Vec<RampEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a Ramp {
    type Item = &'a RampEntry;
    type IntoIter = std::slice::Iter<'a, RampEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
