//! The chart itself.

use std::fmt;

use sn_core::{Entity, Point};

use crate::{ViewError, ViewResult};

/// What occupies one chart cell.
#[derive(Clone)]
enum Cell {
    Empty,
    Label(String),
    Collision,
}

/// A square window onto the sea chart.
///
/// `size` cells on a side, each `scale` nm wide, with the bottom-left corner
/// of the bottom-left cell at `origin`.
#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    size:   usize,
    scale:  f64,
    origin: Point,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            size:   Self::DEFAULT_SIZE,
            scale:  Self::DEFAULT_SCALE,
            origin: Self::DEFAULT_ORIGIN,
        }
    }
}

impl MapView {
    pub const DEFAULT_SIZE: usize = 25;
    pub const DEFAULT_SCALE: f64 = 2.0;
    pub const DEFAULT_ORIGIN: Point = Point { x: -10.0, y: -10.0 };
    pub const MIN_SIZE: usize = 6;
    pub const MAX_SIZE: usize = 30;

    /// Rows between y-axis labels, and columns between x-axis labels.
    const Y_LABEL_EVERY: usize = 3;
    const X_LABEL_EVERY: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Restore size, scale and origin to their defaults.
    pub fn set_default(&mut self) {
        *self = Self::default();
    }

    pub fn set_size(&mut self, size: usize) -> ViewResult<()> {
        if size < Self::MIN_SIZE {
            return Err(ViewError::SizeTooSmall);
        }
        if size > Self::MAX_SIZE {
            return Err(ViewError::SizeTooBig);
        }
        self.size = size;
        Ok(())
    }

    pub fn set_scale(&mut self, scale: f64) -> ViewResult<()> {
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(ViewError::NonPositiveScale);
        }
        self.scale = scale;
        Ok(())
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Grid cell `(col, row)` holding `p`, with row 0 at the bottom, or
    /// `None` if `p` is off the chart.
    pub fn cell_of(&self, p: Point) -> Option<(usize, usize)> {
        let col = ((p.x - self.origin.x) / self.scale).floor();
        let row = ((p.y - self.origin.y) / self.scale).floor();
        let n = self.size as f64;
        if (0.0..n).contains(&col) && (0.0..n).contains(&row) {
            Some((col as usize, row as usize))
        } else {
            None
        }
    }

    /// Draw `entities` onto the chart and return it as a string.
    pub fn render(&self, entities: &[&dyn Entity]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.draw(&mut out, entities);
        out
    }

    /// Draw `entities` onto the chart.
    ///
    /// The output starts with a header line, then one warning per entity that
    /// falls off the chart, then the grid from the top row down, then the
    /// x-axis labels.  An occupied cell shows the first two letters of the
    /// occupant's name; a cell with several occupants shows `*`.
    pub fn draw<W: fmt::Write>(&self, out: &mut W, entities: &[&dyn Entity]) -> fmt::Result {
        let mut grid = vec![vec![Cell::Empty; self.size]; self.size];
        let mut outside = Vec::new();

        for e in entities {
            match self.cell_of(e.location()) {
                Some((col, row)) => {
                    let cell = &mut grid[row][col];
                    *cell = if matches!(cell, Cell::Empty) {
                        Cell::Label(e.name().chars().take(2).collect())
                    } else {
                        Cell::Collision
                    };
                }
                None => outside.push(e.name()),
            }
        }

        writeln!(
            out,
            "Display size: {}, scale: {:.2}, origin: ({:.2}, {:.2})",
            self.size, self.scale, self.origin.x, self.origin.y
        )?;
        for name in outside {
            writeln!(out, "{name} is outside the map")?;
        }

        for row in (0..self.size).rev() {
            if row % Self::Y_LABEL_EVERY == 0 {
                let y = self.origin.y + row as f64 * self.scale;
                write!(out, "{:>4} ", format!("{y:.0}"))?;
            } else {
                out.write_str("     ")?;
            }
            for cell in &grid[row] {
                match cell {
                    Cell::Empty => out.write_str(". ")?,
                    Cell::Collision => out.write_str("* ")?,
                    Cell::Label(label) => write!(out, "{label:<2}")?,
                }
            }
            out.write_char('\n')?;
        }

        out.write_str("   ")?;
        for col in (0..self.size).step_by(Self::X_LABEL_EVERY) {
            let x = self.origin.x + col as f64 * self.scale;
            write!(out, "{:>6}", format!("{x:.0}"))?;
        }
        out.write_char('\n')
    }
}
