//! Grid reconstruction: coordinate records pivoted into rendered text rows.
//!
//! The decoded message is encoded spatially: each table row places one
//! character at an `(x, y)` position on a coordinate plane. Rendering walks
//! the observed bounding box top to bottom (`max_y` first) and left to
//! right, emitting a space for every cell no record claimed.

use crate::table::Table;
use crate::{Error, Result};
use log::warn;
use std::collections::HashMap;

/// Name of the table column holding the x coordinate.
pub const X_COLUMN: &str = "x-coordinate";
/// Name of the table column holding the y coordinate.
pub const Y_COLUMN: &str = "y-coordinate";
/// Name of the table column holding the placed character.
pub const CHAR_COLUMN: &str = "Character";

/// One decoded `(x, y, character)` triple from the source table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub x: i64,
    pub y: i64,
    pub glyph: char,
}

/// Coordinate extrema observed across all records of a non-empty grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl Bounds {
    fn extend(&mut self, x: i64, y: i64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }
}

/// A sparse character grid bounded by the observed coordinate extrema.
///
/// When two records claim the same `(x, y)`, the first one inserted wins;
/// later duplicates are ignored.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cells: HashMap<(i64, i64), char>,
    bounds: Option<Bounds>,
}

impl Grid {
    /// Build a grid from records that have already been parsed.
    pub fn from_records<I>(records: I) -> Grid
    where
        I: IntoIterator<Item = Record>,
    {
        let mut grid = Grid::default();
        for record in records {
            grid.insert(record);
        }
        grid
    }

    /// Build a grid from a raw table by named-column lookup.
    ///
    /// The table must carry the `x-coordinate`, `y-coordinate`, and
    /// `Character` columns (in any order); a missing column is a parse
    /// error. Individual rows that are too short or whose coordinates do
    /// not parse as integers are skipped and do not affect the bounds.
    pub fn from_table(table: &Table) -> Result<Grid> {
        let xi = column_index(&table.headers, X_COLUMN)?;
        let yi = column_index(&table.headers, Y_COLUMN)?;
        let ci = column_index(&table.headers, CHAR_COLUMN)?;
        let min_cells = xi.max(yi).max(ci) + 1;

        let mut grid = Grid::default();
        for (row_no, row) in table.rows.iter().enumerate() {
            if row.len() < min_cells {
                warn!(
                    "skipping row {}: expected at least {} cells, got {}",
                    row_no,
                    min_cells,
                    row.len()
                );
                continue;
            }

            let x = match row[xi].parse::<i64>() {
                Ok(v) => v,
                Err(_) => {
                    warn!("skipping row {}: x-coordinate {:?} is not an integer", row_no, row[xi]);
                    continue;
                }
            };
            let y = match row[yi].parse::<i64>() {
                Ok(v) => v,
                Err(_) => {
                    warn!("skipping row {}: y-coordinate {:?} is not an integer", row_no, row[yi]);
                    continue;
                }
            };

            // An empty character cell still claims its coordinate; it just
            // renders as the same space an unclaimed cell would.
            let glyph = row[ci].chars().next().unwrap_or(' ');

            grid.insert(Record { x, y, glyph });
        }

        Ok(grid)
    }

    /// Insert one record, keeping the first glyph seen for its coordinate.
    pub fn insert(&mut self, record: Record) {
        self.cells.entry((record.x, record.y)).or_insert(record.glyph);
        match &mut self.bounds {
            Some(bounds) => bounds.extend(record.x, record.y),
            None => {
                self.bounds = Some(Bounds {
                    min_x: record.x,
                    max_x: record.x,
                    min_y: record.y,
                    max_y: record.y,
                })
            }
        }
    }

    /// Coordinate extrema, or `None` for a grid with no records.
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Render the grid as text rows, topmost (`max_y`) row first.
    ///
    /// Every row spans the full observed width; unclaimed cells render as a
    /// single space. An empty grid renders as zero rows.
    pub fn render(&self) -> Vec<String> {
        let bounds = match self.bounds {
            Some(bounds) => bounds,
            None => return Vec::new(),
        };

        let width = (bounds.max_x - bounds.min_x + 1) as usize;
        (bounds.min_y..=bounds.max_y)
            .rev()
            .map(|y| {
                let mut line = String::with_capacity(width);
                for x in bounds.min_x..=bounds.max_x {
                    line.push(self.cells.get(&(x, y)).copied().unwrap_or(' '));
                }
                line
            })
            .collect()
    }
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| Error::ParseError(format!("required column {:?} is missing", name)))
}
