//! The [`CostGrid`] type: an immutable rectangle of per-cell entry costs.
//!
//! A grid is validated once at construction (non-empty, rectangular) and is
//! read-only afterwards, so it can be shared freely between searches.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Point, Range};

/// An immutable rectangular grid of non-negative cell costs.
///
/// Entering a cell costs its value; the start cell of a route is never
/// entered and so never paid for.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u32>>", into = "Vec<Vec<u32>>")
)]
pub struct CostGrid {
    cells: Vec<u32>,
    width: usize,
    height: usize,
}

impl CostGrid {
    /// Build a grid from row vectors.
    ///
    /// Fails if there are no rows, if a row is empty or if the rows have
    /// differing lengths.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.len();
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.is_empty() {
                return Err(GridError::EmptyRow { row });
            }
            if values.len() != width {
                return Err(GridError::InconsistentWidth {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a `width × height` grid whose costs are produced by `f`, called
    /// once per cell in row-major order.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(Point) -> u32,
    ) -> Result<Self, GridError> {
        if height == 0 {
            return Err(GridError::Empty);
        }
        if width == 0 {
            return Err(GridError::EmptyRow { row: 0 });
        }
        let bounds = Range::new(0, 0, width as i32, height as i32);
        let cells = bounds.iter().map(&mut f).collect();
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Size of the grid as a `Point` (columns, rows).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width as i32, self.height as i32)
    }

    /// The bounding range of the grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    /// The top-left cell.
    #[inline]
    pub fn top_left(&self) -> Point {
        Point::ZERO
    }

    /// The bottom-right cell.
    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.width as i32 - 1, self.height as i32 - 1)
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Cost of entering `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<u32> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Cost of entering `p`.
    ///
    /// Fails with [`GridError::OutOfBounds`] outside the grid; use
    /// [`get`](Self::get) or [`in_bounds`](Self::in_bounds) in hot loops.
    pub fn cost(&self, p: Point) -> Result<u32, GridError> {
        self.get(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.size(),
        })
    }

    /// Return a copy of the grid with the cost at `p` replaced.
    pub fn with_cost(&self, p: Point, cost: u32) -> Result<Self, GridError> {
        let i = self.idx(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.size(),
        })?;
        let mut grid = self.clone();
        grid.cells[i] = cost;
        Ok(grid)
    }

    /// Row-major iterator over `(Point, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Iterator over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks(self.width)
    }
}

impl FromStr for CostGrid {
    type Err = GridError;

    /// Parse one line per row, one decimal digit per cell. Surrounding
    /// whitespace of the whole input is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::Empty);
        }
        let rows = s
            .lines()
            .enumerate()
            .map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .map(|(x, ch)| {
                        ch.to_digit(10).ok_or(GridError::InvalidDigit {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        })
                    })
                    .collect::<Result<Vec<u32>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }
}

impl TryFrom<Vec<Vec<u32>>> for CostGrid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<CostGrid> for Vec<Vec<u32>> {
    fn from(grid: CostGrid) -> Self {
        grid.rows().map(<[u32]>::to_vec).collect()
    }
}

impl fmt::Display for CostGrid {
    /// Digits without separators when every cost is a single digit,
    /// space-separated values otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact = self.cells.iter().all(|&c| c < 10);
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, c) in row.iter().enumerate() {
                if !compact && x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
123
456";

    #[test]
    fn parse_and_lookup() {
        let g: CostGrid = SMALL.parse().unwrap();
        assert_eq!(g.size(), Point::new(3, 2));
        assert_eq!(g.cost(Point::new(0, 0)), Ok(1));
        assert_eq!(g.cost(Point::new(2, 0)), Ok(3));
        assert_eq!(g.cost(Point::new(1, 1)), Ok(5));
        assert_eq!(g.bottom_right(), Point::new(2, 1));
    }

    #[test]
    fn parse_ignores_surrounding_whitespace_and_crlf() {
        let g: CostGrid = "\n  12\r\n34\r\n\n".parse().unwrap();
        assert_eq!(g.size(), Point::new(2, 2));
        assert_eq!(g.get(Point::new(1, 1)), Some(4));
    }

    #[test]
    fn out_of_bounds_lookup() {
        let g: CostGrid = SMALL.parse().unwrap();
        let err = g.cost(Point::new(3, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                pos: Point::new(3, 0),
                size: Point::new(3, 2)
            }
        );
        assert!(!err.is_invalid_grid());
        assert!(!g.in_bounds(Point::new(-1, 0)));
        assert!(!g.in_bounds(Point::new(0, 2)));
        assert_eq!(g.get(Point::new(0, -1)), None);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!("".parse::<CostGrid>(), Err(GridError::Empty));
        assert_eq!(" \n\n".parse::<CostGrid>(), Err(GridError::Empty));
        assert_eq!(CostGrid::from_rows(vec![]), Err(GridError::Empty));
        assert_eq!(CostGrid::from_fn(3, 0, |_| 1), Err(GridError::Empty));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = "123\n45".parse::<CostGrid>().unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert!(err.is_invalid_grid());
        assert_eq!(
            "12\n\n34".parse::<CostGrid>(),
            Err(GridError::EmptyRow { row: 1 })
        );
    }

    #[test]
    fn rejects_non_digits() {
        let err = "12\n3x".parse::<CostGrid>().unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidDigit {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn from_fn_is_row_major() {
        let g = CostGrid::from_fn(3, 2, |p| (p.y * 3 + p.x) as u32).unwrap();
        let costs: Vec<u32> = g.iter().map(|(_, c)| c).collect();
        assert_eq!(costs, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(g.iter().nth(4).map(|(p, _)| p), Some(Point::new(1, 1)));
    }

    #[test]
    fn with_cost_leaves_original_untouched() {
        let g: CostGrid = SMALL.parse().unwrap();
        let h = g.with_cost(Point::new(1, 0), 9).unwrap();
        assert_eq!(g.get(Point::new(1, 0)), Some(2));
        assert_eq!(h.get(Point::new(1, 0)), Some(9));
        assert!(g.with_cost(Point::new(5, 5), 1).is_err());
    }

    #[test]
    fn display_round_trips_digits() {
        let g: CostGrid = SMALL.parse().unwrap();
        assert_eq!(g.to_string(), SMALL);
        let wide = CostGrid::from_rows(vec![vec![10, 2], vec![3, 4]]).unwrap();
        assert_eq!(wide.to_string(), "10 2\n3 4");
    }
}
