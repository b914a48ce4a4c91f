//! Grid module - the snake's play field
//!
//! Each cell holds an `i32`:
//! - `0`: empty
//! - `-1`: apple
//! - positive: a snake segment's freshness, highest at the head, counting
//!   down by one every tick until the segment vacates at zero
//!
//! Coordinates are `(row, col)`, stored flat in row-major order.

/// Empty cell value
pub const EMPTY: i32 = 0;

/// Apple cell value
pub const APPLE: i32 = -1;

/// Play field of `rows x cols` cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Value at `(row, col)`, `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: i32) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// One row of cell values.
    pub fn row(&self, row: usize) -> &[i32] {
        let start = row.min(self.rows) * self.cols;
        let end = (start + self.cols).min(self.cells.len());
        &self.cells[start..end]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        // `chunks` panics on zero; an empty grid yields nothing either way.
        self.cells.chunks(self.cols.max(1))
    }

    /// Decrement every snake segment by one.
    ///
    /// Returns true when a segment with value 1 was present, meaning the tail
    /// vacated its cell this tick.
    pub fn age_segments(&mut self) -> bool {
        let mut tail_vacated = false;
        for v in self.cells.iter_mut().filter(|v| **v > 0) {
            if *v == 1 {
                tail_vacated = true;
            }
            *v -= 1;
        }
        tail_vacated
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == EMPTY).count()
    }

    pub fn count_apples(&self) -> usize {
        self.cells.iter().filter(|&&v| v == APPLE).count()
    }

    pub fn count_segments(&self) -> usize {
        self.cells.iter().filter(|&&v| v > 0).count()
    }

    /// Position of the `n`-th empty cell (1-based) in row-major order.
    ///
    /// Walks the grid once, counting down on empty cells, so a uniform `n`
    /// picks uniformly among empty cells without building a list of them.
    pub fn nth_empty(&self, n: usize) -> Option<(usize, usize)> {
        if n == 0 {
            return None;
        }
        let mut remaining = n;
        for (i, &v) in self.cells.iter().enumerate() {
            if v != EMPTY {
                continue;
            }
            remaining -= 1;
            if remaining == 0 {
                return Some((i / self.cols, i % self.cols));
            }
        }
        None
    }

    /// Snake segments as `((row, col), value)`, highest value first.
    pub fn segments(&self) -> Vec<((usize, usize), i32)> {
        let mut out: Vec<_> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v > 0)
            .map(|(i, &v)| ((i / self.cols, i % self.cols), v))
            .collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let g = Grid::new(6, 10);
        assert_eq!(g.len(), 60);
        assert_eq!(g.count_empty(), 60);
        assert_eq!(g.get(5, 9), Some(EMPTY));
        assert_eq!(g.get(6, 0), None);
        assert_eq!(g.get(0, 10), None);
    }

    #[test]
    fn set_out_of_bounds_is_rejected() {
        let mut g = Grid::new(2, 2);
        assert!(!g.set(2, 0, APPLE));
        assert!(g.set(1, 1, APPLE));
        assert_eq!(g.count_apples(), 1);
    }

    #[test]
    fn aging_reports_tail_and_clears_it() {
        let mut g = Grid::new(1, 3);
        g.set(0, 0, 1);
        g.set(0, 1, 2);
        g.set(0, 2, APPLE);
        assert!(g.age_segments());
        assert_eq!(g.row(0), &[0, 1, APPLE]);
    }

    #[test]
    fn aging_growing_snake_reports_no_tail() {
        let mut g = Grid::new(1, 3);
        g.set(0, 0, 2);
        g.set(0, 1, 3);
        assert!(!g.age_segments());
        assert_eq!(g.row(0), &[1, 2, 0]);
    }

    #[test]
    fn nth_empty_skips_occupied_cells() {
        let mut g = Grid::new(2, 3);
        g.set(0, 0, 1);
        g.set(0, 2, APPLE);
        assert_eq!(g.nth_empty(1), Some((0, 1)));
        assert_eq!(g.nth_empty(2), Some((1, 0)));
        assert_eq!(g.nth_empty(4), Some((1, 2)));
        assert_eq!(g.nth_empty(5), None);
        assert_eq!(g.nth_empty(0), None);
    }

    #[test]
    fn segments_are_sorted_head_first() {
        let mut g = Grid::new(2, 2);
        g.set(1, 1, 1);
        g.set(0, 0, 3);
        g.set(0, 1, 2);
        let segs = g.segments();
        assert_eq!(segs, vec![((0, 0), 3), ((0, 1), 2), ((1, 1), 1)]);
    }

    #[test]
    fn iter_rows_on_empty_grid_yields_nothing() {
        let g = Grid::default();
        assert_eq!(g.iter_rows().count(), 0);
    }
}
