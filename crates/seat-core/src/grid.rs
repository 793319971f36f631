//! The cell arena shared by the whole simulation.
//!
//! There is exactly one `Grid` per run, owned by the engine.  Agents hold
//! only `Cell` coordinates into it; every reader borrows `&Grid` and the
//! engine is the only writer.  Storage is a flat row-major `Vec<CellType>`.

use std::fmt;

use crate::{Cell, CellType, CoreError, CoreResult};

/// Fixed-size `rows × cols` grid of [`CellType`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows:  usize,
    cols:  usize,
    cells: Vec<CellType>,
}

impl Grid {
    /// An all-`Empty` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![CellType::Empty; rows * cols] }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    #[inline]
    fn offset(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Cell state, or `None` outside the grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<CellType> {
        self.contains(cell).then(|| self.cells[self.offset(cell)])
    }

    /// `true` if `cell` is inside the grid and holds `ty`.
    #[inline]
    pub fn is(&self, cell: Cell, ty: CellType) -> bool {
        self.get(cell) == Some(ty)
    }

    /// Overwrite one cell.
    ///
    /// # Errors
    ///
    /// [`CoreError::OutOfBounds`] if `cell` is outside the grid.
    pub fn set(&mut self, cell: Cell, ty: CellType) -> CoreResult<()> {
        if !self.contains(cell) {
            return Err(CoreError::OutOfBounds { cell, rows: self.rows, cols: self.cols });
        }
        let i = self.offset(cell);
        self.cells[i] = ty;
        Ok(())
    }

    /// Read-only slice of one row.  Panics if `row >= rows`.
    pub fn row(&self, row: usize) -> &[CellType] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Number of cells of type `ty` in the whole grid.
    pub fn count(&self, ty: CellType) -> usize {
        self.cells.iter().filter(|&&c| c == ty).count()
    }

    /// Number of settled agents (`SeatedAgent` or `Standing`) in
    /// `row`, columns `start..=end`.
    pub fn occupied_in_span(&self, row: usize, start: usize, end: usize) -> usize {
        if row >= self.rows || start > end {
            return 0;
        }
        let end = end.min(self.cols.saturating_sub(1));
        self.row(row)[start..=end].iter().filter(|c| c.is_occupied()).count()
    }

    /// Iterate the in-bounds 8-neighbourhood of `cell`.
    pub fn neighbours8(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let r0 = cell.row.saturating_sub(1);
        let c0 = cell.col.saturating_sub(1);
        let r1 = (cell.row + 1).min(self.rows.saturating_sub(1));
        let c1 = (cell.col + 1).min(self.cols.saturating_sub(1));
        (r0..=r1)
            .flat_map(move |r| (c0..=c1).map(move |c| Cell::new(r, c)))
            .filter(move |&n| n != cell)
    }

    /// Iterate every `(Cell, CellType)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, CellType)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &ty)| (Cell::new(i / self.cols, i % self.cols), ty))
    }
}

impl fmt::Display for Grid {
    /// One text line per row using [`CellType::glyph`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let line: String = self.row(r).iter().map(|c| c.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
