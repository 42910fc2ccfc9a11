use crate::{Error, Pattern, Result};
use rand::Rng;

/// State of a single cell: 0 is dead, 1 is alive.
pub type Cell = u8;

pub const DEAD: Cell = 0;
pub const ALIVE: Cell = 1;

/// Share of live cells when a grid is seeded without a pattern.
pub const RANDOM_FILL_RATE: f64 = 0.15;

/// Square field of cells with edges stitched together (torus).
///
/// Cells are addressed as `(row, col)` and stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    n: usize,
}

impl Grid {
    /// Creates an `n x n` field of dead cells.
    pub fn blank(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidDimension(n));
        }
        Ok(Self {
            cells: square_buffer(n, DEAD)?,
            n,
        })
    }

    /// Creates a field where every cell is independently alive with
    /// probability [`RANDOM_FILL_RATE`].
    pub fn random(n: usize, rng: &mut impl Rng) -> Result<Self> {
        let mut result = Self::blank(n)?;
        for cell in result.cells.iter_mut() {
            *cell = rng.gen_bool(RANDOM_FILL_RATE) as Cell;
        }
        Ok(result)
    }

    /// Creates a dead field with `pattern` pasted at its center.
    ///
    /// The top-left corner of the pattern lands at
    /// `(ceil(n/2) - ceil(rows/2), ceil(n/2) - ceil(cols/2))`.
    pub fn with_pattern(n: usize, pattern: &Pattern) -> Result<Self> {
        let mut result = Self::blank(n)?;
        let (rows, cols) = (pattern.rows(), pattern.cols());
        let too_large = || Error::PatternTooLarge { rows, cols, size: n };
        let start_row = n.div_ceil(2).checked_sub(rows.div_ceil(2)).ok_or_else(too_large)?;
        let start_col = n.div_ceil(2).checked_sub(cols.div_ceil(2)).ok_or_else(too_large)?;
        if start_row + rows > n || start_col + cols > n {
            return Err(too_large());
        }
        for i in 0..rows {
            for j in 0..cols {
                result.set(start_row + i, start_col + j, pattern.get(i, j));
            }
        }
        Ok(result)
    }

    /// Centered pattern if one is given and non-empty, random field otherwise.
    pub fn initialize(n: usize, pattern: Option<&Pattern>, rng: &mut impl Rng) -> Result<Self> {
        match pattern {
            Some(pattern) if !pattern.is_empty() => Self::with_pattern(n, pattern),
            _ => Self::random(n, rng),
        }
    }

    /// Side length of the field.
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[col + row * self.n]
    }

    /// Any non-zero `state` is stored as [`ALIVE`].
    pub fn set(&mut self, row: usize, col: usize, state: Cell) {
        self.cells[col + row * self.n] = state.min(ALIVE);
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().map(|&c| c as usize).sum()
    }

    /// Fills an RGBA buffer of `n * n` pixels, live cells black on white.
    pub fn draw(&self, screen: &mut [u8]) {
        const BYTES_IN_PIXEL: usize = 4;

        assert_eq!(screen.len(), BYTES_IN_PIXEL * self.n * self.n);
        for (pixel, &cell) in screen.chunks_exact_mut(BYTES_IN_PIXEL).zip(&self.cells) {
            let color = if cell == ALIVE {
                [0, 0, 0, 0xff]
            } else {
                [0xff, 0xff, 0xff, 0xff]
            };
            pixel.copy_from_slice(&color);
        }
    }
}

/// Allocates `n * n` copies of `value`, failing instead of overflowing or
/// aborting when the buffer cannot exist.
pub(crate) fn square_buffer<T: Clone>(n: usize, value: T) -> Result<Vec<T>> {
    let len = n.checked_mul(n).ok_or(Error::GridTooLarge(n))?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::GridTooLarge(n))?;
    buffer.resize(len, value);
    Ok(buffer)
}

impl std::fmt::Display for Grid {
    /// One line of `0`/`1` digits per row.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks_exact(self.n) {
            for &cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
