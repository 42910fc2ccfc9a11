use crate::{grid::Cell, utils::parse_rle, Error, Result};
use serde::{Deserialize, Serialize};

/// Rectangular block of cells pasted into the center of a fresh grid.
///
/// Stored row-major. An empty pattern (no rows or no columns) means
/// "seed the grid randomly instead".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Pattern {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Pattern {
    /// Builds a pattern from its rows. All rows must have the same length and
    /// every value must be 0 or 1.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(Error::RaggedPattern {
                    row,
                    expected: cols,
                    got: values.len(),
                });
            }
            if let Some(&bad) = values.iter().find(|&&v| v > 1) {
                return Err(Error::InvalidCellState(bad));
            }
            cells.extend_from_slice(values);
        }
        let rows = if cols == 0 { 0 } else { rows.len() };
        Ok(Self { cells, rows, cols })
    }

    /// Parses a picture where `O`, `o`, `#`, `*` or `1` mark live cells and
    /// `.` or `0` mark dead ones. Short rows are padded with dead cells.
    pub fn from_picture(picture: &str) -> Result<Self> {
        let lines = picture
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty() && !line.starts_with('!'))
            .collect::<Vec<_>>();
        let cols = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        let mut rows = Vec::with_capacity(lines.len());
        for line in lines {
            let mut row = vec![0; cols];
            for (x, c) in line.chars().enumerate() {
                row[x] = match c {
                    'O' | 'o' | '#' | '*' | '1' => 1,
                    '.' | '0' | ' ' => 0,
                    _ => return Err(Error::InvalidPictureChar(c)),
                };
            }
            rows.push(row);
        }
        Self::new(rows)
    }

    /// Parses a pattern in run-length encoded format.
    pub fn from_rle(data: &[u8]) -> Result<Self> {
        let (width, height, cells) = parse_rle(data)?;
        if width == 0 || height == 0 {
            return Ok(Self::default());
        }
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(Error::Rle(format!(
                "{} cells for declared size {width}x{height}",
                cells.len()
            )));
        }
        Ok(Self {
            cells,
            rows: height,
            cols: width,
        })
    }

    /// The 3x7 block used by the default run.
    pub fn demo() -> Self {
        #[rustfmt::skip]
        let cells = vec![
            1, 1, 1, 1, 1, 0, 0,
            1, 0, 1, 0, 0, 0, 1,
            1, 1, 1, 0, 1, 0, 1,
        ];
        Self {
            cells,
            rows: 3,
            cols: 7,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[col + row * self.cols]
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Pattern {
    type Error = Error;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Pattern> for Vec<Vec<Cell>> {
    fn from(pattern: Pattern) -> Self {
        if pattern.cols == 0 {
            return Vec::new();
        }
        pattern
            .cells
            .chunks_exact(pattern.cols)
            .map(<[Cell]>::to_vec)
            .collect()
    }
}
