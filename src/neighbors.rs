use crate::{grid::square_buffer, Grid, Result};

/// Live-neighbor count (0..=8) of every cell of a [`Grid`] for one generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborCounts {
    counts: Vec<u8>,
    n: usize,
}

impl NeighborCounts {
    /// Zeroed counts for an `n x n` grid.
    pub fn new(n: usize) -> Result<Self> {
        Ok(Self {
            counts: square_buffer(n, 0)?,
            n,
        })
    }

    /// Zeroed counts shaped like `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            counts: vec![0; grid.cells().len()],
            n: grid.size(),
        }
    }

    /// Counts for `grid` in a freshly allocated buffer.
    pub fn of(grid: &Grid) -> Self {
        let mut result = Self::for_grid(grid);
        result.recount(grid);
        result
    }

    /// Overwrites every count from the current state of `grid`.
    ///
    /// Neighbors are the 8 surrounding cells with indices taken modulo `n`.
    pub fn recount(&mut self, grid: &Grid) {
        let n = self.n;
        assert_eq!(grid.size(), n);
        let cells = grid.cells();
        for i in 0..n {
            let i1 = if i == 0 { n - 1 } else { i - 1 };
            let i2 = if i == n - 1 { 0 } else { i + 1 };
            let (up, mid, down) = (
                &cells[i1 * n..(i1 + 1) * n],
                &cells[i * n..(i + 1) * n],
                &cells[i2 * n..(i2 + 1) * n],
            );
            for j in 0..n {
                let j1 = if j == 0 { n - 1 } else { j - 1 };
                let j2 = if j == n - 1 { 0 } else { j + 1 };
                self.counts[j + i * n] = up[j1]
                    + up[j]
                    + up[j2]
                    + mid[j1]
                    + mid[j2]
                    + down[j1]
                    + down[j]
                    + down[j2];
            }
        }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.counts[col + row * self.n]
    }

    /// Row-major view of all counts.
    pub fn counts(&self) -> &[u8] {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ALIVE;
    use proptest::prelude::*;

    fn naive_count(grid: &Grid, row: usize, col: usize) -> u8 {
        let n = grid.size() as isize;
        let mut s = 0;
        for di in -1..=1isize {
            for dj in -1..=1isize {
                if di == 0 && dj == 0 {
                    continue;
                }
                let i = (row as isize + di).rem_euclid(n) as usize;
                let j = (col as isize + dj).rem_euclid(n) as usize;
                s += grid.get(i, j);
            }
        }
        s
    }

    #[test]
    fn test_all_dead() {
        let grid = Grid::blank(7).unwrap();
        assert!(NeighborCounts::of(&grid).counts().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_all_alive() {
        for n in [3, 4, 9] {
            let mut grid = Grid::blank(n).unwrap();
            for i in 0..n {
                for j in 0..n {
                    grid.set(i, j, ALIVE);
                }
            }
            assert!(NeighborCounts::of(&grid).counts().iter().all(|&c| c == 8));
        }
    }

    #[test]
    fn test_corner_wraps() {
        let mut grid = Grid::blank(5).unwrap();
        grid.set(0, 0, ALIVE);
        let counts = NeighborCounts::of(&grid);
        for (i, j) in [(4, 4), (4, 0), (0, 4), (1, 1), (0, 1), (1, 0), (4, 1), (1, 4)] {
            assert_eq!(counts.get(i, j), 1, "i={} j={}", i, j);
        }
        assert_eq!(counts.get(0, 0), 0);
        assert_eq!(counts.get(2, 2), 0);
        assert_eq!(counts.counts().iter().map(|&c| c as usize).sum::<usize>(), 8);
    }

    #[test]
    fn test_single_cell_small_torus() {
        let mut grid = Grid::blank(3).unwrap();
        grid.set(0, 0, ALIVE);
        let counts = NeighborCounts::of(&grid);
        assert_eq!(counts.get(1, 1), 1);
        assert_eq!(counts.get(2, 2), 1);
        assert_eq!(counts.get(0, 0), 0);
    }

    #[test]
    fn test_recount_overwrites() {
        let mut grid = Grid::blank(4).unwrap();
        grid.set(1, 1, ALIVE);
        let mut counts = NeighborCounts::of(&grid);
        grid.set(1, 1, 0);
        counts.recount(&grid);
        assert_eq!(counts, NeighborCounts::new(4).unwrap());
    }

    #[test]
    fn test_new_rejects_overflowing_size() {
        assert!(matches!(
            NeighborCounts::new(usize::MAX),
            Err(crate::Error::GridTooLarge(_))
        ));
    }

    proptest! {
        #[test]
        fn counts_match_modular_indexing(n in 1usize..12, seed in any::<u64>()) {
            use rand::SeedableRng;
            let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed);
            let grid = Grid::random(n, &mut rng).unwrap();
            let counts = NeighborCounts::of(&grid);
            for i in 0..n {
                for j in 0..n {
                    prop_assert_eq!(counts.get(i, j), naive_count(&grid, i, j));
                }
            }
        }
    }
}
