//! Snapshot sinks.
//!
//! The simulation calls [`Renderer::render`] for generation 0 and then every
//! `write_frequency` generations. File renderers name their output
//! `generation<N>.<ext>`.

use crate::{Grid, Result};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::debug;

pub trait Renderer {
    fn render(&mut self, grid: &Grid, iteration: u64) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn render(&mut self, grid: &Grid, iteration: u64) -> Result<()> {
        (**self).render(grid, iteration)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, grid: &Grid, iteration: u64) -> Result<()> {
        (**self).render(grid, iteration)
    }
}

pub fn snapshot_file_name(iteration: u64, extension: &str) -> String {
    format!("generation{}.{}", iteration, extension)
}

/// Writes one PNG per snapshot, live cells black on white, each cell
/// `cell_size` pixels wide with a one-pixel grid line when cells are large
/// enough to show it.
pub struct PngRenderer {
    dir: PathBuf,
    cell_size: u32,
}

impl PngRenderer {
    pub const DEFAULT_CELL_SIZE: u32 = 16;
    const GRID_LINE_MIN_CELL_SIZE: u32 = 4;
    const GRID_LINE_COLOR: Rgba<u8> = Rgba([0x5f, 0x9e, 0xa0, 0xff]);

    pub fn new(dir: impl Into<PathBuf>, cell_size: u32) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            cell_size: cell_size.max(1),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn to_image(&self, grid: &Grid) -> RgbaImage {
        const BYTES_IN_PIXEL: usize = 4;

        let n = grid.size();
        let mut screen = vec![0; BYTES_IN_PIXEL * n * n];
        grid.draw(&mut screen);

        let cs = self.cell_size;
        let side = n as u32 * cs;
        let grid_lines = cs >= Self::GRID_LINE_MIN_CELL_SIZE;
        RgbaImage::from_fn(side, side, |x, y| {
            if grid_lines && (x % cs == 0 || y % cs == 0) {
                return Self::GRID_LINE_COLOR;
            }
            let i = BYTES_IN_PIXEL * ((x / cs) as usize + (y / cs) as usize * n);
            Rgba([screen[i], screen[i + 1], screen[i + 2], screen[i + 3]])
        })
    }
}

impl Renderer for PngRenderer {
    fn render(&mut self, grid: &Grid, iteration: u64) -> Result<()> {
        let path = self.dir.join(snapshot_file_name(iteration, "png"));
        self.to_image(grid).save(&path)?;
        debug!(path = %path.display(), "wrote snapshot");
        Ok(())
    }
}

/// Writes one text file per snapshot, a row of `0`/`1` digits per grid row.
pub struct TextRenderer {
    dir: PathBuf,
}

impl TextRenderer {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, grid: &Grid, iteration: u64) -> Result<()> {
        let path = self.dir.join(snapshot_file_name(iteration, "txt"));
        std::fs::write(&path, grid.to_string())?;
        debug!(path = %path.display(), "wrote snapshot");
        Ok(())
    }
}

/// Keeps every snapshot in memory.
#[derive(Default)]
pub struct Recorder {
    pub snapshots: Vec<(u64, Grid)>,
}

impl Recorder {
    pub fn iterations(&self) -> Vec<u64> {
        self.snapshots.iter().map(|(i, _)| *i).collect()
    }
}

impl Renderer for Recorder {
    fn render(&mut self, grid: &Grid, iteration: u64) -> Result<()> {
        self.snapshots.push((iteration, grid.clone()));
        Ok(())
    }
}

/// Discards every snapshot.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _grid: &Grid, _iteration: u64) -> Result<()> {
        Ok(())
    }
}
