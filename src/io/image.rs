//! PNG export of a generated maze

use image::{ImageFormat, Rgba, RgbaImage};
use log::info;
use std::collections::HashSet;
use std::path::Path;

use crate::algorithm::generator::Maze;
use crate::io::error::{MazeError, Result, file_system, invalid_parameter};
use crate::spatial::grid::Direction;
use crate::spatial::position::Position;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const WALL: Rgba<u8> = Rgba([24, 24, 24, 255]);
const PATTERN: Rgba<u8> = Rgba([64, 200, 220, 255]);
const PATH: Rgba<u8> = Rgba([250, 210, 60, 255]);
const ENTRY: Rgba<u8> = Rgba([60, 180, 75, 255]);
const EXIT: Rgba<u8> = Rgba([220, 50, 50, 255]);

/// Draw a maze into an image, `cell_size` pixels per cell
///
/// Walls are one pixel thick along the cell edges. Pattern cells are filled,
/// entry and exit are marked, and path cells are shaded.
///
/// # Errors
///
/// Returns an error if `cell_size` is below 3 or the image dimensions would
/// overflow
pub fn draw_maze(maze: &Maze, cell_size: u32) -> Result<RgbaImage> {
    if cell_size < 3 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be at least 3 pixels",
        ));
    }

    let grid = maze.grid();
    let to_pixels = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(cell_size))
            .and_then(|pixels| pixels.checked_add(1))
            .ok_or_else(|| invalid_parameter("cell_size", &cell_size, &"image too large"))
    };
    let mut img = RgbaImage::from_pixel(
        to_pixels(grid.width())?,
        to_pixels(grid.height())?,
        BACKGROUND,
    );

    let path_cells: HashSet<Position> =
        maze.path().positions(maze.entry()).into_iter().collect();

    for cell in grid.positions() {
        let fill = if maze.obstructions().contains(cell) {
            Some(PATTERN)
        } else if cell == maze.entry() {
            Some(ENTRY)
        } else if cell == maze.exit() {
            Some(EXIT)
        } else if path_cells.contains(&cell) {
            Some(PATH)
        } else {
            None
        };
        if let Some(color) = fill {
            fill_cell(&mut img, cell, cell_size, color);
        }

        let left = cell.x as u32 * cell_size;
        let top = cell.y as u32 * cell_size;
        for direction in Direction::ALL {
            if !grid.has_wall(cell, direction) {
                continue;
            }
            for offset in 0..=cell_size {
                let (px, py) = match direction {
                    Direction::North => (left + offset, top),
                    Direction::South => (left + offset, top + cell_size),
                    Direction::West => (left, top + offset),
                    Direction::East => (left + cell_size, top + offset),
                };
                if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                    *pixel = WALL;
                }
            }
        }
    }

    Ok(img)
}

fn fill_cell(img: &mut RgbaImage, cell: Position, cell_size: u32, color: Rgba<u8>) {
    let left = cell.x as u32 * cell_size;
    let top = cell.y as u32 * cell_size;
    for py in top + 1..top + cell_size {
        for px in left + 1..left + cell_size {
            if let Some(pixel) = img.get_pixel_mut_checked(px, py) {
                *pixel = color;
            }
        }
    }
}

/// Export a maze as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is too small or the image would be too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_maze_png(maze: &Maze, cell_size: u32, output_path: &Path) -> Result<()> {
    let img = draw_maze(maze, cell_size)?;

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }

    img.save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| MazeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    info!("Maze image saved to {}", output_path.display());
    Ok(())
}
