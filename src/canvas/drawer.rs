//! Drawing algorithms: line rasterization, rectangle outlines and bucket fill

use std::collections::{HashSet, VecDeque};

use tracing::{debug, warn};

use super::canvas::Canvas;
use super::color::Color;
use super::shapes::{Line, Rectangle, Shape};
use crate::errors::{DrawError, Result};

/// 0-based grid position `(x, y)`
pub type GridPoint = (usize, usize);

/// Result of a bucket fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// Region was recoloured; `cells` is its size
    Painted { cells: usize },
    /// Seeds already carried the target colour, nothing changed
    AlreadyColored,
}

/// Stateless drawing operations on a [`Canvas`]
#[derive(Debug, Default, Clone, Copy)]
pub struct Drawer;

impl Drawer {
    pub fn new() -> Self {
        Self
    }

    /// Draw a horizontal or vertical line, endpoints included
    ///
    /// Fails without touching the canvas if any part of the line falls outside it.
    pub fn draw_line(&self, canvas: &mut Canvas, line: &Line) -> Result<()> {
        self.draw(canvas, line)
    }

    /// Draw the four edges of a rectangle
    ///
    /// All edges are checked before any cell is set, so a rectangle that does not
    /// fit leaves the canvas unchanged.
    pub fn draw_rectangle(&self, canvas: &mut Canvas, rectangle: &Rectangle) -> Result<()> {
        self.draw(canvas, rectangle)
    }

    /// Draw any shape by rasterizing its lines
    pub fn draw<S: Shape>(&self, canvas: &mut Canvas, shape: &S) -> Result<()> {
        let mut plotted = Vec::new();
        for line in shape.lines() {
            plotted.extend(Self::plot(canvas, &line)?);
        }
        for &(x, y) in &plotted {
            canvas.set_filled(x, y, true)?;
        }
        debug!("Drew shape at {} ({} cells)", shape.coords(), plotted.len());
        Ok(())
    }

    /// Grid cells covered by `line`, or an error if it leaves the canvas
    fn plot(canvas: &Canvas, line: &Line) -> Result<Vec<GridPoint>> {
        let coords = line.coords();
        let (x0, y0) = coords.start_coordinate();
        let (x_end, y_end) = coords.end_coordinate();
        let out_of_bounds = || {
            DrawError::geometry(format!(
                "line {coords} exceeds canvas bounds {}x{}",
                canvas.width(),
                canvas.height()
            ))
        };

        // Endpoints bound the whole segment
        let last = canvas.grid_point(x_end.saturating_sub(1), y_end.saturating_sub(1));
        if canvas.grid_point(x0, y0).is_none() || last.is_none() {
            return Err(out_of_bounds());
        }
        line.points()
            .map(|(x, y)| canvas.grid_point(x, y))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(out_of_bounds)
    }

    /// Flood-fill the 8-connected region around `seeds` with `color`
    ///
    /// Cells belong to a seed's region when their visible paint matches it:
    /// filled cells by colour, blank cells with other blank cells.
    pub fn draw_bucket_fill(
        &self,
        canvas: &mut Canvas,
        seeds: &HashSet<GridPoint>,
        color: Color,
    ) -> Result<FillOutcome> {
        if seeds.is_empty() {
            return Ok(FillOutcome::Painted { cells: 0 });
        }
        if let Some(&(x, y)) = seeds.iter().find(|&&(x, y)| !canvas.exists(x, y)) {
            return Err(DrawError::geometry(format!(
                "fill point ({}, {}) is outside the {}x{} canvas",
                x + 1,
                y + 1,
                canvas.width(),
                canvas.height()
            )));
        }

        let target = Some(color);
        if seeds
            .iter()
            .all(|&(x, y)| canvas.get(x, y).is_some_and(|c| c.paint() == target))
        {
            warn!("Region already has colour '{}', nothing to fill", color);
            return Ok(FillOutcome::AlreadyColored);
        }

        let region = self.collect_region(canvas, seeds);
        let changed = self.fill_colour(canvas, &region, color);
        debug!(
            "Bucket fill with '{}' reached {} cells, {} changed",
            color,
            region.len(),
            changed
        );
        Ok(FillOutcome::Painted {
            cells: region.len(),
        })
    }

    /// Worklist expansion from the seeds until no new cells are discovered
    fn collect_region(&self, canvas: &Canvas, seeds: &HashSet<GridPoint>) -> HashSet<GridPoint> {
        let mut region = seeds.clone();
        let mut frontier: VecDeque<GridPoint> = seeds.iter().copied().collect();

        while let Some((x, y)) = frontier.pop_front() {
            for neighbour in self.find_surrounding_coords(canvas, x, y) {
                if region.insert(neighbour) {
                    frontier.push_back(neighbour);
                }
            }
            debug_assert!(region.len() <= canvas.area());
        }
        region
    }

    /// Existing 8-neighbours of `(x, y)` with the same paint, excluding `(x, y)`
    pub fn find_surrounding_coords(&self, canvas: &Canvas, x: usize, y: usize) -> HashSet<GridPoint> {
        let Some(origin) = canvas.get(x, y) else {
            return HashSet::new();
        };
        let paint = origin.paint();

        let mut found = HashSet::with_capacity(8);
        for dy in -1_isize..=1 {
            for dx in -1_isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };
                if canvas.get(nx, ny).is_some_and(|c| c.paint() == paint) {
                    found.insert((nx, ny));
                }
            }
        }
        found
    }

    /// Fill and recolour every listed cell; returns how many visibly changed
    pub fn fill_colour(&self, canvas: &mut Canvas, coords: &HashSet<GridPoint>, color: Color) -> usize {
        let mut changed = 0;
        for &(x, y) in coords {
            let Some(cell) = canvas.get_mut(x, y) else {
                continue;
            };
            if cell.paint() != Some(color) {
                changed += 1;
            }
            cell.set_filled(true);
            if cell.color() != color {
                cell.set_color(color);
            }
        }
        changed
    }
}
