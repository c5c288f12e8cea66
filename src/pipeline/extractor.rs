use anyhow::{Context, Result};
use std::path::PathBuf;

use super::fs_ops::ensure_dir;
use super::png_writer::write_png;
use crate::config::Config;
use crate::event::ExtractMsg;
use crate::model::{Cell, GridConfig, SpriteSheet};

/// What happens to one visited grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPlan {
    Extract { cell: Cell, name_index: usize },
    OutOfBounds(Cell),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedIcon {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct ExtractReport {
    pub sheet_size: (u32, u32),
    pub output_dir: PathBuf,
    pub extracted: Vec<ExtractedIcon>,
    pub skipped: Vec<(u64, u64)>,
}

impl ExtractReport {
    pub fn count(&self) -> usize {
        self.extracted.len()
    }
}

#[derive(Debug, Clone)]
pub enum ExtractOutcome {
    SourceNotFound(PathBuf),
    Completed(ExtractReport),
}

impl ExtractOutcome {
    pub fn report(&self) -> Option<&ExtractReport> {
        match self {
            ExtractOutcome::Completed(report) => Some(report),
            ExtractOutcome::SourceNotFound(_) => None,
        }
    }
}

/// Walks the grid row-major against a `width` x `height` sheet.
///
/// Names are handed out only to cells that fit, so an out-of-bounds cell
/// shifts every later name one cell further along. Once all `name_count`
/// names are used the rest of each row is not visited.
pub fn plan_cells(grid: &GridConfig, width: u32, height: u32, name_count: usize) -> Vec<CellPlan> {
    let mut plan = Vec::new();
    let mut next_name = 0;

    for row in 0..grid.rows {
        for cell in grid.row_cells(row) {
            if next_name >= name_count {
                break;
            }

            if !grid.fits(&cell, width, height) {
                plan.push(CellPlan::OutOfBounds(cell));
                continue;
            }

            plan.push(CellPlan::Extract {
                cell,
                name_index: next_name,
            });
            next_name += 1;
        }
    }

    plan
}

/// Decodes the sheet and returns its dimensions with the cell plan, without
/// writing anything. `None` when the sheet does not exist.
pub fn dry_run(config: &Config) -> Result<Option<((u32, u32), Vec<CellPlan>)>> {
    let Some(sheet) = SpriteSheet::open(&config.sheet_path)? else {
        return Ok(None);
    };
    let (width, height) = sheet.dimensions();
    let plan = plan_cells(&config.grid, width, height, config.names.len());
    Ok(Some(((width, height), plan)))
}

/// Slices the configured sheet into `<output_dir>/<name>.png` files.
///
/// A missing sheet is reported through `on_msg` and returns
/// [`ExtractOutcome::SourceNotFound`] without touching the output directory.
/// Decode and write failures are returned as errors; icons already written
/// stay on disk.
pub fn extract_icons<F>(config: &Config, mut on_msg: F) -> Result<ExtractOutcome>
where
    F: FnMut(ExtractMsg),
{
    let Some(sheet) = SpriteSheet::open(&config.sheet_path)? else {
        log::debug!("sprite sheet missing at {}", config.sheet_path.display());
        on_msg(ExtractMsg::SourceNotFound(config.sheet_path.clone()));
        return Ok(ExtractOutcome::SourceNotFound(config.sheet_path.clone()));
    };

    ensure_dir(&config.output_dir).with_context(|| {
        format!("Failed to create output directory {}", config.output_dir.display())
    })?;

    let (width, height) = sheet.dimensions();
    on_msg(ExtractMsg::SheetLoaded { width, height });

    let mut report = ExtractReport {
        sheet_size: (width, height),
        output_dir: config.output_dir.clone(),
        ..ExtractReport::default()
    };

    let icon_size = config.grid.icon_size;
    for step in plan_cells(&config.grid, width, height, config.names.len()) {
        match step {
            CellPlan::OutOfBounds(cell) => {
                log::debug!("cell ({}, {}) at ({}, {}) out of bounds", cell.row, cell.col, cell.x, cell.y);
                on_msg(ExtractMsg::CellOutOfBounds { x: cell.x, y: cell.y });
                report.skipped.push((cell.x, cell.y));
            }
            CellPlan::Extract { cell, name_index } => {
                let name = config
                    .names
                    .get(name_index)
                    .context("Icon name index out of range")?
                    .to_string();
                let path = config.output_dir.join(format!("{}.png", name));

                log::debug!(
                    "cropping {}x{} at ({}, {}) -> {}",
                    icon_size,
                    icon_size,
                    cell.x,
                    cell.y,
                    path.display()
                );
                let icon = sheet.crop(&cell, icon_size)?;
                write_png(&icon, &path)?;

                on_msg(ExtractMsg::IconExtracted {
                    name: name.clone(),
                    path: path.clone(),
                });
                report.extracted.push(ExtractedIcon { name, path });
            }
        }
    }

    on_msg(ExtractMsg::Completed {
        count: report.count(),
        output_dir: config.output_dir.clone(),
    });

    Ok(ExtractOutcome::Completed(report))
}
