// Console rendering for extractor messages

use std::path::Path;

use crate::event::ExtractMsg;
use crate::model::IconNameTable;
use crate::pipeline::extractor::CellPlan;

pub const NEXT_STEPS: [&str; 4] = [
    "1. Review the extracted icons",
    "2. Adjust icon_size, cols, rows if needed",
    "3. Move icons to assets/icons/",
    "4. Update the icon component to load the extracted images",
];

pub fn format_msg(msg: &ExtractMsg) -> Vec<String> {
    match msg {
        ExtractMsg::SourceNotFound(path) => vec![
            format!("Error: Could not find {}", path.display()),
            "Make sure the sprite sheet is at the configured sheet path.".to_string(),
        ],
        ExtractMsg::SheetLoaded { width, height } => {
            vec![format!("Sprite sheet size: {}x{}", width, height)]
        }
        ExtractMsg::IconExtracted { name, .. } => vec![format!("Extracted: {}.png", name)],
        ExtractMsg::CellOutOfBounds { x, y } => {
            vec![format!("Warning: Icon at ({}, {}) is out of bounds", x, y)]
        }
        ExtractMsg::Completed { count, output_dir } => {
            let mut lines = vec![
                String::new(),
                format!("✅ Extracted {} icons to {}/", count, display_dir(output_dir)),
                String::new(),
                "Next steps:".to_string(),
            ];
            lines.extend(NEXT_STEPS.iter().map(|s| s.to_string()));
            lines
        }
    }
}

pub fn print_msg(msg: &ExtractMsg) {
    for line in format_msg(msg) {
        println!("{}", line);
    }
}

pub fn format_plan(
    sheet_size: (u32, u32),
    plan: &[CellPlan],
    names: &IconNameTable,
    output_dir: &Path,
) -> Vec<String> {
    let mut lines = vec![format!("Sprite sheet size: {}x{}", sheet_size.0, sheet_size.1)];
    let mut planned = 0;

    for step in plan {
        match step {
            CellPlan::Extract { cell, name_index } => {
                let name = names.get(*name_index).unwrap_or("?");
                lines.push(format!(
                    "[{},{}] ({}, {}) -> {}",
                    cell.row,
                    cell.col,
                    cell.x,
                    cell.y,
                    output_dir.join(format!("{}.png", name)).display()
                ));
                planned += 1;
            }
            CellPlan::OutOfBounds(cell) => {
                lines.push(format!(
                    "[{},{}] ({}, {}) out of bounds, skipped",
                    cell.row, cell.col, cell.x, cell.y
                ));
            }
        }
    }

    lines.push(format!("Would extract {} of {} icons", planned, names.len()));
    lines
}

fn display_dir(dir: &Path) -> String {
    dir.display().to_string().trim_end_matches('/').to_string()
}
