pub mod extractor;
pub mod fs_ops;
pub mod png_writer;

pub use extractor::{CellPlan, ExtractOutcome, ExtractReport, ExtractedIcon, extract_icons};
