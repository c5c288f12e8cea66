// Library exports for sheet2icons

pub mod config;
pub mod event;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use config::Config;
pub use pipeline::extractor::{ExtractOutcome, ExtractReport, extract_icons, plan_cells};
