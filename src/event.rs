use std::path::PathBuf;

/// Progress and diagnostics emitted while slicing a sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractMsg {
    SourceNotFound(PathBuf),
    SheetLoaded { width: u32, height: u32 },
    IconExtracted { name: String, path: PathBuf },
    CellOutOfBounds { x: u64, y: u64 },
    Completed { count: usize, output_dir: PathBuf },
}
