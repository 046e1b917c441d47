//! Project file discovery.

mod file;
mod scan;

pub use file::ProjectFile;
pub use scan::scan_project;
