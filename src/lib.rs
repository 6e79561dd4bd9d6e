pub mod chapters;
pub mod config;
pub mod logger;
pub mod scaffold;
pub mod utils;

pub use chapters::{CHAPTERS, Chapter};
pub use config::ScaffoldConfig;
pub use scaffold::{Scaffolder, chapter_filename, sanitize_title};
