pub mod lib_scanner;
pub mod normalize;

pub use lib_scanner::LibScanner;
pub use normalize::{normalize_path, path_to_string};
