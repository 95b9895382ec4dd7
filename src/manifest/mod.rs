pub mod classpath;
pub mod manifest_writer;
pub mod report;

pub use classpath::Classpath;
pub use manifest_writer::{ManifestWriter, LINE_ENDING};
pub use report::ManifestReport;
