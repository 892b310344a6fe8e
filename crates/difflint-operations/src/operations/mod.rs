mod analyze;
mod changed_files;
mod environments;

pub use analyze::{AnalyzeInput, AnalyzeOperation, AnalyzeOutcome};
pub use changed_files::{ChangedFilesInput, ChangedFilesOperation};
pub use environments::{DiscoverEnvironmentsInput, DiscoverEnvironmentsOperation};
