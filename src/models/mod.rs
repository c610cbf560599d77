pub mod params;
pub mod records;
pub mod report;
pub mod snapshot;

pub use params::*;
pub use records::*;
pub use report::*;
pub use snapshot::*;
