pub mod breakdown;
pub mod engine;

pub use engine::generate_content;
