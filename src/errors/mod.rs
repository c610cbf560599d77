pub mod types;

pub use types::PrecinctError;
