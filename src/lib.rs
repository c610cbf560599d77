//! Police records reporting core: aggregates occurrence book, custodial,
//! evidence, officer, and vehicle records from a REST record store into
//! structured, persisted report documents.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod store;
pub mod views;
