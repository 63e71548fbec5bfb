//! Extracts the `abi` field of compiled contract build artifacts into
//! standalone JSON files, one per contract.

pub mod cli;
pub mod config;
pub mod exporter;
