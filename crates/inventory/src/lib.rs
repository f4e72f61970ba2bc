//! Warehouse vocabulary.

pub mod bin_location;

pub use bin_location::BinLocation;
