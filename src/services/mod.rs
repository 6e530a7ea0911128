//! Business logic services

pub mod path_filter;

pub use path_filter::PathFilter;
