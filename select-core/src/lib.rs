pub mod config;
pub mod error;
pub mod model;
pub mod options;
pub mod visibility;
