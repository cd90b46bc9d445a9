// src/config/mod.rs

pub mod nums_config;

pub use nums_config::{NumsConfig, SequenceConfig};
