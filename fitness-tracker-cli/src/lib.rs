// Library exports for the fitness tracker CLI
// This allows testing of internal modules

pub mod api;
pub mod commands;
pub mod config;
pub mod models;
pub mod tracker;
