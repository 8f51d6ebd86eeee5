// Library exports for the fitness tracker API

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod repository;
pub mod services;
