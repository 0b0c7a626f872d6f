pub mod agenda;
pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod render;
