pub mod annotator;
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod filter;
pub mod models;
pub mod params;
pub mod sentiment;
pub mod state;
