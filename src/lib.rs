pub mod catalog;
pub mod config;
pub mod errors;
pub mod filter;
pub mod models;
pub mod utils;
pub mod web;
