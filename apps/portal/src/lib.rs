pub mod client;
pub mod commands;
pub mod config;
pub mod filter;
pub mod links;
pub mod models;
pub mod pagination;
pub mod view;
