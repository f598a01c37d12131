// src/lib.rs
pub mod api;
pub mod banner;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod navigation;
pub mod poller;
pub mod render;
pub mod synchronizer;
pub mod view;
