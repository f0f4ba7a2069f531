pub mod config;
pub mod kit;
pub mod platform;
pub mod ui;
