pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod logging;
pub mod plain;
pub mod ui;
