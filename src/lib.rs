pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod logging;
pub mod render;
pub mod services;

pub use controller::{ListController, Settlement};
