pub mod app;
pub mod catalog;
pub mod code_utils;
pub mod config;
pub mod data;
pub mod judge;
pub mod model;
pub mod progress;
pub mod storage;
pub mod ui;
pub mod view_models;

pub use app::PrepApp;
