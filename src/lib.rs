pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod money;
pub mod render;
pub mod services;
pub mod state;
pub mod storage;
