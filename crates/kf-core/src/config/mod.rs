//! Application configuration domain model.

pub mod app_config;

pub use app_config::{AppConfig, AutoLockTime, ConfigError};
