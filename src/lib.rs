// src/lib.rs
pub mod browser;
pub mod config;
pub mod extraction;
pub mod sheets;
