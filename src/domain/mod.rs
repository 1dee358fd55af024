// src/domain/mod.rs
pub mod access;
pub mod content;
pub mod errors;
pub mod publisher;
pub mod subscription;
pub mod user;
