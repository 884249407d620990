// src/lib.rs

//! Course Search Library

pub mod error;
pub mod handler;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
#[cfg(feature = "web")]
pub mod web;
