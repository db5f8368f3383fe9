//! Library exports for the link unshortener
//!
//! This module exposes internal components for testing and potential library usage.

pub mod config;
pub mod error;
pub mod handler;
pub mod model;
pub mod resolver;
pub mod route;
pub mod scoring;
pub mod service;
