//! TVMaze Catalog Core Library
//!
//! This crate provides the client side of the TVMaze television-show
//! catalog (<https://api.tvmaze.com>).
//!
//! # Features
//! - Search for shows by term
//! - List all episodes of a show
//! - Typed wire-to-domain mapping with a fixed image fallback
//! - Markup-safe summaries via [`RichText`]

pub mod api;
pub mod catalog;
pub mod client;
pub mod error;
pub mod mapper;
pub mod types;

// Re-export main types for convenience
pub use catalog::TvMazeCatalog;
pub use client::{ClientConfig, TvMazeClient};
pub use error::{Result, TvMazeError};
pub use types::{Episode, RichText, Show, MISSING_IMAGE_URL};
