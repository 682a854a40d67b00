//! # Prodcat Architecture
//!
//! Prodcat is a **UI-agnostic catalog filtering library** with a terminal client.
//! It shows a table of products joined with their category and owning user, and
//! lets the viewer narrow it by free-text search, owner and a set of categories.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, drives `browse`        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the shared Catalog and the FilterController         │
//! │  - Resolves typed selectors (user names, category ids)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Builds rows, filter tabs and reports as Rust types       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  - filter.rs: the three-stage filter engine                 │
//! │  - controller.rs: mutable filter criteria                   │
//! │  - resolver.rs + catalog.rs: immutable, indexed data        │
//! │  - store/: where the data comes from                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Data Is Fixed At Startup
//!
//! A [`catalog::Catalog`] is loaded once and shared read-only. The only mutable
//! state is the [`controller::FilterController`], owned by whoever drives the view.
//! The filter engine is a pure function of the catalog and the criteria, so any
//! number of readers may call it.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Row, tab and report builders
//! - [`filter`]: The filter engine and [`filter::FilterCriteria`]
//! - [`controller`]: Filter state and its operations
//! - [`resolver`]: Id lookups joining products, categories and users
//! - [`catalog`]: The loaded, indexed data
//! - [`store`]: Data sources (built-in, JSON directory, in-memory)
//! - [`model`]: Core data types (`User`, `Category`, `Product`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod model;
pub mod resolver;
pub mod store;
