//! Dealfeed - a minimal HTTP API for a fixed listing catalog
//!
//! Dealfeed serves a small, hard-coded collection of property and
//! high-value item listings as JSON:
//! - One catalog route (`/api/deals`) returning every listing
//! - An explicit default route pointing clients at the catalog
//! - No persistence, no queries, no mutation - the catalog is compiled in

pub mod api;
pub mod catalog;
pub mod config;
