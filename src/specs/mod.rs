// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific knowledge of the bulletin site: *where the ground truth
//! lives* in each remote document and *how to read it*.
//!
//! ## What lives here
//! - `index` – the bulletin index page: which anchors point at a daily
//!   bulletin and where the date sits in their query string.
//! - `bulletin` – the daily PDF: which cells of the summary table hold the
//!   district name and the new-case count.
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and **PDF decoding** (`core::pdf`).
//! - **Caching/persistence** (`store`) and **date windows** (`date`); the
//!   archive decides *when* to read a page and *whether* to keep the result.
//!
//! ## Typical call chain
//! ```text
//! archive::ensure_cached → source::HttpSource → specs::index::parse_dates
//!                                           ↘ specs::bulletin::parse_record
//!                        → store::Store::save
//! ```
//!
//! Specs are pure functions over fetched text/bytes so they can be tested
//! offline against captured fixtures.
pub mod bulletin;
pub mod index;
