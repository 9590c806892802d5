//! bizhi
//!
//! An unofficial, idiomatic Rust client for the zzzmh wallpaper listing API.
//! One POST per page, a decoded envelope handed to a caller-supplied handler,
//! and pagination bookkeeping captured from the first page that reports it.
//!
//! # Quick Start
//!
//! ```ignore
//! use bizhi::{Client, ListRequest, Target};
//! use tokio_util::sync::CancellationToken;
//!
//! let client = Client::new();
//! let cancel = CancellationToken::new();
//! let mut req = ListRequest::builder().target(Target::Anime).build();
//! loop {
//!     let keep_going = client.listing().get_json(&mut req, &cancel, |page| {
//!         let count = page.result.as_ref().map_or(0, |r| r.records.len());
//!         println!("{} records", count);
//!         Ok(true)
//!     }).await?;
//!     if !keep_going || req.advance().is_none() {
//!         break;
//!     }
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub mod listing;

// Re-export key types at crate root for ergonomic imports.
pub use client::Client;
pub use error::{BoxError, Error};
pub use listing::{ListRequest, ListingService, PageState};
pub use types::*;
