// --- File: crates/bookings_http/src/lib.rs ---
//! reqwest-backed implementation of [`bookings_common::BookingService`].
//!
//! # Example
//!
//! ```rust,no_run
//! use bookings_http::HttpBookingService;
//!
//! async fn list() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = HttpBookingService::new(
//!         reqwest::Client::new(),
//!         "https://bookings.example.com",
//!     )?;
//!     let bookings = service.fetch_bookings("ann@example.com").await?;
//!     println!("{} bookings", bookings.len());
//!     Ok(())
//! }
//! ```

pub mod client;

pub use client::{HttpBookingService, RemoteError};
