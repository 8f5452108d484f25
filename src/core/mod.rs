//! Core components of the `stockdash` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`FinnhubClient`] and its builder.
//! - The primary [`DashError`] type and the best-effort [`Partial`] result.
//! - Environment [`Settings`] and date-window helpers.

/// The Finnhub client (`FinnhubClient`), builder, and cache policy.
pub mod client;
/// Date windows in the API's string format.
pub mod dates;
/// The primary error type (`DashError`) for the crate.
pub mod error;
/// Partial-success results for best-effort fetchers.
pub mod outcome;
/// Environment-driven configuration.
pub mod settings;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::FinnhubClient`
pub use client::{CachePolicy, FinnhubClient, FinnhubClientBuilder};
pub use dates::{DateRange, date_range, date_range_from};
pub use error::DashError;
pub use outcome::{Partial, SourceFailure};
pub use settings::Settings;
