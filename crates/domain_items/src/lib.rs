//! Item Registry Domain
//!
//! This crate implements lost and found item records from report submission
//! through claiming, return, and closure, along with the read-side views:
//! filtering, keyword search, statistics, and CSV export.
//!
//! # Item Lifecycle
//!
//! ```text
//! Open -> Claimed -> Returned
//!      \-> Claimed -> Open (claim rejected)
//! Any state -> Closed (administrative, terminal)
//! ```

pub mod item;
pub mod filter;
pub mod stats;
pub mod export;
pub mod image;
pub mod error;

pub use item::{Item, ItemStatus, Category, ReportItem};
pub use filter::{ItemFilter, search_items, recent_items};
pub use stats::{PeriodStatistics, CategoryCount, StatusCount};
pub use export::{csv_header, export_csv};
pub use image::{ImageAttachment, DecodedImage, ImageFormat, ImageError};
pub use error::ItemError;
