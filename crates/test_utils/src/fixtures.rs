//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities across the registry. These
//! fixtures are consistent and predictable so unit tests can assert on
//! exact values.

use chrono::NaiveDate;

use core_kernel::{ItemKind, ReportingPeriod};
use domain_items::{Category, ImageAttachment, ReportItem};

/// Fixture for calendar-date test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard event date (Jan 1, 2025)
    pub fn event_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    /// Standard report date (Jan 2, 2025)
    pub fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
    }

    /// A period spanning all of 2025
    pub fn full_year() -> ReportingPeriod {
        ReportingPeriod::new(
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        )
        .unwrap()
    }

    /// A period that contains no fixture report dates
    pub fn previous_year() -> ReportingPeriod {
        ReportingPeriod::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        )
        .unwrap()
    }
}

/// Fixture for report submissions
pub struct ReportFixtures;

impl ReportFixtures {
    /// A lost brown leather wallet
    pub fn lost_wallet() -> ReportItem {
        ReportItem {
            category: Category::Other,
            name: "Wallet".to_string(),
            description: "Brown leather Wallet".to_string(),
            location: "Campus cafe".to_string(),
            event_date: TemporalFixtures::event_date(),
            reporter: "Riley Owner".to_string(),
            contact: "riley@example.com".to_string(),
            image: None,
        }
    }

    /// A found black backpack
    pub fn found_backpack() -> ReportItem {
        ReportItem {
            category: Category::Bags,
            name: "Backpack".to_string(),
            description: "Black backpack".to_string(),
            location: "Bus stop on Main St".to_string(),
            event_date: TemporalFixtures::event_date(),
            reporter: "Casey Finder".to_string(),
            contact: "casey@example.com".to_string(),
            image: None,
        }
    }

    /// Lost keys matching the walkthrough scenario
    pub fn lost_keys() -> ReportItem {
        ReportItem {
            category: Category::Keys,
            name: "Keys".to_string(),
            description: "House keys on a red ring".to_string(),
            location: "Library".to_string(),
            event_date: TemporalFixtures::event_date(),
            reporter: "Sam Doe".to_string(),
            contact: "sam@example.com".to_string(),
            image: None,
        }
    }

    /// A report carrying a tiny valid PNG attachment
    pub fn with_png_image(mut report: ReportItem) -> ReportItem {
        report.image = Some(ImageAttachment::from_bytes(&ImageFixtures::png_bytes()));
        report
    }
}

/// Fixture for image blobs
pub struct ImageFixtures;

impl ImageFixtures {
    /// Minimal byte sequence carrying the PNG signature
    pub fn png_bytes() -> Vec<u8> {
        vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x01]
    }

    /// Minimal byte sequence carrying the JPEG signature
    pub fn jpeg_bytes() -> Vec<u8> {
        vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]
    }

    /// A blob that is not valid base64
    pub fn malformed_blob() -> ImageAttachment {
        ImageAttachment::from_encoded("%%% definitely not base64 %%%")
    }
}

/// Fixture for collection kinds
pub struct KindFixtures;

impl KindFixtures {
    pub fn both() -> [ItemKind; 2] {
        [ItemKind::Lost, ItemKind::Found]
    }
}
