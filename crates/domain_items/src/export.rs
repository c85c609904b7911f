//! CSV report export
//!
//! Produces the downloadable report for a filtered collection. Fields are
//! joined verbatim with commas and never quoted or escaped; embedded
//! commas or newlines in free-text fields will corrupt the row layout.
//! This is a known limitation of the export format, kept as-is.

use core_kernel::ItemKind;

use crate::item::Item;

/// Header row for an export of the given collection
pub fn csv_header(kind: ItemKind) -> String {
    let event_column = match kind {
        ItemKind::Lost => "Date Lost",
        ItemKind::Found => "Date Found",
    };
    format!("ID,Item Name,Type,Status,{event_column},Date Reported,Location")
}

/// Renders the export: header row plus one row per item, in input order
pub fn export_csv<'a, I>(kind: ItemKind, items: I) -> String
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut out = csv_header(kind);
    out.push('\n');
    for item in items {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            item.id,
            item.name,
            item.category,
            item.status,
            item.event_date,
            item.reported_on,
            item.location,
        ));
    }
    out
}
