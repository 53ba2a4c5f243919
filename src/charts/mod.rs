//! Chart composers: normalized data in, declarative figures out.
//!
//! Composers do no numeric work beyond formatting; every figure is a pure
//! function of the normalized dataset and its options.

pub mod death_rate;
pub mod growth_curve;
pub mod headline;
pub mod per_capita;
pub mod world_map;

pub use death_rate::{DeathRateOptions, death_rate_bar};
pub use growth_curve::{GrowthCurveOptions, growth_curve};
pub use headline::{HeadlineOptions, headline};
pub use per_capita::{PerCapitaOptions, per_capita_scatter};
pub use world_map::{WorldMapOptions, world_map};

use chrono::NaiveDate;

use crate::core::normalize::NormalizedData;
use crate::figure::{Font, Visibility};

pub const SOURCE_NOTE: &str = "Source: European Centre for Disease Prevention and Control";

/// Entities the original dashboard showed by default; a convenience
/// starting point for the configurable allow-lists.
pub const DEFAULT_VISIBLE_ENTITIES: [&str; 6] = [
    "United_States_of_America",
    "Japan",
    "United_Kingdom",
    "Italy",
    "Switzerland",
    "France",
];

pub(crate) const TITLE_FONT_SIZE: f64 = 14.0;
pub(crate) const AXIS_TITLE_FONT_SIZE: f64 = 11.0;
pub(crate) const TITLE_FONT_FAMILY: &str = "Arial";

pub(crate) fn title_font() -> Font {
    Font::sized(TITLE_FONT_SIZE).with_family(TITLE_FONT_FAMILY)
}

/// Bold heading followed by a small-print subtitle line.
pub(crate) fn titled(main: &str, subtitle: &str) -> String {
    format!("<b>{main}</b><br><span style=\"font-size: 11px;\">{subtitle}</span>")
}

pub(crate) fn entity_visibility(entity: &str, default_visible: &[String]) -> Visibility {
    if default_visible.iter().any(|id| id == entity) {
        Visibility::Visible
    } else {
        Visibility::LegendOnly
    }
}

pub(crate) fn latest_label(data: &NormalizedData) -> String {
    data.latest_date()
        .map(|date| date_label(date))
        .unwrap_or_default()
}

pub(crate) fn date_label(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Thousands-separated rendering of a (rounded) value for text labels.
pub(crate) fn thousands(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{}", rounded.abs() as i64);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::thousands;

    #[test]
    fn thousands_groups_digits() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(999.0), "999");
        assert_eq!(thousands(1_000.0), "1,000");
        assert_eq!(thousands(1_234_567.0), "1,234,567");
        assert_eq!(thousands(-12_345.0), "-12,345");
    }
}
