use crate::core::observation::DEFAULT_GROUP;

/// Tableau-20 qualitative palette, cycled when entities outnumber slots.
pub const TABLEAU_20: [&str; 20] = [
    "#1F77B4", "#AEC7E8", "#FF7F0E", "#FFBB78", "#2CA02C", "#98DF8A", "#D62728", "#FF9896",
    "#9467BD", "#C5B0D5", "#8C564B", "#C49C94", "#E377C2", "#F7B6D2", "#7F7F7F", "#C7C7C7",
    "#BCBD22", "#DBDB8D", "#17BECF", "#9EDAE5",
];

/// Palette color for an entity's rank in the color ordering.
///
/// Collision by reuse is intended once the entity count exceeds the palette.
#[must_use]
pub fn color_for_rank(rank: usize) -> &'static str {
    TABLEAU_20[rank % TABLEAU_20.len()]
}

const GROUP_COLORS: &[(&str, &str)] = &[
    ("Asia", "royalblue"),
    ("Europe", "crimson"),
    ("Africa", "lightseagreen"),
    ("Oceania", "orange"),
    ("North America", "gold"),
    ("South America", "mediumslateblue"),
    (DEFAULT_GROUP, "peru"),
];

/// Fixed display color for a geographic group.
#[must_use]
pub fn group_color(group: &str) -> &'static str {
    for (name, color) in GROUP_COLORS {
        if group == *name {
            return color;
        }
    }
    "peru"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_past_its_length() {
        assert_eq!(color_for_rank(0), TABLEAU_20[0]);
        assert_eq!(color_for_rank(20), TABLEAU_20[0]);
        assert_eq!(color_for_rank(41), TABLEAU_20[1]);
    }

    #[test]
    fn unknown_group_gets_the_fallback_color() {
        assert_eq!(group_color("Atlantis"), "peru");
        assert_eq!(group_color("Europe"), "crimson");
    }
}
