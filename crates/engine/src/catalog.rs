//! Curated competitor names and colors.

/// Names drawn without replacement when generating a pool.
pub const NAMES: [&str; 32] = [
    "Amber Comet",
    "Blue Thunder",
    "Copper Kettle",
    "Dusty Rose",
    "Echo Valley",
    "Fire Opal",
    "Golden Arrow",
    "Harbor Light",
    "Iron Duke",
    "Jade Runner",
    "Kingfisher",
    "Lucky Clover",
    "Midnight Oil",
    "Northern Star",
    "Old Faithful",
    "Paper Moon",
    "Quicksilver",
    "Red Baron",
    "Silver Fern",
    "Tin Soldier",
    "Union Jack",
    "Velvet Storm",
    "Wild Card",
    "Xanadu",
    "Yellow Jacket",
    "Zephyr",
    "Autumn Gale",
    "Black Pepper",
    "Crimson Tide",
    "Desert Wind",
    "Emerald Isle",
    "Frost Giant",
];

/// Colors drawn without replacement when generating a pool.
pub const COLORS: [&str; 24] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#fabebe", "#008080", "#e6beff", "#9a6324", "#fffac8", "#800000", "#aaffc3",
    "#808000", "#ffd8b1", "#000075", "#808080", "#1b1b1b", "#ff6f61", "#6b5b95", "#88b04b",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_entries_are_unique() {
        assert_eq!(NAMES.iter().collect::<HashSet<_>>().len(), NAMES.len());
        assert_eq!(COLORS.iter().collect::<HashSet<_>>().len(), COLORS.len());
    }

    #[test]
    fn test_colors_are_hex() {
        for color in COLORS {
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
