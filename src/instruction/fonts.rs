/// Font families offered by the picker, in display order.
pub const POPULAR_FONTS: &[&str] = &[
    "Roboto",
    "Open Sans",
    "Montserrat",
    "Lato",
    "Poppins",
    "Oswald",
    "Bangers",
    "Impact",
    "Anton",
    "Raleway",
    "Futura",
    "Helvetica",
    "Arial Black",
    "Comic Sans MS",
    "Pacifico",
    "Lobster",
    "Bebas Neue",
    "Inter",
    "Playfair Display",
];

/// Family preselected by "add text" mode.
pub const DEFAULT_TEXT_FONT: &str = "Roboto";

/// Families whose name contains `query`, ignoring case, in catalog order.
///
/// An empty query returns the whole catalog.
pub fn search(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    POPULAR_FONTS
        .iter()
        .copied()
        .filter(|f| f.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/instruction/fonts.rs"]
mod tests;
