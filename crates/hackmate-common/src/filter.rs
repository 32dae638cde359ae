//! Visibility rules for the list search box and the category selector.
//!
//! The two rules are independent: each one rewrites `display` on its own
//! items, so an element carrying both markers keeps whichever rule ran last.

/// Selector value that shows every category.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn from_bool(visible: bool) -> Self {
        if visible {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    /// Value for the element's inline `display` style.
    pub fn display_value(self) -> &'static str {
        match self {
            Visibility::Shown => "block",
            Visibility::Hidden => "none",
        }
    }
}

/// Normalize raw input into a search term.
pub fn normalize_term(raw: &str) -> String {
    raw.to_lowercase()
}

/// Case-insensitive substring match of `term` against an item's text.
pub fn search_visibility(text: &str, term: &str) -> Visibility {
    let term = normalize_term(term);
    Visibility::from_bool(text.to_lowercase().contains(&term))
}

/// Category match: `"all"` shows everything, otherwise exact equality.
pub fn category_visibility(selected: &str, category: Option<&str>) -> Visibility {
    Visibility::from_bool(selected == ALL_CATEGORIES || category == Some(selected))
}
