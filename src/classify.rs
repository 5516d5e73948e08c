// src/classify.rs
use eframe::egui::Color32;

/// Display category for an equipment type label. Affects badge styling
/// only, never the underlying data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Pump,
    Reactor,
    Tank,
    Separator,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pump => "Pump",
            Category::Reactor => "Reactor",
            Category::Tank => "Tank",
            Category::Separator => "Separator",
        }
    }

    pub fn badge_color(&self) -> Color32 {
        match self {
            Category::Pump => Color32::from_rgb(14, 165, 233),
            Category::Reactor => Color32::from_rgb(99, 102, 241),
            Category::Tank => Color32::from_rgb(34, 197, 94),
            Category::Separator => Color32::from_rgb(244, 63, 94),
        }
    }
}

/// Keyword rules evaluated in order; the first matching rule wins, so a
/// label naming both a reaction and a storage keyword lands on Reactor.
const RULES: &[(&[&str], Category)] = &[
    (&["mix", "agitat", "stir"], Category::Pump),
    (&["react"], Category::Reactor),
    (&["tank", "storage"], Category::Tank),
];

/// Map an equipment type label to its display category.
/// Case-insensitive substring match, total over all inputs.
pub fn classify(type_label: &str) -> Category {
    let label = type_label.to_lowercase();
    for (keywords, category) in RULES {
        if keywords.iter().any(|keyword| label.contains(keyword)) {
            return *category;
        }
    }
    Category::Separator
}
