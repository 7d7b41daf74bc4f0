use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl Recipe {
    pub fn new(
        title: impl Into<String>,
        ingredients: Vec<String>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            ingredients,
            instructions: instructions.into(),
        }
    }

    /// Returns true if `needle_lower` occurs in the title or in any one
    /// ingredient. The needle must already be lowercased.
    pub fn matches(&self, needle_lower: &str) -> bool {
        if self.title.to_lowercase().contains(needle_lower) {
            return true;
        }
        self.ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(needle_lower))
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.len()))?;

        writeln!(f, "Ingredients:")?;
        for (i, ingredient) in self.ingredients.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, ingredient)?;
        }

        writeln!(f, "\nInstructions:")?;
        write!(f, "{}", self.instructions)
    }
}

/// Index of the recipe whose title equals `title` case-insensitively.
pub fn find_by_title(recipes: &[Recipe], title: &str) -> Option<usize> {
    let wanted = title.to_lowercase();
    recipes
        .iter()
        .position(|recipe| recipe.title.to_lowercase() == wanted)
}

/// Returns true if a recipe other than the one at `skip` already uses
/// `title`, compared case-insensitively.
pub fn title_taken(recipes: &[Recipe], title: &str, skip: Option<usize>) -> bool {
    let wanted = title.to_lowercase();
    recipes
        .iter()
        .enumerate()
        .any(|(i, recipe)| Some(i) != skip && recipe.title.to_lowercase() == wanted)
}
