//! The record operations: add, view, search, edit, delete.
//!
//! Every operation works on the live collection and reports its outcome on
//! the console. Validation failures abort the operation without mutating the
//! collection or touching the store; they are never process errors. The
//! `io::Result` returned here covers console I/O only.

use std::io::{self, BufRead, Write};

use crate::console::{is_terminator, Console};
use crate::models::{find_by_title, title_taken, Recipe};
use crate::store::RecipeStore;

/// Prompts for a new recipe and appends it to the collection.
pub fn add<R: BufRead, W: Write>(
    recipes: &mut Vec<Recipe>,
    store: &RecipeStore,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("\n--- Add a new recipe ---")?;

    let title = console.prompt("Enter recipe title: ")?.unwrap_or_default();
    let title = title.trim();
    if title.is_empty() {
        return console.say("Title cannot be empty. Aborting recipe addition.");
    }
    if title_taken(recipes, title, None) {
        return console.say(&format!(
            "A recipe with the title '{}' already exists. \
             Please choose a different title or edit the existing recipe.",
            title
        ));
    }

    console.say("Enter ingredients one by one (type 'done' when finished):")?;
    let ingredients = collect_ingredients(console)?;
    if ingredients.is_empty() {
        return console.say("A recipe must have at least one ingredient. Aborting recipe addition.");
    }

    console.say("Enter instructions (type 'done' on a line by itself when finished):")?;
    let instructions = join_instruction_lines(&collect_instruction_lines(console)?);
    if instructions.is_empty() {
        return console.say("Recipe instructions cannot be empty. Aborting recipe addition.");
    }

    let title = title.to_string();
    recipes.push(Recipe::new(title.clone(), ingredients, instructions));
    console.say(&format!("Recipe '{}' added successfully!", title))?;

    persist(recipes, store, console)
}

/// Renders every recipe in collection order.
pub fn view<R: BufRead, W: Write>(
    recipes: &[Recipe],
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("\n--- All Recipes ---")?;
    if recipes.is_empty() {
        return console.say("No recipes available.");
    }

    console.say(&format!("There are {} recipe(s):", recipes.len()))?;
    for (i, recipe) in recipes.iter().enumerate() {
        console.say(&format!("\n--- Recipe {} ---", i + 1))?;
        console.say(&recipe.to_string())?;
    }
    Ok(())
}

/// Prompts for a term and reports every recipe whose title or ingredients
/// contain it, case-insensitively. Each recipe is reported at most once.
pub fn search<R: BufRead, W: Write>(
    recipes: &[Recipe],
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("\n--- Search Recipes ---")?;
    if recipes.is_empty() {
        return console.say("No recipes available to search.");
    }

    let term = console
        .prompt("Enter title or ingredient to search for: ")?
        .unwrap_or_default();
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return console.say("Search term cannot be empty.");
    }

    let found: Vec<&Recipe> = recipes.iter().filter(|r| r.matches(&term)).collect();
    if found.is_empty() {
        return console.say(&format!("No recipes found matching '{}'.", term));
    }

    console.say(&format!("Found {} recipe(s) matching '{}':", found.len(), term))?;
    for (i, recipe) in found.iter().enumerate() {
        console.say(&format!("\n--- Match {} ---", i + 1))?;
        console.say(&recipe.to_string())?;
    }
    Ok(())
}

/// Finds a recipe by title and walks through replacing its title,
/// ingredients, and instructions. Each part can be kept as-is; the
/// collection is persisted once the walkthrough completes.
pub fn edit<R: BufRead, W: Write>(
    recipes: &mut Vec<Recipe>,
    store: &RecipeStore,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("\n--- Edit Recipe ---")?;
    if recipes.is_empty() {
        return console.say("No recipes available to edit.");
    }

    view(recipes, console)?;
    let target = console
        .prompt("\nEnter the title of the recipe to edit: ")?
        .unwrap_or_default();
    let target = target.trim();
    let index = match find_by_title(recipes, target) {
        Some(index) => index,
        None => return console.say(&format!("Recipe with title '{}' not found.", target)),
    };

    console.say(&format!("\nEditing recipe: '{}'", recipes[index].title))?;
    console.say("Press Enter to keep a current value.")?;

    // Title: empty keeps, a duplicate is refused without aborting the rest.
    let new_title = console
        .prompt(&format!("New title (current: {}): ", recipes[index].title))?
        .unwrap_or_default();
    let new_title = new_title.trim();
    if !new_title.is_empty() {
        if title_taken(recipes, new_title, Some(index)) {
            console.say(&format!(
                "A recipe with the title '{}' already exists. Title not updated.",
                new_title
            ))?;
        } else {
            recipes[index].title = new_title.to_string();
        }
    }

    // Ingredients: a new list replaces the old one wholesale. With no new
    // entries the user chooses between clearing the list and keeping it.
    console.say("\nCurrent ingredients:")?;
    for (i, ingredient) in recipes[index].ingredients.iter().enumerate() {
        console.say(&format!("  {}. {}", i + 1, ingredient))?;
    }
    console.say("Enter replacement ingredients one by one (type 'done' when finished):")?;
    let new_ingredients = collect_ingredients(console)?;
    if new_ingredients.is_empty() {
        let answer = console
            .prompt("No new ingredients entered. Clear all current ingredients? (yes/no): ")?
            .unwrap_or_default();
        if answer.trim().eq_ignore_ascii_case("yes") {
            recipes[index].ingredients.clear();
            console.say("Ingredients cleared.")?;
        } else {
            console.say("Keeping original ingredients.")?;
        }
    } else {
        recipes[index].ingredients = new_ingredients;
    }

    // Instructions: no lines keeps silently, lines that join to nothing
    // keep with a report.
    console.say("\nCurrent instructions:")?;
    console.say(&recipes[index].instructions)?;
    console.say("Enter replacement instructions (type 'done' on a line by itself when finished):")?;
    let lines = collect_instruction_lines(console)?;
    if lines.is_empty() {
        console.say("Keeping original instructions.")?;
    } else {
        let joined = join_instruction_lines(&lines);
        if joined.is_empty() {
            console.say("New instructions were empty. Keeping original instructions.")?;
        } else {
            recipes[index].instructions = joined;
        }
    }

    console.say(&format!(
        "Recipe '{}' updated successfully!",
        recipes[index].title
    ))?;

    persist(recipes, store, console)
}

/// Removes the recipe matching a prompted title, if any.
pub fn delete<R: BufRead, W: Write>(
    recipes: &mut Vec<Recipe>,
    store: &RecipeStore,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.say("\n--- Delete Recipe ---")?;
    if recipes.is_empty() {
        return console.say("No recipes available to delete.");
    }

    view(recipes, console)?;
    let target = console
        .prompt("\nEnter the title of the recipe to delete: ")?
        .unwrap_or_default();
    let target = target.trim();

    match find_by_title(recipes, target) {
        Some(index) => {
            let removed = recipes.remove(index);
            console.say(&format!("Recipe '{}' deleted successfully!", removed.title))?;
            persist(recipes, store, console)
        }
        None => console.say(&format!("Recipe with title '{}' not found.", target)),
    }
}

/// Reads ingredients until the terminator. Blank lines are skipped and
/// entries are trimmed.
fn collect_ingredients<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Vec<String>> {
    let mut ingredients = Vec::new();
    loop {
        let line = match console.prompt(&format!("Ingredient {}: ", ingredients.len() + 1))? {
            Some(line) => line,
            None => break,
        };
        if is_terminator(&line) {
            break;
        }
        let entry = line.trim();
        if !entry.is_empty() {
            ingredients.push(entry.to_string());
        }
    }
    Ok(ingredients)
}

/// Reads raw instruction lines until the terminator. Blank lines are kept;
/// they separate paragraphs in the joined text.
fn collect_instruction_lines<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        let line = match console.read_line()? {
            Some(line) => line,
            None => break,
        };
        if is_terminator(&line) {
            break;
        }
        lines.push(line);
    }
    Ok(lines)
}

fn join_instruction_lines(lines: &[String]) -> String {
    lines.join("\n").trim().to_string()
}

/// Writes the collection through the store and reports the outcome. A save
/// failure is reported and logged, never propagated; the in-memory
/// collection stays authoritative.
fn persist<R: BufRead, W: Write>(
    recipes: &[Recipe],
    store: &RecipeStore,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    match store.save(recipes) {
        Ok(()) => {
            tracing::debug!(
                "saved {} recipe(s) to {}",
                recipes.len(),
                store.path().display()
            );
            console.say("Recipes saved successfully!")
        }
        Err(e) => {
            tracing::error!("failed to save recipes: {}", e);
            console.say(&format!("Error saving recipes: {}", e))
        }
    }
}
