//! The interactive menu shell.

use std::io::{self, BufRead, Write};

use crate::commands::recipe;
use crate::console::Console;
use crate::models::Recipe;
use crate::store::RecipeStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Search,
    Edit,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Parses a menu selection; anything but "1"-"6" is invalid.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Search),
            "4" => Some(Self::Edit),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Runs the menu loop until the user exits or the input ends.
///
/// Operation-level validation failures never end the loop; they are
/// reported by the operations themselves.
pub fn run<R: BufRead, W: Write>(
    recipes: &mut Vec<Recipe>,
    store: &RecipeStore,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        console.say("\n--- Welcome to the Recipe Manager! ---")?;
        console.say("1. Add a new recipe")?;
        console.say("2. View all recipes")?;
        console.say("3. Search for recipes")?;
        console.say("4. Edit a recipe")?;
        console.say("5. Delete a recipe")?;
        console.say("6. Exit")?;

        let choice = match console.prompt("\nPlease enter your choice (1-6): ")? {
            Some(choice) => choice,
            // Input is gone; there is nothing left to prompt for.
            None => break,
        };

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::Add) => recipe::add(recipes, store, console)?,
            Some(MenuChoice::View) => recipe::view(recipes, console)?,
            Some(MenuChoice::Search) => recipe::search(recipes, console)?,
            Some(MenuChoice::Edit) => recipe::edit(recipes, store, console)?,
            Some(MenuChoice::Delete) => recipe::delete(recipes, store, console)?,
            Some(MenuChoice::Exit) => {
                console.say("Exiting Recipe Manager. Goodbye!")?;
                break;
            }
            None => console.say("Invalid choice. Please enter a number between 1 and 6.")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_session(input: &str) -> (Vec<Recipe>, RecipeStore, TempDir, String) {
        let temp_dir = TempDir::new().unwrap();
        let store = RecipeStore::new(temp_dir.path().join("recipes.json"));
        let mut recipes = store.load();
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        run(&mut recipes, &store, &mut console).unwrap();
        let output = String::from_utf8(console.into_output()).unwrap();
        (recipes, store, temp_dir, output)
    }

    #[test]
    fn test_parse_valid_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::View));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Search));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Edit));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Delete));
        assert_eq!(MenuChoice::parse(" 6 "), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_invalid_choices() {
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("add"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (_, _, _temp, output) = run_session("9\n6\n");
        assert!(output.contains("Invalid choice. Please enter a number between 1 and 6."));
        assert!(output.contains("Exiting Recipe Manager. Goodbye!"));
    }

    #[test]
    fn test_exhausted_input_ends_loop() {
        let (_, _, _temp, _) = run_session("");
    }

    #[test]
    fn test_full_session_add_view_delete() {
        // Add Tea, view it, delete it with a differently-cased title, exit.
        let input = "1\nTea\nWater\nTea leaves\ndone\nBoil. Steep. Serve.\ndone\n\
                     2\n5\ntea\n6\n";
        let (recipes, store, _temp, output) = run_session(input);

        assert!(recipes.is_empty());
        assert!(output.contains("Recipe 'Tea' added successfully!"));
        assert!(output.contains("There are 1 recipe(s):"));
        assert!(output.contains("  1. Water"));
        assert!(output.contains("  2. Tea leaves"));
        assert!(output.contains("Boil. Steep. Serve."));
        assert!(output.contains("Recipe 'Tea' deleted successfully!"));
        assert_eq!(store.load(), Vec::new());
    }

    #[test]
    fn test_session_state_survives_operations() {
        // Two adds, then a search that hits only one of them.
        let input = "1\nTea\nWater\ndone\nBoil.\ndone\n\
                     1\nToast\nBread\nButter\ndone\nToast it.\ndone\n\
                     3\nbutter\n6\n";
        let (recipes, store, _temp, output) = run_session(input);

        assert_eq!(recipes.len(), 2);
        assert!(output.contains("Found 1 recipe(s) matching 'butter':"));
        assert_eq!(store.load(), recipes);
    }
}
