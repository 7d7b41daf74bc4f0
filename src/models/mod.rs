mod recipe;

pub use recipe::{find_by_title, title_taken, Recipe};
