use super::steps::StepOutline;
use crate::model::Recipe;

/// One-line summary of a recipe for terminals
pub fn render_text_line(recipe: &Recipe, is_favorite: bool) -> String {
    format!(
        "{} {:>3}. {} ({} min, {})",
        if is_favorite { "★" } else { " " },
        recipe.id,
        recipe.title,
        recipe.time,
        recipe.difficulty
    )
}

/// Full plain-text card with ingredients and indented steps
pub fn render_text_card(recipe: &Recipe, is_favorite: bool) -> String {
    let mut text = render_text_line(recipe, is_favorite);
    text.push('\n');

    if !recipe.description.is_empty() {
        text.push_str(&format!("      {}\n", recipe.description));
    }

    if !recipe.ingredients.is_empty() {
        text.push_str("\n  Ingredients:\n");
        for ingredient in &recipe.ingredients {
            text.push_str(&format!("    - {}\n", ingredient));
        }
    }

    if !recipe.steps.is_empty() {
        text.push_str("\n  Steps:\n");
        for item in StepOutline::new(&recipe.steps) {
            text.push_str(&format!("    {}- {}\n", "  ".repeat(item.level), item.text));
        }
    }

    text
}
