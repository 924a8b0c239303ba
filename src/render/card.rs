use super::steps::render_steps;
use crate::model::Recipe;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::collections::BTreeSet;

/// Markup for a single recipe card.
///
/// Ingredients and steps start hidden behind toggle buttons; showing them is
/// left to whatever binds the markup to a page.
pub fn render_card(recipe: &Recipe, is_favorite: bool) -> String {
    let mut html = String::new();
    let id = recipe.id;

    html.push_str(&format!(r#"<div class="recipe-card" data-id="{}">"#, id));

    html.push_str(r#"<div class="recipe-header">"#);
    html.push_str(&format!("<h3>{}</h3>", encode_text(&recipe.title)));
    let (active, star, label) = if is_favorite {
        (" active", "★", "Remove from favorites")
    } else {
        ("", "☆", "Add to favorites")
    };
    html.push_str(&format!(
        r#"<button class="favorite-btn{}" data-id="{}" aria-pressed="{}" title="{}">{}</button>"#,
        active, id, is_favorite, label, star
    ));
    html.push_str("</div>");

    html.push_str(r#"<div class="recipe-meta">"#);
    html.push_str(&format!("<span>⏱️ {} min</span>", recipe.time));
    html.push_str(&format!(
        r#"<span class="difficulty {0}">{0}</span>"#,
        recipe.difficulty
    ));
    if !recipe.category.is_empty() {
        html.push_str(&format!(
            r#"<span class="category" data-category="{}">{}</span>"#,
            encode_double_quoted_attribute(&recipe.category),
            encode_text(&recipe.category)
        ));
    }
    html.push_str("</div>");

    if !recipe.description.is_empty() {
        html.push_str(&format!("<p>{}</p>", encode_text(&recipe.description)));
    }

    html.push_str(&format!(
        r#"<button class="toggle-btn" data-toggle="ingredients" data-id="{}">Show Ingredients</button>"#,
        id
    ));
    html.push_str(r#"<ul class="ingredients hidden">"#);
    for ingredient in &recipe.ingredients {
        html.push_str(&format!("<li>{}</li>", encode_text(ingredient)));
    }
    html.push_str("</ul>");

    html.push_str(&format!(
        r#"<button class="toggle-btn" data-toggle="steps" data-id="{}">Show Steps</button>"#,
        id
    ));
    html.push_str(r#"<div class="steps hidden">"#);
    html.push_str(&render_steps(&recipe.steps, 0));
    html.push_str("</div>");

    html.push_str("</div>");
    html
}

/// Markup for the whole result list
pub fn render_recipe_list(recipes: &[&Recipe], favorites: &BTreeSet<u32>) -> String {
    if recipes.is_empty() {
        return r#"<p class="no-results">No recipes match your search.</p>"#.to_string();
    }

    recipes
        .iter()
        .map(|recipe| render_card(recipe, favorites.contains(&recipe.id)))
        .collect()
}
