use recipe_finder::render::{render_card, render_steps, StepOutline};
use recipe_finder::{RecipeStore, Step};

fn pasta_steps() -> Vec<Step> {
    serde_json::from_str(
        r#"["Boil water", {"text": "Cook pasta", "substeps": ["Add pasta", "Stir", "Drain"]}, "Serve"]"#,
    )
    .unwrap()
}

#[test]
fn test_group_is_a_level_zero_item_with_three_level_one_items() {
    let html = render_steps(&pasta_steps(), 0);

    assert_eq!(html.matches(r#"<li class="step level-0">"#).count(), 3);
    assert_eq!(html.matches(r#"<li class="step level-1">"#).count(), 3);
    assert_eq!(html.matches(r#"<ol class="step-list level-1">"#).count(), 1);

    // The nested list sits inside the "Cook pasta" item
    let group = html.find("Cook pasta").unwrap();
    let nested = html.find(r#"<ol class="step-list level-1">"#).unwrap();
    let serve = html.find("Serve").unwrap();
    assert!(group < nested && nested < serve);
    assert!(html[group..serve].contains("Drain</li></ol></li>"));
}

#[test]
fn test_outline_matches_markup_levels() {
    let steps = pasta_steps();
    let outline: Vec<_> = StepOutline::new(&steps).collect();

    assert_eq!(outline.len(), 6);
    assert_eq!(outline.iter().filter(|item| item.level == 1).count(), 3);
    assert!(outline[1].has_substeps);
    assert_eq!(outline[1].text, "Cook pasta");
}

#[test]
fn test_ten_levels_of_nesting() {
    let mut step = Step::text("Taste");
    for level in (0..10).rev() {
        step = Step::group(format!("Level {}", level), vec![step]);
    }
    let html = render_steps(&[step], 0);

    for level in 0..=10 {
        assert!(html.contains(&format!(r#"<li class="step level-{}">"#, level)));
    }
    assert!(html.ends_with(&"</li></ol>".repeat(11)));
}

#[test]
fn test_every_builtin_card_renders_its_steps() {
    let store = RecipeStore::builtin();
    for recipe in store.recipes() {
        let html = render_card(recipe, false);
        let items = StepOutline::new(&recipe.steps).count();
        assert_eq!(html.matches(r#"<li class="step level-"#).count(), items);
        assert_eq!(render_card(recipe, false), html);
    }
}
