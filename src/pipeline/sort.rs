use crate::model::Recipe;
use crate::query::SortOrder;
use feruca::Collator;
use std::cmp::Ordering;

/// Compare titles with the Unicode Collation Algorithm (root locale), so
/// accented letters sort next to their base letters.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}

/// Stable sort of an already collected view. The store itself is never touched.
pub fn apply_sort<'a>(mut recipes: Vec<&'a Recipe>, order: SortOrder) -> Vec<&'a Recipe> {
    match order {
        SortOrder::Original => {}
        SortOrder::Name => {
            let mut collator = Collator::default();
            recipes.sort_by(|a, b| collator.collate(a.title.as_str(), b.title.as_str()));
        }
        SortOrder::Time => recipes.sort_by_key(|r| r.time),
    }
    recipes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_titles_ignores_case() {
        assert_eq!(compare_titles("apple pie", "Banana bread"), Ordering::Less);
        assert_eq!(compare_titles("Zucchini", "avocado toast"), Ordering::Greater);
        assert_eq!(compare_titles("Soup", "Soup"), Ordering::Equal);
    }

    #[test]
    fn test_accented_titles_sort_with_their_base_letter() {
        assert_eq!(compare_titles("Éclair", "Zucchini Bread"), Ordering::Less);
        assert_eq!(compare_titles("Crème Brûlée", "Crepes"), Ordering::Less);
        assert_eq!(compare_titles("Apple Pie", "Éclair"), Ordering::Less);
    }
}
