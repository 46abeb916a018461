//! The filter predicates and the evaluation loop.

use crate::FilterCriteria;
use cookbook_model::{Catalog, Recipe};
use cookbook_parse::{ingredient_name, parse_duration};

/// Evaluates whether a recipe satisfies every criterion.
pub fn matches(recipe: &Recipe, criteria: &FilterCriteria) -> bool {
    matches_search(recipe, &criteria.search)
        && matches_tags(recipe, &criteria.tags)
        && matches_ingredients(recipe, &criteria.ingredients)
        && matches_bucket(recipe, criteria)
        && matches_rating(recipe, criteria.min_rating)
}

/// Applies `matches` across a collection, preserving relative order.
///
/// This is a stable filter: no re-sort, no caching, fully recomputed on
/// every criteria change.
pub fn evaluate<'a>(recipes: &'a [Recipe], criteria: &FilterCriteria) -> Vec<&'a Recipe> {
    recipes.iter().filter(|r| matches(r, criteria)).collect()
}

/// Distinct normalized ingredient names across the catalog, sorted.
///
/// Feeds the ingredient filter dropdown. Items that normalize to an
/// empty string are skipped.
pub fn all_ingredients(catalog: &Catalog) -> Vec<String> {
    let mut names: Vec<String> = catalog
        .recipes()
        .iter()
        .flat_map(|r| r.ingredient_items())
        .map(|item| ingredient_name(item).to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();
    names.sort();
    names.dedup();
    names
}

fn matches_search(recipe: &Recipe, search: &str) -> bool {
    recipe.title.to_lowercase().contains(&search.to_lowercase())
}

fn matches_tags(recipe: &Recipe, tags: &[String]) -> bool {
    tags.iter().all(|tag| recipe.labels.contains(tag))
}

fn matches_ingredients(recipe: &Recipe, required: &[String]) -> bool {
    if required.is_empty() {
        return true;
    }
    let names: Vec<String> = recipe
        .ingredient_items()
        .map(|item| ingredient_name(item).to_lowercase())
        .collect();
    required.iter().all(|name| names.contains(name))
}

fn matches_bucket(recipe: &Recipe, criteria: &FilterCriteria) -> bool {
    match criteria.bucket {
        None => true,
        Some(bucket) => {
            let minutes = parse_duration(recipe.total_time.as_deref().unwrap_or(""));
            bucket.contains(minutes)
        }
    }
}

fn matches_rating(recipe: &Recipe, min_rating: f32) -> bool {
    recipe.rating.unwrap_or(0.0) >= min_rating
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DurationBucket;
    use cookbook_model::{IngredientItem, IngredientSection};
    use proptest::prelude::*;

    fn recipe(title: &str, labels: &[&str], rating: f32, total_time: &str) -> Recipe {
        let mut r = Recipe::titled(title.to_lowercase(), title);
        r.labels = labels.iter().map(|l| l.to_string()).collect();
        r.rating = Some(rating);
        r.total_time = Some(total_time.to_string());
        r
    }

    fn with_ingredients(mut r: Recipe, items: &[&str]) -> Recipe {
        r.ingredients = vec![IngredientSection {
            title: None,
            items: items
                .iter()
                .map(|i| IngredientItem::Freeform(i.to_string()))
                .collect(),
        }];
        r
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let r = recipe("Pasta", &["italian"], 4.0, "25m");
        assert!(matches(&r, &FilterCriteria::default()));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let r = recipe("Tomato Soup", &[], 0.0, "");
        let hit = FilterCriteria {
            search: "MATO".into(),
            ..Default::default()
        };
        let miss = FilterCriteria {
            search: "basil".into(),
            ..Default::default()
        };
        assert!(matches(&r, &hit));
        assert!(!matches(&r, &miss));
    }

    #[test]
    fn test_tags_require_all_exact() {
        let r = recipe("Pho", &["vietnamese", "soup"], 0.0, "");
        let both = FilterCriteria::default()
            .require_tag("vietnamese")
            .require_tag("soup");
        assert!(matches(&r, &both));
        // Tags are exact as stored, not case-folded.
        let wrong_case = FilterCriteria::default().require_tag("Vietnamese");
        assert!(!matches(&r, &wrong_case));
    }

    #[test]
    fn test_ingredients_match_normalized_names() {
        let r = with_ingredients(
            recipe("Bread", &[], 0.0, ""),
            &["2 cups flour", "1 tsp Salt"],
        );
        let hit = FilterCriteria::default()
            .require_ingredient("flour")
            .require_ingredient("salt");
        assert!(matches(&r, &hit));
        let miss = FilterCriteria::default().require_ingredient("yeast");
        assert!(!matches(&r, &miss));
    }

    #[test]
    fn test_unparseable_duration_matches_no_bucket() {
        let r = recipe("Mystery Stew", &[], 0.0, "a while");
        for bucket in DurationBucket::all() {
            let criteria = FilterCriteria {
                bucket: Some(bucket),
                ..Default::default()
            };
            assert!(!matches(&r, &criteria), "{bucket} matched");
        }
        // Without the bucket criterion the same recipe matches.
        assert!(matches(&r, &FilterCriteria::default()));
    }

    #[test]
    fn test_missing_rating_counts_as_zero() {
        let mut r = recipe("Unrated", &[], 0.0, "");
        r.rating = None;
        let criteria = FilterCriteria {
            min_rating: 0.5,
            ..Default::default()
        };
        assert!(!matches(&r, &criteria));
    }

    #[test]
    fn test_evaluate_preserves_order() {
        let recipes = vec![
            recipe("Pasta", &["italian"], 4.0, "25m"),
            recipe("Pho", &["vietnamese"], 5.0, "3h"),
            recipe("Pancakes", &[], 3.0, "20m"),
        ];
        let criteria = FilterCriteria {
            bucket: Some(DurationBucket::Quick),
            ..Default::default()
        };
        let hits = evaluate(&recipes, &criteria);
        let titles: Vec<_> = hits.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Pasta", "Pancakes"]);
    }

    #[test]
    fn test_end_to_end_scenario() {
        // Pho is rated 5 but 3h = 180 minutes fails the quick bucket.
        let recipes = vec![
            recipe("Pasta", &["italian"], 4.0, "25m"),
            recipe("Pho", &["vietnamese"], 5.0, "3h"),
        ];
        let criteria = FilterCriteria {
            min_rating: 4.0,
            bucket: Some(DurationBucket::Quick),
            ..Default::default()
        };
        let hits = evaluate(&recipes, &criteria);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Pasta");
    }

    #[test]
    fn test_all_ingredients_sorted_distinct() {
        let catalog = Catalog::new(vec![
            with_ingredients(recipe("Bread", &[], 0.0, ""), &["2 cups flour", "1 tsp salt"]),
            with_ingredients(recipe("Cake", &[], 0.0, ""), &["1 cup Flour", "3 eggs"]),
        ]);
        assert_eq!(all_ingredients(&catalog), vec!["eggs", "flour", "salt"]);
    }

    prop_compose! {
        fn arb_recipe()(
            title in "[A-Za-z ]{1,12}",
            labels in prop::collection::vec("[a-z]{1,8}", 0..3),
            rating in prop::option::of(0..=10u32),
            minutes in prop::option::of(0..2000u32),
        ) -> Recipe {
            let mut r = Recipe::titled("id", title);
            r.labels = labels;
            r.rating = rating.map(|r| r as f32 / 2.0);
            r.total_time = minutes.map(|m| format!("{m}m"));
            r
        }
    }

    prop_compose! {
        fn arb_criteria()(
            search in "[a-z]{0,3}",
            tags in prop::collection::vec("[a-z]{1,8}", 0..2),
            bucket in prop::option::of(0..4usize),
            min_rating in 0..=10u32,
        ) -> FilterCriteria {
            FilterCriteria {
                search,
                tags,
                ingredients: Vec::new(),
                bucket: bucket.map(|i| DurationBucket::all()[i]),
                min_rating: min_rating as f32 / 2.0,
            }
        }
    }

    proptest! {
        // AND-composition: the combined criteria match exactly when each
        // single-field criteria matches on its own.
        #[test]
        fn prop_and_composition(r in arb_recipe(), c in arb_criteria()) {
            let combined = matches(&r, &c);
            let fields = [
                FilterCriteria { search: c.search.clone(), ..Default::default() },
                FilterCriteria { tags: c.tags.clone(), ..Default::default() },
                FilterCriteria { bucket: c.bucket, ..Default::default() },
                FilterCriteria { min_rating: c.min_rating, ..Default::default() },
            ];
            let separate = fields.iter().all(|f| matches(&r, f));
            prop_assert_eq!(combined, separate);
        }
    }
}
