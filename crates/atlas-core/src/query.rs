/// Filtering, sorting, and lookup over the destination records.
use crate::model::Destination;

/// Listing produced for the index page: the filtered, rating-sorted
/// results plus the category facet.
#[derive(Debug)]
pub struct Listing {
    pub results: Vec<Destination>,
    /// Distinct categories over the whole dataset, ascending, so the UI
    /// can offer every filter option regardless of the current filters.
    pub categories: Vec<String>,
}

/// Apply the search and category filters and sort by rating descending.
///
/// `search` is trimmed and matched case-insensitively as a substring of
/// the name, description, or any tag; empty disables the text filter.
/// `category` must match exactly (case-sensitive); empty disables the
/// category filter. The two filters AND together. An unknown category
/// yields an empty result set, not an error.
pub fn query(records: Vec<Destination>, search: &str, category: &str) -> Listing {
    let mut categories: Vec<String> = records.iter().map(|d| d.category.clone()).collect();
    categories.sort();
    categories.dedup();

    let needle = search.trim().to_lowercase();
    let mut results: Vec<Destination> = records
        .into_iter()
        .filter(|d| matches_search(d, &needle))
        .filter(|d| category.is_empty() || d.category == category)
        .collect();
    // sort_by is stable, so dataset order breaks rating ties
    results.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    Listing { results, categories }
}

fn matches_search(dest: &Destination, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    dest.name.to_lowercase().contains(needle)
        || dest.description.to_lowercase().contains(needle)
        || dest.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

/// First record whose slug matches exactly. Duplicate slugs are a silent
/// data-quality issue; the first one in document order wins.
pub fn find_by_slug<'a>(records: &'a [Destination], slug: &str) -> Option<&'a Destination> {
    records.iter().find(|d| d.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dest(slug: &str, name: &str, rating: f64, category: &str) -> Destination {
        Destination {
            slug: slug.to_string(),
            name: name.to_string(),
            description: String::new(),
            tags: Vec::new(),
            category: category.to_string(),
            rating,
            state: None,
            highlight: None,
            fun_fact: String::new(),
        }
    }

    fn sample() -> Vec<Destination> {
        vec![
            dest("a", "Alpha Falls", 3.0, "nature"),
            dest("b", "Beta Town", 5.0, "urban"),
        ]
    }

    #[test]
    fn no_filters_returns_all_sorted_by_rating_desc() {
        let listing = query(sample(), "", "");
        let slugs: Vec<&str> = listing.results.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a"], "rating 5 should sort before 3");
    }

    #[test]
    fn text_filter_matches_name_case_insensitively() {
        let listing = query(sample(), "alpha", "");
        assert_eq!(listing.results.len(), 1);
        assert_eq!(listing.results[0].slug, "a");
    }

    #[test]
    fn text_filter_is_trimmed() {
        let listing = query(sample(), "  alpha  ", "");
        assert_eq!(listing.results.len(), 1);
        assert_eq!(listing.results[0].slug, "a");
    }

    #[test]
    fn text_filter_matches_description_and_tags() {
        let mut records = sample();
        records[0].description = "Thundering waterfall".to_string();
        records[1].tags = vec!["Nightlife".to_string()];

        let by_description = query(records.clone(), "waterfall", "");
        assert_eq!(by_description.results.len(), 1);
        assert_eq!(by_description.results[0].slug, "a");

        let by_tag = query(records, "nightlife", "");
        assert_eq!(by_tag.results.len(), 1);
        assert_eq!(by_tag.results[0].slug, "b");
    }

    #[test]
    fn category_filter_is_exact() {
        let listing = query(sample(), "", "urban");
        assert_eq!(listing.results.len(), 1);
        assert_eq!(listing.results[0].slug, "b");

        // Case-sensitive: "Urban" is not "urban".
        assert!(query(sample(), "", "Urban").results.is_empty());
    }

    #[test]
    fn unknown_category_yields_empty_results_not_error() {
        let listing = query(sample(), "", "underwater");
        assert!(listing.results.is_empty());
        assert_eq!(listing.categories, vec!["nature", "urban"]);
    }

    #[test]
    fn filters_and_together() {
        let listing = query(sample(), "town", "nature");
        assert!(listing.results.is_empty(), "both filters must hold");
    }

    #[test]
    fn facet_covers_full_dataset_regardless_of_filters() {
        let unfiltered = query(sample(), "", "");
        let filtered = query(sample(), "alpha", "urban");
        assert_eq!(unfiltered.categories, filtered.categories);
        assert_eq!(unfiltered.categories, vec!["nature", "urban"]);
    }

    #[test]
    fn facet_includes_empty_category() {
        let mut records = sample();
        records.push(dest("c", "Gamma Point", 1.0, ""));
        let listing = query(records, "", "");
        assert_eq!(listing.categories, vec!["", "nature", "urban"]);
    }

    #[test]
    fn rating_ties_keep_dataset_order() {
        let records = vec![
            dest("x", "X", 0.0, ""),
            dest("y", "Y", 2.0, ""),
            dest("z", "Z", 0.0, ""),
        ];
        let listing = query(records, "", "");
        let slugs: Vec<&str> = listing.results.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["y", "x", "z"], "zero ratings keep document order");
    }

    #[test]
    fn find_by_slug_returns_first_match() {
        let mut records = sample();
        records.push(dest("a", "Shadow Alpha", 1.0, ""));

        let found = find_by_slug(&records, "a").expect("slug exists");
        assert_eq!(found.name, "Alpha Falls", "first match wins");
    }

    #[test]
    fn find_by_slug_is_case_sensitive_and_misses_signal_none() {
        let records = sample();
        assert!(find_by_slug(&records, "A").is_none());
        assert!(find_by_slug(&records, "unknown").is_none());
        assert!(find_by_slug(&[], "a").is_none());
    }
}
