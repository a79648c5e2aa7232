//! Case-insensitive substring filtering on name and country.

use crate::types::Location;

/// True if `name` or `country` contains `needle`, ignoring case.
///
/// `needle` must already be lower-cased.
fn contains_folded(location: &Location, needle: &str) -> bool {
    location.name.to_lowercase().contains(needle) || location.country.to_lowercase().contains(needle)
}

/// Project `locations` onto the ones matching `filter`, keeping their order.
///
/// An empty filter keeps everything.
pub fn filter_locations<'a>(locations: &'a [Location], filter: &str) -> Vec<&'a Location> {
    let needle = filter.to_lowercase();
    locations
        .iter()
        .filter(|loc| contains_folded(loc, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock_locations;

    fn names(found: &[&Location]) -> Vec<String> {
        found.iter().map(|l| l.name.clone()).collect()
    }

    #[test]
    fn test_empty_filter_keeps_all_in_order() {
        let all = mock_locations();
        let found = filter_locations(&all, "");
        assert_eq!(found.len(), all.len());
        assert!(found.iter().zip(all.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let all = mock_locations();
        assert_eq!(names(&filter_locations(&all, "MIAMI")), ["Miami"]);
        assert_eq!(names(&filter_locations(&all, "sYdNeY")), ["Sydney"]);
    }

    #[test]
    fn test_filter_matches_country() {
        let all = mock_locations();
        assert_eq!(
            names(&filter_locations(&all, "usa")),
            ["Miami", "San Diego", "Honolulu"]
        );
    }

    #[test]
    fn test_filter_matches_substring_of_either_field() {
        let all = mock_locations();
        assert_eq!(names(&filter_locations(&all, "an")), ["San Diego", "Cancun"]);
        assert_eq!(names(&filter_locations(&all, "ai")), ["Barcelona"]);
    }

    #[test]
    fn test_no_match() {
        let all = mock_locations();
        assert!(filter_locations(&all, "Antarctica").is_empty());
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let all = mock_locations();
        assert_eq!(names(&filter_locations(&all, "san ")), ["San Diego"]);
        assert!(filter_locations(&all, " miami").is_empty());
    }

    #[test]
    fn test_country_match_ignores_case() {
        let all = mock_locations();
        assert_eq!(names(&filter_locations(&all, "SPAIN")), ["Barcelona"]);
        assert_eq!(names(&filter_locations(&all, "mexico")), ["Cancun"]);
    }

    #[test]
    fn test_filter_agrees_with_definition() {
        let all = mock_locations();
        for filter in ["", "a", "US", "ico", "Bar", "zzz", "Honolulu", "  "] {
            let expected: Vec<&Location> = all
                .iter()
                .filter(|l| {
                    l.name.to_lowercase().contains(&filter.to_lowercase())
                        || l.country.to_lowercase().contains(&filter.to_lowercase())
                })
                .collect();
            assert_eq!(filter_locations(&all, filter), expected, "filter {filter:?}");
        }
    }
}
