// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::SelectOption;

/// Keeps the options that match any word of `filter`, in their original order.
///
/// The filter is lower cased and split on whitespace. An option matches when at least
/// one filter word is a substring of a word of its lower cased label, or of a word of
/// one of its `keys`. A blank filter keeps every option.
///
/// ```
/// use component_kit::{filter_options, SelectOption};
///
/// let options = [
///     SelectOption::new("Roma", "RM").with_keys(["lazio"]),
///     SelectOption::new("Milano", "MI").with_keys(["lombardia"]),
/// ];
/// let hits = filter_options(&options, "LOMB");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].value, "MI");
/// ```
#[must_use]
pub fn filter_options<'a>(options: &'a [SelectOption], filter: &str) -> Vec<&'a SelectOption> {
    let filter = filter.to_lowercase();
    let filter_words = filter.split_whitespace().collect::<Vec<_>>();

    if filter_words.is_empty() {
        return options.iter().collect();
    }

    options
        .iter()
        .filter(|option| {
            let haystack = searchable_words(option);
            filter_words
                .iter()
                .any(|needle| haystack.iter().any(|word| word.contains(needle)))
        })
        .collect()
}

fn searchable_words(option: &SelectOption) -> Vec<String> {
    std::iter::once(&option.label)
        .chain(option.keys.iter())
        .flat_map(|text| {
            text.to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn make_options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("Reggio Emilia", "RE").with_keys(["emilia romagna"]),
            SelectOption::new("Reggio Calabria", "RC").with_keys(["calabria"]),
            SelectOption::new("Roma", "RM").with_keys(["lazio", "capitale"]),
            SelectOption::new("Milano", "MI").with_keys(["lombardia"]),
        ]
    }

    fn values(hits: &[&SelectOption]) -> Vec<String> {
        hits.iter().map(|it| it.value.clone()).collect()
    }

    #[test_case("" => vec!["RE", "RC", "RM", "MI"]; "empty filter keeps all")]
    #[test_case("   " => vec!["RE", "RC", "RM", "MI"]; "blank filter keeps all")]
    #[test_case("reggio" => vec!["RE", "RC"]; "label word")]
    #[test_case("CALAB" => vec!["RC"]; "case insensitive prefix")]
    #[test_case("romagna" => vec!["RE"]; "word inside a multi word key")]
    #[test_case("lazio milano" => vec!["RM", "MI"]; "any word matches")]
    #[test_case("ilan" => vec!["MI"]; "substring of a word")]
    #[test_case("torino" => Vec::<&str>::new(); "no match")]
    fn test_filter(filter: &str) -> Vec<String> {
        let options = make_options();
        values(&filter_options(&options, filter))
    }

    #[test]
    fn test_empty_options() {
        assert!(filter_options(&[], "anything").is_empty());
        assert!(filter_options(&[], "").is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let options = make_options();
        let hits = filter_options(&options, "mi");
        assert_eq!(values(&hits), vec!["RE", "MI"]);
    }
}
