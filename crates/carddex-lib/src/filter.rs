use crate::card::{CardSummary, Series};

pub const PER_PAGE: usize = 20;

/// Client-side catalogue filter: keyword substring match on name or id,
/// exact match on series id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFilter {
    pub keyword: Option<String>,
    pub series: Option<String>,
}

impl CardFilter {
    pub fn is_empty(&self) -> bool {
        self.keyword.is_none() && self.series.is_none()
    }

    pub fn matches(&self, card: &CardSummary) -> bool {
        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_lowercase();
            let name_ok = card.name.to_lowercase().contains(&keyword);
            let id_ok = card.id.to_lowercase().contains(&keyword);
            if !name_ok && !id_ok {
                return false;
            }
        }

        if let Some(series) = &self.series {
            if &card.series_id != series {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, cards: &[CardSummary]) -> Vec<CardSummary> {
        cards
            .iter()
            .filter(|card| self.matches(card))
            .cloned()
            .collect()
    }
}

/// Distinct series ids present in a card list, sorted, with a display name.
pub fn series_options(cards: &[CardSummary]) -> Vec<Series> {
    let mut ids: Vec<&str> = cards
        .iter()
        .map(|card| card.series_id.as_str())
        .filter(|id| !id.is_empty())
        .collect();
    ids.sort_unstable();
    ids.dedup();

    ids.into_iter()
        .map(|id| Series {
            id: id.to_string(),
            name: id.to_uppercase(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Requested page clamped into `[1, total_pages]`.
    pub number: usize,
    /// Always at least 1, even for an empty list.
    pub total_pages: usize,
    pub total: usize,
}

/// Slice one page out of a filtered list. Out-of-range page numbers clamp
/// rather than error.
pub fn paginate<T: Clone>(items: &[T], requested: usize, per_page: usize) -> (Vec<T>, Page) {
    let total = items.len();
    let total_pages = total.div_ceil(per_page).max(1);
    let number = requested.clamp(1, total_pages);

    let start = (number - 1) * per_page;
    let end = (start + per_page).min(total);
    let slice = if start >= total {
        Vec::new()
    } else {
        items[start..end].to_vec()
    };

    (
        slice,
        Page {
            number,
            total_pages,
            total,
        },
    )
}

#[cfg(test)]
mod test {
    use super::*;

    fn card(id: &str, name: &str, series_id: &str) -> CardSummary {
        CardSummary {
            id: id.to_string(),
            name: name.to_string(),
            series_id: series_id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_keyword_matches_name_case_insensitive() {
        let filter = CardFilter {
            keyword: Some("CHARI".to_string()),
            series: None,
        };
        assert!(filter.matches(&card("base1-4", "Charizard", "base")));
        assert!(!filter.matches(&card("base1-58", "Pikachu", "base")));
    }

    #[test]
    fn test_keyword_matches_id() {
        let filter = CardFilter {
            keyword: Some("swsh3".to_string()),
            series: None,
        };
        assert!(filter.matches(&card("swsh3-136", "Furret", "swsh")));
    }

    #[test]
    fn test_series_filter_is_exact() {
        let filter = CardFilter {
            keyword: None,
            series: Some("swsh".to_string()),
        };
        assert!(filter.matches(&card("swsh3-136", "Furret", "swsh")));
        assert!(!filter.matches(&card("base1-4", "Charizard", "base")));
        assert!(!filter.matches(&card("x-1", "X", "swsh2")));
    }

    #[test]
    fn test_apply_combines_filters() {
        let cards = vec![
            card("swsh3-136", "Furret", "swsh"),
            card("swsh3-137", "Obstagoon", "swsh"),
            card("base1-4", "Charizard", "base"),
        ];
        let filter = CardFilter {
            keyword: Some("fur".to_string()),
            series: Some("swsh".to_string()),
        };
        let out = filter.apply(&cards);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "swsh3-136");
    }

    #[test]
    fn test_series_options_distinct_sorted() {
        let cards = vec![
            card("b-1", "B", "swsh"),
            card("a-1", "A", "base"),
            card("c-1", "C", "swsh"),
            card("d-1", "D", ""),
        ];
        let options = series_options(&cards);
        assert_eq!(
            options,
            vec![
                Series {
                    id: "base".to_string(),
                    name: "BASE".to_string()
                },
                Series {
                    id: "swsh".to_string(),
                    name: "SWSH".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_paginate_empty_list() {
        let (slice, page) = paginate::<u32>(&[], 3, PER_PAGE);
        assert!(slice.is_empty());
        assert_eq!(page.number, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_paginate_clamps_page() {
        let items: Vec<u32> = (0..45).collect();
        let (_, page) = paginate(&items, 99, PER_PAGE);
        assert_eq!(page.number, 3);
        assert_eq!(page.total_pages, 3);

        let (slice, page) = paginate(&items, 0, PER_PAGE);
        assert_eq!(page.number, 1);
        assert_eq!(slice.len(), PER_PAGE);
    }

    #[test]
    fn test_paginate_last_page_is_partial() {
        let items: Vec<u32> = (0..45).collect();
        let (slice, page) = paginate(&items, 3, PER_PAGE);
        assert_eq!(slice, (40..45).collect::<Vec<u32>>());
        assert_eq!(page.total, 45);
    }

    #[test]
    fn test_paginate_exact_multiple() {
        let items: Vec<u32> = (0..40).collect();
        let (_, page) = paginate(&items, 1, PER_PAGE);
        assert_eq!(page.total_pages, 2);
    }
}
