//! Search, category filter and pagination for record lists
//!
//! Everything here is a pure function of its inputs. The presentation layer
//! owns a [`ViewState`] and calls [`derive_view`] whenever the search text,
//! the category, the page or the underlying collection changes.

use crate::constants::{HIGH_DEPRECIATION_THRESHOLD, HIGH_VALUE_THRESHOLD};
use crate::error::{InventoryError, Result};

/// Fields the engine needs from a record.
pub trait ListRecord {
    /// String form of every field, matched by the free-text search.
    fn search_fields(&self) -> Vec<String>;
    fn purchase_price(&self) -> f64;
    fn depreciation(&self) -> f64;
}

/// Named predicate bucket applied on top of the free-text search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    HighValue,
    LowValue,
    HighDepreciation,
    LowDepreciation,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::HighValue,
        CategoryFilter::LowValue,
        CategoryFilter::HighDepreciation,
        CategoryFilter::LowDepreciation,
    ];

    pub fn matches<R: ListRecord + ?Sized>(self, record: &R) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::HighValue => record.purchase_price() > HIGH_VALUE_THRESHOLD,
            CategoryFilter::LowValue => record.purchase_price() <= HIGH_VALUE_THRESHOLD,
            CategoryFilter::HighDepreciation => record.depreciation() > HIGH_DEPRECIATION_THRESHOLD,
            CategoryFilter::LowDepreciation => record.depreciation() <= HIGH_DEPRECIATION_THRESHOLD,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Assets",
            CategoryFilter::HighValue => "High Value (>R10,000)",
            CategoryFilter::LowValue => "Low Value (≤R10,000)",
            CategoryFilter::HighDepreciation => "High Depreciation (>50%)",
            CategoryFilter::LowDepreciation => "Low Depreciation (≤50%)",
        }
    }
}

/// One entry of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

/// What the user asked for. Lives as long as the list view is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub category_filter: CategoryFilter,
    /// 1-based
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category_filter: CategoryFilter::All,
            current_page: 1,
        }
    }
}

/// One page of an already filtered sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
}

/// Returns indices into `records` of every record matching both the search
/// term and the category, in input order.
pub fn filter<R: ListRecord>(records: &[R], search_term: &str, category: CategoryFilter) -> Vec<usize> {
    let needle = search_term.to_lowercase();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_search(*record, &needle) && category.matches(*record))
        .map(|(i, _)| i)
        .collect()
}

fn matches_search<R: ListRecord + ?Sized>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Total page count for `len` items, never less than one.
pub fn total_pages(len: usize, items_per_page: usize) -> Result<usize> {
    if items_per_page == 0 {
        return Err(InventoryError::InvalidItemsPerPage(items_per_page));
    }
    Ok(len.div_ceil(items_per_page).max(1))
}

/// Slices out page `current_page` (1-based). A page past the end yields an
/// empty slice; clamping is the caller's job (see [`clamp_page`]).
pub fn paginate<T>(items: &[T], current_page: usize, items_per_page: usize) -> Result<Page<'_, T>> {
    let total_pages = total_pages(items.len(), items_per_page)?;

    let start = current_page
        .saturating_sub(1)
        .saturating_mul(items_per_page)
        .min(items.len());
    let end = start.saturating_add(items_per_page).min(items.len());

    Ok(Page {
        items: &items[start..end],
        total_pages,
    })
}

/// Clamps a requested page into `1..=total_pages`.
pub fn clamp_page(current_page: usize, total_pages: usize) -> usize {
    current_page.clamp(1, total_pages.max(1))
}

/// Page numbers to render around `current_page`: the first and last page,
/// the window `current ± 1`, and an ellipsis at exactly `current ± 2`.
pub fn page_labels(current_page: usize, total_pages: usize) -> Vec<PageLabel> {
    let total_pages = total_pages.max(1);
    let mut labels = Vec::new();

    for i in 1..=total_pages {
        let in_window = i + 1 >= current_page && i <= current_page + 1;
        if i == 1 || i == total_pages || in_window {
            labels.push(PageLabel::Page(i));
        } else if i + 2 == current_page || i == current_page + 2 {
            labels.push(PageLabel::Ellipsis);
        }
    }

    labels
}

/// Everything the list view renders for one recompute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    /// Indices into the source collection of all matching records
    pub filtered: Vec<usize>,
    /// Indices into the source collection of the rows on the current page
    pub page_rows: Vec<usize>,
    pub current_page: usize,
    pub total_pages: usize,
    pub labels: Vec<PageLabel>,
}

/// Filters, clamps `state.current_page` against the new page count, then
/// paginates and labels. The clamp is written back into `state`.
pub fn derive_view<R: ListRecord>(
    records: &[R],
    state: &mut ViewState,
    items_per_page: usize,
) -> Result<ListView> {
    let filtered = filter(records, &state.search_term, state.category_filter);
    let total = total_pages(filtered.len(), items_per_page)?;
    state.current_page = clamp_page(state.current_page, total);

    let page = paginate(&filtered, state.current_page, items_per_page)?;
    let page_rows = page.items.to_vec();

    Ok(ListView {
        page_rows,
        current_page: state.current_page,
        total_pages: total,
        labels: page_labels(state.current_page, total),
        filtered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLabel::{Ellipsis, Page as P};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        title: String,
        color: String,
        purchase_price: f64,
        depreciation: f64,
    }

    impl ListRecord for Item {
        fn search_fields(&self) -> Vec<String> {
            vec![
                self.id.clone(),
                self.title.clone(),
                self.color.clone(),
                self.purchase_price.to_string(),
                self.depreciation.to_string(),
            ]
        }

        fn purchase_price(&self) -> f64 {
            self.purchase_price
        }

        fn depreciation(&self) -> f64 {
            self.depreciation
        }
    }

    fn item(n: usize, price: f64, depreciation: f64) -> Item {
        Item {
            id: format!("id-{n}"),
            title: format!("Laptop {n}"),
            color: "Grey".to_string(),
            purchase_price: price,
            depreciation,
        }
    }

    fn items(count: usize) -> Vec<Item> {
        (1..=count).map(|n| item(n, 1000.0 * n as f64, 5.0 * n as f64)).collect()
    }

    #[test]
    fn empty_search_and_all_keeps_everything_in_order() {
        let records = items(4);
        assert_eq!(filter(&records, "", CategoryFilter::All), vec![0, 1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let mut records = items(3);
        records[1].color = "Blue".to_string();

        assert_eq!(filter(&records, "blue", CategoryFilter::All), vec![1]);
        assert_eq!(filter(&records, "LAPTOP 3", CategoryFilter::All), vec![2]);
        // numeric fields are searched through their string form
        assert_eq!(filter(&records, "2000", CategoryFilter::All), vec![1]);
        assert!(filter(&records, "tablet", CategoryFilter::All).is_empty());
    }

    #[test]
    fn thresholds_fall_on_the_low_side() {
        let records = vec![
            item(1, 10_000.0, 50.0),
            item(2, 10_000.01, 50.01),
            item(3, 0.0, 0.0),
        ];

        assert_eq!(filter(&records, "", CategoryFilter::LowValue), vec![0, 2]);
        assert_eq!(filter(&records, "", CategoryFilter::HighValue), vec![1]);
        assert_eq!(filter(&records, "", CategoryFilter::LowDepreciation), vec![0, 2]);
        assert_eq!(filter(&records, "", CategoryFilter::HighDepreciation), vec![1]);
    }

    #[test]
    fn value_and_depreciation_pairs_partition_the_collection() {
        let records: Vec<Item> = [0.0, 9_999.99, 10_000.0, 10_000.5, 250_000.0]
            .iter()
            .zip([0.0, 49.9, 50.0, 50.1, 100.0])
            .enumerate()
            .map(|(n, (&price, dep))| item(n, price, dep))
            .collect();

        for (high, low) in [
            (CategoryFilter::HighValue, CategoryFilter::LowValue),
            (CategoryFilter::HighDepreciation, CategoryFilter::LowDepreciation),
        ] {
            for record in &records {
                assert!(high.matches(record) != low.matches(record), "{record:?}");
            }
        }
    }

    #[test]
    fn search_and_category_combine_with_and() {
        let records = vec![
            item(1, 20_000.0, 10.0),
            item(2, 500.0, 10.0),
            Item { title: "Projector".into(), ..item(3, 30_000.0, 80.0) },
        ];

        assert_eq!(filter(&records, "laptop", CategoryFilter::HighValue), vec![0]);
        assert!(filter(&records, "projector", CategoryFilter::LowValue).is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let records = items(10);
        let first: Vec<Item> = filter(&records, "laptop", CategoryFilter::LowDepreciation)
            .into_iter()
            .map(|i| records[i].clone())
            .collect();
        let second: Vec<Item> = filter(&first, "laptop", CategoryFilter::LowDepreciation)
            .into_iter()
            .map(|i| first[i].clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn twelve_records_first_page() {
        let records = items(12);
        let filtered = filter(&records, "", CategoryFilter::All);
        let page = paginate(&filtered, 1, 5).unwrap();

        assert_eq!(page.items, &[0, 1, 2, 3, 4]);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page_labels(1, page.total_pages), vec![P(1), P(2), P(3)]);
    }

    #[test]
    fn pages_concatenate_back_to_the_input() {
        let data: Vec<u32> = (0..23).collect();
        let total = total_pages(data.len(), 5).unwrap();
        assert_eq!(total, 5);

        let mut rebuilt = Vec::new();
        for page in 1..=total {
            let slice = paginate(&data, page, 5).unwrap().items;
            assert!(slice.len() <= 5);
            rebuilt.extend_from_slice(slice);
        }
        assert_eq!(rebuilt, data);
    }

    #[test]
    fn empty_input_still_has_one_page() {
        let records: Vec<Item> = Vec::new();
        let mut state = ViewState::default();
        let view = derive_view(&records, &mut state, 5).unwrap();

        assert!(view.filtered.is_empty());
        assert!(view.page_rows.is_empty());
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.labels, vec![P(1)]);
    }

    #[test]
    fn page_past_the_end_is_empty_not_clamped() {
        let data = [1, 2, 3];
        let page = paginate(&data, 4, 2).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn zero_items_per_page_is_rejected() {
        let data = [1, 2, 3];
        assert!(matches!(
            paginate(&data, 1, 0),
            Err(InventoryError::InvalidItemsPerPage(0))
        ));
        let mut state = ViewState::default();
        assert!(derive_view(&items(2), &mut state, 0).is_err());
    }

    #[test]
    fn labels_at_the_start_of_a_long_list() {
        assert_eq!(page_labels(1, 10), vec![P(1), P(2), Ellipsis, P(10)]);
    }

    #[test]
    fn labels_in_the_middle_of_a_long_list() {
        assert_eq!(
            page_labels(5, 10),
            vec![P(1), Ellipsis, P(4), P(5), P(6), Ellipsis, P(10)]
        );
    }

    #[test]
    fn single_skipped_page_becomes_an_ellipsis() {
        assert_eq!(page_labels(4, 5), vec![P(1), Ellipsis, P(3), P(4), P(5)]);
    }

    #[test]
    fn labels_have_the_expected_shape() {
        for total in 1..=15 {
            for current in 1..=total {
                let labels = page_labels(current, total);
                assert_eq!(labels.first(), Some(&P(1)));
                assert_eq!(labels.last(), Some(&P(total)));

                let numbers: Vec<usize> = labels
                    .iter()
                    .filter_map(|l| match l {
                        P(n) => Some(*n),
                        Ellipsis => None,
                    })
                    .collect();
                assert!(numbers.windows(2).all(|w| w[0] < w[1]));
                assert!(labels
                    .windows(2)
                    .all(|w| !(w[0] == Ellipsis && w[1] == Ellipsis)));
            }
        }
        assert_eq!(page_labels(1, 1), vec![P(1)]);
        assert_eq!(page_labels(1, 0), vec![P(1)]);
    }

    #[test]
    fn deleting_the_only_row_on_the_last_page_clamps() {
        let mut records = items(11);
        let mut state = ViewState { current_page: 3, ..ViewState::default() };

        let view = derive_view(&records, &mut state, 5).unwrap();
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page_rows, vec![10]);

        records.remove(10);
        let view = derive_view(&records, &mut state, 5).unwrap();
        assert_eq!(view.total_pages, 2);
        assert_eq!(state.current_page, 2);
        assert_eq!(view.page_rows, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn narrowing_the_search_pulls_the_page_back() {
        let records = items(12);
        let mut state = ViewState { current_page: 3, ..ViewState::default() };
        derive_view(&records, &mut state, 5).unwrap();

        state.search_term = "laptop 1".to_string(); // 1, 10, 11, 12
        let view = derive_view(&records, &mut state, 5).unwrap();
        assert_eq!(view.current_page, 1);
        assert_eq!(view.page_rows, vec![0, 9, 10, 11]);
    }

    #[test]
    fn page_zero_is_clamped_to_one() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(clamp_page(2, 0), 1);
    }
}
