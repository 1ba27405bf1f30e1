use std::collections::{BTreeMap, HashMap};

use super::model::{CellValue, Dataset};

// ---------------------------------------------------------------------------
// Aggregate views
// ---------------------------------------------------------------------------

/// One entry of an aggregate view: a key and the number of records with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountEntry<K> {
    pub key: K,
    pub count: usize,
}

impl<K> CountEntry<K> {
    pub fn new(key: K, count: usize) -> Self {
        Self { key, count }
    }
}

/// Counts per distinct category, most frequent first.
pub type CategoryCounts = Vec<CountEntry<CellValue>>;

/// Counts per year, oldest first.
pub type YearCounts = Vec<CountEntry<i64>>;

/// Every distinct non-null value of `column` with its count.
///
/// Ordered by descending count; equal counts keep the order in which the
/// values were first encountered. Cells are grouped by
/// [`CellValue::group_key`], and each entry keeps the first cell seen.
/// Empty when the column is absent.
pub fn counts_by_category(dataset: &Dataset, column: &str) -> CategoryCounts {
    let cells = match dataset.column(column) {
        Ok(cells) => cells,
        Err(e) => {
            log::debug!("{e}; returning no counts");
            return Vec::new();
        }
    };

    let mut slots: HashMap<CellValue, usize> = HashMap::new();
    let mut entries: CategoryCounts = Vec::new();

    for cell in cells.filter(|c| !c.is_null()) {
        let key = cell.group_key();
        match slots.get(&key) {
            Some(&slot) => entries[slot].count += 1,
            None => {
                slots.insert(key, entries.len());
                entries.push(CountEntry::new(cell.clone(), 1));
            }
        }
    }

    // Stable: ties stay in first-seen order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

/// The `n` most frequent values of `column`, ranked as in
/// [`counts_by_category`].
pub fn top_category_counts(dataset: &Dataset, column: &str, n: usize) -> CategoryCounts {
    let mut counts = counts_by_category(dataset, column);
    counts.truncate(n);
    counts
}

/// One entry per distinct year in `year_column`, ascending.
///
/// Null cells are ignored. Non-null cells that do not read as a year are
/// skipped and reported in the log.
pub fn counts_by_year(dataset: &Dataset, year_column: &str) -> YearCounts {
    let cells = match dataset.column(year_column) {
        Ok(cells) => cells,
        Err(e) => {
            log::debug!("{e}; returning no yearly counts");
            return Vec::new();
        }
    };

    let mut by_year: BTreeMap<i64, usize> = BTreeMap::new();
    let mut skipped = 0usize;

    for cell in cells.filter(|c| !c.is_null()) {
        match cell.as_year() {
            Some(year) => *by_year.entry(year).or_default() += 1,
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {skipped} non-year values in column '{year_column}'");
    }

    by_year
        .into_iter()
        .map(|(year, count)| CountEntry::new(year, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn ev_sample() -> Dataset {
        let rows = [
            ("TESLA", 2022, "BEV", "CA"),
            ("NISSAN", 2021, "BEV", "WA"),
            ("TESLA", 2023, "PHEV", "CA"),
            ("FORD", 2022, "PHEV", "TX"),
            ("TESLA", 2022, "BEV", "CA"),
        ];
        Dataset::new(
            vec![
                "Make".into(),
                "Model Year".into(),
                "Electric Vehicle Type".into(),
                "State".into(),
            ],
            rows.iter()
                .map(|&(make, year, kind, state)| {
                    Record::new(vec![
                        make.into(),
                        CellValue::Integer(year),
                        kind.into(),
                        state.into(),
                    ])
                })
                .collect(),
        )
    }

    fn pairs(counts: &CategoryCounts) -> Vec<(String, usize)> {
        counts.iter().map(|e| (e.key.to_string(), e.count)).collect()
    }

    fn owned(expected: &[(&str, usize)]) -> Vec<(String, usize)> {
        expected.iter().map(|&(k, c)| (k.to_string(), c)).collect()
    }

    #[test]
    fn test_top_manufacturers() {
        let top = top_category_counts(&ev_sample(), "Make", 10);
        assert_eq!(pairs(&top), owned(&[("TESLA", 3), ("NISSAN", 1), ("FORD", 1)]));
    }

    #[test]
    fn test_top_n_truncates() {
        let top = top_category_counts(&ev_sample(), "Make", 2);
        assert_eq!(pairs(&top), owned(&[("TESLA", 3), ("NISSAN", 1)]));
        assert!(top_category_counts(&ev_sample(), "Make", 0).is_empty());
    }

    #[test]
    fn test_counts_by_year() {
        let years = counts_by_year(&ev_sample(), "Model Year");
        assert_eq!(
            years,
            vec![
                CountEntry::new(2021, 1),
                CountEntry::new(2022, 3),
                CountEntry::new(2023, 1),
            ]
        );
    }

    #[test]
    fn test_counts_by_type_and_state() {
        let ds = ev_sample();
        assert_eq!(
            pairs(&counts_by_category(&ds, "Electric Vehicle Type")),
            owned(&[("BEV", 3), ("PHEV", 2)])
        );
        assert_eq!(
            pairs(&counts_by_category(&ds, "State")),
            owned(&[("CA", 3), ("WA", 1), ("TX", 1)])
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let ds = Dataset::new(
            vec!["State".into()],
            ["TX", "WA", "WA", "TX", "OR"]
                .iter()
                .map(|&s| Record::new(vec![s.into()]))
                .collect(),
        );
        assert_eq!(
            pairs(&counts_by_category(&ds, "State")),
            owned(&[("TX", 2), ("WA", 2), ("OR", 1)])
        );
    }

    #[test]
    fn test_nulls_and_non_years_are_not_counted() {
        let ds = Dataset::new(
            vec!["Model Year".into()],
            vec![
                Record::new(vec![CellValue::Integer(2020)]),
                Record::new(vec![CellValue::Null]),
                Record::new(vec!["unknown".into()]),
                Record::new(vec![CellValue::Float(2020.0)]),
            ],
        );
        assert_eq!(counts_by_year(&ds, "Model Year"), vec![CountEntry::new(2020, 2)]);
        assert_eq!(
            pairs(&counts_by_category(&ds, "Model Year")),
            owned(&[("2020", 2), ("unknown", 1)])
        );
    }

    #[test]
    fn test_whole_float_and_integer_are_one_category() {
        let ds = Dataset::new(
            vec!["Model Year".into()],
            vec![
                Record::new(vec![CellValue::Integer(2021)]),
                Record::new(vec![CellValue::Integer(2020)]),
                Record::new(vec![CellValue::Float(2020.0)]),
                Record::new(vec![CellValue::Float(2021.5)]),
            ],
        );
        let counts = counts_by_category(&ds, "Model Year");
        assert_eq!(pairs(&counts), owned(&[("2020", 2), ("2021", 1), ("2021.5", 1)]));
        assert_eq!(counts[0].key, CellValue::Integer(2020));
    }

    #[test]
    fn test_missing_column_and_empty_dataset_yield_nothing() {
        let ds = ev_sample();
        assert!(top_category_counts(&ds, "County", 10).is_empty());
        assert!(counts_by_year(&ds, "Year").is_empty());
        assert!(counts_by_category(&ds, "Region").is_empty());

        let empty = Dataset::empty();
        assert!(top_category_counts(&empty, "Make", 10).is_empty());
        assert!(counts_by_year(&empty, "Model Year").is_empty());
        assert!(counts_by_category(&empty, "Electric Vehicle Type").is_empty());
        assert!(counts_by_category(&empty, "State").is_empty());
    }

    #[test]
    fn test_ranking_properties() {
        let ds = ev_sample();
        for n in 0..5 {
            let top = top_category_counts(&ds, "Make", n);
            assert!(top.len() <= n);
            assert!(top.iter().map(|e| e.count).sum::<usize>() <= ds.len());
            assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
        }

        let years = counts_by_year(&ds, "Model Year");
        assert!(years.windows(2).all(|w| w[0].key < w[1].key));
        assert!(years.iter().all(|e| e.count > 0));
    }
}
