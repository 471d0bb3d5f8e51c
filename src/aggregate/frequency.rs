//! Frequency counting and per-group sums

use std::collections::{BTreeMap, HashMap};

use crate::grouping::GroupingView;
use crate::store::{Field, RecordStore};

/// Top `n` values of `field` by occurrence count.
///
/// Ties keep first-occurrence order. `n == 0` gives nothing; `n` past the
/// distinct count gives every value.
pub fn most_frequent(store: &RecordStore, field: Field, n: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in store.iter() {
        let key = record.key(field);
        match slots.get(&key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    // Stable sort: equal counts stay in first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// Sum of prices per group key
pub fn sum_by(view: &GroupingView, store: &RecordStore) -> BTreeMap<String, f64> {
    view.keys()
        .map(|key| {
            let total: f64 = view.records(key, store).map(|r| r.price).sum();
            (key.to_string(), total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::GroupBy;
    use crate::store::RawRecord;

    fn store() -> RecordStore {
        RecordStore::from_raw(vec![
            RawRecord::new(1, "Mouse", "Accesorios", 25, "2023-02-10", "Pedro"),
            RawRecord::new(2, "Laptop", "Electrónica", 1200, "2023-01-15", "Ana"),
            RawRecord::new(3, "Laptop", "Electrónica", 1500, "2023-02-15", "Juan"),
            RawRecord::new(4, "Mouse", "Accesorios", 30, "2023-04-10", "Pedro"),
            RawRecord::new(5, "Tablet", "Electrónica", 300, "2023-03-10", "Pedro"),
        ])
        .unwrap()
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let top = most_frequent(&store(), Field::Product, 3);
        assert_eq!(
            top,
            vec![
                ("Mouse".to_string(), 2),
                ("Laptop".to_string(), 2),
                ("Tablet".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_higher_count_first() {
        let top = most_frequent(&store(), Field::Vendor, 1);
        assert_eq!(top, vec![("Pedro".to_string(), 3)]);
    }

    #[test]
    fn test_zero_and_oversized_n() {
        let store = store();
        assert!(most_frequent(&store, Field::Product, 0).is_empty());
        assert_eq!(most_frequent(&store, Field::Product, 100).len(), 3);
    }

    #[test]
    fn test_sum_by_category() {
        let store = store();
        let view = GroupingView::build(GroupBy::Category, &store);
        let sums = sum_by(&view, &store);
        assert_eq!(sums["Accesorios"], 55.0);
        assert_eq!(sums["Electrónica"], 3000.0);
        assert_eq!(sums.len(), 2);
    }
}
