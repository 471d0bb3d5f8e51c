//! Grouping views
//!
//! A view partitions the store by one attribute. Groups hold store
//! positions in original relative order.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::store::{Field, Record, RecordStore};

/// Attribute a view partitions by
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    Product,
    Category,
    Vendor,
    /// `YYYY-MM` derived from the record date
    Month,
}

impl GroupBy {
    pub const ALL: [GroupBy; 4] = [
        GroupBy::Product,
        GroupBy::Category,
        GroupBy::Vendor,
        GroupBy::Month,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Product => "product",
            GroupBy::Category => "category",
            GroupBy::Vendor => "vendor",
            GroupBy::Month => "month",
        }
    }

    pub fn parse(name: &str) -> Option<GroupBy> {
        GroupBy::ALL.into_iter().find(|g| g.as_str() == name)
    }

    /// Group key of a record
    pub fn key_for(&self, record: &Record) -> String {
        match self {
            GroupBy::Product => record.key(Field::Product),
            GroupBy::Category => record.key(Field::Category),
            GroupBy::Vendor => record.key(Field::Vendor),
            GroupBy::Month => month_key(record),
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Zero-padded `YYYY-MM` key
pub fn month_key(record: &Record) -> String {
    format!("{}-{:02}", record.date.year(), record.date.month())
}

/// Key → store positions for one attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingView {
    groups: BTreeMap<String, Vec<usize>>,
}

impl GroupingView {
    /// Single pass over the store
    pub fn build(group_by: GroupBy, store: &RecordStore) -> Self {
        let mut groups: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (pos, record) in store.iter().enumerate() {
            groups.entry(group_by.key_for(record)).or_default().push(pos);
        }
        Self { groups }
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.groups.contains_key(key)
    }

    /// Keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Store positions for a key, empty if the key is absent
    pub fn positions(&self, key: &str) -> &[usize] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Records of one group in original order
    pub fn records<'a>(
        &'a self,
        key: &str,
        store: &'a RecordStore,
    ) -> impl Iterator<Item = &'a Record> + 'a {
        self.positions(key)
            .iter()
            .filter_map(move |&pos| store.at(pos))
    }

    /// (key, positions) in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// One view per `GroupBy`, built together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingViews {
    views: BTreeMap<GroupBy, GroupingView>,
}

impl GroupingViews {
    pub fn build(store: &RecordStore) -> Self {
        let views = GroupBy::ALL
            .into_iter()
            .map(|g| (g, GroupingView::build(g, store)))
            .collect();
        Self { views }
    }

    pub fn view(&self, group_by: GroupBy) -> &GroupingView {
        // Every variant is populated in build
        &self.views[&group_by]
    }
}
