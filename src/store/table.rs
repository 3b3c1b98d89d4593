//! A single id-keyed table.

use std::collections::BTreeMap;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Certificate, Company, Compensation, Contribution, Level};

/// A record with a store-assigned id.
pub(crate) trait Record: Clone {
    /// Entity name used in error messages.
    const ENTITY: &'static str;

    fn id(&self) -> u64;
}

macro_rules! impl_record {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Record for $ty {
                const ENTITY: &'static str = $name;

                fn id(&self) -> u64 {
                    self.id
                }
            }
        )*
    };
}

impl_record! {
    Company => "company",
    Level => "level",
    Compensation => "compensation",
    Contribution => "contribution",
    Certificate => "certificate",
}

/// Rows keyed by id, iterated in ascending id order.
///
/// Ids start at 1 and are never reused, even after deletes.
#[derive(Debug, Clone)]
pub(crate) struct Table<T> {
    rows: BTreeMap<u64, T>,
    last_id: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<T: Record> Table<T> {
    /// Reserves the next id.
    pub fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    /// Stores a record under its own id, replacing any previous version.
    pub fn put(&mut self, record: T) -> T {
        self.rows.insert(record.id(), record.clone());
        record
    }

    pub fn get(&self, id: u64) -> TrackerResult<&T> {
        self.rows.get(&id).ok_or(TrackerError::NotFound {
            entity: T::ENTITY,
            id,
        })
    }

    pub fn contains(&self, id: u64) -> bool {
        self.rows.contains_key(&id)
    }

    /// Resolves a foreign key held in `field`.
    pub fn resolve(&self, field: &'static str, id: u64) -> TrackerResult<&T> {
        self.rows.get(&id).ok_or(TrackerError::InvalidReference {
            field,
            entity: T::ENTITY,
            id,
        })
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn remove(&mut self, id: u64) -> TrackerResult<T> {
        self.rows.remove(&id).ok_or(TrackerError::NotFound {
            entity: T::ENTITY,
            id,
        })
    }

    /// Removes every row matching `predicate` and returns the removed ids.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> Vec<u64>
    where
        F: FnMut(&T) -> bool,
    {
        let ids: Vec<u64> = self
            .rows
            .values()
            .filter(|row| predicate(*row))
            .map(|row| row.id())
            .collect();
        for id in &ids {
            self.rows.remove(id);
        }
        ids
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(table: &mut Table<Company>, short_name: &str) -> Company {
        let id = table.next_id();
        table.put(Company {
            id,
            name: short_name.to_string(),
            short_name: short_name.to_string(),
            location: "Manila".to_string(),
        })
    }

    #[test]
    fn test_ids_start_at_one_and_are_not_reused() {
        let mut table = Table::default();
        let first = company(&mut table, "A");
        assert_eq!(first.id, 1);

        table.remove(first.id).unwrap();
        let second = company(&mut table, "B");
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_missing_row_errors_name_the_entity() {
        let table: Table<Level> = Table::default();
        assert_eq!(table.get(4).unwrap_err().to_string(), "level 4 not found");
        assert_eq!(
            table.resolve("level", 4).unwrap_err().to_string(),
            "Invalid reference 'level': level 4 does not exist"
        );
    }

    #[test]
    fn test_remove_where_returns_ids() {
        let mut table = Table::default();
        company(&mut table, "A");
        company(&mut table, "B");
        company(&mut table, "A");

        let removed = table.remove_where(|c| c.short_name == "A");
        assert_eq!(removed, vec![1, 3]);
        assert_eq!(table.len(), 1);
        assert!(table.contains(2));
    }
}
