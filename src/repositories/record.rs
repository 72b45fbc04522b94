// src/repositories/record.rs
//
// What a gateway needs to know about a persisted entity kind.
// Implemented once per entity, next to its repository alias.

use rusqlite::types::Value;
use rusqlite::Row;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A persisted row shape with an `i64` surrogate key in column `id`
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    type Patch: Patch<Self>;

    /// Table name (also the flat-file name)
    const TABLE: &'static str;

    /// Non-key columns, in the order `to_values` yields them
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;

    fn with_id(self, id: i64) -> Self;

    /// Map a row selected as `id, COLUMNS...`
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    fn to_values(&self) -> Vec<Value>;
}

/// Partial update for a record. Carries the target id plus only the
/// fields that should change.
pub trait Patch<R>: Send + Sync {
    fn id(&self) -> i64;

    /// Column/value pairs for the provided fields. Never includes `id`.
    fn assignments(&self) -> Vec<(&'static str, Value)>;

    /// Apply the provided fields to an in-memory record
    fn merge_into(&self, record: &mut R);
}

/// Next surrogate key for a flat collection: max(key) + 1, or 1 when empty
pub fn generate_new_id<T, F>(records: &[T], key: F) -> i64
where
    F: Fn(&T) -> i64,
{
    records.iter().map(key).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_new_id_empty() {
        let records: Vec<i64> = Vec::new();
        assert_eq!(generate_new_id(&records, |id| *id), 1);
    }

    #[test]
    fn test_generate_new_id_uses_max_not_len() {
        let records = vec![3_i64, 7, 5];
        assert_eq!(generate_new_id(&records, |id| *id), 8);
    }
}
