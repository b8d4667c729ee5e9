use crate::parser::Record;
use std::collections::BTreeMap;

/// Records sharing one row position, in column order.
#[derive(Debug, Clone)]
pub struct RowBucket<'r> {
    pub position: i64,
    pub records: Vec<&'r Record>,
}

/// Bucket records by row position; each bucket is stable-sorted by column.
pub fn group_rows(records: &[Record]) -> BTreeMap<i64, RowBucket<'_>> {
    let mut buckets: BTreeMap<i64, RowBucket<'_>> = BTreeMap::new();

    for record in records {
        buckets
            .entry(record.row_position)
            .or_insert_with(|| RowBucket {
                position: record.row_position,
                records: Vec::new(),
            })
            .records
            .push(record);
    }

    // sort_by_key is stable: equal columns keep input order
    for bucket in buckets.values_mut() {
        bucket.records.sort_by_key(|r| r.col_position);
    }

    buckets
}
