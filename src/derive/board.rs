//! Board (kanban) grouping.

use super::Record;

/// One column of a board view.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<'a, R> {
    pub key: String,
    pub records: Vec<&'a R>,
    /// Sum of the board's aggregate over `records`
    pub total: f64,
}

impl<R> Bucket<'_, R> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Records partitioned into buckets in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Board<'a, R> {
    pub buckets: Vec<Bucket<'a, R>>,
    /// Records whose category matched none of the declared keys, in input order
    pub unassigned: Vec<&'a R>,
}

impl<'a, R> Board<'a, R> {
    pub fn bucket(&self, key: &str) -> Option<&Bucket<'a, R>> {
        self.buckets.iter().find(|b| b.key == key)
    }

    /// Number of records on the board, unassigned included
    pub fn record_count(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum::<usize>() + self.unassigned.len()
    }

    /// Sum of every bucket total
    pub fn grand_total(&self) -> f64 {
        self.buckets.iter().map(|b| b.total).sum()
    }
}

/// Partition an already derived sequence into one bucket per key.
///
/// Every key gets a bucket even when nothing lands in it, and buckets follow
/// the order of `bucket_keys`, never the order categories appear in the data.
/// Within a bucket records keep their incoming order.
pub fn group_into_board<'a, R, K, F>(records: Vec<&'a R>, bucket_keys: &[K], aggregate: F) -> Board<'a, R>
where
    R: Record,
    K: AsRef<str>,
    F: Fn(&R) -> f64,
{
    let mut buckets: Vec<Bucket<'a, R>> = bucket_keys
        .iter()
        .map(|key| Bucket {
            key: key.as_ref().to_string(),
            records: Vec::new(),
            total: 0.0,
        })
        .collect();
    let mut unassigned = Vec::new();

    for record in records {
        let slot = record
            .category()
            .and_then(|category| buckets.iter_mut().find(|b| b.key == category));
        match slot {
            Some(bucket) => {
                bucket.total += aggregate(record);
                bucket.records.push(record);
            }
            None => unassigned.push(record),
        }
    }

    Board { buckets, unassigned }
}
