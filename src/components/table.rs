//! In-memory CSV table and the seeded train/test partition

use crate::error::{Error, Result};
use csv::StringRecord;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// A delimited text table: one header row followed by data rows.
///
/// Rows are kept as raw string records, so values are written back exactly
/// as they were read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    pub fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        Self { headers, rows }
    }

    /// Read a comma-separated file whose first row is the header.
    ///
    /// # Errors
    ///
    /// - [`Error::Io`] if the file cannot be opened
    /// - [`Error::Csv`] if a row cannot be parsed or has the wrong width
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let headers = reader.headers()?.clone();
        let rows = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { headers, rows })
    }

    /// Write the header and rows to `path`, replacing any existing file.
    ///
    /// No index column is added. The parent directory must already exist.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        self.write_to(file)
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(rows, columns)`, header excluded from the row count
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers.len())
    }

    /// New table with the same header and the rows at `indices`, in that order.
    ///
    /// # Panics
    ///
    /// Panics if an index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            headers: self.headers.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }

    /// Partition the rows into `(train, test)` tables.
    ///
    /// See [`split_indices`] for how rows are assigned.
    pub fn train_test_split(&self, test_size: f64, seed: u64) -> Result<(Self, Self)> {
        let (train, test) = split_indices(self.len(), test_size, seed)?;
        Ok((self.select(&train), self.select(&test)))
    }
}

/// Randomly assign `n` row indices to `(train, test)`.
///
/// The test side receives `ceil(test_size * n)` indices, the train side the
/// rest. Indices are drawn from a single permutation of `0..n` produced by a
/// [`StdRng`] seeded with `seed`: the first `n_test` positions go to test and
/// the remainder to train, both in permutation order. The same `n`,
/// `test_size` and `seed` always yield the same assignment.
///
/// # Errors
///
/// - [`Error::InvalidTestSize`] unless `0 < test_size < 1`
/// - [`Error::EmptyDataset`] if `n` is zero
pub fn split_indices(n: usize, test_size: f64, seed: u64) -> Result<(Vec<usize>, Vec<usize>)> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(Error::InvalidTestSize(test_size));
    }
    if n == 0 {
        return Err(Error::EmptyDataset);
    }

    // test_size < 1 keeps n_test <= n
    let n_test = (test_size * n as f64).ceil() as usize;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(&mut rng);

    let train = order.split_off(n_test);
    Ok((train, order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_table(n: usize) -> Table {
        let headers = StringRecord::from(vec!["id", "alcohol", "quality"]);
        let rows = (0..n)
            .map(|i| {
                StringRecord::from(vec![
                    i.to_string(),
                    format!("{:.1}", 9.0 + (i % 7) as f64 * 0.5),
                    (3 + i % 6).to_string(),
                ])
            })
            .collect();
        Table::new(headers, rows)
    }

    #[test]
    fn test_split_counts_for_hundred_rows() {
        let (train, test) = split_indices(100, 0.25, 42).unwrap();
        assert_eq!(train.len(), 75);
        assert_eq!(test.len(), 25);
    }

    #[test]
    fn test_split_counts_sum_to_total() {
        for n in 1..=50 {
            let (train, test) = split_indices(n, 0.25, 42).unwrap();
            assert_eq!(train.len() + test.len(), n, "n = {n}");
            assert_eq!(test.len(), (n as f64 * 0.25).ceil() as usize, "n = {n}");
        }
    }

    #[test]
    fn test_split_single_row_goes_to_test() {
        let (train, test) = split_indices(1, 0.25, 42).unwrap();
        assert!(train.is_empty());
        assert_eq!(test, vec![0]);
    }

    #[test]
    fn test_split_is_a_partition() {
        let (train, test) = split_indices(37, 0.25, 42).unwrap();
        let train_set: HashSet<_> = train.iter().copied().collect();
        let test_set: HashSet<_> = test.iter().copied().collect();

        assert_eq!(train_set.len(), train.len());
        assert_eq!(test_set.len(), test.len());
        assert!(train_set.is_disjoint(&test_set));

        let all: HashSet<_> = train_set.union(&test_set).copied().collect();
        assert_eq!(all, (0..37).collect::<HashSet<usize>>());
    }

    #[test]
    fn test_split_is_deterministic() {
        let first = split_indices(200, 0.25, 42).unwrap();
        let second = split_indices(200, 0.25, 42).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_split_depends_on_seed() {
        let a = split_indices(200, 0.25, 42).unwrap();
        let b = split_indices(200, 0.25, 7).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_split_rejects_bad_inputs() {
        assert!(matches!(split_indices(0, 0.25, 42), Err(Error::EmptyDataset)));
        for bad in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(matches!(
                split_indices(10, bad, 42),
                Err(Error::InvalidTestSize(_))
            ));
        }
    }

    #[test]
    fn test_table_split_keeps_every_row_once() {
        let table = sample_table(100);
        let (train, test) = table.train_test_split(0.25, 42).unwrap();

        assert_eq!(train.shape(), (75, 3));
        assert_eq!(test.shape(), (25, 3));
        assert_eq!(train.headers(), table.headers());

        let mut ids: Vec<String> = train
            .rows()
            .iter()
            .chain(test.rows())
            .map(|r| r[0].to_string())
            .collect();
        ids.sort_by_key(|id| id.parse::<usize>().unwrap());
        let expected: Vec<String> = (0..100).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_csv_round_trip_without_index() {
        let input = "fixed acidity,volatile acidity,quality\n7.4,0.7,5\n7.8,0.88,5\n\"11,2\",0.28,6\n";
        let table = Table::from_reader(input.as_bytes()).unwrap();
        assert_eq!(table.shape(), (3, 3));

        let mut out = Vec::new();
        table.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), input);
    }

    #[test]
    fn test_ragged_rows_fail_to_parse() {
        let input = "a,b\n1,2\n3\n";
        let err = Table::from_reader(input.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Csv(_)));
    }

    #[test]
    fn test_header_only_table_is_empty() {
        let table = Table::from_reader("a,b,c\n".as_bytes()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.shape(), (0, 3));
        assert!(matches!(
            table.train_test_split(0.25, 42),
            Err(Error::EmptyDataset)
        ));
    }
}
