//! Vector table materialized from a model record stream
//!
//! The table is built in one pass and immutable afterwards; both load-time
//! invariants (per-record dimension, declared record count) are checked
//! here, and a violation aborts construction.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::model::ModelStream;
use crate::types::TermVector;

/// Vocabulary size at which normalization switches to parallel iteration
const PARALLEL_NORMALIZE_THRESHOLD: usize = 1024;

/// Ordinal-indexed table of unit-normalized term vectors
///
/// Safe for unlimited concurrent read-only queries once constructed.
#[derive(Debug, Clone)]
pub struct VectorTable {
    dimension: usize,
    data: Vec<TermVector>,
    ordinals: HashMap<String, usize>,
}

impl VectorTable {
    /// Consume a record stream exactly once into an ordinal array and a
    /// term → ordinal map, normalizing every vector to unit length.
    pub fn from_stream(stream: ModelStream) -> Result<Self> {
        let declared_size = stream.dictionary_size();
        let dimension = stream.vector_dimension();

        let mut data: Vec<TermVector> = Vec::with_capacity(declared_size);
        let mut ordinals: HashMap<String, usize> = HashMap::with_capacity(declared_size);

        for (record, entry) in stream.enumerate() {
            let entry = entry?;
            if entry.size() != dimension {
                return Err(Error::DimensionMismatch {
                    record,
                    expected: dimension,
                    actual: entry.size(),
                });
            }
            ordinals.insert(entry.term.clone(), data.len());
            data.push(entry);
        }

        if data.len() != declared_size {
            return Err(Error::SizeMismatch {
                declared: declared_size,
                found: data.len(),
            });
        }

        normalize_all(&mut data);
        info!(terms = data.len(), dimension, "vector table loaded");

        Ok(Self {
            dimension,
            data,
            ordinals,
        })
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the table holds no records
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Vector length shared by every record
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Normalized vector stored at an ordinal
    pub fn vector(&self, ordinal: usize) -> Option<&[f32]> {
        self.data.get(ordinal).map(|entry| entry.vector.as_slice())
    }

    /// Term stored at an ordinal
    pub fn term(&self, ordinal: usize) -> Option<&str> {
        self.data.get(ordinal).map(|entry| entry.term.as_str())
    }

    /// Normalized vector for a term, if the term is in the vocabulary
    pub fn vector_of(&self, term: &str) -> Option<&[f32]> {
        self.ordinals
            .get(term)
            .and_then(|&ordinal| self.vector(ordinal))
    }

    /// Ordinal for a term, if the term is in the vocabulary
    pub fn ordinal_of(&self, term: &str) -> Option<usize> {
        self.ordinals.get(term).copied()
    }

    /// Iterate all records with their ordinals
    pub fn entries(&self) -> impl Iterator<Item = (usize, &TermVector)> {
        self.data.iter().enumerate()
    }
}

fn normalize_all(data: &mut [TermVector]) {
    if data.len() >= PARALLEL_NORMALIZE_THRESHOLD {
        data.par_iter_mut().for_each(normalize_entry);
    } else {
        data.iter_mut().for_each(normalize_entry);
    }
}

fn normalize_entry(entry: &mut TermVector) {
    if entry.norm() == 0.0 {
        warn!(term = %entry.term, "zero-norm vector left unnormalized");
        return;
    }
    entry.normalize();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_stream(declared: usize, dimension: usize, records: &[(&str, Vec<f32>)]) -> ModelStream {
        let records = records
            .iter()
            .map(|(term, vector)| TermVector::new(*term, vector.clone()))
            .collect();
        ModelStream::from_records(declared, dimension, records)
    }

    #[test]
    fn test_table_matches_declared_header() {
        let table = VectorTable::from_stream(make_stream(
            3,
            2,
            &[
                ("a", vec![10.0, 10.0]),
                ("b", vec![10.0, 8.0]),
                ("c", vec![9.0, 10.0]),
            ],
        ))
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.dimension(), 2);
        for ordinal in 0..table.len() {
            assert_eq!(table.vector(ordinal).unwrap().len(), 2);
        }
    }

    #[test]
    fn test_vectors_are_normalized_on_load() {
        let table = VectorTable::from_stream(make_stream(
            2,
            2,
            &[("a", vec![10.0, 10.0]), ("f", vec![-1.0, 10.0])],
        ))
        .unwrap();

        let a = table.vector_of("a").unwrap();
        assert!((a[0] - 0.70710).abs() < 0.001);
        assert!((a[1] - 0.70710).abs() < 0.001);

        let f = table.vector_of("f").unwrap();
        assert!((f[0] - (-0.0995)).abs() < 0.001);
        assert!((f[1] - 0.99503).abs() < 0.001);
    }

    #[test]
    fn test_dimension_mismatch_is_fatal_wherever_it_occurs() {
        for bad_position in [0, 1, 3] {
            let mut records = vec![
                ("a", vec![10.0, 10.0]),
                ("b", vec![10.0, 8.0]),
                ("c", vec![9.0, 10.0]),
                ("f", vec![-1.0, 10.0]),
            ];
            records[bad_position].1 = vec![9.0];

            let err = VectorTable::from_stream(make_stream(4, 2, &records)).unwrap_err();
            match err {
                Error::DimensionMismatch {
                    record,
                    expected,
                    actual,
                } => {
                    assert_eq!(record, bad_position);
                    assert_eq!(expected, 2);
                    assert_eq!(actual, 1);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_declared_size_must_match_record_count() {
        let err = VectorTable::from_stream(make_stream(
            10,
            2,
            &[("a", vec![1.0, 1.0]), ("b", vec![2.0, 2.0])],
        ))
        .unwrap_err();

        match err {
            Error::SizeMismatch { declared, found } => {
                assert_eq!(declared, 10);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_zero_norm_vector_is_stored_unchanged() {
        let table = VectorTable::from_stream(make_stream(
            2,
            2,
            &[("a", vec![3.0, 4.0]), ("pad", vec![0.0, 0.0])],
        ))
        .unwrap();

        assert_eq!(table.vector_of("pad").unwrap(), &[0.0, 0.0]);
        let a = table.vector_of("a").unwrap();
        assert!((a[0] - 0.6).abs() < 0.0001);
        assert!((a[1] - 0.8).abs() < 0.0001);
    }

    #[test]
    fn test_lookup_accessors() {
        let table = VectorTable::from_stream(make_stream(
            2,
            2,
            &[("hello", vec![1.0, 0.0]), ("world", vec![0.0, 1.0])],
        ))
        .unwrap();

        assert_eq!(table.ordinal_of("world"), Some(1));
        assert_eq!(table.term(1), Some("world"));
        assert!(table.vector_of("missing").is_none());
        assert!(table.term(5).is_none());
    }
}
