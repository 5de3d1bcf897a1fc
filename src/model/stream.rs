//! Lazy record sequence with its declared header values
//!
//! The header is available before any record is consumed so a caller can
//! pre-size storage. The sequence itself is single-pass and non-restartable.

use crate::error::Result;
use crate::model::reader;
use crate::types::TermVector;

/// A word2vec model as a header plus a lazy stream of records
#[derive(Debug)]
pub struct ModelStream {
    dictionary_size: usize,
    vector_dimension: usize,
    records: RecordSource,
}

#[derive(Debug)]
enum RecordSource {
    /// Records parsed on demand out of the buffered container entry
    Entry {
        text: String,
        pos: usize,
        record: usize,
    },
    /// Records supplied directly, mainly by tests
    Memory(std::vec::IntoIter<TermVector>),
}

impl ModelStream {
    /// Wrap a buffered container entry; `body_start` is the byte offset of
    /// the first record line (one past the header).
    pub(crate) fn from_entry_text(
        dictionary_size: usize,
        vector_dimension: usize,
        text: String,
        body_start: usize,
    ) -> Self {
        Self {
            dictionary_size,
            vector_dimension,
            records: RecordSource::Entry {
                text,
                pos: body_start,
                record: 0,
            },
        }
    }

    /// Build a stream over an in-memory record list
    pub fn from_records(
        dictionary_size: usize,
        vector_dimension: usize,
        records: Vec<TermVector>,
    ) -> Self {
        Self {
            dictionary_size,
            vector_dimension,
            records: RecordSource::Memory(records.into_iter()),
        }
    }

    /// Number of records the model declares
    pub fn dictionary_size(&self) -> usize {
        self.dictionary_size
    }

    /// Vector length the model declares for every record
    pub fn vector_dimension(&self) -> usize {
        self.vector_dimension
    }
}

impl Iterator for ModelStream {
    type Item = Result<TermVector>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.records {
            RecordSource::Memory(records) => records.next().map(Ok),
            RecordSource::Entry { text, pos, record } => {
                if *pos >= text.len() {
                    return None;
                }
                let rest = &text[*pos..];
                let line = match rest.find('\n') {
                    Some(newline) => {
                        *pos += newline + 1;
                        &rest[..newline]
                    }
                    None => {
                        *pos = text.len();
                        rest
                    }
                };
                // A trailing newline leaves no final record to parse
                let line = line.trim_end_matches('\r');
                if line.is_empty() && *pos >= text.len() {
                    return None;
                }

                let parsed = reader::parse_record(line, *record);
                *record += 1;
                Some(parsed)
            }
        }
    }
}
