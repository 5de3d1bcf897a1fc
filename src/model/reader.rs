//! Zip container parsing for dl4j-style word2vec models
//!
//! The model entry is UTF-8 text. Line 1 is the header,
//! `<dictionarySize> <vectorDimension>`; every following line is one record,
//! `<term> <v1> <v2> ... <vDim>`, whitespace-separated.

use std::io::{Read, Seek};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::stream::ModelStream;
use crate::types::TermVector;

/// Name prefix of the archive entry holding the model vectors
pub const MODEL_ENTRY_PREFIX: &str = "syn0";

/// Case-insensitive marker prefixed to base64-encoded terms
const B64_MARKER: &str = "B64:";

/// Read a word2vec model out of a zip container.
///
/// `container` names the archive in error messages; the bytes come from
/// `source`. The first entry whose name starts with [`MODEL_ENTRY_PREFIX`]
/// is decoded; if none exists the read fails with
/// [`Error::ModelNotFound`].
///
/// The entry is buffered out of the archive before this function returns,
/// so the source is released on every path; the returned [`ModelStream`]
/// exposes the declared dictionary size and vector dimension up front and
/// parses records lazily, in file order, exactly once.
pub fn read_model<R: Read + Seek>(container: &str, source: R) -> Result<ModelStream> {
    let mut archive = zip::ZipArchive::new(source)?;

    let entry_name = archive
        .file_names()
        .find(|name| name.starts_with(MODEL_ENTRY_PREFIX))
        .map(str::to_owned)
        .ok_or_else(|| Error::ModelNotFound {
            container: container.to_string(),
            prefix: MODEL_ENTRY_PREFIX,
        })?;

    let mut text = String::new();
    archive.by_name(&entry_name)?.read_to_string(&mut text)?;
    debug!(container, entry = %entry_name, bytes = text.len(), "read model entry");

    from_entry_text(text)
}

/// Parse the header line and wrap the remaining text as a record stream.
fn from_entry_text(text: String) -> Result<ModelStream> {
    let header = text
        .lines()
        .next()
        .ok_or_else(|| corrupted("model entry is empty"))?;

    let mut fields = header.split_whitespace();
    let dictionary_size = parse_header_field(fields.next(), "dictionary size")?;
    let vector_dimension = parse_header_field(fields.next(), "vector dimension")?;

    // Records start on the line after the header
    let body_start = text
        .find('\n')
        .map(|newline| newline + 1)
        .unwrap_or(text.len());

    Ok(ModelStream::from_entry_text(
        dictionary_size,
        vector_dimension,
        text,
        body_start,
    ))
}

fn parse_header_field(field: Option<&str>, what: &str) -> Result<usize> {
    field
        .and_then(|raw| raw.parse::<usize>().ok())
        .ok_or_else(|| corrupted(format!("header does not declare a valid {what}")))
}

/// Parse one record line into a term and its vector components.
pub(crate) fn parse_record(line: &str, record: usize) -> Result<TermVector> {
    let mut fields = line.split_whitespace();
    let raw_term = fields
        .next()
        .ok_or_else(|| corrupted(format!("record {record} is blank")))?;
    let term = decode_term(raw_term)?;

    let vector = fields
        .map(|component| {
            component.parse::<f32>().map_err(|_| {
                corrupted(format!(
                    "record {record} has invalid vector component '{component}'"
                ))
            })
        })
        .collect::<Result<Vec<f32>>>()?;

    Ok(TermVector::new(term, vector))
}

/// Decode a term field from the model file.
///
/// A term starting with the case-insensitive `B64:` marker has the marker
/// stripped and the remainder base64-decoded back to its original text; any
/// other term is returned verbatim.
pub fn decode_term(raw: &str) -> Result<String> {
    match raw.get(..B64_MARKER.len()) {
        Some(marker) if marker.eq_ignore_ascii_case(B64_MARKER) => {
            let encoded = raw[B64_MARKER.len()..].trim();
            let bytes = BASE64
                .decode(encoded)
                .map_err(|cause| corrupted(format!("undecodable term '{raw}': {cause}")))?;
            String::from_utf8(bytes)
                .map_err(|_| corrupted(format!("term '{raw}' does not decode to UTF-8 text")))
        }
        _ => Ok(raw.to_string()),
    }
}

fn corrupted(reason: impl Into<String>) -> Error {
    Error::CorruptedModel {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use zip::write::FileOptions;

    use super::*;

    /// Build an in-memory zip container with a single named entry
    fn make_container(entry_name: &str, content: &str) -> Cursor<Vec<u8>> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file(entry_name, FileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
        writer.finish().unwrap()
    }

    #[test]
    fn test_read_model_exposes_header_before_records() {
        let container = make_container(
            "syn0_vectors.txt",
            "2 3\nhello 0.1 0.2 0.3\nworld 0.4 0.5 0.6\n",
        );

        let stream = read_model("model.zip", container).unwrap();
        assert_eq!(stream.dictionary_size(), 2);
        assert_eq!(stream.vector_dimension(), 3);

        let records: Vec<TermVector> = stream.map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].term, "hello");
        assert_eq!(records[0].vector, vec![0.1, 0.2, 0.3]);
        assert_eq!(records[1].term, "world");
    }

    #[test]
    fn test_read_model_decodes_b64_terms() {
        // "aXQ=" is the standard-alphabet encoding of "it"
        let container = make_container("syn0", "1 2\nB64:aXQ= 1.0 2.0\n");

        let stream = read_model("model.zip", container).unwrap();
        let first = stream.into_iter().next().unwrap().unwrap();
        assert_eq!(first.term, "it");
    }

    #[test]
    fn test_read_model_without_model_entry() {
        let container = make_container("readme.txt", "not a model");

        let err = read_model("word2vec-model.zip", container).unwrap_err();
        match &err {
            Error::ModelNotFound { container, prefix } => {
                assert_eq!(container, "word2vec-model.zip");
                assert_eq!(*prefix, MODEL_ENTRY_PREFIX);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("word2vec-model.zip"));
    }

    #[test]
    fn test_read_model_rejects_malformed_header() {
        let container = make_container("syn0", "two 3\na 0.1 0.2 0.3\n");

        let err = read_model("model.zip", container).unwrap_err();
        assert!(err.to_string().contains("dictionary size"));
    }

    #[test]
    fn test_record_with_invalid_component_is_reported_by_index() {
        let container = make_container("syn0", "2 2\na 1.0 2.0\nb 1.0 x\n");

        let stream = read_model("model.zip", container).unwrap();
        let results: Vec<_> = stream.collect();
        assert!(results[0].is_ok());
        let err = results[1].as_ref().unwrap_err();
        assert!(err.to_string().contains("record 1"));
    }

    #[test]
    fn test_decode_term_round_trip() {
        let encoded = format!("B64:{}", BASE64.encode("retrieval"));
        assert_eq!(decode_term(&encoded).unwrap(), "retrieval");
    }

    #[test]
    fn test_decode_term_marker_is_case_insensitive() {
        let encoded = format!("b64:{}", BASE64.encode("search"));
        assert_eq!(decode_term(&encoded).unwrap(), "search");
    }

    #[test]
    fn test_decode_term_without_marker_is_verbatim() {
        assert_eq!(decode_term("plain").unwrap(), "plain");
        // Shorter than the marker itself
        assert_eq!(decode_term("ab").unwrap(), "ab");
    }

    #[test]
    fn test_decode_term_rejects_bad_base64() {
        assert!(decode_term("B64:!!!").is_err());
    }
}
