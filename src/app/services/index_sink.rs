//! Index sink for normalized documents.
//!
//! The sink is the external collaborator that persists documents for
//! search. The core is oblivious to its storage beyond the field names of
//! [`NormalizedResult`]; the shipped implementation writes OpenSearch
//! `_bulk` NDJSON so indexing a run's output is a single API call. The
//! published index mapping lives here as well.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::json;
use tracing::debug;

use crate::app::models::NormalizedResult;
use crate::{Error, Result};

/// Destination for normalized documents.
///
/// Document identifiers are assigned by the caller, monotonically
/// increasing from 1 and global across the whole run.
pub trait IndexSink {
    /// Persist one document under the given identifier
    fn index(&mut self, document_id: u64, document: &NormalizedResult) -> Result<()>;

    /// Flush any buffered output; must be called once at the end of a run
    fn finish(&mut self) -> Result<()>;
}

/// Sink writing OpenSearch `_bulk` NDJSON to a local file.
///
/// Each document becomes two lines: the bulk action (index name and
/// document id) and the document source.
pub struct BulkFileSink {
    writer: BufWriter<File>,
    index_name: String,
    documents_written: u64,
}

impl BulkFileSink {
    /// Create a bulk file sink writing to `path` for the given index
    pub fn create(path: &Path, index_name: impl Into<String>) -> Result<Self> {
        let file = File::create(path).map_err(|e| {
            Error::io(format!("failed to create bulk file '{}'", path.display()), e)
        })?;

        Ok(Self {
            writer: BufWriter::new(file),
            index_name: index_name.into(),
            documents_written: 0,
        })
    }

    /// Number of documents written so far
    pub fn documents_written(&self) -> u64 {
        self.documents_written
    }
}

impl IndexSink for BulkFileSink {
    fn index(&mut self, document_id: u64, document: &NormalizedResult) -> Result<()> {
        let action = json!({
            "index": { "_index": self.index_name, "_id": document_id }
        });

        serde_json::to_writer(&mut self.writer, &action)?;
        self.writer.write_all(b"\n")?;
        serde_json::to_writer(&mut self.writer, document)?;
        self.writer.write_all(b"\n")?;

        self.documents_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        debug!("Bulk sink flushed after {} documents", self.documents_written);
        Ok(())
    }
}

/// The published index mapping for normalized result documents.
///
/// Field types mirror [`NormalizedResult`]: scalar keywords and dates at
/// the top level, object mappings for `mark`, `pos` and `venue`.
pub fn index_mapping() -> serde_json::Value {
    json!({
        "settings": {
            "index": {
                "number_of_shards": 2,
                "number_of_replicas": 1,
                "refresh_interval": "1s"
            },
            "analysis": {
                "analyzer": {
                    "default": { "type": "standard" }
                }
            }
        },
        "mappings": {
            "properties": {
                "age_at_competition": { "type": "integer" },
                "competitor": {
                    "type": "text",
                    "fields": {
                        "keyword": { "type": "keyword", "ignore_above": 256 }
                    }
                },
                "date": {
                    "type": "date",
                    "format": "strict_date_optional_time||epoch_millis||yyyy-MM-dd"
                },
                "discipline": { "type": "keyword" },
                "dob": {
                    "type": "date",
                    "format": "strict_date_optional_time||epoch_millis||yyyy-MM-dd"
                },
                "gender": { "type": "keyword" },
                "mark": {
                    "type": "object",
                    "properties": {
                        "raw_value": { "type": "text" },
                        "display_value": { "type": "text" },
                        "numeric_value": { "type": "float" },
                        "unit": { "type": "keyword" },
                        "format_type": { "type": "keyword" }
                    }
                },
                "nat": { "type": "keyword" },
                "pos": {
                    "type": "object",
                    "properties": {
                        "raw_pos": { "type": "text" },
                        "numeric_pos": { "type": "integer" },
                        "group": { "type": "keyword" }
                    }
                },
                "world_rank": { "type": "integer" },
                "venue": {
                    "type": "object",
                    "properties": {
                        "venue_raw": { "type": "text" },
                        "city": {
                            "type": "keyword",
                            "fields": { "text": { "type": "text" } }
                        },
                        "country": {
                            "type": "keyword",
                            "fields": { "text": { "type": "text" } }
                        },
                        "stadium": { "type": "text" },
                        "extra": { "type": "text" }
                    }
                },
                "wind": { "type": "float" }
            }
        }
    })
}
