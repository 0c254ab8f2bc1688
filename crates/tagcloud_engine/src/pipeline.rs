use std::fs;
use std::io;
use std::path::PathBuf;

use engine_logging::{engine_debug, engine_info};
use tagcloud_core::{select_top_words, SeparatorSet, WordCounter, WordLimit};
use thiserror::Error;

use crate::decode::decode_text;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::render::render_tag_cloud_page;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCloudRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub limit: WordLimit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCloudSummary {
    pub distinct_words: usize,
    pub selected: usize,
    pub encoding_label: String,
    pub output_path: PathBuf,
}

#[derive(Debug, Error)]
pub enum TagCloudError {
    #[error("File not read - {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("File cannot be written - {0}")]
    OutputWrite(#[from] PersistError),
}

/// Reads the input file, counts its words and writes the tag cloud page.
///
/// The input is fully read and released before anything is written. On
/// failure the output path is left as it was.
pub fn generate_tag_cloud(request: &TagCloudRequest) -> Result<TagCloudSummary, TagCloudError> {
    let bytes = fs::read(&request.input_path).map_err(|source| TagCloudError::InputRead {
        path: request.input_path.clone(),
        source,
    })?;
    engine_debug!("Read {} bytes from {:?}", bytes.len(), request.input_path);

    let decoded = decode_text(&bytes);
    let mut counter = WordCounter::new(SeparatorSet::default());
    counter.add_text(&decoded.text);
    let counts = counter.into_counts();
    engine_debug!("Counted {} distinct words", counts.len());

    let selected = select_top_words(&counts, request.limit);
    let input_label = request.input_path.to_string_lossy();
    let page = render_tag_cloud_page(&input_label, request.limit, &selected);

    let output_path = AtomicFileWriter::new().write(&request.output_path, &page)?;
    engine_info!(
        "Wrote tag cloud of {} words (limit {}) to {:?}",
        selected.len(),
        request.limit,
        output_path
    );

    Ok(TagCloudSummary {
        distinct_words: counts.len(),
        selected: selected.len(),
        encoding_label: decoded.encoding_label,
        output_path,
    })
}
