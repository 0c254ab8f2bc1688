//! Tag cloud engine: file IO, HTML rendering and the run pipeline.
mod decode;
mod persist;
mod pipeline;
mod render;

pub use decode::{decode_text, DecodedText};
pub use persist::{check_output_dir, AtomicFileWriter, PersistError};
pub use pipeline::{generate_tag_cloud, TagCloudError, TagCloudRequest, TagCloudSummary};
pub use render::{
    render_tag_cloud_page, write_cloud, write_footer, write_header, write_tag_cloud_page,
};
