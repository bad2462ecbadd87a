//! Archive assembly: named PDF buffers into one zip byte stream.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{ExportError, ExportResult};

/// Pack `(filename, bytes)` pairs into a zip archive, preserving the input
/// order as the member order. The output is a plain deflate-compressed zip
/// extractable by standard tooling.
pub fn build_archive(members: Vec<(String, Vec<u8>)>) -> ExportResult<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, bytes) in &members {
        writer
            .start_file(name.as_str(), options)
            .map_err(|e| ExportError::Packaging(format!("failed to add member {name:?}: {e}")))?;
        writer
            .write_all(bytes)
            .map_err(|e| ExportError::Packaging(format!("failed to write member {name:?}: {e}")))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| ExportError::Packaging(format!("failed to finalize archive: {e}")))?;
    Ok(cursor.into_inner())
}
