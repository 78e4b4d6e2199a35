//! Common test utilities for integration tests

use chess_fetch::models::FetchTarget;
use std::io::{Cursor, Write};
use std::path::Path;

/// Builds an in-memory ZIP archive with the given files and directory entries
#[allow(dead_code)]
pub fn zip_bytes(files: &[(&str, &str)], dirs: &[&str]) -> Vec<u8> {
    use zip::write::FileOptions;
    use zip::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for dir in dirs {
        zip.add_directory(*dir, options).unwrap();
    }
    for (name, content) in files {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Points a fetch target at `url` with archive and extraction paths under `root`
#[allow(dead_code)]
pub fn target_in(root: &Path, url: String) -> FetchTarget {
    FetchTarget {
        source_url: url,
        archive_path: root.join("chess.zip"),
        extract_dir: root.join("chess_unzipped"),
    }
}

/// Sample starter-code files for testing
#[allow(dead_code)]
pub const STARTER_FILES: &[(&str, &str)] = &[
    ("chess/ChessGame.java", "package chess;\n\npublic class ChessGame {}\n"),
    ("chess/ChessBoard.java", "package chess;\n\npublic class ChessBoard {}\n"),
];
