use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// One record of a sequence file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    pub seq: Vec<u8>,
}

const SEQUENCE_FILE_EXTENSIONS: [&str; 5] = [".fa", ".fasta", ".fna", ".fq", ".fastq"];

/// Reads all records of a FASTA or FASTQ file. Gzip compressed files are decompressed transparently.
pub fn read_records(path: &Path) -> Result<Vec<SequenceRecord>> {
    let mut reader = needletail::parse_fastx_file(path)
        .with_context(|| format!("Failed to open sequence file {}", path.display()))?;

    let mut records = Vec::new();

    while let Some(record) = reader.next() {
        let record =
            record.with_context(|| format!("Failed to parse sequence file {}", path.display()))?;

        records.push(SequenceRecord {
            id: String::from_utf8_lossy(record.id()).into_owned(),
            seq: record.seq().into_owned(),
        });
    }

    Ok(records)
}

/// Reads the first record of a FASTA or FASTQ file.
pub fn first_record(path: &Path) -> Result<SequenceRecord> {
    let Some(record) = read_records(path)?.into_iter().next() else {
        bail!("Sequence file {} contains no records", path.display());
    };

    log::info!(
        "read record {} of length {} from {}",
        record.id,
        record.seq.len(),
        path.display()
    );

    Ok(record)
}

/// Lists the sequence files in `dir` in name order, skipping files whose name contains one of `exclude`.
pub fn sequence_files(dir: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    let entries = dir
        .read_dir()
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();

    for entry in entries {
        let path = entry?.path();

        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };

        if !path.is_file() || !is_sequence_file_name(name) {
            continue;
        }

        if exclude.iter().any(|pattern| name.contains(pattern.as_str())) {
            log::info!("skipping excluded file {name}");
            continue;
        }

        files.push(path);
    }

    files.sort();

    Ok(files)
}

fn is_sequence_file_name(name: &str) -> bool {
    let name = name.strip_suffix(".gz").unwrap_or(name);

    SEQUENCE_FILE_EXTENSIONS
        .iter()
        .any(|extension| name.ends_with(extension))
}
