use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use serde::Serialize;

use super::reader;
use crate::{IndexConfig, LongestPrefixMatch, StructureKind};

pub struct BenchmarkConfig {
    pub window_size: usize,
    pub max_windows: usize,
    pub queries: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildMeasurement {
    pub structure: StructureKind,
    pub file: String,
    pub window_start: usize,
    pub window_len: usize,
    pub seconds: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchMeasurement {
    pub structure: StructureKind,
    pub file: String,
    pub window_start: usize,
    pub query_len: usize,
    pub match_len: usize,
    pub seconds: f64,
}

#[derive(Debug, Default, Serialize)]
pub struct BenchmarkReport {
    pub builds: Vec<BuildMeasurement>,
    pub searches: Vec<SearchMeasurement>,
}

/// Builds all structures on the first windows of every file and times every query against them.
///
/// Windows are processed one after the other so that the measured times are not distorted by other threads.
pub fn run(files: &[PathBuf], config: &BenchmarkConfig) -> Result<BenchmarkReport> {
    ensure!(config.window_size > 0, "The window size must be positive");

    let mut report = BenchmarkReport::default();
    let index_config = IndexConfig::default();

    for path in files {
        let record = reader::first_record(path)?;
        let file = file_name(path);

        for (window_index, window) in record
            .seq
            .chunks(config.window_size)
            .take(config.max_windows)
            .enumerate()
        {
            let window_start = window_index * config.window_size;

            for structure in StructureKind::ALL {
                let start = Instant::now();
                let index = index_config.construct(structure, window);
                let build_time = start.elapsed();

                log::debug!(
                    "{file}: built {structure} for window at {window_start} in {build_time:?}"
                );

                report.builds.push(BuildMeasurement {
                    structure,
                    file: file.clone(),
                    window_start,
                    window_len: window.len(),
                    seconds: build_time.as_secs_f64(),
                });

                for query in &config.queries {
                    let start = Instant::now();
                    let match_len = index.longest_prefix_match(query);
                    let search_time = start.elapsed();

                    report.searches.push(SearchMeasurement {
                        structure,
                        file: file.clone(),
                        window_start,
                        query_len: query.len(),
                        match_len,
                        seconds: search_time.as_secs_f64(),
                    });
                }
            }
        }
    }

    Ok(report)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl BenchmarkReport {
    /// Average build time per structure.
    pub fn average_build_times(&self) -> BTreeMap<StructureKind, Duration> {
        average(
            self.builds
                .iter()
                .map(|measurement| (measurement.structure, measurement.seconds)),
        )
    }

    /// Average search time per structure and query length.
    pub fn average_search_times(&self) -> BTreeMap<(StructureKind, usize), Duration> {
        average(self.searches.iter().map(|measurement| {
            (
                (measurement.structure, measurement.query_len),
                measurement.seconds,
            )
        }))
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();

        writeln!(summary, "{:<12} {:>12}", "structure", "avg build").unwrap();
        for (structure, time) in self.average_build_times() {
            writeln!(summary, "{:<12} {:>12.3?}", structure, time).unwrap();
        }

        writeln!(summary).unwrap();

        writeln!(
            summary,
            "{:<12} {:>10} {:>12}",
            "structure", "query len", "avg search"
        )
        .unwrap();
        for ((structure, query_len), time) in self.average_search_times() {
            writeln!(summary, "{:<12} {:>10} {:>12.3?}", structure, query_len, time).unwrap();
        }

        summary
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create report file {}", path.display()))?;

        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .with_context(|| format!("Failed to write report file {}", path.display()))
    }
}

fn average<K: Ord>(values: impl Iterator<Item = (K, f64)>) -> BTreeMap<K, Duration> {
    let mut sums: BTreeMap<K, (f64, usize)> = BTreeMap::new();

    for (key, seconds) in values {
        let (sum, count) = sums.entry(key).or_default();
        *sum += seconds;
        *count += 1;
    }

    sums.into_iter()
        .map(|(key, (sum, count))| (key, Duration::from_secs_f64(sum / count as f64)))
        .collect()
}
