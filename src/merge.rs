use crate::mapper::{MappingDump, TranslateError, VertexIndexMapper};
use crate::records::{TrackRecord, VertexRecord};
use serde::Serialize;
use thiserror::Error;

/// Names the upstream streams the driver pulls from. This is the whole
/// configuration surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    pub vertex_source: String,
    pub track_source: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            vertex_source: "mix".into(),
            track_source: "mix".into(),
        }
    }
}

/// The upstream mixing provider for one processing unit.
///
/// Streams are fully materialized and ordered by the provider; that order is
/// what determines global index assignment. `None` means the stream is not
/// available for this unit.
pub trait MixedEventSource {
    fn vertex_stream(&self, tag: &str) -> Option<Vec<VertexRecord>>;
    fn track_stream(&self, tag: &str) -> Option<Vec<TrackRecord>>;
}

/// Error raised while merging one processing unit. All variants are fatal for
/// the unit: no partial output is kept and nothing is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[error("input stream {tag:?} is unavailable for this processing unit")]
    UnavailableInput { tag: String },
    #[error(transparent)]
    Translate(#[from] TranslateError),
}

/// Size accounting for one merged unit, split into the in-time signal event
/// and out-of-time pileup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MergeStats {
    pub vertices_total: usize,
    pub vertices_signal: usize,
    pub vertices_pileup: usize,
    pub tracks_total: usize,
    pub tracks_signal: usize,
    pub tracks_pileup: usize,
    pub partitions: usize,
}

/// The two flat output collections for one processing unit.
///
/// A vertex's position in `vertices` is its global index, and every track in
/// `tracks` references its parent vertex by that global index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedEvent {
    pub vertices: Vec<VertexRecord>,
    pub tracks: Vec<TrackRecord>,
    pub stats: MergeStats,
    pub mapping: MappingDump,
}

/// Runs the two-phase merge: register every vertex, then rewrite every track
/// reference against the sealed index table.
#[derive(Debug, Clone, Default)]
pub struct MergeDriver {
    config: MergeConfig,
}

impl MergeDriver {
    pub fn new(config: MergeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Merges one processing unit. Fails atomically: on any error no output
    /// is produced for the unit.
    pub fn merge_event(&self, source: &impl MixedEventSource) -> Result<MergedEvent, MergeError> {
        let mut stats = MergeStats::default();

        let input_vertices = source
            .vertex_stream(&self.config.vertex_source)
            .ok_or_else(|| MergeError::UnavailableInput {
                tag: self.config.vertex_source.clone(),
            })?;

        let mut mapper = VertexIndexMapper::new();
        let mut vertices = Vec::with_capacity(input_vertices.len());
        for vertex in input_vertices {
            let assigned = mapper.register_vertex(vertex.key);
            debug_assert_eq!(assigned.global_index as usize, vertices.len());
            if vertex.key.is_signal() {
                stats.vertices_signal += 1;
            } else {
                stats.vertices_pileup += 1;
            }
            vertices.push(vertex);
        }
        stats.vertices_total = vertices.len();

        let index_map = mapper.seal();
        stats.partitions = index_map.partition_count();
        let mapping = index_map.dump();

        let input_tracks = source
            .track_stream(&self.config.track_source)
            .ok_or_else(|| MergeError::UnavailableInput {
                tag: self.config.track_source.clone(),
            })?;

        let mut tracks = Vec::with_capacity(input_tracks.len());
        for mut track in input_tracks {
            if let Some(local_index) = track.vertex_ref {
                track.vertex_ref = Some(index_map.translate(track.key, local_index)?);
            }
            if track.key.is_signal() {
                stats.tracks_signal += 1;
            } else {
                stats.tracks_pileup += 1;
            }
            tracks.push(track);
        }
        stats.tracks_total = tracks.len();

        Ok(MergedEvent {
            vertices,
            tracks,
            stats,
            mapping,
        })
    }
}
