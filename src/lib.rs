//! Flattens pileup-mixed vertex and track collections into single globally
//! indexed collections, rewriting each track's partition-local parent-vertex
//! reference to the matching global index.

pub mod event_key;
pub mod mapper;
pub mod merge;
pub mod records;

pub use event_key::EventKey;
pub use mapper::{
    MappingDump, MappingEntry, PartitionMapping, RegisteredVertex, TranslateError, VertexIndexMap,
    VertexIndexMapper,
};
pub use merge::{MergeConfig, MergeDriver, MergeError, MergeStats, MergedEvent, MixedEventSource};
pub use records::{TrackRecord, VertexRecord};
