use crate::event_key::EventKey;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Indices assigned to one vertex at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisteredVertex {
    /// Position of the vertex within its own partition, in arrival order.
    pub local_index: u64,
    /// Position of the vertex in the flat output collection.
    pub global_index: u64,
}

/// Error raised while translating a partition-local vertex reference.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("no vertices were registered for {key}")]
    UnknownPartition { key: EventKey },
    #[error("{key} holds {registered} vertices but local index {local_index} was requested")]
    UnknownLocalIndex {
        key: EventKey,
        local_index: u64,
        registered: u64,
    },
}

/// Accumulates the local→global vertex index table for one processing unit.
///
/// Registration and translation are separate phases: once every vertex is in,
/// `seal` converts the mapper into a [`VertexIndexMap`], the only type that
/// can translate. Translating before registration has finished is therefore
/// not expressible.
#[derive(Debug, Default)]
pub struct VertexIndexMapper {
    next_global: u64,
    table: HashMap<EventKey, Vec<u64>>,
}

impl VertexIndexMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the vertex the next local index within its partition and the
    /// next global index across all partitions, both in arrival order.
    /// Always succeeds.
    pub fn register_vertex(&mut self, key: EventKey) -> RegisteredVertex {
        let locals = self.table.entry(key).or_default();
        let local_index = locals.len() as u64;
        let global_index = self.next_global;
        locals.push(global_index);
        self.next_global += 1;
        RegisteredVertex {
            local_index,
            global_index,
        }
    }

    /// Number of vertices registered so far, across all partitions.
    pub fn global_count(&self) -> u64 {
        self.next_global
    }

    /// Ends the registration phase and makes the table translatable.
    pub fn seal(self) -> VertexIndexMap {
        VertexIndexMap {
            global_count: self.next_global,
            table: self.table,
        }
    }
}

/// The sealed local→global table produced by [`VertexIndexMapper::seal`].
#[derive(Debug)]
pub struct VertexIndexMap {
    global_count: u64,
    table: HashMap<EventKey, Vec<u64>>,
}

impl VertexIndexMap {
    /// Resolves a partition-local vertex index to its global index.
    pub fn translate(&self, key: EventKey, local_index: u64) -> Result<u64, TranslateError> {
        let locals = self
            .table
            .get(&key)
            .ok_or(TranslateError::UnknownPartition { key })?;
        locals
            .get(local_index as usize)
            .copied()
            .ok_or(TranslateError::UnknownLocalIndex {
                key,
                local_index,
                registered: locals.len() as u64,
            })
    }

    /// Total number of registered vertices.
    pub fn global_count(&self) -> u64 {
        self.global_count
    }

    /// Number of partitions that registered at least one vertex.
    pub fn partition_count(&self) -> usize {
        self.table.len()
    }

    /// Snapshot of the full mapping table for external logging. Partitions
    /// are ordered by key and entries by local index, so the serialized form
    /// is stable for a given registration sequence.
    pub fn dump(&self) -> MappingDump {
        let mut partitions: Vec<_> = self
            .table
            .iter()
            .map(|(key, locals)| PartitionMapping {
                key: *key,
                entries: locals
                    .iter()
                    .enumerate()
                    .map(|(local_index, global_index)| MappingEntry {
                        local_index: local_index as u64,
                        global_index: *global_index,
                    })
                    .collect(),
            })
            .collect();
        partitions.sort_by_key(|partition| partition.key);
        MappingDump { partitions }
    }
}

/// Serializable view of the whole mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingDump {
    pub partitions: Vec<PartitionMapping>,
}

/// One partition's local→global rows, ordered by local index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionMapping {
    pub key: EventKey,
    pub entries: Vec<MappingEntry>,
}

/// A single local→global association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    pub local_index: u64,
    pub global_index: u64,
}
