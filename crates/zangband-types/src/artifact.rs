use serde::Serialize;

use crate::object::GenFlags;
use crate::{ArtifactId, Depth, KindId};

/// A fixed artifact definition (`artifact_type`, one `a_info` entry).
#[derive(Debug, Clone, Default, Serialize)]
pub struct Artifact {
    pub idx: ArtifactId,
    pub name: String,
    /// Base kind the artifact is built on.
    pub k_idx: KindId,
    pub level: Depth,
    pub cost: i32,
    /// Non-zero once the artifact has been created.
    pub cur_num: i16,
    pub gen_flags: GenFlags,
}

/// The artifact table (`a_info`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArtifactList {
    artifacts: Vec<Artifact>,
}

impl ArtifactList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut artifact: Artifact) -> ArtifactId {
        let idx = self.artifacts.len() as ArtifactId;
        artifact.idx = idx;
        self.artifacts.push(artifact);
        idx
    }

    pub fn get(&self, idx: ArtifactId) -> Option<&Artifact> {
        self.artifacts.get(idx as usize)
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn resize(&mut self, new_len: usize) {
        self.artifacts.resize_with(new_len, Artifact::default);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter()
    }
}

impl std::ops::Index<ArtifactId> for ArtifactList {
    type Output = Artifact;

    fn index(&self, idx: ArtifactId) -> &Artifact {
        &self.artifacts[idx as usize]
    }
}

impl std::ops::IndexMut<ArtifactId> for ArtifactList {
    fn index_mut(&mut self, idx: ArtifactId) -> &mut Artifact {
        &mut self.artifacts[idx as usize]
    }
}
