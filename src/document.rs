use crate::history::Snapshot;
use crate::id_generator;
use crate::stroke::{DraftPath, PathRef};

/// The ordered list of committed paths. Later paths draw on top.
///
/// Paths are never edited in place; every change swaps whole values.
#[derive(Debug, Default, Clone)]
pub struct Document {
    paths: Vec<PathRef>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, path: PathRef) {
        self.paths.push(path);
    }

    /// Finalizes a draft under a fresh id and appends it.
    ///
    /// Drafts that never grew past their first point are rejected.
    pub fn commit_draft(&mut self, draft: DraftPath) -> Option<PathRef> {
        if !draft.is_committable() {
            log::debug!("Discarding {:?} draft with a single point", draft.kind());
            return None;
        }

        let path = PathRef::new(draft.finish(id_generator::generate_path_id()));
        log::debug!(
            "Committed {:?} path {} ({} points)",
            path.kind(),
            path.id(),
            path.points().len()
        );
        self.paths.push(path.clone());
        Some(path)
    }

    pub fn replace_all(&mut self, paths: Vec<PathRef>) {
        self.paths = paths;
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn paths(&self) -> &[PathRef] {
        &self.paths
    }

    pub fn snapshot(&self) -> Snapshot {
        self.paths.clone()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
