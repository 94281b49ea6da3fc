use crate::document::Document;
use crate::stroke::{DraftPath, PathRef};

/// A change to the document produced by a tool.
///
/// Undo is snapshot based, so commands only ever run forwards.
#[derive(Debug, Clone)]
pub enum Command {
    /// Finalize a draft under a fresh id
    CommitPath(DraftPath),
    /// Swap in a whole new path list, e.g. after an eraser pass
    ReplaceAll(Vec<PathRef>),
    /// Remove every path
    Clear,
}

impl Command {
    pub fn execute(self, document: &mut Document) {
        match self {
            Command::CommitPath(draft) => {
                document.commit_draft(draft);
            }
            Command::ReplaceAll(paths) => document.replace_all(paths),
            Command::Clear => document.clear(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::CommitPath(_) => "CommitPath",
            Command::ReplaceAll(_) => "ReplaceAll",
            Command::Clear => "Clear",
        }
    }
}
