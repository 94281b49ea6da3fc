use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use crate::stroke::{FRAGMENT_ID_SEPARATOR, PathId};
use crate::util::time;

// Single counter for all eraser fragments
static NEXT_FRAGMENT_SEQ: AtomicUsize = AtomicUsize::new(1);

/// Fresh id for a newly committed path
pub fn generate_path_id() -> PathId {
    PathId::new(Uuid::new_v4().to_string())
}

/// Id for a fragment split off `parent` by the eraser.
///
/// Built from the parent's root id, so repeated splits never lengthen it.
/// The timestamp and sequence number keep ids distinct even when the same
/// parent is split repeatedly within one millisecond.
pub fn derive_fragment_id(parent: &PathId, tag: &str) -> PathId {
    let seq = NEXT_FRAGMENT_SEQ.fetch_add(1, Ordering::Relaxed);
    PathId::new(format!(
        "{root}{sep}{tag}{sep}{millis}{sep}{seq}",
        root = parent.root(),
        sep = FRAGMENT_ID_SEPARATOR,
        millis = time::timestamp_millis()
    ))
}
