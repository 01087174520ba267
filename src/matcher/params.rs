use crate::types::{CapturedParam, RouteParams};
use smallvec::SmallVec;

pub(crate) type CaptureList = SmallVec<[CapturedParam; 4]>;

pub(crate) fn captures_to_map(captures: CaptureList) -> RouteParams {
    let mut map = RouteParams::with_capacity(captures.len());
    for (name, value) in captures {
        map.insert(name, value);
    }
    map
}
