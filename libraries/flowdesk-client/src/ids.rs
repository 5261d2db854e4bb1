//! Placeholder ids for records created against a non-persisting directory.

use chrono::Utc;
use flowdesk_core::UserId;
use std::sync::atomic::{AtomicI64, Ordering};

/// Hands out timestamp-derived ids (milliseconds since the epoch).
///
/// Ids are strictly increasing per generator, so two creates landing in the
/// same millisecond still get distinct ids. They are not stable across
/// processes and mean nothing to other clients.
#[derive(Debug, Default)]
pub(crate) struct SyntheticIds {
    last: AtomicI64,
}

impl SyntheticIds {
    pub(crate) fn next(&self) -> UserId {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        UserId::new(now.max(previous + 1))
    }
}
