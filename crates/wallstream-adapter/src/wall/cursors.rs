/*
[INPUT]:  Paging descriptors from feed responses
[OUTPUT]: Cursor state for forward/backward navigation
[POS]:    Wall layer - pagination state
[UPDATE]: When the paging descriptor or navigation contract changes
*/

use crate::types::{PageDirection, Paging};

/// Pagination state captured from the most recent successful fetch.
///
/// `previous`/`next` are fully-formed follow-up URLs from the feed's paging
/// descriptor; either may be absent at the corresponding end of the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCursors {
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl PageCursors {
    pub(crate) fn from_paging(paging: Option<&Paging>) -> Self {
        match paging {
            Some(paging) => Self {
                previous: paging.previous.clone(),
                next: paging.next.clone(),
            },
            None => Self::default(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Follow-up URL for the given direction, if the feed offered one
    pub fn url_for(&self, direction: PageDirection) -> Option<&str> {
        match direction {
            PageDirection::Next => self.next.as_deref(),
            PageDirection::Previous => self.previous.as_deref(),
        }
    }
}
