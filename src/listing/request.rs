use serde::Serialize;

use crate::types::envelope::ListingResult;
use crate::types::target::Target;

/// Server-reported pagination bookkeeping, captured once per walk.
///
/// Populated from the first envelope that carries a result payload and
/// never overwritten afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub current: u32,
    pub total: u64,
    pub pages: u32,
    pub size: u32,
}

impl From<&ListingResult> for PageState {
    fn from(result: &ListingResult) -> Self {
        Self {
            current: result.current,
            total: result.total,
            pages: result.pages,
            size: result.size,
        }
    }
}

/// Parameters and pagination bookkeeping for one listing walk.
///
/// Build via `ListRequest::builder()`:
/// ```ignore
/// let mut req = ListRequest::builder()
///     .target(Target::Anime)
///     .end_num(3)
///     .build();
/// ```
///
/// Only `target` and `pageNum` go over the wire; the end bound and the
/// captured page state are local bookkeeping. The request is owned by a
/// single caller for the duration of a walk and mutated in place as pages
/// are consumed.
#[derive(Debug, Clone, Serialize, bon::Builder)]
pub struct ListRequest {
    pub target: Target,
    /// Page the next fetch will ask for. Starts at 0 unless set.
    #[serde(rename = "pageNum")]
    #[builder(default)]
    pub page_num: u32,
    /// Last page to fetch. `None` means "walk to the server-reported last
    /// page", resolved once pagination state is known.
    #[serde(skip)]
    pub end_num: Option<u32>,
    #[serde(skip)]
    #[builder(skip)]
    state: Option<PageState>,
}

impl ListRequest {
    /// Server-reported pagination state, if a page has been captured yet.
    pub fn state(&self) -> Option<&PageState> {
        self.state.as_ref()
    }

    /// The page number the next fetch would use, without changing anything.
    ///
    /// `None` until the first successful page has been captured: before
    /// that there is no known last page, so the walk cannot advance. Once
    /// state is known, the effective end bound is `end_num` when the caller
    /// set one, otherwise the server-reported page count.
    pub fn peek_next_page(&self) -> Option<u32> {
        let state = self.state.as_ref()?;
        let end = self.end_num.unwrap_or(state.pages);
        if self.page_num < end && self.page_num < state.pages {
            Some(self.page_num + 1)
        } else {
            None
        }
    }

    /// Advance to the next page, returning its number.
    ///
    /// On the first successful advance after state capture this pins
    /// `end_num` to the server-reported page count when the caller set
    /// none. Returns `None` once the walk is exhausted: the current page
    /// has reached the end bound or the last server page.
    pub fn advance(&mut self) -> Option<u32> {
        let next = self.peek_next_page()?;
        if self.end_num.is_none() {
            self.end_num = self.state.as_ref().map(|s| s.pages);
        }
        self.page_num = next;
        Some(next)
    }

    /// Record server pagination metadata from the first page that carries
    /// it. Later pages never overwrite it.
    pub(crate) fn capture(&mut self, result: &ListingResult) {
        if self.state.is_none() {
            self.state = Some(PageState::from(result));
        }
    }
}
