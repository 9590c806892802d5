pub mod request;

use tokio_util::sync::CancellationToken;

use crate::client::Client;
use crate::error::{BoxError, Error};
use crate::types::ListingResponse;

pub use self::request::{ListRequest, PageState};

/// Service for the paginated listing API.
///
/// Access via `client.listing()`. Drives one sequential fetch stream per
/// `ListRequest`: one page in flight at a time, the next page number only
/// known after `ListRequest::advance`.
pub struct ListingService<'a> {
    pub(crate) client: &'a Client,
}

impl<'a> ListingService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch the page the request currently points at.
    ///
    /// Exactly one round trip; no pagination bookkeeping is touched. Only
    /// the request's visible fields (target, page number) are sent.
    pub async fn fetch_page(
        &self,
        req: &ListRequest,
        cancel: &CancellationToken,
    ) -> Result<ListingResponse, Error> {
        self.client.post_json(req, cancel).await
    }

    /// Fetch the current page and hand the decoded envelope to `on_page`.
    ///
    /// The handler is invoked exactly once per call, and only with a fully
    /// decoded envelope; transport and decode failures propagate without
    /// reaching it. The handler's verdict controls the walk and is returned
    /// to the caller:
    ///
    /// - `Ok(true)`: keep walking. Pagination state is captured from the
    ///   first envelope that carries a result payload and never again.
    /// - `Ok(false)`: the handler is done with the whole walk (e.g. nothing
    ///   new on this page). Returns `Ok(false)` without capturing state.
    /// - `Err(e)`: propagated verbatim as [`Error::Handler`].
    ///
    /// Loop with [`ListRequest::advance`] to consume the stream:
    ///
    /// ```ignore
    /// loop {
    ///     if !service.get_json(&mut req, &cancel, |page| Ok(true)).await? {
    ///         break;
    ///     }
    ///     if req.advance().is_none() {
    ///         break;
    ///     }
    /// }
    /// ```
    pub async fn get_json<F>(
        &self,
        req: &mut ListRequest,
        cancel: &CancellationToken,
        mut on_page: F,
    ) -> Result<bool, Error>
    where
        F: FnMut(&ListingResponse) -> Result<bool, BoxError>,
    {
        let envelope = self.fetch_page(req, cancel).await?;

        let keep_going = on_page(&envelope).map_err(Error::Handler)?;
        if !keep_going {
            return Ok(false);
        }

        if let Some(result) = &envelope.result {
            req.capture(result);
        }

        Ok(true)
    }
}
