//! Token-driven pagination.

use std::future::Future;

use futures::Stream;
use futures::stream;

/// An operation input that accepts a continuation token.
pub trait PaginatedInput: Clone {
    /// The token currently set on the input.
    fn next_token(&self) -> Option<&str>;
    /// Replace the continuation token.
    fn set_next_token(&mut self, token: Option<String>);
    /// Replace the page size.
    fn set_page_size(&mut self, page_size: i32);
}

/// An operation output that may carry a continuation token.
pub trait PaginatedOutput {
    /// The token for the next page, if any.
    fn next_token(&self) -> Option<&str>;
}

/// Stream every page of a paginated operation.
///
/// `fetch` is called with the input for each page. The stream stops after a
/// page without a token, after a page whose token equals the one just sent,
/// or after the first error (which is yielded).
pub fn paginate<I, O, E, F, Fut>(input: I, fetch: F) -> impl Stream<Item = Result<O, E>>
where
    I: PaginatedInput,
    O: PaginatedOutput,
    F: FnMut(I) -> Fut,
    Fut: Future<Output = Result<O, E>>,
{
    stream::unfold(Some((input, fetch)), |state| async move {
        let (input, mut fetch) = state?;
        let sent = input.next_token().map(ToOwned::to_owned);
        match fetch(input.clone()).await {
            Ok(output) => {
                let next = output
                    .next_token()
                    .filter(|token| !token.is_empty() && Some(*token) != sent.as_deref())
                    .map(ToOwned::to_owned)
                    .map(|token| {
                        let mut input = input;
                        input.set_next_token(Some(token));
                        (input, fetch)
                    });
                Some((Ok(output), next))
            }
            Err(err) => Some((Err(err), None)),
        }
    })
}
