//! Cursor pagers over the paginated list operations.
//!
//! A [`Pager`] owns a copy of the list options and walks the `next.start`
//! cursor the service returns with every page. It starts out with more
//! results available, and stops as soon as a page arrives without a next
//! cursor.
//!
//! ```no_run
//! # async fn demo(client: &scc_client::Client) -> scc_client::Result<()> {
//! use scc_client::{rules, ListRulesOptions};
//!
//! let options = ListRulesOptions {
//!     limit: Some(50),
//!     ..Default::default()
//! };
//! let mut pager = rules::pager(client, options)?;
//! while pager.has_next() {
//!     for rule in pager.next_page().await? {
//!         println!("{:?}", rule.id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use scc_api_model::Page;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::client::RequestRunner;
use crate::{Error, Response, Result};

/// A list operation that accepts a `start` cursor and answers with a
/// [`Page`].
#[async_trait]
pub trait ListRequest: Clone + Send + Sync {
    type Page: Page + DeserializeOwned + Send;

    fn start(&self) -> Option<&str>;

    fn set_start(&mut self, start: Option<String>);

    async fn list<R>(&self, client: &R) -> Result<Response<Self::Page>>
    where
        R: RequestRunner;
}

/// Walks a paginated collection one page at a time.
///
/// The pager borrows the client and is driven through `&mut self`, so a
/// single pager is never advanced from two places at once. A failed
/// [`Pager::next_page`] leaves the pager untouched and can be retried.
pub struct Pager<'a, R, L> {
    client: &'a R,
    options: L,
    has_next: bool,
    total_count: Option<i64>,
}

impl<'a, R, L> Pager<'a, R, L>
where
    R: RequestRunner,
    L: ListRequest,
{
    /// Creates a pager over `options`. The options must not carry a `start`
    /// cursor; the pager manages it.
    pub fn new(client: &'a R, mut options: L) -> Result<Self> {
        if options.start().is_some_and(|start| !start.is_empty()) {
            return Err(Error::InvalidArgument(
                "the 'start' option must not be set when creating a pager"
                    .to_owned(),
            ));
        }
        options.set_start(None);
        Ok(Self {
            client,
            options,
            has_next: true,
            total_count: None,
        })
    }

    /// Whether another call to [`Pager::next_page`] may return results.
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// The cursor the next request will carry. `None` before the first page.
    pub fn cursor(&self) -> Option<&str> {
        self.options.start()
    }

    pub fn options(&self) -> &L {
        &self.options
    }

    /// The collection size reported with the most recent page, if the
    /// service sent one.
    pub fn total_count(&self) -> Option<i64> {
        self.total_count
    }

    /// Fetches the next page.
    ///
    /// Returns [`Error::NoMoreResults`] without issuing a request once the
    /// collection is exhausted. The last page may be empty.
    pub async fn next_page(&mut self) -> Result<Vec<<L::Page as Page>::Item>> {
        if !self.has_next {
            return Err(Error::NoMoreResults);
        }

        debug!(cursor = ?self.options.start(), "Fetching next page");
        let page = self.options.list(self.client).await?.into_inner()?;

        self.total_count = page.meta().total_count.or(self.total_count);
        self.advance(page.next_start().map(ToOwned::to_owned));
        Ok(page.into_items())
    }

    /// Drains the remaining pages and concatenates their items in order.
    ///
    /// On failure the items gathered so far are discarded, but the pager
    /// keeps its position. Calling [`Pager::all`] again resumes from the
    /// page that failed.
    pub async fn all(&mut self) -> Result<Vec<<L::Page as Page>::Item>> {
        let mut items = Vec::new();
        let mut pages = 0usize;
        while self.has_next() {
            items.extend(self.next_page().await?);
            pages += 1;
        }
        info!("Fetched {} items in {} pages", items.len(), pages);
        Ok(items)
    }

    fn advance(&mut self, next: Option<String>) {
        self.has_next = next.is_some();
        self.options.set_start(next);
    }
}

/// Implements [`ListRequest`] for an options struct with a `start` field by
/// delegating to the module's `list` function.
macro_rules! list_request {
    ($options:ty, $page:ty, $list:path) => {
        #[async_trait::async_trait]
        impl $crate::pager::ListRequest for $options {
            type Page = $page;

            fn start(&self) -> Option<&str> {
                self.start.as_deref()
            }

            fn set_start(&mut self, start: Option<String>) {
                self.start = start;
            }

            async fn list<R>(
                &self,
                client: &R,
            ) -> $crate::Result<$crate::Response<Self::Page>>
            where
                R: $crate::client::RequestRunner,
            {
                $list(client, self).await
            }
        }
    };
}

pub(crate) use list_request;

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use http::Method;
    use scc_api_model::{PageMeta, PageRef};
    use serde::{Deserialize, Serialize};
    use url::Url;

    use super::*;

    // A runner that never touches the network; `list` below answers from a
    // script instead.
    struct NoNetwork;

    #[async_trait]
    impl RequestRunner for NoNetwork {
        fn make_url(&self, path: &str) -> Result<Url> {
            Ok(Url::parse("http://localhost/")?.join(path)?)
        }

        fn instance_id(&self) -> &str {
            "inst-1"
        }

        fn prepare_request(
            &self,
            _method: Method,
            _url: Url,
        ) -> Result<reqwest::RequestBuilder> {
            unreachable!("scripted pages do not build requests")
        }

        async fn process_response<T>(
            &self,
            _response: reqwest::Response,
        ) -> Result<Response<T>>
        where
            T: DeserializeOwned + Send,
        {
            unreachable!("scripted pages do not receive responses")
        }
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct NumberPage {
        #[serde(flatten)]
        meta: PageMeta,
        numbers: Vec<u32>,
    }

    impl Page for NumberPage {
        type Item = u32;

        fn meta(&self) -> &PageMeta {
            &self.meta
        }

        fn into_items(self) -> Vec<u32> {
            self.numbers
        }
    }

    type Script = std::sync::Arc<Mutex<VecDeque<Result<NumberPage>>>>;

    #[derive(Clone, Default)]
    struct Numbers {
        start: Option<String>,
        script: Script,
        seen: std::sync::Arc<Mutex<Vec<Option<String>>>>,
    }

    impl Numbers {
        fn scripted(pages: Vec<Result<NumberPage>>) -> Self {
            Self {
                script: std::sync::Arc::new(Mutex::new(pages.into())),
                ..Default::default()
            }
        }

        fn seen(&self) -> Vec<Option<String>> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ListRequest for Numbers {
        type Page = NumberPage;

        fn start(&self) -> Option<&str> {
            self.start.as_deref()
        }

        fn set_start(&mut self, start: Option<String>) {
            self.start = start;
        }

        async fn list<R>(&self, _client: &R) -> Result<Response<NumberPage>>
        where
            R: RequestRunner,
        {
            self.seen.lock().unwrap().push(self.start.clone());
            let page = self
                .script
                .lock()
                .unwrap()
                .pop_front()
                .expect("pager asked for more pages than scripted")?;
            Ok(Response::scripted(page))
        }
    }

    fn page(numbers: Vec<u32>, next: Option<&str>) -> Result<NumberPage> {
        Ok(NumberPage {
            meta: PageMeta {
                next: next.map(|start| {
                    PageRef {
                        href: None,
                        start: Some(start.to_owned()),
                    }
                }),
                ..Default::default()
            },
            numbers,
        })
    }

    #[tokio::test]
    async fn walks_cursor_until_exhausted() {
        let options = Numbers::scripted(vec![
            page(vec![1, 2], Some("tok-2")),
            page(vec![3], None),
        ]);
        let mut pager = Pager::new(&NoNetwork, options.clone()).unwrap();

        assert!(pager.has_next());
        assert_eq!(pager.cursor(), None);
        assert_eq!(pager.next_page().await.unwrap(), vec![1, 2]);
        assert!(pager.has_next());
        assert_eq!(pager.cursor(), Some("tok-2"));
        assert_eq!(pager.next_page().await.unwrap(), vec![3]);
        assert!(!pager.has_next());

        assert!(matches!(
            pager.next_page().await,
            Err(Error::NoMoreResults)
        ));
        assert_eq!(options.seen(), vec![None, Some("tok-2".to_owned())]);
    }

    #[tokio::test]
    async fn empty_start_is_accepted_and_cleared() {
        let options = Numbers {
            start: Some(String::new()),
            ..Numbers::scripted(vec![page(vec![], None)])
        };
        let mut pager = Pager::new(&NoNetwork, options.clone()).unwrap();
        assert_eq!(pager.next_page().await.unwrap(), Vec::<u32>::new());
        assert!(!pager.has_next());
        assert_eq!(options.seen(), vec![None]);
    }

    #[test]
    fn seeded_start_is_rejected() {
        let options = Numbers {
            start: Some("tok-9".to_owned()),
            ..Default::default()
        };
        assert!(matches!(
            Pager::new(&NoNetwork, options),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn failure_keeps_position() {
        let options = Numbers::scripted(vec![
            page(vec![1], Some("tok-2")),
            Err(Error::InvalidArgument("boom".to_owned())),
            page(vec![2], None),
        ]);
        let mut pager = Pager::new(&NoNetwork, options.clone()).unwrap();

        assert_eq!(pager.next_page().await.unwrap(), vec![1]);
        assert!(pager.next_page().await.is_err());
        assert!(pager.has_next());
        assert_eq!(pager.cursor(), Some("tok-2"));

        assert_eq!(pager.all().await.unwrap(), vec![2]);
        assert_eq!(
            options.seen(),
            vec![None, Some("tok-2".to_owned()), Some("tok-2".to_owned())]
        );
    }

    #[tokio::test]
    async fn total_count_follows_latest_page() {
        let mut first = page(vec![1], Some("tok-2"));
        if let Ok(ref mut p) = first {
            p.meta.total_count = Some(2);
        }
        let options = Numbers::scripted(vec![first, page(vec![2], None)]);
        let mut pager = Pager::new(&NoNetwork, options).unwrap();

        assert_eq!(pager.total_count(), None);
        pager.next_page().await.unwrap();
        assert_eq!(pager.total_count(), Some(2));
        // A page without a count keeps the last known one.
        pager.next_page().await.unwrap();
        assert_eq!(pager.total_count(), Some(2));
    }

    #[tokio::test]
    async fn empty_next_start_ends_iteration() {
        let options = Numbers::scripted(vec![page(vec![7], Some(""))]);
        let mut pager = Pager::new(&NoNetwork, options).unwrap();
        assert_eq!(pager.all().await.unwrap(), vec![7]);
        assert!(!pager.has_next());
    }

    #[tokio::test]
    async fn all_on_exhausted_pager_is_empty() {
        let options = Numbers::scripted(vec![page(vec![1], None)]);
        let mut pager = Pager::new(&NoNetwork, options.clone()).unwrap();
        assert_eq!(pager.all().await.unwrap(), vec![1]);
        assert_eq!(pager.all().await.unwrap(), Vec::<u32>::new());
        assert_eq!(options.seen().len(), 1);
    }
}
