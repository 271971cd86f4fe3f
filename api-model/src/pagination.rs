use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A link to a page of a collection. `start` is the opaque cursor the server
/// expects back to continue from that page.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageRef {
    pub href: Option<String>,
    pub start: Option<String>,
}

/// Pagination metadata shared by every collection response.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageMeta {
    pub limit: Option<i64>,
    pub total_count: Option<i64>,
    pub first: Option<PageRef>,
    pub next: Option<PageRef>,
}

impl PageMeta {
    /// The cursor of the next page. An absent `next`, an absent `start` and
    /// an empty `start` all mean that this is the last page.
    pub fn next_start(&self) -> Option<&str> {
        self.next
            .as_ref()
            .and_then(|next| next.start.as_deref())
            .filter(|start| !start.is_empty())
    }
}

/// One page of a cursor-paginated collection.
pub trait Page {
    type Item;

    fn meta(&self) -> &PageMeta;

    fn into_items(self) -> Vec<Self::Item>;

    fn next_start(&self) -> Option<&str> {
        self.meta().next_start()
    }
}

macro_rules! impl_page {
    ($collection:ty, $field:ident, $item:ty) => {
        impl $crate::Page for $collection {
            type Item = $item;

            fn meta(&self) -> &$crate::PageMeta {
                &self.meta
            }

            fn into_items(self) -> Vec<Self::Item> {
                self.$field
            }
        }
    };
}

pub(crate) use impl_page;
