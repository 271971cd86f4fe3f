//! Models for the Security and Compliance Center v3 API.
//!
//! Every collection endpoint returns a [`PageMeta`] flattened next to its
//! item array. The [`Page`] trait gives uniform access to both so that a
//! client can walk the `next.start` cursor without knowing which resource it
//! is listing.

/// Implements `Display` for unit enums using their serde wire name, so that
/// the values can be used directly as query parameters.
macro_rules! display_as_wire_name {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(
                    &self,
                    f: &mut std::fmt::Formatter<'_>,
                ) -> std::fmt::Result {
                    let name = serde_variant::to_variant_name(self)
                        .map_err(|_| std::fmt::Error)?;
                    write!(f, "{}", name)
                }
            }
        )+
    };
}

pub(crate) use display_as_wire_name;

mod attachment;
mod control_library;
mod pagination;
mod profile;
mod provider_type;
mod report;
mod rule;
mod scan;
mod scope;
mod settings;

pub use attachment::*;
pub use control_library::*;
pub use pagination::*;
pub use profile::*;
pub use provider_type::*;
pub use report::*;
pub use rule::*;
pub use scan::*;
pub use scope::*;
pub use settings::*;
