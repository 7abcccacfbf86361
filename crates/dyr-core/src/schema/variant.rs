//! Known page kinds in the router data, in lookup priority order.

use std::fmt;

/// A `loaderData` route that carries `videoInfoRes`.
///
/// `PRIORITY` fixes the lookup order; a new page kind is a new variant plus its
/// route key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageVariant {
    Video,
    Note,
}

impl PageVariant {
    pub const PRIORITY: [PageVariant; 2] = [PageVariant::Video, PageVariant::Note];

    pub fn route_key(self) -> &'static str {
        match self {
            PageVariant::Video => "video_(id)/page",
            PageVariant::Note => "note_(id)/page",
        }
    }
}

impl fmt::Display for PageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageVariant::Video => write!(f, "video"),
            PageVariant::Note => write!(f, "note"),
        }
    }
}
