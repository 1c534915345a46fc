//! HTTP status checks.
//!
//! The dashboard uses two different tests for "success". Host views accept
//! the whole 2xx class, while the host list and log loaders only accept
//! 200–209. The two are kept apart on purpose: the API owner has not said
//! which one is intended, so they are not unified here.

/// How a response status is judged successful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessCheck {
    /// `status / 100 == 2`: any 2xx status. Used by host views.
    Class2xx,
    /// `status / 10 == 20`: 200 through 209. Used by the list loaders.
    Narrow20x,
}

impl SuccessCheck {
    #[must_use]
    pub fn accepts(self, status: u16) -> bool {
        match self {
            Self::Class2xx => status / 100 == 2,
            Self::Narrow20x => status / 10 == 20,
        }
    }
}
