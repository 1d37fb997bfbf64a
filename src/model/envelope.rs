use serde::{Deserialize, Serialize};

/// The `{"d": ...}` wrapper every Replicon response body is sent in.
///
/// A missing `d` field and `"d": null` both decode to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub d: Option<T>,
}

impl<T> Envelope<T> {
    pub const fn new(payload: T) -> Self {
        Self { d: Some(payload) }
    }

    pub fn into_inner(self) -> Option<T> {
        self.d
    }
}
