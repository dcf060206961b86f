use crate::{FailureKind, FetchError, SearchPage};

/// Parse a search response body. Any shape mismatch is a `Decode` failure.
pub fn decode_search_page(bytes: &[u8]) -> Result<SearchPage, FetchError> {
    serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
}
