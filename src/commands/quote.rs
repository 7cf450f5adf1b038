//! Quote Commands
//!
//! Fetches a random quote from the public quotes API.

use wish_core::{QuoteError, RemoteQuote};

/// GET a random quote from `endpoint`
pub async fn fetch_random_quote(endpoint: &str) -> Result<RemoteQuote, QuoteError> {
    let response = reqwest::get(endpoint)
        .await
        .map_err(|e| QuoteError::Http(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(QuoteError::Status(status.as_u16()));
    }

    response
        .json::<RemoteQuote>()
        .await
        .map_err(|e| QuoteError::Decode(e.to_string()))
}
