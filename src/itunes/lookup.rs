use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{types::LookupResponse, warning};

/// Fetches one lookup payload from the iTunes API.
///
/// Issues a single GET of the exact request string. The endpoint rate-limits
/// aggressively under bursts; a 429 response with a reasonable `Retry-After`
/// is waited out once before reading the body.
///
/// # Arguments
///
/// * `url` - Full request string as built by [`crate::query::request_url`]
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(LookupResponse)` - Decoded payload (which may itself carry a
///   payload-level `errorMessage`)
/// - `Err(reqwest::Error)` - Network error or non-JSON body
///
/// # Error Handling
///
/// - Rate limit responses are waited out when the delay is ≤ 120 seconds
/// - Network errors are propagated to the caller
/// - Malformed values in the query are not rejected here; the API answers
///   them with an empty or error payload
pub async fn lookup(url: &str) -> Result<LookupResponse, reqwest::Error> {
    let client = Client::new();

    let mut response = client.get(url).send().await?;
    // check for retry-after header
    if response.status() == StatusCode::TOO_MANY_REQUESTS {
        if let Some(retry_after) = response.headers().get("retry-after") {
            let retry_after = retry_after
                .to_str()
                .unwrap_or("0")
                .parse::<u64>()
                .unwrap_or(0);
            if retry_after <= 120 {
                sleep(Duration::from_secs(retry_after)).await;
                response = client.get(url).send().await?;
            } else {
                warning!(
                    "Retry after has reached an abnormal high of {} seconds. Try again later.",
                    retry_after
                );
            }
        }
    }

    let json = response.json::<LookupResponse>().await?;

    Ok(json)
}
