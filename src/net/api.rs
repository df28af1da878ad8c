//! Remote fragment loader: thin HTTP helpers every widget depends on.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Host builds: every call resolves to [`FetchError::Unavailable`] since the
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses are reported as [`FetchError::Status`] so callers can
//! keep their previously rendered state. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::FetchError;
use super::types::FormField;

#[cfg(any(test, feature = "csr"))]
fn form_urlencode(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| format!("{}={}", urlencoding::encode(&f.name), urlencoding::encode(&f.value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decode a JSON body, treating an empty body as the type's default.
#[cfg(any(test, feature = "csr"))]
fn decode_or_default<T: DeserializeOwned + Default>(body: &str) -> Result<T, FetchError> {
    if body.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(feature = "csr")]
async fn read_text(resp: gloo_net::http::Response) -> Result<String, FetchError> {
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    resp.text().await.map_err(|e| FetchError::Decode(e.to_string()))
}

/// GET an HTML fragment.
///
/// # Errors
///
/// Returns a [`FetchError`] when the request fails or the status is not 2xx.
pub async fn fetch_fragment(url: &str) -> Result<String, FetchError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        read_text(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(FetchError::Unavailable)
    }
}

/// GET and decode a JSON payload.
///
/// # Errors
///
/// Returns a [`FetchError`] on transport failure, bad status, or a body that
/// does not match `T`.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    #[cfg(feature = "csr")]
    {
        let body = fetch_fragment(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(FetchError::Unavailable)
    }
}

/// Fire a side-effecting GET whose body is ignored.
///
/// # Errors
///
/// Returns a [`FetchError`] when the request fails or the status is not 2xx.
pub async fn trigger(url: &str) -> Result<(), FetchError> {
    fetch_fragment(url).await.map(|_| ())
}

/// POST fields as `application/x-www-form-urlencoded`, returning the body.
///
/// # Errors
///
/// Returns a [`FetchError`] when the request fails or the status is not 2xx.
pub async fn post_form(url: &str, fields: &[FormField]) -> Result<String, FetchError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/x-www-form-urlencoded; charset=UTF-8")
            .body(form_urlencode(fields))
            .map_err(|e| FetchError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        read_text(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, fields);
        Err(FetchError::Unavailable)
    }
}

/// POST a JSON body and decode the (possibly empty) JSON reply.
///
/// # Errors
///
/// Returns a [`FetchError`] on transport failure, bad status, or an
/// undecodable non-empty reply.
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, FetchError>
where
    B: Serialize,
    T: DeserializeOwned + Default,
{
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| FetchError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let text = read_text(resp).await?;
        decode_or_default(&text)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, body);
        Err(FetchError::Unavailable)
    }
}
