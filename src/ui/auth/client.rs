//! Browser-side collaborators for the submission workflow
//!
//! - [`FetchTransport`] posts JSON with `gloo-net`
//! - [`BrowserStorage`] reads and writes `window.localStorage`
//!
//! Both fall back to inert stubs on the server, where forms never submit.

use serde_json::Value;

use crate::core::{
    ApiResponse, AuthTransport, AuthWorkflow, KeyValueStorage, SessionStore, StorageError,
    TransportError,
};
use crate::ui::notifications::NotificationManager;

/// Workflow wired to the browser
pub type BrowserWorkflow = AuthWorkflow<FetchTransport, BrowserStorage, NotificationManager>;

/// Build the submission workflow used by the auth forms
pub fn browser_workflow(notifications: NotificationManager) -> BrowserWorkflow {
    AuthWorkflow::new(
        FetchTransport,
        SessionStore::new(BrowserStorage),
        notifications,
    )
}

/// HTTP transport backed by the Fetch API
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[cfg(not(feature = "ssr"))]
impl AuthTransport for FetchTransport {
    async fn post_json(&self, endpoint: &str, body: Value) -> Result<ApiResponse, TransportError> {
        use gloo_net::http::Request;

        let request = Request::post(endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        // Non-JSON bodies (proxy error pages etc.) count as unstructured
        let body = serde_json::from_str::<Value>(&text).ok();

        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(feature = "ssr")]
impl AuthTransport for FetchTransport {
    async fn post_json(&self, _endpoint: &str, _body: Value) -> Result<ApiResponse, TransportError> {
        Err(TransportError::Unavailable)
    }
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(not(feature = "ssr"))]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

#[cfg(not(feature = "ssr"))]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| StorageError::Read(key.to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

#[cfg(feature = "ssr")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
