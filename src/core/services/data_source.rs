use std::future::Future;

use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::core::store::ProjectSource;
use crate::error::LoadError;
use crate::models::Project;

pub fn parse_projects(payload: &str) -> Result<Vec<Project>, LoadError> {
    Ok(serde_json::from_str::<Vec<Project>>(payload)?)
}

/// Reads the project list from a JSON document served next to the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpProjectSource {
    url: String,
}

impl HttpProjectSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ProjectSource for HttpProjectSource {
    fn fetch_projects(&self) -> impl Future<Output = Result<Vec<Project>, LoadError>> {
        let url = self.url.clone();
        async move {
            let window = web_sys::window()
                .ok_or_else(|| LoadError::Unreachable("no browser window".to_string()))?;

            let response = await_promise(window.fetch_with_str(&url)).await?;
            let response: Response = response
                .dyn_into()
                .map_err(|_| LoadError::Unreachable(format!("{} did not return a response", url)))?;

            if !response.ok() {
                return Err(LoadError::Status(response.status()));
            }

            let body = response
                .json()
                .map_err(|e| LoadError::Malformed(format!("{:?}", e)))?;
            let json = JsFuture::from(body)
                .await
                .map_err(|e| LoadError::Malformed(format!("{:?}", e)))?;

            serde_wasm_bindgen::from_value::<Vec<Project>>(json)
                .map_err(|e| LoadError::Malformed(e.to_string()))
        }
    }
}

async fn await_promise(promise: Promise) -> Result<wasm_bindgen::JsValue, LoadError> {
    JsFuture::from(promise)
        .await
        .map_err(|e| LoadError::Unreachable(format!("{:?}", e)))
}

/// Serves a JSON document already in memory, e.g. an embedded seed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonProjectSource {
    payload: String,
}

impl JsonProjectSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self { payload: payload.into() }
    }
}

impl ProjectSource for JsonProjectSource {
    fn fetch_projects(&self) -> impl Future<Output = Result<Vec<Project>, LoadError>> {
        let parsed = parse_projects(&self.payload);
        async move { parsed }
    }
}
