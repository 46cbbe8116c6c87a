//! Shared test support: an in-memory HTTP client

#![allow(dead_code)]

use pagemeta::fetch::{FetchedPage, HttpClient, ProbeResponse};
use pagemeta::FetchError;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// A canned response for one URL
#[derive(Clone)]
struct Route {
    status: u16,
    content_type: Option<String>,
    content_length: Option<u64>,
    final_url: Option<String>,
    delay_ms: u64,
    failure: Option<FetchError>,
    body: Option<String>,
    get_failure: Option<FetchError>,
}

impl Route {
    fn new(status: u16, content_type: Option<&str>) -> Self {
        Self {
            status,
            content_type: content_type.map(String::from),
            content_length: None,
            final_url: None,
            delay_ms: 0,
            failure: None,
            body: None,
            get_failure: None,
        }
    }

    fn probe(&self, url: &str) -> ProbeResponse {
        ProbeResponse {
            url: self.final_url.clone().unwrap_or_else(|| url.to_string()),
            status: self.status,
            content_type: self.content_type.clone(),
            content_length: self.content_length,
        }
    }
}

/// In-memory [`HttpClient`] that records every request
///
/// Unknown URLs fail with a network error, like an unreachable host.
#[derive(Default)]
pub struct FakeClient {
    routes: HashMap<String, Route>,
    heads: Mutex<Vec<String>>,
    gets: Mutex<Vec<String>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve an HTML document at `url`
    pub fn html(mut self, url: &str, body: &str) -> Self {
        let mut route = Route::new(200, Some("text/html; charset=utf-8"));
        route.body = Some(body.to_string());
        self.routes.insert(url.to_string(), route);
        self
    }

    /// Serve a headers-only resource at `url`
    pub fn resource(mut self, url: &str, status: u16, content_type: &str) -> Self {
        self.routes
            .insert(url.to_string(), Route::new(status, Some(content_type)));
        self
    }

    /// Serve a resource with no `Content-Type` header
    pub fn untyped(mut self, url: &str) -> Self {
        self.routes.insert(url.to_string(), Route::new(200, None));
        self
    }

    /// Declare a `Content-Length` for `url`
    pub fn length(mut self, url: &str, bytes: u64) -> Self {
        if let Some(route) = self.routes.get_mut(url) {
            route.content_length = Some(bytes);
        }
        self
    }

    /// Report `final_url` as the post-redirect address of `url`
    pub fn redirect(mut self, url: &str, final_url: &str) -> Self {
        if let Some(route) = self.routes.get_mut(url) {
            route.final_url = Some(final_url.to_string());
        }
        let target = self.routes.get(url).cloned();
        if let Some(mut route) = target {
            route.final_url = None;
            self.routes.insert(final_url.to_string(), route);
        }
        self
    }

    /// Delay every response for `url`
    pub fn delay(mut self, url: &str, ms: u64) -> Self {
        if let Some(route) = self.routes.get_mut(url) {
            route.delay_ms = ms;
        }
        self
    }

    /// Make HEAD on `url` fail at the transport level
    pub fn fail(mut self, url: &str, error: FetchError) -> Self {
        let route = self
            .routes
            .entry(url.to_string())
            .or_insert_with(|| Route::new(200, None));
        route.failure = Some(error);
        self
    }

    /// Make GET on `url` fail while HEAD still succeeds
    pub fn fail_get(mut self, url: &str, error: FetchError) -> Self {
        if let Some(route) = self.routes.get_mut(url) {
            route.get_failure = Some(error);
        }
        self
    }

    /// URLs probed with HEAD, in request order
    pub fn heads(&self) -> Vec<String> {
        self.heads.lock().unwrap().clone()
    }

    /// URLs fetched with GET, in request order
    pub fn gets(&self) -> Vec<String> {
        self.gets.lock().unwrap().clone()
    }

    fn route(&self, url: &str) -> Result<Route, FetchError> {
        self.routes
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Network(format!("dns error: failed to lookup {}", url)))
    }
}

impl HttpClient for FakeClient {
    async fn head(&self, url: &str) -> Result<ProbeResponse, FetchError> {
        self.heads.lock().unwrap().push(url.to_string());
        let route = self.route(url)?;
        tokio::time::sleep(Duration::from_millis(route.delay_ms)).await;

        match route.failure {
            Some(err) => Err(err),
            None => Ok(route.probe(url)),
        }
    }

    async fn get(&self, url: &str) -> Result<FetchedPage, FetchError> {
        self.gets.lock().unwrap().push(url.to_string());
        let route = self.route(url)?;
        tokio::time::sleep(Duration::from_millis(route.delay_ms)).await;

        if let Some(err) = route.get_failure.clone().or(route.failure.clone()) {
            return Err(err);
        }
        Ok(FetchedPage {
            response: route.probe(url),
            body: route.body.clone().unwrap_or_default(),
        })
    }
}
