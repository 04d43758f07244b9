#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use pokegrid_client::{FetchError, HttpResponse, Transport};
use tokio::sync::watch;

pub const BASE: &str = "http://pokeapi.test/api/v2";

#[derive(Clone)]
enum Route {
    Respond(HttpResponse),
    Reject(String),
}

/// In-memory transport serving canned responses.
///
/// Detail requests can be held at a gate to keep a load cycle in flight.
pub struct MockTransport {
    routes: Mutex<HashMap<String, Route>>,
    requests: Mutex<Vec<String>>,
    holding: AtomicBool,
    held: AtomicUsize,
    gate: watch::Sender<bool>,
}

impl MockTransport {
    pub fn new() -> Self {
        let (gate, _) = watch::channel(false);
        Self {
            routes: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            holding: AtomicBool::new(false),
            held: AtomicUsize::new(0),
            gate,
        }
    }

    /// `count` Pokemon with ids 1..=count, listed under `limit`/`offset`
    pub fn with_pokemon(count: u32, limit: u32, offset: u32) -> Self {
        let transport = Self::new();
        transport.respond(
            &pokegrid_protocol::list_url(BASE, limit, offset),
            200,
            list_body(count),
        );
        for id in 1..=count {
            transport.respond(&detail_url(id), 200, detail_body(id));
        }
        transport
    }

    pub fn respond(&self, url: &str, status: u16, body: impl Into<String>) {
        self.routes.lock().unwrap().insert(
            url.to_string(),
            Route::Respond(HttpResponse {
                status,
                body: body.into(),
            }),
        );
    }

    pub fn reject(&self, url: &str, message: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), Route::Reject(message.to_string()));
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn list_requests(&self) -> usize {
        self.requests()
            .iter()
            .filter(|url| url.contains("?limit="))
            .count()
    }

    /// Hold detail requests made from now on until [`release`](Self::release)
    pub fn hold_details(&self) {
        self.holding.store(true, Ordering::SeqCst);
    }

    /// Let new detail requests through; already held ones stay held
    pub fn stop_holding(&self) {
        self.holding.store(false, Ordering::SeqCst);
    }

    pub fn held(&self) -> usize {
        self.held.load(Ordering::SeqCst)
    }

    pub fn release(&self) {
        self.gate.send_replace(true);
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        let route = self.routes.lock().unwrap().get(url).cloned();

        if !url.contains("?limit=") && self.holding.load(Ordering::SeqCst) {
            let mut open = self.gate.subscribe();
            self.held.fetch_add(1, Ordering::SeqCst);
            let _ = open.wait_for(|open| *open).await;
        }

        match route {
            Some(Route::Respond(response)) => Ok(response),
            Some(Route::Reject(message)) => Err(FetchError::network(url, message)),
            None => Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}

pub fn detail_url(id: u32) -> String {
    format!("{}/pokemon/{}/", BASE, id)
}

pub fn list_body(count: u32) -> String {
    let results: Vec<String> = (1..=count)
        .map(|id| format!(r#"{{"name": "mon-{}", "url": "{}"}}"#, id, detail_url(id)))
        .collect();
    format!(
        r#"{{"count": {}, "next": null, "previous": null, "results": [{}]}}"#,
        count,
        results.join(",")
    )
}

pub fn detail_body(id: u32) -> String {
    format!(
        r#"{{
            "id": {id},
            "name": "mon-{id}",
            "height": {height},
            "weight": {weight},
            "sprites": {{"other": {{"official-artwork": {{"front_default": "https://img.test/{id}.png"}}}}}},
            "types": [{{"slot": 1, "type": {{"name": "grass", "url": "https://pokeapi.test/type/12/"}}}}],
            "abilities": [{{"ability": {{"name": "overgrow", "url": "https://pokeapi.test/ability/65/"}}, "is_hidden": false}}]
        }}"#,
        id = id,
        height = id * 3,
        weight = id * 10
    )
}
