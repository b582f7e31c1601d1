//! Shared test utilities: a local artworks API backed by tiny_http

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use serde_json::json;
use tiny_http::{Header, Response, Server};

/// How the fixture answers a given page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFault {
    /// HTTP 500 with a JSON error body
    ServerError,
    /// HTTP 200 with a body that is not JSON
    Garbage,
}

/// Serves `GET /api/v1/artworks` over a synthetic dataset on an ephemeral port
pub struct FixtureApi {
    server: Arc<Server>,
    handle: Option<JoinHandle<()>>,
    base_url: String,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FixtureApi {
    /// Dataset with ids `1..=total`
    pub fn start(total: u64) -> Self {
        Self::start_with_faults(total, HashMap::new())
    }

    pub fn start_with_faults(total: u64, faults: HashMap<u32, PageFault>) -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").expect("Failed to start fixture server"));
        let addr = server
            .server_addr()
            .to_ip()
            .expect("Fixture server is not bound to an IP address");
        let base_url = format!("http://{}/api/v1", addr);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let server = Arc::clone(&server);
            let requests = Arc::clone(&requests);
            thread::spawn(move || {
                for request in server.incoming_requests() {
                    let url = request.url().to_string();
                    let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
                    let params = parse_query(query);
                    requests.lock().unwrap().push(params.clone());

                    if path != "/api/v1/artworks" {
                        let _ = request.respond(json_response(404, json!({"error": "not found"})));
                        continue;
                    }

                    let page: u32 = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(1);
                    let limit: u32 = params.get("limit").and_then(|l| l.parse().ok()).unwrap_or(12);

                    let response = match faults.get(&page) {
                        Some(PageFault::ServerError) => json_response(
                            500,
                            json!({"status": 500, "error": "Server error", "detail": "backend unavailable"}),
                        ),
                        Some(PageFault::Garbage) => Response::from_string("<html>oops</html>"),
                        None => json_response(200, page_body(total, page, limit)),
                    };
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            server,
            handle: Some(handle),
            base_url,
            requests,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Page numbers requested so far, in order
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter_map(|params| params.get("page").and_then(|p| p.parse().ok()))
            .collect()
    }

    /// Query parameters of every request so far
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for FixtureApi {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.to_string(), v.replace("%2C", ",")))
        .collect()
}

fn json_response(status: u16, value: serde_json::Value) -> Response<std::io::Cursor<Vec<u8>>> {
    let content_type = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
    Response::from_string(value.to_string())
        .with_status_code(status)
        .with_header(content_type)
}

fn page_body(total: u64, page: u32, limit: u32) -> serde_json::Value {
    let start = u64::from(page.saturating_sub(1)) * u64::from(limit) + 1;
    let end = (start + u64::from(limit)).min(total + 1);
    let data: Vec<_> = (start..end)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Artwork {id}"),
                "place_of_origin": if id % 2 == 0 { json!("France") } else { json!(null) },
                "artist_display": format!("Artist {id}\nFrench, 1850-1900"),
                "inscriptions": null,
                "date_start": 1800 + id as i64,
                "date_end": 1801 + id as i64,
            })
        })
        .collect();

    json!({
        "pagination": {
            "total": total,
            "limit": limit,
            "offset": start - 1,
            "total_pages": total.div_ceil(u64::from(limit.max(1))),
            "current_page": page,
        },
        "data": data,
    })
}
