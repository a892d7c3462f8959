//! Serverless calculation service
//!
//! Exposes the projection engine over HTTP for deployments that delegate
//! calculation to a remote service. The endpoint set mirrors what the
//! form frontend expects:
//!
//! - `POST /calculate-pension` — camelCase profile in, snake_case result out
//! - `GET /pension-groups` — static pension-range breakdown
//! - `GET /random-fact` — one informational fact
//! - `GET /health` — liveness for status polling
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use pension_engine::calculator::wire::WireProfile;
use pension_engine::{reference, PensionProfile, ProjectionEngine};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct FactResponse {
    fact: &'static str,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    let body = serde_json::json!({ "error": message });
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body.to_string()))
        .unwrap()
}

fn json_response<T: Serialize>(body: &T) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn calculate(body_str: &str) -> Response<Body> {
    let wire: WireProfile = match serde_json::from_str(body_str) {
        Ok(w) => w,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    let profile: PensionProfile = wire.into();
    let engine = ProjectionEngine::default();

    match engine.project(&profile) {
        Ok(result) => json_response(&result),
        // Invalid input is a client error, never a zero-result
        Err(e) => error_response(400, &e.to_string()),
    }
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    let path = event.uri().path().to_string();
    let method = event.method().as_str().to_string();

    let response = match (method.as_str(), path.as_str()) {
        ("POST", "/calculate-pension") => {
            let body_str = match event.body() {
                Body::Text(s) => s.clone(),
                Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
                Body::Empty => "{}".to_string(),
            };
            calculate(&body_str)
        }
        ("GET", "/pension-groups") => json_response(&reference::pension_groups()),
        ("GET", "/random-fact") => json_response(&FactResponse {
            fact: reference::random_fact(),
        }),
        ("GET", "/health") => json_response(&HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }),
        _ => error_response(404, "Not found"),
    };

    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
