use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    storage: &'static str,
    sessions: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the storage and session backends
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let storage_status = match data.storage.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!(error = %e, "Storage is not ready");
            "unhealthy"
        }
    };

    let sessions_status = match data.sessions.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!(error = %e, "Session store is not ready");
            "unhealthy"
        }
    };

    if storage_status == "ok" && sessions_status == "ok" {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            storage: storage_status,
            sessions: sessions_status,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            storage: storage_status,
            sessions: sessions_status,
        })
    }
}
