use actix_web::{HttpResponse, Responder, get};

macros_utils::routes! {
    route health_route,
}

/// Liveness check for the exporter.
///
/// The process exits as soon as fping stops, so any answer means probing is
/// still running. Replies 204 with an empty body.
#[get("/")]
pub async fn health_route() -> impl Responder {
    HttpResponse::NoContent()
}
