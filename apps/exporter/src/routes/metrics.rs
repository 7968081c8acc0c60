use actix_web::{HttpResponse, Responder, get, web};
use promping::PingMetrics;
use tracing::error;

macros_utils::routes! {
    route metrics_route,
}

/// Prometheus scrape endpoint, text exposition format.
#[get("/metrics")]
pub async fn metrics_route(metrics: web::Data<PingMetrics>) -> impl Responder {
    match metrics.encode() {
        Ok(body) => HttpResponse::Ok().content_type(metrics.content_type()).body(body),
        Err(err) => {
            error!("failed to encode metrics: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
