use actix_web::{HttpResponse, Responder};

// handler for health check get requests
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok() // an OK status Http response with an empty body
}
