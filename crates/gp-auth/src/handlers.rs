use super::*;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;

/// Creates a guest session: fresh identifier, guest claims, one mint
/// call. Failures are a server fault but non-fatal; the visitor can
/// simply ask again.
pub async fn guest(issuer: web::Data<Issuer>) -> impl Responder {
    match issuer.guest().await {
        Ok((guest, token)) => {
            log::info!("issued guest session for {}", guest.subject());
            HttpResponse::Ok().json(GuestSessionResponse {
                token: token.to_string(),
            })
        }
        Err(e) => {
            log::error!("guest issuance failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}
