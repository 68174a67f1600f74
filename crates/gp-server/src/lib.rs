//! Guest session server.
//!
//! Wires the identity core to HTTP: the single issuance route, a
//! liveness probe, and a gated demonstration route behind the access
//! gate. Token verification and lifetime policy stay with the external
//! trust authority; this surface only issues and checks presence.

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use gp_auth::Issuer;
use gp_auth::Presence;
use gp_auth::RemoteAuthority;
use std::sync::Arc;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Renders only for callers holding an established identity; guests and
/// registered members are indistinguishable here.
async fn protected(_: Presence) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "content": "gated" }))
}

#[rustfmt::skip]
pub async fn run() -> Result<(), std::io::Error> {
    let issuer = web::Data::new(Issuer::new(Arc::new(RemoteAuthority::from_env())));
    log::info!("starting guest session server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(issuer.clone())
            .route("/health", web::get().to(health))
            .service(
                web::scope("/auth")
                    .route("/guest", web::post().to(gp_auth::guest)),
            )
            .service(
                web::scope("/content")
                    .route("/protected", web::get().to(protected)),
            )
    })
    .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use gp_auth::GuestSessionResponse;
    use gp_auth::StaticMinter;

    /// End-to-end guest flow against a deterministic minter: no access
    /// before issuance, a fresh session after, access with it.
    #[actix_web::test]
    async fn issuance_unlocks_protected_content() {
        let issuer = web::Data::new(Issuer::new(Arc::new(StaticMinter::healthy())));
        let app = test::init_service(
            App::new()
                .app_data(issuer)
                .route("/health", web::get().to(health))
                .route("/auth/guest", web::post().to(gp_auth::guest))
                .route("/content/protected", web::get().to(protected)),
        )
        .await;

        let req = test::TestRequest::get().uri("/content/protected").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 401);

        let req = test::TestRequest::post().uri("/auth/guest").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let session: GuestSessionResponse = test::read_body_json(resp).await;

        let req = test::TestRequest::get()
            .uri("/content/protected")
            .insert_header(("Authorization", format!("Bearer {}", session.token)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn health_always_answers() {
        let app = test::init_service(App::new().route("/health", web::get().to(health))).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
