use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{web, HttpResponse, Responder};
use common::config::ConsoleConfig;

/// Returns the console configuration. Never cached, so a restarted host with
/// new settings is picked up on the next reload.
pub(crate) async fn process(config: web::Data<ConsoleConfig>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(CacheControl(vec![CacheDirective::NoStore]))
        .json(config.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn serves_resolved_config() {
        let config = ConsoleConfig::new("https://discovery.lab/api/v1");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config.clone()))
                .service(super::super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/console/config.json").to_request();
        let body: ConsoleConfig = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, config);
    }
}
