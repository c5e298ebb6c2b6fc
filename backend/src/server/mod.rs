//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{ServerConfig, ServerSettings};

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use exercise_tracker::Trace;
#[cfg(debug_assertions)]
use exercise_tracker::doc::ApiDoc;
use exercise_tracker::inbound::http::cors::{cors_headers, fallback};
use exercise_tracker::inbound::http::error::{
    form_error_handler, json_error_handler, query_error_handler,
};
use exercise_tracker::inbound::http::exercises::{append_exercise, get_log};
use exercise_tracker::inbound::http::health::{HealthState, live, ready};
use exercise_tracker::inbound::http::index::index;
use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::inbound::http::users::{create_user, list_users};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub(crate) struct AppDependencies {
    pub(crate) health_state: web::Data<HealthState>,
    pub(crate) http_state: web::Data<HttpState>,
}

pub(crate) fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api")
        .service(create_user)
        .service(list_users)
        .service(append_exercise)
        .service(get_log);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(cors_headers())
        .wrap(Trace)
        .service(api)
        .service(index)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(fallback))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The readiness flag is raised once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let ServerConfig { bind_addr, db_pool } = config;
    let store = if db_pool.is_some() { "postgres" } else { "memory" };

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, store, "exercise tracker listening");
    health_state.mark_ready();
    Ok(server)
}
