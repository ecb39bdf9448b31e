//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{DEVELOPMENT_JWT_SECRET, ServerSettings};
pub use state_builders::{Adapters, build_http_state};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::positions::{
    create_position, delete_position, list_positions, update_position,
};
use crate::inbound::http::shifts::{create_shift, delete_shift, list_shifts, update_shift};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, list_users, login};
use crate::inbound::http::validation::{json_config, query_config};

/// Build the application with every REST route, the probes and the trace
/// middleware.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use actix_web::web;
/// use mockable::DefaultClock;
/// use shiftplan::inbound::http::health::HealthState;
/// use shiftplan::server::{Adapters, build_app, build_http_state};
///
/// let adapters = Adapters::seeded(b"secret", 10, Arc::new(DefaultClock)).expect("seed");
/// let app = build_app(
///     web::Data::new(HealthState::new()),
///     web::Data::new(build_http_state(&adapters)),
/// );
/// ```
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(login)
        .service(list_users)
        .service(create_user)
        .service(list_positions)
        .service(create_position)
        .service(update_position)
        .service(delete_position)
        .service(list_shifts)
        .service(create_shift)
        .service(update_shift)
        .service(delete_shift);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(query_config())
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server over a freshly seeded store.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `settings`: listener and credential settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Returns [`std::io::Error`] when seeding the store, binding the socket or
/// starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let adapters = Adapters::seeded(
        settings.jwt_secret().as_bytes(),
        settings.bcrypt_cost(),
        std::sync::Arc::new(mockable::DefaultClock),
    )
    .map_err(|err| std::io::Error::other(format!("failed to seed store: {err}")))?;
    let http_state = web::Data::new(build_http_state(&adapters));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(settings.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
