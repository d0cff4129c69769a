use axum::routing::get;
use axum::Router;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{self, categories, events, registrations, tickets, users, venues};

pub fn create_routes(pool: PgPool) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/usuarios", get(users::list).post(users::create))
        .route(
            "/usuarios/:id",
            get(users::get).put(users::update).delete(users::delete),
        )
        .route("/eventos", get(events::list).post(events::create))
        .route(
            "/eventos/:id",
            get(events::get).put(events::update).delete(events::delete),
        )
        .route("/lugares", get(venues::list).post(venues::create))
        .route(
            "/lugares/:id",
            get(venues::get).put(venues::update).delete(venues::delete),
        )
        .route("/categorias", get(categories::list).post(categories::create))
        .route(
            "/categorias/:id",
            get(categories::get)
                .put(categories::update)
                .delete(categories::delete),
        )
        .route(
            "/inscripciones",
            get(registrations::list).post(registrations::create),
        )
        .route(
            "/inscripciones/:id",
            get(registrations::get)
                .put(registrations::update)
                .delete(registrations::delete),
        )
        .route("/entradas", get(tickets::list).post(tickets::create))
        .route(
            "/entradas/:id",
            get(tickets::get).put(tickets::update).delete(tickets::delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
        .with_state(pool)
}
