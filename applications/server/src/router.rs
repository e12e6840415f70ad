/// Route table
use crate::{api, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// Every route carries a method fallback so a wrong method gets the JSON 405
/// body. `/reset` is only registered when `reset_enabled` is set; otherwise it
/// falls through to the 404 fallback like any unknown path.
pub fn create_router(app_state: AppState, reset_enabled: bool) -> Router {
    let mut routes = Router::new()
        .route(
            "/health",
            get(api::health::health).fallback(api::fallback::method_not_allowed),
        )
        .route(
            "/users",
            post(api::users::create_user).fallback(api::fallback::method_not_allowed),
        )
        .route(
            "/users/:id",
            get(api::users::get_user).fallback(api::fallback::method_not_allowed),
        );

    if reset_enabled {
        routes = routes.route(
            "/reset",
            post(api::reset::reset_store).fallback(api::fallback::method_not_allowed),
        );
    }

    routes
        .fallback(api::fallback::not_found)
        .layer(CatchPanicLayer::custom(api::fallback::handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(app_state)
}
