use dioxus::prelude::*;
use server::api::HttpApi;
use shared_types::FeatureFlags;

mod auth;
mod format_helpers;
mod gate;
mod loader;
mod payment;
mod routes;
mod session;
#[cfg(test)]
mod testing;

use auth::AuthState;
use routes::Route;
use session::SessionHandle;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_environment();
        server::config::load_feature_flags();
        server::health::record_start_time();

        let state = server::state::AppState::seeded().expect("failed to seed demo backend");

        let router = dioxus::server::router(App)
            .merge(server::openapi::api_router(state))
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);
    use_context_provider(AuthState::new);
    use_context_provider(SessionHandle::platform);
    use_context_provider(HttpApi::from_env);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        Router::<Route> {}
    }
}
