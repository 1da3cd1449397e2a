use axum::{
    extract::{Request, State},
    middleware::{from_fn_with_state, Next},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::Config;
use crate::handlers;
use crate::i18n::{BundleLoader, LocaleRegistry};
use crate::routing::{blocked_response, GateDecision, LocaleResolver, ReservedPaths, RouteGate};
use crate::seo::{MetadataGenerator, RobotsGenerator, SitemapGenerator};

/// Shared, immutable application state.
///
/// Every component holds the same registry and reserved-path instances.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<LocaleRegistry>,
    pub bundles: Arc<dyn BundleLoader>,
    pub gate: Arc<RouteGate>,
    pub resolver: Arc<LocaleResolver>,
    pub metadata: Arc<MetadataGenerator>,
    pub sitemap: Arc<SitemapGenerator>,
    pub robots: Arc<RobotsGenerator>,
}

impl AppState {
    pub fn new(config: Config, registry: LocaleRegistry, bundles: Arc<dyn BundleLoader>) -> Self {
        let config = Arc::new(config);
        let registry = Arc::new(registry);
        let reserved = Arc::new(ReservedPaths::packages(&registry));
        let gate = Arc::new(RouteGate::new(Arc::clone(&reserved)));

        Self {
            resolver: Arc::new(LocaleResolver::new(Arc::clone(&registry))),
            metadata: Arc::new(MetadataGenerator::new(
                Arc::clone(&registry),
                Arc::clone(&bundles),
                Arc::clone(&config),
            )),
            sitemap: Arc::new(SitemapGenerator::new(
                Arc::clone(&registry),
                Arc::clone(&gate),
                &config.base_url,
            )),
            robots: Arc::new(RobotsGenerator::new(reserved, &config.base_url)),
            gate,
            bundles,
            registry,
            config,
        }
    }
}

/// Build the site router.
///
/// Layer order, outermost first: tracing, route gate, locale resolver.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/robots.txt", get(handlers::robots_txt))
        .route("/sitemap.xml", get(handlers::sitemap_xml))
        .route("/:locale", get(handlers::home_page))
        .route("/:locale/:page", get(handlers::page))
        .fallback(handlers::not_found)
        .layer(from_fn_with_state(state.clone(), resolve_locale))
        .layer(from_fn_with_state(state.clone(), route_gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Reject reserved paths before anything else sees the request.
pub async fn route_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path();

    if state.gate.check(path) == GateDecision::Blocked {
        info!("Blocked reserved path: {}", path);
        return blocked_response();
    }

    next.run(request).await
}

/// Redirect unprefixed or non-canonical paths; attach the resolution to
/// canonical prefixed ones.
pub async fn resolve_locale(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();

    if LocaleResolver::is_passthrough(path) {
        return next.run(request).await;
    }

    let resolution = state.resolver.resolve(path);

    // Unprefixed paths, and prefixed ones not in canonical form (`/fr/about/`)
    if resolution.is_redirect() || resolution.canonical_path != path {
        let location = match request.uri().query() {
            Some(query) => format!("{}?{}", resolution.canonical_path, query),
            None => resolution.canonical_path.clone(),
        };
        debug!("Redirecting {} to {}", path, location);
        return Redirect::temporary(&location).into_response();
    }

    request.extensions_mut().insert(resolution);
    next.run(request).await
}
