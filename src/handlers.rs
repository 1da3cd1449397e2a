use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Extension,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::i18n::BundleError;
use crate::pages::SitePage;
use crate::render;
use crate::routing::Resolution;
use crate::seo::SitemapGenerator;
use crate::server::AppState;

/// Page-level failures surfaced to the client.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("page not found")]
    NotFound,
    #[error(transparent)]
    Bundle(#[from] BundleError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            PageError::Bundle(BundleError::NotFound(code)) => {
                warn!("No message bundle for locale {}", code);
                (StatusCode::NOT_FOUND, "Not Found").into_response()
            }
            PageError::Bundle(e) => {
                error!("Failed to load message bundle: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

/// GET /robots.txt
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.robots.generate().to_text(),
    )
}

/// GET /sitemap.xml
pub async fn sitemap_xml(State(state): State<AppState>) -> impl IntoResponse {
    let entries = state.sitemap.generate();
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        SitemapGenerator::to_xml(&entries),
    )
}

/// GET /:locale
///
/// Paths that skipped locale resolution (`/favicon.ico`, `/api`) also land
/// here without a `Resolution` and answer 404.
pub async fn home_page(
    State(state): State<AppState>,
    resolution: Option<Extension<Resolution>>,
) -> Result<Html<String>, PageError> {
    let Extension(resolution) = resolution.ok_or(PageError::NotFound)?;
    render_page(&state, &resolution, SitePage::Home)
}

/// GET /:locale/:page
pub async fn page(
    State(state): State<AppState>,
    resolution: Option<Extension<Resolution>>,
    Path((_locale, page)): Path<(String, String)>,
) -> Result<Html<String>, PageError> {
    let Extension(resolution) = resolution.ok_or(PageError::NotFound)?;
    let page = SitePage::from_path(&page)
        .filter(|page| !page.is_root())
        .ok_or(PageError::NotFound)?;
    render_page(&state, &resolution, page)
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

fn render_page(
    state: &AppState,
    resolution: &Resolution,
    page: SitePage,
) -> Result<Html<String>, PageError> {
    let locale = resolution.locale;
    let bundle = state.bundles.load(locale)?;
    let messages = bundle.page(page.message_key()).ok_or(PageError::NotFound)?;
    let metadata = state.metadata.generate(locale, page)?;
    let structured_data = state.metadata.structured_data(locale)?;

    Ok(Html(render::page_html(&render::PageContext {
        config: &state.config,
        locale,
        page,
        bundle: &bundle,
        messages,
        metadata: &metadata,
        structured_data: &structured_data,
    })))
}
