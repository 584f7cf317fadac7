//! Development server implementation.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Form, Query, State,
    },
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{any, get, MethodRouter},
    Router,
};
use serde::Deserialize;
use tokio::sync::RwLock;
use tower_http::services::ServeDir;

use galaxy_content::{CategoryFilter, ContactForm, ContactFormInput, Content};
use galaxy_render::{AssetPipeline, Notice, Page, RenderError, RenderOptions, SiteRenderer};

use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{reload_client_script, ReloadHub, ReloadMessage};

const RELOAD_PATH: &str = "/__reload";

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Directory holding `site.yaml` and `portfolio.yaml`
    pub content_dir: PathBuf,

    /// Directory served for any path without a page
    pub public_dir: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Site title; defaults to the business name from content
    pub title: Option<String>,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            public_dir: PathBuf::from("public"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            title: None,
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),

    #[error("Failed to load content: {0}")]
    Content(#[from] galaxy_content::ContentError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Shared server state.
struct ServerState {
    config: DevServerConfig,
    renderer: SiteRenderer,
    reload: ReloadHub,
}

type SharedState = Arc<RwLock<ServerState>>;

impl ServerState {
    fn new(config: DevServerConfig, content: Content) -> Self {
        let renderer = SiteRenderer::new(
            content,
            RenderOptions {
                title: config.title.clone(),
                dev_reload: true,
                public_dir: Some(config.public_dir.clone()),
                ..RenderOptions::default()
            },
        );

        Self {
            config,
            renderer,
            reload: ReloadHub::new(),
        }
    }
}

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Start the development server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr_str = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = addr_str
            .parse()
            .map_err(|_| ServerError::InvalidAddress(addr_str.clone()))?;

        let content = Content::load(&self.config.content_dir)?;
        let state = Arc::new(RwLock::new(ServerState::new(self.config.clone(), content)));

        let watch_paths = vec![
            self.config.content_dir.clone(),
            self.config.public_dir.clone(),
        ];

        let (watcher, mut rx) =
            FileWatcher::new(&watch_paths).map_err(|e| ServerError::WatchError(e.to_string()))?;

        let state_clone = Arc::clone(&state);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                handle_watch_event(&state_clone, event).await;
            }
            // Keep watcher alive
            drop(watcher);
        });

        let app = router(state, &self.config);

        tracing::info!("Starting dev server at http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::warn!("Could not open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

fn router(state: SharedState, config: &DevServerConfig) -> Router {
    let fallback: MethodRouter = any(page_handler).with_state(Arc::clone(&state));
    let public = ServeDir::new(&config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(fallback);

    let mut router = Router::new();
    for page in Page::NAV {
        let method_router = match page {
            Page::Contact => get(page_handler).post(submit_handler),
            _ => get(page_handler),
        };
        for path in page.route_paths() {
            router = router.route(&path, method_router.clone());
        }
    }

    router
        .route("/assets/main.css", get(css_handler))
        .route("/assets/main.js", get(js_handler))
        .route(RELOAD_PATH, get(ws_handler))
        .route("/__reload.js", get(reload_script_handler))
        .fallback_service(public)
        .with_state(state)
}

/// Handle file watch events.
async fn handle_watch_event(state: &SharedState, event: WatchEvent) {
    if let WatchEvent::ContentChanged(path) = &event {
        tracing::info!("Content changed: {}", path.display());

        let mut state = state.write().await;
        match Content::load(&state.config.content_dir) {
            Ok(content) => state.renderer.set_content(content),
            Err(e) => {
                tracing::warn!("Keeping previous content: {}", e);
                return;
            }
        }
        state.reload.send(ReloadMessage::Reload);
        return;
    }

    tracing::info!("Public file changed: {}", event.path().display());
    state.read().await.reload.send(ReloadMessage::Reload);
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    category: Option<String>,
}

/// Render whichever page the request path resolves to; unknown paths get a 404.
async fn page_handler(
    State(state): State<SharedState>,
    uri: Uri,
    Query(query): Query<PageQuery>,
) -> Result<Response, ServerError> {
    let page = Page::resolve(uri.path());
    let state = state.read().await;

    let html = match page {
        Page::Portfolio => state
            .renderer
            .render_portfolio(category_filter(query.category.as_deref()))?,
        Page::NotFound => {
            let html = state.renderer.render_not_found()?;
            return Ok((StatusCode::NOT_FOUND, Html(html)).into_response());
        }
        page => state.renderer.render(page)?,
    };

    Ok(Html(html).into_response())
}

fn category_filter(name: Option<&str>) -> CategoryFilter {
    match name {
        None => CategoryFilter::All,
        Some(name) => name.parse().unwrap_or_else(|e| {
            tracing::warn!("{}; showing all projects", e);
            CategoryFilter::All
        }),
    }
}

/// Validate a posted contact form. Invalid input is answered with 422 and the errors.
async fn submit_handler(
    State(state): State<SharedState>,
    Form(input): Form<ContactFormInput>,
) -> Result<Response, ServerError> {
    let state = state.read().await;
    let mut form = ContactForm::with_values(input);

    match form.submit() {
        Ok(request) => {
            tracing::info!(
                name = %request.name,
                email = %request.email,
                phone = %request.phone,
                service = %request.service,
                message = %request.message,
                "Contact form submission (not sent)"
            );
            let html = state
                .renderer
                .render_contact(&form, Some(&Notice::submitted()))?;
            Ok(Html(html).into_response())
        }
        Err(errors) => {
            tracing::debug!("Contact form rejected: {} invalid fields", errors.len());
            let html = state.renderer.render_contact(&form, None)?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response())
        }
    }
}

async fn css_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        AssetPipeline::generate_css(),
    )
}

async fn js_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        AssetPipeline::generate_js(),
    )
}

/// Handler for the live reload WebSocket endpoint.
async fn ws_handler(ws: WebSocketUpgrade, State(state): State<SharedState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Forward reload messages to one browser until it disconnects.
async fn handle_ws(mut socket: WebSocket, state: SharedState) {
    let mut rx = state.read().await.reload.subscribe();

    if send_message(&mut socket, &ReloadMessage::Connected)
        .await
        .is_err()
    {
        return;
    }

    while let Ok(msg) = rx.recv().await {
        if send_message(&mut socket, &msg).await.is_err() {
            break;
        }
    }
}

async fn send_message(socket: &mut WebSocket, msg: &ReloadMessage) -> Result<(), ()> {
    let json = serde_json::to_string(msg).map_err(|e| {
        tracing::warn!("Failed to encode reload message: {}", e);
    })?;
    socket.send(Message::Text(json.into())).await.map_err(|_| ())
}

async fn reload_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        reload_client_script(RELOAD_PATH),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;
    use std::fs;
    use tempfile::tempdir;

    fn state() -> SharedState {
        Arc::new(RwLock::new(ServerState::new(
            DevServerConfig::default(),
            Content::default(),
        )))
    }

    async fn body(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn valid_input() -> ContactFormInput {
        ContactFormInput {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "4035550101".to_string(),
            service: "Countertops".to_string(),
            message: "New quartz counters for the kitchen".to_string(),
        }
    }

    #[test]
    fn creates_server_with_default_config() {
        let server = DevServer::new(DevServerConfig::default());
        assert_eq!(server.config.port, 7777);
        assert_eq!(server.config.host, "127.0.0.1");
    }

    async fn get_page(uri: &str) -> Response {
        let app = router(state(), &DevServerConfig::default());
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn home_includes_reload_script() {
        let response = get_page("/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = body(response).await;
        assert!(html.contains(r#"data-page="home""#));
        assert!(html.contains("/__reload.js"));
    }

    #[tokio::test]
    async fn serves_every_form_of_page_path() {
        let cases = [
            ("/", "home"),
            ("/index.html", "home"),
            ("/portfolio", "portfolio"),
            ("/portfolio/", "portfolio"),
            ("/portfolio/index.html", "portfolio"),
            ("/contact", "contact"),
            ("/contact/", "contact"),
            ("/contact/index.html", "contact"),
        ];

        for (uri, page) in cases {
            let response = get_page(uri).await;

            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
            assert!(
                body(response).await.contains(&format!(r#"data-page="{}""#, page)),
                "{}",
                uri
            );
        }
    }

    #[tokio::test]
    async fn portfolio_filters_by_query() {
        let html = body(get_page("/portfolio/?category=basements").await).await;

        assert!(html.contains("card-portfolio-base-01"));
        assert!(!html.contains("card-portfolio-kitchen-01"));
    }

    #[tokio::test]
    async fn unknown_category_shows_everything() {
        let html = body(get_page("/portfolio?category=Roofing").await).await;

        assert!(html.contains("card-portfolio-kitchen-01"));
        assert!(html.contains("card-portfolio-base-02"));
    }

    #[tokio::test]
    async fn invalid_submission_is_rejected() {
        let input = ContactFormInput {
            email: "not-an-email".to_string(),
            ..valid_input()
        };

        let response = submit_handler(State(state()), Form(input)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let html = body(response).await;
        assert!(html.contains(r#"data-testid="status-error-email">Please enter a valid email</div>"#));
        assert!(html.contains(r#"value="Jane Doe""#));
        assert!(!html.contains("data-toast"));
    }

    #[tokio::test]
    async fn valid_submission_resets_form() {
        let response = submit_handler(State(state()), Form(valid_input()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body(response).await;
        assert!(html.contains("Message ready to send"));
        assert!(!html.contains(r#"value="Jane Doe""#));
        assert!(html.contains(r#"<option value="Not sure" selected>"#));
    }

    #[tokio::test]
    async fn posts_to_contact_index_are_validated() {
        let app = router(state(), &DevServerConfig::default());
        let request = Request::builder()
            .method("POST")
            .uri("/contact/index.html")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=J&email=j%40example.com"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body(response)
            .await
            .contains(r#"data-testid="status-error-name">Please enter your name</div>"#));
    }

    #[tokio::test]
    async fn not_found_page_has_404_status() {
        let response = get_page("/about").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body(response).await.contains(r#"data-page="not-found""#));
    }

    #[tokio::test]
    async fn content_change_reloads_renderer() {
        let temp = tempdir().unwrap();
        let config = DevServerConfig {
            content_dir: temp.path().to_path_buf(),
            ..Default::default()
        };
        let state = Arc::new(RwLock::new(ServerState::new(config, Content::default())));
        let mut rx = state.read().await.reload.subscribe();

        let path = temp.path().join("portfolio.yaml");
        fs::write(
            &path,
            "- { id: pantry-01, title: Pantry wall, category: Cabinets, location: Calgary }\n",
        )
        .unwrap();

        handle_watch_event(&state, WatchEvent::ContentChanged(path)).await;

        assert_eq!(state.read().await.renderer.content().portfolio.len(), 1);
        assert_eq!(rx.try_recv().unwrap(), ReloadMessage::Reload);
    }

    #[tokio::test]
    async fn invalid_content_keeps_previous() {
        let temp = tempdir().unwrap();
        let config = DevServerConfig {
            content_dir: temp.path().to_path_buf(),
            ..Default::default()
        };
        let state = Arc::new(RwLock::new(ServerState::new(config, Content::default())));

        let path = temp.path().join("portfolio.yaml");
        fs::write(&path, "- { id: a, category: Roofing }\n").unwrap();

        handle_watch_event(&state, WatchEvent::ContentChanged(path)).await;

        assert_eq!(state.read().await.renderer.content().portfolio.len(), 6);
    }

    #[tokio::test]
    async fn server_error_is_internal_error() {
        let response = ServerError::WatchError("boom".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
