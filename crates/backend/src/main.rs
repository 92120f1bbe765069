use backend::{handlers, shared, system};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Keep application logs, silence per-query SQL noise
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Simple request logging middleware
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let duration = start.elapsed();
        tracing::info!(
            "{:>5}ms | {} {:>6} {}",
            duration.as_millis(),
            response.status().as_u16(),
            method,
            uri.path()
        );
        response
    }

    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;
    shared::data::db::initialize_database(db_path.to_str())
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    // Account table and first superuser
    system::initialization::apply_system_migration().await?;
    system::initialization::ensure_superuser_exists().await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM: ACCOUNTS
        // ========================================
        .route(
            "/api/system/users",
            get(system::handlers::users::list).post(system::handlers::users::create),
        )
        .route(
            "/api/system/users/superuser",
            post(system::handlers::users::create_superuser),
        )
        .route(
            "/api/system/users/:id",
            get(system::handlers::users::get_by_id)
                .put(system::handlers::users::update)
                .delete(system::handlers::users::delete),
        )
        // ========================================
        // ADMINISTRATION
        // ========================================
        .route("/api/admin/registry", get(handlers::admin::get_registry))
        // ========================================
        // CULTURAL REFERENCE DATA
        // ========================================
        .route(
            "/api/ethnic-groups",
            get(handlers::a001_ethnic_group::list_all).post(handlers::a001_ethnic_group::upsert),
        )
        .route(
            "/api/ethnic-groups/:id",
            get(handlers::a001_ethnic_group::get_by_id).delete(handlers::a001_ethnic_group::delete),
        )
        .route(
            "/api/ethnic-groups/testdata",
            post(handlers::a001_ethnic_group::insert_test_data),
        )
        .route(
            "/api/ethnic-groups/:id/languages",
            get(handlers::a002_language::list_by_ethnic_group),
        )
        .route(
            "/api/languages",
            get(handlers::a002_language::list_all).post(handlers::a002_language::upsert),
        )
        .route(
            "/api/languages/:id",
            get(handlers::a002_language::get_by_id).delete(handlers::a002_language::delete),
        )
        // ========================================
        // MEDIA AND EVENTS
        // ========================================
        .route(
            "/api/podcasts",
            get(handlers::a003_podcast::list_all).post(handlers::a003_podcast::upsert),
        )
        .route(
            "/api/podcasts/:id",
            get(handlers::a003_podcast::get_by_id).delete(handlers::a003_podcast::delete),
        )
        .route(
            "/api/events",
            get(handlers::a004_event::list_all).post(handlers::a004_event::upsert),
        )
        .route(
            "/api/events/:id",
            get(handlers::a004_event::get_by_id).delete(handlers::a004_event::delete),
        )
        .route(
            "/api/marketplace-items",
            get(handlers::a005_marketplace_item::list_all)
                .post(handlers::a005_marketplace_item::upsert),
        )
        .route(
            "/api/marketplace-items/:id",
            get(handlers::a005_marketplace_item::get_by_id)
                .delete(handlers::a005_marketplace_item::delete),
        )
        // ========================================
        // LEARNING
        // ========================================
        .route(
            "/api/themes",
            get(handlers::a006_theme::list_all).post(handlers::a006_theme::upsert),
        )
        .route(
            "/api/themes/:id",
            get(handlers::a006_theme::get_by_id).delete(handlers::a006_theme::delete),
        )
        .route(
            "/api/themes/testdata",
            post(handlers::a006_theme::insert_test_data),
        )
        .route(
            "/api/courses",
            get(handlers::a007_course::list_all).post(handlers::a007_course::upsert),
        )
        .route(
            "/api/courses/:id",
            get(handlers::a007_course::get_by_id).delete(handlers::a007_course::delete),
        )
        .route(
            "/api/courses/:id/lessons",
            get(handlers::a008_lesson::list_by_course),
        )
        .route(
            "/api/courses/:id/learning-items",
            get(handlers::a009_learning_item::list_by_course),
        )
        .route(
            "/api/lessons",
            get(handlers::a008_lesson::list_all).post(handlers::a008_lesson::upsert),
        )
        .route(
            "/api/lessons/:id",
            get(handlers::a008_lesson::get_by_id).delete(handlers::a008_lesson::delete),
        )
        .route(
            "/api/learning-items",
            get(handlers::a009_learning_item::list_all).post(handlers::a009_learning_item::upsert),
        )
        .route(
            "/api/learning-items/:id",
            get(handlers::a009_learning_item::get_by_id)
                .delete(handlers::a009_learning_item::delete),
        )
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], 3000).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port 3000 is already in use. Please ensure no other process is using this port."
                );
            } else {
                tracing::error!("Failed to bind to port 3000. Error: {}", e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
