mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::ai::{routes as ai_routes, AiService};
use crate::features::company::{routes as company_routes, CompanyService};
use crate::features::homepage::{routes as homepage_routes, HomeAssemblyService, HomepageService};
use crate::features::images::{
    default_registry, routes as images_routes, ImageService, UsageTracker,
};
use crate::features::leads::{routes as leads_routes, LeadService};
use crate::features::listings::{routes as listings_routes, ListingService};
use crate::features::pages::{routes as pages_routes, PageService, PublicPageState};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Log system info
    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations automatically
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Initialize MinIO client for storage
    let minio_client = Arc::new(
        modules::storage::MinIOClient::new(config.minio.clone())
            .await
            .map_err(|e| anyhow::anyhow!("Failed to initialize MinIO client: {}", e))?,
    );
    // Ensure bucket exists (create if not)
    minio_client
        .ensure_bucket_exists()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to ensure MinIO bucket exists: {}", e))?;
    tracing::info!(
        "MinIO client initialized for bucket: {}",
        minio_client.bucket_name()
    );

    // Usage tracker keeps the image reverse index in sync across features
    let tracker = Arc::new(UsageTracker::new(pool.clone(), Arc::new(default_registry())));
    tracing::info!("Image usage tracker initialized");

    // Initialize Image Service
    let image_service = Arc::new(ImageService::new(
        pool.clone(),
        Arc::clone(&minio_client),
        Arc::clone(&tracker),
    ));
    tracing::info!("Image service initialized");

    // Initialize Page Service
    let page_service = Arc::new(PageService::new(pool.clone(), Arc::clone(&tracker)));
    tracing::info!("Page service initialized");

    // Initialize Homepage Services
    let homepage_service = Arc::new(HomepageService::new(pool.clone(), Arc::clone(&tracker)));
    let home_assembly_service = Arc::new(HomeAssemblyService::new(pool.clone()));
    tracing::info!("Homepage services initialized");

    // Initialize Listing Service
    let listing_service = Arc::new(ListingService::new(pool.clone(), Arc::clone(&tracker)));
    tracing::info!("Listing service initialized");

    // Initialize Lead Service
    let lead_service = Arc::new(LeadService::new(pool.clone()));
    tracing::info!("Lead service initialized");

    // Initialize Company Service
    let company_service = Arc::new(CompanyService::new(pool.clone(), Arc::clone(&tracker)));
    tracing::info!("Company service initialized");

    // Initialize AI Service (mounted even without an API key; requests
    // without a key get a structured failure instead of a 500)
    let ai_service = Arc::new(
        AiService::new(config.ai.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize AI service: {}", e))?,
    );
    if config.ai.api_key.is_some() {
        tracing::info!("AI service initialized (model: {})", config.ai.model);
    } else {
        tracing::warn!("AI service initialized without OPENROUTER_API_KEY; generation disabled");
    }

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Build swagger router
    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(
                Arc::new(credentials),
                "Swagger UI",
            )))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Staff routes (require HTTP basic auth)
    let staff_credentials = Arc::new(config.staff_auth.credentials());
    let staff_routes = Router::new()
        .merge(images_routes::admin_routes(Arc::clone(&image_service)))
        .merge(pages_routes::admin_routes(Arc::clone(&page_service)))
        .merge(homepage_routes::admin_routes(Arc::clone(&homepage_service)))
        .merge(listings_routes::admin_routes(Arc::clone(&listing_service)))
        .merge(leads_routes::admin_routes(Arc::clone(&lead_service)))
        .merge(company_routes::admin_routes(Arc::clone(&company_service)))
        .merge(ai_routes::admin_routes(Arc::clone(&ai_service)))
        .route_layer(from_fn(middleware::basic_auth_middleware(
            staff_credentials,
            "TrustBuild Staff",
        )));

    // Simple health check endpoint (no auth required)
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public routes (no auth required)
    let public_page_state = PublicPageState {
        pages: Arc::clone(&page_service),
        home: Arc::clone(&home_assembly_service),
        listings: Arc::clone(&listing_service),
    };
    let public_routes = Router::new()
        .merge(pages_routes::routes(public_page_state))
        .merge(listings_routes::routes(Arc::clone(&listing_service)))
        .merge(leads_routes::routes(Arc::clone(&lead_service)))
        .merge(company_routes::routes(Arc::clone(&company_service)));

    let app = Router::new()
        .merge(swagger)
        .merge(staff_routes)
        .merge(public_routes)
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
