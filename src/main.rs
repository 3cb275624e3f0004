use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use blog_service::db::{BlogRepo, PgBlogRepo};
use blog_service::handlers;
use blog_service::mailer::{Mailer, SmtpMailer};
use blog_service::Config;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn health_summary(pool: web::Data<PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "blog-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
        Err(e) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": format!("PostgreSQL connection failed: {}", e),
            "service": "blog-service"
        })),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    if cfg!(debug_assertions) {
        dotenvy::dotenv().ok();
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting blog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let pool = match PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database pool creation failed: {:#}", e);
            eprintln!("ERROR: Failed to create database pool: {}", e);
            std::process::exit(1);
        }
    };

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("migration failed: {e}")))?;

    tracing::info!("Connected to database, migrations applied");

    let mailer = SmtpMailer::new(&config.email)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("mailer init failed: {e}")))?;
    if !mailer.is_enabled() {
        tracing::warn!("share emails will be logged, not delivered (no SMTP host)");
    }

    let repo: Arc<dyn BlogRepo> = Arc::new(PgBlogRepo::new(pool.clone()));
    let mailer: Arc<dyn Mailer> = Arc::new(mailer);

    let repo_data = web::Data::from(repo);
    let mailer_data = web::Data::from(mailer);
    let site_data = web::Data::new(config.site.clone());
    let pool_data = web::Data::new(pool);

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!("Starting HTTP server at {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(repo_data.clone())
            .app_data(mailer_data.clone())
            .app_data(site_data.clone())
            .app_data(pool_data.clone())
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .route("/health", web::get().to(health_summary))
            .configure(handlers::configure)
    })
    .bind(&bind_address)?
    .run()
    .await
}
