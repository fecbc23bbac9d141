use actix_web::{App, HttpServer, middleware};
use slither_server::api::{configure_app, cors, AppState};
use slither_server::{banner, config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    // A missing .env is fine; everything has a default.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("ℹ️  No .env file loaded: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    log::info!(
        "🔧 slither: '{}' (timeout {}s), solc: '{}' (timeout {}s)",
        app_config.slither.program,
        app_config.slither.timeout_secs,
        app_config.solc.program,
        app_config.solc.timeout_secs
    );

    match &app_config.gemini {
        Some(gemini) => log::info!("🤖 AI editing enabled with {}", gemini.model),
        None => log::warn!("⚠️  GEMINI_API_KEY not set; /ai-chat will answer 500"),
    }

    let bind_addr = (app_config.host.clone(), app_config.port);
    let state = AppState::new(app_config);

    println!("🚀 Starting server on http://{}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(middleware::Logger::default())
            .configure(configure_app(state.clone()))
    })
    .bind(bind_addr)?
    .run()
    .await
}
