use actix_web::{middleware, web, App, HttpServer};
use calcwatch::api::{configure_routes, AppState};
use calcwatch::banner;
use calcwatch::config::ClientConfig;
use calcwatch::synchronizer::Synchronizer;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    // A .env file is optional; the environment and defaults cover everything.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("ℹ️  No .env file loaded: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ClientConfig::from_env().map_err(std::io::Error::other)?;
    let state = AppState::new(config).map_err(std::io::Error::other)?;

    println!("🔗 Evaluation service: {}", state.config.api_base);
    println!("📊 Dashboard available at http://{}", state.config.bind_addr);

    // Lives as long as the server; dropped (and cancelled) on shutdown.
    let list_poller = state.list.mount(state.config.list_interval);

    let bind_addr = state.config.bind_addr.clone();
    let result = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .workers(1)
    .bind(bind_addr)?
    .run()
    .await;

    list_poller.cancel();
    result
}
