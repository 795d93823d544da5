use std::{error::Error, sync::Arc};

use actix_web::{web, App, HttpServer};
use dietplan_api::{render::Renderer, render::TemplateRenderer, routes, Config};
use log::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;
    log4rs::init_file(&config.log_config, Default::default())?;

    info!("Loading templates, static assets under {}", config.static_url);
    let renderer: Arc<dyn Renderer> = Arc::new(TemplateRenderer::new(&config.static_url)?);
    let renderer = web::Data::from(renderer);

    info!("Listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(renderer.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
