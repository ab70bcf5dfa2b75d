use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::io;
use std::sync::Arc;

mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod services;

use config::Config;
use services::prompt_client::PromptClient;
use services::transport::ReqwestTransport;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let prompt_client = web::Data::new(PromptClient::with_options(
        Arc::new(ReqwestTransport::new()),
        config.openai_key.clone(),
        config.prompt_options(),
    ));

    info!(
        "listening on {} model={} response_mode={}",
        config.bind_address(),
        config.openai_model,
        config.response_mode
    );

    HttpServer::new(move || {
        App::new().service(
            web::scope("/v1").service(routes::openai::openai_routes(prompt_client.clone())),
        )
    })
    .bind(config.bind_address())?
    .run()
    .await
}
