use crate::handlers;
use crate::services::prompt_client::PromptClient;
use actix_web::{web, Scope};

pub fn openai_routes(prompt_client: web::Data<PromptClient>) -> Scope {
    web::scope("/openai")
        .app_data(prompt_client)
        .route("/prompt", web::post().to(handlers::prompt_handler))
}
