use crate::error::{Error, TransportError};
use crate::models::completion::ChatCompletion;
use crate::models::prompt::PromptInput;
use crate::services::prompt_client::PromptClient;
use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde::Deserialize;
use serde_json::json;

pub async fn prompt_handler(
    input: web::Json<PromptInput>,
    prompt_client: web::Data<PromptClient>,
) -> impl Responder {
    match prompt_client.prompt(&input.prompt).await {
        Ok(None) => HttpResponse::NoContent().finish(),
        Ok(Some(completion)) => {
            let content = ChatCompletion::deserialize(&completion)
                .ok()
                .and_then(|parsed| parsed.first_content().map(str::to_owned));

            HttpResponse::Ok().json(json!({
                "completion": completion,
                "content": content
            }))
        }
        Err(service_err) => {
            error!("Prompt service error: {:?}", service_err);

            let mut response = match &service_err {
                Error::Transport(TransportError::InvalidHeader(_)) => {
                    HttpResponse::InternalServerError()
                }
                Error::Transport(_) => HttpResponse::BadGateway(),
                _ => HttpResponse::InternalServerError(),
            };
            response.json(json!({
                "error": "Failed to complete prompt",
                "details": service_err.to_string()
            }))
        }
    }
}
