use crate::routing::enums::routing_error::RoutingError;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for RoutingError {
    fn status_code(&self) -> StatusCode {
        match self {
            RoutingError::Store(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status)
            .content_type(ContentType::plaintext())
            .body(status.canonical_reason().unwrap_or_default())
    }
}
