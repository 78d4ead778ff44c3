use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError};
use campground_services::CampgroundError;
use minijinja::context;

use crate::templates;

/// Message shown for every failure that maps to a 500.
pub const GENERIC_ERROR_MESSAGE: &str = "Oh no, Something went wrong";

/// Every failure a request can end in.
///
/// All handlers return this type; `error_response` is the only place that
/// turns a failure into a page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A campground validation or store failure
    #[error(transparent)]
    Campground(#[from] CampgroundError),

    /// No route matches the request
    #[error("Page Not Found")]
    RouteNotFound,

    /// The request body could not be decoded
    #[error("{0}")]
    BadRequest(String),

    /// A page template failed to render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl AppError {
    /// Message shown on the error page. Server-side failures never leak detail.
    pub fn message(&self) -> String {
        match self {
            AppError::Campground(CampgroundError::NotFound)
            | AppError::Campground(CampgroundError::InvalidIdentifier(_)) => {
                "Campground not found".to_string()
            }
            _ if self.status_code().is_server_error() => GENERIC_ERROR_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Campground(CampgroundError::Validation(_)) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Campground(CampgroundError::NotFound)
            | AppError::Campground(CampgroundError::InvalidIdentifier(_))
            | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Campground(CampgroundError::Database(_)) | AppError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("❌ Request failed: {}", self);
        } else {
            log::debug!("Request rejected with {}: {}", status, self);
        }

        let message = self.message();
        match templates::render(
            "error.html",
            context! { status => status.as_u16(), message => &message },
        ) {
            Ok(html) => HttpResponse::build(status)
                .content_type(ContentType::html())
                .body(html),
            Err(e) => {
                log::error!("❌ Failed to render error page: {}", e);
                HttpResponse::build(status)
                    .content_type(ContentType::plaintext())
                    .body(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;

    fn body_text(response: HttpResponse) -> String {
        let bytes = response.into_body().try_into_bytes().unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                AppError::Campground(CampgroundError::Validation("\"title\" is required".into())),
                400,
            ),
            (AppError::BadRequest("bad body".into()), 400),
            (AppError::Campground(CampgroundError::NotFound), 404),
            (
                AppError::Campground(CampgroundError::InvalidIdentifier("x".into())),
                404,
            ),
            (AppError::RouteNotFound, 404),
            (
                AppError::Campground(CampgroundError::Database(sqlx_pool_closed())),
                500,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.status_code().as_u16(), expected, "{:?}", error);
        }
    }

    #[test]
    fn test_validation_message_is_shown() {
        let error =
            AppError::Campground(CampgroundError::Validation("\"title\" is required".into()));
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_text(response);
        assert!(body.contains("&quot;title&quot; is required"));
        assert!(body.contains("400"));
    }

    #[test]
    fn test_server_errors_use_generic_message() {
        let error = AppError::Campground(CampgroundError::Database(sqlx_pool_closed()));
        assert_eq!(error.message(), GENERIC_ERROR_MESSAGE);
        let body = body_text(error.error_response());
        assert!(body.contains(GENERIC_ERROR_MESSAGE));
        assert!(!body.contains("pool"));
    }

    #[test]
    fn test_route_not_found_page() {
        let response = AppError::RouteNotFound.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).contains("Page Not Found"));
    }

    fn sqlx_pool_closed() -> sqlx::Error {
        sqlx::Error::PoolClosed
    }
}
