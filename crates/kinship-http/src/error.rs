use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kinship_core::{ExError, ExErrorKind};
use serde::Serialize;

/// Error body returned by every failing route
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: &'static str,
}

/// An `ExError` rendered as an HTTP response
///
/// Client errors carry their message. Anything else is logged and answered
/// with a generic `Server error`.
#[derive(Debug)]
pub struct ApiError(pub ExError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ExErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ExErrorKind::NotFound => StatusCode::NOT_FOUND,
            ExErrorKind::AlreadyExists => StatusCode::CONFLICT,
            ExErrorKind::Serialization
            | ExErrorKind::Persistence
            | ExErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ExError> for ApiError {
    fn from(err: ExError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(
                err_code = self.0.code(),
                request_id = self.0.request_id().map(|r| r.as_str()),
                error = %self.0,
                "request failed"
            );
            "Server error".to_string()
        } else {
            self.0.message().to_string()
        };

        let body = ErrorBody {
            message,
            code: self.0.code(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ExErrorKind::InvalidInput, StatusCode::BAD_REQUEST),
            (ExErrorKind::NotFound, StatusCode::NOT_FOUND),
            (ExErrorKind::AlreadyExists, StatusCode::CONFLICT),
            (ExErrorKind::Persistence, StatusCode::INTERNAL_SERVER_ERROR),
            (ExErrorKind::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (kind, status) in cases {
            assert_eq!(ApiError(ExError::new(kind)).status(), status, "{:?}", kind);
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        use http_body_util::BodyExt;
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_server_error_hides_message() {
        let err = ExError::new(ExErrorKind::Persistence).with_message("disk I/O error at page 7");
        let response = ApiError(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Server error");
        assert_eq!(body["code"], "ERR_PERSISTENCE");
        assert!(!body.to_string().contains("disk I/O"));
    }

    #[tokio::test]
    async fn test_client_error_keeps_message() {
        let err = ExError::new(ExErrorKind::InvalidInput).with_message("Invalid name: blank");
        let response = ApiError(err).into_response();

        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid name: blank");
        assert_eq!(body["code"], "ERR_INVALID_INPUT");
    }
}
