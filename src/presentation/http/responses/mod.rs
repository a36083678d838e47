use std::collections::BTreeMap;

use poem_openapi::{ApiResponse, Object, payload::Json};

use crate::presentation::http::validators::FieldErrors;

#[derive(Object, Debug)]
pub struct ValidationErrorDto {
    pub status: String,
    pub message: String,
    pub data: BTreeMap<String, Vec<String>>,
}

#[derive(ApiResponse)]
pub enum ValidationFailedResponse {
    /// The request payload failed validation; `data` lists the errors per field.
    #[oai(status = 422)]
    UnprocessableEntity(Json<ValidationErrorDto>),
}

impl ValidationFailedResponse {
    pub fn new(message: impl Into<String>, errors: FieldErrors) -> Self {
        ValidationFailedResponse::UnprocessableEntity(Json(ValidationErrorDto {
            status: "error".to_string(),
            message: message.into(),
            data: errors.into_inner(),
        }))
    }
}

impl From<FieldErrors> for ValidationFailedResponse {
    fn from(errors: FieldErrors) -> Self {
        Self::new("validation errors while handling request", errors)
    }
}

#[cfg(test)]
mod tests {
    use poem::{IntoResponse, http::StatusCode};
    use serde_json::{Value, json};

    use super::ValidationFailedResponse;
    use crate::presentation::http::validators::FieldErrors;

    #[tokio::test]
    async fn renders_field_errors_as_unprocessable_entity() {
        let mut errors = FieldErrors::new();
        errors.add("to", "The to field is required");

        let response = ValidationFailedResponse::new("validation errors while sending message", errors)
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = response.into_body().into_string().await.unwrap();
        let body: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            body,
            json!({
                "status": "error",
                "message": "validation errors while sending message",
                "data": { "to": ["The to field is required"] }
            })
        );
    }
}
