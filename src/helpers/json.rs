use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use serde_derive::Serialize;

/// Envelope shared by every JSON endpoint, successful or not.
#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) list: Option<Vec<T>>,
}

pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    id: Option<String>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_id(mut self, id: impl ToString) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub(crate) fn into_response(self, message: impl ToString) -> JsonResponse<T> {
        JsonResponse {
            message: message.to_string(),
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub fn ok(self, message: impl ToString) -> web::Json<JsonResponse<T>> {
        web::Json(self.into_response(message))
    }

    fn error(self, message: impl ToString, status: StatusCode) -> Error {
        let message = message.to_string();
        let body = HttpResponse::build(status).json(self.into_response(&message));
        InternalError::from_response(message, body).into()
    }

    pub fn bad_request(self, message: impl ToString) -> Error {
        self.error(message, StatusCode::BAD_REQUEST)
    }

    /// Validation failures carry the serialized field errors as the message.
    pub fn form_error(self, message: impl ToString) -> Error {
        self.error(message, StatusCode::BAD_REQUEST)
    }

    pub fn payment_required(self, message: impl ToString) -> Error {
        self.error(message, StatusCode::PAYMENT_REQUIRED)
    }

    pub fn not_found(self, message: impl ToString) -> Error {
        self.error(message, StatusCode::NOT_FOUND)
    }

    pub fn service_unavailable(self, message: impl ToString) -> Error {
        self.error(message, StatusCode::SERVICE_UNAVAILABLE)
    }
}
