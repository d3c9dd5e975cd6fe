use axum::{
    body::Body,
    extract::{rejection::FormRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Form,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::core::error::AppError;

/// Custom form extractor that provides consistent error responses.
///
/// The body is read as raw key/value pairs first; a key sent more than once
/// keeps its last value. Values reach `T` as strings, so target fields are
/// `String` or `Option<String>`.
pub struct AppForm<T>(pub T);

impl<T, S> FromRequest<S> for AppForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppFormRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(AppFormRejection::Form)?;

        serde_json::from_value(Value::Object(fold_pairs(pairs)))
            .map(Self)
            .map_err(AppFormRejection::Fields)
    }
}

fn fold_pairs(pairs: Vec<(String, String)>) -> Map<String, Value> {
    let mut fields = Map::new();
    for (key, value) in pairs {
        fields.insert(key, Value::String(value));
    }
    fields
}

pub enum AppFormRejection {
    Form(FormRejection),
    Fields(serde_json::Error),
}

impl IntoResponse for AppFormRejection {
    fn into_response(self) -> Response {
        let message = match self {
            AppFormRejection::Form(FormRejection::FailedToDeserializeForm(err)) => {
                format!("Invalid form data: {}", err)
            }
            AppFormRejection::Form(FormRejection::FailedToDeserializeFormBody(err)) => {
                format!("Invalid form body: {}", err)
            }
            // Content type and body size rejections keep their own status
            AppFormRejection::Form(other) => return other.into_response(),
            AppFormRejection::Fields(err) => format!("Invalid form fields: {}", err),
        };

        AppError::BadRequest(message).into_response()
    }
}
