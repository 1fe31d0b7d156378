use axum::{
    Json,
    extract::{FromRequest, Multipart, Request, multipart::Field},
    http::{StatusCode, header},
};
use serde_json::{Map, Value};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{FieldError, ProductFields},
    services::image_store::ImageStore,
};

const IMAGE_FIELD: &str = "productImage";

/// Product field set from a multipart form or a JSON body.
///
/// An attached image is run through the image store while the body is read,
/// so it is stored before validation or lookup happens.
#[derive(Debug)]
pub struct ProductPayload(pub ProductFields);

impl FromRequest<AppState> for ProductPayload {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| rejection(e.status(), e.body_text()))?;
            return read_multipart(multipart, &state.images).await.map(Self);
        }

        if content_type.starts_with("application/json") {
            let Json(body) = Json::<Map<String, Value>>::from_request(req, state)
                .await
                .map_err(|e| rejection(e.status(), e.body_text()))?;
            return Ok(Self(read_json(body)));
        }

        Ok(Self(ProductFields::default()))
    }
}

fn rejection(status: StatusCode, message: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::BadRequest(message)
    }
}

async fn read_multipart(mut multipart: Multipart, images: &ImageStore) -> Result<ProductFields> {
    let mut fields = ProductFields::default();

    while let Some(mut field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if let Some(file_name) = field.file_name().map(str::to_owned) {
            if name != IMAGE_FIELD {
                fields.unknown.push(name);
                continue;
            }
            if fields.product_image.is_some() {
                return Err(AppError::BadRequest(format!(
                    "Only one {} file is allowed",
                    IMAGE_FIELD
                )));
            }

            let content_type = field.content_type().unwrap_or_default().to_owned();
            let bytes = read_limited(&mut field, images.max_file_size()).await?;
            fields.product_image = images.store(&bytes, &file_name, &content_type).await?;
            continue;
        }

        match name.as_str() {
            "name" => fields.name = Some(field.text().await?),
            "details" => fields.details = Some(field.text().await?),
            "price" => fields.price = Some(field.text().await?),
            // a text value here never names a stored file
            IMAGE_FIELD => {}
            _ => fields.unknown.push(name),
        }
    }

    Ok(fields)
}

async fn read_limited(field: &mut Field<'_>, limit: usize) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();

    while let Some(chunk) = field.chunk().await? {
        if bytes.len() + chunk.len() > limit {
            return Err(AppError::PayloadTooLarge(format!(
                "File too large, limit is {} bytes",
                limit
            )));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

fn read_json(body: Map<String, Value>) -> ProductFields {
    let mut fields = ProductFields::default();

    for (key, value) in body {
        match key.as_str() {
            "name" => fields.name = string_value(&key, value, &mut fields.mistyped),
            "details" => fields.details = string_value(&key, value, &mut fields.mistyped),
            "price" => match value {
                Value::String(s) => fields.price = Some(s),
                Value::Number(n) => fields.price = Some(n.to_string()),
                _ => fields.mistyped.push(FieldError::not_a_number(&key)),
            },
            // JSON cannot carry the file itself
            IMAGE_FIELD => {
                if !value.is_string() {
                    fields.mistyped.push(FieldError::not_a_string(&key));
                }
            }
            _ => fields.unknown.push(key),
        }
    }

    fields
}

fn string_value(key: &str, value: Value, mistyped: &mut Vec<FieldError>) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => {
            mistyped.push(FieldError::not_a_string(key));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn json_numbers_become_price_text() {
        let fields = read_json(object(json!({
            "name": "Mint Chip",
            "details": "Cool mint with chocolate chips",
            "price": 49.95,
        })));

        assert_eq!(fields.price.as_deref(), Some("49.95"));
        assert!(fields.mistyped.is_empty());
        assert!(fields.product_image.is_none());
    }

    #[test]
    fn json_wrong_types_are_recorded() {
        let fields = read_json(object(json!({
            "name": 42,
            "details": null,
            "price": true,
        })));

        assert!(fields.name.is_none());
        assert_eq!(
            fields.mistyped,
            vec![
                FieldError::not_a_string("details"),
                FieldError::not_a_string("name"),
                FieldError::not_a_number("price"),
            ]
        );
    }

    #[test]
    fn json_image_string_never_becomes_stored_path() {
        let fields = read_json(object(json!({ "productImage": "uploads/banana.png" })));

        assert!(fields.product_image.is_none());
        assert!(fields.unknown.is_empty());
    }

    #[test]
    fn json_unknown_keys_collected() {
        let fields = read_json(object(json!({ "color": "green" })));
        assert_eq!(fields.unknown, vec!["color".to_string()]);
    }
}
