//! Handlers for the product catalog.
//!
//! Listing returns the `{id, title, price, image}` projection; fetching by id
//! returns full documents. Create and update validate the body against the
//! product schema before any store write.

use axum::response::IntoResponse;
use robot_store_core::error::CoreError;
use robot_store_core::types::Document;
use robot_store_core::validation::validate_product;
use robot_store_db::models::product::ProductInput;
use robot_store_db::repositories::ProductRepo;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::middleware::params::{AppJson, AppQuery, IdPath};
use crate::middleware::session::Session;
use crate::response::Envelope;

/// Optional listing filters, combined with AND.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub character: Option<String>,
}

/// An empty filter value (`?category=`) behaves as if it were absent.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Run the product schema over a request body and map it onto the input DTO.
///
/// All violations are reported together, joined with `", "`.
fn validated_input(body: Document) -> AppResult<ProductInput> {
    let result = validate_product(&body);
    if !result.is_valid() {
        return Err(CoreError::Validation(result.joined(", ")).into());
    }

    serde_json::from_value(Value::Object(body))
        .map_err(|err| CoreError::Validation(err.to_string()).into())
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// GET /api/products?category=&character=
pub async fn list_products(
    AppQuery(query): AppQuery<ProductQuery>,
    mut session: Session,
) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::list(
        &mut *session,
        non_empty(&query.category),
        non_empty(&query.character),
    )
    .await?;

    Ok(Envelope::ok("Successfully retrieved products", products))
}

/// GET /api/products/{id}
///
/// Returns a list holding the matching product, or an empty list.
pub async fn get_product(
    IdPath(id): IdPath,
    mut session: Session,
) -> AppResult<impl IntoResponse> {
    let products = ProductRepo::find_by_id(&mut *session, id).await?;

    Ok(Envelope::ok("Successfully retrieved product", products))
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// POST /api/products
///
/// Responds with `data: "id: <newId>"`. A failed insert is reported as a
/// client error.
pub async fn create_product(
    mut session: Session,
    AppJson(body): AppJson<Document>,
) -> AppResult<impl IntoResponse> {
    let input = validated_input(body)?;

    let id = ProductRepo::create(&mut *session, &input)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "Product insert failed");
            AppError::BadRequest("Failed to create product".into())
        })?;

    tracing::info!(product_id = %id, title = %input.title, "Product created");

    Ok(Envelope::ok("Successfully created product", format!("id: {id}")))
}

/// PUT /api/products/{id}
///
/// Replaces all product fields. Fails if nothing changed.
pub async fn update_product(
    IdPath(id): IdPath,
    mut session: Session,
    AppJson(body): AppJson<Document>,
) -> AppResult<impl IntoResponse> {
    let input = validated_input(body)?;

    let modified = ProductRepo::update(&mut *session, id, &input).await?;
    if modified == 0 {
        return Err(CoreError::Unchanged("Failed to update product".into()).into());
    }

    tracing::info!(product_id = %id, modified, "Product updated");

    Ok(Envelope::empty("Successfully updated product"))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    IdPath(id): IdPath,
    mut session: Session,
) -> AppResult<impl IntoResponse> {
    let deleted = ProductRepo::delete(&mut *session, id).await?;
    if deleted == 0 {
        return Err(CoreError::Unchanged("Failed to delete product".into()).into());
    }

    tracing::info!(product_id = %id, "Product deleted");

    Ok(Envelope::empty("Successfully deleted product"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn body(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn valid_body_maps_onto_input() {
        let input = validated_input(body(json!({
            "title": "Laser Mug",
            "price": 12.5,
            "category_id": 3,
            "category": "Mugs",
            "character_id": 4,
            "character": "Rex",
            "colour": "ignored",
        })))
        .unwrap();
        assert_eq!(input.title, "Laser Mug");
        assert_eq!(input.image, None);
        assert!(!input.to_document().unwrap().contains_key("colour"));
    }

    #[test]
    fn invalid_body_reports_joined_messages() {
        let err = validated_input(body(json!({"title": "Hi"}))).unwrap_err();
        assert_matches!(
            err,
            AppError::Core(CoreError::Validation(msg))
                if msg.starts_with("title length must be between 5 and 255 characters, price is required")
        );
    }
}
