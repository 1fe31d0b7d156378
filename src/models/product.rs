use serde::{Deserialize, Serialize};

use super::FieldError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub details: String,
    /// Kept as submitted; validated as a number on the way in.
    pub price: String,
    pub product_image: String,
}

/// Raw field set taken from a create/update request, before validation.
///
/// `product_image` is the stored path of an accepted upload, never a
/// client-supplied string.
#[derive(Debug, Clone, Default)]
pub struct ProductFields {
    pub name: Option<String>,
    pub details: Option<String>,
    pub price: Option<String>,
    pub product_image: Option<String>,
    pub mistyped: Vec<FieldError>,
    pub unknown: Vec<String>,
}

/// Validated name/details/price, ready to be written to the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    pub name: String,
    pub details: String,
    pub price: String,
}
