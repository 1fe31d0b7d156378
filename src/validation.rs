//! Create and update schemas for product field sets.
//!
//! Only the first failing field is reported, checked in schema order
//! (`name`, `details`, `price`, `productImage`), then unknown fields.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{FieldError, ProductChanges, ProductFields};

pub const NAME_MIN: usize = 3;
pub const DETAILS_MIN: usize = 3;
pub const DETAILS_MAX: usize = 200;

/// Largest magnitude a double still represents exactly (2^53 - 1).
pub const MAX_SAFE_NUMBER: f64 = 9_007_199_254_740_991.0;

#[derive(Debug, Validate)]
struct CreateSchema {
    #[validate(required, length(min = 3))]
    name: Option<String>,
    #[validate(required, length(min = 3, max = 200))]
    details: Option<String>,
    #[validate(required, custom(function = "validate_price"))]
    price: Option<String>,
    #[validate(required)]
    product_image: Option<String>,
}

#[derive(Debug, Validate)]
struct UpdateSchema {
    #[validate(required, length(min = 3))]
    name: Option<String>,
    #[validate(required, length(min = 3, max = 200))]
    details: Option<String>,
    #[validate(required, custom(function = "validate_price"))]
    price: Option<String>,
}

/// (public name, schema field name)
const FIELD_ORDER: [(&str, &str); 4] = [
    ("name", "name"),
    ("details", "details"),
    ("price", "price"),
    ("productImage", "product_image"),
];

fn validate_price(price: &str) -> Result<(), ValidationError> {
    if !is_number(price) {
        Err(ValidationError::new("number"))
    } else if !is_safe_number(price) {
        Err(ValidationError::new("unsafe"))
    } else {
        Ok(())
    }
}

/// Accepts what a lenient number parser would: surrounding whitespace is
/// ignored, the value must be finite.
pub fn is_number(raw: &str) -> bool {
    let trimmed = raw.trim();
    !trimmed.is_empty() && trimmed.parse::<f64>().is_ok_and(f64::is_finite)
}

fn is_safe_number(raw: &str) -> bool {
    raw.trim()
        .parse::<f64>()
        .is_ok_and(|n| n.abs() <= MAX_SAFE_NUMBER)
}

/// Validates a create request; on success yields the changes plus the
/// stored image path, which is mandatory here.
pub fn validate_create(fields: &ProductFields) -> Result<(ProductChanges, String), FieldError> {
    let schema = CreateSchema {
        name: fields.name.clone(),
        details: fields.details.clone(),
        price: fields.price.clone(),
        product_image: fields.product_image.clone(),
    };
    check(fields, schema.validate())?;

    match (changes_from(fields), fields.product_image.clone()) {
        (Some(changes), Some(image)) => Ok((changes, image)),
        _ => Err(FieldError::required("productImage")),
    }
}

/// Validates an update request. `productImage` is optional.
pub fn validate_update(fields: &ProductFields) -> Result<ProductChanges, FieldError> {
    let schema = UpdateSchema {
        name: fields.name.clone(),
        details: fields.details.clone(),
        price: fields.price.clone(),
    };
    check(fields, schema.validate())?;

    changes_from(fields).ok_or_else(|| FieldError::required("name"))
}

fn check(
    fields: &ProductFields,
    outcome: Result<(), ValidationErrors>,
) -> Result<(), FieldError> {
    let errors = match outcome {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };
    let field_errors = errors.field_errors();

    for (public, internal) in FIELD_ORDER {
        if let Some(err) = fields.mistyped.iter().find(|e| e.field() == public) {
            return Err(err.clone());
        }
        if let Some(first) = field_errors.get(internal).and_then(|errs| errs.first()) {
            return Err(describe(public, first, value_of(fields, public)));
        }
    }

    if let Some(err) = fields.mistyped.first() {
        return Err(err.clone());
    }
    if let Some(unknown) = fields.unknown.first() {
        return Err(FieldError::not_allowed(unknown));
    }

    Ok(())
}

fn value_of<'a>(fields: &'a ProductFields, public: &str) -> Option<&'a str> {
    match public {
        "name" => fields.name.as_deref(),
        "details" => fields.details.as_deref(),
        "price" => fields.price.as_deref(),
        "productImage" => fields.product_image.as_deref(),
        _ => None,
    }
}

fn describe(field: &str, error: &ValidationError, value: Option<&str>) -> FieldError {
    match (error.code.as_ref(), value) {
        ("required", _) | (_, None) => FieldError::required(field),
        ("number", _) => FieldError::not_a_number(field),
        ("unsafe", _) => FieldError::unsafe_number(field),
        ("length", Some("")) => FieldError::empty(field),
        ("length", Some(v)) => {
            let (min, max) = length_bounds(field);
            if v.chars().count() < min {
                FieldError::too_short(field, min)
            } else {
                FieldError::too_long(field, max.unwrap_or(usize::MAX))
            }
        }
        _ => FieldError::invalid(field),
    }
}

fn length_bounds(field: &str) -> (usize, Option<usize>) {
    match field {
        "details" => (DETAILS_MIN, Some(DETAILS_MAX)),
        _ => (NAME_MIN, None),
    }
}

fn changes_from(fields: &ProductFields) -> Option<ProductChanges> {
    Some(ProductChanges {
        name: fields.name.clone()?,
        details: fields.details.clone()?,
        price: fields.price.clone()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> ProductFields {
        ProductFields {
            name: Some("Mint Chip".to_string()),
            details: Some("Cool mint with chocolate chips".to_string()),
            price: Some("49.95".to_string()),
            product_image: Some("uploads/2026-10-15T20-42-00.123Zmint.png".to_string()),
            ..ProductFields::default()
        }
    }

    #[test]
    fn create_accepts_valid_fields() {
        let (changes, image) = validate_create(&valid_fields()).unwrap();

        assert_eq!(changes.name, "Mint Chip");
        assert_eq!(changes.price, "49.95");
        assert_eq!(image, "uploads/2026-10-15T20-42-00.123Zmint.png");
    }

    #[test]
    fn create_requires_image() {
        let fields = ProductFields {
            product_image: None,
            ..valid_fields()
        };

        let err = validate_create(&fields).unwrap_err();
        assert_eq!(err, FieldError::required("productImage"));
    }

    #[test]
    fn update_does_not_require_image() {
        let fields = ProductFields {
            product_image: None,
            ..valid_fields()
        };

        assert!(validate_update(&fields).is_ok());
    }

    #[test]
    fn reports_first_failing_field_in_schema_order() {
        let fields = ProductFields {
            name: None,
            details: Some("ab".to_string()),
            price: Some("cheap".to_string()),
            ..valid_fields()
        };

        let err = validate_create(&fields).unwrap_err();
        assert_eq!(err.field(), "name");
        assert_eq!(err.kind, "any.required");
    }

    #[test]
    fn short_details_names_details() {
        let fields = ProductFields {
            details: Some("ab".to_string()),
            ..valid_fields()
        };

        let err = validate_update(&fields).unwrap_err();
        assert_eq!(err, FieldError::too_short("details", 3));
    }

    #[test]
    fn long_details_rejected() {
        let fields = ProductFields {
            details: Some("x".repeat(201)),
            ..valid_fields()
        };

        let err = validate_create(&fields).unwrap_err();
        assert_eq!(err, FieldError::too_long("details", 200));
    }

    #[test]
    fn details_at_bounds_accepted() {
        for details in ["abc".to_string(), "y".repeat(200)] {
            let fields = ProductFields {
                details: Some(details),
                ..valid_fields()
            };
            assert!(validate_create(&fields).is_ok());
        }
    }

    #[test]
    fn empty_name_is_reported_as_empty() {
        let fields = ProductFields {
            name: Some(String::new()),
            ..valid_fields()
        };

        let err = validate_create(&fields).unwrap_err();
        assert_eq!(err, FieldError::empty("name"));
    }

    #[test]
    fn price_must_be_numeric() {
        let fields = ProductFields {
            price: Some("twelve".to_string()),
            ..valid_fields()
        };

        let err = validate_update(&fields).unwrap_err();
        assert_eq!(err, FieldError::not_a_number("price"));
    }

    #[test]
    fn price_beyond_safe_integer_range_rejected() {
        let fields = ProductFields {
            price: Some("9007199254740993".to_string()),
            ..valid_fields()
        };

        let err = validate_create(&fields).unwrap_err();
        assert_eq!(err, FieldError::unsafe_number("price"));

        let fields = ProductFields {
            price: Some("-9007199254740991".to_string()),
            ..valid_fields()
        };
        assert!(validate_create(&fields).is_ok());
    }

    #[test]
    fn price_with_padding_is_numeric() {
        assert!(is_number("74.95 "));
        assert!(is_number("1e3"));
        assert!(!is_number(""));
        assert!(!is_number("NaN"));
        assert!(!is_number("inf"));
    }

    #[test]
    fn unknown_fields_rejected_after_schema_fields() {
        let fields = ProductFields {
            unknown: vec!["color".to_string()],
            ..valid_fields()
        };

        let err = validate_create(&fields).unwrap_err();
        assert_eq!(err, FieldError::not_allowed("color"));

        let fields = ProductFields {
            name: Some("ab".to_string()),
            unknown: vec!["color".to_string()],
            ..valid_fields()
        };
        assert_eq!(validate_create(&fields).unwrap_err().field(), "name");
    }

    #[test]
    fn mistyped_field_reported_in_order() {
        let fields = ProductFields {
            name: None,
            mistyped: vec![FieldError::not_a_string("name")],
            ..valid_fields()
        };

        let err = validate_update(&fields).unwrap_err();
        assert_eq!(err, FieldError::not_a_string("name"));
    }
}
