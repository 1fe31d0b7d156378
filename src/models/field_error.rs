use serde::Serialize;

/// The first field that failed validation and the constraint it broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub message: String,
    pub path: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    fn new(field: &str, kind: &str, message: String) -> Self {
        Self {
            message,
            path: vec![field.to_string()],
            kind: kind.to_string(),
        }
    }

    pub fn field(&self) -> &str {
        self.path.first().map(String::as_str).unwrap_or_default()
    }

    pub fn required(field: &str) -> Self {
        Self::new(field, "any.required", format!("\"{}\" is required", field))
    }

    pub fn empty(field: &str) -> Self {
        Self::new(
            field,
            "string.empty",
            format!("\"{}\" is not allowed to be empty", field),
        )
    }

    pub fn too_short(field: &str, min: usize) -> Self {
        Self::new(
            field,
            "string.min",
            format!("\"{}\" length must be at least {} characters long", field, min),
        )
    }

    pub fn too_long(field: &str, max: usize) -> Self {
        Self::new(
            field,
            "string.max",
            format!(
                "\"{}\" length must be less than or equal to {} characters long",
                field, max
            ),
        )
    }

    pub fn not_a_string(field: &str) -> Self {
        Self::new(field, "string.base", format!("\"{}\" must be a string", field))
    }

    pub fn not_a_number(field: &str) -> Self {
        Self::new(field, "number.base", format!("\"{}\" must be a number", field))
    }

    pub fn unsafe_number(field: &str) -> Self {
        Self::new(
            field,
            "number.unsafe",
            format!("\"{}\" must be a safe number", field),
        )
    }

    pub fn invalid(field: &str) -> Self {
        Self::new(
            field,
            "any.invalid",
            format!("\"{}\" contains an invalid value", field),
        )
    }

    pub fn not_allowed(field: &str) -> Self {
        Self::new(
            field,
            "object.unknown",
            format!("\"{}\" is not allowed", field),
        )
    }
}
