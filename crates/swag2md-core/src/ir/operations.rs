use indexmap::IndexMap;

/// Path-item keys that denote an operation.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Whether a path-item key names an HTTP method (case-insensitive).
pub fn is_http_method(key: &str) -> bool {
    HTTP_METHODS.iter().any(|m| m.eq_ignore_ascii_case(key))
}

/// One operation on one path.
#[derive(Debug, Clone, PartialEq)]
pub struct Api {
    pub path: String,
    /// The method key exactly as written in the source document.
    pub method: String,
    pub operation_id: String,
    pub parameters: Vec<Parameter>,
    /// Status code → response, sorted by code.
    pub responses: IndexMap<String, ApiResponse>,
    pub tags: Vec<String>,
}

impl Api {
    /// `METHOD /path`, with the method upper-cased.
    pub fn request_line(&self) -> String {
        format!("{} {}", self.method.to_uppercase(), self.path)
    }
}

/// One operation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    /// The `in` field: query, path, header, body, formData, cookie.
    pub location: String,
    pub param_type: String,
    pub description: String,
}

/// A response entry of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub description: String,
    /// Type label of the response body, if the document declares one.
    pub schema: Option<String>,
}
