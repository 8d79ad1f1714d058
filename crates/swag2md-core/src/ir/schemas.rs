/// A reusable, named schema from the document's schema catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: String,
    /// Declared `type` (or `$ref` target name); `None` when the schema has neither.
    pub schema_type: Option<String>,
    pub properties: Vec<Property>,
    /// The schema as pretty-printed JSON, keys in sorted order.
    pub source: String,
}

/// One field of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    /// Declared type; arrays are written `array<T>`.
    pub property_type: Option<String>,
    /// Stringified example, or [`MISSING_EXAMPLE`](crate::extract::MISSING_EXAMPLE).
    pub example: String,
    pub required: bool,
}
