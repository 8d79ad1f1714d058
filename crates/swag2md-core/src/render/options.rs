use crate::extract::ItemPolicy;
use crate::markdown::NO_CONTENT;

/// Table columns the renderer knows how to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Type,
    Name,
    Description,
    Schema,
    HttpCode,
    PropertyName,
    PropertyType,
    Required,
    Example,
}

impl Column {
    pub fn label(&self) -> &'static str {
        match self {
            Column::Type => "Type",
            Column::Name => "Name",
            Column::Description => "Description",
            Column::Schema => "Schema",
            Column::HttpCode => "HTTP Code",
            Column::PropertyName => "Property Name",
            Column::PropertyType => "Property Type",
            Column::Required => "Required",
            Column::Example => "Example",
        }
    }
}

pub const PARAMETER_COLUMNS: [Column; 4] = [
    Column::Type,
    Column::Name,
    Column::Description,
    Column::Schema,
];

pub const RESPONSE_COLUMNS: [Column; 3] = [Column::HttpCode, Column::Description, Column::Schema];

pub const PROPERTY_COLUMNS: [Column; 4] = [
    Column::PropertyName,
    Column::PropertyType,
    Column::Required,
    Column::Example,
];

/// Per-run rendering configuration handed to the [`Analyzer`](super::Analyzer).
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub parameter_columns: Vec<Column>,
    pub response_columns: Vec<Column>,
    pub property_columns: Vec<Column>,
    /// Cell text for values the document doesn't provide.
    pub placeholder: String,
    /// Cell text for required / optional properties.
    pub required_labels: (String, String),
    pub item_policy: ItemPolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            parameter_columns: PARAMETER_COLUMNS.to_vec(),
            response_columns: RESPONSE_COLUMNS.to_vec(),
            property_columns: PROPERTY_COLUMNS.to_vec(),
            placeholder: NO_CONTENT.to_string(),
            required_labels: ("True".to_string(), "False".to_string()),
            item_policy: ItemPolicy::default(),
        }
    }
}

impl RenderOptions {
    pub fn with_item_policy(mut self, policy: ItemPolicy) -> Self {
        self.item_policy = policy;
        self
    }
}
