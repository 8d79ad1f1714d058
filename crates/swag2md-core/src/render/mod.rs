mod components;
mod options;
mod overview;
mod paths;

pub use options::{
    Column, PARAMETER_COLUMNS, PROPERTY_COLUMNS, RESPONSE_COLUMNS, RenderOptions,
};

use crate::error::{AnalyzeError, MissingFieldError};
use crate::extract::Extractor;
use crate::markdown::{self, HeaderLevel, Indent, Table};
use crate::parse;
use crate::parse::spec::Document;
use crate::terms::TermDictionary;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub markdown: String,
    /// Items that were skipped under [`ItemPolicy::Skip`](crate::extract::ItemPolicy::Skip).
    pub warnings: Vec<MissingFieldError>,
}

/// Renders an API description into one Markdown document.
///
/// An analyzer owns its term dictionary and options; it holds no state
/// between calls, so one instance can render any number of documents.
#[derive(Debug, Clone)]
pub struct Analyzer {
    terms: TermDictionary,
    options: RenderOptions,
}

impl Analyzer {
    pub fn new(terms: TermDictionary) -> Self {
        Self::with_options(terms, RenderOptions::default())
    }

    pub fn with_options(terms: TermDictionary, options: RenderOptions) -> Self {
        Self { terms, options }
    }

    pub fn terms(&self) -> &TermDictionary {
        &self.terms
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Decode `input` as JSON and render it.
    pub fn analyze(&self, input: &str) -> Result<Analysis, AnalyzeError> {
        let doc = parse::from_json(input)?;
        self.analyze_document(&doc)
    }

    /// Render an already-decoded document: title, overview, paths and, when
    /// the schema catalog is non-empty, components.
    pub fn analyze_document(&self, doc: &Document) -> Result<Analysis, AnalyzeError> {
        let mut extractor = Extractor::new(doc).with_policy(self.options.item_policy);
        let apis = extractor.extract_all_apis()?;
        let components = extractor.extract_components()?;

        let sections = [
            markdown::header(&doc.info.title, HeaderLevel::H1, Indent::NONE),
            self.render_overview(doc),
            self.render_paths(&apis),
            self.render_components(&components),
        ];

        Ok(Analysis {
            markdown: compact(&sections),
            warnings: extractor.into_warnings(),
        })
    }

    fn table(&self, columns: &[Column]) -> Table {
        Table::new(columns.iter().map(Column::label)).placeholder(self.options.placeholder.as_str())
    }

    fn or_placeholder<'s>(&'s self, value: Option<&'s str>) -> &'s str {
        value
            .filter(|v| !v.is_empty())
            .unwrap_or(self.options.placeholder.as_str())
    }
}

/// Join blocks with one blank line, skipping empty blocks.
fn join_blocks<S: AsRef<str>>(blocks: &[S]) -> String {
    blocks
        .iter()
        .map(AsRef::as_ref)
        .filter(|b| !b.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Assemble the final document: blank sections dropped, runs of blank
/// lines collapsed to one, exactly one trailing newline.
pub fn compact<S: AsRef<str>>(sections: &[S]) -> String {
    let joined = join_blocks(sections);
    let mut lines: Vec<&str> = Vec::new();
    let mut previous_blank = true;
    for line in joined.lines() {
        let blank = line.trim().is_empty();
        if blank && previous_blank {
            continue;
        }
        lines.push(if blank { "" } else { line.trim_end() });
        previous_blank = blank;
    }
    while lines.last() == Some(&"") {
        lines.pop();
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
