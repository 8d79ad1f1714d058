//! Convert OpenAPI 3 / Swagger 2 documents into a single Markdown document.
//!
//! ```no_run
//! use swag2md_core::{Analyzer, Locale, TermDictionary};
//!
//! let terms = TermDictionary::builtin(Locale::En)?;
//! let analysis = Analyzer::new(terms).analyze(r#"{"info": {"title": "T"}}"#)?;
//! print!("{}", analysis.markdown);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod ir;
pub mod markdown;
pub mod parse;
pub mod render;
pub mod terms;

pub use error::{AnalyzeError, MissingFieldError, ParseError, TermsError};
pub use extract::{Extractor, ItemPolicy};
pub use render::{Analysis, Analyzer, RenderOptions};
pub use terms::{Locale, TermDictionary};
