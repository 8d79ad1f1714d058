//! Stateless Markdown builders. Nothing here knows about API documents.
//!
//! Builders return a single block without a trailing newline; callers
//! decide how blocks are separated.

pub mod table;

pub use table::{NO_CONTENT, Table, TableLine};

/// Header depth, `#` through `#####`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeaderLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
    H4 = 4,
    H5 = 5,
}

/// Nesting depth; each level is four spaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Indent(pub usize);

impl Indent {
    pub const NONE: Indent = Indent(0);

    pub fn prefix(self) -> String {
        "    ".repeat(self.0)
    }
}

pub fn header(content: &str, level: HeaderLevel, indent: Indent) -> String {
    format!("{}{} {}", indent.prefix(), "#".repeat(level as usize), content)
}

pub fn list_item(content: &str, indent: Indent) -> String {
    format!("{}+ {}", indent.prefix(), content)
}

pub fn bold(content: &str) -> String {
    format!("**{content}**")
}

pub fn italic(content: &str) -> String {
    format!("*{content}*")
}

/// Inline code span. Content containing backticks gets a longer fence.
pub fn inline_code(content: &str) -> String {
    if content.contains('`') {
        format!("`` {content} ``")
    } else {
        format!("`{content}`")
    }
}

/// Fenced code block; every line, fences included, carries the indent.
pub fn code_block(content: &str, indent: Indent) -> String {
    let mut lines = vec!["```".to_string()];
    lines.extend(content.lines().map(str::to_string));
    lines.push("```".to_string());
    indent_lines(&lines.join("\n"), indent)
}

/// Prefix every non-blank line with the indent.
pub fn indent_lines(text: &str, indent: Indent) -> String {
    let prefix = indent.prefix();
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
