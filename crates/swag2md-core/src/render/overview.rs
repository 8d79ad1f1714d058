use super::{Analyzer, join_blocks};
use crate::markdown::{HeaderLevel, Indent, bold, header, inline_code, italic, list_item};
use crate::parse::server::Server;
use crate::parse::spec::{Document, Tag};
use crate::terms::TermKey;

impl Analyzer {
    /// The overview section: description, contact, license, version,
    /// servers, Swagger 2 transport details, and tags. Sub-sections with no
    /// data are left out.
    pub fn render_overview(&self, doc: &Document) -> String {
        let info = &doc.info;
        let mut blocks = vec![header(
            self.terms.term(TermKey::Overview),
            HeaderLevel::H2,
            Indent::NONE,
        )];

        blocks.push(bold_paragraphs(&info.description));
        blocks.push(self.field_section(TermKey::Contact, &info.contact.fields()));
        blocks.push(self.field_section(TermKey::License, &info.license.fields()));
        blocks.push(self.text_section(TermKey::Version, &info.version));
        if let Some(format) = doc.format_version() {
            blocks.push(self.text_section(TermKey::VersionInfo, &format));
        }
        blocks.push(self.uri_scheme_section(doc));
        blocks.push(self.servers_section(&doc.servers));
        blocks.push(self.media_type_section(TermKey::Consumes, &doc.consumes));
        blocks.push(self.media_type_section(TermKey::Produces, &doc.produces));
        blocks.push(self.tags_section(&doc.tags));

        join_blocks(&blocks)
    }

    fn section(&self, key: TermKey, body: String) -> String {
        if body.is_empty() {
            return String::new();
        }
        let title = header(self.terms.term(key), HeaderLevel::H3, Indent::NONE);
        format!("{title}\n\n{body}")
    }

    fn text_section(&self, key: TermKey, text: &str) -> String {
        self.section(key, text.to_string())
    }

    /// One `label : value` list item per field.
    fn field_section(&self, key: TermKey, fields: &[(&str, &str)]) -> String {
        let items: Vec<String> = fields
            .iter()
            .map(|(label, value)| list_item(&format!("{label} : {value}"), Indent::NONE))
            .collect();
        self.section(key, items.join("\n"))
    }

    fn servers_section(&self, servers: &[Server]) -> String {
        let mut items = Vec::new();
        for (index, server) in servers.iter().enumerate() {
            items.push(list_item(&format!("Server-{index}"), Indent::NONE));
            items.push(list_item(&format!("url : {}", server.url), Indent(1)));
            if !server.description.is_empty() {
                items.push(list_item(
                    &format!("description : {}", server.description),
                    Indent(1),
                ));
            }
        }
        self.section(TermKey::Servers, items.join("\n"))
    }

    /// Swagger 2 `host`, `basePath` and `schemes`.
    fn uri_scheme_section(&self, doc: &Document) -> String {
        let schemes = doc.schemes.join(", ");
        let fields: Vec<(&str, &str)> = [
            ("host", doc.host.as_str()),
            ("basePath", doc.base_path.as_str()),
            ("schemes", schemes.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect();
        self.field_section(TermKey::UriScheme, &fields)
    }

    fn media_type_section(&self, key: TermKey, media_types: &[String]) -> String {
        let items: Vec<String> = media_types
            .iter()
            .map(|m| list_item(&inline_code(m), Indent::NONE))
            .collect();
        self.section(key, items.join("\n"))
    }

    fn tags_section(&self, tags: &[Tag]) -> String {
        let items: Vec<String> = tags
            .iter()
            .map(|tag| {
                let name = italic(&bold(&tag.name));
                if tag.description.is_empty() {
                    list_item(&name, Indent::NONE)
                } else {
                    list_item(&format!("{name} : {}", tag.description), Indent::NONE)
                }
            })
            .collect();
        self.section(TermKey::Tags, items.join("\n"))
    }
}

/// Bold each paragraph on its own; emphasis can't span a blank line.
fn bold_paragraphs(text: &str) -> String {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(bold(&current.join("\n")));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(bold(&current.join("\n")));
    }
    paragraphs.join("\n\n")
}
