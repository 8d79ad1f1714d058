use super::{Analyzer, Column, join_blocks};
use crate::ir::Api;
use crate::markdown::{HeaderLevel, Indent, TableLine, bold, code_block, header, italic, list_item};
use crate::terms::TermKey;

impl Analyzer {
    /// The paths section: one numbered block per operation, in the order given.
    pub fn render_paths(&self, apis: &[Api]) -> String {
        let mut blocks = vec![header(
            self.terms.term(TermKey::Paths),
            HeaderLevel::H2,
            Indent::NONE,
        )];
        blocks.extend(
            apis.iter()
                .enumerate()
                .map(|(i, api)| self.render_api(i + 1, api)),
        );
        join_blocks(&blocks)
    }

    /// A single operation: id, request line, parameter and response tables,
    /// and its tags.
    pub fn render_api(&self, index: usize, api: &Api) -> String {
        let inner = Indent(1);
        let mut blocks = vec![
            format!("{index}. {}", italic(&bold(&api.operation_id))),
            code_block(&api.request_line(), inner),
        ];

        if !api.parameters.is_empty() {
            let mut table = self.table(&self.options.parameter_columns);
            for parameter in &api.parameters {
                table.push(
                    TableLine::new()
                        .with(Column::Type.label(), parameter.location.as_str())
                        .with(Column::Name.label(), parameter.name.as_str())
                        .with(Column::Description.label(), parameter.description.as_str())
                        .with(Column::Schema.label(), parameter.param_type.as_str()),
                );
            }
            blocks.push(header(
                self.terms.term(TermKey::Parameters),
                HeaderLevel::H4,
                inner,
            ));
            blocks.push(table.render(inner));
        }

        if !api.responses.is_empty() {
            let mut table = self.table(&self.options.response_columns);
            for (code, response) in &api.responses {
                let mut line = TableLine::new()
                    .with(Column::HttpCode.label(), code.as_str())
                    .with(Column::Description.label(), response.description.as_str());
                if let Some(ref schema) = response.schema {
                    line.set(Column::Schema.label(), schema.as_str());
                }
                table.push(line);
            }
            blocks.push(header(
                self.terms.term(TermKey::Responses),
                HeaderLevel::H4,
                inner,
            ));
            blocks.push(table.render(inner));
        }

        blocks.push(header(self.terms.term(TermKey::Tags), HeaderLevel::H4, inner));
        let tags: Vec<String> = api.tags.iter().map(|tag| list_item(tag, inner)).collect();
        blocks.push(tags.join("\n"));

        join_blocks(&blocks)
    }
}
