use super::{Analyzer, Column, join_blocks};
use crate::ir::Component;
use crate::markdown::{HeaderLevel, Indent, TableLine, code_block, header, inline_code, list_item};
use crate::terms::TermKey;

impl Analyzer {
    /// The components section; empty when there are no components.
    pub fn render_components(&self, components: &[Component]) -> String {
        if components.is_empty() {
            return String::new();
        }
        let mut blocks = vec![header(
            self.terms.term(TermKey::Components),
            HeaderLevel::H2,
            Indent::NONE,
        )];
        blocks.extend(components.iter().map(|c| self.render_component(c)));
        join_blocks(&blocks)
    }

    /// Name, declared type, property table, then the schema source as JSON.
    pub fn render_component(&self, component: &Component) -> String {
        let schema_type = self.or_placeholder(component.schema_type.as_deref());
        let mut blocks = vec![format!(
            "{}\n{}",
            list_item(&component.name, Indent::NONE),
            list_item(&format!("type : {}", inline_code(schema_type)), Indent(1)),
        )];

        if !component.properties.is_empty() {
            let (yes, no) = &self.options.required_labels;
            let mut table = self.table(&self.options.property_columns);
            for property in &component.properties {
                let property_type = match property.property_type.as_deref() {
                    Some(t) if !t.is_empty() => inline_code(t),
                    _ => self.options.placeholder.clone(),
                };
                table.push(
                    TableLine::new()
                        .with(Column::PropertyName.label(), property.name.as_str())
                        .with(Column::PropertyType.label(), property_type)
                        .with(
                            Column::Required.label(),
                            if property.required { yes } else { no }.as_str(),
                        )
                        .with(Column::Example.label(), property.example.as_str()),
                );
            }
            blocks.push(table.render(Indent(2)));
        }

        blocks.push(code_block(&component.source, Indent(2)));
        join_blocks(&blocks)
    }
}
