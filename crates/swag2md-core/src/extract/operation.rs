use indexmap::IndexMap;
use serde_json::Value;

use super::Extractor;
use super::access;
use super::schema::type_label;
use crate::error::{Entity, MissingFieldError};
use crate::ir::{Api, ApiResponse, Parameter, is_http_method};

impl Extractor<'_> {
    /// Build one [`Api`] per HTTP-method key of a path item, methods in
    /// lexicographic order. Non-method keys (`parameters`, `summary`, `x-*`)
    /// are ignored; path-level `parameters` are inherited.
    pub fn extract_apis(
        &mut self,
        path: &str,
        methods: &Value,
    ) -> Result<Vec<Api>, MissingFieldError> {
        let methods = self.resolve(methods);
        let Some(item) = methods.as_object() else {
            log::debug!("path {path} is not an object, skipping");
            return Ok(Vec::new());
        };

        let shared = access::array(methods, "parameters");
        let mut keys: Vec<&String> = item.keys().filter(|k| is_http_method(k)).collect();
        keys.sort();

        let mut apis = Vec::with_capacity(keys.len());
        for method in keys {
            apis.push(self.extract_api(path, method, &item[method.as_str()], shared)?);
        }
        Ok(apis)
    }

    fn extract_api(
        &mut self,
        path: &str,
        method: &str,
        op: &Value,
        shared: &[Value],
    ) -> Result<Api, MissingFieldError> {
        let location = format!("{} {}", method.to_uppercase(), path);
        let operation_id =
            access::required_scalar(op, "operationId", Entity::Operation, &location)?;
        let responses = self.extract_responses(op, &location)?;
        let parameters = self.extract_parameters(op, shared, &location)?;

        Ok(Api {
            path: path.to_string(),
            method: method.to_string(),
            operation_id,
            parameters,
            responses,
            tags: access::string_list(op, "tags"),
        })
    }

    fn extract_responses(
        &self,
        op: &Value,
        location: &str,
    ) -> Result<IndexMap<String, ApiResponse>, MissingFieldError> {
        let mut responses = IndexMap::new();
        let Some(entries) = access::object(op, "responses") else {
            return Ok(responses);
        };

        for (code, entry) in entries {
            let entry = self.resolve(entry);
            let description = access::required_scalar(
                entry,
                "description",
                Entity::Response,
                &format!("response {code} of {location}"),
            )?;
            responses.insert(
                code.clone(),
                ApiResponse {
                    description,
                    schema: response_schema(entry),
                },
            );
        }
        responses.sort_keys();
        Ok(responses)
    }

    fn extract_parameters(
        &mut self,
        op: &Value,
        shared: &[Value],
        location: &str,
    ) -> Result<Vec<Parameter>, MissingFieldError> {
        let own: Vec<&Value> = access::array(op, "parameters")
            .iter()
            .map(|p| self.resolve(p))
            .collect();
        let mut nodes: Vec<&Value> = shared
            .iter()
            .map(|p| self.resolve(p))
            .filter(|p| !own.iter().any(|o| same_parameter(o, p)))
            .collect();
        nodes.extend(own);

        let mut parameters = Vec::with_capacity(nodes.len());
        for (index, node) in nodes.into_iter().enumerate() {
            match parameter_from(node, index, location) {
                Ok(parameter) => parameters.push(parameter),
                Err(err) => self.recover(err)?,
            }
        }
        Ok(parameters)
    }
}

fn parameter_from(
    node: &Value,
    index: usize,
    location: &str,
) -> Result<Parameter, MissingFieldError> {
    let location = format!("parameter #{index} of {location}");
    let name = access::required_scalar(node, "name", Entity::Parameter, &location)?;
    let param_location = access::required_scalar(node, "in", Entity::Parameter, &location)?;
    let param_type = type_label(node)
        .or_else(|| node.get("schema").and_then(type_label))
        .ok_or_else(|| MissingFieldError::new(Entity::Parameter, "type", location.as_str()))?;
    let description = access::required_scalar(node, "description", Entity::Parameter, &location)?;

    Ok(Parameter {
        name,
        location: param_location,
        param_type,
        description,
    })
}

/// Path-level and operation-level parameters are the same parameter when
/// both `name` and `in` match.
fn same_parameter(a: &Value, b: &Value) -> bool {
    let key = |v: &Value| (access::scalar(v, "name"), access::scalar(v, "in"));
    let (a, b) = (key(a), key(b));
    a.0.is_some() && a == b
}

/// Type label of a response body: Swagger 2 `schema`, else the first
/// OpenAPI 3 `content.<media type>.schema`.
fn response_schema(entry: &Value) -> Option<String> {
    if let Some(schema) = entry.get("schema") {
        return type_label(schema);
    }
    access::object(entry, "content")?
        .values()
        .find_map(|media| media.get("schema").and_then(type_label))
}
