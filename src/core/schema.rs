//! Schema Conversion
//!
//! Turns a tool's input schema into the JSON Schema shape sent in MCP
//! `tools/list` responses. The generated schema is cleaned up on the way:
//! - the `$schema` dialect marker is dropped from every node
//! - `additionalProperties` is removed from every object node, at any depth

use schemars::JsonSchema;
use schemars::r#gen::SchemaSettings;
use schemars::schema::RootSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::tool::ToolDescriptor;

/// Keys holding a single sub-schema, a list of sub-schemas, or a map of them.
const SUBSCHEMA_KEYS: [&str; 6] = ["items", "anyOf", "oneOf", "allOf", "definitions", "$defs"];

/// MCP tool listing entry, as returned by `tools/list`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    /// Unique tool identifier (e.g., "echo")
    pub name: String,
    /// Human-readable description of what the tool does
    pub description: String,
    /// Cleaned-up JSON Schema of the tool's input
    pub input_schema: Value,
}

/// Generate the input schema for a type.
///
/// Uses draft-07 settings with sub-schemas inlined, so nested input types
/// appear in place under `properties` rather than behind `$ref`s.
pub fn input_schema<T: JsonSchema>() -> RootSchema {
    SchemaSettings::draft07()
        .with(|settings| settings.inline_subschemas = true)
        .into_generator()
        .into_root_schema_for::<T>()
}

/// Schema of an object that accepts no declared fields and requires nothing.
pub fn empty_object_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {}
    })
}

/// Convert an input schema into its MCP wire form.
///
/// # Arguments
/// * `validator` - Schema generated for the tool's input, or `None` for a tool
///   that takes no input
///
/// # Returns
/// The schema tree with no `$schema` key anywhere and no `additionalProperties`
/// key on any object node. Everything else is preserved.
///
/// # Errors
/// Returns the serializer's error unchanged if `validator` cannot be turned
/// into JSON.
pub fn convert_schema(validator: Option<&RootSchema>) -> Result<Value, serde_json::Error> {
    let mut schema = match validator {
        Some(root) => serde_json::to_value(root)?,
        None => empty_object_schema(),
    };
    clean_schema_node(&mut schema);
    Ok(schema)
}

/// Build the `tools/list` entries for a set of tools.
///
/// Entries come out in the iteration order of `tools`, one per tool.
///
/// # Errors
/// Fails on the first tool whose schema cannot be converted.
pub fn build_tool_listing<'a, I, K>(tools: I) -> Result<Vec<ToolInfo>, serde_json::Error>
where
    I: IntoIterator<Item = (K, &'a ToolDescriptor)>,
    K: AsRef<str>,
{
    tools
        .into_iter()
        .map(|(name, tool)| {
            Ok(ToolInfo {
                name: name.as_ref().to_string(),
                description: tool.description.clone(),
                input_schema: convert_schema(tool.input_schema.as_ref())?,
            })
        })
        .collect()
}

fn is_object_node(node: &Map<String, Value>) -> bool {
    match node.get("type") {
        Some(Value::String(ty)) => ty == "object",
        Some(Value::Array(types)) => types.iter().any(|ty| ty.as_str() == Some("object")),
        _ => false,
    }
}

fn clean_schema_node(schema: &mut Value) {
    let Some(node) = schema.as_object_mut() else {
        return;
    };

    node.remove("$schema");
    if is_object_node(node) {
        node.remove("additionalProperties");
        // Open records may come without `properties`.
        if let Some(Value::Object(properties)) = node.get_mut("properties") {
            for property in properties.values_mut() {
                clean_schema_node(property);
            }
        }
    }

    for key in SUBSCHEMA_KEYS {
        match node.get_mut(key) {
            Some(Value::Array(schemas)) => schemas.iter_mut().for_each(clean_schema_node),
            Some(Value::Object(sub)) if key == "definitions" || key == "$defs" => {
                sub.values_mut().for_each(clean_schema_node)
            }
            Some(sub @ Value::Object(_)) => clean_schema_node(sub),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    /// Collect every JSON pointer at which `key` appears.
    fn find_key(value: &Value, key: &str, path: String, found: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    let child = format!("{path}/{k}");
                    if k == key {
                        found.push(child.clone());
                    }
                    find_key(v, key, child, found);
                }
            }
            Value::Array(items) => {
                for (i, v) in items.iter().enumerate() {
                    find_key(v, key, format!("{path}/{i}"), found);
                }
            }
            _ => {}
        }
    }

    fn occurrences(value: &Value, key: &str) -> Vec<String> {
        let mut found = Vec::new();
        find_key(value, key, String::new(), &mut found);
        found
    }

    #[derive(JsonSchema)]
    #[serde(deny_unknown_fields)]
    #[allow(dead_code)]
    struct Address {
        /// City name
        city: String,
        zip: Option<String>,
    }

    #[derive(JsonSchema)]
    #[serde(deny_unknown_fields)]
    #[allow(dead_code)]
    struct Person {
        /// Full name
        name: String,
        age: Option<u32>,
        address: Address,
        previous: Option<Address>,
        history: Vec<Address>,
        tags: HashMap<String, String>,
    }

    #[test]
    fn default_is_empty_object() {
        assert_eq!(convert_schema(None).unwrap(), json!({"type": "object", "properties": {}}));
    }

    #[test]
    fn generated_schema_carries_dialect_and_additional_properties() {
        let raw = serde_json::to_value(input_schema::<Person>()).unwrap();
        assert!(raw.get("$schema").is_some());
        assert!(!occurrences(&raw, "additionalProperties").is_empty());
    }

    #[test]
    fn strips_dialect_and_additional_properties_everywhere() {
        let converted = convert_schema(Some(&input_schema::<Person>())).unwrap();
        assert!(occurrences(&converted, "$schema").is_empty());
        assert_eq!(occurrences(&converted, "additionalProperties"), Vec::<String>::new());
    }

    #[test]
    fn preserves_structure() {
        let converted = convert_schema(Some(&input_schema::<Person>())).unwrap();
        assert_eq!(converted["type"], "object");

        let required = converted["required"].as_array().unwrap();
        for field in ["name", "address", "history", "tags"] {
            assert!(required.iter().any(|v| v == field), "missing required {field}");
        }
        assert!(!required.iter().any(|v| v == "age"));

        let properties = converted["properties"].as_object().unwrap();
        assert_eq!(properties["name"]["type"], "string");
        assert_eq!(properties["name"]["description"], "Full name");

        let address = &properties["address"];
        assert_eq!(address["type"], "object");
        assert_eq!(address["properties"]["city"]["description"], "City name");
        assert!(address["required"].as_array().unwrap().iter().any(|v| v == "city"));

        assert_eq!(properties["history"]["type"], "array");
        assert_eq!(properties["history"]["items"]["type"], "object");
    }

    #[test]
    fn hand_written_tree_is_cleaned_recursively() {
        let root = serde_json::from_value::<RootSchema>(json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "outer": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "inner": {
                            "$schema": "http://json-schema.org/draft-07/schema#",
                            "type": ["object", "null"],
                            "additionalProperties": false,
                            "properties": {
                                "leaf": {"type": "integer", "description": "Leaf value"}
                            }
                        }
                    }
                },
                "record": {
                    "type": "object",
                    "additionalProperties": {"type": "string"}
                },
                "choice": {
                    "anyOf": [
                        {
                            "$schema": "http://json-schema.org/draft-07/schema#",
                            "type": "object",
                            "additionalProperties": false
                        },
                        {"type": "string"}
                    ]
                }
            },
            "required": ["outer"]
        }))
        .unwrap();

        let converted = convert_schema(Some(&root)).unwrap();
        assert_eq!(
            converted,
            json!({
                "type": "object",
                "properties": {
                    "outer": {
                        "type": "object",
                        "properties": {
                            "inner": {
                                "type": ["object", "null"],
                                "properties": {
                                    "leaf": {"type": "integer", "description": "Leaf value"}
                                }
                            }
                        }
                    },
                    "record": {"type": "object"},
                    "choice": {
                        "anyOf": [
                            {"type": "object"},
                            {"type": "string"}
                        ]
                    }
                },
                "required": ["outer"]
            })
        );
    }

    #[test]
    fn schema_model_round_trip_artifacts() {
        // RootSchema stores numeric bounds as f64 and skips empty `properties`.
        let root = serde_json::from_value::<RootSchema>(json!({
            "type": "object",
            "properties": {
                "count": {"type": "integer", "minimum": 0},
                "empty": {"type": "object", "properties": {}}
            }
        }))
        .unwrap();

        let converted = convert_schema(Some(&root)).unwrap();
        assert_eq!(converted["properties"]["count"]["minimum"], json!(0.0));
        assert!(converted["properties"]["count"]["minimum"].is_f64());
        assert_eq!(converted["properties"]["empty"], json!({"type": "object"}));
    }

    #[test]
    fn non_object_root_is_left_alone() {
        let root = serde_json::from_value::<RootSchema>(json!({"type": "string"})).unwrap();
        assert_eq!(convert_schema(Some(&root)).unwrap(), json!({"type": "string"}));
    }

    #[test]
    fn listing_uses_declared_and_default_schemas() {
        let typed = ToolDescriptor::new("Describe a person", |person: serde_json::Value| async move {
            Ok(person.to_string())
        });
        let bare = ToolDescriptor::without_input("Ping", || async { Ok("pong") });

        let tools = vec![("describe", &typed), ("ping", &bare)];
        let listing = build_tool_listing(tools).unwrap();

        assert_eq!(listing.len(), 2);
        assert_eq!(listing[0].name, "describe");
        assert_eq!(listing[0].description, "Describe a person");
        assert_eq!(listing[1].name, "ping");
        assert_eq!(listing[1].input_schema, empty_object_schema());

        let wire = serde_json::to_value(&listing[1]).unwrap();
        assert_eq!(
            wire,
            json!({"name": "ping", "description": "Ping", "inputSchema": {"type": "object", "properties": {}}})
        );
    }
}
