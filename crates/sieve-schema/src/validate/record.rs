//! Map entry validation
//!
//! `Fields` treats a map as a record: keys missing from the schema are
//! rejected (or carried over when `unexpected` is set), keys missing from the
//! value are filled from defaults. `AnyKey` treats it as a uniform map.

use sieve_value::{Map, ObjectKey, Value};

use crate::schema::{Descriptor, FieldMap};
use crate::{SchemaError, SchemaErrorKind, SchemaNode};

use super::context::{ValidationContext, for_label};

fn quoted_keys(keys: &[ObjectKey]) -> String {
    keys.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(r#"", ""#)
}

impl ValidationContext<'_> {
    pub(super) fn apply_fields(
        &mut self,
        mut entries: Map<ObjectKey, Value>,
        fields: &FieldMap,
        descriptor: &Descriptor,
        label: &str,
    ) -> Result<Map<ObjectKey, Value>, SchemaError> {
        let errmsg = descriptor.errmsg.as_deref();

        let unexpected: Vec<ObjectKey> = entries
            .keys()
            .filter(|key| !fields.contains_key(key))
            .cloned()
            .collect();
        if !unexpected.is_empty() && !descriptor.unexpected {
            return Err(self.error(
                errmsg,
                SchemaErrorKind::UnexpectedKeys {
                    keys: unexpected.clone(),
                },
                format!(
                    r#"Got unexpected keys: "{}"{};"#,
                    quoted_keys(&unexpected),
                    for_label(label)
                ),
            ));
        }

        let missing: Vec<ObjectKey> = fields
            .iter()
            .filter(|(key, schema)| !entries.contains_key(key) && schema.default_value().is_none())
            .map(|(key, _)| key.clone())
            .collect();
        if !missing.is_empty() {
            return Err(self.error(
                errmsg,
                SchemaErrorKind::MissingKeys {
                    keys: missing.clone(),
                },
                format!(
                    r#"expected keys "{}"{}"#,
                    quoted_keys(&missing),
                    for_label(label)
                ),
            ));
        }

        let mut output = Map::with_capacity(entries.len() + fields.len());
        for key in unexpected {
            if let Some(value) = entries.remove_fast(&key) {
                output.insert(key, value);
            }
        }

        self.enter()?;
        let result = self.apply_field_schemas(entries, fields, output);
        self.leave();
        result.map_err(|error| self.rethrow(descriptor, error))
    }

    fn apply_field_schemas(
        &mut self,
        mut entries: Map<ObjectKey, Value>,
        fields: &FieldMap,
        mut output: Map<ObjectKey, Value>,
    ) -> Result<Map<ObjectKey, Value>, SchemaError> {
        for (key, schema) in fields.iter() {
            let value = match entries.remove_fast(key) {
                Some(value) => self.apply_entry(key, value, schema)?,
                None => match schema.default_value() {
                    Some(default) => default.produce(),
                    None => continue,
                },
            };
            output.insert(key.clone(), value);
        }
        Ok(output)
    }

    pub(super) fn apply_any_key(
        &mut self,
        entries: Map<ObjectKey, Value>,
        schema: &SchemaNode,
        descriptor: &Descriptor,
    ) -> Result<Map<ObjectKey, Value>, SchemaError> {
        self.enter()?;
        let result = entries
            .into_iter()
            .map(|(key, value)| {
                let value = self.apply_entry(&key, value, schema)?;
                Ok((key, value))
            })
            .collect::<Result<Map<_, _>, _>>();
        self.leave();
        result.map_err(|error| self.rethrow(descriptor, error))
    }

    fn apply_entry(
        &mut self,
        key: &ObjectKey,
        value: Value,
        schema: &SchemaNode,
    ) -> Result<Value, SchemaError> {
        self.push_key(key.clone());
        let result = self.apply(value, schema, &key.to_string());
        self.pop_path();
        result
    }
}
