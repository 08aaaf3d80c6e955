//! Sequence element validation

use sieve_value::Value;

use crate::SchemaError;
use crate::SchemaNode;
use crate::schema::Descriptor;

use super::context::ValidationContext;

impl ValidationContext<'_> {
    /// Validate every element against `schema`, labelled like the sequence
    /// itself.
    pub(super) fn apply_elements(
        &mut self,
        items: Vec<Value>,
        schema: &SchemaNode,
        descriptor: &Descriptor,
        label: &str,
    ) -> Result<Vec<Value>, SchemaError> {
        self.enter()?;
        let result = self.apply_each(items, schema, label);
        self.leave();
        result.map_err(|error| self.rethrow(descriptor, error))
    }

    fn apply_each(
        &mut self,
        items: Vec<Value>,
        schema: &SchemaNode,
        label: &str,
    ) -> Result<Vec<Value>, SchemaError> {
        let mut output = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            self.push_index(index);
            let result = self.apply(item, schema, label);
            self.pop_path();
            output.push(result?);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use sieve_value::{ValueKind, value};

    use crate::{DescriptorBuilder, Transform, validate};

    #[test]
    fn test_elements_are_transformed() {
        let schema = DescriptorBuilder::typed(ValueKind::Array)
            .elements(
                DescriptorBuilder::typed(ValueKind::Integer)
                    .post_call(Transform::map(|v| sieve_value::Value::Array(vec![v]))),
            )
            .build()
            .unwrap();
        assert_eq!(
            validate(value!([1, 2]), &schema).unwrap(),
            value!([[1], [2]])
        );
    }

    #[test]
    fn test_empty_sequence() {
        let schema = DescriptorBuilder::typed(ValueKind::Array)
            .elements(ValueKind::Integer)
            .build()
            .unwrap();
        assert_eq!(validate(value!([]), &schema).unwrap(), value!([]));
    }

    #[test]
    fn test_first_failing_element_is_reported() {
        let schema = DescriptorBuilder::typed(ValueKind::Tuple)
            .elements(ValueKind::Integer)
            .build()
            .unwrap();
        let e = validate(value!((1, "a", "b")), &schema).unwrap_err();
        assert_eq!(e.path.to_string(), "[1]");
    }

    #[test]
    fn test_elements_ignored_for_non_sequence() {
        let schema = DescriptorBuilder::typed([ValueKind::Array, ValueKind::Text])
            .elements(ValueKind::Integer)
            .build()
            .unwrap();
        assert_eq!(validate(value!("abc"), &schema).unwrap(), value!("abc"));
    }
}
