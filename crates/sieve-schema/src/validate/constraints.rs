//! Value-level constraint checks
//!
//! Checked in order: filters, blank, max_length, min_length.

use sieve_value::Value;

use crate::schema::Constraints;
use crate::{SchemaError, SchemaErrorKind};

use super::context::ValidationContext;

impl ValidationContext<'_> {
    pub(super) fn check_constraints(
        &self,
        object: &Value,
        constraints: &Constraints,
        errmsg: Option<&str>,
        label: &str,
    ) -> Result<(), SchemaError> {
        for filter in &constraints.filters {
            if !filter.test(object) {
                tracing::trace!(filter = filter.name(), "filter rejected value");
                return Err(self.error(
                    errmsg,
                    SchemaErrorKind::FilterRejected,
                    format!(r#""{}" not passed filter"#, label),
                ));
            }
        }

        if constraints.blank == Some(false) && object.is_blank() {
            return Err(self.error(
                errmsg,
                SchemaErrorKind::Blank,
                format!(r#""{}" is blank"#, label),
            ));
        }

        if constraints.max_length.is_none() && constraints.min_length.is_none() {
            return Ok(());
        }
        let Some(length) = object.len() else {
            return Err(self.error(
                errmsg,
                SchemaErrorKind::Malformed,
                format!(
                    r#""{}" has no length; max_length/min_length need a text or container, got {}"#,
                    label,
                    object.kind()
                ),
            ));
        };

        if let Some(max) = constraints.max_length
            && length > max
        {
            return Err(self.error(
                errmsg,
                SchemaErrorKind::TooLong { length, max },
                format!(r#""{}" > max_length ({} > {})"#, label, length, max),
            ));
        }
        if let Some(min) = constraints.min_length
            && length < min
        {
            return Err(self.error(
                errmsg,
                SchemaErrorKind::TooShort { length, min },
                format!(r#""{}" < min_length ({} < {})"#, label, length, min),
            ));
        }
        Ok(())
    }
}
