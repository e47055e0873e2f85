use config::BindingConfig;
use type_mapping::{Bindable, SqlType, SqlValue, TypeToken};

use super::{downcast, ArgumentFactory};
use crate::argument::Argument;
use crate::errors::ArgumentError;

/// Values already in wire form: [`SqlValue`] and JSON documents
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlArgumentFactory;

impl ArgumentFactory for SqlArgumentFactory {
    fn name(&self) -> &'static str {
        "sql"
    }

    fn build(
        &self,
        expected: &TypeToken,
        value: Option<&dyn Bindable>,
        config: &BindingConfig,
    ) -> Result<Option<Argument>, ArgumentError> {
        if expected.is::<SqlValue>() {
            return Ok(Some(match value {
                Some(v) => {
                    let wire = downcast::<SqlValue>(expected, v)?;
                    let sql_type = match wire {
                        SqlValue::Null => config.untyped_null_type,
                        other => other.sql_type(),
                    };
                    Argument::new(sql_type, wire.clone())
                }
                None => Argument::null(config.untyped_null_type),
            }));
        }

        if expected.is::<serde_json::Value>() {
            return Ok(Some(match value {
                Some(v) => Argument::new(
                    SqlType::Json,
                    SqlValue::Json(downcast::<serde_json::Value>(expected, v)?.clone()),
                ),
                None => Argument::null(SqlType::Json),
            }));
        }

        Ok(None)
    }
}
