use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use config::BindingConfig;
use type_mapping::{Bindable, SqlType, SqlValue, TypeToken};

use super::{downcast, ArgumentFactory};
use crate::argument::Argument;
use crate::errors::ArgumentError;

/// Network addresses, bound through their textual form.
///
/// IP addresses carry the driver specific tag so statements can cast them
/// to `inet`; socket addresses are plain text.
#[derive(Debug, Default, Clone, Copy)]
pub struct InternetArgumentFactory;

fn address_text(expected: &TypeToken, value: &dyn Bindable) -> Result<String, ArgumentError> {
    let text = if expected.is::<IpAddr>() {
        downcast::<IpAddr>(expected, value)?.to_string()
    } else if expected.is::<Ipv4Addr>() {
        downcast::<Ipv4Addr>(expected, value)?.to_string()
    } else if expected.is::<Ipv6Addr>() {
        downcast::<Ipv6Addr>(expected, value)?.to_string()
    } else {
        downcast::<SocketAddr>(expected, value)?.to_string()
    };
    Ok(text)
}

impl ArgumentFactory for InternetArgumentFactory {
    fn name(&self) -> &'static str {
        "internet"
    }

    fn build(
        &self,
        expected: &TypeToken,
        value: Option<&dyn Bindable>,
        _config: &BindingConfig,
    ) -> Result<Option<Argument>, ArgumentError> {
        let sql_type = if expected.is::<IpAddr>()
            || expected.is::<Ipv4Addr>()
            || expected.is::<Ipv6Addr>()
        {
            SqlType::Other
        } else if expected.is::<SocketAddr>() {
            SqlType::Varchar
        } else {
            return Ok(None);
        };

        let argument = match value {
            Some(v) => Argument::new(sql_type, SqlValue::Text(address_text(expected, v)?)),
            None => Argument::null(sql_type),
        };
        Ok(Some(argument))
    }
}
