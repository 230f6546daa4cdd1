use std::{collections::HashMap, str::FromStr};

use roster_types::{
    Result,
    errors::{AppError, ApplicationError},
};

/// Raw request parameters, as received from the query string.
pub type Params = HashMap<String, String>;

/// Parses the value under `key` if present.
///
/// A missing key is `Ok(None)`; a present value that does not parse is a
/// malformed request.
pub fn parse_param<T: FromStr>(params: &Params, key: &str) -> Result<Option<T>> {
    match params.get(key) {
        None => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| invalid_param(key, value)),
    }
}

pub fn invalid_param(key: &str, value: &str) -> ApplicationError {
    AppError::InvalidParam {
        key: key.to_string(),
        value: value.to_string(),
    }
    .into()
}

/// Player ids must be positive integers. Anything else is rejected before
/// reaching the store.
pub fn parse_player_id(raw: &str) -> Result<i64> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidPlayerId(raw.to_string()).into()),
    }
}

/// Booleans accept `true` and `false` in any case.
pub fn parse_bool(key: &str, value: &str) -> Result<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(invalid_param(key, value))
    }
}

#[cfg(test)]
mod tests {
    use roster_types::errors::ErrorKind;

    use super::*;

    #[test]
    fn test_parse_player_id() {
        assert_eq!(parse_player_id("1").unwrap(), 1);
        assert_eq!(parse_player_id("9000").unwrap(), 9000);

        for raw in ["0", "-3", "abc", "", "1.5"] {
            let err = parse_player_id(raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedRequest, "id {raw:?}");
        }
    }

    #[test]
    fn test_parse_param() {
        let params = Params::from([
            ("pageSize".to_string(), "10".to_string()),
            ("pageNumber".to_string(), "ten".to_string()),
        ]);

        assert_eq!(parse_param::<i32>(&params, "pageSize").unwrap(), Some(10));
        assert_eq!(parse_param::<i32>(&params, "missing").unwrap(), None);
        assert!(parse_param::<i32>(&params, "pageNumber").is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("banned", "TRUE").unwrap());
        assert!(!parse_bool("banned", "false").unwrap());
        assert!(parse_bool("banned", "yes").is_err());
    }
}
