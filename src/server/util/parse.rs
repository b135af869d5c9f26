use chrono::Duration;

use crate::server::error::config::ConfigError;

/// Parses a token lifetime such as `30m`, `12h`, `1d` or a bare number of seconds.
///
/// Supported suffixes are `s`, `m`, `h` and `d`. The value must be a positive integer.
///
/// # Arguments
/// - `name` - Name of the environment variable being parsed, used in errors
/// - `value` - The raw value to parse
///
/// # Returns
/// - `Ok(Duration)` - Successfully parsed lifetime
/// - `Err(ConfigError::InvalidEnvVar)` - Empty, non-numeric, zero or unknown suffix
pub fn parse_duration(name: &str, value: &str) -> Result<Duration, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: format!("'{}' {}", value, reason),
    };

    let value = value.trim();
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (amount, unit) = value.split_at(split);

    let amount = amount
        .parse::<i64>()
        .map_err(|_| invalid("does not start with a number"))?;
    if amount <= 0 {
        return Err(invalid("must be greater than zero"));
    }

    match unit {
        "" | "s" => Ok(Duration::seconds(amount)),
        "m" => Ok(Duration::minutes(amount)),
        "h" => Ok(Duration::hours(amount)),
        "d" => Ok(Duration::days(amount)),
        _ => Err(invalid("has an unknown unit, expected s, m, h or d")),
    }
}
