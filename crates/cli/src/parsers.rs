use std::{fmt::Display, str::FromStr};

/// Oldest age accepted on the command line.
pub const MAX_AGE: u32 = 150;

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let cleaned = s.trim().replace('_', "");
    let value = cleaned
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse an age in years, constrained to `[0, MAX_AGE]`.
///
/// # Errors
/// Returns an error if the input is not a number or falls outside the range.
pub fn parse_age(s: &str) -> Result<u32, String> {
    parse_bounded_number(s, 0, Some(MAX_AGE))
}
