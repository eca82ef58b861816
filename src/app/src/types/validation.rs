use super::config::NumericValue;

pub const PORT_MIN: i64 = 1;
pub const PORT_MAX: i64 = 65535;

/// Validate dotted-quad IPv4 address format.
///
/// Each octet is one to three decimal digits with a value of at most 255.
/// Leading zeros are accepted (`"010"`), signs and whitespace are not.
pub fn is_valid_ip(ip: &str) -> bool {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return false;
    }

    parts.iter().all(|part| {
        !part.is_empty()
            && part.len() <= 3
            && part.bytes().all(|b| b.is_ascii_digit())
            && part.parse::<u16>().is_ok_and(|octet| octet <= 255)
    })
}

/// Port range check on an already coerced value
pub fn port_in_range(port: i64) -> bool {
    (PORT_MIN..=PORT_MAX).contains(&port)
}

/// Port check on raw form text: integer-parseable and in range
pub fn is_valid_port(raw: &str) -> bool {
    parse_int(raw).is_some_and(port_in_range)
}

/// Integer coercion of raw form text.
///
/// Skips leading whitespace, accepts an optional sign, then reads the leading
/// run of decimal digits and ignores the rest (`"6454abc"` gives 6454,
/// `"12.7"` gives 12). Returns `None` when no digit follows, or when the
/// digits do not fit into an `i64`.
pub fn parse_int(raw: &str) -> NumericValue {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = rest[..digits_len].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
