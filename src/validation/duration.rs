//! 时长解析模块
//!
//! 解析带符号的时长字符串，例如 `2m`、`-1h30m`、`1.5s`。
//! 与标准库的 `Duration` 不同，这里允许负值，便于校验器报告"不能小于零"。

use thiserror::Error;

const NANOSECOND: u128 = 1;
const MICROSECOND: u128 = 1_000 * NANOSECOND;
const MILLISECOND: u128 = 1_000 * MICROSECOND;
const SECOND: u128 = 1_000 * MILLISECOND;
const MINUTE: u128 = 60 * SECOND;
const HOUR: u128 = 60 * MINUTE;

/// 时长解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },
}

/// 带符号的时长，单位为纳秒
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SignedDuration {
    nanos: i64,
}

impl SignedDuration {
    pub fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    pub fn as_nanos(&self) -> i64 {
        self.nanos
    }

    pub fn is_negative(&self) -> bool {
        self.nanos < 0
    }
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "µs" | "μs" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// 解析时长字符串
///
/// 格式为可选符号加一个或多个 `<数字><单位>` 片段，单位支持
/// `ns`、`us`、`µs`、`ms`、`s`、`m`、`h`。单独的 `0` 合法。
///
/// # Examples
///
/// ```rust
/// use mastercheck::validation::parse_duration;
///
/// assert_eq!(parse_duration("2m").unwrap().as_nanos(), 120_000_000_000);
/// assert!(parse_duration("-2m").unwrap().is_negative());
/// assert!(parse_duration("2").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<SignedDuration, DurationParseError> {
    let invalid = || DurationParseError::Invalid(input.to_string());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(SignedDuration::from_nanos(0));
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let first = rest.as_bytes()[0];
        if !(first == b'.' || first.is_ascii_digit()) {
            return Err(invalid());
        }

        // integer part
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let whole: u128 = if int_len > 0 {
            rest[..int_len].parse().map_err(|_| invalid())?
        } else {
            0
        };
        rest = &rest[int_len..];

        // fraction part
        let mut fraction: u128 = 0;
        let mut scale: u128 = 1;
        let mut frac_len = 0;
        if let Some(after_dot) = rest.strip_prefix('.') {
            frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
            for digit in after_dot[..frac_len].bytes() {
                // digits beyond nanosecond precision are dropped
                if scale >= 10u128.pow(18) {
                    break;
                }
                fraction = fraction * 10 + u128::from(digit - b'0');
                scale *= 10;
            }
            rest = &after_dot[frac_len..];
        }
        if int_len == 0 && frac_len == 0 {
            return Err(invalid());
        }

        let unit_len = rest
            .char_indices()
            .find(|(_, c)| *c == '.' || c.is_ascii_digit())
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return Err(DurationParseError::MissingUnit(input.to_string()));
        }
        let unit = &rest[..unit_len];
        let per_unit = unit_nanos(unit).ok_or_else(|| DurationParseError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;
        rest = &rest[unit_len..];

        let value = whole
            .checked_mul(per_unit)
            .and_then(|v| v.checked_add(fraction * per_unit / scale))
            .ok_or_else(invalid)?;
        total = total.checked_add(value).ok_or_else(invalid)?;
        if total > i64::MAX as u128 + 1 {
            return Err(invalid());
        }
    }

    let nanos = if negative {
        i64::try_from(-(total as i128)).map_err(|_| invalid())?
    } else {
        i64::try_from(total).map_err(|_| invalid())?
    };
    Ok(SignedDuration::from_nanos(nanos))
}
