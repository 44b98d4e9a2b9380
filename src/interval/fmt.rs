use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use super::Interval;

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.overflows() {
            write!(f, "Interval<{},{} overflowing>", self.location, self.size)
        } else {
            write!(f, "Interval<{},{}>", self.location, self.size)
        }
    }
}

/// Renders the interval as `{location,size}`.
impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.location, self.size)
    }
}

/// Parses the `{location,size}` form produced by `Display`.
///
/// Each of the three delimiters may be any single character, only the two
/// decimal fields are checked.
///
/// # Examples
///
/// ```rust
/// use index_intervals::Interval;
///
/// let iv: Interval = "{7,42}".parse().unwrap();
/// assert_eq!(iv, Interval::new(7, 42));
/// assert_eq!("[7;42]".parse::<Interval>().unwrap(), iv);
/// assert!("{7,}".parse::<Interval>().is_err());
/// ```
impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = skip_delimiter(s)?;
        let (location, rest) = parse_field(rest, Field::Location)?;
        let rest = skip_delimiter(rest)?;
        let (size, rest) = parse_field(rest, Field::Size)?;
        let rest = skip_delimiter(rest)?;

        if !rest.is_empty() {
            return Err(ParseIntervalError { kind: ErrorKind::TrailingInput });
        }

        Ok(Interval::new(location, size))
    }
}

fn skip_delimiter(s: &str) -> Result<&str, ParseIntervalError> {
    let mut chars = s.chars();
    match chars.next() {
        Some(_) => Ok(chars.as_str()),
        None => Err(ParseIntervalError { kind: ErrorKind::MissingDelimiter }),
    }
}

fn parse_field(s: &str, field: Field) -> Result<(usize, &str), ParseIntervalError> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    let (number, rest) = s.split_at(digits);
    number
        .parse()
        .map(|value| (value, rest))
        .map_err(|_| ParseIntervalError { kind: ErrorKind::InvalidDigits { field } })
}

/// An error which can be returned when parsing an [`Interval`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntervalError {
    kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorKind {
    MissingDelimiter,
    InvalidDigits { field: Field },
    TrailingInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Location,
    Size,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Field::Location => f.write_str("location"),
            Field::Size => f.write_str("size"),
        }
    }
}

impl Display for ParseIntervalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::MissingDelimiter => f.write_str("interval literal ended before a delimiter"),
            ErrorKind::InvalidDigits { field } => {
                write!(f, "interval {field} is missing or does not fit in a usize")
            }
            ErrorKind::TrailingInput => f.write_str("unexpected input after interval literal"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseIntervalError {}
