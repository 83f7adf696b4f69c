//! Float precision inference for re-serializing configuration values.
//!
//! A value read as `"1.2345"` should be written back with four decimals, not
//! rounded to a fixed width. [`float_precision`] counts the digits after the
//! decimal point (never fewer than [`MIN_FLOAT_PRECISION`]) and the
//! [`FloatFormat`] builders turn that into a printf-style `KEY = %.Nf` line.

use core::fmt;

/// Lowest precision ever inferred.
pub const MIN_FLOAT_PRECISION: usize = 3;

/// Infer the decimal precision of a numeric literal.
///
/// Counts the digits immediately following the first `.`, stopping at the
/// first non-digit. Literals without a decimal point, and empty strings,
/// yield [`MIN_FLOAT_PRECISION`].
///
/// ```
/// use joint_config::format::float_precision;
///
/// assert_eq!(float_precision("1.2345"), 4);
/// assert_eq!(float_precision("7"), 3);
/// ```
pub fn float_precision(literal: &str) -> usize {
    let Some(point) = literal.find('.') else {
        return MIN_FLOAT_PRECISION;
    };

    let digits = literal[point + 1..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    digits.max(MIN_FLOAT_PRECISION)
}

/// A printf-style assignment template: `VAR = %.Nf\n` or `VAR = %.Nf %.Nf\n`.
///
/// Formats itself through [`Display`](fmt::Display), so no allocation is needed
/// to produce the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatFormat<'a> {
    var: &'a str,
    precision: usize,
    fields: usize,
}

impl<'a> FloatFormat<'a> {
    /// Name of the assigned variable.
    pub fn var(&self) -> &'a str {
        self.var
    }

    /// Inferred precision, for rendering values directly with `{:.*}`.
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Number of `%f` fields in the template.
    pub fn fields(&self) -> usize {
        self.fields
    }
}

impl fmt::Display for FloatFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} =", self.var)?;
        for _ in 0..self.fields {
            write!(f, " %.{}f", self.precision)?;
        }
        f.write_str("\n")
    }
}

/// Build a single-field template for `var` using the precision of `literal`.
///
/// ```
/// use joint_config::format::float_format;
///
/// assert_eq!(float_format("FOO", "1.2345").to_string(), "FOO = %.4f\n");
/// ```
pub fn float_format<'a>(var: &'a str, literal: &str) -> FloatFormat<'a> {
    FloatFormat {
        var,
        precision: float_precision(literal),
        fields: 1,
    }
}

/// Build a two-field template for `var`, e.g. for a `scale offset` pair.
///
/// Only the first number in `literal` is measured; its precision is used for
/// both fields.
pub fn float_pair_format<'a>(var: &'a str, literal: &str) -> FloatFormat<'a> {
    FloatFormat {
        var,
        precision: float_precision(literal),
        fields: 2,
    }
}
