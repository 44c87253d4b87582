//! Per-value labels
//!
//! Every integer maps to exactly one label: `fizz` when divisible by 3,
//! `buzz` when divisible by 5, both segments concatenated when divisible by
//! both, and the decimal digits of the integer otherwise.

use std::fmt;

/// Segment emitted for multiples of 3
pub const FIZZ: &[u8] = b"fizz";

/// Segment emitted for multiples of 5
pub const BUZZ: &[u8] = b"buzz";

/// The text emitted for a single integer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Fizz,
    Buzz,
    FizzBuzz,
    Number(u64),
}

impl Label {
    /// Classify a value by divisibility
    ///
    /// # Example
    ///
    /// ```
    /// use buffered_fizzbuzz::Label;
    ///
    /// assert_eq!(Label::for_value(9), Label::Fizz);
    /// assert_eq!(Label::for_value(10), Label::Buzz);
    /// assert_eq!(Label::for_value(30), Label::FizzBuzz);
    /// assert_eq!(Label::for_value(7), Label::Number(7));
    /// ```
    #[inline]
    pub fn for_value(value: u64) -> Self {
        let is_fizz = value % 3 == 0;
        let is_buzz = value % 5 == 0;

        match (is_fizz, is_buzz) {
            (true, true) => Label::FizzBuzz,
            (true, false) => Label::Fizz,
            (false, true) => Label::Buzz,
            (false, false) => Label::Number(value),
        }
    }

    /// Append the label bytes to `buf` (without a trailing newline)
    #[inline]
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        match *self {
            Label::Fizz => buf.extend_from_slice(FIZZ),
            Label::Buzz => buf.extend_from_slice(BUZZ),
            Label::FizzBuzz => {
                buf.extend_from_slice(FIZZ);
                buf.extend_from_slice(BUZZ);
            }
            Label::Number(n) => itoap::write_to_vec(buf, n),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Label::Fizz => f.write_str("fizz"),
            Label::Buzz => f.write_str("buzz"),
            Label::FizzBuzz => f.write_str("fizzbuzz"),
            Label::Number(n) => write!(f, "{n}"),
        }
    }
}
