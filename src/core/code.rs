//! Digit codes for the code-breaking game

use super::symbol::Symbol;
use rand::Rng;
use std::fmt;

/// A single decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, `None` if `value > 9`
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Self(value)) } else { None }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Symbol for Digit {
    fn from_key(key: char) -> Option<Self> {
        key.to_digit(10).map(|d| Self(d as u8))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength { expected: usize, actual: usize },
    InvalidDigit(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Code must have exactly {expected} digits, got {actual}")
            }
            Self::InvalidDigit(ch) => write!(f, "'{ch}' is not a digit"),
        }
    }
}

impl std::error::Error for CodeError {}

/// A sequence of digits; repeats are allowed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code(Vec<Digit>);

impl Code {
    /// Draw `len` independent random digits
    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        Self((0..len).map(|_| Digit(rng.random_range(0..10))).collect())
    }

    /// Parse a code like "1223"
    ///
    /// # Errors
    /// Returns `CodeError` if the text is not exactly `len` decimal digits.
    ///
    /// # Examples
    /// ```
    /// use termo::core::Code;
    ///
    /// let code = Code::parse("0429", 4).unwrap();
    /// assert_eq!(code.to_string(), "0429");
    /// assert!(Code::parse("12a4", 4).is_err());
    /// ```
    pub fn parse(text: &str, len: usize) -> Result<Self, CodeError> {
        let digits = text
            .trim()
            .chars()
            .map(|ch| Digit::from_key(ch).ok_or(CodeError::InvalidDigit(ch)))
            .collect::<Result<Vec<_>, _>>()?;

        if digits.len() != len {
            return Err(CodeError::InvalidLength {
                expected: len,
                actual: digits.len(),
            });
        }

        Ok(Self(digits))
    }

    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Code> for Vec<Digit> {
    fn from(code: Code) -> Self {
        code.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn digit_bounds() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert!(Digit::new(10).is_none());
    }

    #[test]
    fn digit_from_key() {
        assert_eq!(Digit::from_key('7'), Digit::new(7));
        assert!(Digit::from_key('a').is_none());
        assert!(Digit::from_key(' ').is_none());
    }

    #[test]
    fn random_code_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [4, 5] {
            let code = Code::random(len, &mut rng);
            assert_eq!(code.len(), len);
            assert!(code.digits().iter().all(|d| d.value() <= 9));
        }
    }

    #[test]
    fn random_code_allows_repeats() {
        // 4 draws of 10 digits: across enough codes a repeat must show up
        let mut rng = StdRng::seed_from_u64(42);
        let has_repeat = (0..200).any(|_| {
            let code = Code::random(4, &mut rng);
            let d = code.digits();
            (0..d.len()).any(|i| d[i + 1..].contains(&d[i]))
        });
        assert!(has_repeat);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Code::parse("123", 4),
            Err(CodeError::InvalidLength {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(Code::parse("12x4", 4), Err(CodeError::InvalidDigit('x')));
    }

    #[test]
    fn display_round_trip() {
        let code = Code::parse("00917", 5).unwrap();
        assert_eq!(format!("{code}"), "00917");
    }
}
