//! Secret codes and guess feedback.

use std::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use tinyvec::ArrayVec;

/// Longest supported code: one of each decimal digit.
pub const MAX_CODE_LENGTH: usize = 10;

/// Errors that can occur when building a [`Code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CodeError {
    /// The code is empty or longer than ten digits.
    #[display("code length {length} is outside 1..=10")]
    InvalidLength {
        /// Number of digits supplied.
        length: usize,
    },
    /// A character is not a decimal digit.
    #[display("{ch:?} at position {position} is not a digit")]
    NotADigit {
        /// Zero-based position in the input.
        position: usize,
        /// The offending character.
        ch: char,
    },
    /// A numeric digit is larger than 9.
    #[display("{value} at position {position} is not a decimal digit")]
    DigitOutOfRange {
        /// Zero-based position in the input.
        position: usize,
        /// The offending value.
        value: u8,
    },
    /// A digit appears more than once.
    #[display("digit {digit} appears more than once")]
    RepeatedDigit {
        /// The repeated digit.
        digit: u8,
    },
}

/// A sequence of distinct decimal digits.
///
/// Codes are used both as the hidden secret and as guesses against it.
///
/// # Examples
///
/// ```
/// use puzzlecraft_core::{Code, Feedback};
///
/// let secret: Code = "1234".parse()?;
/// let guess: Code = "1325".parse()?;
/// assert_eq!(secret.evaluate(&guess), Feedback::new(1, 2));
/// # Ok::<(), puzzlecraft_core::CodeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Code {
    digits: ArrayVec<[u8; MAX_CODE_LENGTH]>,
}

impl Code {
    /// Creates a code from numeric digits.
    ///
    /// # Errors
    ///
    /// Returns a [`CodeError`] if the length is outside `1..=10`, a value is
    /// larger than 9, or a digit repeats.
    pub fn from_digits(digits: &[u8]) -> Result<Self, CodeError> {
        if !(1..=MAX_CODE_LENGTH).contains(&digits.len()) {
            return Err(CodeError::InvalidLength {
                length: digits.len(),
            });
        }
        let mut seen = [false; 10];
        let mut code = ArrayVec::new();
        for (position, &value) in digits.iter().enumerate() {
            let slot = seen
                .get_mut(usize::from(value))
                .ok_or(CodeError::DigitOutOfRange { position, value })?;
            if *slot {
                return Err(CodeError::RepeatedDigit { digit: value });
            }
            *slot = true;
            code.push(value);
        }
        Ok(Self { digits: code })
    }

    /// Returns the digits of the code.
    #[must_use]
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Returns the number of digits.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` if the code holds no digits.
    ///
    /// Only [`Code::default`] is empty; validated codes never are.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Scores `guess` against `self` taken as the secret.
    ///
    /// `exact` counts positions holding the same digit. `partial` counts the
    /// remaining common digits: for every digit, the smaller of its counts in
    /// the two codes, summed, minus `exact`.
    #[must_use]
    pub fn evaluate(&self, guess: &Code) -> Feedback {
        let exact = self
            .digits
            .iter()
            .zip(guess.digits.iter())
            .filter(|(a, b)| a == b)
            .count();
        let mut secret_counts = [0_usize; 10];
        let mut guess_counts = [0_usize; 10];
        for &d in self.digits.iter() {
            secret_counts[usize::from(d)] += 1;
        }
        for &d in guess.digits.iter() {
            guess_counts[usize::from(d)] += 1;
        }
        let common = secret_counts
            .iter()
            .zip(&guess_counts)
            .map(|(&s, &g)| s.min(g))
            .sum::<usize>();
        Feedback::new(exact, common - exact)
    }

    /// Returns every code of `length` distinct digits in lexicographic order.
    ///
    /// Returns an empty list if `length` is outside `1..=10`.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzlecraft_core::Code;
    ///
    /// let codes = Code::all_distinct(2);
    /// assert_eq!(codes.len(), 90);
    /// assert_eq!(codes[0].to_string(), "01");
    /// assert_eq!(codes[89].to_string(), "98");
    /// ```
    #[must_use]
    pub fn all_distinct(length: usize) -> Vec<Code> {
        fn extend(prefix: &mut Code, used: &mut [bool; 10], length: usize, out: &mut Vec<Code>) {
            if prefix.len() == length {
                out.push(*prefix);
                return;
            }
            for digit in 0..10_u8 {
                if used[usize::from(digit)] {
                    continue;
                }
                used[usize::from(digit)] = true;
                prefix.digits.push(digit);
                extend(prefix, used, length, out);
                prefix.digits.pop();
                used[usize::from(digit)] = false;
            }
        }

        let mut out = Vec::new();
        if (1..=MAX_CODE_LENGTH).contains(&length) {
            extend(&mut Code::default(), &mut [false; 10], length, &mut out);
        }
        out
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                ch.to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .ok_or(CodeError::NotADigit { position, ch })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_digits(&digits)
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in self.digits.iter() {
            f.write_char(char::from(b'0' + d))?;
        }
        Ok(())
    }
}

/// The response to a guess: how many digits are in the right place and how
/// many are present elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{exact} exact, {partial} partial")]
pub struct Feedback {
    /// Digits in the right position.
    pub exact: usize,
    /// Digits present in the secret but in a different position.
    pub partial: usize,
}

impl Feedback {
    /// Creates a feedback value.
    #[must_use]
    #[inline]
    pub const fn new(exact: usize, partial: usize) -> Self {
        Self { exact, partial }
    }
}
