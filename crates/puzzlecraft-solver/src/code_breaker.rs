//! Feedback-guided code breaking.
//!
//! The breaker keeps every code that is still consistent with the feedback
//! seen so far, guesses one of them uniformly at random, and prunes the rest
//! with the new feedback.

use log::{debug, trace};
use puzzlecraft_core::{Code, CodeError, Feedback};
use rand::{
    Rng,
    seq::{IndexedRandom as _, SliceRandom as _},
};

/// One guess and the feedback it received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    /// The code that was guessed.
    pub guess: Code,
    /// The feedback for the guess.
    pub feedback: Feedback,
}

/// The result of [`run_guesser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The guess that matched the secret, or `None` if the game was lost.
    pub found: Option<Code>,
    /// Every attempt made, in order.
    pub attempts: Vec<Attempt>,
}

impl GuessOutcome {
    /// Returns the number of guesses made.
    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }
}

/// The candidate set of a code-breaking game.
///
/// # Examples
///
/// ```
/// use puzzlecraft_core::{Code, Feedback};
/// use puzzlecraft_solver::CodeBreaker;
///
/// let mut breaker = CodeBreaker::new(3);
/// assert_eq!(breaker.candidates().len(), 720);
///
/// // Nothing in "012" is part of the secret.
/// breaker.record("012".parse()?, Feedback::new(0, 0));
/// assert_eq!(breaker.candidates().len(), 210);
/// # Ok::<(), puzzlecraft_core::CodeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CodeBreaker {
    candidates: Vec<Code>,
    history: Vec<Attempt>,
}

impl CodeBreaker {
    /// Creates a breaker for secrets of `length` distinct digits.
    ///
    /// A length outside `1..=10` leaves no candidates.
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            candidates: Code::all_distinct(length),
            history: Vec::new(),
        }
    }

    /// Returns the codes still consistent with every recorded attempt.
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Returns the recorded attempts.
    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    /// Picks the next guess uniformly among the remaining candidates.
    ///
    /// Returns `None` when no candidate is left.
    pub fn next_guess<R>(&self, rng: &mut R) -> Option<Code>
    where
        R: Rng + ?Sized,
    {
        self.candidates.choose(rng).copied()
    }

    /// Records the feedback for `guess` and drops every candidate that would
    /// have produced different feedback.
    pub fn record(&mut self, guess: Code, feedback: Feedback) {
        let before = self.candidates.len();
        self.candidates
            .retain(|candidate| candidate.evaluate(&guess) == feedback);
        trace!(
            "{guess} -> {feedback}: {before} -> {} candidates",
            self.candidates.len()
        );
        self.history.push(Attempt { guess, feedback });
    }
}

/// Plays a full game against `secret`.
///
/// Stops when the secret is guessed, when no candidate is left, or after
/// `max_attempts` guesses if a budget is given.
///
/// # Examples
///
/// ```
/// use puzzlecraft_core::Code;
/// use puzzlecraft_solver::run_guesser;
///
/// let secret: Code = "4071".parse()?;
/// let outcome = run_guesser(&secret, None, &mut rand::rng());
/// assert_eq!(outcome.found, Some(secret));
/// assert_eq!(outcome.attempts.last().map(|a| a.guess), Some(secret));
/// # Ok::<(), puzzlecraft_core::CodeError>(())
/// ```
pub fn run_guesser<R>(secret: &Code, max_attempts: Option<usize>, rng: &mut R) -> GuessOutcome
where
    R: Rng + ?Sized,
{
    let mut breaker = CodeBreaker::new(secret.len());
    let mut found = None;
    while max_attempts.is_none_or(|max| breaker.history().len() < max) {
        let Some(guess) = breaker.next_guess(rng) else {
            break;
        };
        let feedback = secret.evaluate(&guess);
        breaker.record(guess, feedback);
        if feedback.exact == secret.len() {
            found = Some(guess);
            break;
        }
    }
    debug!(
        "code breaker: {} after {} attempts",
        if found.is_some() { "cracked" } else { "gave up" },
        breaker.history().len()
    );
    GuessOutcome {
        found,
        attempts: breaker.history,
    }
}

/// Draws a secret of `length` distinct digits.
///
/// # Errors
///
/// Returns [`CodeError::InvalidLength`] if `length` is outside `1..=10`.
pub fn random_secret<R>(length: usize, rng: &mut R) -> Result<Code, CodeError>
where
    R: Rng + ?Sized,
{
    let mut digits: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    digits.shuffle(rng);
    let chosen = digits
        .get(..length)
        .ok_or(CodeError::InvalidLength { length })?;
    Code::from_digits(chosen)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_cracks_every_seeded_game() {
        for seed in 0..20 {
            let mut rng = Pcg64::seed_from_u64(seed);
            let secret = random_secret(4, &mut rng).unwrap();
            let outcome = run_guesser(&secret, None, &mut rng);
            assert_eq!(outcome.found, Some(secret), "seed {seed}");
            let last = outcome.attempts.last().unwrap();
            assert_eq!(last.guess, secret);
            assert_eq!(last.feedback, Feedback::new(4, 0));
            assert!(outcome.attempt_count() <= 10, "seed {seed}");
        }
    }

    #[test]
    fn test_same_seed_replays_same_game() {
        let secret: Code = "5820".parse().unwrap();
        let first = run_guesser(&secret, None, &mut Pcg64::seed_from_u64(7));
        let second = run_guesser(&secret, None, &mut Pcg64::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_attempt_budget_is_respected() {
        let secret: Code = "012345".parse().unwrap();
        let outcome = run_guesser(&secret, Some(1), &mut Pcg64::seed_from_u64(1));
        assert_eq!(outcome.attempt_count(), 1);

        let outcome = run_guesser(&secret, Some(0), &mut Pcg64::seed_from_u64(1));
        assert_eq!(outcome.found, None);
        assert!(outcome.attempts.is_empty());
    }

    #[test]
    fn test_every_guess_is_consistent_with_earlier_feedback() {
        let secret: Code = "9376".parse().unwrap();
        let outcome = run_guesser(&secret, None, &mut Pcg64::seed_from_u64(3));
        for (i, attempt) in outcome.attempts.iter().enumerate() {
            for earlier in &outcome.attempts[..i] {
                assert_eq!(attempt.guess.evaluate(&earlier.guess), earlier.feedback);
            }
        }
    }

    #[test]
    fn test_record_keeps_secret_as_candidate() {
        let secret: Code = "314".parse().unwrap();
        let mut breaker = CodeBreaker::new(3);
        for guess in ["012", "345", "413"] {
            let guess: Code = guess.parse().unwrap();
            breaker.record(guess, secret.evaluate(&guess));
            assert!(breaker.candidates().contains(&secret));
        }
        assert_eq!(breaker.history().len(), 3);
    }

    #[test]
    fn test_random_secret_lengths() {
        let mut rng = Pcg64::seed_from_u64(11);
        for length in 1..=10 {
            let secret = random_secret(length, &mut rng).unwrap();
            assert_eq!(secret.len(), length);
        }
        assert_eq!(
            random_secret(0, &mut rng),
            Err(CodeError::InvalidLength { length: 0 })
        );
        assert_eq!(
            random_secret(11, &mut rng),
            Err(CodeError::InvalidLength { length: 11 })
        );
    }
}
