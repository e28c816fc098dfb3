use std::convert::Infallible;

use puzzlecraft_generator::MazeSeed;

/// Parses `--seed`: 64 hex characters are taken as the seed itself, anything
/// else is hashed into one.
pub(crate) fn parse_seed(s: &str) -> Result<MazeSeed, Infallible> {
    Ok(s.parse().unwrap_or_else(|_| MazeSeed::from_phrase(s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_or_phrase() {
        let hex = "ab".repeat(32);
        assert_eq!(parse_seed(&hex), Ok(MazeSeed::new([0xab; 32])));
        assert_eq!(parse_seed("maze"), Ok(MazeSeed::from_phrase("maze")));
    }
}
