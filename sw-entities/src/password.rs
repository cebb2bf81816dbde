use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

/// A bcrypt-hashed password.
///
/// Parsing from a string hashes the plain text; the plain text itself is
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn verify(&self, plain: &str) -> bool {
        bcrypt::verify(plain, &self.0)
    }
}

#[derive(Debug, Error)]
#[error("Invalid password")]
pub struct ParseError;

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(plain: &str) -> Result<Self, Self::Err> {
        if plain.is_empty() || plain.chars().any(char::is_whitespace) {
            return Err(ParseError);
        }
        let hash = bcrypt::hash(plain).map_err(|_| ParseError)?;
        Ok(Self(hash))
    }
}
