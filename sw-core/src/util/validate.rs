use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Word characters and dashes, 2 to 20 characters.
    static ref USERNAME: Regex = Regex::new(r"^[\w-]{2,20}$").unwrap();
}

pub fn is_valid_username(name: &str) -> bool {
    USERNAME.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_word_characters_and_dashes() {
        assert!(is_valid_username("jane"));
        assert!(is_valid_username("jane_doe-42"));
    }

    #[test]
    fn reject_invalid_names() {
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("j"));
        assert!(!is_valid_username("jane doe"));
        assert!(!is_valid_username("jane@example.com"));
        assert!(!is_valid_username(&"x".repeat(21)));
    }
}
