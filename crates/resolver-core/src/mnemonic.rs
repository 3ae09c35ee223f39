use bip39::{Language, Mnemonic};
use rand::RngCore;
use zeroize::Zeroizing;

use crate::error::MnemonicError;

/// Word counts BIP-39 defines (128 to 256 bits of entropy).
pub const VALID_WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Generate a fresh English mnemonic with the given number of words.
pub fn generate_mnemonic(word_count: usize) -> Result<Vec<String>, MnemonicError> {
    if !VALID_WORD_COUNTS.contains(&word_count) {
        return Err(MnemonicError::UnsupportedWordCount(word_count));
    }

    // 3 words per 32 bits of entropy
    let entropy_len = word_count / 3 * 4;
    let mut entropy = Zeroizing::new([0u8; 32]);
    rand::rngs::OsRng.fill_bytes(&mut entropy[..entropy_len]);

    let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy[..entropy_len])
        .map_err(|e| MnemonicError::Invalid(e.to_string()))?;
    let phrase = Zeroizing::new(mnemonic.to_string());
    Ok(phrase.split_whitespace().map(str::to_owned).collect())
}

/// Join the words and recover the BIP-39 entropy, checksum included in
/// the validation. The returned buffer is cleared on drop.
pub fn words_to_entropy<S: AsRef<str>>(words: &[S]) -> Result<Zeroizing<Vec<u8>>, MnemonicError> {
    let phrase = Zeroizing::new(
        words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" "),
    );
    let mnemonic = Mnemonic::parse_in_normalized(Language::English, &phrase)
        .map_err(|e| MnemonicError::Invalid(e.to_string()))?;
    Ok(Zeroizing::new(mnemonic.to_entropy()))
}

/// Whether the words form a valid English mnemonic.
pub fn validate_words<S: AsRef<str>>(words: &[S]) -> bool {
    words_to_entropy(words).is_ok()
}

/// Validate a single word against the BIP-39 word list
pub fn is_valid_word(word: &str) -> bool {
    Language::English.find_word(word).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abandon_about() -> Vec<&'static str> {
        let mut words = vec!["abandon"; 11];
        words.push("about");
        words
    }

    #[test]
    fn abandon_about_entropy_is_zero() {
        let entropy = words_to_entropy(&abandon_about()).unwrap();
        assert_eq!(entropy.as_slice(), &[0u8; 16]);
    }

    #[test]
    fn twenty_four_word_entropy() {
        let mut words = vec!["abandon"; 23];
        words.push("art");
        let entropy = words_to_entropy(&words).unwrap();
        assert_eq!(entropy.as_slice(), &[0u8; 32]);
    }

    #[test]
    fn bad_checksum_rejected() {
        let words = vec!["abandon"; 12];
        assert!(matches!(
            words_to_entropy(&words),
            Err(MnemonicError::Invalid(_))
        ));
    }

    #[test]
    fn bad_word_count_rejected() {
        let words = vec!["abandon"; 11];
        assert!(words_to_entropy(&words).is_err());
        assert!(words_to_entropy::<&str>(&[]).is_err());
    }

    #[test]
    fn unknown_word_rejected() {
        let mut words = abandon_about();
        words[3] = "notaword";
        assert!(!validate_words(&words));
    }

    #[test]
    fn owned_strings_accepted() {
        let words: Vec<String> = abandon_about().into_iter().map(String::from).collect();
        assert!(validate_words(&words));
    }

    #[test]
    fn generate_every_word_count() {
        for count in VALID_WORD_COUNTS {
            let words = generate_mnemonic(count).unwrap();
            assert_eq!(words.len(), count);
            assert!(validate_words(&words));
        }
    }

    #[test]
    fn generate_unsupported_count() {
        assert!(matches!(
            generate_mnemonic(13),
            Err(MnemonicError::UnsupportedWordCount(13))
        ));
    }

    #[test]
    fn generated_mnemonics_differ() {
        assert_ne!(generate_mnemonic(24).unwrap(), generate_mnemonic(24).unwrap());
    }

    #[test]
    fn test_is_valid_word() {
        assert!(is_valid_word("abandon"));
        assert!(is_valid_word("zoo"));
        assert!(!is_valid_word("notaword"));
        assert!(!is_valid_word(""));
    }
}
