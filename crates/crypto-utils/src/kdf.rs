use sha2::Sha512;

use crate::error::CryptoError;

/// PBKDF2 with HMAC-SHA512 as the PRF (RFC 8018), filling `out`.
///
/// Used for the Icarus root key construction, where the password is the
/// optional spending password and the salt is the BIP-39 entropy.
pub fn pbkdf2_hmac_sha512(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    out: &mut [u8],
) -> Result<(), CryptoError> {
    if rounds == 0 {
        return Err(CryptoError::KdfFailed("rounds must be non-zero".into()));
    }
    if out.is_empty() {
        return Err(CryptoError::InvalidOutputLength(0));
    }

    pbkdf2::pbkdf2_hmac::<Sha512>(password, salt, rounds, out);
    Ok(())
}
