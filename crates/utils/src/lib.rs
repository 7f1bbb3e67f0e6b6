use rand::{rngs::OsRng, RngCore};
use thiserror::Error;

/// Alphabet for generated labels and secrets. 32 symbols, the visually
/// ambiguous characters `i`, `l`, `o`, `0` and `1` are excluded.
pub const ALPHABET: &[u8; 31] = b"abcdefghjkmnpqrstuvwxyz23456789";

#[derive(Error, Debug)]
#[error("The operating system secure random source is unavailable")]
pub struct RandomSourceError;

/// Creates a random string of the given length with characters drawn
/// uniformly from [`ALPHABET`], using the operating system CSPRNG.
///
/// There is no fallback to a weaker source: if the OS source fails the
/// caller is expected to abort whatever creation it was doing.
pub fn create_random_secret(secret_len: usize) -> Result<String, RandomSourceError> {
    let mut bytes = vec![0u8; secret_len];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|_| RandomSourceError)?;

    // 32 symbols divide 256 evenly, so masking the low five bits keeps
    // the distribution uniform.
    Ok(bytes
        .into_iter()
        .map(|b| ALPHABET[(b & 31) as usize] as char)
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generates_requested_length() {
        for len in &[0, 1, 8, 64, 256] {
            let secret = create_random_secret(*len).unwrap();
            assert_eq!(secret.len(), *len);
        }
    }

    #[test]
    fn draws_only_from_alphabet() {
        let secret = create_random_secret(512).unwrap();
        assert!(secret.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn alphabet_excludes_ambiguous_symbols() {
        for banned in b"ilo01" {
            assert!(!ALPHABET.contains(banned));
        }
    }
}
