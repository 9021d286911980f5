/// RSA-OAEP key pair validation
///
/// Decides whether a published DKIM public key and a caller-supplied private
/// key belong together by encrypting a probe under the public key and
/// decrypting it under the private key.
use crate::constants::KEY_PAIR_PROBE;
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use thiserror::Error;
use tracing::debug;

/// Standard alphabet, padding optional, like a browser's `atob`
const FORGIVING_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Error)]
enum KeyPairError {
    #[error("invalid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("invalid SPKI public key: {0}")]
    PublicKey(#[from] rsa::pkcs8::spki::Error),

    #[error("invalid PKCS8 private key: {0}")]
    PrivateKey(#[from] rsa::pkcs8::Error),

    #[error("RSA-OAEP operation failed: {0}")]
    Crypto(#[from] rsa::Error),
}

/// Returns true only when the two keys form a matching RSA-OAEP/SHA-256 pair.
///
/// Every failure, including malformed input, yields `false`.
pub fn validate_key_pair(public_key_base64: &str, private_key_base64: &str) -> bool {
    match round_trip(public_key_base64, private_key_base64) {
        Ok(matches) => matches,
        Err(e) => {
            debug!(error = %e, "Key pair validation failed");
            false
        }
    }
}

/// Runs [`validate_key_pair`] on the blocking pool so RSA work does not stall
/// the async runtime
pub async fn validate_key_pair_async(public_key_base64: String, private_key_base64: String) -> bool {
    tokio::task::spawn_blocking(move || validate_key_pair(&public_key_base64, &private_key_base64))
        .await
        .unwrap_or(false)
}

fn round_trip(public_key_base64: &str, private_key_base64: &str) -> Result<bool, KeyPairError> {
    let public_der = decode_base64(public_key_base64)?;
    let private_der = decode_base64(private_key_base64)?;

    let public_key = RsaPublicKey::from_public_key_der(&public_der)?;
    let private_key = RsaPrivateKey::from_pkcs8_der(&private_der)?;

    let mut rng = rand::thread_rng();
    let ciphertext = public_key.encrypt(&mut rng, Oaep::new::<Sha256>(), KEY_PAIR_PROBE)?;
    let plaintext = private_key.decrypt(Oaep::new::<Sha256>(), &ciphertext)?;

    Ok(plaintext == KEY_PAIR_PROBE)
}

fn decode_base64(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: String = input
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    FORGIVING_BASE64.decode(compact)
}
