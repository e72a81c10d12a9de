//! `CryptoOracle`: the opaque `verify(msg, pk_compressed, sig_der) -> bool`
//! collaborator the SIGVERIFY/MULTISIGVERIFY opcodes call into. This is the
//! one place the VM actually touches a concrete curve; everywhere else
//! cryptographic material is just bytes on the stack.
//!
//! Curve is NIST P-256 (secp256r1), via the `p256` crate:
//! `VerifyingKey::from_sec1_bytes` for the compressed point,
//! `Signature::from_der` for the DER encoding, and the `Verifier` trait
//! (SHA-256 prehash) for the actual check.

use p256::ecdsa::{signature::Verifier, Signature, VerifyingKey};

/// Verifies `sig_der` over `sha256(msg)` against `pk_compressed` on P-256.
///
/// Never panics: a malformed point, a non-curve point, the identity point,
/// or a malformed DER signature all map to `false` rather than an error.
pub fn verify(msg: &[u8], pk_compressed: &[u8; 33], sig_der: &[u8]) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_sec1_bytes(pk_compressed) else {
        return false;
    };
    let Ok(signature) = Signature::from_der(sig_der) else {
        return false;
    };
    verifying_key.verify(msg, &signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use p256::ecdsa::{signature::Signer, SigningKey};
    use rand::rngs::OsRng;

    fn fresh_keypair() -> (SigningKey, [u8; 33]) {
        let signing_key = SigningKey::random(&mut OsRng);
        let verifying_key = VerifyingKey::from(&signing_key);
        let encoded = verifying_key.to_encoded_point(true);
        let pk: [u8; 33] = encoded.as_bytes().try_into().expect("compressed point is 33 bytes");
        (signing_key, pk)
    }

    #[test]
    fn valid_signature_over_correct_message_verifies() {
        let (sk, pk) = fresh_keypair();
        let msg = b"xsig test message";
        let sig: Signature = sk.sign(msg);
        assert!(verify(msg, &pk, sig.to_der().as_bytes()));
    }

    #[test]
    fn signature_over_wrong_message_fails() {
        let (sk, pk) = fresh_keypair();
        let sig: Signature = sk.sign(b"original");
        assert!(!verify(b"tampered", &pk, sig.to_der().as_bytes()));
    }

    #[test]
    fn malformed_public_key_never_panics() {
        let sig = [0x30, 0x02, 0x02, 0x00];
        let bad_pk = [0x04u8; 33]; // 0x04 is not a valid compressed prefix
        assert!(!verify(b"msg", &bad_pk, &sig));
    }

    #[test]
    fn malformed_der_signature_never_panics() {
        let (_, pk) = fresh_keypair();
        assert!(!verify(b"msg", &pk, &[]));
        assert!(!verify(b"msg", &pk, &[0x30]));
        assert!(!verify(b"msg", &pk, &[0x30, 0xFF, 0x01]));
    }
}
