//! Quorum matching for `MULTISIGVERIFY`.
//!
//! Split out from `evaluator.rs` into its own module since the matching
//! rule here is the one piece of this VM with genuinely nontrivial,
//! independently testable logic.

use crate::crypto;

/// Counts, for each public key in order, whether *some* signature in `sigs`
/// verifies against it. A public key contributes at most once even if
/// several signatures would verify against it; a signature may be reused
/// across several public keys, so a repeated public key that matches the
/// same signature counts once per occurrence. This is intentional, not a
/// bug to be normalized away.
pub fn count_quorum(pubkeys: &[[u8; 33]], sigs: &[Vec<u8>], msg: &[u8]) -> usize {
    pubkeys.iter().filter(|pk| sigs.iter().any(|sig| crypto::verify(msg, pk, sig))).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use p256::ecdsa::{signature::Signer, Signature, SigningKey, VerifyingKey};
    use rand::rngs::OsRng;

    fn keypair(msg: &[u8]) -> ([u8; 33], Vec<u8>) {
        let sk = SigningKey::random(&mut OsRng);
        let vk = VerifyingKey::from(&sk);
        let pk: [u8; 33] = vk.to_encoded_point(true).as_bytes().try_into().unwrap();
        let sig: Signature = sk.sign(msg);
        (pk, sig.to_der().as_bytes().to_vec())
    }

    #[test]
    fn distinct_keys_each_count_once() {
        let msg = b"quorum test";
        let (pk1, sig1) = keypair(msg);
        let (pk2, sig2) = keypair(msg);
        let (pk3, _sig3) = keypair(msg);

        let count = count_quorum(&[pk1, pk2, pk3], &[sig1, sig2], msg);
        assert_eq!(count, 2);
    }

    #[test]
    fn duplicate_signature_does_not_grant_extra_credit_beyond_distinct_signers() {
        let msg = b"quorum test";
        let (pk1, sig1) = keypair(msg);
        let (pk2, _sig2) = keypair(msg);

        // sig1 only verifies against pk1: duplicating it in the sig list
        // cannot make it also match pk2.
        let count = count_quorum(&[pk1, pk2], &[sig1.clone(), sig1], msg);
        assert_eq!(count, 1);
    }

    #[test]
    fn repeated_public_key_each_occurrence_counts_toward_quorum() {
        let msg = b"quorum test";
        let (pk1, sig1) = keypair(msg);
        let (pk3, sig3) = keypair(msg);

        // keys = [pk1, pk1, pk3], sigs = [sig1, sig3]: both pk1 occurrences
        // verify against sig1, so the count is 3, not 2.
        let count = count_quorum(&[pk1, pk1, pk3], &[sig1, sig3], msg);
        assert_eq!(count, 3);
    }

    #[test]
    fn repeated_public_key_with_non_matching_signature_fails() {
        let msg = b"quorum test";
        let (pk1, _sig1) = keypair(msg);
        let (pk3, sig3) = keypair(msg);
        let (_pk2, sig2) = keypair(msg);

        let count = count_quorum(&[pk1, pk1, pk3], &[sig2, sig3], msg);
        assert_eq!(count, 1); // only pk3 matches sig3
    }
}
