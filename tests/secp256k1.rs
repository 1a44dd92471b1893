use cryptography::hash::sha256::core::sha256;
use cryptography::primitives::U256;
use cryptography::signatures::secp256k1::{self, PrivateKey, Signature};

fn hex(s: &str) -> U256 {
    U256::from_hex(s).expect("test vector must be 64 hex digits")
}

#[test]
fn sign_known_answer() {
    let d = hex("f94a840f1e1a901843a75dd07ffcc5c84478dc4f987797474c9393ac53ab55e6");
    let sk = PrivateKey::new(d).expect("d is in [1, n-1]");

    let k: u64 = 0x3039;
    let z_expected = sha256(b"");
    assert_eq!(
        z_expected,
        hex("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    );

    let sig = secp256k1::sign(&sk, b"", k).expect("valid private key and nonce");

    let expected_r = hex("f01d6b9018ab421dd410404cb869072065522bf85734008f105cf385a023a80f");
    let expected_s = hex("2ffcf4d44cd63a242027bb36287f954f052d73564c3ce5e0191c890166d1afc2");

    assert_eq!(sig.r, expected_r);
    assert_eq!(sig.s, expected_s);

    let pk = secp256k1::derive_public_key(&sk);
    assert!(secp256k1::verify(&pk, b"", &sig).unwrap());

    let wrong_s = hex("9d0b1f4974b76255c5d21695a8b088090dbc4e2e8b89bf43870eca23a1e16fa3");
    let wrong = Signature { r: sig.r, s: wrong_s };
    assert!(!secp256k1::verify(&pk, b"", &wrong).unwrap());
}

#[test]
fn sign_then_verify_round_trip_for_arbitrary_key_and_message() {
    let sk = PrivateKey::new(U256::from(4242u32)).unwrap();
    let pk = secp256k1::derive_public_key(&sk);
    let message = b"the quick brown fox jumps over the lazy dog";

    let sig = secp256k1::sign(&sk, message, 31337u64).unwrap();
    assert!(secp256k1::verify(&pk, message, &sig).unwrap());
}

#[test]
fn verify_rejects_modified_message() {
    let sk = PrivateKey::new(U256::from(77u32)).unwrap();
    let pk = secp256k1::derive_public_key(&sk);

    let sig = secp256k1::sign(&sk, b"original message", 5555u64).unwrap();
    assert!(!secp256k1::verify(&pk, b"different message", &sig).unwrap());
}

#[test]
fn verify_rejects_unrelated_public_key() {
    let sk = PrivateKey::new(U256::from(101u32)).unwrap();
    let other_sk = PrivateKey::new(U256::from(202u32)).unwrap();
    let other_pk = secp256k1::derive_public_key(&other_sk);

    let sig = secp256k1::sign(&sk, b"message", 909u64).unwrap();
    assert!(!secp256k1::verify(&other_pk, b"message", &sig).unwrap());
}

#[test]
fn zero_private_key_is_rejected_at_construction() {
    assert!(PrivateKey::new(U256::ZERO).is_err());
}

#[test]
fn private_key_at_or_above_group_order_is_rejected() {
    assert!(PrivateKey::new(secp256k1::N).is_err());
}

#[test]
fn zero_nonce_is_rejected_by_sign() {
    let sk = PrivateKey::new(U256::from(1u8)).unwrap();
    assert!(secp256k1::sign(&sk, b"x", 0u64).is_err());
}

#[test]
fn widest_representable_nonce_is_accepted_by_sign() {
    // `n > 2^64`, so a nonce widened from `u64` can never reach it; this
    // is the largest nonce the public API can even express.
    let sk = PrivateKey::new(U256::from(1u8)).unwrap();
    assert!(secp256k1::sign(&sk, b"x", u64::MAX).is_ok());
}

#[test]
fn derived_public_keys_are_on_curve() {
    for d in [1u32, 2, 3, 4242, 112233] {
        let sk = PrivateKey::new(U256::from(d)).unwrap();
        let pk = secp256k1::derive_public_key(&sk);
        assert!(pk.point().on_curve());
    }
}

#[test]
fn many_nonces_produce_verifiable_signatures() {
    let sk = PrivateKey::new(U256::from(999_999u32)).unwrap();
    let pk = secp256k1::derive_public_key(&sk);

    for (i, k) in [1u64, 2, 3, 99, 10_000, 7_654_321].into_iter().enumerate() {
        let message = format!("message #{i}");
        let sig = secp256k1::sign(&sk, message.as_bytes(), k).unwrap();
        assert!(secp256k1::verify(&pk, message.as_bytes(), &sig).unwrap());
    }
}
