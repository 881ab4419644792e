use ecdhx_algorithms::ec::{CurveParameters, KeyPair, Point, PrivateKey, PublicKey, SharedSecret};
use ecdhx_exchange::{handle_session, initiate, wire, ChannelTransport};
use ecdhx_sign::{sign_prehashed, verify_prehashed};
use num_bigint::BigUint;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::thread;

#[test]
fn unit_private_key_gives_generator() {
    let curve = CurveParameters::p256();
    let one = PrivateKey::from_scalar(&curve, &BigUint::from(1u32)).unwrap();
    let public = PublicKey::derive(&curve, &one).unwrap();
    assert_eq!(public.point(), curve.generator());
}

#[test]
fn group_order_annihilates_generator() {
    let curve = CurveParameters::p256();
    assert_eq!(curve.mul_base(curve.n()).unwrap(), Point::Identity);
    assert!(PrivateKey::from_scalar(&curve, curve.n()).is_err());

    let n_minus_one = curve.n().clone() - 1u32;
    let last = curve.mul_base(&n_minus_one).unwrap();
    assert_eq!(last, curve.negate(curve.generator()));
}

#[test]
fn exchange_over_channels_in_threads() {
    let curve = Arc::new(CurveParameters::p256());
    let (mut left, mut right) = ChannelTransport::pair();
    let responder_curve = Arc::clone(&curve);
    let responder = thread::spawn(move || {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        handle_session(responder_curve, &mut right, None, &mut rng)
    });

    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let ours = initiate(curve, &mut left, &mut rng).unwrap();
    let theirs = responder.join().unwrap().unwrap();
    assert_eq!(ours.shared_secret, theirs.shared_secret);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn independent_key_pairs_agree(seed_a in any::<u64>(), seed_b in any::<u64>()) {
        let curve = CurveParameters::p256();
        let a = KeyPair::generate(&curve, &mut ChaCha20Rng::seed_from_u64(seed_a)).unwrap();
        let b = KeyPair::generate(&curve, &mut ChaCha20Rng::seed_from_u64(seed_b)).unwrap();

        let ab = SharedSecret::derive(&curve, &a.private, &b.public).unwrap();
        let ba = SharedSecret::derive(&curve, &b.private, &a.public).unwrap();
        prop_assert!(ab.ct_eq(&ba));
    }

    #[test]
    fn public_keys_survive_the_wire(seed in any::<u64>()) {
        let curve = CurveParameters::p256();
        let pair = KeyPair::generate(&curve, &mut ChaCha20Rng::seed_from_u64(seed)).unwrap();
        let bytes = wire::encode_point(pair.public.point()).unwrap();
        let decoded = wire::decode_point(&curve, &bytes).unwrap();
        prop_assert_eq!(&decoded, pair.public.point());
    }

    #[test]
    fn signatures_verify_under_their_key(
        seed in any::<u64>(),
        message in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let curve = CurveParameters::p256();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let pair = KeyPair::generate(&curve, &mut rng).unwrap();
        let digest = Sha256::digest(&message);
        let signature = sign_prehashed(&curve, &digest, &pair.private, &mut rng).unwrap();
        prop_assert!(verify_prehashed(&curve, &digest, &signature, &pair.public).is_ok());
    }
}
