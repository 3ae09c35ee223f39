//! Cross-crate integration tests exercising whole resolution flows:
//! mnemonic -> root key, script -> address -> script hash,
//! base address -> stake address -> stake key hash.
//!
//! Only the public API of resolver_core is used, so regressions at the
//! crate boundaries with chain_ada and crypto_utils show up here.

use resolver_core::*;

const TEST_MNEMONIC: &str =
    "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

const ALWAYS_SUCCEEDS_V1: &str = "4e4d01000033222220051200120011";

fn test_words() -> Vec<&'static str> {
    TEST_MNEMONIC.split(' ').collect()
}

// ─── Keys: mnemonic -> root key ────────────────────────────────────

#[test]
fn private_key_is_deterministic() {
    let first = resolve_private_key(&test_words()).unwrap();
    let second = resolve_private_key(&test_words()).unwrap();
    assert_eq!(first, second);
    assert!(first.starts_with("xprv1"));
}

#[test]
fn generated_mnemonic_resolves_to_a_key() {
    let words = generate_mnemonic(24).unwrap();
    assert!(validate_words(&words));
    let key = resolve_private_key(&words).unwrap();
    assert!(key.starts_with("xprv1"));
    assert_ne!(key, resolve_private_key(&test_words()).unwrap());
}

#[test]
fn private_key_fails_on_swapped_words() {
    let mut words = test_words();
    words.swap(0, 11);
    let err = resolve_private_key(&words).unwrap_err();
    assert_eq!(err.operation, Operation::PrivateKey);
    assert!(err.is_malformed_input());
}

// ─── Scripts: script -> address -> script hash ─────────────────────

#[test]
fn script_address_round_trip_every_version() {
    for version in [PlutusVersion::V1, PlutusVersion::V2, PlutusVersion::V3] {
        let expected = resolve_plutus_script_hash(ALWAYS_SUCCEEDS_V1, version).unwrap();
        for network in [AdaNetwork::Testnet, AdaNetwork::Mainnet] {
            let address =
                resolve_script_address_for_version(network.id(), ALWAYS_SUCCEEDS_V1, version)
                    .unwrap();
            assert!(address.starts_with(network.address_hrp()));
            assert_eq!(resolve_script_hash(&address).unwrap(), expected);

            // A script address has no payment key and no stake credential.
            assert!(resolve_payment_key_hash(&address)
                .unwrap_err()
                .is_missing_credential());
            assert!(resolve_stake_key_hash(&address)
                .unwrap_err()
                .is_missing_credential());
        }
    }
}

// ─── Addresses: base -> stake address -> stake key hash ────────────

#[test]
fn base_address_credentials() {
    let base = "addr1qx2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzer3n0d3vllmyqwsx5wktcd8cc3sq835lu7drv2xwl2wywfgse35a3x";

    let payment = resolve_payment_key_hash(base).unwrap();
    let stake = resolve_stake_key_hash(base).unwrap();
    assert_eq!(payment.len(), 56);
    assert_eq!(stake.len(), 56);
    assert_ne!(payment, stake);

    let reward = resolve_stake_address(base).unwrap();
    assert_eq!(resolve_stake_key_hash(&reward).unwrap(), stake);
    assert!(resolve_script_hash(base).unwrap_err().is_missing_credential());
}

#[test]
fn errors_name_the_operation() {
    let err = resolve_stake_address("addr1vx2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzers66hrl8")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "an error occurred during resolve_stake_address: couldn't resolve stake address \
         from address: addr1vx2fxv2umyhttkxyxp8x0dlpdt3k6cwng5pxj3jhsydzers66hrl8"
    );
}

// ─── Data, assets and transactions ─────────────────────────────────

#[test]
fn datum_hash_matches_between_json_and_builder() {
    let built = Data::constr(
        0,
        vec![
            Data::from("supersecret"),
            Data::Map(vec![(Data::from(1i64), Data::from(vec![Data::from("abcd")]))]),
        ],
    );
    let json = r#"{"alternative": 0, "fields": ["supersecret", {"map": [[1, ["abcd"]]]}]}"#;
    assert_eq!(
        resolve_data_hash(&built).unwrap(),
        resolve_data_hash_json(json).unwrap()
    );
}

#[test]
fn fingerprints_differ_by_asset_name() {
    let policy = "1e349c9bdea19fd6c147626a5260bc44b71635f398b67c59881df209";
    let a = resolve_fingerprint(policy, "504154415445").unwrap();
    let b = resolve_fingerprint(policy, "7eae28af2208be856f7a119668ae52a49b73725e326dc16579dcc373")
        .unwrap();
    assert_ne!(a, b);
    assert_eq!(a, resolve_fingerprint(policy, "504154415445").unwrap());
}

#[test]
fn tx_hash_is_stable() {
    let body = "a30081825820111111111111111111111111111111111111111111111111111111111111111100018182581d619493315cd92eb5d8c4304e67b7e16ae36d61d34502694657811a2c8e1a000f4240021a00029810";
    let tx = format!("84{body}a0f5f6");
    let hashes: Vec<String> = (0..3).map(|_| resolve_tx_hash(&tx).unwrap()).collect();
    assert!(hashes.iter().all(|h| h == &hashes[0]));
    assert_eq!(hashes[0].len(), 64);
}
