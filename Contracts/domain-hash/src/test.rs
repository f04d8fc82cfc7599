#![cfg(test)]

use soroban_sdk::{Bytes, BytesN, Env, String};
use crate::{base_node, child_node, label_bytes, label_hash, root_node, top_level_node, MAX_LABEL_LEN};

fn hex32(env: &Env, hex: &str) -> BytesN<32> {
    let digits = hex.as_bytes();
    assert_eq!(digits.len(), 64);
    let nibble = |c: u8| match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => panic!("bad hex digit"),
    };
    let mut out = [0u8; 32];
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = (nibble(digits[2 * i]) << 4) | nibble(digits[2 * i + 1]);
    }
    BytesN::from_array(env, &out)
}

#[test]
fn test_eth_label_and_node_match_known_values() {
    let env = Env::default();
    let eth = Bytes::from_slice(&env, b"eth");
    assert_eq!(
        label_hash(&env, &eth),
        hex32(&env, "4f5b812789fc606be1b3b16908db13fc7a9adf7ca72641f84d75b47069d3d7f0"),
    );
    assert_eq!(
        top_level_node(&env),
        hex32(&env, "93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae"),
    );
}

#[test]
fn test_base_node_is_child_of_top_level() {
    let env = Env::default();
    let label = Bytes::from_slice(&env, b"urbit");
    let expected = child_node(&env, &top_level_node(&env), &label_hash(&env, &label));
    assert_eq!(base_node(&env, &label), expected);
    // deterministic
    assert_eq!(base_node(&env, &label), base_node(&env, &label));
    assert_ne!(base_node(&env, &label), root_node(&env));
}

#[test]
fn test_child_node_depends_on_parent() {
    let env = Env::default();
    let lh = label_hash(&env, &Bytes::from_slice(&env, b"ecliptic"));
    let a = child_node(&env, &root_node(&env), &lh);
    let b = child_node(&env, &top_level_node(&env), &lh);
    assert_ne!(a, b);
}

#[test]
fn test_label_bytes_validation() {
    let env = Env::default();
    assert_eq!(
        label_bytes(&env, &String::from_str(&env, "ecliptic")),
        Some(Bytes::from_slice(&env, b"ecliptic")),
    );
    assert_eq!(label_bytes(&env, &String::from_str(&env, "")), None);
    assert_eq!(label_bytes(&env, &String::from_str(&env, "a.b")), None);

    let longest = [b'x'; MAX_LABEL_LEN];
    let ok = core::str::from_utf8(&longest).unwrap();
    assert!(label_bytes(&env, &String::from_str(&env, ok)).is_some());

    let too_long = [b'x'; MAX_LABEL_LEN + 1];
    let bad = core::str::from_utf8(&too_long).unwrap();
    assert_eq!(label_bytes(&env, &String::from_str(&env, bad)), None);
}
