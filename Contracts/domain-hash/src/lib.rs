#![no_std]
//! Domain Node Hashing
//!
//! Hierarchical node derivation shared by the domain registry and the upgrade controller.
//! A node is `keccak256(parent || labelhash)`, starting from the all-zero root, so
//! `eth = child(root, labelhash("eth"))` and `example.eth = child(eth, labelhash("example"))`.

use soroban_sdk::{Bytes, BytesN, Env, String};

/// Longest label accepted, in bytes.
pub const MAX_LABEL_LEN: usize = 63;

/// Top-level label every controlled base domain lives under.
pub const TOP_LEVEL_LABEL: &str = "eth";

pub fn root_node(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}

/// Keccak-256 of the raw label bytes.
pub fn label_hash(env: &Env, label: &Bytes) -> BytesN<32> {
    env.crypto().keccak256(label).to_bytes()
}

/// Node of `label_hash` directly under `parent`.
pub fn child_node(env: &Env, parent: &BytesN<32>, label_hash: &BytesN<32>) -> BytesN<32> {
    let mut data = Bytes::from_array(env, &parent.to_array());
    data.extend_from_array(&label_hash.to_array());
    env.crypto().keccak256(&data).to_bytes()
}

pub fn top_level_node(env: &Env) -> BytesN<32> {
    let tld = Bytes::from_slice(env, TOP_LEVEL_LABEL.as_bytes());
    child_node(env, &root_node(env), &label_hash(env, &tld))
}

/// Bytes of a single label, or `None` when it is empty, longer than
/// [`MAX_LABEL_LEN`] or contains a separator.
pub fn label_bytes(env: &Env, label: &String) -> Option<Bytes> {
    let len = label.len() as usize;
    if len == 0 || len > MAX_LABEL_LEN {
        return None;
    }
    let mut buf = [0u8; MAX_LABEL_LEN];
    label.copy_into_slice(&mut buf[..len]);
    if buf[..len].contains(&b'.') {
        return None;
    }
    Some(Bytes::from_slice(env, &buf[..len]))
}

/// `label.eth`
pub fn base_node(env: &Env, label: &Bytes) -> BytesN<32> {
    child_node(env, &top_level_node(env), &label_hash(env, label))
}

#[cfg(test)]
mod test;
