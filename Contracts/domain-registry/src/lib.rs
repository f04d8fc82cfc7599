#![no_std]
//! Domain Registry
//!
//! Hierarchical namespace of 32-byte nodes. Every node has exactly one controlling
//! address and may point at a resolver contract. The zero node is the root and is
//! owned by the address given at construction. Only the owner of a node may change
//! its owner, its resolver, or create nodes directly beneath it.

mod error;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};
use crate::storage::Storage;

pub use crate::error::DomainError;
pub use crate::types::NodeRecord;

#[contract]
pub struct DomainRegistryContract;

/// Public interface of the registry.
pub trait DomainRegistryTrait {
    /// Controller of `node`, `None` if the node was never created.
    fn owner(env: Env, node: BytesN<32>) -> Option<Address>;
    /// Resolver registered for `node`, if any.
    fn resolver(env: Env, node: BytesN<32>) -> Option<Address>;
    fn record_exists(env: Env, node: BytesN<32>) -> bool;
    /// Reassign `node` to `owner`.
    fn set_owner(env: Env, node: BytesN<32>, owner: Address) -> Result<(), DomainError>;
    /// Create or reassign the child of `node` under `label`; returns the child node.
    fn set_subnode_owner(env: Env, node: BytesN<32>, label: BytesN<32>, owner: Address) -> Result<BytesN<32>, DomainError>;
    fn set_resolver(env: Env, node: BytesN<32>, resolver: Address) -> Result<(), DomainError>;
}

#[contractimpl]
impl DomainRegistryContract {
    pub fn __constructor(env: Env, root_owner: Address) {
        Storage::new(&env).set_owner(&domain_hash::root_node(&env), &root_owner);
    }
}

#[contractimpl]
impl DomainRegistryTrait for DomainRegistryContract {
    fn owner(env: Env, node: BytesN<32>) -> Option<Address> {
        Storage::new(&env).record(&node).map(|r| r.owner)
    }

    fn resolver(env: Env, node: BytesN<32>) -> Option<Address> {
        Storage::new(&env).record(&node).and_then(|r| r.resolver)
    }

    fn record_exists(env: Env, node: BytesN<32>) -> bool {
        Storage::new(&env).record(&node).is_some()
    }

    fn set_owner(env: Env, node: BytesN<32>, owner: Address) -> Result<(), DomainError> {
        let store = Storage::new(&env);
        let mut record = store.require_record(&node)?;
        record.owner.require_auth();
        record.owner = owner;
        store.save_record(&node, &record);
        Ok(())
    }

    fn set_subnode_owner(env: Env, node: BytesN<32>, label: BytesN<32>, owner: Address) -> Result<BytesN<32>, DomainError> {
        let store = Storage::new(&env);
        store.require_record(&node)?.owner.require_auth();
        let subnode = domain_hash::child_node(&env, &node, &label);
        // an existing subnode keeps its resolver
        store.set_owner(&subnode, &owner);
        Ok(subnode)
    }

    fn set_resolver(env: Env, node: BytesN<32>, resolver: Address) -> Result<(), DomainError> {
        let store = Storage::new(&env);
        let mut record = store.require_record(&node)?;
        record.owner.require_auth();
        record.resolver = Some(resolver);
        store.save_record(&node, &record);
        Ok(())
    }
}
