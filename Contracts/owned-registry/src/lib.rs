#![no_std]
//! Owned Registry
//!
//! A registry whose control is held by exactly one address at a time. Only the
//! ownership capability lives here; the identity and voting registries deploy this
//! contract and keep their own records elsewhere.

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

#[contract]
pub struct OwnedRegistryContract;

/// Single-writer ownership capability.
pub trait OwnableTrait {
    /// Current owner.
    fn owner(env: Env) -> Address;
    /// Hand exclusive ownership to `new_owner`. The current owner must authorize.
    fn transfer_ownership(env: Env, new_owner: Address);
}

#[contractimpl]
impl OwnedRegistryContract {
    pub fn __constructor(env: Env, owner: Address) {
        env.storage().instance().set(&DataKey::Owner, &owner);
    }
}

#[contractimpl]
impl OwnableTrait for OwnedRegistryContract {
    fn owner(env: Env) -> Address {
        read_owner(&env)
    }

    fn transfer_ownership(env: Env, new_owner: Address) {
        read_owner(&env).require_auth();
        env.storage().instance().set(&DataKey::Owner, &new_owner);
    }
}

// set by the constructor, never removed
fn read_owner(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Owner).unwrap()
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
}
