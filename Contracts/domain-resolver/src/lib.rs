#![no_std]
//! Domain Resolver
//!
//! Maps domain nodes to target addresses. A node's target may only be set by the
//! address that controls the node in the domain registry this resolver is bound to.

use soroban_sdk::{contract, contractclient, contracterror, contractimpl, contracttype, Address, BytesN, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ResolverError {
    NodeNotFound = 1,
}

/// The part of the domain registry the resolver reads.
#[contractclient(name = "NodeOwnerClient")]
pub trait NodeOwner {
    fn owner(env: Env, node: BytesN<32>) -> Option<Address>;
}

#[contract]
pub struct DomainResolverContract;

#[contractimpl]
impl DomainResolverContract {
    pub fn __constructor(env: Env, registry: Address) {
        env.storage().instance().set(&DataKey::Registry, &registry);
    }

    pub fn registry(env: Env) -> Address {
        env.storage().instance().get(&DataKey::Registry).unwrap()
    }

    /// Point `node` at `addr`. The node's current controller must authorize.
    pub fn set_addr(env: Env, node: BytesN<32>, addr: Address) -> Result<(), ResolverError> {
        let registry = Self::registry(env.clone());
        let controller = NodeOwnerClient::new(&env, &registry)
            .owner(&node)
            .ok_or(ResolverError::NodeNotFound)?;
        controller.require_auth();
        env.storage().persistent().set(&DataKey::Addr(node), &addr);
        Ok(())
    }

    pub fn addr(env: Env, node: BytesN<32>) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Addr(node))
    }
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Registry,
    Addr(BytesN<32>),
}

#[cfg(test)]
mod test;
