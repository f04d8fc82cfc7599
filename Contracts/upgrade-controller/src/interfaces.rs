//! Collaborator interfaces consumed by the controller.

use soroban_sdk::{contractclient, Address, BytesN, Env};
use crate::error::ControllerError;

/// Single-writer ownership capability of the identity and voting registries.
#[contractclient(name = "OwnedRegistryClient")]
pub trait OwnedRegistry {
    fn owner(env: Env) -> Address;
    fn transfer_ownership(env: Env, new_owner: Address);
}

#[contractclient(name = "DomainRegistryClient")]
pub trait DomainRegistry {
    fn owner(env: Env, node: BytesN<32>) -> Option<Address>;
    fn resolver(env: Env, node: BytesN<32>) -> Option<Address>;
    fn set_owner(env: Env, node: BytesN<32>, owner: Address);
    fn set_subnode_owner(env: Env, node: BytesN<32>, label: BytesN<32>, owner: Address) -> BytesN<32>;
}

#[contractclient(name = "DomainResolverClient")]
pub trait DomainResolver {
    fn set_addr(env: Env, node: BytesN<32>, addr: Address);
}

/// Entry point a successor exposes so its predecessor can confirm the hand-off landed.
#[contractclient(name = "UpgradeTargetClient")]
pub trait UpgradeTarget {
    fn accept_upgrade(env: Env, predecessor: Address) -> Result<(), ControllerError>;
}
