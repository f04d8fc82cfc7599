//! Authority Hand-off
//!
//! One upgrade is one unit of work: the pre-state ownership snapshot is captured, every
//! transfer step runs in order, and the result only counts once the successor has accepted
//! and the post-state shows it holding all four resources. Any step that fails returns the
//! error to the entry point, and the host discards every effect staged by the invocation,
//! including those made inside the registries and the resolver.
//!
//! The resolver is only ever looked up on the base node. Subnodes are assumed to share it.

use soroban_sdk::{log, token, Address, Env};
use crate::{
    error::ControllerError,
    interfaces::{DomainRegistryClient, DomainResolverClient, OwnedRegistryClient, UpgradeTargetClient},
    types::{ControllerConfig, OwnershipSnapshot},
};

/// Reads the current controller of every resource bound to `config`.
pub fn capture(env: &Env, config: &ControllerConfig) -> OwnershipSnapshot {
    let domains = DomainRegistryClient::new(env, &config.domain_registry);
    OwnershipSnapshot {
        identity_owner: OwnedRegistryClient::new(env, &config.identity_registry).owner(),
        voting_owner: OwnedRegistryClient::new(env, &config.voting_registry).owner(),
        base_owner: domains.owner(&config.base_node),
        sub_owner: domains.owner(&config.sub_node),
    }
}

pub struct HandOff<'a> {
    env: &'a Env,
    config: &'a ControllerConfig,
    current: Address,
    successor: &'a Address,
}

impl<'a> HandOff<'a> {
    pub fn new(env: &'a Env, config: &'a ControllerConfig, successor: &'a Address) -> Self {
        Self { env, config, current: env.current_contract_address(), successor }
    }

    /// Runs every step; `Ok` means the successor holds all of it and accepted.
    pub fn run(&self) -> Result<(), ControllerError> {
        let before = capture(self.env, self.config);
        log!(self.env, "hand-off started", self.current.clone(), self.successor.clone());
        if let Err(err) = self.apply() {
            log!(self.env, "hand-off aborted", err as u32, before);
            return Err(err);
        }
        Ok(())
    }

    fn apply(&self) -> Result<(), ControllerError> {
        // registries first, the successor's acceptance check reads them
        self.transfer_registries();
        // resolver before the nodes, the resolver trusts the node's current controller
        self.repoint_resolver()?;
        self.reassign_nodes();
        self.confirm()
    }

    fn transfer_registries(&self) {
        OwnedRegistryClient::new(self.env, &self.config.identity_registry).transfer_ownership(self.successor);
        OwnedRegistryClient::new(self.env, &self.config.voting_registry).transfer_ownership(self.successor);
    }

    fn repoint_resolver(&self) -> Result<(), ControllerError> {
        let domains = DomainRegistryClient::new(self.env, &self.config.domain_registry);
        let resolver = domains.resolver(&self.config.base_node).ok_or(ControllerError::MissingResolver)?;
        DomainResolverClient::new(self.env, &resolver).set_addr(&self.config.sub_node, self.successor);
        Ok(())
    }

    fn reassign_nodes(&self) {
        let domains = DomainRegistryClient::new(self.env, &self.config.domain_registry);
        domains.set_subnode_owner(&self.config.base_node, &self.config.sub_label_hash, self.successor);
        domains.set_owner(&self.config.base_node, self.successor);
    }

    fn confirm(&self) -> Result<(), ControllerError> {
        match UpgradeTargetClient::new(self.env, self.successor).try_accept_upgrade(&self.current) {
            Ok(Ok(())) => {}
            _ => return Err(ControllerError::UnauthorizedUpgrade),
        }
        // a foreign successor may accept without checking
        if !capture(self.env, self.config).held_by(self.successor) {
            return Err(ControllerError::UnauthorizedUpgrade);
        }
        Ok(())
    }
}

/// Moves every non-zero balance the controller holds in `config.held_tokens` to `to`.
pub fn forward_balances(env: &Env, config: &ControllerConfig, to: &Address) {
    let current = env.current_contract_address();
    for token_id in config.held_tokens.iter() {
        let client = token::Client::new(env, &token_id);
        let balance = client.balance(&current);
        if balance > 0 {
            client.transfer(&current, to, &balance);
        }
    }
}
