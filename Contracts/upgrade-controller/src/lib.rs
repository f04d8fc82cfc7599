#![no_std]
//! Upgrade Controller
//!
//! The governing instance that owns the identity registry, the voting registry and a
//! base domain (plus the controller's own subdomain) in the domain registry. Authority
//! moves to a successor in one invocation: the controller transfers everything, the
//! successor confirms it received it and names this instance as its predecessor, and
//! only then does this instance publish `upgraded` and retire for good, forwarding any
//! token balances it holds. A failure anywhere leaves every owner untouched.

mod error;
mod events;
mod handoff;
mod interfaces;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, BytesN, Env};
use crate::{events::Events, handoff::HandOff, storage::Storage};

pub use crate::error::ControllerError;
pub use crate::events::UpgradedEvent;
pub use crate::interfaces::{OwnedRegistry, DomainRegistry, DomainResolver, UpgradeTarget};
pub use crate::types::{ControllerConfig, ControllerSettings, Lifecycle, OwnershipSnapshot};

#[contract]
pub struct UpgradeController;

/// Public interface of the controller.
pub trait ControllerTrait {
    /// Confirms a hand-off from `predecessor` landed: `predecessor` must be the stored
    /// predecessor and authorize the call, and this instance must already own both
    /// registries, the base node and the subnode. Activates a pending controller.
    /// A retired instance answers `Retired` whoever the caller is.
    fn accept_upgrade(env: Env, predecessor: Address) -> Result<(), ControllerError>;
    /// Hands all authority to `successor` and retires this instance. Operator only.
    fn execute_upgrade(env: Env, successor: Address) -> Result<(), ControllerError>;
    fn lifecycle(env: Env) -> Lifecycle;
    fn config(env: Env) -> Result<ControllerConfig, ControllerError>;
    fn predecessor(env: Env) -> Result<Option<Address>, ControllerError>;
    fn identity_registry(env: Env) -> Result<Address, ControllerError>;
    fn voting_registry(env: Env) -> Result<Address, ControllerError>;
    fn domain_registry(env: Env) -> Result<Address, ControllerError>;
    fn base_node(env: Env) -> Result<BytesN<32>, ControllerError>;
    fn sub_label_hash(env: Env) -> Result<BytesN<32>, ControllerError>;
    fn sub_node(env: Env) -> Result<BytesN<32>, ControllerError>;
    /// Who currently controls each bound resource.
    fn ownership(env: Env) -> Result<OwnershipSnapshot, ControllerError>;
}

/// Handle to a controller in the `Active` state. Retiring consumes it.
struct ActiveController<'a> {
    env: &'a Env,
    config: ControllerConfig,
}

impl<'a> ActiveController<'a> {
    fn load(env: &'a Env) -> Result<Self, ControllerError> {
        let store = Storage::new(env);
        match store.lifecycle() {
            Lifecycle::Active => Ok(Self { env, config: store.config()? }),
            Lifecycle::Pending => Err(ControllerError::NotActive),
            Lifecycle::Retired(_) => Err(ControllerError::Retired),
        }
    }

    fn retire(self, successor: &Address) {
        Events::emit_upgraded(self.env, successor);
        handoff::forward_balances(self.env, &self.config, successor);
        Storage::new(self.env).retire(successor);
        log!(self.env, "retired", successor.clone());
    }
}

#[contractimpl]
impl UpgradeController {
    pub fn __constructor(env: Env, settings: ControllerSettings) {
        let base_label = domain_hash::label_bytes(&env, &settings.base_label)
            .unwrap_or_else(|| panic_with_error!(&env, ControllerError::InvalidLabel));
        let sub_label = domain_hash::label_bytes(&env, &settings.sub_label)
            .unwrap_or_else(|| panic_with_error!(&env, ControllerError::InvalidLabel));

        let base_node = domain_hash::base_node(&env, &base_label);
        let sub_label_hash = domain_hash::label_hash(&env, &sub_label);
        let sub_node = domain_hash::child_node(&env, &base_node, &sub_label_hash);

        let config = ControllerConfig {
            predecessor: settings.predecessor,
            operator: settings.operator,
            identity_registry: settings.identity_registry,
            voting_registry: settings.voting_registry,
            domain_registry: settings.domain_registry,
            base_node,
            sub_label_hash,
            sub_node,
            held_tokens: settings.held_tokens,
        };
        Storage::new(&env).init(&config);
    }
}

#[contractimpl]
impl ControllerTrait for UpgradeController {
    fn accept_upgrade(env: Env, predecessor: Address) -> Result<(), ControllerError> {
        let store = Storage::new(&env);
        match store.lifecycle() {
            Lifecycle::Pending => {}
            Lifecycle::Active => return Err(ControllerError::UnauthorizedUpgrade),
            Lifecycle::Retired(_) => return Err(ControllerError::Retired),
        }
        let config = store.config()?;
        if config.predecessor.as_ref() != Some(&predecessor) {
            return Err(ControllerError::UnauthorizedUpgrade);
        }
        predecessor.require_auth();
        if !handoff::capture(&env, &config).held_by(&env.current_contract_address()) {
            return Err(ControllerError::UnauthorizedUpgrade);
        }
        store.activate();
        Ok(())
    }

    fn execute_upgrade(env: Env, successor: Address) -> Result<(), ControllerError> {
        let controller = ActiveController::load(&env)?;
        controller.config.operator.require_auth();
        HandOff::new(&env, &controller.config, &successor).run()?;
        controller.retire(&successor);
        Ok(())
    }

    fn lifecycle(env: Env) -> Lifecycle { Storage::new(&env).lifecycle() }
    fn config(env: Env) -> Result<ControllerConfig, ControllerError> { Storage::new(&env).config() }
    fn predecessor(env: Env) -> Result<Option<Address>, ControllerError> { Ok(Storage::new(&env).config()?.predecessor) }
    fn identity_registry(env: Env) -> Result<Address, ControllerError> { Ok(Storage::new(&env).config()?.identity_registry) }
    fn voting_registry(env: Env) -> Result<Address, ControllerError> { Ok(Storage::new(&env).config()?.voting_registry) }
    fn domain_registry(env: Env) -> Result<Address, ControllerError> { Ok(Storage::new(&env).config()?.domain_registry) }
    fn base_node(env: Env) -> Result<BytesN<32>, ControllerError> { Ok(Storage::new(&env).config()?.base_node) }
    fn sub_label_hash(env: Env) -> Result<BytesN<32>, ControllerError> { Ok(Storage::new(&env).config()?.sub_label_hash) }
    fn sub_node(env: Env) -> Result<BytesN<32>, ControllerError> { Ok(Storage::new(&env).config()?.sub_node) }

    fn ownership(env: Env) -> Result<OwnershipSnapshot, ControllerError> {
        let config = Storage::new(&env).config()?;
        Ok(handoff::capture(&env, &config))
    }
}
