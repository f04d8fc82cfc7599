use soroban_sdk::{contracttype, Address, Env};
use crate::{error::ControllerError, types::{ControllerConfig, Lifecycle}};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Lifecycle,
}

pub struct Storage<'a> { env: &'a Env }

impl<'a> Storage<'a> {
    pub fn new(env: &'a Env) -> Self { Self { env } }

    pub fn init(&self, config: &ControllerConfig) {
        // a controller without a predecessor is the genesis authority
        let lifecycle = if config.predecessor.is_some() { Lifecycle::Pending } else { Lifecycle::Active };
        self.env.storage().instance().set(&DataKey::Config, config);
        self.env.storage().instance().set(&DataKey::Lifecycle, &lifecycle);
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.env.storage().instance().get(&DataKey::Lifecycle).unwrap()
    }

    pub fn activate(&self) {
        self.env.storage().instance().set(&DataKey::Lifecycle, &Lifecycle::Active);
    }

    /// Configuration, erased on retirement.
    pub fn config(&self) -> Result<ControllerConfig, ControllerError> {
        self.env.storage().instance().get(&DataKey::Config).ok_or(ControllerError::Retired)
    }

    pub fn retire(&self, successor: &Address) {
        self.env.storage().instance().remove(&DataKey::Config);
        self.env.storage().instance().set(&DataKey::Lifecycle, &Lifecycle::Retired(successor.clone()));
    }
}
