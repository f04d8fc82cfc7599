use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpgradedEvent {
    pub successor: Address,
}

pub struct Events;

impl Events {
    /// `Upgraded(successor)`; published once, by the retiring controller.
    pub fn emit_upgraded(env: &Env, successor: &Address) {
        let event = UpgradedEvent { successor: successor.clone() };
        env.events().publish((symbol_short!("upgraded"),), event);
    }
}
