use soroban_sdk::{contracttype, Address, BytesN, String, Vec};

/// Constructor input.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ControllerSettings {
    /// Instance allowed to hand authority to this one; `None` for the first controller.
    pub predecessor: Option<Address>,
    /// Address that must authorize `execute_upgrade`.
    pub operator: Address,
    pub identity_registry: Address,
    pub voting_registry: Address,
    pub domain_registry: Address,
    /// Second-level label, `<base_label>.eth`.
    pub base_label: String,
    /// Label of the controller's own subdomain, `<sub_label>.<base_label>.eth`.
    pub sub_label: String,
    /// Token contracts whose balances are forwarded to the successor on retirement.
    pub held_tokens: Vec<Address>,
}

/// Immutable configuration derived once at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ControllerConfig {
    pub predecessor: Option<Address>,
    pub operator: Address,
    pub identity_registry: Address,
    pub voting_registry: Address,
    pub domain_registry: Address,
    pub base_node: BytesN<32>,
    pub sub_label_hash: BytesN<32>,
    /// Always `child(base_node, sub_label_hash)`.
    pub sub_node: BytesN<32>,
    pub held_tokens: Vec<Address>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Lifecycle {
    /// Constructed, waiting for the predecessor's hand-off.
    Pending,
    /// Current authority.
    Active,
    /// Handed off to the contained successor. Terminal.
    Retired(Address),
}

/// Controllers of the four resources bound to the authority.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipSnapshot {
    pub identity_owner: Address,
    pub voting_owner: Address,
    pub base_owner: Option<Address>,
    pub sub_owner: Option<Address>,
}

impl OwnershipSnapshot {
    /// True when every resource is controlled by `holder`.
    pub fn held_by(&self, holder: &Address) -> bool {
        self.identity_owner == *holder
            && self.voting_owner == *holder
            && self.base_owner.as_ref() == Some(holder)
            && self.sub_owner.as_ref() == Some(holder)
    }
}
