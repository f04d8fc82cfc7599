use soroban_sdk::{contracttype, Address};

/// Registry entry for one node.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeRecord {
    pub owner: Address,
    pub resolver: Option<Address>,
}
