use soroban_sdk::{contracttype, Address, BytesN, Env};
use crate::{error::DomainError, types::NodeRecord};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Record(BytesN<32>),
}

pub struct Storage<'a> { env: &'a Env }

impl<'a> Storage<'a> {
    pub fn new(env: &'a Env) -> Self { Self { env } }

    pub fn record(&self, node: &BytesN<32>) -> Option<NodeRecord> {
        self.env.storage().persistent().get(&DataKey::Record(node.clone()))
    }

    pub fn require_record(&self, node: &BytesN<32>) -> Result<NodeRecord, DomainError> {
        self.record(node).ok_or(DomainError::NodeNotFound)
    }

    pub fn save_record(&self, node: &BytesN<32>, record: &NodeRecord) {
        self.env.storage().persistent().set(&DataKey::Record(node.clone()), record);
    }

    /// Sets the owner of `node`, creating the record when it does not exist yet.
    pub fn set_owner(&self, node: &BytesN<32>, owner: &Address) {
        let record = match self.record(node) {
            Some(mut record) => { record.owner = owner.clone(); record }
            None => NodeRecord { owner: owner.clone(), resolver: None },
        };
        self.save_record(node, &record);
    }
}
