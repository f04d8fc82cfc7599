#![cfg(test)]
extern crate std;

use soroban_sdk::{
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation},
    Address, Bytes, Env, IntoVal, Symbol,
};
use domain_registry::{DomainRegistryContract, DomainRegistryContractClient};
use crate::{DomainResolverContract, DomainResolverContractClient, ResolverError};

#[test]
fn test_owner_sets_target() {
    let env = Env::default();
    env.mock_all_auths();
    let root_owner = Address::generate(&env);
    let registry_id = env.register(DomainRegistryContract {}, (root_owner.clone(),));
    let registry = DomainRegistryContractClient::new(&env, &registry_id);
    let resolver_id = env.register(DomainResolverContract {}, (registry_id.clone(),));
    let resolver = DomainResolverContractClient::new(&env, &resolver_id);
    assert_eq!(resolver.registry(), registry_id);

    let holder = Address::generate(&env);
    let target = Address::generate(&env);
    let eth_label = domain_hash::label_hash(&env, &Bytes::from_slice(&env, b"eth"));
    let eth = registry.set_subnode_owner(&domain_hash::root_node(&env), &eth_label, &holder);

    assert_eq!(resolver.addr(&eth), None);
    resolver.set_addr(&eth, &target);

    // authorized by the node's controller, not the root owner
    assert_eq!(
        env.auths(),
        std::vec![(
            holder.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    resolver_id.clone(),
                    Symbol::new(&env, "set_addr"),
                    (eth.clone(), target.clone()).into_val(&env),
                )),
                sub_invocations: std::vec![],
            },
        )],
    );
    assert_eq!(resolver.addr(&eth), Some(target));
}

#[test]
fn test_unowned_node_rejected() {
    let env = Env::default();
    env.mock_all_auths();
    let registry_id = env.register(DomainRegistryContract {}, (Address::generate(&env),));
    let resolver_id = env.register(DomainResolverContract {}, (registry_id,));
    let resolver = DomainResolverContractClient::new(&env, &resolver_id);

    let node = domain_hash::top_level_node(&env);
    assert_eq!(
        resolver.try_set_addr(&node, &Address::generate(&env)),
        Err(Ok(ResolverError::NodeNotFound)),
    );
}
