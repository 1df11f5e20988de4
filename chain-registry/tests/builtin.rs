//! Tests against the builtin (compiled-in) catalog through the public
//! free-function surface.

use chain_registry::{
    DEFAULT_CHAIN_ID, chain_by_id, chains, default_chain, default_chain_id, is_supported_chain,
};

#[test]
fn builtin_catalog_is_non_empty_and_duplicate_free() {
    let all = chains().expect("builtin catalog is never empty");
    assert!(!all.is_empty());

    let mut ids: Vec<u64> = all.iter().map(|chain| chain.id).collect();
    let len = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), len);
}

#[test]
fn every_registered_id_resolves_to_its_descriptor() {
    for chain in chains().expect("builtin catalog is never empty") {
        let found = chain_by_id(Some(chain.id)).expect("registered id resolves");
        assert_eq!(found.id, chain.id);
        assert_eq!(found, chain);
        assert!(is_supported_chain(chain.id));
    }
}

#[test]
fn absent_zero_and_unknown_ids_are_not_found() {
    assert!(chain_by_id(None).is_none());
    assert!(chain_by_id(Some(0)).is_none());
    assert!(chain_by_id(Some(999_999_999)).is_none());
    assert!(!is_supported_chain(0));
    assert!(!is_supported_chain(999_999_999));
}

#[test]
fn default_chain_is_ethereum_mainnet() {
    let chain = default_chain().expect("builtin catalog is never empty");
    assert_eq!(chain.id, DEFAULT_CHAIN_ID);
    assert_eq!(chain.name, "Ethereum");
    assert!(!chain.testnet);
    assert_eq!(
        default_chain_id().expect("builtin catalog is never empty"),
        chain.id
    );
}

#[test]
fn darwinia_is_supported() {
    assert!(is_supported_chain(46));
    let chain = chain_by_id(Some(46)).expect("darwinia is registered");
    assert_eq!(chain.name, "Darwinia Network");
    assert_eq!(chain.native_currency.symbol, "RING");
    assert!(!chain.rpc_urls.is_empty());
    assert!(!chain.block_explorer_urls.is_empty());
}

#[test]
fn add_chain_params_match_the_wallet_rpc_shape() {
    let chain = chain_by_id(Some(46)).expect("darwinia is registered");
    let json = serde_json::to_value(chain.add_chain_params()).expect("serialisable");
    assert_eq!(json["chainId"], "0x2e");
    assert_eq!(json["chainName"], "Darwinia Network");
    assert_eq!(json["nativeCurrency"]["symbol"], "RING");
    assert!(json["rpcUrls"].as_array().is_some_and(|urls| !urls.is_empty()));
}
