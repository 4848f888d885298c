//! Integration tests: open, onboard and resolve gateways through the
//! public API, the way a forwarder uses the store.

use gateway_keystore::crypto::derivation::derive_identity;
use gateway_keystore::{
    Eui64, GatewayKey, GatewayStore, KeystoreError, StoreConfig, ThingsIxId, YamlFileStore,
};

fn eui(n: u8) -> Eui64 {
    Eui64([0xb8, 0x27, 0xeb, 0xff, 0xfe, 0x00, 0x00, n])
}

#[test]
fn workflow_empty_store_then_two_gateways() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gateways.yaml");

    let mut store = YamlFileStore::open(&path).expect("absent file should open");
    assert!(store.gateways().is_empty());

    store.add_gateway(eui(1), GatewayKey::generate()).unwrap();
    store.add_gateway(eui(2), GatewayKey::generate()).unwrap();

    let ids: Vec<Eui64> = store.gateways().iter().map(|gw| gw.local_id()).collect();
    assert_eq!(ids, vec![eui(1), eui(2)]);

    // A fresh instance sees the same list in the same order.
    let reopened = YamlFileStore::open(&path).unwrap();
    let ids: Vec<Eui64> = reopened.gateways().iter().map(|gw| gw.local_id()).collect();
    assert_eq!(ids, vec![eui(1), eui(2)]);
}

#[test]
fn workflow_added_gateway_matches_direct_derivation() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = YamlFileStore::open(dir.path().join("gateways.yaml")).unwrap();

    for n in 0..5 {
        let key = GatewayKey::generate();
        let (network_id, thingsix_id) = derive_identity(&key).unwrap();
        store.add_gateway(eui(n), key).unwrap();

        let gw = store.gateway_by_local_id(eui(n)).unwrap();
        assert_eq!(gw.network_id(), network_id);
        assert_eq!(gw.thingsix_id(), thingsix_id);
    }
}

#[test]
fn workflow_resolve_by_each_identifier_kind() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = YamlFileStore::open(dir.path().join("gateways.yaml")).unwrap();
    let gw = store.generate_gateway(eui(9)).unwrap().clone();

    let by_tix = store.gateway_by_thingsix_id(&gw.thingsix_id()).unwrap();
    let by_net = store.gateway_by_network_id(gw.network_id()).unwrap();
    let by_net_bytes = store
        .gateway_by_network_id_bytes(&gw.network_id().as_bytes()[..])
        .unwrap();
    let by_local_bytes = store
        .gateway_by_local_id_bytes(&gw.local_id().as_bytes()[..])
        .unwrap();

    for found in [by_tix, by_net, by_net_bytes, by_local_bytes] {
        assert_eq!(found, &gw);
    }
}

#[test]
fn workflow_unknown_ids_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = YamlFileStore::open(dir.path().join("gateways.yaml")).unwrap();
    store.generate_gateway(eui(1)).unwrap();

    for n in 2..20 {
        assert!(store.gateway_by_local_id(eui(n)).unwrap_err().is_not_found());
        assert!(store.gateway_by_network_id(eui(n)).unwrap_err().is_not_found());
    }
    assert!(store
        .gateway_by_thingsix_id(&ThingsIxId([0xab; 32]))
        .unwrap_err()
        .is_not_found());
}

#[test]
fn workflow_duplicate_local_id_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = YamlFileStore::open(dir.path().join("gateways.yaml")).unwrap();

    store.generate_gateway(eui(1)).unwrap();
    let err = store.generate_gateway(eui(1)).unwrap_err();
    assert!(matches!(err, KeystoreError::AlreadyExists(id) if id == eui(1)));
    assert_eq!(store.gateways().len(), 1);
}

#[test]
fn workflow_open_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested-name.yaml");
    let cfg = StoreConfig::from_yaml_str(&format!("path: {}\n", path.display())).unwrap();

    let mut store = cfg.open().unwrap();
    store.generate_gateway(eui(4)).unwrap();
    assert!(path.exists());
}

#[test]
fn workflow_store_usable_as_trait_object() {
    let dir = tempfile::tempdir().unwrap();
    let mut boxed: Box<dyn GatewayStore> =
        Box::new(YamlFileStore::open(dir.path().join("gateways.yaml")).unwrap());

    boxed.add_gateway(eui(5), GatewayKey::generate()).unwrap();
    assert!(boxed.gateway_by_local_id(eui(5)).is_ok());
    assert!(matches!(
        boxed.gateway_by_local_id_bytes(&[1, 2, 3]),
        Err(KeystoreError::InvalidGatewayId {
            expected: 8,
            actual: 3
        })
    ));
}
