#![cfg(test)]

use crate::{FuturePlatform, Registry, RegistryClient, RegistryError};
use apwine_naming::NamingPolicy;
use permissions::Permissions;
use soroban_sdk::{testutils::Address as _, Address, BytesN, Env, String};

struct RegistryTest<'a> {
    env: Env,
    admin: Address,
    factory: Address,
    registry: RegistryClient<'a>,
}

impl<'a> RegistryTest<'a> {
    fn setup() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let factory = Address::generate(&env);
        let permissions_id = env.register(Permissions, (&admin,));
        let registry_id = env.register(Registry, (&permissions_id,));
        let registry = RegistryClient::new(&env, &registry_id);

        RegistryTest {
            env,
            admin,
            factory,
            registry,
        }
    }

    fn logic(&self, seed: u8) -> BytesN<32> {
        BytesN::from_array(&self.env, &[seed; 32])
    }

    fn aave(&self) -> String {
        String::from_str(&self.env, "AAVE")
    }

    fn add_aave(&self) {
        self.registry
            .add_future_factory(&self.admin, &self.factory, &self.aave());
        self.registry.add_future_platform(
            &self.admin,
            &self.factory,
            &self.aave(),
            &self.logic(1),
            &self.logic(2),
            &self.logic(3),
        );
    }
}

#[test]
fn test_platform_membership() {
    let test = RegistryTest::setup();
    assert!(!test.registry.is_registered_future_platform(&test.aave()));
    assert_eq!(test.registry.future_platforms_count(), 0);

    test.add_aave();

    assert!(test.registry.is_registered_future_platform(&test.aave()));
    assert_eq!(test.registry.future_platforms_count(), 1);
    assert_eq!(
        test.registry.get_future_platform(&test.aave()),
        FuturePlatform {
            future_logic: test.logic(1),
            wallet_logic: test.logic(2),
            vault_logic: test.logic(3),
        }
    );
    assert_eq!(test.registry.get_platform_factory(&test.aave()), test.factory);
    assert_eq!(test.registry.get_future_platform_names().len(), 1);
}

#[test]
fn test_identical_platform_readd_is_noop() {
    let test = RegistryTest::setup();
    test.add_aave();
    test.add_aave();

    assert_eq!(test.registry.future_platforms_count(), 1);
}

#[test]
fn test_platform_overwrite_rejected() {
    let test = RegistryTest::setup();
    test.add_aave();

    let result = test.registry.try_add_future_platform(
        &test.admin,
        &test.factory,
        &test.aave(),
        &test.logic(9),
        &test.logic(2),
        &test.logic(3),
    );
    assert_eq!(result, Err(Ok(RegistryError::PlatformAlreadyRegistered)));
    assert_eq!(
        test.registry.get_future_platform(&test.aave()).future_logic,
        test.logic(1)
    );
}

#[test]
fn test_platform_requires_owning_factory() {
    let test = RegistryTest::setup();
    let stranger = Address::generate(&test.env);

    let result = test.registry.try_add_future_platform(
        &test.admin,
        &stranger,
        &test.aave(),
        &test.logic(1),
        &test.logic(2),
        &test.logic(3),
    );
    assert_eq!(result, Err(Ok(RegistryError::FactoryNotRegistered)));

    test.registry
        .add_future_factory(&test.admin, &test.factory, &test.aave());
    let result = test.registry.try_add_future_platform(
        &test.admin,
        &test.factory,
        &String::from_str(&test.env, "YEARN"),
        &test.logic(1),
        &test.logic(2),
        &test.logic(3),
    );
    assert_eq!(result, Err(Ok(RegistryError::PlatformNotOwned)));
}

#[test]
fn test_remove_platform() {
    let test = RegistryTest::setup();
    test.add_aave();

    test.registry.remove_future_platform(&test.admin, &test.aave());
    assert!(!test.registry.is_registered_future_platform(&test.aave()));
    assert_eq!(test.registry.future_platforms_count(), 0);
    assert_eq!(
        test.registry.try_get_future_platform(&test.aave()),
        Err(Ok(RegistryError::PlatformNotRegistered))
    );

    // A different triple can be registered after removal
    test.registry.add_future_platform(
        &test.admin,
        &test.factory,
        &test.aave(),
        &test.logic(4),
        &test.logic(5),
        &test.logic(6),
    );
    assert_eq!(
        test.registry.get_future_platform(&test.aave()).future_logic,
        test.logic(4)
    );
}

#[test]
fn test_futures_directory() {
    let test = RegistryTest::setup();
    test.add_aave();
    let future_a = Address::generate(&test.env);
    let future_b = Address::generate(&test.env);

    test.registry.add_future(&test.factory, &future_a);
    test.registry.add_future(&test.factory, &future_b);
    assert_eq!(test.registry.future_count(), 2);
    assert_eq!(test.registry.get_future_at(&0), future_a);
    assert_eq!(test.registry.get_future_at(&1), future_b);
    assert!(test.registry.is_registered_future(&future_a));

    assert_eq!(
        test.registry.try_add_future(&test.factory, &future_a),
        Err(Ok(RegistryError::FutureAlreadyRegistered))
    );

    test.registry.remove_future(&test.admin, &future_a);
    assert!(!test.registry.is_registered_future(&future_a));
    assert_eq!(test.registry.future_count(), 1);
    assert_eq!(test.registry.get_future_at(&0), future_b);
    assert_eq!(
        test.registry.try_get_future_at(&1),
        Err(Ok(RegistryError::IndexOutOfBounds))
    );
}

#[test]
fn test_only_factories_add_futures() {
    let test = RegistryTest::setup();
    let stranger = Address::generate(&test.env);
    let future = Address::generate(&test.env);

    assert_eq!(
        test.registry.try_add_future(&stranger, &future),
        Err(Ok(RegistryError::FactoryNotRegistered))
    );
    assert_eq!(test.registry.future_count(), 0);
}

#[test]
fn test_admin_gating() {
    let test = RegistryTest::setup();
    let stranger = Address::generate(&test.env);
    let controller = Address::generate(&test.env);

    assert_eq!(
        test.registry.try_set_controller(&stranger, &controller),
        Err(Ok(RegistryError::Unauthorized))
    );
    assert_eq!(
        test.registry
            .try_add_future_factory(&stranger, &test.factory, &test.aave()),
        Err(Ok(RegistryError::Unauthorized))
    );
    assert_eq!(
        test.registry.try_get_controller(),
        Err(Ok(RegistryError::NotConfigured))
    );

    test.registry.set_controller(&test.admin, &controller);
    assert_eq!(test.registry.get_controller(), controller);
}

#[test]
fn test_logic_and_naming_configuration() {
    let test = RegistryTest::setup();

    assert_eq!(test.registry.get_naming_policy(), NamingPolicy::DurationPrefixed);
    test.registry
        .set_naming_policy(&test.admin, &NamingPolicy::Compact);
    assert_eq!(test.registry.get_naming_policy(), NamingPolicy::Compact);

    test.registry.set_fyt_logic(&test.admin, &test.logic(7));
    test.registry.set_apwine_ibt_logic(&test.admin, &test.logic(8));
    test.registry
        .set_liquidity_gauge_logic(&test.admin, &test.logic(9));
    assert_eq!(test.registry.get_fyt_logic(), test.logic(7));
    assert_eq!(test.registry.get_apwine_ibt_logic(), test.logic(8));
    assert_eq!(test.registry.get_liquidity_gauge_logic(), test.logic(9));
}
