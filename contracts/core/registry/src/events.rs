use soroban_sdk::{contractevent, Address, BytesN, String, Symbol};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractSet {
    #[topic]
    pub name: Symbol,
    pub address: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogicSet {
    #[topic]
    pub name: Symbol,
    pub logic: BytesN<32>,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FutureFactoryAdded {
    #[topic]
    pub factory: Address,
    pub platform_name: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FuturePlatformAdded {
    #[topic]
    pub factory: Address,
    pub name: String,
    pub future_logic: BytesN<32>,
    pub wallet_logic: BytesN<32>,
    pub vault_logic: BytesN<32>,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FuturePlatformRemoved {
    pub name: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FutureAdded {
    #[topic]
    pub future: Address,
    pub factory: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FutureRemoved {
    #[topic]
    pub future: Address,
}
