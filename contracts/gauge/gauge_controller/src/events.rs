use soroban_sdk::{contractevent, Address, Symbol};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EpochParamSet {
    #[topic]
    pub name: Symbol,
    pub value: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GaugeRegistered {
    #[topic]
    pub future: Address,
    pub gauge: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GaugeWeightSet {
    #[topic]
    pub gauge: Address,
    pub weight: i128,
    pub total_weight: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawableStateChanged {
    pub withdrawable: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsMinted {
    #[topic]
    pub gauge: Address,
    #[topic]
    pub to: Address,
    pub amount: i128,
}
