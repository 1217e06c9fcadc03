use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PeriodLiquidityAdded {
    #[topic]
    pub period: u32,
    pub amount: i128,
    pub reward_index: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserLiquidityRegistered {
    #[topic]
    pub user: Address,
    pub amount: i128,
    pub since_period: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserLiquidityRemoved {
    #[topic]
    pub user: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApwRedeemed {
    #[topic]
    pub user: Address,
    pub amount: i128,
}
