use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Registered {
    #[topic]
    pub user: Address,
    #[topic]
    pub period: u32,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Unregistered {
    #[topic]
    pub user: Address,
    #[topic]
    pub period: u32,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PeriodStarted {
    #[topic]
    pub period: u32,
    pub fyt: Address,
    pub locked: i128,
    pub apwibt_minted: i128,
    pub next_period_timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PeriodExpired {
    #[topic]
    pub period: u32,
    pub yield_amount: i128,
    pub fyt_supply: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FytClaimed {
    #[topic]
    pub user: Address,
    pub up_to_period: u32,
    pub apwibt_minted: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    #[topic]
    pub user: Address,
    pub amount: i128,
    pub released: i128,
}
