use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StartingDelaySet {
    pub delay: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NextPeriodSwitchSet {
    #[topic]
    pub duration: u64,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FutureRegistered {
    #[topic]
    pub duration: u64,
    pub future: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FutureStartFailed {
    #[topic]
    pub duration: u64,
    pub future: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FuturesStarted {
    #[topic]
    pub duration: u64,
    pub started: u32,
    pub next_switch: u64,
}
