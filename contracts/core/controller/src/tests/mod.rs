mod gauge_tests;

pub use fixture::{ProtocolTest, UNIT, WEEK};
