use super::{ProtocolTest, UNIT, WEEK};
use liquidity_gauge::GaugeError;

#[test]
fn test_rewards_gated_until_resume() {
    let test = ProtocolTest::setup();
    test.register(&test.user1, 100 * UNIT);
    test.start_period();
    test.jump(WEEK);
    test.start_period();

    // One week of a 5e11 yearly emission, all on this gauge
    let redeemable = test.gauge.get_user_redeemable(&test.user1);
    assert_eq!(redeemable, 9_589_041_095);
    assert_eq!(
        test.gauge.try_redeem_apw(&test.user1),
        Err(Ok(GaugeError::WithdrawalsPaused))
    );

    test.gauge_controller.resume_apw_withdraw(&test.admin);
    assert_eq!(test.gauge.redeem_apw(&test.user1), redeemable);
    assert_eq!(test.apw.balance(&test.user1), redeemable);
    assert_eq!(test.gauge.get_user_redeemable(&test.user1), 0);

    test.gauge_controller.pause_apw_withdraw(&test.admin);
    test.jump(WEEK);
    assert!(test.gauge.get_user_redeemable(&test.user1) > 0);
    assert_eq!(
        test.gauge.try_redeem_apw(&test.user1),
        Err(Ok(GaugeError::WithdrawalsPaused))
    );
}

#[test]
fn test_rewards_follow_locked_share() {
    let test = ProtocolTest::setup();
    test.register(&test.user1, 60 * UNIT);
    test.register(&test.user2, 40 * UNIT);
    test.start_period();

    // user1 claims mid-period, user2 never does
    test.jump(WEEK / 2);
    test.controller.claim_fyt(&test.user1, &test.future.address);
    test.jump(WEEK / 2);
    test.start_period();

    assert_eq!(test.gauge.get_user_redeemable(&test.user1), 5_753_424_656);
    assert_eq!(test.gauge.get_user_redeemable(&test.user2), 3_835_616_437);
    assert_eq!(test.gauge.get_total_liquidity(), 100 * UNIT);
}

#[test]
fn test_claimed_position_keeps_earning_after_redeem() {
    let test = ProtocolTest::setup();
    test.gauge_controller.resume_apw_withdraw(&test.admin);
    test.register(&test.user1, 100 * UNIT);
    test.start_period();
    test.jump(WEEK);

    // Redeeming before claiming books the unclaimed position
    let first = test.gauge.redeem_apw(&test.user1);
    assert!(first > 0);
    test.controller.claim_fyt(&test.user1, &test.future.address);
    assert_eq!(test.gauge.get_user_redeemable(&test.user1), 0);

    test.jump(WEEK);
    let second = test.gauge.redeem_apw(&test.user1);
    assert!(second > 0);
    assert_eq!(test.apw.balance(&test.user1), first + second);
}

#[test]
fn test_no_rewards_without_weight() {
    let test = ProtocolTest::setup();
    test.gauge_controller
        .set_gauge_weight(&test.admin, &test.gauge.address, &0);
    test.register(&test.user1, 100 * UNIT);
    test.start_period();
    test.jump(WEEK);
    test.start_period();

    assert_eq!(test.gauge.get_user_redeemable(&test.user1), 0);
    assert_eq!(test.gauge_controller.get_total_weight(), 0);
}

#[test]
fn test_withdrawn_liquidity_stops_earning() {
    let test = ProtocolTest::setup();
    test.register(&test.user1, 100 * UNIT);
    test.start_period();
    test.controller
        .withdraw_lock_funds(&test.user1, &test.future.address, &(100 * UNIT));
    assert_eq!(test.gauge.get_total_liquidity(), 0);

    let before = test.gauge.get_user_redeemable(&test.user1);
    test.jump(WEEK);
    assert_eq!(test.gauge.get_user_redeemable(&test.user1), before);
}

#[test]
fn test_epochs_follow_ledger_time() {
    let test = ProtocolTest::setup();

    assert_eq!(test.gauge_controller.get_current_epoch(), 0);
    test.jump(365 * 86_400);
    assert_eq!(test.gauge_controller.get_current_epoch(), 1);
}
