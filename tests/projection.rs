use swapd_client::daemon::DaemonEvent;
use swapd_client::event::SwapSpawnType;
use swapd_client::session::SwapSession;
use swapd_client::stepper::SwapPath;

// Drives a full happy-path swap through the session exactly as it would
// arrive off the wire, log lines interleaved with progress events.
#[test]
fn test_happy_path_from_wire() {
    let messages = [
        r#"{"channel":"cli-log-emitted","payload":{"buffer":"{\"timestamp\":\"t0\",\"level\":\"INFO\",\"fields\":{\"message\":\"Starting swap\",\"swap_id\":\"s1\"}}"}}"#,
        r#"{"channel":"swap-progress-update","payload":{"swap_id":"s1","event":{"type":"Started","content":{"btc_lock_amount":570000,"btc_tx_lock_fee":1300}}}}"#,
        r#"{"channel":"swap-progress-update","payload":{"swap_id":"s1","event":{"type":"SwapSetupCompleted"}}}"#,
        r#"{"channel":"swap-progress-update","payload":{"swap_id":"s1","event":{"type":"BtcLocked","content":{"btc_lock_txid":"d1a5c4f1fd6b1bdb76e0c5f67f4b7786ab83e070fa4c7e152546c0930085f6bc","btc_lock_confirmations":1}}}}"#,
        r#"{"channel":"swap-progress-update","payload":{"swap_id":"s1","event":{"type":"XmrLockProofReceived","content":{"xmr_lock_txid":"c06b191ab2de1dca1b0fd34141bfa2e0b04aec6590db8e48726b4f65b0ebca38","xmr_lock_tx_confirmations":3,"xmr_lock_tx_target_confirmations":10}}}}"#,
        r#"{"channel":"swap-progress-update","payload":{"swap_id":"s1","event":{"type":"XmrLocked"}}}"#,
        r#"{"channel":"swap-progress-update","payload":{"swap_id":"s1","event":{"type":"EncSigSent"}}}"#,
        r#"{"channel":"swap-progress-update","payload":{"swap_id":"s1","event":{"type":"BtcRedeemed","content":{"btc_redeem_txid":"4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"}}}}"#,
        r#"{"channel":"swap-progress-update","payload":{"swap_id":"s1","event":{"type":"XmrRedeemed","content":{"xmr_redeem_txid":"c06b191ab2de1dca1b0fd34141bfa2e0b04aec6590db8e48726b4f65b0ebca38","xmr_redeem_address":"44AFFq5kSiGBoZ4NMDwYtN18obc8AemS33DBLWs3H7otXft3XjrpDtQGv7SqSsaBYBb98uNbr2VBBEt7f2wfn3RVGQBEP3A"}}}}"#,
    ];

    let mut session = SwapSession::new(SwapSpawnType::Init);
    let mut steps = Vec::new();
    for raw in messages {
        let event: DaemonEvent = serde_json::from_str(raw).expect("wire message must decode");
        session.apply(event);
        steps.push(session.stepper().step_index);
    }

    assert_eq!(steps, vec![0, 0, 0, 1, 1, 2, 2, 3, 4]);

    let stepper = session.stepper();
    assert_eq!(stepper.path, SwapPath::Happy);
    assert!(!stepper.has_error);

    let state = session.state().expect("state must be held");
    assert_eq!(state.swap_id, "s1");
    assert_eq!(session.logs_for_current_swap().len(), 1);

    // Terminal success stays clean even after the daemon goes away.
    session.mark_process_exited();
    assert!(!session.stepper().has_error);
}

#[test]
fn test_refund_path_from_wire() {
    let messages = [
        r#"{"channel":"swap-progress-update","payload":{"swap_id":"s9","event":{"type":"CancelTimelockExpired"}}}"#,
        r#"{"channel":"swap-progress-update","payload":{"swap_id":"s9","event":{"type":"BtcCancelled","content":{"btc_cancel_txid":"d1a5c4f1fd6b1bdb76e0c5f67f4b7786ab83e070fa4c7e152546c0930085f6bc"}}}}"#,
        r#"{"channel":"swap-progress-update","payload":{"swap_id":"s9","event":{"type":"BtcRefunded","content":{"btc_refund_txid":"4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"}}}}"#,
    ];

    let mut session = SwapSession::new(SwapSpawnType::Resume);
    for raw in messages {
        let event: DaemonEvent = serde_json::from_str(raw).expect("wire message must decode");
        session.apply(event);
        assert_eq!(session.stepper().path, SwapPath::Unhappy);
    }

    let stepper = session.stepper();
    assert_eq!(stepper.step_index, 2);
    assert!(!stepper.has_error);
}
