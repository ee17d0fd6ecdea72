use bitcoin::{Amount, Txid};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Why the current swap session was started.
///
/// `CancelRefund` biases the stepper toward the refund path before the daemon
/// has caught up with the user's request; see [`crate::stepper::classify`].
/// Session only, never persisted.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum SwapSpawnType {
    Init,
    Resume,
    CancelRefund,
}

impl ToString for SwapSpawnType {
    fn to_string(&self) -> String {
        match self {
            SwapSpawnType::Init => "init".to_string(),
            SwapSpawnType::Resume => "resume".to_string(),
            SwapSpawnType::CancelRefund => "cancel_refund".to_string(),
        }
    }
}

impl FromStr for SwapSpawnType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" => Ok(SwapSpawnType::Init),
            "resume" => Ok(SwapSpawnType::Resume),
            "cancel_refund" => Ok(SwapSpawnType::CancelRefund),
            _ => Err(()),
        }
    }
}

/// One progress notification on the daemon's push channel: which swap it is
/// about, and the milestone reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapProgressUpdate {
    pub swap_id: String,
    pub event: ProgressEvent,
}

/// A discrete milestone in a swap's protocol execution, as emitted by the
/// daemon. Exactly one variant is active per instance; an unknown tag on the
/// wire fails deserialization rather than mapping to a default, so a daemon
/// running a newer protocol than this client surfaces immediately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content")]
pub enum ProgressEvent {
    Started {
        #[serde(with = "bitcoin::amount::serde::as_sat")]
        btc_lock_amount: Amount,
        #[serde(with = "bitcoin::amount::serde::as_sat")]
        btc_tx_lock_fee: Amount,
    },
    SwapSetupCompleted,
    BtcLocked {
        btc_lock_txid: Txid,
        btc_lock_confirmations: u64,
    },
    XmrLockProofReceived {
        xmr_lock_txid: String,
        xmr_lock_tx_confirmations: u64,
        xmr_lock_tx_target_confirmations: u64,
    },
    XmrLocked,
    EncSigSent,
    BtcRedeemed {
        btc_redeem_txid: Txid,
    },
    XmrRedeemed {
        xmr_redeem_txid: String,
        xmr_redeem_address: String,
    },
    SafelyAborted,
    CancelTimelockExpired,
    BtcCancelled {
        btc_cancel_txid: Txid,
    },
    BtcRefunded {
        btc_refund_txid: Txid,
    },
    BtcPunished,
    CooperativeRedeemRejected {
        reason: String,
    },
}
