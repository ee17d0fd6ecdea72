use serde::{Deserialize, Serialize};
use std::net::TcpStream;
use tungstenite::{connect, stream::MaybeTlsStream, WebSocket};
use ureq::json;
use url::Url;

use crate::error::Error;
use crate::event::SwapProgressUpdate;

pub const DAEMON_DEFAULT_URL: &str = "http://127.0.0.1:1234";

/// One message on the daemon's push channel. A single websocket carries both
/// sub-streams, multiplexed by the `channel` tag; an unknown channel fails
/// decoding instead of being dropped on the floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "channel", content = "payload")]
pub enum DaemonEvent {
    /// A milestone reached in some swap's protocol execution.
    #[serde(rename = "swap-progress-update")]
    SwapProgress(SwapProgressUpdate),
    /// One or more newline-delimited log entries from the daemon's tracing
    /// output, forwarded raw; see [`crate::logs::parse_log_buffer`].
    #[serde(rename = "cli-log-emitted")]
    CliLog { buffer: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSwapRequest {
    pub swap_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSwapResponse {
    pub result: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuspendCurrentSwapResponse {
    pub swap_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelAndRefundRequest {
    pub swap_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelAndRefundResponse {
    pub result: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveApprovalRequest {
    pub request_id: String,
    pub accept: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveApprovalResponse {
    pub result: String,
}

/// Command and event boundary to the swap daemon.
///
/// Commands are fire-and-forget from the projection's point of view: the
/// daemon acknowledges or rejects them here, but their real outcome arrives
/// later as progress events on the push channel. A rejection is surfaced to
/// the caller as [`Error::Daemon`] and is not retried; there is no
/// client-side cancellation of an issued command, "suspend" itself being a
/// daemon command like any other.
pub struct DaemonClient {
    base_url: String,
}

impl DaemonClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }

    /// Returns the web socket connection to the daemon's event channel
    pub fn connect_ws(&self) -> Result<WebSocket<MaybeTlsStream<TcpStream>>, Error> {
        let ws_string = self.base_url.clone().replace("http", "ws") + "/ws";
        let (socket, response) = connect(Url::parse(&ws_string)?)?;
        log::debug!("websocket response: {:?}", response);
        Ok(socket)
    }

    /// Make a Post request. Returns the Response
    fn post(&self, end_point: &str, data: impl Serialize) -> Result<String, Error> {
        let url = format!("{}/{}", self.base_url, end_point);
        match ureq::post(&url).send_json(data) {
            Ok(response) => Ok(response.into_string()?),
            // The daemon rejected the command. Surfaced to the caller for a
            // notification, never retried from here.
            Err(ureq::Error::Status(code, response)) => {
                let message = response.into_string().unwrap_or_default();
                Err(Error::Daemon(format!("{}: {}", code, message)))
            }
            Err(e) => Err(Error::HTTP(e)),
        }
    }

    /// Resume an interrupted swap from the daemon's database.
    pub fn resume_swap(&self, swap_id: &str) -> Result<ResumeSwapResponse, Error> {
        let data = serde_json::to_value(ResumeSwapRequest {
            swap_id: swap_id.to_string(),
        })?;
        Ok(serde_json::from_str(&self.post("swap/resume", data)?)?)
    }

    /// Ask the daemon to stop driving whatever swap it is currently running.
    pub fn suspend_current_swap(&self) -> Result<SuspendCurrentSwapResponse, Error> {
        Ok(serde_json::from_str(
            &self.post("swap/suspend", json!({}))?,
        )?)
    }

    /// Force the cancel and refund path for a swap whose happy path is stuck.
    pub fn cancel_and_refund(&self, swap_id: &str) -> Result<CancelAndRefundResponse, Error> {
        let data = serde_json::to_value(CancelAndRefundRequest {
            swap_id: swap_id.to_string(),
        })?;
        Ok(serde_json::from_str(
            &self.post("swap/cancel-refund", data)?,
        )?)
    }

    /// Answer a pending approval request (e.g. accepting a lock amount).
    pub fn resolve_approval(
        &self,
        request_id: &str,
        accept: bool,
    ) -> Result<ResolveApprovalResponse, Error> {
        let data = serde_json::to_value(ResolveApprovalRequest {
            request_id: request_id.to_string(),
            accept,
        })?;
        Ok(serde_json::from_str(
            &self.post("approval/resolve", data)?,
        )?)
    }
}
