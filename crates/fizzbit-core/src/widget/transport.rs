//! Port the widget uses to reach the message gateway.

use std::future::Future;

use fizzbit_types::api::ChatReplyBody;
use fizzbit_types::error::TransportError;

/// A gateway answer as seen on the wire: status plus the decoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayReply {
    pub status: u16,
    pub body: ChatReplyBody,
}

impl GatewayReply {
    pub fn new(status: u16, body: ChatReplyBody) -> Self {
        Self { status, body }
    }

    /// 2xx with `success: true`.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status) && self.body.success
    }
}

/// Sends one chat message to the gateway.
///
/// `Err` means no usable answer arrived (connection failure, unreadable
/// body). Non-2xx answers are `Ok` with their status.
pub trait MessageTransport: Send + Sync + 'static {
    fn send(
        &self,
        message: &str,
    ) -> impl Future<Output = Result<GatewayReply, TransportError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(success: bool) -> ChatReplyBody {
        ChatReplyBody {
            success,
            response: Some("x".to_string()),
            error: None,
        }
    }

    #[test]
    fn test_is_success_needs_status_and_flag() {
        assert!(GatewayReply::new(200, body(true)).is_success());
        assert!(!GatewayReply::new(200, body(false)).is_success());
        assert!(!GatewayReply::new(503, body(true)).is_success());
    }
}
