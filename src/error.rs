/// Boxed error type returned by caller-supplied page handlers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by the bizhi client.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request cancelled")]
    Cancelled,

    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("handler error: {0}")]
    Handler(#[source] BoxError),
}

impl Error {
    /// Returns `true` if this error came from the transport layer:
    /// request construction, the network call itself, or cancellation
    /// of an in-flight call.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_display() {
        assert_eq!(Error::Cancelled.to_string(), "request cancelled");
    }

    #[test]
    fn test_decode_display() {
        let inner = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::Decode(inner);
        assert!(err.to_string().starts_with("decode error:"));
    }

    #[test]
    fn test_handler_display_and_source() {
        let err = Error::Handler("seen it already".into());
        assert_eq!(err.to_string(), "handler error: seen it already");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_is_transport() {
        assert!(Error::Cancelled.is_transport());

        let decode = Error::Decode(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert!(!decode.is_transport());

        let handler = Error::Handler("nope".into());
        assert!(!handler.is_transport());
    }

    #[test]
    fn test_handler_downcast() {
        #[derive(Debug, thiserror::Error)]
        #[error("walk aborted at page {0}")]
        struct WalkAborted(u32);

        let err = Error::Handler(Box::new(WalkAborted(3)));
        match err {
            Error::Handler(inner) => {
                let aborted = inner.downcast::<WalkAborted>().unwrap();
                assert_eq!(aborted.0, 3);
            }
            _ => panic!("expected Handler variant"),
        }
    }
}
