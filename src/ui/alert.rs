//! User-facing alerts raised by the API layer.

/// Everything the API layer may ask the user to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    /// The server answered with an error status.
    RequestFailed,
    /// The request went out but nothing came back.
    NetworkUnavailable,
    /// The session is missing or expired.
    LoginRequired,
}

impl Alert {
    /// Human-readable text shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Alert::RequestFailed => "An error occurred while processing the request.",
            Alert::NetworkUnavailable => "The server or network is not responding.",
            Alert::LoginRequired => "Please log in to continue.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let all = [Alert::RequestFailed, Alert::NetworkUnavailable, Alert::LoginRequired];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }

    #[test]
    fn test_login_required_message() {
        assert_eq!(Alert::LoginRequired.message(), "Please log in to continue.");
    }
}
