use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Client misconfiguration (empty developer key, bad base URL).
    Config,
    /// Caller-supplied value outside its enumerated set.
    Validation,
    /// Response body matched a known error sentinel.
    Api,
    /// Sentinel match on the login path.
    Auth,
    /// Non-2xx HTTP status from the transport.
    Http,
    /// Network or socket failure.
    Io,
    /// Response text failed structural XML parsing.
    Parse,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    token: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            token: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The sentinel string the response body matched, if any. The empty
    /// string is a valid token (expired/invalid session key).
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(token) = &self.token {
            write!(f, " (sentinel: {token:?})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn display_includes_message_and_token() {
        let err = Error::new(ErrorKind::Api)
            .with_message("Bad API request, invalid api_option")
            .with_token("invalid_option");
        assert_eq!(
            err.to_string(),
            "Api: Bad API request, invalid api_option (sentinel: \"invalid_option\")"
        );
    }

    #[test]
    fn with_kind_rebrands_error() {
        let err = Error::new(ErrorKind::Api)
            .with_message("Bad API request, invalid login")
            .with_kind(ErrorKind::Auth);
        assert_eq!(err.kind(), ErrorKind::Auth);
        assert_eq!(err.message(), Some("Bad API request, invalid login"));
    }

    #[test]
    fn empty_token_survives_round_trip() {
        let err = Error::new(ErrorKind::Api).with_token("");
        assert_eq!(err.token(), Some(""));
    }
}
