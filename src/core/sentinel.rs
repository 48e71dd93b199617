//! Purpose: Centralize the service's plain-text error sentinel table.
//! Exports: `Sentinel`, `API_ERRORS`, `classify`, `api_error`, `validation_error`.
//! Role: Shared policy for response classification and local pre-flight checks.
//! Invariants: Classification is verbatim exact-match on the whole body.
//! Invariants: The empty string is itself a sentinel (expired/invalid session key).

use crate::core::error::{Error, ErrorKind};

/// One entry of the service's error table: the exact body string it
/// returns in place of an HTTP error status, and the human-readable
/// description shipped with it.
#[derive(Clone, Copy, Debug)]
pub struct Sentinel {
    pub token: &'static str,
    pub description: &'static str,
}

pub const API_ERRORS: &[Sentinel] = &[
    Sentinel {
        token: "invalid_option",
        description: "Bad API request, invalid api_option",
    },
    Sentinel {
        token: "invalid_dev_key",
        description: "Bad API request, invalid api_dev_key",
    },
    Sentinel {
        token: "ip_blocked",
        description: "Bad API request, IP blocked",
    },
    Sentinel {
        token: "max_number_unlisted_pastes",
        description: "Bad API request, maximum number of 25 unlisted pastes for your free account",
    },
    Sentinel {
        token: "max_number_private_pastes",
        description: "Bad API request, maximum number of 10 private pastes for your free account",
    },
    Sentinel {
        token: "empty_paste_code",
        description: "Bad API request, api_paste_code was empty",
    },
    Sentinel {
        token: "maximum_paste_size",
        description: "Bad API request, maximum paste file size exceeded",
    },
    Sentinel {
        token: "invalid_expire_date",
        description: "Bad API request, invalid api_expire_date",
    },
    Sentinel {
        token: "invalid_paste_private",
        description: "Bad API request, invalid api_paste_private",
    },
    Sentinel {
        token: "invalid_paste_format",
        description: "Bad API request, invalid api_paste_format",
    },
    Sentinel {
        token: "invalid_user_key",
        description: "Bad API request, invalid api_user_key",
    },
    Sentinel {
        token: "",
        description: "Bad API request, invalid or expired api_user_key",
    },
    Sentinel {
        token: "invalid_request_method",
        description: "Bad API request, use POST request, not GET",
    },
    Sentinel {
        token: "invalid_login",
        description: "Bad API request, invalid login",
    },
    Sentinel {
        token: "account_inactive",
        description: "Bad API request, account not active",
    },
    Sentinel {
        token: "invalid_post_params",
        description: "Bad API request, invalid POST parameters",
    },
    Sentinel {
        token: "invalid_perm_to_remove",
        description: "Bad API request, invalid permission to remove paste",
    },
    Sentinel {
        token: "invalid_perm_to_view",
        description: "Bad API request, invalid permission to view this paste or invalid api_paste_key",
    },
];

/// Match a response body against the sentinel table. The comparison is
/// verbatim on the whole body: substrings, trailing whitespace, and
/// sentinels the table does not know pass through as success.
pub fn classify(body: &str) -> Option<&'static Sentinel> {
    API_ERRORS.iter().find(|sentinel| sentinel.token == body)
}

pub fn description_for(token: &str) -> Option<&'static str> {
    classify(token).map(|sentinel| sentinel.description)
}

pub fn api_error(sentinel: &Sentinel) -> Error {
    Error::new(ErrorKind::Api)
        .with_message(sentinel.description)
        .with_token(sentinel.token)
}

/// A local pre-flight rejection, phrased with the same description the
/// server would have answered with.
pub fn validation_error(token: &str) -> Error {
    let message = description_for(token).unwrap_or(token);
    Error::new(ErrorKind::Validation)
        .with_message(message)
        .with_token(token)
}

#[cfg(test)]
mod tests {
    use super::{API_ERRORS, api_error, classify, description_for, validation_error};
    use crate::core::error::ErrorKind;

    #[test]
    fn classify_matches_exact_token() {
        let sentinel = classify("invalid_dev_key").expect("sentinel");
        assert_eq!(sentinel.description, "Bad API request, invalid api_dev_key");
    }

    #[test]
    fn classify_recognizes_empty_body() {
        let sentinel = classify("").expect("sentinel");
        assert_eq!(
            sentinel.description,
            "Bad API request, invalid or expired api_user_key"
        );
    }

    #[test]
    fn classify_requires_whole_body_equality() {
        assert!(classify("invalid_dev_key ").is_none());
        assert!(classify("invalid_dev_keys").is_none());
        assert!(classify("prefix invalid_dev_key").is_none());
        assert!(classify("Bad API request, invalid api_dev_key").is_none());
    }

    #[test]
    fn tokens_are_unique() {
        for (index, sentinel) in API_ERRORS.iter().enumerate() {
            let duplicate = API_ERRORS[index + 1..]
                .iter()
                .any(|other| other.token == sentinel.token);
            assert!(!duplicate, "duplicate sentinel token {:?}", sentinel.token);
        }
    }

    #[test]
    fn api_error_carries_token_and_description() {
        let sentinel = classify("invalid_perm_to_remove").expect("sentinel");
        let err = api_error(sentinel);
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.token(), Some("invalid_perm_to_remove"));
        assert_eq!(
            err.message(),
            Some("Bad API request, invalid permission to remove paste")
        );
    }

    #[test]
    fn validation_error_reuses_table_description() {
        let err = validation_error("invalid_paste_format");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(
            err.message(),
            Some("Bad API request, invalid api_paste_format")
        );
    }

    #[test]
    fn description_for_unknown_token_is_none() {
        assert!(description_for("rate_limited").is_none());
    }
}
