//! Purpose: Provide the blocking HTTP client for the Pastebiner API.
//! Exports: `PasteClient`, `ApiResult`, default endpoint constants.
//! Role: Builds form-encoded requests, classifies sentinel responses,
//! and decodes raw or XML payloads into API return values.
//! Invariants: Every request carries the developer key and the session
//! key (empty string while logged out).
//! Invariants: Enumerated parameters are checked locally before any
//! request is sent.

use crate::api::paste::PasteOptions;
use crate::core::error::{Error, ErrorKind};
use crate::core::sentinel;
use crate::core::xml::{self, XmlValue};
use tracing::{debug, trace};
use url::Url;

pub type ApiResult<T> = Result<T, Error>;

pub const DEFAULT_BASE_URL: &str = "https://pastebiner.com/api";
pub const DEFAULT_RESULTS_LIMIT: i64 = 50;

const MAIN_PATH: &str = "api_post.php";
const LOGIN_PATH: &str = "api_login.php";
const MAX_RESULTS_LIMIT: i64 = 1000;

const OPTION_PASTE: &str = "paste";
const OPTION_LIST: &str = "list";
const OPTION_TRENDS: &str = "trends";
const OPTION_DELETE: &str = "delete";
const OPTION_USER_DETAILS: &str = "userdetails";

/// Client for the Pastebiner paste-hosting service.
///
/// Holds the long-lived developer key and, after [`login`](Self::login),
/// the session key identifying the authenticated user. Calls that need
/// no elevated permission work without logging in; the session key is
/// then sent as an empty string.
#[derive(Debug)]
pub struct PasteClient {
    agent: ureq::Agent,
    base_url: Url,
    dev_key: String,
    user_key: Option<String>,
}

impl PasteClient {
    /// Create a client from a developer key. Fails with
    /// [`ErrorKind::Config`] when the key is empty, before any network
    /// access is possible.
    pub fn new(dev_key: impl Into<String>) -> ApiResult<Self> {
        let dev_key = dev_key.into();
        if dev_key.is_empty() {
            return Err(
                Error::new(ErrorKind::Config).with_message("developer key must not be empty")
            );
        }
        Ok(Self {
            agent: ureq::AgentBuilder::new().build(),
            base_url: normalize_base_url(DEFAULT_BASE_URL.to_string())?,
            dev_key,
            user_key: None,
        })
    }

    /// Create a client and log in immediately.
    pub fn new_with_login(
        dev_key: impl Into<String>,
        username: &str,
        password: &str,
    ) -> ApiResult<Self> {
        let mut client = Self::new(dev_key)?;
        client.login(username, password)?;
        Ok(client)
    }

    /// Point the client at a different API base, e.g. a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> ApiResult<Self> {
        self.base_url = normalize_base_url(base_url.into())?;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The session key obtained by [`login`](Self::login), if any.
    pub fn user_key(&self) -> Option<&str> {
        self.user_key.as_deref()
    }

    /// Install a session key obtained out of band.
    pub fn set_user_key(&mut self, key: impl Into<String>) {
        self.user_key = Some(key.into());
    }

    /// Exchange account credentials for a session key, stored on the
    /// client and reused by every subsequent call. A sentinel match on
    /// this path (invalid login, inactive account) fails with
    /// [`ErrorKind::Auth`].
    pub fn login(&mut self, username: &str, password: &str) -> ApiResult<()> {
        let params = [
            ("api_user_name", username.to_string()),
            ("api_user_password", password.to_string()),
        ];
        let key = self.request_form(LOGIN_PATH, &params).map_err(|err| {
            if err.kind() == ErrorKind::Api {
                err.with_kind(ErrorKind::Auth)
            } else {
                err
            }
        })?;
        self.user_key = Some(key);
        Ok(())
    }

    /// Create a paste and return its URL. The optional format,
    /// visibility, and expiration values are checked against their
    /// enumerated sets before the request goes out.
    pub fn create_paste(&self, code: &str, options: &PasteOptions) -> ApiResult<String> {
        options.validate()?;

        let mut params: Vec<(&str, String)> = vec![
            ("api_option", OPTION_PASTE.to_string()),
            ("api_paste_code", code.to_string()),
            ("api_paste_name", options.name.clone().unwrap_or_default()),
        ];
        if let Some(expiration) = &options.expiration {
            params.push(("api_paste_expire_date", expiration.clone()));
        }
        if let Some(visibility) = options.visibility {
            params.push(("api_paste_private", visibility.to_string()));
        }
        if let Some(format) = &options.format {
            params.push(("api_paste_format", format.clone()));
        }

        self.request_form(MAIN_PATH, &params)
    }

    /// Delete a paste by its key (the URL path segment) and return the
    /// service's confirmation text.
    pub fn delete_paste(&self, paste_key: &str) -> ApiResult<String> {
        let params = [
            ("api_option", OPTION_DELETE.to_string()),
            ("api_paste_key", paste_key.to_string()),
        ];
        self.request_form(MAIN_PATH, &params)
    }

    /// List pastes created by the logged-in user. Limits outside
    /// [1, 1000] silently reset to [`DEFAULT_RESULTS_LIMIT`].
    pub fn list_user_pastes(&self, limit: i64) -> ApiResult<XmlValue> {
        let limit = effective_limit(limit);
        let params = [
            ("api_option", OPTION_LIST.to_string()),
            ("api_results_limit", limit.to_string()),
        ];
        let body = self.request_form(MAIN_PATH, &params)?;
        xml::parse_document(&xml::wrap_root("pastes", &body))
    }

    /// List the currently trending pastes.
    pub fn list_trending_pastes(&self) -> ApiResult<XmlValue> {
        let params = [("api_option", OPTION_TRENDS.to_string())];
        let body = self.request_form(MAIN_PATH, &params)?;
        xml::parse_document(&xml::wrap_root("pastes", &body))
    }

    /// Fetch the logged-in user's account record.
    pub fn user_info(&self) -> ApiResult<XmlValue> {
        let params = [("api_option", OPTION_USER_DETAILS.to_string())];
        let body = self.request_form(MAIN_PATH, &params)?;
        xml::parse_document(&body)
    }

    /// POST a form-encoded request and return the body text, after
    /// classifying it against the sentinel table. The service signals
    /// failure through exact body strings on 200 responses; anything
    /// the table does not match verbatim is success.
    fn request_form(&self, path: &str, params: &[(&str, String)]) -> ApiResult<String> {
        let url = build_url(&self.base_url, path)?;
        let mut form: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 2);
        form.push(("api_dev_key", self.dev_key.as_str()));
        form.push(("api_user_key", self.user_key.as_deref().unwrap_or("")));
        for (key, value) in params {
            form.push((key, value.as_str()));
        }

        debug!(path, "sending api request");
        let response = self.agent.request("POST", url.as_str()).send_form(&form);
        let body = match response {
            Ok(resp) => resp.into_string().map_err(|err| {
                Error::new(ErrorKind::Io)
                    .with_message("failed to read response body")
                    .with_source(err)
            })?,
            Err(ureq::Error::Status(code, _)) => {
                return Err(Error::new(ErrorKind::Http).with_message(format!("http status {code}")));
            }
            Err(ureq::Error::Transport(err)) => {
                return Err(Error::new(ErrorKind::Io)
                    .with_message("request failed")
                    .with_source(err));
            }
        };
        trace!(bytes = body.len(), "api response received");

        if let Some(matched) = sentinel::classify(&body) {
            return Err(sentinel::api_error(matched));
        }
        Ok(body)
    }
}

fn effective_limit(limit: i64) -> i64 {
    if (1..=MAX_RESULTS_LIMIT).contains(&limit) {
        limit
    } else {
        DEFAULT_RESULTS_LIMIT
    }
}

fn normalize_base_url(raw: String) -> ApiResult<Url> {
    let mut url = Url::parse(&raw).map_err(|err| {
        Error::new(ErrorKind::Config)
            .with_message("invalid base url")
            .with_source(err)
    })?;
    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(
            Error::new(ErrorKind::Config).with_message("base url must use http or https scheme")
        );
    }
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| Error::new(ErrorKind::Config).with_message("base url cannot be a base"))?;
        segments.pop_if_empty();
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

fn build_url(base_url: &Url, path: &str) -> ApiResult<Url> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| Error::new(ErrorKind::Config).with_message("base url cannot be a base"))?
        .push(path);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::{
        DEFAULT_BASE_URL, PasteClient, build_url, effective_limit, normalize_base_url,
    };
    use crate::core::error::ErrorKind;

    #[test]
    fn effective_limit_resets_out_of_range_values() {
        assert_eq!(effective_limit(0), 50);
        assert_eq!(effective_limit(-7), 50);
        assert_eq!(effective_limit(1001), 50);
        assert_eq!(effective_limit(5000), 50);
    }

    #[test]
    fn effective_limit_passes_in_range_values() {
        assert_eq!(effective_limit(1), 1);
        assert_eq!(effective_limit(50), 50);
        assert_eq!(effective_limit(999), 999);
        assert_eq!(effective_limit(1000), 1000);
    }

    #[test]
    fn normalize_base_url_keeps_api_path() {
        let url = normalize_base_url(DEFAULT_BASE_URL.to_string()).expect("url");
        assert_eq!(url.as_str(), "https://pastebiner.com/api");
    }

    #[test]
    fn normalize_base_url_drops_trailing_slash_and_query() {
        let url = normalize_base_url("http://localhost:8080/api/?x=1".to_string()).expect("url");
        assert_eq!(url.as_str(), "http://localhost:8080/api");
    }

    #[test]
    fn normalize_base_url_rejects_other_schemes() {
        let err = normalize_base_url("ftp://pastebiner.com/api".to_string()).expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn build_url_appends_endpoint_segment() {
        let base = normalize_base_url(DEFAULT_BASE_URL.to_string()).expect("url");
        let url = build_url(&base, "api_post.php").expect("url");
        assert_eq!(url.as_str(), "https://pastebiner.com/api/api_post.php");
    }

    #[test]
    fn empty_dev_key_is_a_config_error() {
        let err = PasteClient::new("").expect_err("err");
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn fresh_client_has_no_session_key() {
        let client = PasteClient::new("dev-key").expect("client");
        assert_eq!(client.user_key(), None);
    }

    #[test]
    fn set_user_key_is_visible_through_getter() {
        let mut client = PasteClient::new("dev-key").expect("client");
        client.set_user_key("session");
        assert_eq!(client.user_key(), Some("session"));
    }
}
