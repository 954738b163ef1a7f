//! Strongly-typed value objects used by the hub configuration aggregate.
//!
//! These wrappers enforce basic invariants (e.g., bind URLs carrying an
//! explicit port, non-empty usernames) so that once a value reaches the
//! domain layer it can be treated as trusted.
use std::{ops::Deref, str::FromStr};

use rand::{RngExt, distr::Alphanumeric};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
    /// Provided bind url is missing an explicit port.
    #[error("bind url must carry an explicit port")]
    MissingPort,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Provided log level is not part of the recognized enumeration.
    #[error("unknown log level: {0}")]
    UnknownLogLevel(String),
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    Username,
    "Case-sensitive login name. Trimmed but otherwise not normalized."
);

non_empty_string_newtype!(
    ServiceName,
    "Registered service name enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    OauthClientId,
    "OAuth client identifier a service presents during OAuth flows."
);

/// Plugin selector resolved by the host's registry, e.g. `dummy` or a dotted
/// class path. The set of recognized selectors is host-defined; this wrapper
/// only rejects values no registry could accept.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PluginName(String);

impl PluginName {
    /// Constructs a selector ensuring it is non-empty and free of whitespace.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let inner = NonEmptyString::new(value)?;
        if inner.as_str().chars().any(char::is_whitespace) {
            return Err(TypeConstraintError::InvalidValue(
                "plugin selector cannot contain whitespace".to_string(),
            ));
        }
        Ok(Self(inner.into_inner()))
    }

    /// Borrow the selector as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PluginName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for PluginName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// URL the hub binds a listener on. Requires a scheme, a host, and an
/// explicit non-zero port.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BindUrl(String);

impl BindUrl {
    /// Validates URL syntax and extracts the mandatory port.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let url = NonEmptyString::new(value)?;
        if !url.as_str().validate_url() {
            return Err(TypeConstraintError::InvalidUrl);
        }
        let candidate = Self(url.into_inner());
        if candidate.port()? == 0 {
            return Err(TypeConstraintError::InvalidValue(
                "bind port cannot be zero".to_string(),
            ));
        }
        Ok(candidate)
    }

    /// Returns the explicit port carried by the URL.
    pub fn port(&self) -> Result<u16, TypeConstraintError> {
        let authority = self
            .0
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.0);
        let authority = authority.split(['/', '?', '#']).next().unwrap_or(authority);
        let port = authority
            .rsplit_once(':')
            .ok_or(TypeConstraintError::MissingPort)?
            .1;
        port.parse::<u16>()
            .map_err(|_| TypeConstraintError::MissingPort)
    }

    /// Borrow the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for BindUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for BindUrl {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Target endpoint the hub proxies a registered service to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ServiceUrl(String);

impl ServiceUrl {
    /// Ensures a trimmed service URL is non-empty and well-formed.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let url = NonEmptyString::new(value)?;
        if !url.as_str().validate_url() {
            return Err(TypeConstraintError::InvalidUrl);
        }
        Ok(Self(url.into_inner()))
    }

    /// Borrow the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ServiceUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for ServiceUrl {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Number of characters in a generated API token.
const GENERATED_TOKEN_LEN: usize = 32;

/// Bearer secret a service uses to authenticate to the hub's REST API.
///
/// `Debug` output is redacted so the secret never leaks through logs.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ApiToken(String);

impl ApiToken {
    /// Wraps a trimmed, non-empty token.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let inner = NonEmptyString::new(value)?;
        Ok(Self(inner.into_inner()))
    }

    /// Generate a random alphanumeric token.
    pub fn generate() -> Self {
        let token: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(GENERATED_TOKEN_LEN)
            .map(char::from)
            .collect();
        Self(token)
    }

    /// Borrow the secret as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned secret.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(redacted)")
    }
}

impl TryFrom<&str> for ApiToken {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Logging threshold for the host process.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Canonical uppercase spelling the host recognizes.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            other => Err(TypeConstraintError::UnknownLogLevel(other.to_string())),
        }
    }
}
