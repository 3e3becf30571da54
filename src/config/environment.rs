// Start of file: /src/config/environment.rs

// * Default status codes, messages and omission policy applied by the
// * builder whenever a caller leaves those fields out.

use std::{borrow::Cow, collections::HashMap};
// * anyhow for convenient error handling
use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::models::response_record::OmissionPolicy;

// ! Built-in defaults (used if variables aren't set):
pub const DEFAULT_SUCCESS_STATUS: u16 = 200;
pub const DEFAULT_FAILURE_STATUS: u16 = 400;
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Request was successful";
pub const DEFAULT_FAILURE_MESSAGE: &str = "An error occurred";

// * Defaults derived solely from the `success` flag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseDefaults {
    pub success_status: u16,
    pub failure_status: u16,
    pub success_message: Cow<'static, str>,
    pub failure_message: Cow<'static, str>,
    pub policy: OmissionPolicy,
}

impl Default for ResponseDefaults {
    fn default() -> Self {
        Self {
            success_status: DEFAULT_SUCCESS_STATUS,
            failure_status: DEFAULT_FAILURE_STATUS,
            success_message: Cow::Borrowed(DEFAULT_SUCCESS_MESSAGE),
            failure_message: Cow::Borrowed(DEFAULT_FAILURE_MESSAGE),
            policy: OmissionPolicy::Omit,
        }
    }
}

impl ResponseDefaults {
    pub fn status_for(&self, success: bool) -> u16 {
        if success {
            self.success_status
        } else {
            self.failure_status
        }
    }

    pub fn message_for(&self, success: bool) -> &str {
        if success {
            &self.success_message
        } else {
            &self.failure_message
        }
    }

    // * Reads the process environment, plus .env outside production.
    pub fn from_env() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * Collect all environment vars from the system and .env
        let vars: HashMap<String, String> = std::env::vars()
            .chain(dotenv::vars())
            .collect();

        Self::from_vars(&vars)
    }

    // * Builds defaults from an already collected set of variables.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        // * A small helper closure to fetch a variable by key
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        let config: ResponseDefaults = Self {
            success_status: get_var("RESPONSE_SUCCESS_STATUS")
                .map(|s| parse_status(s).context("Invalid RESPONSE_SUCCESS_STATUS"))
                .transpose()?
                .unwrap_or(DEFAULT_SUCCESS_STATUS),

            failure_status: get_var("RESPONSE_FAILURE_STATUS")
                .map(|s| parse_status(s).context("Invalid RESPONSE_FAILURE_STATUS"))
                .transpose()?
                .unwrap_or(DEFAULT_FAILURE_STATUS),

            success_message: get_var("RESPONSE_SUCCESS_MESSAGE")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_SUCCESS_MESSAGE)),

            failure_message: get_var("RESPONSE_FAILURE_MESSAGE")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_FAILURE_MESSAGE)),

            policy: get_var("RESPONSE_OMISSION_POLICY")
                .map(|s| parse_policy(s).context("Invalid RESPONSE_OMISSION_POLICY"))
                .transpose()?
                .unwrap_or_else(|| {
                    warn!("Missing RESPONSE_OMISSION_POLICY, defaulting to 'omit'");
                    OmissionPolicy::Omit
                }),
        };

        if cfg!(debug_assertions) {
            tracing::debug!("Loaded response defaults: {:#?}", config);
        }

        Ok(config)
    }
}

fn parse_status(raw: &str) -> Result<u16> {
    let code: u16 = raw.trim().parse()?;

    if !(100..=599).contains(&code) {
        bail!("status code {code} is outside 100..=599");
    }

    Ok(code)
}

fn parse_policy(raw: &str) -> Result<OmissionPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "omit" => Ok(OmissionPolicy::Omit),
        "include" => Ok(OmissionPolicy::Include),
        other => bail!("unknown omission policy '{other}', expected 'omit' or 'include'"),
    }
}


// End of file: /src/config/environment.rs
