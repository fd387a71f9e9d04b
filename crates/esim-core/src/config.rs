//! Storefront configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transport::{MailtoTransport, OrderTransport, QueryStringTransport, TransportError};

/// Default order-processing endpoint.
pub const DEFAULT_ORDER_ENDPOINT: &str = "http://localhost:8000/order-process";

/// How orders are handed off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    /// Redirect to `order_endpoint` with query parameters.
    #[default]
    Query,
    /// Open a mail to `mailto_recipient`.
    Mailto,
}

/// Settings for one storefront session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Prefix applied to prices in the result table.
    pub currency_symbol: String,
    pub order_endpoint: String,
    pub transport: TransportKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailto_recipient: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            order_endpoint: DEFAULT_ORDER_ENDPOINT.to_string(),
            transport: TransportKind::default(),
            mailto_recipient: None,
        }
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("mailto transport needs a mailto_recipient")]
    MissingRecipient,
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl StorefrontConfig {
    /// Reads a JSON config file; absent keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    /// Builds the configured order transport.
    pub fn build_transport(&self) -> Result<Box<dyn OrderTransport>, ConfigError> {
        match self.transport {
            TransportKind::Query => Ok(Box::new(QueryStringTransport::new(
                self.order_endpoint.clone(),
            )?)),
            TransportKind::Mailto => {
                let recipient = self
                    .mailto_recipient
                    .as_ref()
                    .ok_or(ConfigError::MissingRecipient)?;
                Ok(Box::new(MailtoTransport::new(recipient.clone())?))
            }
        }
    }
}
