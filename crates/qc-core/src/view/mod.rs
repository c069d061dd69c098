//! Result cards shown on the result screen.
//!
//! A card is a render-ready description; the rendering layer decides how it
//! looks but never what it says.

use serde::{Deserialize, Serialize};

use crate::validation::{Outcome, ValidationResult, DEFAULT_INVALID_MESSAGE};

pub const TITLE_VALIDATING: &str = "Validando...";
pub const TITLE_WELCOME: &str = "¡Bienvenido/a!";
pub const TITLE_ALREADY_USED: &str = "QR ya utilizado";
pub const TITLE_INVALID: &str = "QR inválido";
pub const TITLE_CONNECTION_ERROR: &str = "Error de conexión";
pub const TITLE_NOT_CONFIGURED: &str = "Falta configuración";

pub const MESSAGE_NOT_CONFIGURED: &str = "Configura la URL de la API antes de escanear";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultCard {
    /// Interim card while the request is in flight.
    Validating,
    Welcome {
        guest_name: Option<String>,
        message: Option<String>,
    },
    AlreadyUsed {
        guest_name: Option<String>,
        scanned_at: Option<String>,
    },
    Invalid {
        message: String,
    },
    ConnectionError {
        detail: String,
    },
    NotConfigured,
}

impl ResultCard {
    /// Build the final card for a classified response.
    pub fn from_result(outcome: Outcome, result: &ValidationResult) -> Self {
        match outcome {
            Outcome::Valid => Self::Welcome {
                guest_name: result.guest_name.clone(),
                message: result.message.clone(),
            },
            Outcome::Duplicate => Self::AlreadyUsed {
                guest_name: result.guest_name.clone(),
                scanned_at: result.scanned_at.clone(),
            },
            Outcome::Invalid => Self::Invalid {
                message: result
                    .message
                    .clone()
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_INVALID_MESSAGE.to_string()),
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Validating => TITLE_VALIDATING,
            Self::Welcome { .. } => TITLE_WELCOME,
            Self::AlreadyUsed { .. } => TITLE_ALREADY_USED,
            Self::Invalid { .. } => TITLE_INVALID,
            Self::ConnectionError { .. } => TITLE_CONNECTION_ERROR,
            Self::NotConfigured => TITLE_NOT_CONFIGURED,
        }
    }

    /// Body lines under the title, in display order.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Validating => Vec::new(),
            Self::Welcome {
                guest_name,
                message,
            } => guest_name.iter().chain(message.iter()).cloned().collect(),
            Self::AlreadyUsed {
                guest_name,
                scanned_at,
            } => {
                let mut lines: Vec<String> = guest_name.iter().cloned().collect();
                if let Some(at) = scanned_at {
                    lines.push(format!("Escaneado: {at}"));
                }
                lines
            }
            Self::Invalid { message } => vec![message.clone()],
            Self::ConnectionError { detail } => vec![detail.clone()],
            Self::NotConfigured => vec![MESSAGE_NOT_CONFIGURED.to_string()],
        }
    }

    /// Whether the card is the loading placeholder.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Validating)
    }
}
