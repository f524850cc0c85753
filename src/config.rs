//! promo.yaml schema
//!
//! Texts the relay sends back besides rendered offers.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Relay configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Reply to the `/start` command
    pub welcome: String,
    /// Reply when a message holds no usable offer
    pub no_offer_notice: String,
    /// Reply when processing a message failed unexpectedly
    pub failure_notice: String,
    /// Characters of each incoming message written to the log
    pub log_preview_chars: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            welcome: DEFAULT_WELCOME.to_string(),
            no_offer_notice: "❌ Não consegui identificar produtos válidos na mensagem.".to_string(),
            failure_notice: "❌ Ocorreu um erro ao processar a mensagem.".to_string(),
            log_preview_chars: 100,
        }
    }
}

const DEFAULT_WELCOME: &str = "🤖 **Bot Preguiça - ATIVADO!**

Estou pronto para formatar suas promoções automaticamente.

📋 **Como usar:**
- Me envie mensagens com promoções
- Eu extraio: descrição, preço, cupons e links
- Retorno tudo formatado bonitinho

🎯 **Funcionalidades:**
- ✅ Extrai dados de múltiplos produtos
- ✅ Identifica cupons complexos
- ✅ Formata links automaticamente
- ✅ Suporte a várias plataformas

**Envie uma promoção para testar!**";

impl RelayConfig {
    /// Load from a YAML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
