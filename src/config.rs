//! # Configuração do Escalonador
//!
//! [`SchedulerConfig`] reúne as constantes de política de escalonamento.
//! Os valores default reproduzem exatamente a política histórica:
//!
//! | Campo | Default | Significado |
//! |-------|---------|-------------|
//! | `capacity` | 20 000 | Tamanho máximo de cada população ao fim do ciclo |
//! | `single_event_rounds` | 100 | Rodadas de amostragem evento × evento |
//! | `cross_rounds` | 25 | Rodadas de amostragem composto × evento |
//! | `seed` | 43 | Semente do gerador pseudo-aleatório |
//!
//! As rodadas **não** escalam com o tamanho das populações — populações
//! maiores recebem cobertura proporcionalmente mais esparsa (AIKR).
//!
//! ## Arquivo JSON
//!
//! ```json
//! { "capacity": 5000, "seed": 7, "reasoner": { "duration": 5 } }
//! ```
//!
//! Campos ausentes assumem o default (`#[serde(default)]`).

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capacidade histórica de cada população.
pub const DEFAULT_CAPACITY: usize = 20_000;
/// Rodadas da fase evento × evento.
pub const DEFAULT_SINGLE_EVENT_ROUNDS: usize = 100;
/// Rodadas da fase composto × evento.
pub const DEFAULT_CROSS_ROUNDS: usize = 25;
/// Semente fixa — torna a sequência de pares (e as derivações) reproduzível.
pub const DEFAULT_SEED: u64 = 43;
/// Maior `duration` aceita. Derivadores multiplicam a duração por pequenos
/// fatores; o limite mantém essas contas longe de overflow em `i64`.
pub const MAX_DURATION: i64 = 1_000_000_000;

/// Erros de validação da configuração.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Capacidade inválida: {0}. Deve ser pelo menos 1")]
    InvalidCapacity(usize),

    #[error("Nenhuma rodada de amostragem configurada (single_event_rounds e cross_rounds são 0)")]
    NoSamplingRounds,

    #[error("Duração inválida: {0}. Deve estar entre 1 e {max}", max = MAX_DURATION)]
    InvalidDuration(i64),
}

/// Parâmetros do raciocinador repassados **opacamente** ao derivador.
///
/// O escalonador nunca os interpreta.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReasonerParameters {
    /// Janela (em unidades de tempo) em que dois eventos contam como simultâneos.
    pub duration: i64,
    /// Horizonte evidencial `k` usado pelas funções de verdade.
    pub evidential_horizon: f64,
}

impl Default for ReasonerParameters {
    fn default() -> Self {
        Self {
            duration: 5,
            evidential_horizon: 1.0,
        }
    }
}

/// Política de escalonamento.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub capacity: usize,
    pub single_event_rounds: usize,
    pub cross_rounds: usize,
    pub seed: u64,
    pub reasoner: ReasonerParameters,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            single_event_rounds: DEFAULT_SINGLE_EVENT_ROUNDS,
            cross_rounds: DEFAULT_CROSS_ROUNDS,
            seed: DEFAULT_SEED,
            reasoner: ReasonerParameters::default(),
        }
    }
}

impl SchedulerConfig {
    /// Verifica a consistência da configuração.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.capacity));
        }
        if self.single_event_rounds == 0 && self.cross_rounds == 0 {
            return Err(ConfigError::NoSamplingRounds);
        }
        if !(1..=MAX_DURATION).contains(&self.reasoner.duration) {
            return Err(ConfigError::InvalidDuration(self.reasoner.duration));
        }
        Ok(())
    }

    /// Carrega a configuração de um arquivo JSON e a valida.
    ///
    /// # Erros
    ///
    /// Retorna erro se o arquivo não puder ser lido, se o JSON for inválido
    /// ou se a validação falhar.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Falha ao ler {}", path.display()))?;
        let config: SchedulerConfig = serde_json::from_str(&json)
            .with_context(|| format!("Falha ao desserializar {}", path.display()))?;
        config.validate()?;
        tracing::info!(
            path = %path.display(),
            capacity = config.capacity,
            seed = config.seed,
            "Configuração carregada"
        );
        Ok(config)
    }
}
