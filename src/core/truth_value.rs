//! # TruthValue — Grau de Verdade NARS
//!
//! Grau de verdade carregado por julgamentos e metas. O escalonador não faz
//! aritmética de verdade (revisão, dedução etc. pertencem ao derivador
//! externo) — ele só **lê** a expectativa para calcular a utilidade de cada
//! tasklet.
//!
//! - **Frequency (f)**: `f = w⁺ / (w⁺ + w⁻)` — proporção de evidência positiva
//! - **Confidence (c)**: `c = (w⁺ + w⁻) / (w⁺ + w⁻ + k)` — estabilidade
//! - **Expectation (e)**: `e = c × (f − 0.5) + 0.5`
//!
//! Internamente armazena **evidência** (w⁺, w⁻), como em NARS.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Parâmetro de horizonte evidencial (default = 1.0 em NARS).
const EVIDENTIAL_HORIZON: f64 = 1.0;

/// Grau de verdade baseado em NARS.
///
/// O formato de exibição é `⟨frequency, confidence⟩`, por exemplo: `⟨0.80, 0.45⟩`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TruthValue {
    /// Evidência positiva (w⁺).
    positive_evidence: f64,
    /// Evidência negativa (w⁻).
    negative_evidence: f64,
}

impl TruthValue {
    /// Cria um TruthValue a partir de **frequency** e **confidence**.
    ///
    /// Os valores são limitados: `frequency` em [0, 1] e `confidence`
    /// em [0, 0.9999] (nunca 1.0 em NARS).
    pub fn new(frequency: f64, confidence: f64) -> Self {
        let frequency = frequency.clamp(0.0, 1.0);
        let confidence = confidence.clamp(0.0, 0.9999);

        let w_total = EVIDENTIAL_HORIZON * confidence / (1.0 - confidence);
        Self {
            positive_evidence: w_total * frequency,
            negative_evidence: w_total * (1.0 - frequency),
        }
    }

    /// Truth value de **observação direta** — confiança 0.9.
    ///
    /// Usado para eventos de entrada (sensoriais) no loop de perfil e nos testes.
    pub fn observed(positive: bool) -> Self {
        if positive {
            Self::new(1.0, 0.9)
        } else {
            Self::new(0.0, 0.9)
        }
    }

    /// Retorna a **frequency**. Sem evidência, retorna 0.5 (neutro).
    pub fn frequency(&self) -> f64 {
        let total = self.positive_evidence + self.negative_evidence;
        if total == 0.0 {
            0.5
        } else {
            self.positive_evidence / total
        }
    }

    /// Retorna a **confidence** — nunca atinge 1.0.
    pub fn confidence(&self) -> f64 {
        let total = self.positive_evidence + self.negative_evidence;
        total / (total + EVIDENTIAL_HORIZON)
    }

    /// Retorna a **expectation** — valor esperado combinando frequency e confidence.
    ///
    /// É o componente de relevância da utilidade de um tasklet
    /// (ver [`Tasklet::recompute_utility`](crate::scheduler::Tasklet::recompute_utility)).
    pub fn expectation(&self) -> f64 {
        self.confidence() * (self.frequency() - 0.5) + 0.5
    }
}

/// Formatação legível no formato `⟨frequency, confidence⟩`.
impl fmt::Display for TruthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "⟨{:.2}, {:.2}⟩", self.frequency(), self.confidence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verifica que (f, c) sobrevivem à conversão para evidência
    #[test]
    fn test_new_roundtrips_frequency_and_confidence() {
        let tv = TruthValue::new(0.9, 0.8);
        assert!((tv.frequency() - 0.9).abs() < 1e-9);
        assert!((tv.confidence() - 0.8).abs() < 1e-9);
    }

    /// Observação positiva tem expectativa alta, negativa tem expectativa baixa
    #[test]
    fn test_observed_expectation() {
        let pos = TruthValue::observed(true);
        let neg = TruthValue::observed(false);
        assert!((pos.expectation() - 0.95).abs() < 1e-9);
        assert!((neg.expectation() - 0.05).abs() < 1e-9);
    }

    /// Confiança 1.0 é limitada — a expectativa continua finita
    #[test]
    fn test_confidence_is_clamped() {
        let tv = TruthValue::new(1.0, 1.0);
        assert!(tv.confidence() < 1.0);
        assert!(tv.expectation().is_finite());
    }

    #[test]
    fn test_display() {
        assert_eq!(TruthValue::new(0.8, 0.5).to_string(), "⟨0.80, 0.50⟩");
    }
}
