//! # Erros do Escalonador
//!
//! Rejeições de pares, amostras duplicadas, populações vazias e derivações
//! que não disparam **não são erros** — são o resultado normal da maioria
//! das rodadas. [`SchedulerError`] cobre apenas violações de contrato por
//! um colaborador (bug a montante), que abortam o ciclo.

use thiserror::Error;

use crate::scheduler::PopulationKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedulerError {
    /// A utilidade recalculada não é um número finito — o ordenamento
    /// ficaria indefinido. Indica grau de verdade ou prioridade corrompidos.
    #[error("Utilidade não finita ({utility}) na população {population:?}, posição {index}: {sentence}")]
    NonFiniteUtility {
        population: PopulationKind,
        index: usize,
        utility: f64,
        sentence: String,
    },

    /// O sorteador produziu um índice fora da população — sorteador e
    /// população discordam sobre o tamanho.
    #[error("Índice sorteado {index} fora da população {population:?} (tamanho {len})")]
    SampleOutOfRange {
        population: PopulationKind,
        index: usize,
        len: usize,
    },
}
