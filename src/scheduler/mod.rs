//! # Módulo Scheduler — Escalonamento de Inferência em Pares
//!
//! Sob AIKR o sistema não pode tentar todos os pares de crenças. Este módulo
//! mantém um **conjunto de trabalho limitado** e, a cada ciclo, escolhe
//! alguns pares ao acaso para combinar por indução temporal.
//!
//! ## Componentes
//!
//! | Módulo | Responsabilidade |
//! |--------|-----------------|
//! | [`tasklet`] | Unidade de escalonamento (task ou crença) + utilidade |
//! | [`population`] | As duas populações: eventos e compostos |
//! | [`sampling`] | Sorteio de pares com deduplicação por fase |
//! | [`combine`] | Regras de elegibilidade + três tentativas de derivação |
//! | [`ranking`] | Reavaliação, ordenação e corte por capacidade |
//! | [`cycle`] | [`TaskletScheduler`] — o ciclo completo |
//!
//! ## Fluxo
//!
//! ```text
//! admit_task ──► classifica ──► events | composites
//!                                   │
//! run_cycle ──► 100 × sorteio (events, events) ──► combine ──► admit derivadas
//!           ──►  25 × sorteio (composites, events) ─┘
//!           ──► recompute_utilities(ambas) ──► sort_and_truncate(ambas)
//! ```

/// Sub-módulo com [`Tasklet`] e [`TaskletPayload`].
pub mod tasklet;

/// Sub-módulo com [`Population`] e [`PopulationKind`].
pub mod population;

/// Sub-módulo com o sorteador [`PairSampler`](sampling::PairSampler).
pub mod sampling;

/// Sub-módulo com as regras de elegibilidade.
pub mod combine;

/// Sub-módulo com [`rank_and_evict`](ranking::rank_and_evict).
pub mod ranking;

/// Sub-módulo com o [`TaskletScheduler`].
pub mod cycle;

pub use combine::{Combination, OrderedPremises, Rejection};
pub use cycle::{AddedToMemory, CycleReport, PhaseReport, TaskletScheduler};
pub use population::{Population, PopulationKind};
pub use sampling::{PairSampler, SampleOutcome, SampledPair};
pub use tasklet::{Tasklet, TaskletPayload};
