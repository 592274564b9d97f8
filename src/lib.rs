//! # Tasklet Scheduler — Controle de Inferência sob AIKR
//!
//! Núcleo de controle de inferência de um raciocinador não-axiomático (NARS).
//! Sob a **Suposição de Conhecimento e Recursos Insuficientes** (AIKR), o
//! sistema precisa escolher continuamente, de uma população crescente de
//! crenças e tasks carimbadas no tempo, um conjunto de trabalho limitado
//! para combinar — sem tentar todos os pares.
//!
//! ## Arquitetura
//!
//! ```text
//! core/        modelo de dados consumido (Term, Sentence, Stamp, Task, Clock)
//! derivation   contrato do derivador externo (Deriver, RuleTemplate)
//! scheduler/   tasklets, populações, amostragem, elegibilidade, ranking, ciclo
//! observer     eventos diagnósticos (EventSink)
//! config       política de escalonamento (SchedulerConfig)
//! error        violações de invariante (SchedulerError)
//! ```
//!
//! O procedimento lógico que de fato deriva sentenças, a memória global do
//! raciocinador e o driver do ciclo ficam **fora** deste crate.

/// Módulo `config` — política de escalonamento e parâmetros do raciocinador.
pub mod config;

/// Módulo `core` — termos, sentenças, stamps, tasks e tempo.
pub mod core;

/// Módulo `derivation` — contrato do derivador temporal.
pub mod derivation;

/// Módulo `error` — violações de invariante.
pub mod error;

/// Módulo `observer` — eventos diagnósticos estruturados.
pub mod observer;

/// Módulo `scheduler` — o escalonador de pares.
pub mod scheduler;

pub use config::{ConfigError, ReasonerParameters, SchedulerConfig};
pub use derivation::{Deriver, RuleTemplate};
pub use error::SchedulerError;
pub use observer::{EventSink, NoopSink, RecordingSink, SchedulerEvent, TracingSink};
pub use scheduler::{AddedToMemory, CycleReport, TaskletScheduler};
