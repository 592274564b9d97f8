//! # Módulo Core — Modelo de Dados do Raciocinador
//!
//! Tipos que o escalonador **consome** mas não controla: são os colaboradores
//! externos (sentenças, stamps, tempo). O escalonador apenas consulta estes
//! tipos — nunca faz aritmética de verdade nem constrói termos por conta própria.
//!
//! - [`TruthValue`] — grau de verdade NARS (só a expectativa é lida)
//! - [`Term`] — conteúdo lógico; sabe se tem "forma de evento"
//! - [`Stamp`] / [`Occurrence`] / [`EvidenceId`] — tempo e base evidencial
//! - [`Sentence`] / [`Punctuation`] — sentença Narsese
//! - [`Task`] / [`Provenance`] — sentença + orçamento + origem (input ou derivada)
//! - [`Clock`] — fonte de tempo lógico
//!
//! ## Exemplo
//!
//! ```rust
//! use tasklet_scheduler::core::{EvidenceId, Sentence, Stamp, Term, TruthValue};
//!
//! let s1 = Sentence::judgment(
//!     Term::inheritance(Term::atom("light"), Term::atom("on")),
//!     TruthValue::observed(true),
//!     Stamp::event(10, [EvidenceId(1)]),
//! );
//! assert!(s1.is_event());
//! ```

/// Sub-módulo com a implementação de [`TruthValue`].
pub mod truth_value;

/// Sub-módulo com o termo Narsese [`Term`].
pub mod term;

/// Sub-módulo com [`Stamp`], [`Occurrence`] e [`EvidenceId`].
pub mod stamp;

/// Sub-módulo com [`Sentence`], [`Punctuation`], [`Task`] e [`Provenance`].
pub mod sentence;

/// Sub-módulo com a fonte de tempo [`Clock`].
pub mod clock;

// Re-exports para conveniência — permite usar `crate::core::Sentence` diretamente.
pub use clock::{Clock, FixedClock, SteppedClock};
pub use sentence::{Provenance, Punctuation, Sentence, Task};
pub use stamp::{EvidenceId, Occurrence, Stamp};
pub use term::Term;
pub use truth_value::TruthValue;
