//! # Sentence e Task — Unidades de Conteúdo do Raciocinador
//!
//! Um [`Sentence`] é um termo com pontuação, grau de verdade opcional e
//! [`Stamp`]. Um [`Task`] envolve uma sentença com prioridade e a
//! **proveniência** — se veio de fora (input) ou foi derivada internamente.
//!
//! A proveniência é central para o escalonador: só eventos genuinamente
//! observados podem ancorar uma nova indução temporal.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::stamp::{Occurrence, Stamp};
use super::term::Term;
use super::TruthValue;

/// Tipo de sentença, identificado pela pontuação Narsese.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Punctuation {
    /// `.` — um fato (crença).
    Judgment,
    /// `!` — um resultado desejado.
    Goal,
    /// `?` — pergunta sobre verdade.
    Question,
    /// `@` — pergunta sobre desejo.
    Quest,
}

impl Punctuation {
    pub fn symbol(&self) -> char {
        match self {
            Punctuation::Judgment => '.',
            Punctuation::Goal => '!',
            Punctuation::Question => '?',
            Punctuation::Quest => '@',
        }
    }
}

/// Sentença Narsese.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Conteúdo lógico.
    pub term: Term,
    /// Julgamento, meta, pergunta ou quest.
    pub punctuation: Punctuation,
    /// Grau de verdade — ausente em perguntas.
    pub truth: Option<TruthValue>,
    /// Ocorrência + base evidencial.
    pub stamp: Stamp,
}

impl Sentence {
    /// Cria um julgamento (`.`).
    pub fn judgment(term: Term, truth: TruthValue, stamp: Stamp) -> Self {
        Self {
            term,
            punctuation: Punctuation::Judgment,
            truth: Some(truth),
            stamp,
        }
    }

    /// Cria uma meta (`!`).
    pub fn goal(term: Term, truth: TruthValue, stamp: Stamp) -> Self {
        Self {
            term,
            punctuation: Punctuation::Goal,
            truth: Some(truth),
            stamp,
        }
    }

    /// Cria uma pergunta (`?`).
    pub fn question(term: Term, stamp: Stamp) -> Self {
        Self {
            term,
            punctuation: Punctuation::Question,
            truth: None,
            stamp,
        }
    }

    pub fn is_eternal(&self) -> bool {
        self.stamp.is_eternal()
    }

    pub fn occurrence_time(&self) -> Option<i64> {
        self.stamp.occurrence.time()
    }

    /// `true` se a sentença é um evento pontual: não eterna **e** com termo
    /// em forma de relação de evento.
    pub fn is_event(&self) -> bool {
        !self.is_eternal() && self.term.is_event_shaped()
    }
}

/// Formatação `<a --> b>. {e1} :|: 10 ⟨1.00, 0.90⟩`.
impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {}", self.term, self.punctuation.symbol(), self.stamp)?;
        if let Some(truth) = &self.truth {
            write!(f, " {}", truth)?;
        }
        Ok(())
    }
}

/// Origem de um [`Task`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    /// Entrou no raciocinador vindo de fora (observação, usuário).
    Input,
    /// Produzido por inferência.
    Derived,
}

/// Task do raciocinador — sentença + orçamento + proveniência.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub sentence: Sentence,
    /// Prioridade do orçamento, em [0, 1].
    pub priority: f64,
    pub provenance: Provenance,
}

impl Task {
    /// Task de input com prioridade máxima.
    pub fn input(sentence: Sentence) -> Self {
        Self {
            sentence,
            priority: 1.0,
            provenance: Provenance::Input,
        }
    }

    /// Task derivada com a prioridade dada.
    pub fn derived(sentence: Sentence, priority: f64) -> Self {
        Self {
            sentence,
            priority,
            provenance: Provenance::Derived,
        }
    }

    pub fn is_input(&self) -> bool {
        self.provenance == Provenance::Input
    }
}
