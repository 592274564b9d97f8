//! # Term — Conteúdo Lógico de uma Sentença
//!
//! Representação mínima de termos Narsese — apenas o necessário para o
//! escalonador **classificar** sentenças e para os derivadores construírem
//! conclusões temporais.
//!
//! ## Formas de Termo
//!
//! | Variante | Narsese | Evento? |
//! |----------|---------|---------|
//! | `Atom` | `chuva` | não |
//! | `Inheritance` | `<S --> P>` | **sim** |
//! | `Similarity` | `<S <-> P>` | **sim** |
//! | `Implication` | `<S ==> P>` | não |
//! | `PredictiveImplication` | `<S =/> P>` | não |
//! | `Equivalence` | `<S <=> P>` | não |
//! | `Conjunction` | `(&&, A, B)` | não |
//! | `Sequence` | `(&/, A, B)` | não |
//!
//! Só as relações binárias de herança e similaridade são tratadas como
//! eventos pontuais. Sequências e implicações são **compostos**.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Termo Narsese.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// Termo atômico — um nome.
    Atom(String),
    /// `<S --> P>` — "S é um P".
    Inheritance(Box<Term>, Box<Term>),
    /// `<S <-> P>` — "S é semelhante a P".
    Similarity(Box<Term>, Box<Term>),
    /// `<S ==> P>` — implicação atemporal.
    Implication(Box<Term>, Box<Term>),
    /// `<S =/> P>` — "S é seguido de P".
    PredictiveImplication(Box<Term>, Box<Term>),
    /// `<S <=> P>` — equivalência.
    Equivalence(Box<Term>, Box<Term>),
    /// `(&&, ...)` — conjunção sem ordem.
    Conjunction(Vec<Term>),
    /// `(&/, ...)` — conjunção sequencial (ordenada no tempo).
    Sequence(Vec<Term>),
}

impl Term {
    /// Atalho para [`Term::Atom`].
    pub fn atom(name: impl Into<String>) -> Self {
        Term::Atom(name.into())
    }

    /// Atalho para `<subject --> predicate>`.
    pub fn inheritance(subject: Term, predicate: Term) -> Self {
        Term::Inheritance(Box::new(subject), Box::new(predicate))
    }

    /// Atalho para `<subject <-> predicate>`.
    pub fn similarity(subject: Term, predicate: Term) -> Self {
        Term::Similarity(Box::new(subject), Box::new(predicate))
    }

    /// Atalho para `<subject =/> predicate>`.
    pub fn predictive_implication(subject: Term, predicate: Term) -> Self {
        Term::PredictiveImplication(Box::new(subject), Box::new(predicate))
    }

    /// `true` se o termo tem uma das formas relacionais tratadas como evento.
    ///
    /// Não olha para o tempo — uma sentença eterna com termo de herança
    /// **não** é evento (ver [`Sentence::is_event`](super::Sentence::is_event)).
    pub fn is_event_shaped(&self) -> bool {
        matches!(self, Term::Inheritance(..) | Term::Similarity(..))
    }

    /// Símbolo Narsese do conector.
    fn copula(&self) -> &'static str {
        match self {
            Term::Atom(_) => "",
            Term::Inheritance(..) => "-->",
            Term::Similarity(..) => "<->",
            Term::Implication(..) => "==>",
            Term::PredictiveImplication(..) => "=/>",
            Term::Equivalence(..) => "<=>",
            Term::Conjunction(_) => "&&",
            Term::Sequence(_) => "&/",
        }
    }
}

/// Formatação Narsese: `<a --> b>`, `(&/, a, b)`.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(name) => write!(f, "{}", name),
            Term::Inheritance(s, p)
            | Term::Similarity(s, p)
            | Term::Implication(s, p)
            | Term::PredictiveImplication(s, p)
            | Term::Equivalence(s, p) => write!(f, "<{} {} {}>", s, self.copula(), p),
            Term::Conjunction(parts) | Term::Sequence(parts) => {
                write!(f, "({}", self.copula())?;
                for part in parts {
                    write!(f, ", {}", part)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Só herança e similaridade são formas de evento
    #[test]
    fn test_event_shapes() {
        let a = Term::atom("a");
        let b = Term::atom("b");
        assert!(Term::inheritance(a.clone(), b.clone()).is_event_shaped());
        assert!(Term::similarity(a.clone(), b.clone()).is_event_shaped());
        assert!(!Term::predictive_implication(a.clone(), b.clone()).is_event_shaped());
        assert!(!Term::Sequence(vec![a.clone(), b]).is_event_shaped());
        assert!(!a.is_event_shaped());
    }

    #[test]
    fn test_display_narsese() {
        let seq = Term::Sequence(vec![
            Term::inheritance(Term::atom("a"), Term::atom("light")),
            Term::similarity(Term::atom("b"), Term::atom("c")),
        ]);
        assert_eq!(seq.to_string(), "(&/, <a --> light>, <b <-> c>)");
    }
}
