//! # Stamp — Identidade Temporal e Evidencial
//!
//! Todo [`Sentence`](super::Sentence) carrega um [`Stamp`] com:
//!
//! - **Ocorrência** ([`Occurrence`]) — instante do evento ou marcador eterno
//! - **Base evidencial** — conjunto de [`EvidenceId`]s que justificam a sentença
//!
//! Dois stamps **se sobrepõem** quando compartilham alguma evidência. Combinar
//! premissas sobrepostas produziria justificativa circular (a conclusão
//! "reforçaria" a própria evidência), então o escalonador as rejeita.
//!
//! ```text
//! S1 {e1}      S2 {e2}      → sem sobreposição → pode combinar
//! S1 {e1}      S3 {e1, e2}  → sobrepõe em e1   → rejeitado
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identificador de uma unidade de evidência (tipicamente um input).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EvidenceId(pub u64);

/// Momento em que uma sentença ocorre.
///
/// Como soma de tipos, uma sentença "eterna com tempo de ocorrência"
/// é irrepresentável.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occurrence {
    /// Vale em qualquer instante (conhecimento atemporal).
    Eternal,
    /// Ocorre no instante lógico dado.
    At(i64),
}

impl Occurrence {
    /// Retorna o instante, ou `None` se eterna.
    pub fn time(&self) -> Option<i64> {
        match self {
            Occurrence::Eternal => None,
            Occurrence::At(t) => Some(*t),
        }
    }
}

/// Stamp de uma sentença — ocorrência + base evidencial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamp {
    /// Instante de ocorrência ou marcador eterno.
    pub occurrence: Occurrence,
    /// Evidências que justificam a sentença.
    pub evidential_base: BTreeSet<EvidenceId>,
}

impl Stamp {
    /// Stamp de evento no instante `time`.
    pub fn event(time: i64, evidence: impl IntoIterator<Item = EvidenceId>) -> Self {
        Self {
            occurrence: Occurrence::At(time),
            evidential_base: evidence.into_iter().collect(),
        }
    }

    /// Stamp eterno.
    pub fn eternal(evidence: impl IntoIterator<Item = EvidenceId>) -> Self {
        Self {
            occurrence: Occurrence::Eternal,
            evidential_base: evidence.into_iter().collect(),
        }
    }

    /// União das bases evidenciais de dois stamps, com a ocorrência dada.
    ///
    /// Usado por derivadores para carimbar conclusões.
    pub fn merged(a: &Stamp, b: &Stamp, occurrence: Occurrence) -> Self {
        Self {
            occurrence,
            evidential_base: a
                .evidential_base
                .union(&b.evidential_base)
                .copied()
                .collect(),
        }
    }

    pub fn is_eternal(&self) -> bool {
        self.occurrence == Occurrence::Eternal
    }

    /// `true` se as bases evidenciais se intersectam.
    pub fn overlaps(&self, other: &Stamp) -> bool {
        !self.evidential_base.is_disjoint(&other.evidential_base)
    }
}

/// Formatação `{e1,e2} :|: 20` ou `{e1} eterno`.
impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self
            .evidential_base
            .iter()
            .map(|id| format!("e{}", id.0))
            .collect();
        match self.occurrence {
            Occurrence::Eternal => write!(f, "{{{}}} eterno", ids.join(",")),
            Occurrence::At(t) => write!(f, "{{{}}} :|: {}", ids.join(","), t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bases disjuntas não se sobrepõem; bases com elemento comum sim
    #[test]
    fn test_overlap() {
        let s1 = Stamp::event(10, [EvidenceId(1)]);
        let s2 = Stamp::event(20, [EvidenceId(2)]);
        let s3 = Stamp::event(30, [EvidenceId(1), EvidenceId(2)]);
        assert!(!s1.overlaps(&s2));
        assert!(s1.overlaps(&s3));
        assert!(s3.overlaps(&s2));
    }

    /// Base evidencial vazia nunca sobrepõe nada
    #[test]
    fn test_empty_base_never_overlaps() {
        let empty = Stamp::event(1, []);
        assert!(!empty.overlaps(&empty));
    }

    #[test]
    fn test_merged_unions_bases() {
        let s1 = Stamp::event(10, [EvidenceId(1)]);
        let s2 = Stamp::event(20, [EvidenceId(2)]);
        let m = Stamp::merged(&s1, &s2, Occurrence::At(20));
        assert_eq!(m.evidential_base.len(), 2);
        assert_eq!(m.occurrence.time(), Some(20));
        assert_eq!(m.to_string(), "{e1,e2} :|: 20");
    }
}
