//! # Contrato de Derivação
//!
//! O procedimento lógico que produz novas sentenças a partir de duas
//! premissas é **externo** ao escalonador. O escalonador apenas invoca um
//! [`Deriver`] com:
//!
//! - um [`RuleTemplate`] (o programa de derivação + os papéis das premissas)
//! - duas premissas **ordenadas**
//! - a fonte de tempo e os parâmetros do raciocinador
//!
//! Cada invocação retorna **zero ou uma** sentença. `None` significa que a
//! regra não disparou — o resultado mais comum.
//!
//! ## Tentativas por Par Elegível
//!
//! ```text
//! a = premissa anterior, b = premissa posterior
//!
//! 1. SequenceWithEvent(a, b)   papéis ("S", "E")
//! 2. SequenceWithEvent(b, a)   papéis ("S", "E")
//! 3. EventWithEvent(a, b)      papéis ("E", "E")
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ReasonerParameters;
use crate::core::{Clock, Sentence};

/// Programa de derivação temporal a ser executado sobre um par de premissas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleTemplate {
    /// Combina uma sequência (ou evento tratado como sequência) com um evento.
    SequenceWithEvent,
    /// Combina dois eventos.
    EventWithEvent,
}

impl RuleTemplate {
    /// Nomes dos papéis das duas premissas — `"S"` (sequência) ou `"E"` (evento).
    pub fn roles(&self) -> (&'static str, &'static str) {
        match self {
            RuleTemplate::SequenceWithEvent => ("S", "E"),
            RuleTemplate::EventWithEvent => ("E", "E"),
        }
    }
}

impl fmt::Display for RuleTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = self.roles();
        write!(f, "{}{}", first, second)
    }
}

/// Dispatcher de derivação temporal.
///
/// Do ponto de vista do escalonador é uma função pura: sem estado mutável
/// compartilhado e determinística para entradas idênticas (assumido, não
/// verificado). O determinismo do escalonador depende disso.
pub trait Deriver {
    /// Aplica `rule` sobre `(first, second)`, nessa ordem.
    fn derive_temporal(
        &self,
        rule: RuleTemplate,
        first: &Sentence,
        second: &Sentence,
        clock: &dyn Clock,
        parameters: &ReasonerParameters,
    ) -> Option<Sentence>;
}

/// Closures também servem como derivador — prático em testes e protótipos.
impl<F> Deriver for F
where
    F: Fn(RuleTemplate, &Sentence, &Sentence) -> Option<Sentence>,
{
    fn derive_temporal(
        &self,
        rule: RuleTemplate,
        first: &Sentence,
        second: &Sentence,
        _clock: &dyn Clock,
        _parameters: &ReasonerParameters,
    ) -> Option<Sentence> {
        self(rule, first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles() {
        assert_eq!(RuleTemplate::SequenceWithEvent.roles(), ("S", "E"));
        assert_eq!(RuleTemplate::EventWithEvent.roles(), ("E", "E"));
        assert_eq!(RuleTemplate::EventWithEvent.to_string(), "EE");
    }
}
