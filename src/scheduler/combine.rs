//! # Elegibilidade e Combinação de Pares
//!
//! Decide se um par sorteado pode ser combinado por **indução temporal** e,
//! se puder, emite as três tentativas de derivação.
//!
//! ## Regras (em ordem)
//!
//! ```text
//! 1. resolve (sentença, é_input) de cada tasklet
//! 2. alguma premissa eterna?                  → rejeita
//! 3. ordena: a = anterior, b = posterior      (troca sentença e flag juntas)
//! 4. b não é julgamento nem meta?             → rejeita
//! 5. a não é julgamento?                      → rejeita
//! 6. b não é input?                           → rejeita
//! 7. bases evidenciais de a e b se sobrepõem? → rejeita
//! 8. deriva: SE(a, b), SE(b, a), EE(a, b)
//! ```
//!
//! Toda rejeição é silenciosa — a ausência de derivação é o resultado normal
//! da maioria dos pares. A regra 6 impede que cadeias de derivação se
//! alimentem da própria saída: só eventos observados ancoram conclusões novas.

use crate::config::ReasonerParameters;
use crate::core::{Clock, Punctuation, Sentence};
use crate::derivation::{Deriver, RuleTemplate};

use super::Tasklet;

/// Motivo pelo qual um par não foi combinado.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Indução temporal exige tempos de ocorrência.
    EternalPremise,
    /// A premissa posterior não é julgamento nem meta.
    LaterNotJudgmentOrGoal,
    /// A premissa anterior não é julgamento.
    EarlierNotJudgment,
    /// A premissa posterior não veio de fora.
    LaterNotInput,
    /// As premissas compartilham evidência.
    EvidenceOverlap,
}

/// Par elegível, já ordenado no tempo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrderedPremises<'a> {
    /// Premissa anterior ("a").
    pub earlier: &'a Sentence,
    /// Premissa posterior ("b").
    pub later: &'a Sentence,
}

/// As três tentativas emitidas por par elegível, na ordem de emissão.
pub const DERIVATION_ATTEMPTS: [(RuleTemplate, bool); 3] = [
    (RuleTemplate::SequenceWithEvent, false),
    (RuleTemplate::SequenceWithEvent, true),
    (RuleTemplate::EventWithEvent, false),
];

/// Aplica as regras 1–7 a um par de tasklets.
pub fn check_eligibility<'a>(
    first: &'a Tasklet,
    second: &'a Tasklet,
) -> Result<OrderedPremises<'a>, Rejection> {
    let (a, a_input) = (first.sentence(), first.is_input());
    let (b, b_input) = (second.sentence(), second.is_input());

    let (a_time, b_time) = match (a.occurrence_time(), b.occurrence_time()) {
        (Some(ta), Some(tb)) => (ta, tb),
        _ => return Err(Rejection::EternalPremise),
    };

    let ((earlier, _), (later, later_input)) = if a_time > b_time {
        ((b, b_input), (a, a_input))
    } else {
        ((a, a_input), (b, b_input))
    };

    if !matches!(later.punctuation, Punctuation::Judgment | Punctuation::Goal) {
        return Err(Rejection::LaterNotJudgmentOrGoal);
    }
    if earlier.punctuation != Punctuation::Judgment {
        return Err(Rejection::EarlierNotJudgment);
    }
    if !later_input {
        return Err(Rejection::LaterNotInput);
    }
    if earlier.stamp.overlaps(&later.stamp) {
        return Err(Rejection::EvidenceOverlap);
    }

    Ok(OrderedPremises { earlier, later })
}

/// Emite as três tentativas de derivação sobre um par elegível.
///
/// Retorna as sentenças derivadas na ordem das tentativas; tentativas que
/// não disparam são simplesmente omitidas.
pub fn derive_all(
    premises: OrderedPremises<'_>,
    deriver: &dyn Deriver,
    clock: &dyn Clock,
    parameters: &ReasonerParameters,
) -> Vec<Sentence> {
    DERIVATION_ATTEMPTS
        .iter()
        .filter_map(|&(rule, swapped)| {
            let (first, second) = if swapped {
                (premises.later, premises.earlier)
            } else {
                (premises.earlier, premises.later)
            };
            deriver.derive_temporal(rule, first, second, clock, parameters)
        })
        .collect()
}

/// Resultado de um par elegível: as premissas ordenadas e o que derivaram.
#[derive(Clone, Debug, PartialEq)]
pub struct Combination<'a> {
    pub premises: OrderedPremises<'a>,
    /// Pode ser vazio — nenhuma das tentativas disparou.
    pub derived: Vec<Sentence>,
}

/// Combina dois tasklets: elegibilidade + derivação.
pub fn combine<'a>(
    first: &'a Tasklet,
    second: &'a Tasklet,
    deriver: &dyn Deriver,
    clock: &dyn Clock,
    parameters: &ReasonerParameters,
) -> Result<Combination<'a>, Rejection> {
    let premises = check_eligibility(first, second)?;
    let derived = derive_all(premises, deriver, clock, parameters);
    Ok(Combination { premises, derived })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EvidenceId, FixedClock, Occurrence, Stamp, Task, Term, TruthValue};
    use parking_lot::Mutex;

    /// Registra cada chamada e responde só para EventWithEvent.
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(RuleTemplate, i64, i64)>>,
    }

    impl Deriver for Recorder {
        fn derive_temporal(
            &self,
            rule: RuleTemplate,
            first: &Sentence,
            second: &Sentence,
            _clock: &dyn Clock,
            _parameters: &ReasonerParameters,
        ) -> Option<Sentence> {
            let (t1, t2) = (first.occurrence_time()?, second.occurrence_time()?);
            self.calls.lock().push((rule, t1, t2));
            (rule == RuleTemplate::EventWithEvent).then(|| {
                Sentence::judgment(
                    Term::predictive_implication(first.term.clone(), second.term.clone()),
                    TruthValue::new(1.0, 0.45),
                    Stamp::merged(&first.stamp, &second.stamp, Occurrence::At(t2)),
                )
            })
        }
    }

    fn event(name: &str, time: i64, evidence: u64) -> Sentence {
        Sentence::judgment(
            Term::inheritance(Term::atom(name), Term::atom("seen")),
            TruthValue::observed(true),
            Stamp::event(time, [EvidenceId(evidence)]),
        )
    }

    fn input(sentence: Sentence) -> Tasklet {
        Tasklet::from_task(Task::input(sentence), &FixedClock(0))
    }

    fn derived(sentence: Sentence) -> Tasklet {
        Tasklet::from_belief(sentence, &FixedClock(0))
    }

    fn params() -> ReasonerParameters {
        ReasonerParameters::default()
    }

    /// Par válido emite as três tentativas, na ordem SE(a,b), SE(b,a), EE(a,b)
    #[test]
    fn test_eligible_pair_issues_three_attempts() {
        let a = input(event("s1", 10, 1));
        let b = input(event("s2", 20, 2));
        let rec = Recorder::default();

        let out = combine(&a, &b, &rec, &FixedClock(20), &params()).unwrap();
        assert_eq!(out.derived.len(), 1);
        assert_eq!(
            *rec.calls.lock(),
            vec![
                (RuleTemplate::SequenceWithEvent, 10, 20),
                (RuleTemplate::SequenceWithEvent, 20, 10),
                (RuleTemplate::EventWithEvent, 10, 20),
            ]
        );
    }

    /// Premissa posterior passada primeiro é reordenada — e a flag de input vai junto
    #[test]
    fn test_temporal_reordering_swaps_roles() {
        // Só o tasklet das 20 é input: válido apenas se ele for "b"
        let later = input(event("s2", 20, 2));
        let earlier = derived(event("s1", 10, 1));
        let rec = Recorder::default();

        let premises = check_eligibility(&later, &earlier).unwrap();
        assert_eq!(premises.earlier.occurrence_time(), Some(10));
        assert_eq!(premises.later.occurrence_time(), Some(20));

        combine(&later, &earlier, &rec, &FixedClock(20), &params()).unwrap();
        assert_eq!(rec.calls.lock()[2], (RuleTemplate::EventWithEvent, 10, 20));
    }

    /// Qualquer premissa eterna impede a combinação
    #[test]
    fn test_eternal_premise_rejected() {
        let eternal = Sentence::judgment(
            Term::atom("x"),
            TruthValue::observed(true),
            Stamp::eternal([EvidenceId(9)]),
        );
        let a = input(eternal);
        let b = input(event("s2", 20, 2));
        let rec = Recorder::default();
        assert_eq!(
            combine(&a, &b, &rec, &FixedClock(0), &params()),
            Err(Rejection::EternalPremise)
        );
        assert_eq!(
            combine(&b, &a, &rec, &FixedClock(0), &params()),
            Err(Rejection::EternalPremise)
        );
        assert!(rec.calls.lock().is_empty());
    }

    /// Premissa posterior derivada nunca ancora uma derivação
    #[test]
    fn test_later_must_be_input() {
        let a = input(event("s1", 10, 1));
        let b = derived(event("s2", 20, 2));
        assert_eq!(check_eligibility(&a, &b).err(), Some(Rejection::LaterNotInput));

        let b_task = Tasklet::from_task(Task::derived(event("s2", 20, 2), 0.9), &FixedClock(0));
        assert_eq!(check_eligibility(&a, &b_task).err(), Some(Rejection::LaterNotInput));
    }

    /// Bases evidenciais sobrepostas são rejeitadas
    #[test]
    fn test_evidence_overlap_rejected() {
        let a = input(event("s1", 10, 1));
        let b = input(event("s2", 20, 1));
        assert_eq!(check_eligibility(&a, &b).err(), Some(Rejection::EvidenceOverlap));
    }

    /// Pontuação: b precisa ser julgamento ou meta; a precisa ser julgamento
    #[test]
    fn test_punctuation_gating() {
        let term = || Term::inheritance(Term::atom("s"), Term::atom("p"));
        let goal_later = input(Sentence::goal(
            term(),
            TruthValue::observed(true),
            Stamp::event(20, [EvidenceId(2)]),
        ));
        let goal_earlier = input(Sentence::goal(
            term(),
            TruthValue::observed(true),
            Stamp::event(5, [EvidenceId(3)]),
        ));
        let question_later = input(Sentence::question(term(), Stamp::event(30, [EvidenceId(4)])));
        let judgment = input(event("s1", 10, 1));

        assert!(check_eligibility(&judgment, &goal_later).is_ok());
        assert_eq!(
            check_eligibility(&goal_earlier, &judgment).err(),
            Some(Rejection::EarlierNotJudgment)
        );
        assert_eq!(
            check_eligibility(&judgment, &question_later).err(),
            Some(Rejection::LaterNotJudgmentOrGoal)
        );
    }

    /// Tempos iguais mantêm a ordem de chegada
    #[test]
    fn test_equal_times_keep_order() {
        let a = input(event("s1", 10, 1));
        let b = input(event("s2", 10, 2));
        let premises = check_eligibility(&a, &b).unwrap();
        assert_eq!(premises.earlier, a.sentence());
    }
}
