//! # Tasklet — Unidade de Escalonamento
//!
//! Um [`Tasklet`] embrulha uniformemente **uma** de duas coisas:
//!
//! - um [`Task`] do raciocinador (sentença + proveniência input/derivada)
//! - uma sentença de crença avulsa (sempre tratada como **não input**)
//!
//! Todo o resto do escalonador (classificação, elegibilidade, ranking) usa
//! apenas [`Tasklet::sentence`] e [`Tasklet::is_input`], sem se importar
//! com o tipo do payload.
//!
//! ## Utilidade
//!
//! ```text
//! utilidade = relevância × recência
//!
//! relevância = expectativa(verdade) × prioridade   (0.5 sem verdade; crença: prioridade 1)
//! recência   = 0.5 ^ (|agora − ocorrência| / 100)  (eterna: 1)
//! ```
//!
//! O cache só é válido logo após [`recompute_utility`](Tasklet::recompute_utility) —
//! entre ciclos ele fica defasado.

use crate::core::{Clock, Sentence, Task};

/// Meia-vida (em unidades de tempo) do componente de recência da utilidade.
pub const UTILITY_HALF_LIFE: f64 = 100.0;

/// Payload de um tasklet — exatamente um dos dois está presente.
#[derive(Clone, Debug, PartialEq)]
pub enum TaskletPayload {
    /// Task do raciocinador.
    Task(Task),
    /// Crença avulsa (ex.: sentença derivada pelo próprio escalonador).
    Belief(Sentence),
}

/// Unidade de escalonamento.
#[derive(Clone, Debug, PartialEq)]
pub struct Tasklet {
    payload: TaskletPayload,
    /// Instante em que o tasklet foi criado.
    admitted_at: i64,
    cached_utility: f64,
}

impl Tasklet {
    /// Embrulha um task admitido pelo raciocinador.
    pub fn from_task(task: Task, clock: &dyn Clock) -> Self {
        Self::with_payload(TaskletPayload::Task(task), clock)
    }

    /// Embrulha uma sentença derivada — proveniência implícita "não input".
    pub fn from_belief(sentence: Sentence, clock: &dyn Clock) -> Self {
        Self::with_payload(TaskletPayload::Belief(sentence), clock)
    }

    fn with_payload(payload: TaskletPayload, clock: &dyn Clock) -> Self {
        Self {
            payload,
            admitted_at: clock.now(),
            cached_utility: 0.0,
        }
    }

    pub fn payload(&self) -> &TaskletPayload {
        &self.payload
    }

    pub fn is_task(&self) -> bool {
        matches!(self.payload, TaskletPayload::Task(_))
    }

    pub fn is_belief(&self) -> bool {
        matches!(self.payload, TaskletPayload::Belief(_))
    }

    /// A sentença subjacente, qualquer que seja o payload.
    pub fn sentence(&self) -> &Sentence {
        match &self.payload {
            TaskletPayload::Task(task) => &task.sentence,
            TaskletPayload::Belief(sentence) => sentence,
        }
    }

    /// Proveniência efetiva: a do task, ou `false` para crenças.
    pub fn is_input(&self) -> bool {
        match &self.payload {
            TaskletPayload::Task(task) => task.is_input(),
            TaskletPayload::Belief(_) => false,
        }
    }

    pub fn admitted_at(&self) -> i64 {
        self.admitted_at
    }

    /// Última utilidade calculada. Defasada fora do ranking.
    pub fn utility(&self) -> f64 {
        self.cached_utility
    }

    /// Recalcula e guarda a utilidade em relação a `now`.
    pub fn recompute_utility(&mut self, now: i64) -> f64 {
        let sentence = self.sentence();
        let expectation = sentence.truth.as_ref().map_or(0.5, |t| t.expectation());
        let priority = match &self.payload {
            TaskletPayload::Task(task) => task.priority,
            TaskletPayload::Belief(_) => 1.0,
        };
        let recency = match sentence.occurrence_time() {
            None => 1.0,
            Some(t) => 0.5f64.powf(now.abs_diff(t) as f64 / UTILITY_HALF_LIFE),
        };
        self.cached_utility = expectation * priority * recency;
        self.cached_utility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EvidenceId, FixedClock, Stamp, Term, TruthValue};

    fn event_at(time: i64) -> Sentence {
        Sentence::judgment(
            Term::inheritance(Term::atom("door"), Term::atom("open")),
            TruthValue::observed(true),
            Stamp::event(time, [EvidenceId(1)]),
        )
    }

    /// Task e crença expõem a mesma sentença pelo acessor uniforme
    #[test]
    fn test_uniform_accessors() {
        let clock = FixedClock(5);
        let task = Tasklet::from_task(Task::input(event_at(3)), &clock);
        let belief = Tasklet::from_belief(event_at(3), &clock);

        assert!(task.is_task() && !task.is_belief());
        assert!(belief.is_belief() && !belief.is_task());
        assert_eq!(task.sentence(), belief.sentence());
        assert_eq!(task.admitted_at(), 5);
    }

    /// Crenças nunca contam como input; tasks herdam a proveniência
    #[test]
    fn test_provenance() {
        let clock = FixedClock(0);
        assert!(Tasklet::from_task(Task::input(event_at(1)), &clock).is_input());
        assert!(!Tasklet::from_task(Task::derived(event_at(1), 0.5), &clock).is_input());
        assert!(!Tasklet::from_belief(event_at(1), &clock).is_input());
    }

    /// Eventos recentes valem mais que eventos antigos
    #[test]
    fn test_recency_decays_utility() {
        let clock = FixedClock(0);
        let mut old = Tasklet::from_belief(event_at(0), &clock);
        let mut recent = Tasklet::from_belief(event_at(190), &clock);
        let u_old = old.recompute_utility(200);
        let u_recent = recent.recompute_utility(200);
        assert!(u_recent > u_old);
        // 200 unidades = duas meias-vidas
        assert!((u_old - 0.95 * 0.25).abs() < 1e-9);
        assert_eq!(old.utility(), u_old);
    }

    /// Sentenças eternas não decaem
    #[test]
    fn test_eternal_has_full_recency() {
        let sentence = Sentence::judgment(
            Term::atom("x"),
            TruthValue::observed(true),
            Stamp::eternal([EvidenceId(1)]),
        );
        let mut t = Tasklet::from_belief(sentence, &FixedClock(0));
        assert!((t.recompute_utility(1_000_000) - 0.95).abs() < 1e-9);
    }

    /// A prioridade do task multiplica a relevância
    #[test]
    fn test_priority_scales_utility() {
        let clock = FixedClock(0);
        let mut t = Tasklet::from_task(Task::derived(event_at(10), 0.5), &clock);
        assert!((t.recompute_utility(10) - 0.475).abs() < 1e-9);
    }
}
