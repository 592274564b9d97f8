//! # TaskletScheduler — O Ciclo de Escalonamento
//!
//! Uma vez por ciclo do raciocinador, o driver externo chama
//! [`TaskletScheduler::run_cycle`], que roda até o fim sem pontos de
//! suspensão:
//!
//! ```text
//! run_cycle(clock, deriver)
//!   ├── 1. begin_phase; 100 rodadas sobre (events, events)
//!   ├── 2. begin_phase; 25 rodadas sobre (composites, events)
//!   └── 3. reavalia composites e events; só então ordena e corta as duas
//! ```
//!
//! Sentenças derivadas viram tasklets (crenças, não input) e são admitidas
//! imediatamente na população adequada — podem ser sorteadas ainda no mesmo
//! ciclo e alimentam os seguintes.
//!
//! ## Estado
//!
//! Entre ciclos o escalonador guarda apenas as duas populações, o gerador
//! pseudo-aleatório e um contador de passos (só diagnóstico).
//!
//! ## Exemplo
//!
//! ```rust
//! use tasklet_scheduler::core::{EvidenceId, FixedClock, Sentence, Stamp, Task, Term, TruthValue};
//! use tasklet_scheduler::derivation::RuleTemplate;
//! use tasklet_scheduler::scheduler::{AddedToMemory, TaskletScheduler};
//! use tasklet_scheduler::SchedulerConfig;
//!
//! let mut scheduler = TaskletScheduler::new(SchedulerConfig::default()).unwrap();
//! let clock = FixedClock(10);
//! let s1 = Sentence::judgment(
//!     Term::inheritance(Term::atom("light"), Term::atom("on")),
//!     TruthValue::observed(true),
//!     Stamp::event(10, [EvidenceId(1)]),
//! );
//! scheduler.admit_task(Task::input(s1), AddedToMemory::Yes, &clock);
//!
//! let never_fires = |_: RuleTemplate, _: &Sentence, _: &Sentence| -> Option<Sentence> { None };
//! let report = scheduler.run_cycle(&clock, &never_fires).unwrap();
//! assert_eq!(report.events_len, 1);
//! ```

use serde::Serialize;

use crate::config::{ConfigError, SchedulerConfig};
use crate::core::{Clock, Sentence, Task};
use crate::derivation::Deriver;
use crate::error::SchedulerError;
use crate::observer::{EventSink, NoopSink, SchedulerEvent};

use super::combine::{combine, OrderedPremises};
use super::ranking::{recompute_utilities, sort_and_truncate};
use super::sampling::{PairSampler, SampleOutcome};
use super::{Population, PopulationKind, Tasklet};

/// O task admitido também foi guardado na memória global do raciocinador?
///
/// Puramente informativo — não altera o escalonamento.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddedToMemory {
    Yes,
    No,
}

/// Contadores de uma fase de amostragem.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PhaseReport {
    /// Rodadas executadas.
    pub rounds: usize,
    /// Rodadas sem efeito por população pequena demais.
    pub empty: usize,
    /// Pares descartados por já terem sido sorteados na fase.
    pub duplicates: usize,
    /// Pares inéditos rejeitados pelas regras de elegibilidade.
    pub rejected: usize,
    /// Pares elegíveis (as três tentativas foram emitidas).
    pub combined: usize,
    /// Sentenças derivadas e admitidas.
    pub derived: usize,
}

/// Relatório de um ciclo completo.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CycleReport {
    pub step: u64,
    pub time: i64,
    pub single_event: PhaseReport,
    pub cross: PhaseReport,
    pub evicted_events: usize,
    pub evicted_composites: usize,
    /// Tamanho final da população de eventos.
    pub events_len: usize,
    /// Tamanho final da população de compostos.
    pub composites_len: usize,
}

/// Escalonador de inferência em pares, com memória limitada.
///
/// Possui com exclusividade as duas populações e o gerador — nenhum outro
/// componente os lê ou altera entre invocações. Não é reentrante: `run_cycle`
/// exige `&mut self`.
pub struct TaskletScheduler {
    config: SchedulerConfig,
    events: Population,
    composites: Population,
    sampler: PairSampler,
    /// Passo atual — só diagnóstico, nunca influencia o escalonamento.
    step: u64,
    sink: Box<dyn EventSink>,
}

impl TaskletScheduler {
    /// Cria um escalonador vazio com o gerador semeado por `config.seed`.
    ///
    /// # Erros
    ///
    /// [`ConfigError`] se a configuração for inconsistente.
    pub fn new(config: SchedulerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            sampler: PairSampler::new(config.seed),
            config,
            events: Population::new(PopulationKind::Events),
            composites: Population::new(PopulationKind::Composites),
            step: 0,
            sink: Box::new(NoopSink),
        })
    }

    /// Substitui o sink de eventos diagnósticos.
    pub fn with_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn events(&self) -> &Population {
        &self.events
    }

    pub fn composites(&self) -> &Population {
        &self.composites
    }

    pub fn population(&self, kind: PopulationKind) -> &Population {
        match kind {
            PopulationKind::Events => &self.events,
            PopulationKind::Composites => &self.composites,
        }
    }

    fn population_mut(&mut self, kind: PopulationKind) -> &mut Population {
        match kind {
            PopulationKind::Events => &mut self.events,
            PopulationKind::Composites => &mut self.composites,
        }
    }

    /// Número de ciclos já completados.
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Admite um task vindo do raciocinador (input ou derivado em outro lugar).
    pub fn admit_task(&mut self, task: Task, added_to_memory: AddedToMemory, clock: &dyn Clock) {
        tracing::trace!(
            sentence = %task.sentence,
            input = task.is_input(),
            added_to_memory = ?added_to_memory,
            "Tasklet admitido a partir de task"
        );
        self.admit(Tasklet::from_task(task, clock));
    }

    /// Admite uma crença avulsa.
    pub fn admit_belief(&mut self, sentence: Sentence, clock: &dyn Clock) {
        self.admit(Tasklet::from_belief(sentence, clock));
    }

    /// Classifica e insere na frente da população correspondente.
    pub fn admit(&mut self, tasklet: Tasklet) {
        let kind = PopulationKind::classify(&tasklet);
        self.population_mut(kind).push_front(tasklet);
    }

    /// Executa um ciclo completo de escalonamento.
    ///
    /// # Erros
    ///
    /// [`SchedulerError`] apenas em violação de invariante por um
    /// colaborador; nesse caso o ciclo é abortado e o passo não avança.
    /// As derivações já admitidas nas fases de amostragem permanecem, mas
    /// nenhuma população é ordenada nem cortada: as utilidades das duas são
    /// verificadas antes de qualquer reordenação. O sink recebe
    /// [`SchedulerEvent::CycleAborted`] no lugar de `CycleCompleted`.
    pub fn run_cycle(
        &mut self,
        clock: &dyn Clock,
        deriver: &dyn Deriver,
    ) -> Result<CycleReport, SchedulerError> {
        let step = self.step;
        let result = self.try_cycle(clock, deriver);
        match &result {
            Ok(_) => self.step += 1,
            Err(err) => {
                tracing::warn!(step, error = %err, "Ciclo do escalonador abortado");
                self.sink.emit(&SchedulerEvent::CycleAborted {
                    step,
                    reason: err.to_string(),
                });
            }
        }
        result
    }

    fn try_cycle(
        &mut self,
        clock: &dyn Clock,
        deriver: &dyn Deriver,
    ) -> Result<CycleReport, SchedulerError> {
        let time = clock.now();
        tracing::debug!(
            step = self.step,
            time,
            events = self.events.len(),
            composites = self.composites.len(),
            "Ciclo do escalonador iniciado"
        );
        self.sink.emit(&SchedulerEvent::CycleStarted {
            step: self.step,
            time,
            events: self.events.len(),
            composites: self.composites.len(),
        });

        let single_event = self.run_phase(
            PopulationKind::Events,
            PopulationKind::Events,
            self.config.single_event_rounds,
            clock,
            deriver,
        )?;
        let cross = self.run_phase(
            PopulationKind::Composites,
            PopulationKind::Events,
            self.config.cross_rounds,
            clock,
            deriver,
        )?;

        recompute_utilities(&mut self.composites, time)?;
        recompute_utilities(&mut self.events, time)?;
        let capacity = self.config.capacity;
        let evicted_composites = sort_and_truncate(&mut self.composites, capacity);
        let evicted_events = sort_and_truncate(&mut self.events, capacity);
        for (population, count) in [
            (PopulationKind::Composites, evicted_composites),
            (PopulationKind::Events, evicted_events),
        ] {
            if count > 0 {
                tracing::debug!(step = self.step, population = ?population, count, "Tasklets despejados");
                self.sink.emit(&SchedulerEvent::Evicted {
                    step: self.step,
                    population,
                    count,
                });
            }
        }

        let report = CycleReport {
            step: self.step,
            time,
            single_event,
            cross,
            evicted_events,
            evicted_composites,
            events_len: self.events.len(),
            composites_len: self.composites.len(),
        };
        tracing::debug!(
            step = report.step,
            derived = report.single_event.derived + report.cross.derived,
            events = report.events_len,
            composites = report.composites_len,
            "Ciclo do escalonador concluído"
        );
        self.sink.emit(&SchedulerEvent::CycleCompleted {
            report: report.clone(),
        });

        Ok(report)
    }

    /// Uma fase de amostragem: abre escopo de deduplicação e roda `rounds` rodadas.
    fn run_phase(
        &mut self,
        a: PopulationKind,
        b: PopulationKind,
        rounds: usize,
        clock: &dyn Clock,
        deriver: &dyn Deriver,
    ) -> Result<PhaseReport, SchedulerError> {
        self.sampler.begin_phase();
        let mut report = PhaseReport::default();
        for _ in 0..rounds {
            report.rounds += 1;
            self.sample_round(a, b, clock, deriver, &mut report)?;
        }
        Ok(report)
    }

    /// Tasklet na posição sorteada; fora da faixa é violação de invariante.
    fn sampled(&self, kind: PopulationKind, index: usize) -> Result<&Tasklet, SchedulerError> {
        let population = self.population(kind);
        population.get(index).ok_or(SchedulerError::SampleOutOfRange {
            population: kind,
            index,
            len: population.len(),
        })
    }

    fn sample_round(
        &mut self,
        a: PopulationKind,
        b: PopulationKind,
        clock: &dyn Clock,
        deriver: &dyn Deriver,
        report: &mut PhaseReport,
    ) -> Result<(), SchedulerError> {
        let same_population = a == b;
        let (len_a, len_b) = (self.population(a).len(), self.population(b).len());
        let outcome = self.sampler.draw(len_a, len_b, same_population);
        let pair = match outcome {
            SampleOutcome::Empty => {
                report.empty += 1;
                return Ok(());
            }
            SampleOutcome::Duplicate(_) => {
                report.duplicates += 1;
                return Ok(());
            }
            SampleOutcome::Fresh(pair) => pair,
        };

        let first = self.sampled(a, pair.first)?;
        let second = self.sampled(b, pair.second)?;

        let combination = match combine(first, second, deriver, clock, &self.config.reasoner) {
            Ok(combination) => combination,
            Err(rejection) => {
                tracing::trace!(?rejection, ?pair, "Par rejeitado");
                report.rejected += 1;
                return Ok(());
            }
        };
        report.combined += 1;

        if !combination.derived.is_empty() {
            let OrderedPremises { earlier, later } = combination.premises;
            tracing::debug!(
                step = self.step,
                earlier = %earlier,
                later = %later,
                derived = combination.derived.len(),
                "Par combinado"
            );
            self.sink.emit(&SchedulerEvent::Combined {
                step: self.step,
                earlier: earlier.to_string(),
                later: later.to_string(),
                derived: combination.derived.iter().map(ToString::to_string).collect(),
            });
        }

        let derived = combination.derived;
        report.derived += derived.len();
        for sentence in derived {
            self.admit_belief(sentence, clock);
        }
        Ok(())
    }
}

impl std::fmt::Debug for TaskletScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskletScheduler")
            .field("step", &self.step)
            .field("events", &self.events.len())
            .field("composites", &self.composites.len())
            .finish()
    }
}
