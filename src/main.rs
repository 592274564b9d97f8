//! # Tasklet Loop — Loop de Perfil do Escalonador
//!
//! Roda o [`TaskletScheduler`] continuamente sobre um fluxo sintético de
//! eventos, para perfilar o custo de um ciclo e observar o crescimento e o
//! corte das populações.
//!
//! ## Fluxo
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG)
//!   ├── Carrega SchedulerConfig (arquivo JSON opcional)
//!   └── Para cada ciclo:
//!       ├── Admite 1–3 eventos de input (sensores sintéticos)
//!       ├── run_cycle(clock, SequenceInduction)
//!       └── A cada 100 ciclos: loga tamanhos e derivações
//! ```
//!
//! ## Uso
//!
//! ```bash
//! # 1000 ciclos com a configuração padrão
//! cargo run --release
//!
//! # Configuração própria e 5000 ciclos, com eventos do escalonador em JSON
//! RUST_LOG=tasklet_scheduler::events=debug cargo run --release -- config.json 5000
//! ```

use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use tasklet_scheduler::core::{
    Clock, EvidenceId, Occurrence, Sentence, SteppedClock, Stamp, Task, Term, TruthValue,
};
use tasklet_scheduler::{
    AddedToMemory, Deriver, ReasonerParameters, RuleTemplate, SchedulerConfig, TaskletScheduler,
    TracingSink,
};

/// Ciclos executados quando nenhum número é passado na linha de comando.
const DEFAULT_CYCLES: u64 = 1000;

/// Sensores sintéticos — cada um gera eventos `<sensor --> ativo>`.
const SENSORS: [&str; 6] = ["luz", "porta", "som", "calor", "movimento", "chuva"];

/// Derivador de demonstração: indução temporal simplificada.
///
/// - `EE(a, b)` → `<a =/> b>` (implicação preditiva, composto)
/// - `SE(s, e)` com `s` sequência → `(&/, ..., e)` (sequência estendida)
///
/// Só dispara se as ocorrências estiverem a no máximo `10 × duration`.
struct SequenceInduction;

impl Deriver for SequenceInduction {
    fn derive_temporal(
        &self,
        rule: RuleTemplate,
        first: &Sentence,
        second: &Sentence,
        _clock: &dyn Clock,
        parameters: &ReasonerParameters,
    ) -> Option<Sentence> {
        let (t1, t2) = (first.occurrence_time()?, second.occurrence_time()?);
        let gap = t2.checked_sub(t1)?;
        if gap < 0 || gap > parameters.duration.saturating_mul(10) {
            return None;
        }

        let term = match (rule, &first.term) {
            (RuleTemplate::EventWithEvent, _) => {
                Term::predictive_implication(first.term.clone(), second.term.clone())
            }
            (RuleTemplate::SequenceWithEvent, Term::Sequence(parts)) if parts.len() < 4 => {
                let mut parts = parts.clone();
                parts.push(second.term.clone());
                Term::Sequence(parts)
            }
            _ => return None,
        };

        let f1 = first.truth.as_ref()?.frequency();
        let (f2, c2) = second.truth.as_ref().map(|t| (t.frequency(), t.confidence()))?;
        let w = f1 * c2 * first.truth.as_ref()?.confidence();
        let confidence = w / (w + parameters.evidential_horizon);

        Some(Sentence::judgment(
            term,
            TruthValue::new(f2, confidence),
            Stamp::merged(&first.stamp, &second.stamp, Occurrence::At(t2)),
        ))
    }
}

/// Gera os eventos de input de um passo.
fn sensor_events(rng: &mut StdRng, time: i64, next_evidence: &mut u64) -> Vec<Task> {
    let count = rng.gen_range(1..=3);
    (0..count)
        .map(|_| {
            let sensor = SENSORS[rng.gen_range(0..SENSORS.len())];
            *next_evidence += 1;
            Task::input(Sentence::judgment(
                Term::inheritance(Term::atom(sensor), Term::atom("ativo")),
                TruthValue::observed(rng.gen_bool(0.9)),
                Stamp::event(time, [EvidenceId(*next_evidence)]),
            ))
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => SchedulerConfig::load_from_file(&path)?,
        None => SchedulerConfig::default(),
    };
    let cycles = match args.next() {
        Some(n) => n
            .parse::<u64>()
            .with_context(|| format!("Número de ciclos inválido: {}", n))?,
        None => DEFAULT_CYCLES,
    };

    tracing::info!(
        cycles,
        capacity = config.capacity,
        seed = config.seed,
        "🔁 Tasklet loop — iniciando"
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut scheduler = TaskletScheduler::new(config)?.with_sink(TracingSink);
    let clock = SteppedClock::starting_at(0);
    let mut next_evidence = 0u64;
    let mut total_derived = 0usize;
    let started = Instant::now();

    for _ in 0..cycles {
        let time = clock.advance(1);
        for task in sensor_events(&mut rng, time, &mut next_evidence) {
            scheduler.admit_task(task, AddedToMemory::No, &clock);
        }

        let report = scheduler
            .run_cycle(&clock, &SequenceInduction)
            .context("Ciclo do escalonador abortado")?;
        total_derived += report.single_event.derived + report.cross.derived;

        if (report.step + 1) % 100 == 0 {
            tracing::info!(
                step = report.step,
                events = report.events_len,
                composites = report.composites_len,
                derived = total_derived,
                evicted = report.evicted_events + report.evicted_composites,
                "Progresso"
            );
        }
    }

    let elapsed = started.elapsed();
    tracing::info!(
        cycles,
        derived = total_derived,
        elapsed_ms = elapsed.as_millis() as u64,
        per_cycle_us = (elapsed.as_micros() / u128::from(cycles.max(1))) as u64,
        "✅ Tasklet loop concluído"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklet_scheduler::core::FixedClock;

    fn event(name: &str, time: i64, evidence: u64) -> Sentence {
        Sentence::judgment(
            Term::inheritance(Term::atom(name), Term::atom("ativo")),
            TruthValue::observed(true),
            Stamp::event(time, [EvidenceId(evidence)]),
        )
    }

    fn parameters(duration: i64) -> ReasonerParameters {
        ReasonerParameters {
            duration,
            ..ReasonerParameters::default()
        }
    }

    /// EE dentro da janela produz `<a =/> b>` no instante de b
    #[test]
    fn test_event_pair_within_window() {
        let derived = SequenceInduction
            .derive_temporal(
                RuleTemplate::EventWithEvent,
                &event("luz", 10, 1),
                &event("porta", 20, 2),
                &FixedClock(20),
                &parameters(5),
            )
            .unwrap();
        assert_eq!(derived.occurrence_time(), Some(20));
        assert!(matches!(derived.term, Term::PredictiveImplication(..)));
    }

    /// Durações e tempos extremos não estouram a aritmética
    #[test]
    fn test_extreme_values_do_not_overflow() {
        let wide = SequenceInduction.derive_temporal(
            RuleTemplate::EventWithEvent,
            &event("luz", 0, 1),
            &event("porta", 1_000, 2),
            &FixedClock(0),
            &parameters(i64::MAX),
        );
        assert!(wide.is_some());

        let far = SequenceInduction.derive_temporal(
            RuleTemplate::EventWithEvent,
            &event("luz", i64::MIN, 1),
            &event("porta", i64::MAX, 2),
            &FixedClock(0),
            &parameters(5),
        );
        assert!(far.is_none());
    }
}
