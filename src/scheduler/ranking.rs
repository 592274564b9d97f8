//! # Ranking e Despejo
//!
//! Ao fim de cada ciclo, cada população é:
//!
//! 1. **Reavaliada** — utilidade recalculada para todos os tasklets
//! 2. **Ordenada** — ordenação estável, utilidade decrescente
//! 3. **Cortada** — só os primeiros `capacity` tasklets sobrevivem
//!
//! É o único mecanismo que limita memória. Empates mantêm a ordem anterior
//! (mais recente primeiro), já que a ordenação é estável.

use std::cmp::Ordering;

use crate::error::SchedulerError;

use super::Population;

/// Reavalia, ordena e corta `population` em `capacity`.
///
/// Retorna quantos tasklets foram descartados.
///
/// # Erros
///
/// [`SchedulerError::NonFiniteUtility`] se algum tasklet tiver utilidade
/// NaN ou infinita — a população fica intocada (além do cache de utilidade).
pub fn rank_and_evict(
    population: &mut Population,
    now: i64,
    capacity: usize,
) -> Result<usize, SchedulerError> {
    recompute_utilities(population, now)?;
    Ok(sort_and_truncate(population, capacity))
}

/// Recalcula a utilidade de cada tasklet, sem reordenar nada.
///
/// # Erros
///
/// [`SchedulerError::NonFiniteUtility`] no primeiro tasklet cuja utilidade
/// não é finita.
pub fn recompute_utilities(population: &mut Population, now: i64) -> Result<(), SchedulerError> {
    let kind = population.kind();
    for (index, tasklet) in population.as_mut_slice().iter_mut().enumerate() {
        let utility = tasklet.recompute_utility(now);
        if !utility.is_finite() {
            return Err(SchedulerError::NonFiniteUtility {
                population: kind,
                index,
                utility,
                sentence: tasklet.sentence().to_string(),
            });
        }
    }
    Ok(())
}

/// Ordena pela utilidade em cache (estável, decrescente) e corta em `capacity`.
///
/// Pressupõe [`recompute_utilities`] já aplicado com sucesso.
pub fn sort_and_truncate(population: &mut Population, capacity: usize) -> usize {
    population.as_mut_slice().sort_by(|a, b| {
        b.utility()
            .partial_cmp(&a.utility())
            .unwrap_or(Ordering::Equal)
    });
    population.truncate(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EvidenceId, FixedClock, Sentence, Stamp, Task, Term, TruthValue};
    use crate::scheduler::{PopulationKind, Tasklet};

    fn event(time: i64, priority: f64) -> Tasklet {
        let s = Sentence::judgment(
            Term::inheritance(Term::atom("x"), Term::atom("y")),
            TruthValue::observed(true),
            Stamp::event(time, [EvidenceId(time as u64)]),
        );
        Tasklet::from_task(Task::derived(s, priority), &FixedClock(0))
    }

    /// Mais recentes primeiro; o excedente é descartado
    #[test]
    fn test_sorts_descending_and_truncates() {
        let mut pop = Population::new(PopulationKind::Events);
        for t in [50, 10, 90, 30, 70] {
            pop.push_front(event(t, 1.0));
        }

        let evicted = rank_and_evict(&mut pop, 100, 3).unwrap();
        assert_eq!(evicted, 2);
        let times: Vec<_> = pop.iter().map(|t| t.sentence().occurrence_time().unwrap()).collect();
        assert_eq!(times, vec![90, 70, 50]);

        let utilities: Vec<_> = pop.iter().map(|t| t.utility()).collect();
        assert!(utilities.windows(2).all(|w| w[0] >= w[1]));
    }

    /// Abaixo da capacidade nada é descartado
    #[test]
    fn test_under_capacity_keeps_all() {
        let mut pop = Population::new(PopulationKind::Events);
        pop.push_front(event(1, 1.0));
        pop.push_front(event(2, 1.0));
        assert_eq!(rank_and_evict(&mut pop, 2, 20_000).unwrap(), 0);
        assert_eq!(pop.len(), 2);
    }

    /// Utilidade NaN é violação de invariante e aborta o ranking
    #[test]
    fn test_non_finite_utility_fails_fast() {
        let mut pop = Population::new(PopulationKind::Composites);
        pop.push_front(event(1, 1.0));
        pop.push_front(event(2, f64::NAN));

        let err = rank_and_evict(&mut pop, 2, 1).unwrap_err();
        assert!(matches!(
            err,
            SchedulerError::NonFiniteUtility {
                population: PopulationKind::Composites,
                index: 0,
                ..
            }
        ));
        assert_eq!(pop.len(), 2);
    }

    /// Falha na reavaliação não reordena nem corta nada
    #[test]
    fn test_recompute_failure_leaves_order() {
        let mut pop = Population::new(PopulationKind::Events);
        pop.push_front(event(10, f64::NAN));
        pop.push_front(event(20, 1.0));
        pop.push_front(event(90, 1.0));

        assert!(recompute_utilities(&mut pop, 100).is_err());
        let times: Vec<_> = pop.iter().map(|t| t.sentence().occurrence_time().unwrap()).collect();
        assert_eq!(times, vec![90, 20, 10]);
    }
}
