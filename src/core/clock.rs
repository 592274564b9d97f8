//! # Clock — Fonte de Tempo Lógico
//!
//! O escalonador não possui relógio: o driver externo fornece um [`Clock`]
//! a cada ciclo. O instante é usado para recalcular utilidades e para
//! carimbar os tasklets derivados.

use std::sync::atomic::{AtomicI64, Ordering};

/// Capacidade de fornecer o instante lógico atual.
pub trait Clock {
    fn now(&self) -> i64;
}

/// Relógio parado em um instante fixo — útil em testes.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

/// Relógio que avança um passo por chamada de [`advance`](SteppedClock::advance).
///
/// É o relógio do loop de perfil: um passo por ciclo do raciocinador.
#[derive(Debug, Default)]
pub struct SteppedClock {
    time: AtomicI64,
}

impl SteppedClock {
    pub fn starting_at(time: i64) -> Self {
        Self {
            time: AtomicI64::new(time),
        }
    }

    /// Avança `steps` unidades e retorna o novo instante.
    pub fn advance(&self, steps: i64) -> i64 {
        self.time.fetch_add(steps, Ordering::Relaxed) + steps
    }
}

impl Clock for SteppedClock {
    fn now(&self) -> i64 {
        self.time.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepped_clock_advances() {
        let clock = SteppedClock::starting_at(10);
        assert_eq!(clock.now(), 10);
        assert_eq!(clock.advance(5), 15);
        assert_eq!(clock.now(), 15);
    }
}
