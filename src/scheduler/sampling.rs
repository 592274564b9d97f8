//! # Amostragem de Pares
//!
//! Em vez de tentar todos os pares (inviável sob AIKR), cada rodada sorteia
//! **um** par de índices uniformemente:
//!
//! ```text
//! i ← U[0, |A|)    j ← U[0, |B|)
//! mesma população e i == j?  → sorteia de novo (nunca combina consigo mesmo)
//! (i, j) já sorteado nesta fase?  → descarta (não re-sorteia)
//! (mesma população: (j, i) também conta como repetido)
//! ```
//!
//! O descarte de duplicatas é um **pulo**, não uma nova tentativa: uma fase
//! pode realizar menos combinações efetivas do que rodadas pedidas.
//!
//! O conjunto de pares já vistos é limpo no início de **cada fase**
//! ([`PairSampler::begin_phase`]), não uma vez por ciclo.
//!
//! O gerador é semeado na construção — com a mesma semente e as mesmas
//! populações, a sequência de pares é idêntica.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Par de índices sorteado — `first` em A, `second` em B.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SampledPair {
    pub first: usize,
    pub second: usize,
}

impl SampledPair {
    fn reversed(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

/// Resultado de uma rodada de amostragem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleOutcome {
    /// População(ões) pequena(s) demais — rodada sem efeito.
    Empty,
    /// Par já sorteado nesta fase — descartado.
    Duplicate(SampledPair),
    /// Par inédito — já registrado, pronto para combinar.
    Fresh(SampledPair),
}

/// Sorteador de pares com deduplicação por fase.
#[derive(Debug)]
pub struct PairSampler {
    rng: ChaCha8Rng,
    seen: HashSet<SampledPair>,
}

impl PairSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seen: HashSet::new(),
        }
    }

    /// Abre um novo escopo de deduplicação.
    pub fn begin_phase(&mut self) {
        self.seen.clear();
    }

    /// Quantos pares distintos foram registrados na fase atual.
    pub fn seen_in_phase(&self) -> usize {
        self.seen.len()
    }

    /// Sorteia um par entre populações de tamanhos `len_a` e `len_b`.
    ///
    /// `same_population` indica que A e B são a mesma população: nesse caso
    /// `i ≠ j` é garantido e o par é tratado como não ordenado para fins de
    /// deduplicação.
    pub fn draw(&mut self, len_a: usize, len_b: usize, same_population: bool) -> SampleOutcome {
        if same_population && len_a < 2 {
            return SampleOutcome::Empty;
        }
        if len_a == 0 || len_b == 0 {
            return SampleOutcome::Empty;
        }

        let pair = loop {
            let first = self.rng.gen_range(0..len_a);
            let second = self.rng.gen_range(0..len_b);
            if !same_population || first != second {
                break SampledPair { first, second };
            }
        };

        if self.seen.contains(&pair) || (same_population && self.seen.contains(&pair.reversed())) {
            return SampleOutcome::Duplicate(pair);
        }
        self.seen.insert(pair);
        SampleOutcome::Fresh(pair)
    }
}
