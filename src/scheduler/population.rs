//! # Populações de Tasklets
//!
//! O escalonador mantém duas populações densas e indexáveis:
//!
//! | População | Conteúdo |
//! |-----------|----------|
//! | `Events` | eventos pontuais (relação de herança/similaridade, não eterna) |
//! | `Composites` | sequências, implicações e tudo que for eterno |
//!
//! A inserção é sempre **na frente** (mais recente primeiro). Não há caminho
//! de rejeição: a capacidade só é imposta pelo ranking ao fim do ciclo, então
//! uma população pode crescer temporariamente além do limite.

use std::collections::VecDeque;

use serde::Serialize;

use super::Tasklet;

/// Identifica uma das duas populações.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PopulationKind {
    /// Eventos pontuais.
    Events,
    /// Compostos, sequências e sentenças eternas.
    Composites,
}

impl PopulationKind {
    /// Classifica um tasklet pela sua sentença subjacente.
    pub fn classify(tasklet: &Tasklet) -> Self {
        if tasklet.sentence().is_event() {
            PopulationKind::Events
        } else {
            PopulationKind::Composites
        }
    }
}

/// Sequência ordenada de tasklets, indexável em O(1).
#[derive(Clone, Debug)]
pub struct Population {
    kind: PopulationKind,
    tasklets: VecDeque<Tasklet>,
}

impl Population {
    pub fn new(kind: PopulationKind) -> Self {
        Self {
            kind,
            tasklets: VecDeque::new(),
        }
    }

    pub fn kind(&self) -> PopulationKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.tasklets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasklets.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tasklet> {
        self.tasklets.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tasklet> {
        self.tasklets.iter()
    }

    /// Insere na frente (posição 0).
    pub fn push_front(&mut self, tasklet: Tasklet) {
        self.tasklets.push_front(tasklet);
    }

    /// Acesso mutável contíguo — usado pelo ranking para ordenar no lugar.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Tasklet] {
        self.tasklets.make_contiguous()
    }

    /// Mantém apenas os primeiros `len` tasklets; retorna quantos foram descartados.
    pub(crate) fn truncate(&mut self, len: usize) -> usize {
        let evicted = self.tasklets.len().saturating_sub(len);
        self.tasklets.truncate(len);
        evicted
    }
}
