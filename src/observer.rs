//! # Observabilidade — Eventos Diagnósticos do Escalonador
//!
//! O escalonador reporta o que faz a um [`EventSink`] injetado. A lógica
//! central **nunca** depende de qual sink está em uso: trocar
//! [`NoopSink`] por [`RecordingSink`] não altera nenhuma amostra nem
//! derivação.
//!
//! ## Serialização
//!
//! Usa `#[serde(tag = "type")]` para produzir JSON com discriminador:
//!
//! ```json
//! { "type": "Evicted", "step": 3, "population": "Events", "count": 12 }
//! ```

use parking_lot::Mutex;
use serde::Serialize;

use crate::scheduler::{CycleReport, PopulationKind};

/// Evento diagnóstico emitido durante um ciclo.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum SchedulerEvent {
    /// Início de um ciclo.
    CycleStarted {
        step: u64,
        time: i64,
        events: usize,
        composites: usize,
    },

    /// Um par elegível foi combinado e produziu pelo menos uma derivação.
    Combined {
        step: u64,
        /// Premissa anterior (Narsese).
        earlier: String,
        /// Premissa posterior (Narsese).
        later: String,
        /// Sentenças derivadas, na ordem das tentativas.
        derived: Vec<String>,
    },

    /// Tasklets descartados pelo corte de capacidade.
    Evicted {
        step: u64,
        population: PopulationKind,
        count: usize,
    },

    /// Fim de um ciclo, com o relatório completo.
    CycleCompleted { report: CycleReport },

    /// Ciclo abortado por violação de invariante; o passo não avança.
    CycleAborted { step: u64, reason: String },
}

/// Destino dos eventos diagnósticos.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &SchedulerEvent);
}

/// Descarta tudo. Sink padrão.
#[derive(Debug, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&self, _event: &SchedulerEvent) {}
}

/// Escreve cada evento como JSON no nível `debug` do tracing.
#[derive(Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &SchedulerEvent) {
        match serde_json::to_string(event) {
            Ok(json) => tracing::debug!(target: "tasklet_scheduler::events", "{}", json),
            Err(e) => tracing::warn!(error = %e, "Falha ao serializar evento do escalonador"),
        }
    }
}

/// Acumula os eventos em memória — para testes e inspeção.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SchedulerEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cópia dos eventos registrados até agora.
    pub fn events(&self) -> Vec<SchedulerEvent> {
        self.events.lock().clone()
    }

    /// Remove e retorna os eventos registrados.
    pub fn drain(&self) -> Vec<SchedulerEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &SchedulerEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Um `Arc` de sink também é um sink — permite manter uma referência para
/// inspeção enquanto o escalonador possui a outra.
impl<S: EventSink + ?Sized> EventSink for std::sync::Arc<S> {
    fn emit(&self, event: &SchedulerEvent) {
        (**self).emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// O discriminador `type` aparece no JSON
    #[test]
    fn test_event_json_is_tagged() {
        let event = SchedulerEvent::Evicted {
            step: 3,
            population: PopulationKind::Events,
            count: 12,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "Evicted");
        assert_eq!(json["population"], "Events");
        assert_eq!(json["count"], 12);
    }

    #[test]
    fn test_recording_sink_drain() {
        let sink = RecordingSink::new();
        let event = SchedulerEvent::CycleStarted {
            step: 0,
            time: 1,
            events: 0,
            composites: 0,
        };
        sink.emit(&event);
        sink.emit(&event);
        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.drain().len(), 2);
        assert!(sink.events().is_empty());
    }
}
