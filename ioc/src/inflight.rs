//! Cross-thread bookkeeping for singletons that are being built.
//!
//! A single resolution stack only sees its own thread. When two threads build
//! singletons that need each other, each ends up blocked on the other's
//! `OnceCell`. The tracker keeps a wait-for graph (which thread builds which
//! singleton, which thread waits on which singleton) and refuses to block
//! when waiting would close a loop.

use crate::core::InjectionKey;
use crate::error::{Error, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::thread::{self, ThreadId};

/// Identity of a singleton provider: the address of its `Provider`.
pub(crate) type ProviderId = usize;

#[derive(Default)]
struct WaitGraph {
  builders: HashMap<ProviderId, (ThreadId, InjectionKey)>,
  waiting: HashMap<ThreadId, ProviderId>,
}

#[derive(Default)]
pub(crate) struct InFlight {
  graph: Mutex<WaitGraph>,
}

/// Held while the current thread builds or waits for one singleton. Dropping
/// it removes the thread's entries from the graph.
pub(crate) struct InFlightTicket<'t> {
  tracker: &'t InFlight,
  id: ProviderId,
  thread: ThreadId,
}

impl InFlight {
  /// Registers the current thread as builder of `id`, or as waiter on it if
  /// another thread is already building it.
  ///
  /// Fails with [`Error::CyclicDependency`] when the builder is, directly or
  /// through other threads, waiting on something this thread is building.
  pub(crate) fn enter(&self, id: ProviderId, key: &InjectionKey) -> Result<InFlightTicket<'_>> {
    let me = thread::current().id();
    let mut graph = self.graph.lock();

    let builder = graph.builders.get(&id).map(|(builder, _)| *builder);
    let Some(builder) = builder else {
      graph.builders.insert(id, (me, key.clone()));
      return Ok(self.ticket(id, me));
    };
    if builder == me {
      // Re-entry on the same thread is caught by the resolution stack.
      return Ok(self.ticket(id, me));
    }

    let mut chain = vec![key.type_name()];
    let mut current = builder;
    // Every hop visits a distinct builder entry, so this terminates.
    for _ in 0..graph.builders.len() {
      let Some(awaited) = graph.waiting.get(&current) else {
        break;
      };
      let Some((next, awaited_key)) = graph.builders.get(awaited) else {
        break;
      };
      chain.push(awaited_key.type_name());
      if *next == me {
        let mut path = vec![awaited_key.type_name()];
        path.extend(chain);
        tracing::warn!(
          capability = %key,
          "singletons built on different threads wait on each other"
        );
        return Err(Error::CyclicDependency { path });
      }
      current = *next;
    }
    graph.waiting.insert(me, id);

    Ok(self.ticket(id, me))
  }

  /// Takes over building `id`, after waiting on a builder that failed.
  pub(crate) fn claim(&self, id: ProviderId, key: &InjectionKey) {
    let me = thread::current().id();
    let mut graph = self.graph.lock();
    if graph.waiting.get(&me) == Some(&id) {
      graph.waiting.remove(&me);
    }
    graph.builders.insert(id, (me, key.clone()));
  }

  fn ticket(&self, id: ProviderId, thread: ThreadId) -> InFlightTicket<'_> {
    InFlightTicket {
      tracker: self,
      id,
      thread,
    }
  }

  #[cfg(test)]
  fn is_idle(&self) -> bool {
    let graph = self.graph.lock();
    graph.builders.is_empty() && graph.waiting.is_empty()
  }
}

impl Drop for InFlightTicket<'_> {
  fn drop(&mut self) {
    let mut graph = self.tracker.graph.lock();
    if graph.waiting.get(&self.thread) == Some(&self.id) {
      graph.waiting.remove(&self.thread);
    }
    if matches!(graph.builders.get(&self.id), Some((builder, _)) if *builder == self.thread) {
      graph.builders.remove(&self.id);
    }
  }
}
