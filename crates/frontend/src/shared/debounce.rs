use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Generation counter behind the debouncer: only the latest armed call may run.
#[derive(Debug, Default)]
pub struct DebounceGate {
    generation: Cell<u64>,
}

impl DebounceGate {
    pub fn arm(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }
}

/// Runs the last scheduled callback once `delay_ms` passed without a newer call.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    gate: Rc<DebounceGate>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            gate: Rc::new(DebounceGate::default()),
        }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        let generation = self.gate.arm();
        let gate = self.gate.clone();
        let delay = self.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if gate.is_current(generation) {
                f();
            }
        });
    }
}
