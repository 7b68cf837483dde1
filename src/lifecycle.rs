use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

pub const REVEAL_DELAY_MS: u32 = 100;

pub fn reset_scroll() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// One-shot reveal timer. Dropping it before it fires cancels the callback.
pub struct RevealTimer {
    timeout: Timeout,
}

impl RevealTimer {
    pub fn schedule<F>(on_reveal: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            timeout: Timeout::new(REVEAL_DELAY_MS, on_reveal),
        }
    }

    pub fn cancel(self) {
        let _ = self.timeout.cancel();
    }
}

/// Scrolls to the top on mount and turns `true` once, `REVEAL_DELAY_MS` later.
#[hook]
pub fn use_reveal_on_mount() -> bool {
    let visible = use_state_eq(|| false);

    use_mount(reset_scroll);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let timer = RevealTimer::schedule(move || visible.set(true));
                move || timer.cancel()
            },
            (),
        );
    }

    *visible
}

/// Gate for the social proof counters.
///
/// `Pending` until the page is visible, `Armed` while visible without a
/// positive athlete count, `Triggered` once both hold. `Triggered` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CounterLatch {
    #[default]
    Pending,
    Armed,
    Triggered,
}

impl CounterLatch {
    pub fn observe(self, visible: bool, athletes_count: u32) -> Self {
        match (self, visible, athletes_count > 0) {
            (CounterLatch::Triggered, _, _) => CounterLatch::Triggered,
            (_, true, true) => CounterLatch::Triggered,
            (CounterLatch::Armed, _, _) | (CounterLatch::Pending, true, false) => CounterLatch::Armed,
            (CounterLatch::Pending, false, _) => CounterLatch::Pending,
        }
    }

    pub fn is_triggered(self) -> bool {
        self == CounterLatch::Triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_visibility_even_with_data() {
        let latch = CounterLatch::Pending.observe(false, 300);
        assert_eq!(latch, CounterLatch::Pending);
        assert_eq!(latch.observe(true, 300), CounterLatch::Triggered);
    }

    #[test]
    fn waits_for_positive_count_once_visible() {
        let latch = CounterLatch::Pending.observe(true, 0);
        assert_eq!(latch, CounterLatch::Armed);
        assert_eq!(latch.observe(true, 0), CounterLatch::Armed);
        assert_eq!(latch.observe(true, 150), CounterLatch::Triggered);
    }

    #[test]
    fn triggers_exactly_once_and_never_reverts() {
        let observations = [
            (false, 0),
            (true, 0),
            (true, 300),
            (true, 0),
            (false, 0),
            (true, 150),
        ];
        let mut latch = CounterLatch::default();
        let mut transitions = 0;
        for (visible, count) in observations {
            let next = latch.observe(visible, count);
            if next.is_triggered() && !latch.is_triggered() {
                transitions += 1;
            }
            if latch.is_triggered() {
                assert!(next.is_triggered());
            }
            latch = next;
        }
        assert_eq!(transitions, 1);
        assert!(latch.is_triggered());
    }

    #[test]
    fn armed_does_not_fall_back_to_pending() {
        assert_eq!(CounterLatch::Armed.observe(false, 0), CounterLatch::Armed);
    }
}
