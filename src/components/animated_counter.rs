use yew::prelude::*;

use crate::animation::{CounterAnimation, DEFAULT_DURATION_MS};
use crate::frame_loop::FrameLoop;

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: u32,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration: u32,
    #[prop_or_default]
    pub suffix: String,
    /// Counter stays frozen at 0 until this is set.
    pub active: bool,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let count = use_state_eq(|| 0u32);

    {
        let count = count.clone();
        use_effect_with_deps(
            move |&(end, duration, active)| {
                count.set(0);
                let frames = active.then(|| {
                    let mut animation = CounterAnimation::new(end, duration);
                    FrameLoop::start(move |now| {
                        let frame = animation.step(now);
                        count.set(frame.value);
                        !frame.finished
                    })
                });
                // Unmount or new inputs cancel the running loop.
                move || drop(frames)
            },
            (props.end, props.duration, props.active),
        );
    }

    html! {
        <span class="animated-counter">{ *count }{ props.suffix.clone() }</span>
    }
}
