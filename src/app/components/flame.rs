//! Decorative shadow-flame overlay for the hero section.

use dioxus::prelude::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    /// Number of flame particles rendered at this intensity.
    pub fn flame_count(self) -> usize {
        match self {
            Intensity::Low => 5,
            Intensity::Medium => 8,
            Intensity::High => 12,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct FlameEffectProps {
    #[props(default = Intensity::Medium)]
    pub intensity: Intensity,
}

/// Renders a handful of animated flame particles. Positions and delays are
/// randomized once per mount so the effect does not shuffle on re-render.
#[component]
pub fn FlameEffect(props: FlameEffectProps) -> Element {
    let flames = use_hook(|| {
        let mut rng = rand::thread_rng();
        (0..props.intensity.flame_count())
            .map(|_| {
                let left: f32 = rng.gen_range(0.0..100.0);
                let delay: f32 = rng.gen_range(0.0..3.0);
                let scale: f32 = rng.gen_range(0.6..1.4);
                format!(
                    "left: {left:.1}%; animation-delay: {delay:.2}s; transform: scale({scale:.2})"
                )
            })
            .collect::<Vec<_>>()
    });

    rsx! {
        div { class: "flame-field", aria_hidden: "true",
            for (i, style) in flames.iter().enumerate() {
                span { key: "{i}", class: "flame", style: "{style}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flame_count_scales_with_intensity() {
        assert!(Intensity::Low.flame_count() < Intensity::Medium.flame_count());
        assert!(Intensity::Medium.flame_count() < Intensity::High.flame_count());
    }
}
