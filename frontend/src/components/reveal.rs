use crate::hooks::visibility::ObservationState;

/// Class for a section item that animates in once its section is visible.
/// Items stay visible and unanimated when observation could not be set up.
pub fn reveal_class(state: Option<ObservationState>) -> &'static str {
    match state {
        Some(ObservationState::Observed { visible: true }) => "animate-fade-in",
        Some(ObservationState::Unobserved) => "",
        Some(ObservationState::Observed { visible: false }) | None => "reveal-hidden",
    }
}

pub fn stagger(index: usize, step_secs: f64) -> String {
    format!("animation-delay: {:.2}s;", index as f64 * step_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_grow_with_position() {
        assert_eq!(stagger(0, 0.1), "animation-delay: 0.00s;");
        assert_eq!(stagger(3, 0.1), "animation-delay: 0.30s;");
        assert_eq!(stagger(2, 0.2), "animation-delay: 0.40s;");
    }

    #[test]
    fn visible_items_animate() {
        assert_eq!(reveal_class(Some(ObservationState::Observed { visible: true })), "animate-fade-in");
    }

    #[test]
    fn items_wait_hidden_while_observed_off_screen() {
        assert_eq!(reveal_class(Some(ObservationState::Observed { visible: false })), "reveal-hidden");
        assert_eq!(reveal_class(None), "reveal-hidden");
    }

    #[test]
    fn failed_observation_never_hides_items() {
        assert_eq!(reveal_class(Some(ObservationState::Unobserved)), "");
    }
}
