use std::collections::VecDeque;

use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::events::EventListenerGuard;

pub const TRAIL_LENGTH: usize = 8;
const INTERACTIVE: &str = "a, button, [role=\"button\"], .cursor-pointer";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub id: u64,
    pub x: i32,
    pub y: i32,
}

/// Most recent pointer positions, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CursorTrail {
    points: VecDeque<TrailPoint>,
    next_id: u64,
}

impl CursorTrail {
    pub fn push(&mut self, x: i32, y: i32) {
        self.points.push_back(TrailPoint { id: self.next_id, x, y });
        self.next_id += 1;
        while self.points.len() > TRAIL_LENGTH {
            self.points.pop_front();
        }
    }

    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Older points fade and shrink; the newest is at full scale.
    pub fn scale(&self, index: usize) -> f64 {
        (index + 1) as f64 / self.points.len().max(1) as f64
    }

    pub fn opacity(&self, index: usize) -> f64 {
        self.scale(index) * 0.3
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct CursorState {
    x: i32,
    y: i32,
    hovering: bool,
    clicking: bool,
    trail: CursorTrail,
}

fn is_interactive(event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .map_or(false, |el| el.matches(INTERACTIVE).unwrap_or(false))
}

#[function_component(AnimatedCursor)]
pub fn animated_cursor() -> Html {
    let state = use_state(CursorState::default);
    // Listeners read the latest state through this ref instead of a stale capture.
    let latest = use_mut_ref(CursorState::default);

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let update = {
                    let state = state.clone();
                    let latest = latest.clone();
                    move |apply: &dyn Fn(&mut CursorState)| {
                        let mut current = latest.borrow_mut();
                        apply(&mut current);
                        state.set(current.clone());
                    }
                };
                let update = std::rc::Rc::new(update);

                let listeners = vec![
                    {
                        let update = update.clone();
                        EventListenerGuard::on_document("mousemove", move |e| {
                            if let Some(e) = e.dyn_ref::<MouseEvent>() {
                                let (x, y) = (e.client_x(), e.client_y());
                                update(&|s: &mut CursorState| {
                                    s.x = x;
                                    s.y = y;
                                    s.trail.push(x, y);
                                });
                            }
                        })
                    },
                    {
                        let update = update.clone();
                        EventListenerGuard::on_document("mousedown", move |_| update(&|s: &mut CursorState| s.clicking = true))
                    },
                    {
                        let update = update.clone();
                        EventListenerGuard::on_document("mouseup", move |_| update(&|s: &mut CursorState| s.clicking = false))
                    },
                    {
                        let update = update.clone();
                        EventListenerGuard::on_document("mouseover", move |e| {
                            if is_interactive(&e) {
                                update(&|s: &mut CursorState| s.hovering = true);
                            }
                        })
                    },
                    {
                        let update = update.clone();
                        EventListenerGuard::on_document("mouseout", move |e| {
                            if is_interactive(&e) {
                                update(&|s: &mut CursorState| s.hovering = false);
                            }
                        })
                    },
                ];

                move || drop(listeners)
            },
            (),
        );
    }

    let ring_class = if state.hovering {
        "cursor-ring hovering"
    } else if state.clicking {
        "cursor-ring clicking"
    } else {
        "cursor-ring"
    };

    html! {
        <>
            <style>
                {r#"
                    .cursor-trail {
                        position: fixed;
                        pointer-events: none;
                        z-index: 9999;
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #FF6B6B, #FFD93D);
                        transition: opacity 0.3s ease-out, transform 0.3s ease-out;
                    }
                    .cursor-ring {
                        position: fixed;
                        pointer-events: none;
                        z-index: 10000;
                        width: 32px;
                        height: 32px;
                        border-radius: 50%;
                        border: 2px solid #FFD93D;
                        background: rgba(255, 217, 61, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: transform 0.2s ease-out, border-color 0.3s, background 0.3s;
                    }
                    .cursor-ring.hovering {
                        transform: scale(1.5);
                        border-color: #FF6B6B;
                        background: rgba(255, 107, 107, 0.2);
                    }
                    .cursor-ring.clicking { transform: scale(0.75); }
                    .cursor-ripple {
                        position: fixed;
                        pointer-events: none;
                        z-index: 9998;
                        width: 64px;
                        height: 64px;
                        border-radius: 50%;
                        border: 2px solid #FF6B6B;
                        animation: ping 0.8s cubic-bezier(0, 0, 0.2, 1) infinite;
                    }
                    @keyframes ping {
                        75%, 100% { transform: scale(2); opacity: 0; }
                    }
                    @media (hover: none) {
                        .cursor-trail, .cursor-ring, .cursor-ripple { display: none; }
                    }
                "#}
            </style>
            { for state.trail.points().enumerate().map(|(i, point)| html! {
                <div
                    key={point.id.to_string()}
                    class="cursor-trail"
                    style={format!(
                        "left: {}px; top: {}px; opacity: {:.3}; transform: scale({:.3});",
                        point.x - 4, point.y - 4, state.trail.opacity(i), state.trail.scale(i)
                    )}
                />
            }) }
            <div class={ring_class} style={format!("left: {}px; top: {}px;", state.x - 16, state.y - 16)}>
                <span style="font-size: 10px;">{ if state.hovering { "📍" } else { "✈️" } }</span>
            </div>
            if state.clicking {
                <div class="cursor-ripple" style={format!("left: {}px; top: {}px;", state.x - 32, state.y - 32)} />
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_last_eight_points() {
        let mut trail = CursorTrail::default();
        for i in 0..12 {
            trail.push(i, i * 2);
        }
        assert_eq!(trail.len(), TRAIL_LENGTH);
        let first = trail.points().next().copied().unwrap();
        assert_eq!((first.id, first.x, first.y), (4, 4, 8));
    }

    #[test]
    fn newest_point_is_full_size() {
        let mut trail = CursorTrail::default();
        trail.push(0, 0);
        trail.push(1, 1);
        assert_eq!(trail.scale(1), 1.0);
        assert_eq!(trail.scale(0), 0.5);
        assert!((trail.opacity(1) - 0.3).abs() < f64::EPSILON);
    }
}
