use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    current: Option<ToastMessage>,
    next_id: u32,
}

pub enum ToastAction {
    Show(ToastKind, String),
    Dismiss(u32),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show(kind, text) => Rc::new(ToastState {
                current: Some(ToastMessage { id: self.next_id, kind, text }),
                next_id: self.next_id + 1,
            }),
            // A newer toast may already have replaced this one.
            ToastAction::Dismiss(id) if self.current.as_ref().map(|t| t.id) == Some(id) => Rc::new(ToastState {
                current: None,
                next_id: self.next_id,
            }),
            ToastAction::Dismiss(_) => self,
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toaster(UseReducerHandle<ToastState>);

impl Toaster {
    pub fn success(&self, text: impl Into<String>) {
        self.0.dispatch(ToastAction::Show(ToastKind::Success, text.into()));
    }

    pub fn error(&self, text: impl Into<String>) {
        self.0.dispatch(ToastAction::Show(ToastKind::Error, text.into()));
    }
}

#[hook]
pub fn use_toast() -> Toaster {
    use_context::<Toaster>().expect("use_toast called outside ToastProvider")
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component]
pub fn ToastProvider(props: &ToastProviderProps) -> Html {
    let state = use_reducer(ToastState::default);
    let current = state.current.clone();

    {
        let state = state.clone();
        use_effect_with_deps(
            move |current: &Option<ToastMessage>| {
                let timeout = current.as_ref().map(|toast| {
                    let id = toast.id;
                    Timeout::new(TOAST_DURATION_MS, move || state.dispatch(ToastAction::Dismiss(id)))
                });
                // Dropping the timeout cancels it.
                move || drop(timeout)
            },
            current.clone(),
        );
    }

    let on_close = {
        let state = state.clone();
        let id = current.as_ref().map(|t| t.id);
        Callback::from(move |_: MouseEvent| {
            if let Some(id) = id {
                state.dispatch(ToastAction::Dismiss(id));
            }
        })
    };

    html! {
        <ContextProvider<Toaster> context={Toaster(state.clone())}>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 2rem;
                        right: 2rem;
                        z-index: 10001;
                        max-width: 360px;
                        padding: 1rem 1.25rem;
                        border-radius: 12px;
                        background: #ffffff;
                        box-shadow: 0 16px 32px rgba(0,0,0,0.15);
                        display: flex;
                        gap: 0.75rem;
                        align-items: flex-start;
                        animation: fadeIn 0.4s ease-out forwards;
                        cursor: pointer;
                    }
                    .toast.success { border-left: 4px solid #22c55e; }
                    .toast.error { border-left: 4px solid #FF6B6B; }
                "#}
            </style>
            { for props.children.iter() }
            if let Some(toast) = current {
                <div
                    class={classes!("toast", match toast.kind { ToastKind::Success => "success", ToastKind::Error => "error" })}
                    onclick={on_close}
                    role="status"
                >
                    <span>{ if toast.kind == ToastKind::Success { "✅" } else { "⚠️" } }</span>
                    <span>{ toast.text }</span>
                </div>
            }
        </ContextProvider<Toaster>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_toast_survives_dismissal_of_older_one() {
        let state = Rc::new(ToastState::default())
            .reduce(ToastAction::Show(ToastKind::Success, "Signed in".into()))
            .reduce(ToastAction::Show(ToastKind::Error, "Trip not found".into()))
            .reduce(ToastAction::Dismiss(0));
        assert_eq!(state.current.as_ref().map(|t| t.text.as_str()), Some("Trip not found"));

        let state = state.reduce(ToastAction::Dismiss(1));
        assert!(state.current.is_none());
    }
}
