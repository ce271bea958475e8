//! Scroll-triggered visibility for enter animations.
//!
//! A [`VisibilityTrigger`] owns at most one observation against an
//! [`IntersectionFacility`] and keeps a single `is_visible` flag in sync with
//! the latest intersection event. The browser facility is backed by
//! `IntersectionObserver`. [`use_visibility_state`] keeps one
//! [`VisibilityBinding`] per mounted component and reconfigures it in place
//! when the options change; [`use_intersection_observer`] reduces that state
//! to a visible flag.

use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the region that has to be visible, in `[0, 1]`.
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px".to_string(),
        }
    }
}

impl VisibilityOptions {
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn root_margin(mut self, root_margin: impl Into<String>) -> Self {
        self.root_margin = root_margin.into();
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FacilityError {
    #[error("viewport intersection is not available in this environment")]
    Unsupported,
    #[error("intersection observer rejected the options: {0}")]
    Rejected(String),
}

/// Host service that reports when a region intersects the viewport.
pub trait IntersectionFacility {
    type Region: Clone;
    type Observation;

    fn observe(
        &self,
        region: &Self::Region,
        options: &VisibilityOptions,
        on_entry: Rc<dyn Fn(bool)>,
    ) -> Result<Self::Observation, FacilityError>;

    fn unobserve(&self, observation: Self::Observation);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObservationState {
    Unobserved,
    Observed { visible: bool },
}

struct ActiveObservation<O> {
    observation: O,
    // Cleared on teardown so late callbacks are dropped.
    live: Rc<Cell<bool>>,
}

pub struct VisibilityTrigger<F: IntersectionFacility> {
    facility: F,
    options: VisibilityOptions,
    region: Option<F::Region>,
    active: Option<ActiveObservation<F::Observation>>,
    visible: Rc<Cell<bool>>,
    on_change: Rc<dyn Fn(bool)>,
}

impl<F: IntersectionFacility> VisibilityTrigger<F> {
    pub fn new(facility: F, options: VisibilityOptions, on_change: impl Fn(bool) + 'static) -> Self {
        Self {
            facility,
            options,
            region: None,
            active: None,
            visible: Rc::new(Cell::new(false)),
            on_change: Rc::new(on_change),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn is_observing(&self) -> bool {
        self.active.is_some()
    }

    pub fn state(&self) -> ObservationState {
        if self.active.is_some() {
            ObservationState::Observed {
                visible: self.visible.get(),
            }
        } else {
            ObservationState::Unobserved
        }
    }

    /// Starts observing `region`, replacing any previous observation.
    pub fn attach(&mut self, region: F::Region) {
        self.release();
        self.region = Some(region);
        self.establish();
    }

    /// Applies new options. An active observation is released and
    /// re-registered once; identical options are a no-op.
    pub fn reconfigure(&mut self, options: VisibilityOptions) {
        if options == self.options {
            return;
        }
        self.options = options;
        if self.active.is_some() {
            self.release();
            self.establish();
        }
    }

    /// Releases the observation and forgets the region.
    pub fn teardown(&mut self) {
        self.release();
        self.region = None;
    }

    fn release(&mut self) {
        if let Some(active) = self.active.take() {
            active.live.set(false);
            self.facility.unobserve(active.observation);
        }
    }

    fn establish(&mut self) {
        let Some(region) = self.region.as_ref() else {
            return;
        };
        self.set_visible(false);

        let live = Rc::new(Cell::new(true));
        let on_entry: Rc<dyn Fn(bool)> = {
            let live = live.clone();
            let visible = self.visible.clone();
            let on_change = self.on_change.clone();
            Rc::new(move |intersecting: bool| {
                if !live.get() {
                    return;
                }
                visible.set(intersecting);
                on_change(intersecting);
            })
        };

        match self.facility.observe(region, &self.options, on_entry) {
            Ok(observation) => {
                self.active = Some(ActiveObservation { observation, live });
            }
            Err(e) => {
                warn!("Visibility observation disabled: {}", e);
            }
        }
    }

    fn set_visible(&self, visible: bool) {
        if self.visible.replace(visible) != visible {
            (self.on_change)(visible);
        }
    }
}

impl<F: IntersectionFacility> Drop for VisibilityTrigger<F> {
    fn drop(&mut self) {
        self.release();
    }
}

/// `IntersectionObserver` backed facility.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserIntersection;

pub struct BrowserObservation {
    observer: IntersectionObserver,
    element: Element,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl BrowserIntersection {
    pub fn is_available() -> bool {
        web_sys::window()
            .map(|window| {
                Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
            })
            .unwrap_or(false)
    }
}

impl IntersectionFacility for BrowserIntersection {
    type Region = Element;
    type Observation = BrowserObservation;

    fn observe(
        &self,
        region: &Element,
        options: &VisibilityOptions,
        on_entry: Rc<dyn Fn(bool)>,
    ) -> Result<BrowserObservation, FacilityError> {
        if !Self::is_available() {
            return Err(FacilityError::Unsupported);
        }

        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            // One target per observer; a batch only matters for its newest entry.
            let latest = entries.iter().last();
            if let Some(entry) = latest.and_then(|e| e.dyn_into::<IntersectionObserverEntry>().ok()) {
                on_entry(entry.is_intersecting());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| FacilityError::Rejected(format!("{:?}", e)))?;
        observer.observe(region);

        Ok(BrowserObservation {
            observer,
            element: region.clone(),
            _callback: callback,
        })
    }

    fn unobserve(&self, observation: BrowserObservation) {
        observation.observer.unobserve(&observation.element);
        observation.observer.disconnect();
    }
}

/// A trigger owned by one mounted caller. Every state change, including the
/// reset to not visible on re-registration, is reported through `publish`.
pub struct VisibilityBinding<F: IntersectionFacility> {
    trigger: VisibilityTrigger<F>,
    publish: Rc<dyn Fn(ObservationState)>,
}

impl<F: IntersectionFacility> VisibilityBinding<F> {
    pub fn new(
        facility: F,
        options: VisibilityOptions,
        region: Option<F::Region>,
        publish: impl Fn(ObservationState) + 'static,
    ) -> Self {
        let publish: Rc<dyn Fn(ObservationState)> = Rc::new(publish);
        let trigger = {
            let publish = publish.clone();
            VisibilityTrigger::new(facility, options, move |visible| {
                publish(ObservationState::Observed { visible })
            })
        };
        let mut binding = Self { trigger, publish };
        if let Some(region) = region {
            binding.trigger.attach(region);
        }
        binding.publish_state();
        binding
    }

    pub fn reconfigure(&mut self, options: VisibilityOptions) {
        self.trigger.reconfigure(options);
        self.publish_state();
    }

    pub fn teardown(&mut self) {
        self.trigger.teardown();
    }

    pub fn state(&self) -> ObservationState {
        self.trigger.state()
    }

    fn publish_state(&self) {
        (self.publish)(self.trigger.state());
    }
}

/// Observation state of one element. `None` until the first effect has run;
/// `Some(Unobserved)` when observation could not be established.
#[hook]
pub fn use_visibility_state(options: VisibilityOptions) -> (NodeRef, Option<ObservationState>) {
    let node = use_node_ref();
    let state = use_state_eq(|| None::<ObservationState>);
    let binding = use_mut_ref(|| None::<VisibilityBinding<BrowserIntersection>>);

    // One binding per mount, released on unmount.
    {
        let node = node.clone();
        let state = state.clone();
        let binding = binding.clone();
        let options = options.clone();
        use_effect_with_deps(
            move |_| {
                let region = node.cast::<Element>();
                *binding.borrow_mut() = Some(VisibilityBinding::new(
                    BrowserIntersection,
                    options,
                    region,
                    move |s| state.set(Some(s)),
                ));
                move || {
                    if let Some(mut active) = binding.borrow_mut().take() {
                        active.teardown();
                    }
                }
            },
            (),
        );
    }

    {
        let binding = binding.clone();
        use_effect_with_deps(
            move |options: &VisibilityOptions| {
                if let Some(active) = binding.borrow_mut().as_mut() {
                    active.reconfigure(options.clone());
                }
                || ()
            },
            options,
        );
    }

    (node, *state)
}

/// Returns a node ref to attach to one element and whether that element is
/// currently in view.
#[hook]
pub fn use_intersection_observer(options: VisibilityOptions) -> (NodeRef, bool) {
    let (node, state) = use_visibility_state(options);
    (node, state == Some(ObservationState::Observed { visible: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Observe(u32, &'static str, VisibilityOptions),
        Unobserve(u32),
    }

    #[derive(Clone, Default)]
    struct FakeFacility {
        calls: Rc<RefCell<Vec<Call>>>,
        callbacks: Rc<RefCell<Vec<(u32, Rc<dyn Fn(bool)>)>>>,
        next_id: Rc<Cell<u32>>,
        unsupported: bool,
    }

    impl FakeFacility {
        fn fire(&self, id: u32, intersecting: bool) {
            let callback = self
                .callbacks
                .borrow()
                .iter()
                .find(|(cb_id, _)| *cb_id == id)
                .map(|(_, cb)| cb.clone());
            if let Some(callback) = callback {
                callback(intersecting);
            }
        }

        fn fire_latest(&self, intersecting: bool) {
            let id = self.next_id.get() - 1;
            self.fire(id, intersecting);
        }

        fn active_count(&self) -> i32 {
            self.calls.borrow().iter().fold(0, |acc, call| match call {
                Call::Observe(..) => acc + 1,
                Call::Unobserve(_) => acc - 1,
            })
        }
    }

    impl IntersectionFacility for FakeFacility {
        type Region = &'static str;
        type Observation = u32;

        fn observe(
            &self,
            region: &&'static str,
            options: &VisibilityOptions,
            on_entry: Rc<dyn Fn(bool)>,
        ) -> Result<u32, FacilityError> {
            if self.unsupported {
                return Err(FacilityError::Unsupported);
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.calls.borrow_mut().push(Call::Observe(id, region, options.clone()));
            self.callbacks.borrow_mut().push((id, on_entry));
            Ok(id)
        }

        fn unobserve(&self, observation: u32) {
            self.calls.borrow_mut().push(Call::Unobserve(observation));
        }
    }

    fn trigger(facility: &FakeFacility, options: VisibilityOptions) -> VisibilityTrigger<FakeFacility> {
        VisibilityTrigger::new(facility.clone(), options, |_| {})
    }

    #[test]
    fn defaults_match_the_platform_defaults() {
        let options = VisibilityOptions::default();
        assert_eq!(options.threshold, 0.0);
        assert_eq!(options.root_margin, "0px");
    }

    #[test]
    fn nothing_is_observed_until_a_region_is_attached() {
        let facility = FakeFacility::default();
        let mut trigger = trigger(&facility, VisibilityOptions::default());

        assert_eq!(trigger.state(), ObservationState::Unobserved);
        assert!(!trigger.is_visible());

        trigger.reconfigure(VisibilityOptions::with_threshold(0.5));
        trigger.teardown();
        assert!(facility.calls.borrow().is_empty());
        assert!(!trigger.is_visible());
    }

    #[test]
    fn follows_each_intersection_event_for_any_threshold() {
        for threshold in [0.0, 0.1, 0.25, 0.5, 1.0] {
            let facility = FakeFacility::default();
            let mut trigger = trigger(&facility, VisibilityOptions::with_threshold(threshold));
            trigger.attach("section");

            facility.fire_latest(true);
            assert_eq!(trigger.state(), ObservationState::Observed { visible: true });
            facility.fire_latest(false);
            assert_eq!(trigger.state(), ObservationState::Observed { visible: false });
        }
    }

    #[test]
    fn scroll_in_scroll_out_then_unmount_ignores_late_callbacks() {
        let facility = FakeFacility::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut trigger = {
            let seen = seen.clone();
            VisibilityTrigger::new(facility.clone(), VisibilityOptions::with_threshold(0.1), move |v| {
                seen.borrow_mut().push(v)
            })
        };
        trigger.attach("benefits");

        facility.fire(0, true);
        assert!(trigger.is_visible());
        facility.fire(0, false);
        assert!(!trigger.is_visible());

        trigger.teardown();
        assert_eq!(facility.calls.borrow().last(), Some(&Call::Unobserve(0)));

        facility.fire(0, true);
        assert!(!trigger.is_visible());
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn teardown_unregisters_exactly_once() {
        let facility = FakeFacility::default();
        let mut trigger = trigger(&facility, VisibilityOptions::default());
        trigger.attach("steps");
        trigger.teardown();
        trigger.teardown();
        drop(trigger);

        let unobserves = facility
            .calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Unobserve(_)))
            .count();
        assert_eq!(unobserves, 1);
    }

    #[test]
    fn dropping_the_trigger_releases_the_observation() {
        let facility = FakeFacility::default();
        {
            let mut trigger = trigger(&facility, VisibilityOptions::default());
            trigger.attach("steps");
            assert_eq!(facility.active_count(), 1);
        }
        assert_eq!(facility.active_count(), 0);
    }

    #[test]
    fn reattaching_after_teardown_starts_fresh() {
        let facility = FakeFacility::default();
        let mut trigger = trigger(&facility, VisibilityOptions::default());
        trigger.attach("hero");
        facility.fire(0, true);
        trigger.teardown();

        trigger.attach("hero");
        assert_eq!(trigger.state(), ObservationState::Observed { visible: false });
        facility.fire(0, true);
        assert!(!trigger.is_visible());
        facility.fire(1, true);
        assert!(trigger.is_visible());
    }

    #[test]
    fn changing_options_reregisters_once_with_new_values() {
        let facility = FakeFacility::default();
        let mut trigger = trigger(&facility, VisibilityOptions::with_threshold(0.1));
        trigger.attach("testimonials");
        facility.fire(0, true);

        let updated = VisibilityOptions::with_threshold(0.5).root_margin("0px 0px -50px 0px");
        trigger.reconfigure(updated.clone());

        assert_eq!(
            *facility.calls.borrow(),
            vec![
                Call::Observe(0, "testimonials", VisibilityOptions::with_threshold(0.1)),
                Call::Unobserve(0),
                Call::Observe(1, "testimonials", updated.clone()),
            ]
        );
        assert_eq!(facility.active_count(), 1);
        assert!(!trigger.is_visible());

        trigger.reconfigure(updated);
        assert_eq!(facility.calls.borrow().len(), 3);
    }

    #[test]
    fn callers_track_visibility_independently() {
        let facility = FakeFacility::default();
        let mut benefits = trigger(&facility, VisibilityOptions::with_threshold(0.1));
        let mut steps = trigger(&facility, VisibilityOptions::with_threshold(0.6));
        benefits.attach("benefits");
        steps.attach("steps");

        facility.fire(0, true);
        assert!(benefits.is_visible());
        assert!(!steps.is_visible());

        facility.fire(1, true);
        facility.fire(0, false);
        assert!(!benefits.is_visible());
        assert!(steps.is_visible());
    }

    #[test]
    fn missing_facility_leaves_visibility_false() {
        let facility = FakeFacility {
            unsupported: true,
            ..FakeFacility::default()
        };
        let mut trigger = trigger(&facility, VisibilityOptions::default());
        trigger.attach("benefits");

        assert_eq!(trigger.state(), ObservationState::Unobserved);
        assert!(!trigger.is_observing());
        assert!(!trigger.is_visible());
        trigger.teardown();
        assert!(facility.calls.borrow().is_empty());
    }

    #[test]
    fn root_margin_change_alone_reregisters() {
        let facility = FakeFacility::default();
        let mut trigger = trigger(&facility, VisibilityOptions::with_threshold(0.1));
        trigger.attach("steps");

        let widened = VisibilityOptions::with_threshold(0.1).root_margin("100px");
        trigger.reconfigure(widened.clone());

        assert!(trigger.is_observing());
        assert_eq!(
            facility.calls.borrow()[1..],
            [Call::Unobserve(0), Call::Observe(1, "steps", widened)]
        );
    }

    fn binding(
        facility: &FakeFacility,
        options: VisibilityOptions,
        region: Option<&'static str>,
    ) -> (VisibilityBinding<FakeFacility>, Rc<RefCell<Vec<ObservationState>>>) {
        let published = Rc::new(RefCell::new(Vec::new()));
        let binding = {
            let published = published.clone();
            VisibilityBinding::new(facility.clone(), options, region, move |s| {
                published.borrow_mut().push(s)
            })
        };
        (binding, published)
    }

    #[test]
    fn caller_state_resets_when_options_change() {
        let facility = FakeFacility::default();
        let (mut binding, published) = binding(&facility, VisibilityOptions::with_threshold(0.1), Some("section"));
        facility.fire(0, true);
        assert_eq!(published.borrow().last(), Some(&ObservationState::Observed { visible: true }));

        binding.reconfigure(VisibilityOptions::with_threshold(0.1).root_margin("-50px"));
        assert_eq!(published.borrow().last(), Some(&ObservationState::Observed { visible: false }));
        assert_eq!(facility.active_count(), 1);

        facility.fire(0, true);
        assert_eq!(published.borrow().last(), Some(&ObservationState::Observed { visible: false }));
        facility.fire(1, true);
        assert_eq!(binding.state(), ObservationState::Observed { visible: true });
    }

    #[test]
    fn caller_learns_when_observation_is_unavailable() {
        let facility = FakeFacility {
            unsupported: true,
            ..FakeFacility::default()
        };
        let (_binding, published) = binding(&facility, VisibilityOptions::default(), Some("benefits"));
        assert_eq!(*published.borrow(), vec![ObservationState::Unobserved]);

        let facility = FakeFacility::default();
        let (_binding, published) = binding(&facility, VisibilityOptions::default(), None);
        assert_eq!(*published.borrow(), vec![ObservationState::Unobserved]);
        assert!(facility.calls.borrow().is_empty());
    }

    #[test]
    fn binding_teardown_releases_once() {
        let facility = FakeFacility::default();
        let (mut binding, _) = binding(&facility, VisibilityOptions::default(), Some("testimonials"));
        binding.teardown();
        drop(binding);
        assert_eq!(facility.active_count(), 0);
        assert_eq!(facility.calls.borrow().len(), 2);
    }
}
