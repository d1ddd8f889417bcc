use sentinel_core::{update, AppState, AppViewModel, Effect, Msg};
use sentinel_logging::{sentinel_debug, sentinel_warn};

/// Receives a fresh view model every time the state changes visibly.
pub trait ViewObserver {
    fn on_view(&mut self, view: &AppViewModel);
}

/// Executes the effects returned by `update`.
pub trait EffectSink {
    fn apply(&mut self, effect: Effect);
}

/// Single owner of the session state. Every mutation goes through `dispatch`.
pub struct Store {
    state: AppState,
    observers: Vec<Box<dyn ViewObserver>>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn ViewObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, msg: Msg, effects: &mut dyn EffectSink) {
        if matches!(msg, Msg::SubmitClicked) && self.state.is_loading() {
            sentinel_warn!("submit ignored: an analysis is already running");
        }

        let state = std::mem::take(&mut self.state);
        let (mut state, pending) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = was_dirty.then(|| state.view());
        self.state = state;

        // Render first: effects such as ScrollLogToBottom act on what is shown.
        if let Some(view) = view {
            for observer in &mut self.observers {
                observer.on_view(&view);
            }
        }

        for effect in pending {
            sentinel_debug!("effect {:?}", effect);
            effects.apply(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use sentinel_core::{AnalysisResult, Decision, SessionState};

    use super::*;

    #[derive(Clone, Default)]
    struct Recorder {
        views: Rc<RefCell<Vec<AppViewModel>>>,
    }

    impl ViewObserver for Recorder {
        fn on_view(&mut self, view: &AppViewModel) {
            self.views.borrow_mut().push(view.clone());
        }
    }

    #[derive(Default)]
    struct CollectEffects(Vec<Effect>);

    impl EffectSink for CollectEffects {
        fn apply(&mut self, effect: Effect) {
            self.0.push(effect);
        }
    }

    #[test]
    fn observers_see_each_visible_change() {
        let recorder = Recorder::default();
        let mut store = Store::new(AppState::new());
        store.subscribe(Box::new(recorder.clone()));
        let mut effects = CollectEffects::default();

        store.dispatch(Msg::QueryChanged("banks".to_string()), &mut effects);
        store.dispatch(Msg::SubmitClicked, &mut effects);
        store.dispatch(Msg::NoOp, &mut effects);

        let views = recorder.views.borrow();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].query, "banks");
        assert_eq!(views[1].session, SessionState::Loading);
        assert!(views[1].show_cursor);
        assert_eq!(effects.0.len(), 3);
    }

    /// Observer and effect sink writing into one shared timeline.
    #[derive(Clone, Default)]
    struct Timeline {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl ViewObserver for Timeline {
        fn on_view(&mut self, view: &AppViewModel) {
            self.events
                .borrow_mut()
                .push(format!("render lines={}", view.lines.len()));
        }
    }

    impl EffectSink for Timeline {
        fn apply(&mut self, effect: Effect) {
            if effect == Effect::ScrollLogToBottom {
                self.events.borrow_mut().push("scroll".to_string());
            }
        }
    }

    #[test]
    fn scroll_runs_after_the_revealed_line_is_rendered() {
        let timeline = Timeline::default();
        let mut store = Store::new(AppState::new());
        store.subscribe(Box::new(timeline.clone()));
        let mut sink = timeline.clone();

        store.dispatch(Msg::SubmitClicked, &mut sink);
        timeline.events.borrow_mut().clear();
        store.dispatch(Msg::RevealDue { feed_id: 1 }, &mut sink);

        assert_eq!(
            *timeline.events.borrow(),
            vec!["render lines=1".to_string(), "scroll".to_string()]
        );
    }

    #[test]
    fn resubmit_while_loading_emits_nothing() {
        let mut store = Store::new(AppState::new());
        let mut effects = CollectEffects::default();
        store.dispatch(Msg::SubmitClicked, &mut effects);
        let first = effects.0.len();

        store.dispatch(Msg::SubmitClicked, &mut effects);
        assert_eq!(effects.0.len(), first);
        assert!(store.state().is_loading());
    }

    #[test]
    fn settles_to_idle_with_results() {
        let recorder = Recorder::default();
        let mut store = Store::new(AppState::new());
        store.subscribe(Box::new(recorder.clone()));
        let mut effects = CollectEffects::default();

        store.dispatch(Msg::SubmitClicked, &mut effects);
        store.dispatch(
            Msg::AnalysisSucceeded {
                request_id: 1,
                results: Some(vec![AnalysisResult {
                    ticker: "NVDA".to_string(),
                    decision: Decision::Justified,
                    decision_label: "Justified".to_string(),
                    confidence: 87,
                    summary: "...".to_string(),
                }]),
            },
            &mut effects,
        );

        assert!(!store.state().is_loading());
        let last = recorder.views.borrow().last().cloned().unwrap();
        assert_eq!(last.results.len(), 1);
        assert!(last.submit_enabled);
    }
}
