use sentinel_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn unchanged_query_does_not_mark_dirty() {
    let state = AppState::new().with_query("banks");
    let (mut next, effects) = update(state, Msg::QueryChanged("banks".to_string()));

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
