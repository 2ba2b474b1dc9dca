//! Tests for moves, jumps and the move list over the game timeline.

use rewind_tictactoe::{
    GameState, Phase, Player, SortOrder, Status, build_move_list, order_for_display,
};

fn play(cells: &[usize]) -> GameState {
    cells
        .iter()
        .fold(GameState::new(), |state, cell| state.apply_move(*cell))
}

#[test]
fn test_lifecycle() {
    let state = GameState::new();
    assert_eq!(state.next_player(), Player::X);
    assert_eq!(state.phase(), Phase::InProgress);

    let state = state.apply_move(4);
    assert_eq!(state.next_player(), Player::O);
    assert_eq!(state.step(), 1);
    assert_eq!(state.history().len(), 2);
}

#[test]
fn test_occupied_square_is_noop() {
    let state = play(&[4]);
    let before = state.clone();
    assert_eq!(state.apply_move(4), before);
}

#[test]
fn test_move_after_win_is_noop() {
    let state = play(&[0, 3, 1, 4, 2]);
    assert_eq!(state.status(), Status::Winner(Player::X));

    let before = state.clone();
    assert_eq!(state.apply_move(8), before);
}

#[test]
fn test_jump_then_move_truncates_future() {
    let state = play(&[0, 4, 8, 1, 2]);
    let old_future = state.history()[2..].to_vec();

    let k = 1;
    let state = state.jump_to_step(k).apply_move(6);

    assert_eq!(state.history().len(), k + 2);
    assert_eq!(state.step(), k + 1);
    assert!(!old_future.contains(&state.history()[k + 1]));
    assert_eq!(state.next_player(), Player::X);
}

#[test]
fn test_jump_keeps_history() {
    let state = play(&[0, 4, 8]);
    let history = state.history().to_vec();

    let state = state.jump_to_step(0);
    assert_eq!(state.history(), history.as_slice());
    assert_eq!(state.status_text(), "Next player: X");
}

#[test]
fn test_jump_back_out_of_terminal_state() {
    let state = play(&[0, 3, 1, 4, 2]);
    assert!(state.phase().is_terminal());

    let state = state.jump_to_step(2).apply_move(8);
    assert_eq!(state.phase(), Phase::InProgress);
    assert_eq!(state.history().len(), 4);
}

#[test]
fn test_order_for_display_three_entries() {
    let state = play(&[0, 4]);
    let history = state.history().to_vec();
    let steps = |order| -> Vec<usize> {
        order_for_display(build_move_list(&state), order)
            .iter()
            .map(|d| *d.step())
            .collect()
    };

    assert_eq!(steps(SortOrder::Descending), vec![2, 1, 0]);
    assert_eq!(steps(SortOrder::Ascending), vec![0, 1, 2]);
    assert_eq!(state.history(), history.as_slice());
}

#[test]
fn test_sort_toggle_does_not_affect_moves() {
    let sorted = play(&[0]).toggle_sort().apply_move(4);
    let unsorted = play(&[0, 4]);
    assert_eq!(sorted.history(), unsorted.history());
}

#[test]
fn test_state_snapshot_serializes() {
    let state = play(&[4]);
    let json = serde_json::to_value(&state).expect("serializable");
    assert_eq!(json["step"], 1);
    assert_eq!(json["next"], "O");
    assert_eq!(json["history"][1]["coordinate"]["column"], 2);

    let back: GameState = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, state);
}

#[test]
fn test_snapshot_with_step_past_history_is_rejected() {
    let mut json = serde_json::to_value(GameState::new()).expect("serializable");
    json["step"] = 5.into();

    let err = serde_json::from_value::<GameState>(json).unwrap_err();
    assert!(err.to_string().contains("Invalid game snapshot"));
}

#[test]
fn test_snapshot_with_forged_history_is_rejected() {
    let mut json = serde_json::to_value(play(&[4, 0])).expect("serializable");
    json["history"] = serde_json::Value::Array(Vec::new());
    json["step"] = 0.into();
    assert!(serde_json::from_value::<GameState>(json).is_err());

    // O moved first.
    let mut json = serde_json::to_value(play(&[4])).expect("serializable");
    json["history"][1]["board"]["squares"][4] = serde_json::json!({ "Occupied": "O" });
    json["next"] = "X".into();
    assert!(serde_json::from_value::<GameState>(json).is_err());
}
