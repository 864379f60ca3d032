//! Tests for the presentation read model.

use strictly_timetravel::{
    GameHistory, GameStatus, GameView, MoveOrder, Position, Square, TicTacToePlayer as Player,
};

fn history(cells: &[usize]) -> GameHistory {
    GameHistory::replay(cells.iter().filter_map(|&c| Position::from_index(c)))
}

#[test]
fn test_initial_view() {
    let view = GameView::from_history(&GameHistory::new(), MoveOrder::Ascending);

    assert_eq!(view.status_line(), "Next player: X");
    assert_eq!(*view.cursor(), 0);
    assert!(view.highlighted().is_empty());
    assert_eq!(view.moves().len(), 1);
    assert_eq!(view.moves().entries()[0].label(), "Go to game start");
    assert!(*view.moves().entries()[0].selected());
}

#[test]
fn test_move_list_labels_use_col_row() {
    let view = GameView::from_history(&history(&[4, 0, 5]), MoveOrder::Ascending);
    let labels: Vec<&str> = view
        .moves()
        .entries()
        .into_iter()
        .map(|e| e.label().as_str())
        .collect();

    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "Go to move #1 (2,2)",
            "Go to move #2 (1,1)",
            "Go to move #3 (3,2)",
        ]
    );
}

#[test]
fn test_view_after_time_travel_shows_past_board() {
    let mut h = history(&[0, 4, 1, 5, 2]);
    h.jump_to(2).unwrap();
    let view = GameView::from_history(&h, MoveOrder::Ascending);

    assert_eq!(*view.status(), GameStatus::InProgress { next: Player::X });
    assert_eq!(view.status_line(), "Next player: X");
    assert!(view.highlighted().is_empty());
    assert_eq!(view.moves().len(), 6);

    let occupied: Vec<Position> = view
        .squares()
        .iter()
        .filter(|s| *s.square() != Square::Empty)
        .map(|s| *s.position())
        .collect();
    assert_eq!(occupied, vec![Position::TopLeft, Position::Center]);
}

#[test]
fn test_draw_status_line() {
    let view = GameView::from_history(&history(&[0, 1, 2, 4, 3, 5, 7, 6, 8]), MoveOrder::Ascending);
    assert_eq!(view.status_line(), "DRAW !");
    assert!(view.highlighted().is_empty());
}

#[test]
fn test_toggle_order_reverses_entries_only() {
    let h = history(&[4, 0]);
    let mut view = GameView::from_history(&h, MoveOrder::Ascending);
    view.toggle_order();

    assert_eq!(*view.moves().order(), MoveOrder::Descending);
    let steps: Vec<usize> = view.moves().entries().iter().map(|e| *e.step()).collect();
    assert_eq!(steps, vec![2, 1, 0]);
    assert_eq!(*view.moves().entries()[0].origin(), Some(Position::TopLeft));
}

#[test]
fn test_view_serializes_to_json() {
    let view = GameView::from_history(&history(&[0, 4, 1, 5, 2]), MoveOrder::Descending);
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["status_line"], "Winner: X");
    assert_eq!(json["moves"]["order"], "descending");
    assert_eq!(json["squares"][0]["is_winner_square"], true);
    assert_eq!(json["squares"][4]["is_winner_square"], false);
}
