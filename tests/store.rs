use chess_rules::store::{play_move, GameRecord, GameStore, MemoryGameStore, StoreError};
use chess_rules::{Game, GameError, Move, Side, Square};

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col)
}

#[test]
fn ids_are_assigned_from_one() {
    let mut store = MemoryGameStore::new();
    let a = store
        .create_game(GameRecord::new("first", Game::new()).with_white("alice"))
        .unwrap();
    let b = store.create_game(GameRecord::new("second", Game::new())).unwrap();
    assert_eq!((a, b), (1, 2));

    let first = store.get_game(a).unwrap().unwrap();
    assert_eq!(first.game_id, 1);
    assert_eq!(first.game_name, "first");
    assert_eq!(first.white_username.as_deref(), Some("alice"));
    assert_eq!(first.black_username, None);

    assert!(store.get_game(99).unwrap().is_none());
}

#[test]
fn list_update_and_clear() {
    let mut store = MemoryGameStore::new();
    for name in ["a", "b", "c"] {
        store.create_game(GameRecord::new(name, Game::new())).unwrap();
    }
    let names: Vec<String> = store
        .list_games()
        .unwrap()
        .into_iter()
        .map(|r| r.game_name)
        .collect();
    assert_eq!(names, ["a", "b", "c"]);

    let mut record = store.get_game(2).unwrap().unwrap();
    record = record.with_black("bob");
    store.update_game(record).unwrap();
    assert_eq!(
        store.get_game(2).unwrap().unwrap().black_username.as_deref(),
        Some("bob")
    );
    assert_eq!(store.len(), 3);

    store.clear().unwrap();
    assert!(store.is_empty());
    assert!(store.list_games().unwrap().is_empty());

    // Ids keep counting after a clear.
    let next = store.create_game(GameRecord::new("d", Game::new())).unwrap();
    assert_eq!(next, 4);
}

#[test]
fn play_move_persists_the_new_state() {
    let mut store = MemoryGameStore::new();
    let id = store.create_game(GameRecord::new("g", Game::new())).unwrap();

    let record = play_move(&mut store, id, Move::new(sq(2, 5), sq(4, 5))).unwrap();
    assert_eq!(record.game.turn(), Side::Black);
    assert_eq!(store.get_game(id).unwrap().unwrap(), record);
}

#[test]
fn rejected_move_leaves_the_record_untouched() {
    let mut store = MemoryGameStore::new();
    let id = store.create_game(GameRecord::new("g", Game::new())).unwrap();
    let before = store.get_game(id).unwrap().unwrap();

    let err = play_move(&mut store, id, Move::new(sq(7, 5), sq(5, 5))).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Move(GameError::WrongTurn { .. })
    ));
    assert_eq!(store.get_game(id).unwrap().unwrap(), before);
}

#[test]
fn unknown_game_is_reported() {
    let mut store = MemoryGameStore::new();
    let err = play_move(&mut store, 7, Move::new(sq(2, 5), sq(4, 5))).unwrap_err();
    assert!(matches!(err, StoreError::UnknownGame(7)));
}
