use chess_rules::store::{play_move, GameRecord, GameStore, MemoryGameStore};
use chess_rules::{Game, Move, Side, Square};

fn main() {
    env_logger::init();

    let mut store = MemoryGameStore::new();
    let id = match store.create_game(GameRecord::new("fool's mate", Game::new())) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Failed to create game: {e}");
            std::process::exit(1);
        }
    };

    // f2-f3, e7-e5, g2-g4, d8-h4
    let line = [
        Move::new(Square::new(2, 6), Square::new(3, 6)),
        Move::new(Square::new(7, 5), Square::new(5, 5)),
        Move::new(Square::new(2, 7), Square::new(4, 7)),
        Move::new(Square::new(8, 4), Square::new(4, 8)),
    ];

    let mut game = Game::new();
    for mv in line {
        match play_move(&mut store, id, mv) {
            Ok(record) => game = record.game,
            Err(e) => {
                eprintln!("Move {mv} rejected: {e}");
                std::process::exit(1);
            }
        }
    }

    println!("{}", game.board());
    println!();
    println!("Side to move: {}", game.turn());
    println!("Status: {:?}", game.status());
    println!("White checkmated? {}", game.in_checkmate(Side::White));
    println!("Black checkmated? {}", game.in_checkmate(Side::Black));
}
