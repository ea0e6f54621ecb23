//! Test suite for the 4x4 board and game rules
//! Validates placement, win detection, and position validation

use quadtac::{Board, Game, GameStatus, Mark, Move, Player};

/// Interleaved move list that fills the board without either player winning
fn draw_sequence() -> Vec<(usize, usize)> {
    let x_cells = [
        (0, 0),
        (0, 1),
        (1, 2),
        (1, 3),
        (2, 0),
        (2, 1),
        (3, 2),
        (3, 3),
    ];
    let o_cells = [
        (0, 2),
        (0, 3),
        (1, 0),
        (1, 1),
        (2, 2),
        (2, 3),
        (3, 0),
        (3, 1),
    ];

    x_cells
        .iter()
        .zip(o_cells.iter())
        .flat_map(|(x, o)| [*x, *o])
        .collect()
}

mod board_contract {
    use super::*;

    #[test]
    fn test_place_then_read_back() {
        let mut board = Board::new();

        assert!(board.set(1, 2, Mark::X).unwrap());
        assert_eq!(board.get(1, 2).unwrap(), Mark::X);

        // Occupied cells refuse the write and keep their mark
        assert!(!board.set(1, 2, Mark::O).unwrap());
        assert_eq!(board.get(1, 2).unwrap(), Mark::X);
    }

    #[test]
    fn test_out_of_range_coordinates_error() {
        let mut board = Board::new();

        assert!(board.get(4, 0).is_err());
        assert!(board.get(0, 4).is_err());
        assert!(board.set(4, 4, Mark::X).is_err());
    }

    #[test]
    fn test_empty_cells_row_major_order() {
        let mut board = Board::new();
        board.set(0, 0, Mark::X).unwrap();
        board.set(2, 3, Mark::O).unwrap();

        let cells = board.empty_cells();
        assert_eq!(cells.len(), 14);
        assert_eq!(cells[0], Move::new(0, 1), "scan should start after (0, 0)");

        // Row-major means index = row * 4 + col is strictly increasing
        for pair in cells.windows(2) {
            assert!(
                pair[0].index() < pair[1].index(),
                "empty cells should arrive in row-major order"
            );
        }
    }

    #[test]
    fn test_board_text_roundtrip() {
        let text = "XXO.OOX.X..O...X";
        let board = Board::from_string(text).unwrap();

        assert_eq!(board.encode(), text);
        assert_eq!(board.get(0, 0).unwrap(), Mark::X);
        assert_eq!(board.get(0, 2).unwrap(), Mark::O);
        assert_eq!(board.get(0, 3).unwrap(), Mark::Empty);
    }

    #[test]
    fn test_board_text_rejects_bad_input() {
        assert!(Board::from_string("XO.").is_err(), "too short");
        assert!(
            Board::from_string("XXO.OOX.X..O...XX").is_err(),
            "too long"
        );
        assert!(
            Board::from_string("XXO.OOX.X..Q...X").is_err(),
            "unknown cell character"
        );
    }
}

mod win_detection {
    use super::*;

    fn board_with_line(cells: [(usize, usize); 4], mark: Mark) -> Board {
        let mut board = Board::new();
        for (row, col) in cells {
            board.set(row, col, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_every_row_wins() {
        for player in [Player::X, Player::O] {
            for row in 0..Board::SIZE {
                let cells = [(row, 0), (row, 1), (row, 2), (row, 3)];
                let board = board_with_line(cells, player.to_mark());
                assert!(
                    quadtac::lines::has_won(&board, player),
                    "row {row} should win for {player}"
                );
            }
        }
    }

    #[test]
    fn test_every_column_wins() {
        for player in [Player::X, Player::O] {
            for col in 0..Board::SIZE {
                let cells = [(0, col), (1, col), (2, col), (3, col)];
                let board = board_with_line(cells, player.to_mark());
                assert!(
                    quadtac::lines::has_won(&board, player),
                    "column {col} should win for {player}"
                );
            }
        }
    }

    #[test]
    fn test_both_diagonals_win() {
        let main = board_with_line([(0, 0), (1, 1), (2, 2), (3, 3)], Mark::X);
        assert!(quadtac::lines::has_won(&main, Player::X));

        let anti = board_with_line([(0, 3), (1, 2), (2, 1), (3, 0)], Mark::O);
        assert!(quadtac::lines::has_won(&anti, Player::O));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut board = Board::new();
        board.set(0, 0, Mark::X).unwrap();
        board.set(0, 1, Mark::X).unwrap();
        board.set(0, 2, Mark::X).unwrap();

        assert!(
            !quadtac::lines::has_won(&board, Player::X),
            "three in a row must not count on a 4x4 board"
        );
    }

    #[test]
    fn test_second_player_completes_row_two() {
        let mut game = Game::new(Player::X);
        let moves = [
            (0, 0), // X
            (2, 0), // O
            (0, 1), // X
            (2, 1), // O
            (0, 2), // X
            (2, 2), // O
            (1, 0), // X
            (2, 3), // O completes row 2
        ];

        for (row, col) in moves {
            assert!(game.play(Move::new(row, col)).unwrap());
        }

        assert_eq!(game.status(), GameStatus::Won(Player::O));
        assert_eq!(game.winner(), Some(Player::O));
    }
}

mod game_flow {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(Player::X);
        assert_eq!(game.to_move(), Player::X);

        game.play(Move::new(0, 0)).unwrap();
        assert_eq!(game.to_move(), Player::O);

        game.play(Move::new(1, 1)).unwrap();
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_occupied_cell_rejected_without_consuming_turn() {
        let mut game = Game::new(Player::X);
        game.play(Move::new(0, 0)).unwrap();

        assert!(!game.play(Move::new(0, 0)).unwrap());
        assert_eq!(game.to_move(), Player::O, "rejected move must not pass the turn");
        assert_eq!(game.board().get(0, 0).unwrap(), Mark::X);
    }

    #[test]
    fn test_win_ends_the_game() {
        let mut game = Game::new(Player::X);
        let moves = [
            (0, 0),
            (1, 0),
            (0, 1),
            (1, 1),
            (0, 2),
            (1, 2),
            (0, 3), // X completes row 0
        ];
        for (row, col) in moves {
            assert!(game.play(Move::new(row, col)).unwrap());
        }

        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert!(game.is_over());

        // Further moves are ignored
        assert!(!game.play(Move::new(3, 3)).unwrap());
        assert_eq!(game.board().get(3, 3).unwrap(), Mark::Empty);
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        let mut game = Game::new(Player::X);
        for (row, col) in draw_sequence() {
            assert!(game.play(Move::new(row, col)).unwrap());
        }

        assert_eq!(game.status(), GameStatus::Draw);
        assert!(game.is_over());
        assert_eq!(game.winner(), None);
        assert!(game.board().is_full());
    }

    #[test]
    fn test_o_can_open_the_game() {
        let mut game = Game::new(Player::O);
        assert!(game.play(Move::new(1, 1)).unwrap());
        assert_eq!(game.board().get(1, 1).unwrap(), Mark::O);
        assert_eq!(game.to_move(), Player::X);
    }
}

mod position_validation {
    use super::*;

    #[test]
    fn test_resume_from_valid_position() {
        let board = Board::from_string("XX..O...........").unwrap();
        let to_move = Game::infer_to_move(&board).unwrap();
        assert_eq!(to_move, Player::O, "two X against one O means O moves next");

        let game = Game::from_position(board, to_move).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_piece_count_gap_is_rejected() {
        let board = Board::from_string("XXX.............").unwrap();
        assert!(Game::infer_to_move(&board).is_err());
        assert!(Game::from_position(board, Player::O).is_err());
    }

    #[test]
    fn test_double_win_is_rejected() {
        // Row 0 for X and row 3 for O completed at the same time
        let board = Board::from_string("XXXXXX..OO..OOOO").unwrap();
        assert!(Game::from_position(board, Player::X).is_err());
    }

    #[test]
    fn test_terminal_position_is_recognized() {
        let board = Board::from_string("XXXXOOO.........").unwrap();
        let game = Game::from_position(board, Player::O).unwrap();
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert!(game.is_over());
    }
}
