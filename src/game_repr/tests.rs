#[cfg(test)]
mod tests {
    use crate::error::{BoardParseError, SearchError};
    use crate::game_repr::{Board, GameState, PrincipalVariation, Side, DIM, PASS, REFERENCE_PV};

    // ==================== HELPER FUNCTIONS ====================

    /// Helper function to parse a board written as six rows
    fn board(rows: &str) -> Board {
        rows.parse().unwrap()
    }

    fn reference() -> PrincipalVariation {
        PrincipalVariation::reference().unwrap()
    }

    // ==================== SIDE TESTS ====================

    #[test]
    fn test_side_from_color() {
        assert_eq!(Side::from_color(1), Side::Black);
        assert_eq!(Side::from_color(-1), Side::White);
        assert_eq!(Side::from_color(0), Side::Black);
        assert_eq!(Side::Black.index(), 1);
        assert_eq!(Side::White.index(), 0);
        assert_eq!(Side::Black.sign(), 1);
        assert_eq!(Side::White.opposite(), Side::Black);
    }

    // ==================== BOARD TESTS ====================

    #[test]
    fn test_starting_position() {
        let b = Board::new();
        assert!(b.is_black(1) && b.is_black(2));
        assert!(b.is_white(0) && b.is_white(3));
        assert_eq!(b.empties(), 32);
        assert_eq!(b.value(), 0);
        assert!(!b.is_terminal());
        assert_eq!(
            b.to_string(),
            "......\n......\n..WB..\n..BW..\n......\n......\n"
        );
    }

    #[test]
    fn test_starting_legal_moves() {
        let b = Board::new();
        assert_eq!(b.legal_moves(Side::Black).as_slice(), &[12, 17, 22, 27]);
        assert_eq!(b.legal_moves(Side::White).as_slice(), &[13, 18, 21, 26]);
    }

    #[test]
    fn test_centre_cells_never_playable() {
        let b = Board::new();
        for cell in 0..4 {
            assert!(!b.is_free(cell));
            assert!(!b.outflank(Side::Black, cell));
            assert!(!b.outflank(Side::White, cell));
        }
        // Out of range cells (including the pass pseudo-cell) never outflank
        assert!(!b.outflank(Side::Black, PASS));
    }

    #[test]
    fn test_move_flips_stones() {
        let b = Board::new();
        let after = b.make_move(Side::Black, 12);

        assert!(after.is_black(12));
        assert!(after.is_black(0), "centre stone 0 should be flipped");
        assert!(after.is_white(3));
        assert_eq!(after.value(), 3);

        // Original board is untouched
        assert!(b.is_white(0));
        assert!(b.is_free(12));
    }

    #[test]
    fn test_move_flips_all_directions() {
        let b = board(
            "......
             .B.B.B
             ..WWW.
             .BW.WB
             ..WWW.
             .B.B.B",
        );
        // Cell 3 is surrounded by single white stones, each closed by black
        assert!(b.outflank(Side::Black, 3));
        assert!(!b.outflank(Side::White, 3));

        let after = b.make_move(Side::Black, 3);
        for cell in [0, 1, 18, 2, 22, 26, 27, 28] {
            assert!(after.is_black(cell), "cell {} should be flipped", cell);
        }
        assert_eq!(after.value(), 17);
    }

    #[test]
    fn test_open_run_does_not_flip() {
        let open = board(
            "B.....
             ......
             .WW...
             ......
             ......
             ......",
        );
        // Run towards an empty cell is not closed
        assert!(!open.outflank(Side::Black, 16));

        let closed = board(
            "B.....
             ......
             .WWB..
             ......
             ......
             ......",
        );
        assert!(closed.outflank(Side::Black, 16));
        let after = closed.make_move(Side::Black, 16);
        assert!(after.is_black(17) && after.is_black(0));
        assert_eq!(after.value(), 5);
    }

    #[test]
    fn test_pass_returns_same_board() {
        let b = Board::new();
        assert_eq!(b.make_move(Side::Black, PASS), b);
    }

    #[test]
    fn test_full_board_is_terminal() {
        let full = board(
            "BBBBBB
             BBBBBB
             BBBBBB
             WWWWWW
             WWWWWW
             WWWWWW",
        );
        assert!(full.is_full());
        assert!(full.is_terminal());
        assert_eq!(full.value(), 0);
        assert_eq!(full.empties(), 0);
    }

    #[test]
    fn test_blocked_board_is_terminal() {
        // Only black stones: nobody can outflank anything
        let b = board(
            "......
             ......
             ..BB..
             ..BB..
             ......
             ......",
        );
        assert!(!b.is_full());
        assert!(b.is_terminal());
        assert_eq!(b.terminal_score(), 4);
    }

    #[test]
    fn test_hash_consistency() {
        let b1 = Board::new();
        let b2 = Board::new();
        assert_eq!(b1.hash(), b2.hash());
        assert_ne!(b1.hash(), 0);

        let moved = b1.make_move(Side::Black, 12);
        assert_ne!(moved.hash(), b1.hash());

        // Transpositions reach the same hash
        let a = b1.make_move(Side::Black, 12).make_move(Side::White, 13);
        let c = board(&a.to_string());
        assert_eq!(a.hash(), c.hash());
        assert_eq!(a.hash_key(), c.hash());
    }

    #[test]
    fn test_parse_round_trip() {
        let b = Board::new().make_move(Side::Black, 22);
        let parsed: Board = b.to_string().parse().unwrap();
        assert_eq!(parsed, b);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "BW.".parse::<Board>(),
            Err(BoardParseError::WrongLength { expected: DIM, actual: 3 })
        );
        let bad = format!("X{}", ".".repeat(DIM - 1));
        assert_eq!(bad.parse::<Board>(), Err(BoardParseError::UnknownSymbol('X')));
    }

    // ==================== PRINCIPAL VARIATION TESTS ====================

    #[test]
    fn test_reference_pv_extraction() {
        let pv = reference();
        assert_eq!(pv.len(), REFERENCE_PV.len());
        assert_eq!(pv.positions().len(), pv.len() + 1);
        assert_eq!(pv.positions()[pv.len()], Board::new());

        let last = pv.positions()[0];
        assert!(last.is_terminal());
        assert_eq!(last.value(), -4);
        assert_eq!(
            last.to_string(),
            "WWWWWB\nWWBWBW\nBBWBWW\nBBBWWW\nWWBBWW\nBBBBBW\n"
        );
    }

    #[test]
    fn test_reference_pv_sides() {
        let pv = reference();
        // First play is black's
        assert_eq!(pv.side_to_move(pv.len()), Side::Black);
        assert_eq!(pv.side_to_move(pv.len() - 1), Side::White);
        assert_eq!(pv.side_to_move(0), Side::White);
        assert_eq!(pv.side_to_move(1), Side::Black);
    }

    #[test]
    fn test_reference_pv_contains_pass() {
        let pv = reference();
        let positions = pv.positions();

        // The recorded pass leaves the board unchanged
        assert_eq!(positions[2], positions[3]);
        assert_eq!(pv.side_to_move(3), Side::Black);
        assert!(!positions[3].has_move(Side::Black));
        assert_eq!(positions[3].legal_moves(Side::White).as_slice(), &[8, 9]);
    }

    #[test]
    fn test_illegal_pv_rejected() {
        // 13 is white's move in the starting position, not black's
        let err = PrincipalVariation::extract(&[13]).unwrap_err();
        assert_eq!(
            err,
            SearchError::IllegalMove {
                ply: 0,
                cell: 13,
                side: Side::Black
            }
        );
    }
}
