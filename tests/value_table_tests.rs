use tictactoe_rl::{TicTacToeError, ValueTable};

#[test]
fn test_from_rows_shape_and_lookup() {
    let table = ValueTable::from_rows(vec![vec![0.1, 0.2, 0.3], vec![1.0, 2.0, 3.0]]).unwrap();

    assert_eq!(table.shape(), (2, 3));
    assert_eq!(table.num_states(), 2);
    assert_eq!(table.num_actions(), 3);
    assert_eq!(table.row(1), Some(&[1.0, 2.0, 3.0][..]));
    assert_eq!(table.value(0, 2), Some(0.3));
    assert_eq!(table.value(2, 0), None);
    assert_eq!(table.value(0, 3), None);
}

#[test]
fn test_ragged_rows_are_not_two_dimensional() {
    let result = ValueTable::from_rows(vec![vec![0.0, 1.0], vec![0.0]]);
    assert!(matches!(result, Err(TicTacToeError::Validation(_))));
}

#[test]
fn test_empty_tables_rejected() {
    assert!(matches!(
        ValueTable::from_rows(Vec::new()),
        Err(TicTacToeError::Validation(_))
    ));
    assert!(matches!(
        ValueTable::from_rows(vec![Vec::new()]),
        Err(TicTacToeError::Validation(_))
    ));
    assert!(matches!(
        ValueTable::zeros(0, 9),
        Err(TicTacToeError::Validation(_))
    ));
}

#[test]
fn test_from_shape_checks_length() {
    assert!(ValueTable::from_shape(2, 2, vec![0.0; 4]).is_ok());
    assert!(matches!(
        ValueTable::from_shape(2, 2, vec![0.0; 5]),
        Err(TicTacToeError::Validation(_))
    ));
}

#[test]
fn test_zeros() {
    let table = ValueTable::zeros(3, 9).unwrap();
    assert_eq!(table.shape(), (3, 9));
    assert!((0..3).all(|s| table.row(s).unwrap().iter().all(|&v| v == 0.0)));
}

#[test]
fn test_oversized_shape_rejected() {
    assert!(matches!(
        ValueTable::from_shape(usize::MAX / 2 + 1, 2, Vec::new()),
        Err(TicTacToeError::Validation(_))
    ));
    assert!(matches!(
        ValueTable::zeros(usize::MAX, usize::MAX),
        Err(TicTacToeError::Validation(_))
    ));
}
