use tictactoe_rl::{GameConfig, TicTacToe, TicTacToeError};

#[test]
fn test_config_builder_methods() {
    // Test that all builder methods correctly set their respective values
    let config = GameConfig::default()
        .with_size(5)
        .with_players('A', 'B')
        .with_initial_player('B');

    assert_eq!(config.size, 5);
    assert_eq!(config.player_1, 'A');
    assert_eq!(config.player_2, 'B');
    assert_eq!(config.initial_player, 'B');
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_default_values() {
    let config = GameConfig::default();

    assert_eq!(config.size, 3);
    assert_eq!(config.player_1, 'X');
    assert_eq!(config.player_2, 'O');
    assert_eq!(config.initial_player, 'X');
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_validation_errors() {
    let too_small = GameConfig::default().with_size(2);
    assert!(matches!(
        too_small.validate(),
        Err(TicTacToeError::Validation(_))
    ));

    let too_large = GameConfig::default().with_size(usize::MAX / 2);
    assert!(matches!(
        too_large.validate(),
        Err(TicTacToeError::Validation(_))
    ));
    assert!(matches!(
        TicTacToe::new(usize::MAX, 'X', 'O', 'X'),
        Err(TicTacToeError::Validation(_))
    ));

    let same_symbols = GameConfig::default().with_players('X', 'X');
    assert!(matches!(
        same_symbols.validate(),
        Err(TicTacToeError::Validation(_))
    ));

    let stranger = GameConfig::default().with_initial_player('Z');
    assert!(matches!(
        stranger.validate(),
        Err(TicTacToeError::Validation(_))
    ));
}

#[test]
fn test_from_config_matches_new() {
    let config = GameConfig::default()
        .with_size(4)
        .with_players('A', 'B')
        .with_initial_player('B');

    let from_config = TicTacToe::from_config(&config).unwrap();
    let from_new = TicTacToe::new(4, 'A', 'B', 'B').unwrap();

    assert_eq!(from_config, from_new);
    assert_eq!(from_config.current_player_symbol(), 'B');
    assert_eq!(from_config.current_player(), 1);
}
