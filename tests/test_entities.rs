use platformer_game::config::GameConfig;
use platformer_game::entities::*;
use platformer_game::geometry::Point;

fn tiny_state() -> GameState {
    let config = GameConfig::default();
    GameState {
        session: Session::new(&config),
        world: Level {
            platforms: vec![Platform::new(0.0, 550.0, 800.0, 50.0)],
            coins: vec![Coin::centered_at(100.0, 100.0)],
            enemies: vec![Enemy::new(300.0, 520.0, 200.0, 400.0)],
        },
        player: Player::spawn(&config),
        frame: 0,
        config,
    }
}

#[test]
fn session_starts_on_menu_with_three_lives() {
    let session = Session::new(&GameConfig::default());
    assert_eq!(session.score, 0);
    assert_eq!(session.lives, 3);
    assert_eq!(session.level, 1);
    assert_eq!(session.status, GameStatus::Menu);
}

#[test]
fn player_spawns_centred_on_spawn_point() {
    let config = GameConfig::default();
    let p = Player::spawn(&config);
    assert_eq!(p.bounds.center(), Point::new(200.0, 300.0));
    assert_eq!(p.bounds.width, PLAYER_WIDTH);
    assert_eq!(p.bounds.height, PLAYER_HEIGHT);
    assert_eq!(p.velocity_x, 0.0);
    assert_eq!(p.velocity_y, 0.0);
    assert!(p.facing_right);
}

#[test]
fn coin_remembers_its_spawn_top() {
    let c = Coin::centered_at(50.0, 40.0);
    assert_eq!(c.bounds.center(), Point::new(50.0, 40.0));
    assert_eq!(c.original_y, c.bounds.top());
    assert_eq!(c.phase, 0.0);
}

#[test]
fn enemy_starts_walking_right() {
    let e = Enemy::new(10.0, 20.0, 0.0, 100.0);
    assert_eq!(e.velocity_x, ENEMY_SPEED);
    assert!(e.facing_right);
    assert_eq!(e.bounds.width, ENEMY_SIZE);
}

#[test]
fn entities_are_listed_in_draw_order() {
    let state = tiny_state();
    let kinds: Vec<&str> = state
        .entities()
        .map(|e| match e {
            Entity::Platform(_) => "platform",
            Entity::Coin(_) => "coin",
            Entity::Enemy(_) => "enemy",
            Entity::Player(_) => "player",
        })
        .collect();
    assert_eq!(kinds, vec!["platform", "coin", "enemy", "player"]);
}

#[test]
fn entity_bounds_match_the_wrapped_value() {
    let state = tiny_state();
    let last = state.entities().last().unwrap();
    assert_eq!(last.bounds(), state.player.bounds);
}

#[test]
fn game_state_clone_is_independent() {
    let original = tiny_state();
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.bounds.x = 99.0;
    cloned.session.score = 999;
    cloned.world.coins.clear();

    assert_eq!(original.player.bounds.x, 185.0);
    assert_eq!(original.session.score, 0);
    assert_eq!(original.world.coins.len(), 1);
}
