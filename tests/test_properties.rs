use coin_dash::compute::*;
use coin_dash::entities::*;
use coin_dash::geometry::Bounds;
use coin_dash::spawn::*;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn player_stays_inside_and_out_of_obstacles(
        seed in any::<u64>(),
        moves in prop::collection::vec(0usize..4, 0..200),
    ) {
        let bounds = Bounds::new(400, 300).unwrap();
        let mut s = init_state(bounds, &mut StdRng::seed_from_u64(seed));
        for m in moves {
            s = move_player(&s, Direction::ALL[m]);
            prop_assert!(bounds.contains(&s.player.rect));
            prop_assert!(!blocked_by_obstacle(&s, &s.player.rect));
        }
    }

    #[test]
    fn level_spawns_follow_the_rules(
        seed in any::<u64>(),
        level in 1u32..30,
        width in 200i32..800,
        height in 200i32..600,
    ) {
        let bounds = Bounds::new(width, height).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ids = IdSeq::default();

        let enemies = spawn_enemies(bounds, level, &mut ids, &mut rng);
        prop_assert_eq!(enemies.len(), level as usize);
        for e in &enemies {
            prop_assert!(e.rect.x == 0 || e.rect.x == width - ENEMY_SIZE);
            prop_assert!(e.rect.y == 0 || e.rect.y == height - ENEMY_SIZE);
        }

        let obstacles = spawn_obstacles(bounds, level, &mut ids, &mut rng);
        prop_assert_eq!(obstacles.len(), obstacle_count(level));
        for o in &obstacles {
            prop_assert!(bounds.contains(&o.rect));
            prop_assert!(clear_of_spawn(bounds, o.rect.x, o.rect.y));
        }

        for c in spawn_coins(bounds, &mut ids, &mut rng) {
            prop_assert!(bounds.contains(&c.rect));
        }
    }

    #[test]
    fn enemies_never_leave_the_arena(seed in any::<u64>(), ticks in 1usize..300) {
        let bounds = Bounds::new(400, 300).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = init_state(bounds, &mut rng);
        s.level = 6;
        s = advance_level(&s, &mut rng);
        for _ in 0..ticks {
            s = move_enemies(&s, &mut rng);
            for e in &s.enemies {
                prop_assert!(bounds.contains(&e.rect));
            }
        }
    }

    #[test]
    fn each_pickup_removes_exactly_one_coin(seed in any::<u64>()) {
        let bounds = Bounds::new(400, 300).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut s = init_state(bounds, &mut rng);
        s.enemies.clear();
        // Line the coins up far from each other and step onto them one by one
        for (i, coin) in s.coins.iter_mut().enumerate() {
            coin.rect = coin.rect.at(100 * i as i32, 0);
        }
        for i in 0..COINS_PER_LEVEL {
            let before = s.coins.len();
            s.player.rect = s.player.rect.at(100 * i as i32, 0);
            s = detect_collisions(&s, &mut rng);
            if i + 1 < COINS_PER_LEVEL {
                prop_assert_eq!(s.coins.len(), before - 1);
                prop_assert_eq!(s.level, 1);
            } else {
                prop_assert_eq!(s.level, 2);
                prop_assert_eq!(s.timer, LEVEL_SECONDS);
            }
        }
    }
}
