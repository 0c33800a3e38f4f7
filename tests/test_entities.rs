use coin_dash::entities::*;
use coin_dash::geometry::*;
use coin_dash::GameError;

// ── Rect overlap tests ────────────────────────────────────────────────────────

#[test]
fn touches_counts_shared_edges() {
    let a = Rect::new(0, 0, 20, 20);
    let b = Rect::new(20, 0, 10, 10); // left edge on a's right edge
    assert!(a.touches(&b));
    assert!(b.touches(&a));
}

#[test]
fn overlaps_ignores_shared_edges() {
    let a = Rect::new(0, 0, 20, 20);
    let b = Rect::new(20, 0, 10, 10);
    assert!(!a.overlaps(&b));
    let c = Rect::new(0, 20, 20, 20); // directly below
    assert!(!a.overlaps(&c));
}

#[test]
fn overlap_tests_agree_on_interior_overlap() {
    let a = Rect::new(0, 0, 20, 20);
    let b = Rect::new(15, 15, 20, 20);
    assert!(a.touches(&b));
    assert!(a.overlaps(&b));
}

#[test]
fn separated_rects_neither_touch_nor_overlap() {
    let a = Rect::new(0, 0, 20, 20);
    let b = Rect::new(21, 0, 10, 10);
    assert!(!a.touches(&b));
    assert!(!a.overlaps(&b));
}

#[test]
fn contained_rect_overlaps() {
    let outer = Rect::new(0, 0, 60, 60);
    let inner = Rect::new(20, 20, 10, 10);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

// ── Bounds ────────────────────────────────────────────────────────────────────

#[test]
fn bounds_reject_arena_smaller_than_player() {
    assert!(matches!(
        Bounds::new(19, 300),
        Err(GameError::ArenaTooSmall { width: 19, height: 300, min: 20 })
    ));
    assert!(Bounds::new(400, 10).is_err());
    assert!(Bounds::new(20, 20).is_ok());
}

#[test]
fn clamp_keeps_rect_inside() {
    let b = Bounds::new(400, 300).unwrap();
    let r = b.clamp(Rect::new(-6, 295, 20, 20));
    assert_eq!((r.x, r.y), (0, 280));
    assert_eq!((r.w, r.h), (20, 20));
    assert!(b.contains(&r));
}

#[test]
fn clamp_leaves_legal_rect_alone() {
    let b = Bounds::new(400, 300).unwrap();
    let r = Rect::new(100, 100, 20, 20);
    assert_eq!(b.clamp(r), r);
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[test]
fn id_seq_never_repeats() {
    let mut ids = IdSeq::default();
    let a = ids.fresh();
    let b = ids.fresh();
    let c = ids.fresh();
    assert!(a < b && b < c);
}

#[test]
fn direction_deltas_are_unit_steps() {
    assert_eq!(Direction::Up.delta(), (0, -1));
    assert_eq!(Direction::Down.delta(), (0, 1));
    assert_eq!(Direction::Left.delta(), (-1, 0));
    assert_eq!(Direction::Right.delta(), (1, 0));
    assert_eq!(Direction::ALL.len(), 4);
}

#[test]
fn entity_kinds_paint_player_last() {
    let mut kinds = vec![
        EntityKind::Player,
        EntityKind::Enemy,
        EntityKind::Coin,
        EntityKind::Obstacle,
    ];
    kinds.sort();
    assert_eq!(kinds.last(), Some(&EntityKind::Player));
    assert_eq!(kinds.first(), Some(&EntityKind::Obstacle));
}
