//! The arena collaborator: the surface that hosts entities in play.
//!
//! Game logic never talks to a renderer directly.  After every state
//! transition [`sync`] tells the arena which records appeared, moved or went
//! away, and the arena turns those into whatever it draws.

use std::collections::{BTreeMap, HashMap};

use crate::entities::{Entity, EntityId, EntityKind, GameState};
use crate::error::GameError;
use crate::geometry::Bounds;

pub trait Arena {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    /// Add `entity`, or update it in place if its id is already hosted.
    fn place(&mut self, entity: Entity);
    fn remove(&mut self, id: EntityId);

    fn bounds(&self) -> Result<Bounds, GameError> {
        Bounds::new(self.width(), self.height())
    }
}

/// Bring `arena` from `previous` to `next` with the fewest calls: removed
/// ids first, then new or changed records.  `previous = None` means the
/// arena is empty.
pub fn sync<A: Arena + ?Sized>(arena: &mut A, previous: Option<&GameState>, next: &GameState) {
    let before: HashMap<EntityId, &Entity> = previous
        .map(|p| p.entities().map(|e| (e.id, e)).collect())
        .unwrap_or_default();
    let after: HashMap<EntityId, &Entity> = next.entities().map(|e| (e.id, e)).collect();

    for id in before.keys().filter(|id| !after.contains_key(*id)) {
        arena.remove(*id);
    }
    for entity in next.entities() {
        if before.get(&entity.id) != Some(&entity) {
            arena.place(*entity);
        }
    }
}

// ── In-memory arena ──────────────────────────────────────────────────────────

/// A plain record store.  The terminal renderer draws from one of these.
#[derive(Clone, Debug)]
pub struct Board {
    bounds: Bounds,
    entities: BTreeMap<EntityId, Entity>,
}

impl Board {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            entities: BTreeMap::new(),
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.values().filter(|e| e.kind == kind).count()
    }

    /// Hosted entities in paint order: obstacles, coins, enemies, player.
    pub fn layers(&self) -> Vec<&Entity> {
        let mut all: Vec<&Entity> = self.entities.values().collect();
        all.sort_by_key(|e| (e.kind, e.id));
        all
    }
}

impl Arena for Board {
    fn width(&self) -> i32 {
        self.bounds.width()
    }

    fn height(&self) -> i32 {
        self.bounds.height()
    }

    fn place(&mut self, entity: Entity) {
        self.entities.insert(entity.id, entity);
    }

    fn remove(&mut self, id: EntityId) {
        self.entities.remove(&id);
    }
}
