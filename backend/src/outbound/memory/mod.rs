//! Process-local store backing every repository port.
//!
//! One [`RwLock`] guards the whole state, so each repository call is atomic
//! with respect to every other call. Shift writes run the owner check, the
//! overlap scan and the write under a single write guard. Guards are never
//! held across an `.await`.
//!
//! Entities live in id-keyed [`IndexMap`]s, which keeps list endpoints in
//! insertion order. Shifts are also indexed by `(user, date)` so the overlap
//! scan only visits the candidate's bucket.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::domain::ports::{
    PasswordHasher, PasswordHasherError, PositionRemoval, PositionRepository,
    PositionRepositoryError, ShiftRepository, ShiftRepositoryError, ShiftWrite, UserInsert,
    UserRepository, UserRepositoryError,
};
use crate::domain::shift::first_conflict;
use crate::domain::{
    AuditStamp, DisplayName, EmailAddress, HexColor, Position, PositionId, Role, Shift,
    ShiftDate, ShiftDraft, ShiftId, ShiftQuery, User, UserId,
};

type BucketKey = (UserId, ShiftDate);

#[derive(Debug, Default)]
struct StoreState {
    users: IndexMap<UserId, User>,
    positions: IndexMap<PositionId, Position>,
    shifts: IndexMap<ShiftId, Shift>,
    buckets: HashMap<BucketKey, Vec<ShiftId>>,
}

impl StoreState {
    fn bucket_key(shift: &Shift) -> BucketKey {
        (shift.user_id().clone(), shift.date().clone())
    }

    fn bucket(&self, user_id: &UserId, date: &ShiftDate) -> impl Iterator<Item = &Shift> {
        self.buckets
            .get(&(user_id.clone(), date.clone()))
            .into_iter()
            .flatten()
            .filter_map(|id| self.shifts.get(id))
    }

    fn index(&mut self, shift: &Shift) {
        self.buckets
            .entry(Self::bucket_key(shift))
            .or_default()
            .push(shift.id().clone());
    }

    fn unindex(&mut self, shift: &Shift) {
        let key = Self::bucket_key(shift);
        if let Some(ids) = self.buckets.get_mut(&key) {
            ids.retain(|id| id != shift.id());
            if ids.is_empty() {
                self.buckets.remove(&key);
            }
        }
    }

    fn conflict_for(
        &self,
        user_id: &UserId,
        date: &ShiftDate,
        candidate: &Shift,
        exclude: Option<&ShiftId>,
    ) -> Option<Shift> {
        first_conflict(candidate.window(), self.bucket(user_id, date), exclude).cloned()
    }
}

/// In-memory implementation of the user, position and shift repositories.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

fn poisoned<T>(_: PoisonError<T>) -> String {
    "store lock poisoned".to_owned()
}

const SEED_POSITIONS: [(&str, &str, &str); 3] = [
    ("1", "Administrator", "#4F46E5"),
    ("2", "Developer", "#10B981"),
    ("3", "Designer", "#F59E0B"),
];

impl MemoryStore {
    /// Build a store holding the default administrator and positions.
    ///
    /// The administrator `admin@example.com` gets the password `admin`, hashed
    /// with `hasher`.
    ///
    /// # Errors
    /// Returns an error when the seed password cannot be hashed.
    pub fn seeded(hasher: &dyn PasswordHasher) -> Result<Self, PasswordHasherError> {
        let mut state = StoreState::default();
        for (id, name, color) in SEED_POSITIONS {
            let position = seed_position(id, name, color)?;
            state.positions.insert(position.id().clone(), position);
        }

        let admin = User::new(
            seed_value(UserId::new("1"))?,
            seed_value(DisplayName::new("Admin User"))?,
            seed_value(EmailAddress::new("admin@example.com"))?,
            hasher.hash("admin")?,
            Role::Admin,
            Some(seed_value(PositionId::new("1"))?),
        );
        state.users.insert(admin.id().clone(), admin);

        Ok(Self {
            state: RwLock::new(state),
        })
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, String> {
        self.state.read().map_err(poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, String> {
        self.state.write().map_err(poisoned)
    }
}

fn seed_value<T, E: std::fmt::Display>(value: Result<T, E>) -> Result<T, PasswordHasherError> {
    value.map_err(|err| PasswordHasherError::hashing(format!("invalid seed record: {err}")))
}

fn seed_position(id: &str, name: &str, color: &str) -> Result<Position, PasswordHasherError> {
    Ok(Position::new(
        seed_value(PositionId::new(id))?,
        name.to_owned(),
        seed_value(HexColor::new(color))?,
    ))
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn list_users(&self) -> Result<Vec<User>, UserRepositoryError> {
        let state = self.read().map_err(UserRepositoryError::unavailable)?;
        Ok(state.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let state = self.read().map_err(UserRepositoryError::unavailable)?;
        Ok(state.users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        let state = self.read().map_err(UserRepositoryError::unavailable)?;
        Ok(state
            .users
            .values()
            .find(|user| user.email().as_ref() == email)
            .cloned())
    }

    async fn insert(&self, user: User) -> Result<UserInsert, UserRepositoryError> {
        let mut state = self.write().map_err(UserRepositoryError::unavailable)?;
        if state.users.values().any(|other| other.email() == user.email()) {
            return Ok(UserInsert::EmailTaken);
        }
        if user
            .position_id()
            .is_some_and(|id| !state.positions.contains_key(id))
        {
            return Ok(UserInsert::UnknownPosition);
        }
        state.users.insert(user.id().clone(), user);
        Ok(UserInsert::Stored)
    }
}

#[async_trait]
impl PositionRepository for MemoryStore {
    async fn list_positions(&self) -> Result<Vec<Position>, PositionRepositoryError> {
        let state = self.read().map_err(PositionRepositoryError::unavailable)?;
        Ok(state.positions.values().cloned().collect())
    }

    async fn find_by_id(
        &self,
        id: &PositionId,
    ) -> Result<Option<Position>, PositionRepositoryError> {
        let state = self.read().map_err(PositionRepositoryError::unavailable)?;
        Ok(state.positions.get(id).cloned())
    }

    async fn insert(&self, position: Position) -> Result<(), PositionRepositoryError> {
        let mut state = self.write().map_err(PositionRepositoryError::unavailable)?;
        state.positions.insert(position.id().clone(), position);
        Ok(())
    }

    async fn update(&self, position: Position) -> Result<bool, PositionRepositoryError> {
        let mut state = self.write().map_err(PositionRepositoryError::unavailable)?;
        match state.positions.get_mut(position.id()) {
            Some(slot) => {
                *slot = position;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: &PositionId) -> Result<PositionRemoval, PositionRepositoryError> {
        let mut state = self.write().map_err(PositionRepositoryError::unavailable)?;
        if !state.positions.contains_key(id) {
            return Ok(PositionRemoval::Missing);
        }
        if state
            .users
            .values()
            .any(|user| user.position_id() == Some(id))
        {
            return Ok(PositionRemoval::InUse);
        }
        state.positions.shift_remove(id);
        Ok(PositionRemoval::Removed)
    }
}

#[async_trait]
impl ShiftRepository for MemoryStore {
    async fn list_shifts(&self, query: &ShiftQuery) -> Result<Vec<Shift>, ShiftRepositoryError> {
        let state = self.read().map_err(ShiftRepositoryError::unavailable)?;
        let mut shifts: Vec<Shift> = state
            .shifts
            .values()
            .filter(|shift| query.matches(shift))
            .cloned()
            .collect();
        shifts.sort_by(Shift::schedule_order);
        Ok(shifts)
    }

    async fn insert(&self, shift: Shift) -> Result<ShiftWrite, ShiftRepositoryError> {
        let mut state = self.write().map_err(ShiftRepositoryError::unavailable)?;
        if !state.users.contains_key(shift.user_id()) {
            return Ok(ShiftWrite::UnknownUser);
        }
        if let Some(conflict) = state.conflict_for(shift.user_id(), shift.date(), &shift, None) {
            return Ok(ShiftWrite::Overlaps(conflict));
        }
        state.index(&shift);
        state.shifts.insert(shift.id().clone(), shift.clone());
        Ok(ShiftWrite::Stored(shift))
    }

    async fn revise(
        &self,
        id: &ShiftId,
        draft: ShiftDraft,
        stamp: AuditStamp,
    ) -> Result<ShiftWrite, ShiftRepositoryError> {
        let mut state = self.write().map_err(ShiftRepositoryError::unavailable)?;
        let Some(existing) = state.shifts.get(id).cloned() else {
            return Ok(ShiftWrite::Missing);
        };
        if !state.users.contains_key(draft.user_id()) {
            return Ok(ShiftWrite::UnknownUser);
        }
        let revised = existing.revise(draft, stamp);
        if let Some(conflict) =
            state.conflict_for(revised.user_id(), revised.date(), &revised, Some(id))
        {
            return Ok(ShiftWrite::Overlaps(conflict));
        }
        state.unindex(&existing);
        state.index(&revised);
        state.shifts.insert(id.clone(), revised.clone());
        Ok(ShiftWrite::Stored(revised))
    }

    async fn remove(&self, id: &ShiftId) -> Result<bool, ShiftRepositoryError> {
        let mut state = self.write().map_err(ShiftRepositoryError::unavailable)?;
        match state.shifts.shift_remove(id) {
            Some(shift) => {
                state.unindex(&shift);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
