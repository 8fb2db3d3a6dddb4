//! Which monsters fight for which side

use crate::limits::{MonsterId, Side};
use crate::status::MonsterStatus;

/// One side's monsters plus the ones waiting to join at the next tick
#[derive(Debug, Clone, Default)]
pub struct Roster {
    pub monsters: Vec<MonsterStatus>,
    pending: Vec<MonsterStatus>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a monster that can act this tick
    pub fn deploy(&mut self, monster: MonsterStatus) {
        self.monsters.push(monster);
    }

    /// Add a monster that joins once the current tick ends
    pub fn queue(&mut self, monster: MonsterStatus) {
        self.pending.push(monster);
    }

    pub fn pending(&self) -> &[MonsterStatus] {
        &self.pending
    }

    /// Move queued monsters into the active roster. Returns how many joined.
    pub fn flush_pending(&mut self) -> usize {
        let joined = self.pending.len();
        self.monsters.append(&mut self.pending);
        joined
    }

    pub fn living(&self) -> impl Iterator<Item = &MonsterStatus> {
        self.monsters.iter().filter(|monster| monster.is_alive())
    }

    /// Indices of living monsters, in roster order
    pub fn living_indices(&self) -> Vec<usize> {
        self.monsters
            .iter()
            .enumerate()
            .filter(|(_, monster)| monster.is_alive())
            .map(|(index, _)| index)
            .collect()
    }

    /// True when nothing on this side can fight, including an empty side
    pub fn all_defeated(&self) -> bool {
        self.living().next().is_none()
    }

    pub fn find(&self, id: MonsterId) -> Option<&MonsterStatus> {
        self.monsters.iter().find(|monster| monster.id == id)
    }

    pub fn find_mut(&mut self, id: MonsterId) -> Option<&mut MonsterStatus> {
        self.monsters.iter_mut().find(|monster| monster.id == id)
    }

    pub fn clear(&mut self) {
        self.monsters.clear();
        self.pending.clear();
    }
}

/// Both sides of a battle
#[derive(Debug, Clone, Default)]
pub struct Participants {
    pub player: Roster,
    pub cpu: Roster,
}

impl Participants {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(&self, side: Side) -> &Roster {
        match side {
            Side::Player => &self.player,
            Side::Cpu => &self.cpu,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut Roster {
        match side {
            Side::Player => &mut self.player,
            Side::Cpu => &mut self.cpu,
        }
    }

    /// Borrow the acting side and its opponents at once
    pub fn split_mut(&mut self, acting: Side) -> (&mut Roster, &mut Roster) {
        match acting {
            Side::Player => (&mut self.player, &mut self.cpu),
            Side::Cpu => (&mut self.cpu, &mut self.player),
        }
    }

    pub fn find(&self, id: MonsterId) -> Option<&MonsterStatus> {
        self.side(id.side).find(id)
    }

    pub fn find_mut(&mut self, id: MonsterId) -> Option<&mut MonsterStatus> {
        self.side_mut(id.side).find_mut(id)
    }

    pub fn any_side_defeated(&self) -> bool {
        self.player.all_defeated() || self.cpu.all_defeated()
    }

    pub fn clear(&mut self) {
        self.player.clear();
        self.cpu.clear();
    }
}
