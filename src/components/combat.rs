//! Health and attack state for anything that can fight.
//!
//! The [`Combatant`] trait is the capability every fighter exposes. Two
//! concrete implementations exist:
//!
//! - [`BasicCombat`]: attacks always succeed, no cooldown. Used by the player.
//! - [`CooldownCombat`]: attacks are rate limited to one every
//!   `attack_cooldown` ticks. Used by enemies.
//!
//! The [`Combat`] component wraps either one; the variant is chosen when the
//! entity is spawned.
//!
//! Health is not clamped and may go negative. Death is not signalled here:
//! callers test `health() <= 0`.

use bevy_ecs::prelude::Component;

/// Capabilities shared by every combat implementation.
pub trait Combatant {
    /// Try to attack. Returns whether the attack happened; when it returns
    /// false the caller must not apply damage.
    fn attack(&mut self) -> bool;
    /// Whether this fighter has attacked at least once.
    fn attacking(&self) -> bool;
    fn attack_power(&self) -> i32;
    /// Subtract `amount` from health, without a floor.
    fn damage(&mut self, amount: i32);
    /// Add `amount` to health.
    fn heal(&mut self, amount: i32);
    fn health(&self) -> i32;
    /// Advance internal timers by one tick.
    fn update(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCombat {
    attacking: bool,
    attack_power: i32,
    health: i32,
}

impl BasicCombat {
    pub fn new(attack_power: i32, health: i32) -> Self {
        Self {
            attacking: false,
            attack_power,
            health,
        }
    }
}

impl Combatant for BasicCombat {
    fn attack(&mut self) -> bool {
        self.attacking = true;
        true
    }

    fn attacking(&self) -> bool {
        self.attacking
    }

    fn attack_power(&self) -> i32 {
        self.attack_power
    }

    fn damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    fn heal(&mut self, amount: i32) {
        self.health += amount;
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn update(&mut self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooldownCombat {
    basic: BasicCombat,
    attack_cooldown: u32,
    time_since_attack: u32,
}

impl CooldownCombat {
    /// A new cooldown fighter is ready to attack on its first tick.
    pub fn new(attack_cooldown: u32, attack_power: i32, health: i32) -> Self {
        Self {
            basic: BasicCombat::new(attack_power, health),
            attack_cooldown,
            time_since_attack: attack_cooldown,
        }
    }

    pub fn attack_cooldown(&self) -> u32 {
        self.attack_cooldown
    }

    pub fn time_since_attack(&self) -> u32 {
        self.time_since_attack
    }
}

impl Combatant for CooldownCombat {
    fn attack(&mut self) -> bool {
        if self.time_since_attack >= self.attack_cooldown {
            self.basic.attacking = true;
            self.time_since_attack = 0;
            true
        } else {
            false
        }
    }

    fn attacking(&self) -> bool {
        self.basic.attacking()
    }

    fn attack_power(&self) -> i32 {
        self.basic.attack_power()
    }

    fn damage(&mut self, amount: i32) {
        self.basic.damage(amount);
    }

    fn heal(&mut self, amount: i32) {
        self.basic.heal(amount);
    }

    fn health(&self) -> i32 {
        self.basic.health()
    }

    fn update(&mut self) {
        self.time_since_attack = self.time_since_attack.saturating_add(1);
    }
}

/// Combat component: one of the [`Combatant`] implementations.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub enum Combat {
    Basic(BasicCombat),
    Cooldown(CooldownCombat),
}

impl Combat {
    pub fn basic(attack_power: i32, health: i32) -> Self {
        Combat::Basic(BasicCombat::new(attack_power, health))
    }

    pub fn cooldown(attack_cooldown: u32, attack_power: i32, health: i32) -> Self {
        Combat::Cooldown(CooldownCombat::new(attack_cooldown, attack_power, health))
    }

    fn inner(&self) -> &dyn Combatant {
        match self {
            Combat::Basic(c) => c,
            Combat::Cooldown(c) => c,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Combatant {
        match self {
            Combat::Basic(c) => c,
            Combat::Cooldown(c) => c,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health() <= 0
    }
}

impl Combatant for Combat {
    fn attack(&mut self) -> bool {
        self.inner_mut().attack()
    }

    fn attacking(&self) -> bool {
        self.inner().attacking()
    }

    fn attack_power(&self) -> i32 {
        self.inner().attack_power()
    }

    fn damage(&mut self, amount: i32) {
        self.inner_mut().damage(amount);
    }

    fn heal(&mut self, amount: i32) {
        self.inner_mut().heal(amount);
    }

    fn health(&self) -> i32 {
        self.inner().health()
    }

    fn update(&mut self) {
        self.inner_mut().update();
    }
}
