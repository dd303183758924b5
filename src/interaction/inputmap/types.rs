// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use smallvec::{smallvec, SmallVec};
use std::collections::HashMap;

/// Logical game actions. Levels read actions, never raw devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action { MoveLeft, MoveRight, MoveUp, MoveDown, Mash, Restart, ToggleGizmos }

impl Action {
    pub const ALL: [Action; 7] = [Action::MoveLeft, Action::MoveRight, Action::MoveUp, Action::MoveDown, Action::Mash, Action::Restart, Action::ToggleGizmos];
    pub fn name(self) -> &'static str { match self { Self::MoveLeft => "MoveLeft", Self::MoveRight => "MoveRight", Self::MoveUp => "MoveUp", Self::MoveDown => "MoveDown", Self::Mash => "Mash", Self::Restart => "Restart", Self::ToggleGizmos => "ToggleGizmos" } }
    pub fn from_name(name: &str) -> Option<Self> { Self::ALL.into_iter().find(|a| a.name() == name) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawBindingToken { Key(KeyCode), MouseBtn(MouseButton) }

pub type BindingList = SmallVec<[RawBindingToken; 2]>;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct InputMap {
    pub bindings: HashMap<Action, BindingList>,
    pub descriptions: HashMap<Action, String>,
}

impl Default for InputMap {
    fn default() -> Self {
        use RawBindingToken::Key;
        let mut bindings = HashMap::new();
        bindings.insert(Action::MoveLeft, smallvec![Key(KeyCode::ArrowLeft)]);
        bindings.insert(Action::MoveRight, smallvec![Key(KeyCode::ArrowRight)]);
        bindings.insert(Action::MoveUp, smallvec![Key(KeyCode::ArrowUp)]);
        bindings.insert(Action::MoveDown, smallvec![Key(KeyCode::ArrowDown)]);
        bindings.insert(Action::Mash, smallvec![Key(KeyCode::Space)]);
        bindings.insert(Action::Restart, smallvec![Key(KeyCode::Space)]);
        bindings.insert(Action::ToggleGizmos, smallvec![Key(KeyCode::F3)]);
        Self { bindings, descriptions: HashMap::new() }
    }
}

impl InputMap {
    pub fn tokens(&self, action: Action) -> &[RawBindingToken] { self.bindings.get(&action).map(|b| b.as_slice()).unwrap_or(&[]) }
    pub fn pressed(&self, action: Action, keys: &ButtonInput<KeyCode>, mouse: &ButtonInput<MouseButton>) -> bool { self.tokens(action).iter().any(|t| match t { RawBindingToken::Key(k) => keys.pressed(*k), RawBindingToken::MouseBtn(b) => mouse.pressed(*b) }) }
    pub fn just_pressed(&self, action: Action, keys: &ButtonInput<KeyCode>, mouse: &ButtonInput<MouseButton>) -> bool { self.tokens(action).iter().any(|t| match t { RawBindingToken::Key(k) => keys.just_pressed(*k), RawBindingToken::MouseBtn(b) => mouse.just_pressed(*b) }) }
}

/// Per-frame player intent produced in `PreUpdate` and consumed by fixed-tick gameplay.
/// Held directions are a snapshot; discrete presses accumulate until drained so a
/// press is counted exactly once whatever the frame/tick ratio.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PlayerIntent {
    /// x: right positive, y: down positive (playfield convention). Components are -1, 0 or 1.
    pub axis: Vec2,
    pub mash_presses: u32,
    pub restart_presses: u32,
}

impl PlayerIntent {
    pub fn take_mash(&mut self) -> u32 { std::mem::take(&mut self.mash_presses) }
    pub fn take_restart(&mut self) -> bool { std::mem::take(&mut self.restart_presses) > 0 }
}
