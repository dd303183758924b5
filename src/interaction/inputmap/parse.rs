// This file is part of HELIOS.
// Copyright (C) 2025 HELIOS contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::types::*;
use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct ParsedInputConfig { pub input_map: InputMap, pub errors: Vec<String> }

#[derive(Debug, serde::Deserialize)]
struct ActionDecl { description: Option<String> }

#[derive(Debug, serde::Deserialize)]
struct RootToml { actions: Option<HashMap<String, ActionDecl>>, bindings: Option<HashMap<String, Vec<String>>> }

/// Parse the TOML input map. Problems are collected, never fatal: any action left
/// without a usable binding keeps its built-in default.
pub fn parse_input_toml(raw: &str) -> ParsedInputConfig {
    let mut result = ParsedInputConfig::default();
    let defaults = InputMap::default();
    let root: RootToml = match toml::from_str(raw) { Ok(r) => r, Err(e) => { result.errors.push(format!("Top-level parse: {e}")); return result; } };

    let mut descriptions = HashMap::new();
    if let Some(map) = root.actions { for (name, decl) in map { match Action::from_name(&name) { Some(a) => { descriptions.insert(a, decl.description.unwrap_or_default()); } None => result.errors.push(format!("Unknown action '{}' (expected one of {:?})", name, Action::ALL.map(Action::name))) } } }

    let mut bindings: HashMap<Action, BindingList> = HashMap::new();
    for (action_name, list) in root.bindings.unwrap_or_default() {
        let Some(action) = Action::from_name(&action_name) else { result.errors.push(format!("Binding references unknown action '{}'", action_name)); continue; };
        let mut seen: HashSet<RawBindingToken> = HashSet::new();
        let entry = bindings.entry(action).or_default();
        for spec in &list { match parse_token(spec.trim()) { Ok(token) => { if seen.insert(token) { entry.push(token); } else { result.errors.push(format!("[binding {} '{}'] duplicate token", action_name, spec)); } } Err(err) => result.errors.push(format!("[binding {} '{}'] {err}", action_name, spec)) } }
    }
    for action in Action::ALL { let empty = bindings.get(&action).is_none_or(|b| b.is_empty()); if empty { if descriptions.contains_key(&action) { result.errors.push(format!("Action {} has no valid binding; using default", action.name())); } bindings.insert(action, defaults.bindings.get(&action).cloned().unwrap_or_default()); } }

    result.input_map = InputMap { bindings, descriptions };
    result
}

fn parse_token(s: &str) -> Result<RawBindingToken, String> {
    if let Some(rest) = s.strip_prefix("Key:") { return parse_keycode(rest).map(RawBindingToken::Key); }
    if let Some(rest) = s.strip_prefix("Mouse:") { return match rest { "Left" => Ok(RawBindingToken::MouseBtn(MouseButton::Left)), "Right" => Ok(RawBindingToken::MouseBtn(MouseButton::Right)), "Middle" => Ok(RawBindingToken::MouseBtn(MouseButton::Middle)), other => Err(format!("Unknown mouse button '{}'", other)) }; }
    Err(format!("Unrecognized token '{}' (expected Key:<name> or Mouse:<button>)", s))
}

fn parse_keycode(name: &str) -> Result<KeyCode, String> {
    let kc = match name {
        "ArrowLeft" | "Left" => KeyCode::ArrowLeft, "ArrowRight" | "Right" => KeyCode::ArrowRight, "ArrowUp" | "Up" => KeyCode::ArrowUp, "ArrowDown" | "Down" => KeyCode::ArrowDown,
        "Space" => KeyCode::Space, "Enter" => KeyCode::Enter, "Escape" => KeyCode::Escape,
        "F1" => KeyCode::F1, "F2" => KeyCode::F2, "F3" => KeyCode::F3, "F4" => KeyCode::F4,
        "A" | "KeyA" => KeyCode::KeyA, "D" | "KeyD" => KeyCode::KeyD, "W" | "KeyW" => KeyCode::KeyW, "S" | "KeyS" => KeyCode::KeyS, "R" | "KeyR" => KeyCode::KeyR, "J" | "KeyJ" => KeyCode::KeyJ, "K" | "KeyK" => KeyCode::KeyK,
        other => return Err(format!("Unsupported KeyCode '{}' (extend parser)", other)),
    };
    Ok(kc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_mouse() {
        let raw = r#"
            [actions]
            MoveLeft = { description = "left" }
            [bindings]
            MoveLeft = ["Key:ArrowLeft", "Key:A"]
            Mash = ["Key:Space", "Mouse:Left"]
        "#;
        let parsed = parse_input_toml(raw);
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        assert_eq!(parsed.input_map.tokens(Action::MoveLeft), &[RawBindingToken::Key(KeyCode::ArrowLeft), RawBindingToken::Key(KeyCode::KeyA)]);
        assert_eq!(parsed.input_map.tokens(Action::Mash).len(), 2);
        // untouched actions keep defaults
        assert_eq!(parsed.input_map.tokens(Action::MoveUp), &[RawBindingToken::Key(KeyCode::ArrowUp)]);
    }

    #[test]
    fn bad_tokens_reported_and_defaulted() {
        let raw = r#"
            [actions]
            Restart = {}
            [bindings]
            Restart = ["Key:F13", "Joystick:1"]
            Jump = ["Key:Space"]
        "#;
        let parsed = parse_input_toml(raw);
        assert_eq!(parsed.errors.len(), 4, "{:?}", parsed.errors);
        assert_eq!(parsed.input_map.tokens(Action::Restart), &[RawBindingToken::Key(KeyCode::Space)]);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        let parsed = parse_input_toml("[bindings\nMash = ");
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.input_map, InputMap::default());
    }
}
