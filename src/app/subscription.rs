// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard navigation keys are turned into [`KeyPress`] messages; whether
//! they drive the modal or the page focus ring is decided in `update`.

use super::config::TIMER_TICK_MS;
use super::{KeyPress, Message};
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes uncaptured Tab, Enter and Escape presses.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window| {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = &event
        else {
            return None;
        };

        match status {
            event::Status::Ignored => key_press(key, *modifiers).map(Message::Key),
            event::Status::Captured => None,
        }
    })
}

/// Maps a key to a navigation action.
pub fn key_press(key: &Key, modifiers: Modifiers) -> Option<KeyPress> {
    match key {
        Key::Named(Named::Tab) => Some(KeyPress::Tab {
            backwards: modifiers.shift(),
        }),
        Key::Named(Named::Enter) => Some(KeyPress::Enter),
        Key::Named(Named::Escape) => Some(KeyPress::Escape),
        _ => None,
    }
}

/// Creates the periodic tick for toast auto-dismiss. Only active while
/// removals are pending.
pub fn create_tick_subscription(has_pending_timers: bool) -> Subscription<Message> {
    if has_pending_timers {
        time::every(Duration::from_millis(TIMER_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
