use std::collections::HashMap;

use cosmic::{
    iced::keyboard::Key,
    widget::menu::key_bind::{KeyBind, Modifier},
};

use crate::message::Action;

pub fn key_binds() -> HashMap<KeyBind, Action> {
    let mut key_binds = HashMap::new();

    macro_rules! bind {
        ([$($modifier:ident),* $(,)?], $key:expr, $action:ident) => {{
            key_binds.insert(
                KeyBind {
                    modifiers: vec![$(Modifier::$modifier),*],
                    key: $key,
                },
                Action::$action,
            );
        }};
    }

    bind!([Ctrl], Key::Character("f".into()), SearchActivate);
    bind!([Ctrl], Key::Character("n".into()), AddApplication);

    key_binds
}
