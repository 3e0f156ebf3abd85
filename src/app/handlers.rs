//! Message handler implementations.
//!
//! Each function handles a specific category of messages and is called via
//! thin wrapper methods on the [`App`](crate::app::App) struct.

use cosmic::Application;
use cosmic::app::Task;
use cosmic::cosmic_config::CosmicConfigEntry;
use cosmic::iced::Subscription;
use cosmic::iced::keyboard::{self, Key};
use cosmic::widget;

use crate::api::SortField;
use crate::app::{App, data};
use crate::constants::SLIDE_FRAMES;
use crate::message::{Message, MutationOutcome};
use crate::pages::{DialogPage, FormState};

pub fn handle_config_message(app: &mut App, message: Message) -> Task<Message> {
    macro_rules! config_set {
        ($name: ident, $value: expr) => {
            match &app.config_handler {
                Some(config_handler) => {
                    match paste::paste! { app.config.[<set_ $name>](config_handler, $value) } {
                        Ok(_) => {}
                        Err(err) => {
                            log::warn!("failed to save config {:?}: {}", stringify!($name), err);
                        }
                    }
                }
                None => {
                    app.config.$name = $value;
                    log::warn!(
                        "failed to save config {:?}: no config handler",
                        stringify!($name)
                    );
                }
            }
        };
    }

    match message {
        Message::AppTheme(app_theme) => {
            config_set!(app_theme, app_theme);
            app.update_config()
        }
        Message::Config(config) => {
            if config != app.config {
                log::info!("update config");
                let api_url_changed = config.api_url != app.config.api_url;
                app.config = config;
                if api_url_changed {
                    app.api_url_input = app.config.api_url.clone();
                    app.rebuild_client();
                    return Task::batch([app.update_config(), app.refresh()]);
                }
                app.update_config()
            } else {
                Task::none()
            }
        }
        Message::SystemThemeModeChange(_theme_mode) => app.update_config(),
        Message::ApiUrlInput(url) => {
            app.api_url_input = url;
            Task::none()
        }
        Message::ApiUrlSubmit => {
            let url = app.api_url_input.trim().to_string();
            if url.is_empty() || url == app.config.api_url {
                return Task::none();
            }
            config_set!(api_url, url);
            app.rebuild_client();
            app.refresh()
        }
        _ => Task::none(),
    }
}

pub fn handle_search_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::SearchActivate => {
            app.search_active = true;
            widget::text_input::focus(app.search_id.clone())
        }
        Message::SearchClear => {
            app.search_active = false;
            if app.state.clear_search() {
                app.refresh()
            } else {
                Task::none()
            }
        }
        Message::SearchInput(input) => {
            if app.state.set_search(input) {
                app.refresh()
            } else {
                Task::none()
            }
        }
        // Each input change already issued a fetch
        Message::SearchSubmit => Task::none(),
        _ => Task::none(),
    }
}

pub fn handle_list_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::PageChange(page) => {
            if app.state.set_page(page) {
                app.refresh()
            } else {
                Task::none()
            }
        }
        Message::PageResults(token, result) => {
            if app.state.apply_fetch(token, result) {
                app.slide_frames = SLIDE_FRAMES;
            } else {
                log::info!("discarded stale page response");
            }
            Task::none()
        }
        Message::SortField(index) => match SortField::all().get(index) {
            Some(sort_by) => {
                if app.state.set_sort_by(*sort_by) {
                    app.refresh()
                } else {
                    Task::none()
                }
            }
            None => {
                log::warn!("sort field index {} out of range", index);
                Task::none()
            }
        },
        Message::SortDirectionToggle => {
            app.state.toggle_sort_direction();
            app.refresh()
        }
        Message::LoadingTick => {
            app.loading_frame = app.loading_frame.wrapping_add(1);
            app.slide_frames = app.slide_frames.saturating_sub(1);
            Task::none()
        }
        _ => Task::none(),
    }
}

pub fn handle_tile_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Select(index) => {
            let selected = app.state.select(index).map(|selection| selection.id.clone());
            if let Some(id) = selected {
                log::info!("selected {:?}", id);
                app.publish_selection();
            }
            Task::none()
        }
        Message::ToggleFlip(index) => match app.state.record(index) {
            Some(record) => {
                let id = record.id.clone();
                let token = app.state.toggle_flip(&id);
                if app.state.is_flipped(&id) {
                    data::flip_back_timer(id, token)
                } else {
                    Task::none()
                }
            }
            None => Task::none(),
        },
        Message::FlipExpired(id, token) => {
            app.state.expire_flip(&id, token);
            Task::none()
        }
        _ => Task::none(),
    }
}

pub fn handle_action_message(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::AddApplication => {
            app.dialog_pages
                .push_back(DialogPage::AppForm(FormState::create()));
            Task::none()
        }
        Message::EditApplication(index) => {
            if let Some(record) = app.state.record(index) {
                app.dialog_pages
                    .push_back(DialogPage::AppForm(FormState::edit(record)));
            }
            Task::none()
        }
        Message::DeleteApplication(index) => {
            if let Some(record) = app.state.record(index) {
                app.dialog_pages.push_back(DialogPage::DeleteConfirm {
                    id: record.id.clone(),
                    name: record.name.clone(),
                });
            }
            Task::none()
        }
        Message::SetActive(index, active) => match app.state.record(index) {
            Some(record) => data::set_active_task(app.client.clone(), record.id.clone(), active),
            None => Task::none(),
        },
        Message::DialogCancel => {
            app.dialog_pages.pop_front();
            Task::none()
        }
        Message::DialogConfirm => match app.dialog_pages.pop_front() {
            Some(DialogPage::AppForm(form)) if form.is_valid() => {
                data::save_task(app.client.clone(), form.id.clone(), form.draft())
            }
            Some(DialogPage::AppForm(_)) => Task::none(),
            Some(DialogPage::DeleteConfirm { id, .. }) => {
                data::delete_task(app.client.clone(), id)
            }
            None => Task::none(),
        },
        Message::FormName(name) => {
            if let Some(DialogPage::AppForm(form)) = app.dialog_pages.front_mut() {
                form.name = name;
            }
            Task::none()
        }
        Message::FormDescription(description) => {
            if let Some(DialogPage::AppForm(form)) = app.dialog_pages.front_mut() {
                form.description = description;
            }
            Task::none()
        }
        Message::FormTemplateBody(template_body) => {
            if let Some(DialogPage::AppForm(form)) = app.dialog_pages.front_mut() {
                form.template_body = template_body;
            }
            Task::none()
        }
        Message::Mutated(outcome) => {
            if outcome == MutationOutcome::Deleted {
                app.state.record_deleted();
            }
            app.refresh()
        }
        Message::ActionError(message) => {
            let token = app.state.open_toast(message);
            data::toast_timer(token)
        }
        Message::ToastClose(reason) => {
            app.state.close_toast(reason);
            Task::none()
        }
        Message::ToastExpired(token) => {
            app.state.expire_toast(token);
            Task::none()
        }
        _ => Task::none(),
    }
}

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ApiUrlInput(_)
        | Message::ApiUrlSubmit
        | Message::AppTheme(_)
        | Message::Config(_)
        | Message::SystemThemeModeChange(_) => {
            return app.handle_config_message(message);
        }
        Message::SearchActivate
        | Message::SearchClear
        | Message::SearchInput(_)
        | Message::SearchSubmit => {
            return app.handle_search_message(message);
        }
        Message::LoadingTick
        | Message::PageChange(_)
        | Message::PageResults(..)
        | Message::SortDirectionToggle
        | Message::SortField(_) => {
            return app.handle_list_message(message);
        }
        Message::FlipExpired(..) | Message::Select(_) | Message::ToggleFlip(_) => {
            return app.handle_tile_message(message);
        }
        Message::ActionError(_)
        | Message::AddApplication
        | Message::DeleteApplication(_)
        | Message::DialogCancel
        | Message::DialogConfirm
        | Message::EditApplication(_)
        | Message::FormDescription(_)
        | Message::FormName(_)
        | Message::FormTemplateBody(_)
        | Message::Mutated(_)
        | Message::SetActive(..)
        | Message::ToastClose(_)
        | Message::ToastExpired(_) => {
            return app.handle_action_message(message);
        }
        Message::Key(modifiers, key) => {
            if !app.dialog_pages.is_empty()
                && matches!(key, Key::Named(keyboard::key::Named::Escape))
                && !modifiers.logo()
                && !modifiers.control()
                && !modifiers.alt()
                && !modifiers.shift()
            {
                return update(app, Message::DialogCancel);
            }

            for (key_bind, action) in app.key_binds.iter() {
                if key_bind.matches(modifiers, &key) {
                    return update(app, action.message());
                }
            }
        }
        Message::ToggleContextPage(context_page) => {
            if app.core.window.show_context && app.context_page == context_page {
                app.core.window.show_context = false;
            } else {
                app.context_page = context_page;
                app.core.window.show_context = true;
            }
        }
    }

    Task::none()
}

pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![
        cosmic::iced::event::listen_with(|event, status, _window_id| match event {
            cosmic::iced::event::Event::Keyboard(cosmic::iced::keyboard::Event::KeyPressed {
                key,
                modifiers,
                ..
            }) => match status {
                cosmic::iced::event::Status::Ignored => Some(Message::Key(modifiers, key)),
                cosmic::iced::event::Status::Captured => None,
            },
            _ => None,
        }),
        cosmic::cosmic_config::config_subscription(
            std::any::TypeId::of::<crate::config::Config>(),
            crate::app::App::APP_ID.into(),
            crate::config::CONFIG_VERSION,
        )
        .map(|update| {
            if !update.errors.is_empty() {
                log::debug!("errors loading config: {:?}", update.errors);
            }
            Message::Config(update.config)
        }),
        cosmic::cosmic_config::config_subscription::<_, cosmic::cosmic_theme::ThemeMode>(
            std::any::TypeId::of::<cosmic::cosmic_theme::ThemeMode>(),
            cosmic::cosmic_theme::THEME_MODE_ID.into(),
            cosmic::cosmic_theme::ThemeMode::version(),
        )
        .map(|update| {
            if !update.errors.is_empty() {
                log::debug!("errors loading theme mode: {:?}", update.errors);
            }
            Message::SystemThemeModeChange(update.config)
        }),
    ];

    // The tick drives the skeleton shimmer and the page slide transition
    if app.state.is_loading() || app.slide_frames > 0 {
        subscriptions.push(
            cosmic::iced::time::every(std::time::Duration::from_millis(16))
                .map(|_| Message::LoadingTick),
        );
    }

    Subscription::batch(subscriptions)
}
