pub(crate) mod data;
mod handlers;
mod views;

use cosmic::{
    Application, ApplicationExt, Element,
    app::{Core, Task, context_drawer},
    cosmic_config::{self},
    executor,
    iced::{Alignment, Subscription},
    widget::{self},
};
use std::collections::{HashMap, VecDeque};
use tokio::sync::watch;

use crate::api::{ApiClient, SortField};
use crate::cli::Flags;
use crate::config::{AppTheme, Config};
use crate::constants::MAX_GRID_WIDTH;
use crate::key_bind::key_binds;
use crate::message::{Action, Message};
use crate::pages::{ContextPage, DialogPage};
use crate::state::{ListState, Selection, ToastCloseReason};

use crate::fl;
use cosmic::widget::menu::key_bind::KeyBind;

pub struct App {
    pub(crate) core: Core,
    pub(crate) config_handler: Option<cosmic_config::Config>,
    pub(crate) config: Config,
    pub(crate) locale: String,
    pub(crate) client: ApiClient,
    pub(crate) state: ListState,
    pub(crate) context_page: ContextPage,
    pub(crate) dialog_pages: VecDeque<DialogPage>,
    pub(crate) key_binds: HashMap<KeyBind, Action>,
    pub(crate) search_active: bool,
    pub(crate) search_id: widget::Id,
    pub(crate) sort_field_options: Vec<String>,
    pub(crate) app_themes: Vec<String>,
    pub(crate) api_url_input: String,
    pub(crate) selection_tx: Option<watch::Sender<Option<Selection>>>,
    pub(crate) loading_frame: usize,
    pub(crate) slide_frames: usize,
}

impl App {
    /// Start a fresh fetch for the current page, search, and sort
    pub(crate) fn refresh(&mut self) -> Task<Message> {
        let (token, query) = self.state.begin_fetch();
        data::list_task(self.client.clone(), token, query)
    }

    pub(crate) fn rebuild_client(&mut self) {
        let api_url = self.config.api_url.clone();
        log::info!("backend API URL set to {:?}", api_url);
        self.client = ApiClient::new(&api_url, &self.locale);
    }

    /// Publish the current selection to the parent collaborator, if any
    pub(crate) fn publish_selection(&self) {
        if let Some(selection_tx) = &self.selection_tx {
            let _ = selection_tx.send(self.state.selected().cloned());
        }
    }

    fn update_config(&mut self) -> Task<Message> {
        cosmic::command::set_theme(self.config.app_theme.theme())
    }

    pub(crate) fn handle_config_message(&mut self, message: Message) -> Task<Message> {
        handlers::handle_config_message(self, message)
    }

    pub(crate) fn handle_search_message(&mut self, message: Message) -> Task<Message> {
        handlers::handle_search_message(self, message)
    }

    pub(crate) fn handle_list_message(&mut self, message: Message) -> Task<Message> {
        handlers::handle_list_message(self, message)
    }

    pub(crate) fn handle_tile_message(&mut self, message: Message) -> Task<Message> {
        handlers::handle_tile_message(self, message)
    }

    pub(crate) fn handle_action_message(&mut self, message: Message) -> Task<Message> {
        handlers::handle_action_message(self, message)
    }

    fn update_title(&mut self) -> Task<Message> {
        if let Some(window_id) = &self.core.main_window_id() {
            self.set_window_title(fl!("app-name"), *window_id)
        } else {
            Task::none()
        }
    }

    pub(crate) fn settings(&self) -> Element<'_, Message> {
        let app_theme_selected = match self.config.app_theme {
            AppTheme::Dark => 1,
            AppTheme::Light => 2,
            AppTheme::System => 0,
        };
        widget::settings::view_column(vec![
            widget::settings::section()
                .title(fl!("appearance"))
                .add(
                    widget::settings::item::builder(fl!("theme")).control(widget::dropdown(
                        &self.app_themes,
                        Some(app_theme_selected),
                        move |index| {
                            Message::AppTheme(match index {
                                1 => AppTheme::Dark,
                                2 => AppTheme::Light,
                                _ => AppTheme::System,
                            })
                        },
                    )),
                )
                .into(),
            widget::settings::section()
                .title(fl!("backend"))
                .add(
                    widget::settings::item::builder(fl!("api-url")).control(
                        widget::text_input("", &self.api_url_input)
                            .on_input(Message::ApiUrlInput)
                            .on_submit(|_| Message::ApiUrlSubmit),
                    ),
                )
                .into(),
        ])
        .into()
    }
}

/// Implement [`Application`] to integrate with COSMIC.
impl Application for App {
    /// Multithreaded async executor to use with the app.
    type Executor = executor::multi::Executor;

    /// Argument received
    type Flags = Flags;

    /// Message type specific to our [`App`].
    type Message = Message;

    /// The unique application ID to supply to the window manager.
    const APP_ID: &'static str = "com.shipdocs.NotifyAdmin";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Creates the application, and optionally emits command on initialize.
    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Self::Message>) {
        let locale = sys_locale::get_locale().unwrap_or_else(|| {
            log::warn!("failed to get system locale, falling back to en-US");
            String::from("en-US")
        });

        let api_url = flags
            .api_url_override
            .clone()
            .unwrap_or_else(|| flags.config.api_url.clone());
        let client = ApiClient::new(&api_url, &locale);

        let app_themes = vec![fl!("match-desktop"), fl!("dark"), fl!("light")];
        let sort_field_options = SortField::all()
            .iter()
            .map(|field| field.title())
            .collect();

        let mut app = App {
            core,
            config_handler: flags.config_handler,
            config: flags.config,
            locale,
            client,
            state: ListState::new(),
            context_page: ContextPage::Settings,
            dialog_pages: VecDeque::new(),
            key_binds: key_binds(),
            search_active: false,
            search_id: widget::Id::unique(),
            sort_field_options,
            app_themes,
            api_url_input: api_url,
            selection_tx: flags.selection_tx,
            loading_frame: 0,
            slide_frames: 0,
        };

        let command = Task::batch([app.update_title(), app.refresh()]);
        (app, command)
    }

    fn on_escape(&mut self) -> Task<Message> {
        if self.core.window.show_context {
            // Close context drawer if open
            self.core.window.show_context = false;
        } else if self.search_active {
            // Close search if open
            self.search_active = false;
            if self.state.clear_search() {
                return self.refresh();
            }
        }
        Task::none()
    }

    /// Handle application events here.
    fn update(&mut self, message: Self::Message) -> Task<Message> {
        handlers::update(self, message)
    }

    fn context_drawer(&self) -> Option<context_drawer::ContextDrawer<'_, Message>> {
        if !self.core.window.show_context {
            return None;
        }

        Some(match &self.context_page {
            ContextPage::Preview => context_drawer::context_drawer(
                views::render_preview(self),
                Message::ToggleContextPage(ContextPage::Preview),
            )
            .title(fl!("notification-preview")),
            ContextPage::Settings => context_drawer::context_drawer(
                self.settings(),
                Message::ToggleContextPage(ContextPage::Settings),
            )
            .title(fl!("settings")),
        })
    }

    fn dialog(&self) -> Option<Element<'_, Message>> {
        views::render_dialog(self)
    }

    fn footer(&self) -> Option<Element<'_, Message>> {
        views::render_toast(self)
    }

    fn header_start(&self) -> Vec<Element<'_, Message>> {
        views::render_header_start(self)
    }

    fn header_end(&self) -> Vec<Element<'_, Message>> {
        views::render_header_end(self)
    }

    /// Creates a view after each update.
    fn view(&self) -> Element<'_, Self::Message> {
        let content: Element<_> = widget::responsive(move |mut size| {
            size.width = size.width.min(MAX_GRID_WIDTH);
            widget::scrollable(
                widget::container(
                    widget::container(views::render_content(self, size))
                        .max_width(MAX_GRID_WIDTH),
                )
                .align_x(Alignment::Center),
            )
            .into()
        })
        .into();

        if self.state.toast().is_some() {
            // Presses outside the toast reach it as click-away, which the
            // toast ignores
            widget::mouse_area(content)
                .on_press(Message::ToastClose(ToastCloseReason::ClickAway))
                .into()
        } else {
            content
        }
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        handlers::subscription(self)
    }
}
