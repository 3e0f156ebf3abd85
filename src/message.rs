use cosmic::{
    cosmic_theme,
    iced::keyboard::{Key, Modifiers},
};

use crate::config::{AppTheme, Config};
use crate::pages::ContextPage;
use crate::record::PageData;
use crate::state::ToastCloseReason;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    AddApplication,
    SearchActivate,
}

impl Action {
    pub fn message(&self) -> Message {
        match self {
            Self::AddApplication => Message::AddApplication,
            Self::SearchActivate => Message::SearchActivate,
        }
    }
}

/// What a completed mutation was, so the handler knows which follow-up the
/// refresh needs
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MutationOutcome {
    Saved,
    ActiveSet,
    Deleted,
}

/// Messages that are used specifically by our [`App`](crate::app::App).
#[derive(Clone, Debug)]
pub enum Message {
    ActionError(String),
    AddApplication,
    ApiUrlInput(String),
    ApiUrlSubmit,
    AppTheme(AppTheme),
    Config(Config),
    DeleteApplication(usize),
    DialogCancel,
    DialogConfirm,
    EditApplication(usize),
    FlipExpired(String, u64),
    FormDescription(String),
    FormName(String),
    FormTemplateBody(String),
    Key(Modifiers, Key),
    LoadingTick,
    Mutated(MutationOutcome),
    PageChange(u32),
    PageResults(u64, Result<PageData, String>),
    SearchActivate,
    SearchClear,
    SearchInput(String),
    SearchSubmit,
    Select(usize),
    SetActive(usize, bool),
    SortDirectionToggle,
    SortField(usize),
    SystemThemeModeChange(cosmic_theme::ThemeMode),
    ToastClose(ToastCloseReason),
    ToastExpired(u64),
    ToggleContextPage(ContextPage),
    ToggleFlip(usize),
}
