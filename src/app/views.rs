//! View rendering for the list area, header controls, dialogs, and toast.

use cosmic::iced::{Alignment, Length, Size};
use cosmic::{Element, cosmic_theme, theme, widget};

use crate::app::App;
use crate::constants::SKELETON_TILES;
use crate::fl;
use crate::message::Message;
use crate::pages::{ContextPage, DialogPage, preview};
use crate::record::AppRecord;
use crate::state::{ContentKind, SlideDirection, ToastCloseReason};
use crate::ui::{GridMetrics, pagination_row, skeleton_card, tile_view};

/// Pixels of horizontal offset per remaining transition frame
const SLIDE_STEP: f32 = 8.0;

/// Horizontal padding (left, right) for the grid while it slides into place
pub fn slide_offset(direction: SlideDirection, frames_remaining: usize) -> (f32, f32) {
    let offset = frames_remaining as f32 * SLIDE_STEP;
    match direction {
        // Sliding leftward: the grid enters from the right
        SlideDirection::Left => (offset, 0.0),
        SlideDirection::Right => (0.0, offset),
    }
}

/// Pagination renders alongside the list body and the empty notice, never
/// with the skeletons or the error banner
fn shows_pagination(content: &ContentKind<'_>) -> bool {
    matches!(content, ContentKind::Empty | ContentKind::Tiles(_))
}

pub fn render_content(app: &App, size: Size) -> Element<'_, Message> {
    let spacing = theme::active().cosmic().spacing;
    let grid_width = (size.width - 2.0 * spacing.space_s as f32).floor().max(0.0) as usize;

    let content = app.state.content();
    let paginated = shows_pagination(&content);
    let body: Element<_> = match content {
        ContentKind::Loading => render_skeletons(app.loading_frame, &spacing, grid_width),
        ContentKind::Error(message) => render_error(message, &spacing),
        ContentKind::Empty => widget::container(widget::text::body(fl!("no-items-found")))
            .padding(spacing.space_m)
            .width(Length::Fill)
            .align_x(Alignment::Center)
            .into(),
        ContentKind::Tiles(records) => render_tiles(app, records, &spacing, grid_width),
    };

    if !paginated {
        return body;
    }

    // An empty page can still sit inside a multi-page result set, so the
    // pagination row stays reachable
    widget::column::with_children(vec![
        body,
        widget::container(pagination_row(
            app.state.page(),
            app.state.total_pages(),
            &spacing,
        ))
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .into(),
    ])
    .spacing(spacing.space_m)
    .into()
}

fn render_skeletons<'a>(
    frame: usize,
    spacing: &cosmic_theme::Spacing,
    grid_width: usize,
) -> Element<'a, Message> {
    let GridMetrics {
        cols,
        item_width,
        column_spacing,
    } = GridMetrics::tiles(spacing, grid_width);

    let mut grid = widget::grid();
    let mut col = 0;
    for _ in 0..SKELETON_TILES {
        if col >= cols {
            grid = grid.insert_row();
            col = 0;
        }
        grid = grid.push(skeleton_card(frame, spacing, item_width));
        col += 1;
    }

    widget::container(
        grid.column_spacing(column_spacing)
            .row_spacing(column_spacing),
    )
    .padding([0, spacing.space_s])
    .into()
}

fn render_error<'a>(message: &'a str, spacing: &cosmic_theme::Spacing) -> Element<'a, Message> {
    widget::container(
        widget::column::with_children(vec![
            widget::row::with_children(vec![
                widget::icon::from_name("dialog-error-symbolic").size(32).into(),
                widget::text::title3(fl!("error")).into(),
            ])
            .spacing(spacing.space_xs)
            .align_y(Alignment::Center)
            .into(),
            widget::text::body(format!("{} {}", fl!("fetch-error"), message)).into(),
        ])
        .spacing(spacing.space_xs),
    )
    .padding(spacing.space_m)
    .class(theme::Container::Card)
    .into()
}

fn render_tiles<'a>(
    app: &'a App,
    records: &'a [AppRecord],
    spacing: &cosmic_theme::Spacing,
    grid_width: usize,
) -> Element<'a, Message> {
    let GridMetrics {
        cols,
        item_width,
        column_spacing,
    } = GridMetrics::tiles(spacing, grid_width);

    let mut grid = widget::grid();
    let mut col = 0;
    for (index, record) in records.iter().enumerate() {
        if col >= cols {
            grid = grid.insert_row();
            col = 0;
        }
        grid = grid.push(tile_view(
            index,
            record,
            app.state.is_flipped(&record.id),
            app.state.is_selected(&record.id),
            spacing,
            item_width,
        ));
        col += 1;
    }

    let (pad_left, pad_right) = slide_offset(app.state.slide_direction(), app.slide_frames);

    widget::container(
        grid.column_spacing(column_spacing)
            .row_spacing(column_spacing),
    )
    .padding([
        0.0,
        spacing.space_s as f32 + pad_right,
        0.0,
        spacing.space_s as f32 + pad_left,
    ])
    .into()
}

pub fn render_header_start(app: &App) -> Vec<Element<'_, Message>> {
    let mut elements = Vec::with_capacity(3);

    if app.search_active {
        elements.push(
            widget::search_input(fl!("search"), app.state.search())
                .width(Length::Fixed(240.0))
                .id(app.search_id.clone())
                .on_clear(Message::SearchClear)
                .on_input(Message::SearchInput)
                .on_submit(|_| Message::SearchSubmit)
                .into(),
        );
    } else {
        elements.push(
            widget::button::icon(widget::icon::from_name("system-search-symbolic"))
                .on_press(Message::SearchActivate)
                .into(),
        );
    }

    let sort_selected = crate::api::SortField::all()
        .iter()
        .position(|field| *field == app.state.sort_by());
    elements.push(
        widget::dropdown(&app.sort_field_options, sort_selected, Message::SortField).into(),
    );

    let direction_icon = match app.state.sort() {
        crate::api::SortDirection::Ascending => "view-sort-ascending-symbolic",
        crate::api::SortDirection::Descending => "view-sort-descending-symbolic",
    };
    elements.push(
        widget::button::icon(widget::icon::from_name(direction_icon))
            .on_press(Message::SortDirectionToggle)
            .into(),
    );

    elements
}

pub fn render_header_end(app: &App) -> Vec<Element<'_, Message>> {
    vec![
        widget::button::suggested(fl!("add"))
            .on_press(Message::AddApplication)
            .into(),
        widget::button::icon(widget::icon::from_name("mail-message-new-symbolic"))
            .on_press_maybe(
                app.state
                    .selected()
                    .map(|_| Message::ToggleContextPage(ContextPage::Preview)),
            )
            .into(),
        widget::button::icon(widget::icon::from_name("preferences-system-symbolic"))
            .on_press(Message::ToggleContextPage(ContextPage::Settings))
            .into(),
    ]
}

pub fn render_dialog(app: &App) -> Option<Element<'_, Message>> {
    let dialog_page = app.dialog_pages.front()?;
    let spacing = theme::active().cosmic().spacing;

    let dialog = match dialog_page {
        DialogPage::AppForm(form) => {
            let title = if form.is_edit() {
                fl!("edit-application")
            } else {
                fl!("add-application")
            };
            widget::dialog()
                .title(title)
                .control(
                    widget::column::with_children(vec![
                        widget::text::caption(fl!("name")).into(),
                        widget::text_input("", &form.name)
                            .on_input(Message::FormName)
                            .into(),
                        widget::text::caption(fl!("description")).into(),
                        widget::text_input("", &form.description)
                            .on_input(Message::FormDescription)
                            .into(),
                        widget::text::caption(fl!("template-body")).into(),
                        widget::text_input("", &form.template_body)
                            .on_input(Message::FormTemplateBody)
                            .into(),
                        widget::text::heading(fl!("notification-preview")).into(),
                        preview::preview(
                            &form.name,
                            &form.description,
                            &form.template_body,
                            &spacing,
                        ),
                    ])
                    .spacing(spacing.space_xxs),
                )
                .primary_action(
                    widget::button::suggested(fl!("save"))
                        .on_press_maybe(form.is_valid().then_some(Message::DialogConfirm)),
                )
                .secondary_action(
                    widget::button::standard(fl!("cancel")).on_press(Message::DialogCancel),
                )
        }
        DialogPage::DeleteConfirm { name, .. } => widget::dialog()
            .title(fl!("delete-application", name = name.as_str()))
            .body(fl!("delete-application-body"))
            .primary_action(
                widget::button::destructive(fl!("delete")).on_press(Message::DialogConfirm),
            )
            .secondary_action(
                widget::button::standard(fl!("cancel")).on_press(Message::DialogCancel),
            ),
    };

    Some(dialog.into())
}

pub fn render_toast(app: &App) -> Option<Element<'_, Message>> {
    let message = app.state.toast()?;
    let spacing = theme::active().cosmic().spacing;

    Some(
        widget::container(
            widget::row::with_children(vec![
                widget::icon::from_name("dialog-warning-symbolic").size(24).into(),
                widget::text::body(message).into(),
                widget::horizontal_space().into(),
                widget::button::text(fl!("dismiss"))
                    .on_press(Message::ToastClose(ToastCloseReason::Dismissed))
                    .into(),
            ])
            .spacing(spacing.space_xs)
            .align_y(Alignment::Center),
        )
        .padding(spacing.space_xs)
        .class(theme::Container::Card)
        .into(),
    )
}

pub fn render_preview(app: &App) -> Element<'_, Message> {
    let spacing = theme::active().cosmic().spacing;
    match app.state.selected() {
        Some(selection) => {
            let record = app
                .state
                .records()
                .iter()
                .find(|record| record.id == selection.id);
            match record {
                Some(record) => preview::preview(
                    &record.name,
                    record.description.as_deref().unwrap_or_default(),
                    record.template_body.as_deref().unwrap_or_default(),
                    &spacing,
                ),
                // Selection survives page changes; the record may no longer
                // be in the fetched page
                None => preview::preview(&selection.name, "", "", &spacing),
            }
        }
        None => widget::text::body(fl!("no-items-found")).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_offset_decays_to_zero() {
        assert_eq!(slide_offset(SlideDirection::Left, 0), (0.0, 0.0));
        assert_eq!(slide_offset(SlideDirection::Right, 0), (0.0, 0.0));
    }

    #[test]
    fn pagination_renders_for_empty_and_tile_lists() {
        let records = [AppRecord::default()];
        assert!(shows_pagination(&ContentKind::Empty));
        assert!(shows_pagination(&ContentKind::Tiles(&records)));
        assert!(!shows_pagination(&ContentKind::Loading));
        assert!(!shows_pagination(&ContentKind::Error("connection refused")));
    }

    #[test]
    fn slide_offset_pads_the_entering_edge() {
        let (left, right) = slide_offset(SlideDirection::Left, 3);
        assert!(left > 0.0);
        assert_eq!(right, 0.0);

        let (left, right) = slide_offset(SlideDirection::Right, 3);
        assert_eq!(left, 0.0);
        assert!(right > 0.0);
    }
}
