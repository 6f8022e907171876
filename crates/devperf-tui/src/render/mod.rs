//! Main render/view function (View in TEA pattern)


use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use devperf_app::state::{AppState, Focus, Tab};

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Rendering is pure except for one write-back: the carousel learns its
/// viewport width from the layout so that offsets map to slides.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    match state.active_tab {
        Tab::Overview => render_overview(frame, area, state),
        Tab::Details => render_details(frame, area, state),
    }
}

fn render_overview(frame: &mut Frame, area: Rect, state: &AppState) {
    let (header, body) = layout::create_overview(area);
    frame.render_widget(widgets::MainHeader::new(state.active_tab), header);

    let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
    let inner = block.inner(body);
    frame.render_widget(block, body);

    if inner.height == 0 {
        return;
    }
    let message_area = Rect {
        y: inner.y + inner.height / 2,
        height: 1,
        ..inner
    };
    let message = Paragraph::new(Line::styled(
        "概览暂无内容，按 v 切换到设备详情",
        styles::text_muted(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(message, message_area);
}

fn render_details(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let areas = layout::create(area);

    state.carousel.set_viewport_width(areas.carousel.width);

    frame.render_widget(widgets::MainHeader::new(state.active_tab), areas.header);

    let filter_row = (state.focus == Focus::Filters).then_some(state.filter_row);
    frame.render_widget(
        widgets::FilterBar::new(state.filters())
            .focused_row(filter_row)
            .compact(areas.compact),
        areas.filters,
    );

    frame.render_widget(
        widgets::InfoBanner::new(state.selected_record()),
        areas.banner,
    );

    let projection = state.projection();
    frame.render_widget(
        widgets::ScoreNav::new(&projection, state.carousel.active())
            .focused(state.focus == Focus::Scores),
        areas.scores,
    );
    frame.render_widget(
        widgets::MetricCarousel::new(&projection, state.carousel.offset()),
        areas.carousel,
    );

    let rows = state.visible_records();
    frame.render_widget(
        widgets::DeviceTable::new(&rows)
            .cursor(state.table_cursor())
            .focused(state.focus == Focus::Table),
        areas.table,
    );

    frame.render_widget(
        widgets::PaginationBar::new(
            state.page(),
            state.total_pages(),
            state.filtered_count(),
            state.page_size(),
        ),
        areas.pagination,
    );
}
