use crate::domain::catalog::{vendors_for, ShopCategory, ACTIVE_COURIER_ORDER_ID};
use crate::domain::money::format_naira;
use crate::domain::order::LIFECYCLE_STEPS;
use crate::domain::{Activity, DetailedOrder};
use crate::ui::customer::feed::{filter_activities, group_activities};
use crate::ui::customer::{ActivityFilter, CustomerState, CustomerView};
use crate::ui::theme::{
    tone_color, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, NIBBO_ORANGE, STATUS_ERROR, STATUS_OK,
};
use crate::ui::tracking;
use crate::ui::widgets::{progress_bar, render_modal};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const FEED_HINTS: &str =
    "←/→: Category │ ↑/↓: Select │ Enter: Open │ f: Filter │ g: Group │ x: Cancel │ t: Track │ Ctrl+L: Logout";
const DETAIL_HINTS: &str = "x: Cancel order │ Esc: Back";
const CONFIRM_HINTS: &str = "y: Yes, cancel │ n: Keep order";

pub fn hints(state: &CustomerState) -> &'static str {
    if state.is_confirming_cancel() {
        return CONFIRM_HINTS;
    }
    match state.view {
        CustomerView::Feed => FEED_HINTS,
        CustomerView::Tracking { .. } => tracking::view::HINTS,
        CustomerView::Details(_) => DETAIL_HINTS,
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &CustomerState) {
    match &state.view {
        CustomerView::Feed => render_feed(frame, area, state),
        CustomerView::Tracking {
            order_id,
            tracking: progress,
        } => tracking::view::render(frame, area, order_id, progress),
        CustomerView::Details(detail) => render_details(frame, area, detail),
    }

    if let Some(id) = &state.pending_cancel {
        let title = state
            .activity(id)
            .map(|activity| activity.title.as_str())
            .unwrap_or("this order");
        render_modal(
            frame,
            area,
            "Cancel Order?",
            vec![
                Line::from(""),
                Line::from(format!(" Cancel \"{title}\"?")),
                Line::from(Span::styled(
                    " This can't be undone.",
                    Style::default().fg(MUTED_TEXT),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled(" [y] Yes, cancel", Style::default().fg(STATUS_ERROR)),
                    Span::raw("    "),
                    Span::styled("[n] Keep order", Style::default().fg(STATUS_OK)),
                ]),
            ],
        );
    }
}

fn render_feed(frame: &mut Frame<'_>, area: Rect, state: &CustomerState) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("  Hello, {} 👋", first_name(&state.user.full_name)),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        category_tabs(state.category),
        Line::from(""),
    ];

    if state.category != ShopCategory::All {
        lines.extend(vendor_lines(state.category));
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    if let Some(courier) = state.activity(ACTIVE_COURIER_ORDER_ID) {
        if courier.status.is_in_progress() {
            lines.push(Line::from(Span::styled(
                format!("  🚴 Active courier · {} · t: Track", courier.title),
                Style::default().fg(NIBBO_ORANGE),
            )));
            lines.push(Line::from(""));
        }
    }

    lines.push(filter_line(state));
    lines.push(Line::from(""));

    let filtered = filter_activities(&state.activities, state.activity_filter);
    if filtered.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No activities here yet.",
            Style::default().fg(MUTED_TEXT),
        )));
    }
    let mut row = 0;
    for group in group_activities(&filtered, state.activity_view) {
        lines.push(Line::from(Span::styled(
            format!("  {}", group.label.to_uppercase()),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
        )));
        for activity in group.items {
            lines.push(activity_line(activity, row == state.selected));
            row += 1;
        }
        lines.push(Line::from(""));
    }

    // Keep the selected row on screen.
    let selected_line = lines.len().min(7 + state.selected * 2) as u16;
    let scroll = selected_line.saturating_sub(area.height.saturating_sub(2));
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), area);
}

fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or("there")
}

fn category_tabs(current: ShopCategory) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for category in ShopCategory::ALL {
        let style = if category == current {
            Style::default()
                .fg(NIBBO_ORANGE)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        spans.push(Span::styled(format!(" {} ", category.as_str()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn filter_line(state: &CustomerState) -> Line<'static> {
    let mut spans = vec![Span::styled("  Filter: ", Style::default().fg(MUTED_TEXT))];
    for filter in ActivityFilter::ALL {
        let style = if filter == state.activity_filter {
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        spans.push(Span::styled(filter.as_str(), style));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(
        format!("│ {}", state.activity_view.as_str()),
        Style::default().fg(MUTED_TEXT),
    ));
    Line::from(spans)
}

fn activity_line(activity: &Activity, selected: bool) -> Line<'static> {
    let color = tone_color(activity.color);
    let mut spans = vec![
        Span::raw(if selected { "  ▶ " } else { "    " }),
        Span::raw(format!("{} ", activity.icon)),
        Span::styled(
            format!("{:<26}", activity.title),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(format!("{:<10}", activity.time), Style::default().fg(MUTED_TEXT)),
        Span::styled(format!("{:<18}", activity.status.as_str()), Style::default().fg(color)),
        Span::styled(
            format!("{:>8}", format_naira(activity.price)),
            Style::default().fg(HEADER_TEXT),
        ),
    ];
    if activity.status.is_in_progress() {
        spans.push(Span::styled(
            format!("  {}", progress_bar(f64::from(activity.progress) / 100.0, 10)),
            Style::default().fg(color),
        ));
    }
    let line = Line::from(spans);
    if selected {
        line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        line
    }
}

fn vendor_lines(category: ShopCategory) -> Vec<Line<'static>> {
    let vendors = vendors_for(category);
    if vendors.is_empty() {
        return vec![Line::from(Span::styled(
            "  No partners found",
            Style::default().fg(MUTED_TEXT),
        ))];
    }
    let mut lines = Vec::new();
    for vendor in vendors {
        let mut title = vec![Span::styled(
            format!("  {}", vendor.name),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )];
        if vendor.is_fastest {
            title.push(Span::styled("  ⚡ FASTEST", Style::default().fg(NIBBO_ORANGE)));
        }
        lines.push(Line::from(title));
        lines.push(Line::from(Span::styled(
            format!(
                "    {} · ★ {:.1} · {} · {} · {}",
                vendor.category, vendor.rating, vendor.time, vendor.price_range, vendor.location
            ),
            Style::default().fg(MUTED_TEXT),
        )));
        lines.push(Line::from(""));
    }
    lines
}

fn render_details(frame: &mut Frame<'_>, area: Rect, detail: &DetailedOrder) {
    let status_color = tone_color(detail.status.tone());
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("  {}", detail.title),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("   {}", detail.id), Style::default().fg(MUTED_TEXT)),
        ]),
        Line::from(Span::styled(
            format!("  {} · {}", detail.date, detail.time),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            format!("  {}", detail.status.as_str()),
            Style::default().fg(status_color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if let Some(current) = detail.lifecycle_index() {
        let mut spans = vec![Span::raw("  ")];
        for (idx, step) in LIFECYCLE_STEPS.iter().enumerate() {
            let style = if idx <= current {
                Style::default().fg(STATUS_OK)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            if idx > 0 {
                spans.push(Span::styled(" ── ", style));
            }
            spans.push(Span::styled(format!("{} {}", step.icon, step.label), style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines.push(section("ITEMS"));
    for item in &detail.items {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}x {:<28}", item.quantity, item.name),
                Style::default().fg(HEADER_TEXT),
            ),
            Span::styled(
                format!("{:>10}", format_naira(item.price)),
                Style::default().fg(HEADER_TEXT),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(amount_line("Subtotal", detail.subtotal, false));
    lines.push(amount_line("Delivery Fee", detail.delivery_fee, false));
    lines.push(amount_line("Total", detail.total, true));
    lines.push(Line::from(""));

    lines.push(section("DELIVERY ADDRESS"));
    lines.push(Line::from(format!("  📍 {}", detail.delivery_address)));
    lines.push(Line::from(""));
    lines.push(section("VENDOR"));
    lines.push(Line::from(format!(
        "  {} · {} · {}",
        detail.vendor.name, detail.vendor.category, detail.vendor.location
    )));

    if detail.can_cancel() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  [x] Cancel Order",
            Style::default().fg(STATUS_ERROR),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
    ))
}

fn amount_line(label: &str, amount: u64, bold: bool) -> Line<'static> {
    let mut style = Style::default().fg(HEADER_TEXT);
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    Line::from(Span::styled(
        format!("  {:<31}{:>10}", label, format_naira(amount)),
        style,
    ))
}
