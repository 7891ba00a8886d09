use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::page_layout::Section;
use super::site_content::{BentoCard, CardTone, SiteContent};
use crate::theme;
use crate::widgets::popup::inset_rect;

pub const HEADER_HEIGHT: u16 = 3;

/// Rows of page scroll after which the header switches to its compact style
pub const HEADER_SCROLL_THRESHOLD: u16 = 2;

const NAV_GAP: u16 = 3;

/// Clickable parts of the header from the last render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderHits {
    pub nav_links: Vec<(Rect, Section)>,
    /// Present when the links did not fit and collapsed into a menu toggle
    pub menu_toggle: Option<Rect>,
}

const MENU_TOGGLE_CLOSED: &str = " ☰ ";
const MENU_TOGGLE_OPEN: &str = " ✕ ";

/// Render the fixed header
///
/// When the terminal is too narrow for the nav links and call to action, they
/// collapse into a menu toggle at the right edge.
pub fn render_header(
    buf: &mut Buffer,
    area: Rect,
    content: &SiteContent,
    scrolled: bool,
    menu_open: bool,
) -> HeaderHits {
    let (bg, brand_style, link_style) = if scrolled {
        (
            theme::header::SCROLLED_BG,
            theme::header::SCROLLED_BRAND,
            theme::header::SCROLLED_LINK,
        )
    } else {
        (
            theme::header::TOP_BG,
            theme::header::TOP_BRAND,
            theme::header::TOP_LINK,
        )
    };

    let mut block = Block::new().style(Style::default().bg(bg));
    if scrolled {
        block = block
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme::header::SCROLLED_BORDER));
    }
    block.render(area, buf);

    if area.height == 0 {
        return HeaderHits::default();
    }
    let row = Rect {
        y: area.y + area.height.saturating_sub(1) / 2,
        height: 1,
        ..inset_rect(area, 2, 0)
    };

    Paragraph::new(Line::from(vec![
        Span::styled("▣ ", brand_style),
        Span::styled(content.brand.as_str(), brand_style),
    ]))
    .render(row, buf);

    // Nav links and call to action are right-aligned
    let cta = format!(" {} → ", content.cta);
    let cta_width = Line::from(cta.as_str()).width() as u16;
    let links_width: u16 = content
        .nav_links
        .iter()
        .map(|link| Line::from(link.name.as_str()).width() as u16 + NAV_GAP)
        .sum();
    let brand_end = row.x + brand_width(content);

    let mut x = row.right().saturating_sub(links_width + cta_width);
    if x < brand_end {
        return HeaderHits {
            nav_links: Vec::new(),
            menu_toggle: render_menu_toggle(buf, row, brand_style, menu_open),
        };
    }

    let mut link_rects = Vec::with_capacity(content.nav_links.len());
    for link in &content.nav_links {
        let width = Line::from(link.name.as_str()).width() as u16;
        let rect = Rect::new(x, row.y, width, 1);
        Paragraph::new(Span::styled(link.name.as_str(), link_style)).render(rect, buf);
        link_rects.push((rect, link.target));
        x += width + NAV_GAP;
    }
    Paragraph::new(Span::styled(cta, theme::header::CTA))
        .render(Rect::new(x, row.y, cta_width, 1), buf);

    HeaderHits {
        nav_links: link_rects,
        menu_toggle: None,
    }
}

fn render_menu_toggle(buf: &mut Buffer, row: Rect, style: Style, open: bool) -> Option<Rect> {
    let symbol = if open {
        MENU_TOGGLE_OPEN
    } else {
        MENU_TOGGLE_CLOSED
    };
    let width = Line::from(symbol).width() as u16;
    if row.width < width {
        return None;
    }

    let rect = Rect::new(row.right() - width, row.y, width, 1);
    Paragraph::new(Span::styled(symbol, style)).render(rect, buf);
    Some(rect)
}

/// Rows the open dropdown menu takes below the header
pub fn mobile_menu_height(content: &SiteContent) -> u16 {
    let links = content.nav_links.len().min(u16::MAX as usize) as u16;
    // One padding row above and below, plus the bottom border
    links.saturating_add(3)
}

/// Render the dropdown of nav links opened from the menu toggle
///
/// Returns where each link landed; links that do not fit in `area` are left out.
pub fn render_mobile_menu(
    buf: &mut Buffer,
    area: Rect,
    content: &SiteContent,
) -> Vec<(Rect, Section)> {
    Clear.render(area, buf);
    let block = Block::new()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme::header::MENU_BORDER))
        .style(Style::default().bg(theme::header::MENU_BG));
    let inner = inset_rect(block.inner(area), 3, 1);
    block.render(area, buf);

    let mut link_rects = Vec::with_capacity(content.nav_links.len());
    for (row, link) in (inner.y..inner.bottom()).zip(&content.nav_links) {
        let width = (Line::from(link.name.as_str()).width() as u16).min(inner.width);
        let rect = Rect::new(inner.x, row, width, 1);
        Paragraph::new(Span::styled(link.name.as_str(), theme::header::MENU_LINK))
            .render(rect, buf);
        link_rects.push((rect, link.target));
    }
    link_rects
}

fn brand_width(content: &SiteContent) -> u16 {
    Line::from(content.brand.as_str()).width() as u16 + 3
}

pub fn render_hero(buf: &mut Buffer, area: Rect, content: &SiteContent) {
    Block::new()
        .style(Style::default().bg(theme::hero::BG))
        .render(area, buf);

    let hero = &content.hero;
    let lines = vec![
        Line::from(Span::styled(
            format!("✦ {}", hero.badge),
            theme::hero::BADGE,
        )),
        Line::default(),
        Line::from(Span::styled(hero.title_lead.as_str(), theme::hero::TITLE)),
        Line::from(Span::styled(
            hero.title_accent.as_str(),
            theme::hero::TITLE_ACCENT,
        )),
        Line::default(),
        Line::from(Span::styled(hero.subtitle.as_str(), theme::hero::SUBTITLE)),
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("  {} ↗  ", hero.primary_action),
                theme::hero::PRIMARY_BUTTON,
            ),
            Span::raw("   "),
            Span::styled(
                format!("[ {} ]", hero.secondary_action),
                theme::hero::SECONDARY_BUTTON,
            ),
        ]),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(inset_rect(area, 4, 1), buf);
}

pub fn render_bento(buf: &mut Buffer, area: Rect, content: &SiteContent) {
    Block::new()
        .style(Style::default().bg(theme::bento::BG))
        .render(area, buf);

    let inner = inset_rect(area, 2, 1);
    let [heading, grid] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);

    Paragraph::new(vec![
        Line::from(Span::styled(
            content.bento_heading.as_str(),
            theme::bento::HEADING,
        )),
        Line::from(Span::styled(
            content.bento_subheading.as_str(),
            theme::bento::SUBHEADING,
        )),
    ])
    .render(heading, buf);

    // Tall card on the left, one wide card on top right, two small below it
    let [left, right] =
        Layout::horizontal([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)]).areas(grid);
    let [top_right, bottom_right] =
        Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).areas(right);
    let [bottom_middle, bottom_far] =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .areas(bottom_right);

    let slots = [left, top_right, bottom_middle, bottom_far];
    for (card, slot) in content.bento.iter().zip(slots) {
        render_bento_card(buf, slot, card);
    }
}

fn render_bento_card(buf: &mut Buffer, area: Rect, card: &BentoCard) {
    let (bg, border, title_style, body_style) = match card.tone {
        CardTone::Plain => (
            theme::bento::CARD_BG,
            theme::bento::CARD_BORDER,
            theme::bento::CARD_TITLE,
            theme::bento::CARD_BODY,
        ),
        CardTone::Accent => (
            theme::bento::ACCENT_BG,
            theme::bento::ACCENT_BG,
            theme::bento::ACCENT_TITLE,
            theme::bento::ACCENT_BODY,
        ),
        CardTone::Dark => (
            theme::bento::DARK_BG,
            theme::bento::DARK_BG,
            theme::bento::DARK_TITLE,
            theme::bento::DARK_BODY,
        ),
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(bg));
    let inner = inset_rect(block.inner(area), 1, 0);
    block.render(area, buf);

    let mut lines = Vec::new();
    if let Some(label) = &card.label {
        lines.push(Line::from(Span::styled(label.to_uppercase(), body_style)));
    }
    lines.push(Line::from(Span::styled(card.title.as_str(), title_style)));
    lines.push(Line::default());
    lines.extend(
        card.body
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), body_style))),
    );
    if let Some(action) = &card.action {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!(" {} → ", action),
            Style::default().fg(bg).bg(Color::White),
        )));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

pub fn render_footer(buf: &mut Buffer, area: Rect, content: &SiteContent) {
    Block::new()
        .style(Style::default().bg(theme::footer::BG))
        .render(area, buf);

    let inner = inset_rect(area, 2, 1);
    let [columns, fine_print] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(inner);
    let [about, links, contact] = Layout::horizontal([
        Constraint::Percentage(50),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ])
    .areas(columns);

    let social: Vec<Span> = content
        .social
        .iter()
        .flat_map(|link| {
            [
                Span::styled(format!("( {} )", link.name), theme::footer::SOCIAL),
                Span::raw(" "),
            ]
        })
        .collect();

    Paragraph::new(vec![
        Line::from(Span::styled(
            format!("▣ {}", content.brand),
            theme::footer::BRAND,
        )),
        Line::default(),
        Line::from(Span::styled(content.about.as_str(), theme::footer::TEXT)),
        Line::default(),
        Line::from(social),
    ])
    .wrap(Wrap { trim: true })
    .render(about, buf);

    render_footer_list(buf, links, "Tautan", &content.footer_links);
    render_footer_list(buf, contact, "Kontak", &content.contact);

    let [copyright, credit] =
        Layout::horizontal([Constraint::Min(0), Constraint::Min(0)]).areas(Rect {
            y: fine_print.y + fine_print.height.saturating_sub(1),
            height: 1.min(fine_print.height),
            ..fine_print
        });
    Paragraph::new(Span::styled(
        content.copyright.as_str(),
        theme::footer::FINE_PRINT,
    ))
    .render(copyright, buf);
    Paragraph::new(Span::styled(content.credit.as_str(), theme::footer::FINE_PRINT))
        .alignment(Alignment::Right)
        .render(credit, buf);
}

fn render_footer_list(buf: &mut Buffer, area: Rect, heading: &str, items: &[String]) {
    let mut lines = vec![
        Line::from(Span::styled(heading, theme::footer::HEADING)),
        Line::default(),
    ];
    lines.extend(
        items
            .iter()
            .map(|item| Line::from(Span::styled(item.as_str(), theme::footer::TEXT))),
    );
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}
