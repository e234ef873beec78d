//! Reusable presentational widgets: button, card and navbar
//!
//! These only decide how things look. They hold no game state.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Link,
}

impl ButtonVariant {
    /// Parse a variant name, falling back to `Primary`
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "secondary" => Self::Secondary,
            "success" => Self::Success,
            "danger" => Self::Danger,
            "link" => Self::Link,
            _ => Self::Primary,
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Primary | Self::Link => Color::Blue,
            Self::Secondary => Color::Gray,
            Self::Success => Color::Cyan,
            Self::Danger => Color::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// Parse a size name ("sm", "md", "lg"), falling back to `Medium`
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "sm" => Self::Small,
            "lg" => Self::Large,
            _ => Self::Medium,
        }
    }

    /// Blank cells on each side of the label
    #[must_use]
    pub const fn padding(self) -> usize {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }
}

/// A clickable-looking label
///
/// Solid buttons fill with the variant color, outline buttons draw it as
/// text between brackets, link buttons are underlined. Disabled buttons are
/// dimmed regardless of variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    size: ButtonSize,
    outline: bool,
    disabled: bool,
}

impl<'a> Button<'a> {
    #[must_use]
    pub const fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            outline: false,
            disabled: false,
        }
    }

    #[must_use]
    pub const fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub const fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub const fn outline(mut self, outline: bool) -> Self {
        self.outline = outline;
        self
    }

    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn text(&self) -> String {
        let pad = " ".repeat(self.size.padding());
        if self.outline {
            format!("[{pad}{}{pad}]", self.label)
        } else {
            format!("{pad}{}{pad}", self.label)
        }
    }

    #[must_use]
    pub fn style(&self) -> Style {
        let color = self.variant.color();

        if self.disabled {
            return Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM);
        }

        match (self.variant, self.outline) {
            (ButtonVariant::Link, _) => Style::default()
                .fg(color)
                .add_modifier(Modifier::UNDERLINED),
            (_, true) => Style::default().fg(color).add_modifier(Modifier::BOLD),
            (_, false) => Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        }
    }

    #[must_use]
    pub fn span(&self) -> Span<'static> {
        Span::styled(self.text(), self.style())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Outlined,
    Elevated,
}

impl CardVariant {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "outlined" => Self::Outlined,
            "elevated" => Self::Elevated,
            _ => Self::Default,
        }
    }

    #[must_use]
    pub const fn border_type(self) -> BorderType {
        match self {
            Self::Default => BorderType::Plain,
            Self::Outlined => BorderType::Rounded,
            Self::Elevated => BorderType::Thick,
        }
    }
}

/// Bordered surface with an optional title, subtitle and footer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card<'a> {
    title: Option<&'a str>,
    subtitle: Option<&'a str>,
    footer: Option<&'a str>,
    variant: CardVariant,
    padded: bool,
    accent: Color,
}

impl Default for Card<'_> {
    fn default() -> Self {
        Self {
            title: None,
            subtitle: None,
            footer: None,
            variant: CardVariant::Default,
            padded: true,
            accent: Color::Blue,
        }
    }
}

impl<'a> Card<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub const fn subtitle(mut self, subtitle: &'a str) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    #[must_use]
    pub const fn footer(mut self, footer: &'a str) -> Self {
        self.footer = Some(footer);
        self
    }

    #[must_use]
    pub const fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub const fn padded(mut self, padded: bool) -> Self {
        self.padded = padded;
        self
    }

    #[must_use]
    pub const fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// The block to wrap card content in
    #[must_use]
    pub fn block(&self) -> Block<'a> {
        let border_color = match self.variant {
            CardVariant::Default => Color::DarkGray,
            CardVariant::Outlined | CardVariant::Elevated => self.accent,
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.variant.border_type())
            .border_style(Style::default().fg(border_color));

        if let Some(title) = self.title {
            let mut spans = vec![Span::styled(
                format!(" {title} "),
                Style::default()
                    .fg(self.accent)
                    .add_modifier(Modifier::BOLD),
            )];
            if let Some(subtitle) = self.subtitle {
                spans.push(Span::styled(
                    format!("{subtitle} "),
                    Style::default().fg(Color::Gray),
                ));
            }
            block = block.title(Line::from(spans));
        }

        if let Some(footer) = self.footer {
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" {footer} "),
                    Style::default().fg(Color::DarkGray),
                ))
                .right_aligned(),
            );
        }

        if self.padded {
            block = block.padding(Padding::horizontal(1));
        }

        block
    }
}

/// Top bar with the app title, an optional tagline and right-side actions
#[derive(Debug, Clone, Default)]
pub struct Navbar<'a> {
    title: &'a str,
    tagline: Option<&'a str>,
    actions: Vec<Span<'a>>,
}

impl<'a> Navbar<'a> {
    #[must_use]
    pub const fn new(title: &'a str) -> Self {
        Self {
            title,
            tagline: None,
            actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn tagline(mut self, tagline: &'a str) -> Self {
        self.tagline = Some(tagline);
        self
    }

    #[must_use]
    pub fn action(mut self, action: Span<'a>) -> Self {
        self.actions.push(action);
        self
    }

    fn actions_line(&self) -> Line<'a> {
        let mut spans = Vec::with_capacity(self.actions.len() * 2);
        for (i, action) in self.actions.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(action.clone());
        }
        Line::from(spans)
    }
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        let actions = self.actions_line();
        let actions_width = actions.width() as u16;
        let [brand_area, actions_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(actions_width)])
                .areas(inner);

        let mut brand = vec![Span::styled(
            self.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(tagline) = self.tagline {
            brand.push(Span::styled(
                format!("  {tagline}"),
                Style::default().fg(Color::Gray),
            ));
        }

        Paragraph::new(Line::from(brand))
            .alignment(Alignment::Left)
            .render(brand_area, buf);
        Paragraph::new(actions)
            .alignment(Alignment::Right)
            .render(actions_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn button_variant_fallback() {
        assert_eq!(ButtonVariant::from_name("danger"), ButtonVariant::Danger);
        assert_eq!(ButtonVariant::from_name("fancy"), ButtonVariant::Primary);
        assert_eq!(ButtonSize::from_name("lg"), ButtonSize::Large);
        assert_eq!(ButtonSize::from_name("xl"), ButtonSize::Medium);
    }

    #[test]
    fn button_text_padding_follows_size() {
        assert_eq!(Button::new("Go").size(ButtonSize::Small).text(), " Go ");
        assert_eq!(Button::new("Go").text(), "  Go  ");
        assert_eq!(
            Button::new("Go").size(ButtonSize::Small).outline(true).text(),
            "[ Go ]"
        );
    }

    #[test]
    fn solid_button_fills_background() {
        let style = Button::new("Submit Guess").style();
        assert_eq!(style.bg, Some(Color::Blue));
        assert_eq!(style.fg, Some(Color::Black));
    }

    #[test]
    fn outline_button_has_no_background() {
        let style = Button::new("Try another word")
            .variant(ButtonVariant::Secondary)
            .outline(true)
            .style();
        assert_eq!(style.bg, None);
        assert_eq!(style.fg, Some(Color::Gray));
    }

    #[test]
    fn disabled_button_is_dimmed() {
        let style = Button::new("Submit Guess")
            .variant(ButtonVariant::Danger)
            .disabled(true)
            .style();
        assert_eq!(style.fg, Some(Color::DarkGray));
        assert!(style.add_modifier.contains(Modifier::DIM));
        assert_eq!(style.bg, None);
    }

    #[test]
    fn link_button_is_underlined() {
        let span = Button::new("help").variant(ButtonVariant::Link).span();
        assert!(span.style.add_modifier.contains(Modifier::UNDERLINED));
        assert_eq!(span.content, "  help  ");
    }

    #[test]
    fn card_variant_borders() {
        assert_eq!(CardVariant::from_name("elevated"), CardVariant::Elevated);
        assert_eq!(CardVariant::from_name("glass"), CardVariant::Default);
        assert_eq!(CardVariant::Outlined.border_type(), BorderType::Rounded);
    }

    #[test]
    fn card_renders_title_subtitle_and_footer() {
        let card = Card::new()
            .title("Puzzle")
            .subtitle("round 3")
            .footer("Tab: new word")
            .variant(CardVariant::Outlined);

        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        Paragraph::new("body").block(card.block()).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Puzzle"));
        assert!(text.contains("round 3"));
        assert!(text.contains("Tab: new word"));
        assert!(text.contains("body"));
    }

    #[test]
    fn navbar_renders_title_and_actions() {
        let navbar = Navbar::new("Word Scramble Challenge")
            .tagline("Unscramble the letters")
            .action(Span::raw("Esc: quit"));

        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        navbar.render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Word Scramble Challenge"));
        assert!(text.contains("Unscramble the letters"));
        assert!(text.contains("Esc: quit"));
    }
}
