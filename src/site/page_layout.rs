use ratatui::layout::Rect;

use crate::news::news_render;

pub const HERO_HEIGHT: u16 = 12;
pub const BENTO_HEIGHT: u16 = 17;
pub const FOOTER_HEIGHT: u16 = 13;

/// Scrollable page sections, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Bento,
    News,
    Footer,
}

/// Vertical placement of every section inside the page body
///
/// Rows are relative to the top of the (unscrolled) body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub hero: Rect,
    pub bento: Rect,
    pub news: Rect,
    pub footer: Rect,
}

impl PageLayout {
    pub fn new(width: u16) -> Self {
        let hero = Rect::new(0, 0, width, HERO_HEIGHT);
        let bento = Rect::new(0, hero.bottom(), width, BENTO_HEIGHT);
        let news = Rect::new(0, bento.bottom(), width, news_render::SECTION_HEIGHT);
        let footer = Rect::new(0, news.bottom(), width, FOOTER_HEIGHT);
        Self {
            hero,
            bento,
            news,
            footer,
        }
    }

    /// Total rows of the page body
    pub fn height(&self) -> u16 {
        self.footer.bottom()
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.hero.width, self.height())
    }

    pub fn section(&self, section: Section) -> Rect {
        match section {
            Section::Hero => self.hero,
            Section::Bento => self.bento,
            Section::News => self.news,
            Section::Footer => self.footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_stacked_without_gaps() {
        let layout = PageLayout::new(80);

        assert_eq!(layout.hero.y, 0);
        assert_eq!(layout.bento.y, layout.hero.bottom());
        assert_eq!(layout.news.y, layout.bento.bottom());
        assert_eq!(layout.footer.y, layout.news.bottom());
        assert_eq!(
            layout.height(),
            HERO_HEIGHT + BENTO_HEIGHT + news_render::SECTION_HEIGHT + FOOTER_HEIGHT
        );
    }

    #[test]
    fn test_section_lookup() {
        let layout = PageLayout::new(80);
        assert_eq!(layout.section(Section::News), layout.news);
        assert_eq!(layout.area().width, 80);
    }
}
