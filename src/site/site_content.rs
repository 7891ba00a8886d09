use serde::Deserialize;

use super::page_layout::Section;

/// Header navigation entry that jumps to a page section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub name: String,
    pub target: Section,
}

/// Footer social button
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroContent {
    pub badge: String,
    pub title_lead: String,
    pub title_accent: String,
    pub subtitle: String,
    pub primary_action: String,
    pub secondary_action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTone {
    Plain,
    Accent,
    Dark,
}

/// One tile of the information grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BentoCard {
    pub label: Option<String>,
    pub title: String,
    pub body: String,
    pub action: Option<String>,
    pub tone: CardTone,
}

/// Everything the page shows apart from the news list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub brand: String,
    pub nav_links: Vec<NavLink>,
    pub cta: String,
    pub hero: HeroContent,
    pub bento_heading: String,
    pub bento_subheading: String,
    pub bento: Vec<BentoCard>,
    pub news_heading: String,
    pub about: String,
    pub footer_links: Vec<String>,
    pub contact: Vec<String>,
    pub social: Vec<SocialLink>,
    pub copyright: String,
    pub credit: String,
}

impl SiteContent {
    /// Swap in configured social links, keeping the built-in ones when none are given
    pub fn with_social(mut self, social: Vec<SocialLink>) -> Self {
        if !social.is_empty() {
            self.social = social;
        }
        self
    }
}

fn nav(name: &str, target: Section) -> NavLink {
    NavLink {
        name: name.to_string(),
        target,
    }
}

fn social(name: &str, url: &str) -> SocialLink {
    SocialLink {
        name: name.to_string(),
        url: url.to_string(),
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            brand: "Yayasan Ashabul Quran".to_string(),
            nav_links: vec![
                nav("Tentang", Section::Hero),
                nav("Akademik", Section::Bento),
                nav("Berita", Section::News),
                nav("Kontak", Section::Footer),
            ],
            cta: "PPDB Online".to_string(),
            hero: HeroContent {
                badge: "Penerimaan Siswa Baru Tahun 2025/2026".to_string(),
                title_lead: "Membangun".to_string(),
                title_accent: "Generasi Qurani".to_string(),
                subtitle: "Yayasan Ashabul Quran menggabungkan kurikulum modern dengan \
                           nilai-nilai Islami untuk mencetak pemimpin masa depan yang \
                           berakhlak mulia."
                    .to_string(),
                primary_action: "Daftar Sekarang".to_string(),
                secondary_action: "Lihat Profil".to_string(),
            },
            bento_heading: "Pusat Informasi".to_string(),
            bento_subheading: "Akses cepat ke segala hal tentang Yayasan.".to_string(),
            bento: vec![
                BentoCard {
                    label: Some("Status: Gelombang 1 Dibuka".to_string()),
                    title: "PPDB 2025".to_string(),
                    body: "Pendaftaran Peserta Didik Baru kini telah dibuka. Dapatkan \
                           potongan biaya untuk 50 pendaftar pertama."
                        .to_string(),
                    action: Some("Daftar Online".to_string()),
                    tone: CardTone::Accent,
                },
                BentoCard {
                    label: Some("Tentang Kami".to_string()),
                    title: "Mencetak Hafidz Berwawasan Global".to_string(),
                    body: "Program Tahfidz intensif yang dipadukan dengan kurikulum \
                           Cambridge untuk persiapan masa depan."
                        .to_string(),
                    action: None,
                    tone: CardTone::Plain,
                },
                BentoCard {
                    label: None,
                    title: "Prestasi".to_string(),
                    body: "Juara 1 MTQ Nasional (2 hari yang lalu)\n\
                           Beasiswa Kuliah Al-Azhar (5 hari yang lalu)"
                        .to_string(),
                    action: None,
                    tone: CardTone::Plain,
                },
                BentoCard {
                    label: None,
                    title: "Kajian Rutin".to_string(),
                    body: "Simak kajian ustadz kami via Live Streaming setiap Jumat."
                        .to_string(),
                    action: None,
                    tone: CardTone::Dark,
                },
            ],
            news_heading: "Kabar Ashabul Quran".to_string(),
            about: "Yayasan pendidikan Islam modern yang berfokus pada tahfidz Al-Quran, \
                    sains, dan teknologi untuk masa depan yang lebih cerah."
                .to_string(),
            footer_links: vec![
                "Tentang Kami".to_string(),
                "Program Pendidikan".to_string(),
                "PPDB Online".to_string(),
                "Berita & Event".to_string(),
            ],
            contact: vec![
                "Jl. Pendidikan No. 99, Jakarta Selatan".to_string(),
                "+62 812 3456 7890".to_string(),
                "info@ashabulquran.sch.id".to_string(),
            ],
            social: vec![
                social("Instagram", ""),
                social("Facebook", ""),
                social("YouTube", ""),
            ],
            copyright: "© 2025 Yayasan Ashabul Quran. All rights reserved.".to_string(),
            credit: "Designed with ♥ by Gen Z Dev".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_nav_links_cover_every_section() {
        let content = SiteContent::default();
        let targets: Vec<Section> = content.nav_links.iter().map(|l| l.target).collect();

        assert_eq!(
            targets,
            vec![Section::Hero, Section::Bento, Section::News, Section::Footer]
        );
    }

    #[test]
    fn test_with_social_replaces_when_given() {
        let content = SiteContent::default().with_social(vec![social("Mastodon", "https://x")]);

        assert_eq!(content.social.len(), 1);
        assert_eq!(content.social[0].name, "Mastodon");
    }

    #[test]
    fn test_with_empty_social_keeps_defaults() {
        let content = SiteContent::default().with_social(Vec::new());
        assert_eq!(content.social.len(), 3);
    }
}
