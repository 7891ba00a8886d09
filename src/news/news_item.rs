use serde::Deserialize;

/// A single news card
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub date: String,
    pub category: String,
    /// Where the card image lives; the terminal shows a placeholder band instead
    #[serde(rename = "image", default)]
    pub image_ref: String,
}

impl NewsItem {
    fn new(id: u32, title: &str, date: &str, category: &str, image_ref: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            date: date.to_string(),
            category: category.to_string(),
            image_ref: image_ref.to_string(),
        }
    }
}

/// Built-in news shown when the config provides none
pub fn default_news() -> Vec<NewsItem> {
    vec![
        NewsItem::new(
            1,
            "Kunjungan Syeikh dari Madinah",
            "12 Des 2023",
            "Event",
            "https://images.unsplash.com/photo-1564682057777-6f8510cb4629?auto=format&fit=crop&q=80&w=500",
        ),
        NewsItem::new(
            2,
            "Ujian Tahfidz Semester Ganjil",
            "10 Des 2023",
            "Akademik",
            "https://images.unsplash.com/photo-1585829365295-ab7cd400c167?auto=format&fit=crop&q=80&w=500",
        ),
        NewsItem::new(
            3,
            "Renovasi Asrama Putri Selesai",
            "08 Des 2023",
            "Fasilitas",
            "https://images.unsplash.com/photo-1555854877-bab0e564b8d5?auto=format&fit=crop&q=80&w=500",
        ),
        NewsItem::new(
            4,
            "Workshop Robotika Santri",
            "05 Des 2023",
            "Ekstrakurikuler",
            "https://images.unsplash.com/photo-1581092921461-eab62e97a783?auto=format&fit=crop&q=80&w=500",
        ),
    ]
}
