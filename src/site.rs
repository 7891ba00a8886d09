//! Static page content and the non-carousel page sections
//!
//! Header, hero, information grid and footer are plain declarative
//! rendering of [`SiteContent`]; the news section lives in [`crate::news`].

mod page_layout;
mod site_content;
pub mod site_render;

pub use page_layout::{PageLayout, Section};
pub use site_content::{BentoCard, CardTone, HeroContent, NavLink, SiteContent, SocialLink};
