//! Page content records.
//!
//! Editable storefront copy lives in the `pageContent` collection, one document
//! per page. Fields missing from a stored document read as the page defaults.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    documents::{RecordError, decode},
    store::{Fields, StoreError, to_fields},
};

/// Raised when a page name cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

/// Storefront page with editable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::About];

    /// Document id inside the `pageContent` collection.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "quienesSomos",
        }
    }

    /// Short name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.name() == s || page.id() == s)
            .ok_or_else(|| UnknownPage(s.to_string()))
    }
}

/// Image card linking from the home page to a section of the shop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuickViewCard {
    pub text: String,
    pub image_url: String,
    pub link: String,
}

/// Home page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HomeContent {
    pub main_slogan: String,
    pub main_description: String,
    pub quick_view_cards: Vec<QuickViewCard>,
}

impl Default for HomeContent {
    fn default() -> Self {
        Self {
            main_slogan: "Belleza en Cada Detalle".to_string(),
            main_description: "Creamos momentos inolvidables con joyas exclusivas y arreglos \
                               florales que expresan tus sentimientos más profundos."
                .to_string(),
            quick_view_cards: vec![QuickViewCard::default(); 3],
        }
    }
}

/// One of the shop's values on the about page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueCard {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// Embedded video on the about page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VideoCard {
    pub title: String,
    pub description: String,
    pub video_url: String,
}

/// About page copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutContent {
    pub title: String,
    pub subtitle: String,
    pub intro_text: String,
    pub mission_text: String,
    pub map_url: String,
    pub values: Vec<ValueCard>,
    pub videos: Vec<VideoCard>,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            title: "Nuestra Esencia".to_string(),
            subtitle: "Descubre quiénes somos, qué nos inspira y cómo damos vida a cada detalle."
                .to_string(),
            intro_text: String::new(),
            mission_text: String::new(),
            map_url: String::new(),
            values: Vec::new(),
            videos: Vec::new(),
        }
    }
}

/// Content of one editable page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    Home(HomeContent),
    About(AboutContent),
}

impl PageContent {
    /// Content shown before the page has ever been edited.
    #[must_use]
    pub fn default_for(page: Page) -> Self {
        match page {
            Page::Home => PageContent::Home(HomeContent::default()),
            Page::About => PageContent::About(AboutContent::default()),
        }
    }

    #[must_use]
    pub const fn page(&self) -> Page {
        match self {
            PageContent::Home(_) => Page::Home,
            PageContent::About(_) => Page::About,
        }
    }

    /// Decode the stored document of `page`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Decode`] if a field has the wrong shape.
    pub fn from_fields(page: Page, fields: Fields) -> Result<Self, RecordError> {
        Ok(match page {
            Page::Home => PageContent::Home(decode(fields)?),
            Page::About => PageContent::About(decode(fields)?),
        })
    }

    /// Encode into document fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be serialized.
    pub fn to_fields(&self) -> Result<Fields, StoreError> {
        match self {
            PageContent::Home(content) => to_fields(content),
            PageContent::About(content) => to_fields(content),
        }
    }
}
