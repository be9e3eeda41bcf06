use chrono::NaiveDate;
use url::Url;

use crate::{
    fetch::{decode_page, menu_url, FetchError, PageFetcher},
    menu::{MealKind, MealSlot, MenuCollection, MenuDay},
    parse::{normalize, parse_sections},
    window::menu_window,
};

/// Builds the menu of one page. Sections other than lunch and dinner are ignored.
pub fn menu_from_page(html: &str) -> MenuDay {
    let mut day = MenuDay::default();
    for section in parse_sections(html) {
        let Some(kind) = MealKind::from_label(&section.label) else {
            log::trace!("ignoring menu section {:?}", section.label);
            continue;
        };
        let description = normalize(section.raw_description.as_deref());
        *day.slot_mut(kind) = MealSlot::new(section.dish, description);
    }
    day
}

async fn menu_on_date<F>(fetcher: &F, base: &Url, date: NaiveDate) -> Result<MenuDay, FetchError>
where
    F: PageFetcher + Sync,
{
    let url = menu_url(base, date);
    let bytes = fetcher.fetch(&url).await?;
    let day = menu_from_page(&decode_page(&bytes));
    log::debug!("parsed menu for {date}");
    Ok(day)
}

/// Fetches and parses every date in the window starting at `today`.
///
/// Pages are fetched one after the other. The first failed fetch aborts the
/// whole assembly and nothing collected so far is returned.
pub async fn assemble<F>(fetcher: &F, base: &Url, today: NaiveDate) -> Result<MenuCollection, FetchError>
where
    F: PageFetcher + Sync,
{
    let window = menu_window(today);
    log::debug!("assembling menus for {} dates from {today}", window.len());
    let mut menus = MenuCollection::with_capacity(window.len());
    for date in window {
        let day = menu_on_date(fetcher, base, date).await?;
        menus.insert(date, day);
    }
    Ok(menus)
}
