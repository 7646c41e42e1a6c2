//! HTML rendering of result cards
//!
//! Produces the card fragment a web page embeds for each search result. All
//! display text is escaped; the item travels in `data-item` as the
//! percent-encoded payload so the page can submit it unchanged.

use crate::model::{ResultCard, SUBMIT_LABEL};
use crate::sanitize::escape_html;

pub fn card_markup(card: &ResultCard) -> String {
    let title = escape_html(&card.title);
    let overview = escape_html(&card.overview);
    let heading = match &card.year {
        Some(year) => format!("{} ({})", title, escape_html(year)),
        None => title.clone(),
    };
    let poster = match &card.poster {
        Some(url) => format!(
            "<img class=\"poster\" src=\"{}\" alt=\"{}\" loading=\"lazy\" onerror=\"this.style.display='none'\" />",
            escape_html(url),
            title
        ),
        None => String::new(),
    };
    let encoded_item = urlencoding::encode(card.payload());

    format!(
        "<article class=\"card\">{poster}<div class=\"card-content\"><h4>{heading}</h4><p>{overview}</p><button data-item=\"{encoded_item}\">{label}</button></div></article>",
        label = SUBMIT_LABEL,
    )
}

pub fn results_markup(cards: &[ResultCard]) -> String {
    cards.iter().map(card_markup).collect()
}
