use chrono::Datelike;
use yew::prelude::*;

use crate::components::nav::AnchorLink;
use crate::config;
use crate::content::SECTIONS;

const COPYRIGHT: &str = "© 2024 Sensible Korean Salon. All rights reserved.";

pub fn stamp_year(text: &str, year: i32) -> String {
    text.replace(config::FOOTER_YEAR_PLACEHOLDER, &year.to_string())
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let copyright = use_memo(|_| stamp_year(COPYRIGHT, chrono::Local::now().year()), ());

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-brand">
                        <h3>{"Sensible Korean Salon"}</h3>
                        <p>{"Korean hair design, head spa and care."}</p>
                    </div>
                    <ul class="footer-links">
                        { for SECTIONS.iter().map(|(id, label)| html! {
                            <li><AnchorLink href={format!("#{}", id)}>{*label}</AnchorLink></li>
                        }) }
                    </ul>
                </div>
                <div class="footer-bottom">
                    <p>{ (*copyright).clone() }</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_placeholder_year() {
        assert_eq!(
            stamp_year(COPYRIGHT, 2026),
            "© 2026 Sensible Korean Salon. All rights reserved."
        );
    }

    #[test]
    fn leaves_text_without_placeholder_alone() {
        assert_eq!(stamp_year("Open daily 10-20", 2026), "Open daily 10-20");
    }
}
