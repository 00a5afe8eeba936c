use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{SERVICES, STYLISTS};

pub fn booking_message(service: &str, stylist: &str) -> String {
    let mut message = format!("Hi! I'd like to book a *{}* appointment", service);
    if !stylist.is_empty() && stylist != config::ANY_STYLIST {
        message.push_str(&format!(" with stylist *{}*", stylist));
    }
    message.push('.');
    message
}

pub fn booking_url(number: &str, service: &str, stylist: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number,
        urlencoding::encode(&booking_message(service, stylist))
    )
}

/// Current values of the service and stylist pickers.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingSelection {
    pub service: String,
    pub stylist: String,
}

impl Default for BookingSelection {
    fn default() -> Self {
        Self {
            service: SERVICES.first().map(|s| s.name).unwrap_or_default().to_string(),
            stylist: config::ANY_STYLIST.to_string(),
        }
    }
}

impl BookingSelection {
    pub fn url(&self) -> String {
        booking_url(config::WHATSAPP_NUMBER, &self.service, &self.stylist)
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingProps {
    pub selection: BookingSelection,
    pub on_change: Callback<BookingSelection>,
}

#[function_component(Booking)]
pub fn booking(props: &BookingProps) -> Html {
    let on_service = {
        let selection = props.selection.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(BookingSelection { service: select.value(), ..selection.clone() });
        })
    };

    let on_stylist = {
        let selection = props.selection.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(BookingSelection { stylist: select.value(), ..selection.clone() });
        })
    };

    let href = props.selection.url();

    html! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-header">
                    <span class="section-tag">{"Book"}</span>
                    <h2 class="section-title">{"Reserve Your Chair"}</h2>
                </div>
                <div class="contact-grid">
                    <Reveal class="contact-info">
                        <h3>{"Visit us"}</h3>
                        <p>{"12 Garosu-gil, Gangnam-gu, Seoul"}</p>
                        <p>{"Open daily 10:00 – 20:00"}</p>
                        <p>{"Message us on WhatsApp and we will confirm your slot within the hour."}</p>
                    </Reveal>
                    <Reveal class="book-card">
                        <label for="serviceSelect">{"Service"}</label>
                        <select id="serviceSelect" onchange={on_service}>
                            { for SERVICES.iter().map(|service| html! {
                                <option value={service.name} selected={service.name == props.selection.service}>
                                    {service.name}
                                </option>
                            }) }
                        </select>
                        <label for="stylistSelect">{"Stylist"}</label>
                        <select id="stylistSelect" onchange={on_stylist}>
                            { for STYLISTS.iter().map(|stylist| html! {
                                <option value={*stylist} selected={*stylist == props.selection.stylist}>
                                    {*stylist}
                                </option>
                            }) }
                        </select>
                        <a class="btn btn-primary book-btn" {href} target="_blank" rel="noopener noreferrer">
                            {"Book on WhatsApp"}
                        </a>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_stylist_has_no_stylist_clause() {
        let message = booking_message("Haircut", "Any Stylist");
        assert_eq!(message, "Hi! I'd like to book a *Haircut* appointment.");
        assert!(!message.contains("with stylist"));
    }

    #[test]
    fn named_stylist_is_included() {
        let message = booking_message("Haircut", "Jane");
        assert!(message.contains("with stylist *Jane*"));
        assert_eq!(message, "Hi! I'd like to book a *Haircut* appointment with stylist *Jane*.");
    }

    #[test]
    fn empty_stylist_counts_as_any() {
        assert_eq!(booking_message("Perm", ""), booking_message("Perm", "Any Stylist"));
    }

    #[test]
    fn url_encodes_message_into_deep_link() {
        let url = booking_url("821012345678", "Head Spa", "Jane");
        assert_eq!(
            url,
            "https://wa.me/821012345678?text=Hi%21%20I%27d%20like%20to%20book%20a%20%2AHead%20Spa%2A%20appointment%20with%20stylist%20%2AJane%2A."
        );
    }

    #[test]
    fn default_selection_books_first_service_with_any_stylist() {
        let selection = BookingSelection::default();
        assert_eq!(selection.service, "Haircut");
        assert_eq!(selection.url(), booking_url(config::WHATSAPP_NUMBER, "Haircut", "Any Stylist"));
    }
}
