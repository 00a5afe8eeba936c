use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Behavior styles the page needs regardless of the site stylesheet: the
/// hidden/visible reveal states and the desktop-only cursor follower.
#[function_component(RuntimeStyles)]
pub fn runtime_styles() -> Html {
    html! {
        <Global css={css!(r#"
            .reveal,
            .stagger-item {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease, transform 0.6s ease;
            }

            .visible {
                opacity: 1 !important;
                transform: translateY(0) !important;
            }

            .custom-cursor {
                display: none;
            }

            @media (min-width: 1024px) {
                .custom-cursor {
                    display: block;
                    position: fixed;
                    top: 0;
                    left: 0;
                    pointer-events: none;
                    z-index: 9999;
                }

                .cursor-dot {
                    position: absolute;
                    width: 8px;
                    height: 8px;
                    background: #c9a96e;
                    border-radius: 50%;
                    transform: translate(-50%, -50%);
                    transition: transform 0.1s ease;
                }

                .cursor-ring {
                    position: absolute;
                    width: 32px;
                    height: 32px;
                    border: 1px solid rgba(201, 169, 110, 0.5);
                    border-radius: 50%;
                    transform: translate(-50%, -50%);
                    transition: transform 0.15s ease, width 0.2s ease, height 0.2s ease;
                }

                .cursor-hover .cursor-ring {
                    width: 50px;
                    height: 50px;
                    border-color: rgba(201, 169, 110, 0.8);
                }

                .cursor-hover .cursor-dot {
                    transform: translate(-50%, -50%) scale(0.5);
                }
            }

            .faq-answer {
                overflow: hidden;
                transition: max-height 0.3s ease;
            }

            .ba-handle {
                position: absolute;
                top: 0;
                bottom: 0;
                transform: translateX(-50%);
            }
        "#)} />
    }
}
