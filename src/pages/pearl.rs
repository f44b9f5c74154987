use yew::prelude::*;
use chrono::{Datelike, Local};
use gloo_timers::callback::Timeout;

use crate::components::capture_form::CaptureForm;
use crate::components::social_links::SocialLinks;

struct Shape {
    top: &'static str,
    left: &'static str,
    size_px: u16,
    tint: &'static str,
    duration_s: u8,
    delay_s: u8,
}

const SHAPES: [Shape; 3] = [
    Shape {
        top: "8vh",
        left: "6vw",
        size_px: 340,
        tint: "rgba(194, 112, 126, 0.18)",
        duration_s: 13,
        delay_s: 0,
    },
    Shape {
        top: "30vh",
        left: "72vw",
        size_px: 260,
        tint: "rgba(201, 168, 106, 0.20)",
        duration_s: 17,
        delay_s: 2,
    },
    Shape {
        top: "66vh",
        left: "18vw",
        size_px: 220,
        tint: "rgba(157, 136, 122, 0.16)",
        duration_s: 11,
        delay_s: 4,
    },
];

#[function_component(Pearl)]
pub fn pearl() -> Html {
    let lit = use_state(|| 0usize);

    // Walks the emphasis across the shapes, one every four seconds.
    {
        let lit_value = lit.clone();
        let lit_setter = lit.setter();
        use_effect(move || {
            let next = (*lit_value + 1) % SHAPES.len();
            let timeout = Timeout::new(4_000, move || {
                lit_setter.set(next);
            });
            timeout.forget();

            || ()
        });
    }

    let year = Local::now().year();

    html! {
        <div class="pearl">
            <div class="shape-field">
                { for SHAPES.iter().enumerate().map(|(index, shape)| html! {
                    <div
                        class={classes!("shape", (index == *lit).then(|| "lit"))}
                        style={format!(
                            "top: {}; left: {}; width: {}px; height: {}px; background: {}; \
                             animation-duration: {}s; animation-delay: {}s;",
                            shape.top, shape.left, shape.size_px, shape.size_px,
                            shape.tint, shape.duration_s, shape.delay_s,
                        )}
                    />
                }) }
            </div>

            <main class="page-content">
                <div class="brand-mark">{"K L A W S"}</div>
                <h1 class="headline">{"Nails That Make a Statement."}</h1>
                <p class="page-copy">
                    {"Get ready to elevate your look. We're crafting bespoke, reusable \
                      press-on nails for every mood and moment. Launching soon."}
                </p>
                <CaptureForm submit_label={"Join the List".to_string()} />
                <SocialLinks />
            </main>

            <footer class="page-footer">
                {format!("© {} Klaws Co. All Rights Reserved.", year)}
            </footer>

            <style>
                {r#"
                .pearl {
                    position: relative;
                    min-height: 100vh;
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    box-sizing: border-box;
                    overflow: hidden;
                    background: #f7f2ec;
                    color: #33302b;
                    font-family: 'Space Grotesk', sans-serif;
                }

                .shape-field {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    overflow: hidden;
                }

                .shape {
                    position: absolute;
                    border: 1px solid rgba(51, 48, 43, 0.08);
                    border-radius: 52% 48% 55% 45% / 60% 55% 45% 40%;
                    opacity: 0.55;
                    animation-name: shape-float;
                    animation-timing-function: ease-in-out;
                    animation-iteration-count: infinite;
                    animation-direction: alternate;
                    transition: opacity 1.5s ease, box-shadow 1.5s ease;
                }

                .shape.lit {
                    opacity: 0.95;
                    box-shadow: 0 24px 60px rgba(194, 112, 126, 0.35);
                }

                @keyframes shape-float {
                    from { transform: translateY(0) rotate(0deg); }
                    to { transform: translateY(-26px) rotate(7deg); }
                }

                .page-content {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    max-width: 42rem;
                }

                .brand-mark {
                    margin-bottom: 1rem;
                    font-family: 'Josefin Sans', sans-serif;
                    font-size: 1.5rem;
                    font-weight: 400;
                    letter-spacing: 0.45em;
                    color: #c2707e;
                    opacity: 0;
                    animation: rise-in 1s ease forwards;
                    animation-delay: 0.2s;
                }

                .headline {
                    margin: 0 0 1rem;
                    font-family: 'Josefin Sans', sans-serif;
                    font-size: clamp(2.25rem, 7vw, 4rem);
                    font-weight: 600;
                    letter-spacing: -0.01em;
                    line-height: 1.1;
                    opacity: 0;
                    animation: rise-in 1s ease forwards;
                    animation-delay: 0.4s;
                }

                .page-copy {
                    margin: 0 0 2rem;
                    max-width: 30rem;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: #6d6659;
                    opacity: 0;
                    animation: rise-in 1s ease forwards;
                    animation-delay: 0.6s;
                }

                .capture {
                    width: 100%;
                    max-width: 28rem;
                    opacity: 0;
                    animation: settle-in 0.9s ease forwards;
                    animation-delay: 0.8s;
                }

                @keyframes rise-in {
                    from { opacity: 0; transform: translateY(16px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes settle-in {
                    from { opacity: 0; transform: scale(0.94); }
                    to { opacity: 1; transform: scale(1); }
                }

                .capture-form {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    width: 100%;
                }

                .capture-field {
                    position: relative;
                    flex: 1;
                    width: 100%;
                }

                .capture-mail-glyph {
                    position: absolute;
                    left: 0.75rem;
                    top: 50%;
                    transform: translateY(-50%);
                    color: #a89e8f;
                    pointer-events: none;
                }

                .capture-input {
                    width: 100%;
                    height: 3rem;
                    padding: 0 1rem 0 2.5rem;
                    box-sizing: border-box;
                    background: #ffffff;
                    border: 1px solid #e2d9cd;
                    border-radius: 999px;
                    color: #33302b;
                    font-family: inherit;
                    font-size: 1rem;
                    transition: box-shadow 0.3s ease, border-color 0.3s ease;
                }

                .capture-input::placeholder {
                    color: #a89e8f;
                }

                .capture-input:focus {
                    outline: none;
                    border-color: #c2707e;
                    box-shadow: 0 0 0 3px rgba(194, 112, 126, 0.2);
                }

                .capture-submit {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.25rem;
                    height: 3rem;
                    padding: 0 1.75rem;
                    border: none;
                    border-radius: 999px;
                    background: #c2707e;
                    color: #ffffff;
                    font-family: inherit;
                    font-size: 1rem;
                    font-weight: 500;
                    white-space: nowrap;
                    cursor: pointer;
                    box-shadow: 0 12px 24px rgba(194, 112, 126, 0.25);
                    transition: transform 0.2s ease, background 0.2s ease;
                }

                .capture-submit:hover {
                    transform: translateY(-2px);
                    background: #b05c6b;
                }

                .capture-submit:active {
                    transform: translateY(0);
                }

                .capture-error {
                    margin: 0.5rem 0 0;
                    font-size: 0.875rem;
                    text-align: center;
                    color: #b3432b;
                }

                .capture-thanks {
                    padding: 1.25rem;
                    border: 1px solid #e2d9cd;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.7);
                    animation: rise-in 0.5s ease;
                }

                .capture-thanks h3 {
                    margin: 0 0 0.25rem;
                    font-family: 'Josefin Sans', sans-serif;
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #c2707e;
                }

                .capture-thanks p {
                    margin: 0;
                    color: #6d6659;
                }

                .social-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    margin-top: 3rem;
                    opacity: 0;
                    animation: rise-in 1s ease forwards;
                    animation-delay: 1s;
                }

                .social-link {
                    color: #a89e8f;
                    transition: color 0.3s ease, transform 0.3s ease;
                }

                .social-link:hover {
                    color: #33302b;
                    transform: translateY(-3px);
                }

                .page-footer {
                    position: absolute;
                    bottom: 1rem;
                    z-index: 1;
                    font-size: 0.875rem;
                    color: #a89e8f;
                    text-align: center;
                }

                @media (max-width: 640px) {
                    .capture-form {
                        flex-direction: column;
                    }

                    .capture-submit {
                        width: 100%;
                    }

                    .shape {
                        filter: blur(2px);
                    }
                }
                "#}
            </style>
        </div>
    }
}
