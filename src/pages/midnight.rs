use yew::prelude::*;
use chrono::{Datelike, Local};

use crate::components::capture_form::CaptureForm;
use crate::components::social_links::SocialLinks;

struct Blob {
    top: &'static str,
    left: &'static str,
    size_px: u16,
    fill: &'static str,
    drift_x: &'static str,
    drift_y: &'static str,
    duration_s: u8,
    delay_s: u8,
}

// Trajectories and timings from the first accepted cut of this draft.
const BLOBS: [Blob; 4] = [
    Blob {
        top: "10vh",
        left: "10vw",
        size_px: 300,
        fill: "rgba(236, 72, 153, 0.4)",
        drift_x: "80vw",
        drift_y: "60vh",
        duration_s: 15,
        delay_s: 0,
    },
    Blob {
        top: "70vh",
        left: "80vw",
        size_px: 400,
        fill: "rgba(139, 92, 246, 0.3)",
        drift_x: "-50vw",
        drift_y: "-40vh",
        duration_s: 20,
        delay_s: 3,
    },
    Blob {
        top: "50vh",
        left: "5vw",
        size_px: 250,
        fill: "rgba(96, 165, 250, 0.25)",
        drift_x: "40vw",
        drift_y: "-70vh",
        duration_s: 25,
        delay_s: 1,
    },
    Blob {
        top: "5vh",
        left: "70vw",
        size_px: 200,
        fill: "rgba(236, 72, 153, 0.3)",
        drift_x: "-30vw",
        drift_y: "50vh",
        duration_s: 18,
        delay_s: 5,
    },
];

#[function_component(Midnight)]
pub fn midnight() -> Html {
    let year = Local::now().year();

    html! {
        <div class="midnight">
            <div class="blob-field">
                { for BLOBS.iter().map(|blob| html! {
                    <div
                        class="blob"
                        style={format!(
                            "top: {}; left: {}; width: {}px; height: {}px; background: {}; \
                             animation-duration: {}s; animation-delay: {}s; --drift-x: {}; --drift-y: {};",
                            blob.top, blob.left, blob.size_px, blob.size_px, blob.fill,
                            blob.duration_s, blob.delay_s, blob.drift_x, blob.drift_y,
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
                <CaptureForm submit_label={"Notify Me".to_string()} />
                <SocialLinks />
            </main>

            <footer class="page-footer">
                {format!("© {} Klaws Co. All Rights Reserved.", year)}
            </footer>

            <style>
                {r#"
                .midnight {
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
                    background: #101010;
                    color: #ffffff;
                    font-family: 'Space Grotesk', sans-serif;
                }

                .blob-field {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    overflow: hidden;
                }

                .blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    animation-name: blob-drift;
                    animation-timing-function: ease-in-out;
                    animation-iteration-count: infinite;
                    animation-direction: alternate;
                }

                @keyframes blob-drift {
                    from { transform: translate(0, 0); }
                    to { transform: translate(var(--drift-x), var(--drift-y)); }
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
                    font-size: 1.75rem;
                    font-weight: 300;
                    letter-spacing: 0.35em;
                    color: #f472b6;
                    opacity: 0;
                    animation: sink-in 0.8s ease-out forwards;
                    animation-delay: 0.2s;
                }

                .headline {
                    margin: 0 0 1rem;
                    font-size: clamp(2.5rem, 8vw, 4.5rem);
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    line-height: 1.05;
                    opacity: 0;
                    animation: rise-in 0.8s ease-out forwards;
                    animation-delay: 0.4s;
                }

                .page-copy {
                    margin: 0 0 2rem;
                    max-width: 32rem;
                    font-size: 1.125rem;
                    line-height: 1.6;
                    color: #d1d5db;
                    opacity: 0;
                    animation: rise-in 0.8s ease-out forwards;
                    animation-delay: 0.6s;
                }

                .capture {
                    width: 100%;
                    max-width: 28rem;
                    opacity: 0;
                    animation: settle-in 0.7s ease-out forwards;
                    animation-delay: 0.8s;
                }

                @keyframes sink-in {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes rise-in {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes settle-in {
                    from { opacity: 0; transform: scale(0.9); }
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
                    color: #9ca3af;
                    pointer-events: none;
                }

                .capture-input {
                    width: 100%;
                    height: 3rem;
                    padding: 0 1rem 0 2.5rem;
                    box-sizing: border-box;
                    background: rgba(31, 41, 55, 0.5);
                    border: 1px solid #374151;
                    border-radius: 0.375rem;
                    color: #ffffff;
                    font-family: inherit;
                    font-size: 1rem;
                    backdrop-filter: blur(4px);
                    transition: box-shadow 0.3s ease, border-color 0.3s ease;
                }

                .capture-input::placeholder {
                    color: #6b7280;
                }

                .capture-input:focus {
                    outline: none;
                    border-color: #ec4899;
                    box-shadow: 0 0 0 2px rgba(236, 72, 153, 0.5);
                }

                .capture-submit {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.25rem;
                    height: 3rem;
                    padding: 0 1.5rem;
                    border: none;
                    border-radius: 0.375rem;
                    background: #ec4899;
                    color: #ffffff;
                    font-family: inherit;
                    font-size: 1rem;
                    font-weight: 600;
                    white-space: nowrap;
                    cursor: pointer;
                    box-shadow: 0 10px 15px -3px rgba(236, 72, 153, 0.2);
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }

                .capture-submit:hover {
                    transform: scale(1.05);
                    box-shadow: 0 5px 20px rgba(236, 72, 153, 0.4);
                }

                .capture-submit:active {
                    transform: scale(0.98);
                }

                .capture-error {
                    margin: 0.5rem 0 0;
                    font-size: 0.875rem;
                    text-align: center;
                    color: #f87171;
                }

                .capture-thanks {
                    padding: 1rem;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    animation: rise-in 0.5s ease-out;
                }

                .capture-thanks h3 {
                    margin: 0 0 0.25rem;
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #f472b6;
                }

                .capture-thanks p {
                    margin: 0;
                    color: #e5e7eb;
                }

                .social-links {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    margin-top: 3rem;
                    opacity: 0;
                    animation: rise-in 0.8s ease-out forwards;
                    animation-delay: 1s;
                }

                .social-link {
                    color: #9ca3af;
                    transition: color 0.3s ease, transform 0.3s ease;
                }

                .social-link:hover {
                    color: #ffffff;
                    transform: scale(1.2) rotate(5deg);
                }

                .page-footer {
                    position: absolute;
                    bottom: 1rem;
                    z-index: 1;
                    font-size: 0.875rem;
                    color: #6b7280;
                    text-align: center;
                }

                @media (max-width: 640px) {
                    .capture-form {
                        flex-direction: column;
                    }

                    .capture-submit {
                        width: 100%;
                    }

                    .social-links {
                        margin-top: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
