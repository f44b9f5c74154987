use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use chrono::{Datelike, Local};

use crate::components::capture_form::CaptureForm;
use crate::components::social_links::SocialLinks;

const GRID_COLS: usize = 14;
const GRID_ROWS: usize = 9;
const FALLOFF_RADIUS_PX: f64 = 260.0;

const REST_RGB: (u8, u8, u8) = (82, 84, 96);
const ACCENT_RGB: (u8, u8, u8) = (236, 72, 153);

// 1 under the pointer, 0 at the falloff radius and beyond.
fn proximity(distance: f64) -> f64 {
    (1.0 - distance / FALLOFF_RADIUS_PX).max(0.0)
}

fn blend_channel(rest: u8, accent: u8, t: f64) -> u8 {
    (f64::from(rest) + (f64::from(accent) - f64::from(rest)) * t).round() as u8
}

fn cell_color(t: f64) -> String {
    format!(
        "rgb({}, {}, {})",
        blend_channel(REST_RGB.0, ACCENT_RGB.0, t),
        blend_channel(REST_RGB.1, ACCENT_RGB.1, t),
        blend_channel(REST_RGB.2, ACCENT_RGB.2, t),
    )
}

#[function_component(Chrome)]
pub fn chrome() -> Html {
    let pointer = use_state(|| None::<(f64, f64)>);
    let grid_ref = use_node_ref();

    // Track the pointer for the whole page so the grid keeps responding
    // while the cursor is over the copy or the form.
    {
        let pointer = pointer.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let listener = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                    pointer.set(Some((
                        f64::from(event.client_x()),
                        f64::from(event.client_y()),
                    )));
                }) as Box<dyn FnMut(web_sys::MouseEvent)>);

                window
                    .add_event_listener_with_callback(
                        "mousemove",
                        listener.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "mousemove",
                            listener.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Viewport-space frame of the grid, refreshed every render. Before the
    // first layout pass there is no frame and every cell rests dim.
    let frame = grid_ref.cast::<HtmlElement>().map(|el| {
        let rect = el.get_bounding_client_rect();
        (rect.left(), rect.top(), rect.width(), rect.height())
    });

    let cells = (0..GRID_ROWS * GRID_COLS).map(|index| {
        let col = index % GRID_COLS;
        let row = index / GRID_COLS;
        let t = match (frame, *pointer) {
            (Some((left, top, width, height)), Some((px, py))) => {
                let cx = left + (col as f64 + 0.5) * width / GRID_COLS as f64;
                let cy = top + (row as f64 + 0.5) * height / GRID_ROWS as f64;
                proximity(((px - cx).powi(2) + (py - cy).powi(2)).sqrt())
            }
            _ => 0.0,
        };
        html! {
            <div
                key={index}
                class="shimmer-cell"
                style={format!(
                    "opacity: {:.3}; transform: scale({:.3}); background: {};",
                    0.10 + 0.90 * t,
                    0.55 + 0.45 * t,
                    cell_color(t),
                )}
            />
        }
    });

    let year = Local::now().year();

    html! {
        <div class="chrome">
            <div class="shimmer-field" ref={grid_ref.clone()}>
                { for cells }
            </div>

            <main class="page-content">
                <div class="brand-mark">{"K L A W S"}</div>
                <h1 class="headline">{"Nails That Make a Statement."}</h1>
                <p class="page-copy">
                    {"Get ready to elevate your look. We're crafting bespoke, reusable \
                      press-on nails for every mood and moment. Launching soon."}
                </p>
                <CaptureForm submit_label={"Get Early Access".to_string()} />
                <SocialLinks />
            </main>

            <footer class="page-footer">
                {format!("© {} Klaws Co. All Rights Reserved.", year)}
            </footer>

            <style>
                {r#"
                .chrome {
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
                    background: #0b0b0d;
                    color: #ffffff;
                    font-family: 'Space Grotesk', sans-serif;
                }

                .shimmer-field {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    display: grid;
                    grid-template-columns: repeat(14, 1fr);
                    grid-template-rows: repeat(9, 1fr);
                    padding: 2rem;
                    box-sizing: border-box;
                    pointer-events: none;
                }

                .shimmer-cell {
                    justify-self: center;
                    align-self: center;
                    width: 16px;
                    height: 30px;
                    border-radius: 8px;
                    transition: opacity 0.25s ease-out, transform 0.25s ease-out,
                        background 0.25s ease-out;
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
                    letter-spacing: 0.4em;
                    color: #9ba3b4;
                    opacity: 0;
                    animation: rise-in 0.8s ease-out forwards;
                    animation-delay: 0.2s;
                }

                .headline {
                    margin: 0 0 1rem;
                    font-size: clamp(2.5rem, 8vw, 4.5rem);
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    line-height: 1.05;
                    background: linear-gradient(45deg, #f5f6f8, #9ba3b4 55%, #ec4899);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    opacity: 0;
                    animation: rise-in 0.8s ease-out forwards;
                    animation-delay: 0.4s;
                }

                .page-copy {
                    margin: 0 0 2rem;
                    max-width: 32rem;
                    font-size: 1.125rem;
                    line-height: 1.6;
                    color: #a9adb8;
                    opacity: 0;
                    animation: rise-in 0.8s ease-out forwards;
                    animation-delay: 0.6s;
                }

                .capture {
                    width: 100%;
                    max-width: 28rem;
                    opacity: 0;
                    animation: rise-in 0.8s ease-out forwards;
                    animation-delay: 0.8s;
                }

                @keyframes rise-in {
                    from { opacity: 0; transform: translateY(18px); }
                    to { opacity: 1; transform: translateY(0); }
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
                    color: #6f7480;
                    pointer-events: none;
                }

                .capture-input {
                    width: 100%;
                    height: 3rem;
                    padding: 0 1rem 0 2.5rem;
                    box-sizing: border-box;
                    background: rgba(27, 28, 33, 0.8);
                    border: 1px solid #2c2e36;
                    border-radius: 2px;
                    color: #f5f6f8;
                    font-family: inherit;
                    font-size: 1rem;
                    transition: box-shadow 0.3s ease, border-color 0.3s ease;
                }

                .capture-input::placeholder {
                    color: #5c606c;
                }

                .capture-input:focus {
                    outline: none;
                    border-color: #ec4899;
                    box-shadow: 0 0 0 2px rgba(236, 72, 153, 0.35);
                }

                .capture-submit {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.25rem;
                    height: 3rem;
                    padding: 0 1.5rem;
                    border: 1px solid #ec4899;
                    border-radius: 2px;
                    background: transparent;
                    color: #ec4899;
                    font-family: inherit;
                    font-size: 1rem;
                    font-weight: 600;
                    letter-spacing: 0.04em;
                    white-space: nowrap;
                    cursor: pointer;
                    transition: background 0.2s ease, color 0.2s ease, box-shadow 0.2s ease;
                }

                .capture-submit:hover {
                    background: #ec4899;
                    color: #0b0b0d;
                    box-shadow: 0 0 24px rgba(236, 72, 153, 0.45);
                }

                .capture-submit:active {
                    box-shadow: 0 0 8px rgba(236, 72, 153, 0.45);
                }

                .capture-error {
                    margin: 0.5rem 0 0;
                    font-size: 0.875rem;
                    text-align: center;
                    color: #f87171;
                }

                .capture-thanks {
                    padding: 1rem;
                    border: 1px solid #2c2e36;
                    border-radius: 2px;
                    background: rgba(27, 28, 33, 0.8);
                    animation: rise-in 0.5s ease-out;
                }

                .capture-thanks h3 {
                    margin: 0 0 0.25rem;
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #ec4899;
                }

                .capture-thanks p {
                    margin: 0;
                    color: #c9ccd4;
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
                    color: #6f7480;
                    transition: color 0.3s ease, transform 0.3s ease;
                }

                .social-link:hover {
                    color: #ec4899;
                    transform: scale(1.15);
                }

                .page-footer {
                    position: absolute;
                    bottom: 1rem;
                    z-index: 1;
                    font-size: 0.875rem;
                    color: #5c606c;
                    text-align: center;
                }

                @media (max-width: 640px) {
                    .capture-form {
                        flex-direction: column;
                    }

                    .capture-submit {
                        width: 100%;
                    }

                    .shimmer-field {
                        grid-template-columns: repeat(7, 1fr);
                        grid-template-rows: repeat(12, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proximity_is_full_under_the_pointer() {
        assert!((proximity(0.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn proximity_is_zero_at_and_beyond_the_radius() {
        assert_eq!(proximity(FALLOFF_RADIUS_PX), 0.0);
        assert_eq!(proximity(FALLOFF_RADIUS_PX * 4.0), 0.0);
    }

    #[test]
    fn proximity_decreases_with_distance() {
        let near = proximity(40.0);
        let mid = proximity(130.0);
        let far = proximity(250.0);
        assert!(near > mid);
        assert!(mid > far);
        assert!(far > 0.0);
    }

    #[test]
    fn cell_color_hits_both_endpoints() {
        assert_eq!(cell_color(0.0), "rgb(82, 84, 96)");
        assert_eq!(cell_color(1.0), "rgb(236, 72, 153)");
    }

    #[test]
    fn cell_color_blends_between_the_endpoints() {
        assert_eq!(cell_color(0.5), "rgb(159, 78, 125)");
    }
}
