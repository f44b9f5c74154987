use yew::prelude::*;
use web_sys::HtmlInputElement;
use gloo_console::log;

use crate::capture::CaptureState;

#[derive(Properties, PartialEq)]
pub struct CaptureFormProps {
    pub submit_label: String,
}

// The form and the confirmation card are mutually exclusive views over one
// CaptureState value. Styling comes from the surrounding draft's style
// block, so the same markup wears a different skin on every page.
#[function_component(CaptureForm)]
pub fn capture_form(props: &CaptureFormProps) -> Html {
    let state = use_state(CaptureState::default);

    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(state.edit(input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let next = state.submit();
            if next.submitted {
                // Diagnostic only; there is no backend to hand the address to.
                log!("Email submitted:", next.email.clone());
            }
            state.set(next);
        })
    };

    html! {
        <div class="capture">
            if state.submitted {
                <div class="capture-thanks">
                    <h3>{"You're on the list!"}</h3>
                    <p>{"Thanks for joining. We'll be in your inbox soon."}</p>
                </div>
            } else {
                <form class="capture-form" onsubmit={onsubmit}>
                    <div class="capture-field">
                        <svg
                            class="capture-mail-glyph"
                            width="20"
                            height="20"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <rect width="20" height="16" x="2" y="4" rx="2" />
                            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
                        </svg>
                        <input
                            type="email"
                            class="capture-input"
                            placeholder="Enter your email"
                            aria-label="Email Address"
                            value={state.email.clone()}
                            oninput={oninput}
                        />
                    </div>
                    <button type="submit" class="capture-submit">
                        <span>{&props.submit_label}</span>
                        <svg
                            class="capture-submit-arrow"
                            width="20"
                            height="20"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <path d="m9 18 6-6-6-6" />
                        </svg>
                    </button>
                </form>
            }
            if let Some(message) = state.error.as_ref() {
                <p class="capture-error">{message}</p>
            }
        </div>
    }
}
