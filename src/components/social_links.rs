use yew::prelude::*;

struct SocialLink {
    label: &'static str,
    href: &'static str,
    path: &'static str,
}

// Placeholder targets until the brand accounts go live.
const LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Instagram",
        href: "#",
        path: "M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.85s-.012 3.584-.07 4.85c-.148 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07s-3.584-.012-4.85-.07c-3.252-.148-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.85s.012-3.584.07-4.85c.148-3.225 1.664-4.771 4.919-4.919C8.416 2.175 8.796 2.163 12 2.163m0-1.625C8.724.538 8.333.525 7.053.472 3.498.322.926 2.922.781 6.521.729 7.802.717 8.192.717 12s.012 4.198.064 5.479c.145 3.599 2.717 6.194 6.272 6.338 1.279.053 1.67.065 4.947.065s3.668-.012 4.947-.065c3.555-.144 6.127-2.739 6.272-6.338.052-1.281.064-1.671.064-5.479s-.012-4.198-.064-5.479C23.078 2.922 20.506.322 16.951.472c-1.279-.053-1.67-.065-4.947-.065H12z M12 6.837a5.163 5.163 0 100 10.326 5.163 5.163 0 000-10.326zm0 8.704a3.541 3.541 0 110-7.082 3.541 3.541 0 010 7.082zM17.636 5.418a1.227 1.227 0 100 2.454 1.227 1.227 0 000-2.454z",
    },
    SocialLink {
        label: "Facebook",
        href: "#",
        path: "M22.675 0h-21.35c-.732 0-1.325.593-1.325 1.325v21.351c0 .731.593 1.324 1.325 1.324h11.495v-9.294h-3.128v-3.622h3.128v-2.671c0-3.1 1.893-4.788 4.659-4.788 1.325 0 2.463.099 2.795.143v3.24l-1.918.001c-1.504 0-1.795.715-1.795 1.763v2.313h3.587l-.467 3.622h-3.12v9.293h6.116c.73 0 1.323-.593 1.323-1.325v-21.35c0-.732-.593-1.325-1.325-1.325z",
    },
    SocialLink {
        label: "YouTube",
        href: "#",
        path: "M19.615 3.184c-3.604-.246-11.631-.245-15.23 0-3.897.266-4.356 2.62-4.385 8.816.029 6.185.484 8.549 4.385 8.816 3.6.245 11.626.246 15.23 0 3.897-.266 4.356-2.62 4.385-8.816-.029-6.185-.484-8.549-4.385-8.816zm-10.615 12.816v-8l8 3.993-8 4.007z",
    },
];

#[function_component(SocialLinks)]
pub fn social_links() -> Html {
    html! {
        <div class="social-links">
            { for LINKS.iter().map(|link| html! {
                <a
                    class="social-link"
                    href={link.href}
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label={link.label}
                >
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor" xmlns="http://www.w3.org/2000/svg">
                        <path d={link.path} />
                    </svg>
                </a>
            }) }
        </div>
    }
}
