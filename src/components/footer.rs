use chrono::Datelike;
use yew::prelude::*;

struct FooterLink {
    icon: &'static str,
    label: &'static str,
    href: &'static str,
    description: &'static str,
}

const FOOTER_LINKS: [FooterLink; 5] = [
    FooterLink {
        icon: "🔍",
        label: "Find a Doctor",
        href: "/doctors",
        description: "Browse our directory of specialists",
    },
    FooterLink {
        icon: "📖",
        label: "Research",
        href: "/research",
        description: "Latest medical research and studies",
    },
    FooterLink {
        icon: "❤",
        label: "Programs",
        href: "/programs",
        description: "Health and wellness programs",
    },
    FooterLink {
        icon: "✉",
        label: "Contact",
        href: "/contact",
        description: "Get in touch with our team",
    },
    FooterLink {
        icon: "🛡",
        label: "Privacy",
        href: "/privacy",
        description: "Privacy policy and data protection",
    },
];

fn copyright(year: i32) -> String {
    format!("© {} Early.fit. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="site-footer-inner">
                <div class="footer-links">
                    { for FOOTER_LINKS.iter().map(|link| html! {
                        <a key={link.label} class="footer-link" href={link.href}>
                            <div class="footer-link-title">
                                <span>{link.icon}</span>
                                <span>{link.label}</span>
                            </div>
                            <p>{link.description}</p>
                        </a>
                    }) }
                </div>
                <hr />
                <div class="footer-bottom">
                    <div class="footer-brand">
                        <div class="footer-brand-mark">{"❤"}</div>
                        <div>
                            <p class="footer-brand-name">{"Early.fit"}</p>
                            <p class="footer-brand-tagline">{"Personalized healthcare solutions"}</p>
                        </div>
                    </div>
                    <div class="footer-legal">
                        <p>{copyright(year)}</p>
                        <a href="/terms">{"Terms of Service"}</a>
                        <a href="/privacy">{"Privacy Policy"}</a>
                        <a href="/accessibility">{"Accessibility"}</a>
                    </div>
                </div>
                <div class="footer-disclaimer">
                    <p>
                        <strong>{"Medical Disclaimer:"}</strong>
                        {" The information provided on this platform is for educational purposes only and should not be considered as medical advice. Always consult with qualified healthcare professionals before making any medical decisions or starting new treatments."}
                    </p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #f7f8f5;
                    border-top: 1px solid #e4e7df;
                    margin-top: 4rem;
                }
                .site-footer-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                }
                .footer-links {
                    display: grid;
                    grid-template-columns: repeat(5, 1fr);
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                .footer-link {
                    text-decoration: none;
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                    transition: background 0.2s ease;
                }
                .footer-link:hover {
                    background: #eef0ea;
                }
                .footer-link-title {
                    display: flex;
                    gap: 0.75rem;
                    font-weight: 500;
                    color: #2e3523;
                }
                .footer-link p {
                    font-size: 0.875rem;
                    color: #6b6f66;
                    margin: 0.25rem 0 0 0;
                }
                .site-footer hr {
                    border: none;
                    border-top: 1px solid #e4e7df;
                    margin: 2rem 0;
                }
                .footer-bottom {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .footer-brand-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.5rem;
                    background: #4caf50;
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .footer-brand-name {
                    font-weight: 600;
                    color: #2e3523;
                    margin: 0;
                }
                .footer-brand-tagline {
                    font-size: 0.75rem;
                    color: #6b6f66;
                    margin: 0;
                }
                .footer-legal {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #6b6f66;
                }
                .footer-legal a {
                    color: #6b6f66;
                    text-decoration: none;
                }
                .footer-legal a:hover {
                    color: #2e3523;
                }
                .footer-disclaimer {
                    margin-top: 2rem;
                    padding: 1rem;
                    background: #eef0ea;
                    border: 1px solid #e4e7df;
                    border-radius: 0.75rem;
                    font-size: 0.75rem;
                    color: #6b6f66;
                    line-height: 1.6;
                }
                .footer-disclaimer strong {
                    color: #2e3523;
                }
                @media (max-width: 1024px) {
                    .footer-links {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .footer-bottom,
                    .footer-legal {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright(2026), "© 2026 Early.fit. All rights reserved.");
    }
}
