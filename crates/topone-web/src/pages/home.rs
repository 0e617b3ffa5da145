//! Landing page

use leptos::prelude::*;

/// Selling point shown in the benefits grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Accent color class for the icon
    pub accent: &'static str,
}

pub const BENEFITS: [Benefit; 3] = [
    Benefit {
        icon: "🌿",
        title: "Stronger Roots",
        description: "Improves nutrient absorption and root development",
        accent: "accent-green",
    },
    Benefit {
        icon: "🛡️",
        title: "Disease Resistance",
        description: "Protects against pests, diseases & drought conditions",
        accent: "accent-blue",
    },
    Benefit {
        icon: "📈",
        title: "Higher Yields",
        description: "Increases harvest quantity by up to 100%",
        accent: "accent-amber",
    },
];

/// Home page: hero, benefits and testimonials
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page home-page">
            <section class="hero">
                <div class="hero-backdrop"></div>
                <div class="container hero-content">
                    <h1 class="hero-title">
                        "Boost Crop Yields by "
                        <span class="hero-highlight">"100%"</span>
                        " Naturally 🌱"
                    </h1>
                    <p class="hero-subtitle">
                        "Top One Plus Organic Fertilizer enhances plant growth with seaweed extract."
                    </p>
                    <a href="/contact" class="cta-button">"Order Now →"</a>
                </div>
            </section>

            <section class="benefits">
                <div class="container">
                    <h2 class="section-title">"Why Farmers Love Top One Plus"</h2>
                    <div class="benefit-grid">
                        {BENEFITS
                            .iter()
                            .map(|benefit| view! { <BenefitCard benefit=*benefit /> })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section class="testimonials">
                <div class="container">
                    <h2 class="section-title">"Farmer Testimonials"</h2>
                </div>
            </section>
        </div>
    }
}

#[component]
fn BenefitCard(benefit: Benefit) -> impl IntoView {
    view! {
        <div class="card benefit-card">
            <span class=format!("benefit-icon {}", benefit.accent)>{benefit.icon}</span>
            <h3 class="benefit-title">{benefit.title}</h3>
            <p class="benefit-description">{benefit.description}</p>
        </div>
    }
}
