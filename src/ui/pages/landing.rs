//! Landing page component
//!
//! Marketing page for Bindrix featuring:
//! - SEO meta tags
//! - Hero section with the waitlist form
//! - Before/after comparison with headline metrics
//! - AI capability, social suite and solution tab groups
//! - Integrations showcase
//! - Result cards
//! - FAQ accordion
//! - Final call-to-action with a second waitlist form

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{
    FAQ, NEW_WAY_METRICS, OLD_WAY_METRICS, PLATFORMS, RESULTS, ResultCard,
};
use crate::ui::anchor::AnchorLink;
use crate::ui::common::TabSection;
use crate::ui::faq::{FaqList, provide_accordion_context};
use crate::ui::reveal::use_scroll_reveal;
use crate::ui::waitlist::{HiddenFrame, WaitlistForm, provide_hidden_frame};

const PAGE_TITLE: &str = "Bindrix - One Smart Inbox for All Your Social Conversations";
const PAGE_DESCRIPTION: &str = "Bindrix unifies messages, comments, scheduling, analytics, and automates replies with intelligent, inventory-aware AI.";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    provide_accordion_context();
    provide_hidden_frame();
    use_scroll_reveal();

    view! {
        <SeoMeta />

        <Navbar />

        <HeroSection />
        <ComparisonSection />

        <section class="features-section ai-features" id="features">
            <div class="container">
                <SectionHeader badge="AI Capabilities" title="Intelligent Engagement" />
                <TabSection group_id="ai-tabs" />
            </div>
        </section>

        <section class="features-section suite-features">
            <div class="container">
                <SectionHeader badge="All-in-One Suite" title="Powerful Social Management" />
                <TabSection group_id="suite-tabs" />
            </div>
        </section>

        <IntegrationsSection />
        <ResultsSection />

        <section class="use-cases-section" id="use-cases">
            <div class="container">
                <SectionHeader badge="Solutions" title="Built for every way you work" />
                <TabSection group_id="solution-tabs" />
            </div>
        </section>

        <FaqSection />
        <FinalCta />
        <Footer />

        <HiddenFrame />
        <LandingStyles />
    }
}

#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE />
        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />
        <Link rel="stylesheet" href=FONT_AWESOME_CSS />
    }
}

#[component]
fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="nav-container container">
                <a href="/" class="logo">"Bindrix"<span class="dot">"."</span></a>
                <div class="nav-links">
                    <AnchorLink href="#features">"Features"</AnchorLink>
                    <AnchorLink href="#integrations">"Integrations"</AnchorLink>
                    <AnchorLink href="#results">"Results"</AnchorLink>
                    <AnchorLink href="#use-cases">"Solutions"</AnchorLink>
                    <AnchorLink href="#faq">"FAQ"</AnchorLink>
                </div>
                <AnchorLink href="#waitlist-hero" class="cta-button small">
                    "Join the Waitlist"
                </AnchorLink>
            </div>
        </nav>
    }
}

#[component]
fn SectionHeader(
    badge: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="section-header center">
            <span class="badge">{badge}</span>
            <h2>{title}</h2>
            {subtitle.map(|text| view! { <p>{text}</p> })}
        </div>
    }
}

#[component]
fn EarlyAccessOffer(#[prop(optional)] centered: bool) -> impl IntoView {
    view! {
        <div class="early-access-offer" class:centered-offer=centered>
            <div class="offer-badge">
                <span class="offer-icon">"✨"</span>
                <span class="offer-text">"Early Access Perk"</span>
            </div>
            <p class="offer-details">
                "Join the waitlist today and get "
                <span class="offer-highlight">"1 Month Free + Lifetime 'Early Bird' Discount"</span>
                " when we launch"
            </p>
        </div>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <header class="hero-section" id="waitlist-hero">
            <div class="container hero-content">
                <div class="hero-text">
                    <h1>
                        "One Smart Inbox for All Your Social Conversations, "
                        <span class="gradient-text">"Powered by AI"</span>
                    </h1>
                    <p class="hero-subtext">
                        "Bindrix unifies messages, comments, and DMs across channels, plus scheduling and analytics, then automates replies with intelligent, inventory-aware AI so growing brands never miss a customer."
                    </p>
                    <WaitlistForm />
                    <EarlyAccessOffer />
                </div>
            </div>
        </header>
    }
}

#[component]
fn ComparisonSection() -> impl IntoView {
    view! {
        <section class="comparison-section">
            <div class="container">
                <SectionHeader
                    badge="Upgrade Your Workflow"
                    title="Stop Managing Chaos. Start Scaling Fast"
                    subtitle="The difference between keeping up and dominating the market is how you handle your conversations."
                />
                <div class="comparison-grid">
                    <ComparisonSide
                        tag="The Old Way"
                        title="Fragmented Chaos"
                        description="Managing multiple tabs, missing messages, and losing leads in the noise."
                        metrics=OLD_WAY_METRICS
                        unified=false
                    />
                    <ComparisonSide
                        tag="The Bindrix Way"
                        title="Unified Clarity"
                        description="One powerful inbox. AI-driven automation. Total control over your growth."
                        metrics=NEW_WAY_METRICS
                        unified=true
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ComparisonSide(
    tag: &'static str,
    title: &'static str,
    description: &'static str,
    metrics: &'static [(&'static str, &'static str)],
    unified: bool,
) -> impl IntoView {
    view! {
        <div class="comparison-side" class:unified=unified class:fragmented={!unified}>
            <span class="comparison-tag">{tag}</span>
            <h3>{title}</h3>
            <p>{description}</p>
            <div class="metrics-grid">
                {metrics.iter().map(|(value, label)| view! {
                    <div class="metric-item">
                        <span class="metric-value">{*value}</span>
                        <span class="metric-label">{*label}</span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn IntegrationsSection() -> impl IntoView {
    view! {
        <section class="integrations-section" id="integrations">
            <div class="container">
                <SectionHeader
                    badge="Ecosystem"
                    title="Connect all your platforms seamlessly"
                    subtitle="One hub to manage your entire social presence across major platforms and marketplaces."
                />
                <div class="platform-hub">
                    <div class="hub-logo"><span class="logo-b">"B"</span></div>
                    <ul class="hub-platforms">
                        {PLATFORMS.iter().map(|platform| view! {
                            <li class={format!("platform-item {}", platform.class)} title=platform.name>
                                <i class=platform.icon aria-hidden="true"></i>
                                <span class="platform-name">{platform.name}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
                <p class="coming-soon">"More integrations coming soon."</p>
            </div>
        </section>
    }
}

#[component]
fn ResultsSection() -> impl IntoView {
    view! {
        <section class="results-section" id="results">
            <div class="container">
                <SectionHeader
                    badge="Performance"
                    title="Results you can count on"
                    subtitle="Metrics that prove Bindrix is the smartest investment for your brand."
                />
                <div class="benefits-grid">
                    {RESULTS.iter().map(|card| view! { <BenefitCard card=*card /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn BenefitCard(card: ResultCard) -> impl IntoView {
    view! {
        <div class="benefit-card">
            <div class="card-header-row">
                <div class="icon-box"><i class=card.icon aria-hidden="true"></i></div>
                <div class="stat-highlight">{card.highlight}</div>
            </div>
            <h3>{card.title}</h3>
            <p>{card.body}</p>
        </div>
    }
}

/// FAQ section, split over two columns that share one accordion
#[component]
fn FaqSection() -> impl IntoView {
    let (left, right) = FAQ.split_at(FAQ.len().div_ceil(2));

    view! {
        <section class="faq-section" id="faq">
            <div class="container">
                <SectionHeader badge="FAQ" title="Frequently Asked Questions" />
                <div class="faq-grid">
                    <FaqList entries=left />
                    <FaqList entries=right />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FinalCta() -> impl IntoView {
    view! {
        <section class="final-cta">
            <div class="container">
                <h2>"Be the first to experience smarter social engagement"</h2>
                <WaitlistForm centered=true />
                <EarlyAccessOffer centered=true />
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="container">
                <p>"© 2026 Bindrix. All rights reserved."</p>
            </div>
        </footer>
    }
}

/// CSS for the interactive states of the landing page
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            .container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }

            /* Scroll reveal */
            .fade-section {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .fade-section.visible {
                opacity: 1;
                transform: translateY(0);
            }

            /* Tabs */
            .tabs-nav { display: flex; flex-wrap: wrap; gap: 0.5rem; justify-content: center; }
            .tab-btn {
                padding: 0.6rem 1.2rem;
                border-radius: 999px;
                border: 1px solid #e5e7eb;
                background: #fff;
                cursor: pointer;
                transition: all 0.2s;
            }
            .tab-btn.active { background: #4f46e5; border-color: #4f46e5; color: #fff; }
            .tab-pane { display: none; }
            .tab-pane.active { display: block; animation: tab-fade 0.3s ease-out; }
            @keyframes tab-fade {
                from { opacity: 0; transform: translateY(8px); }
                to { opacity: 1; transform: translateY(0); }
            }

            /* FAQ accordion */
            .faq-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 1rem; }
            .faq-item { border: 1px solid #e5e7eb; border-radius: 0.75rem; margin-bottom: 1rem; overflow: hidden; }
            .faq-question {
                width: 100%;
                display: flex;
                justify-content: space-between;
                align-items: center;
                gap: 1rem;
                padding: 1rem 1.25rem;
                background: none;
                border: 0;
                font-weight: 600;
                text-align: left;
                cursor: pointer;
            }
            .faq-question i { transition: transform 0.3s; }
            .faq-item.active .faq-question i { transform: rotate(180deg); }
            .faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.3s ease-out; }
            .faq-answer p { padding: 0 1.25rem 1rem; margin: 0; }
            .faq-item.active .faq-answer { max-height: 24rem; }

            /* Waitlist */
            .waitlist-form { display: flex; gap: 0.5rem; flex-wrap: wrap; margin: 1.5rem 0; }
            .waitlist-form.centered { justify-content: center; }
            .waitlist-form input { flex: 1; min-width: 220px; padding: 0.8rem 1rem; border-radius: 0.5rem; border: 1px solid #d1d5db; }
            .cta-button {
                padding: 0.8rem 1.5rem;
                border-radius: 0.5rem;
                border: 0;
                background: #4f46e5;
                color: #fff;
                font-weight: 600;
                cursor: pointer;
                transition: opacity 0.2s;
            }
            .cta-button:disabled { cursor: progress; }
            .waitlist-success {
                width: 100%;
                text-align: center;
                padding: 20px;
                color: #10b981;
                font-weight: 600;
            }
            .waitlist-success i { display: block; font-size: 2rem; margin-bottom: 10px; }
            "#
        </style>
    }
}
