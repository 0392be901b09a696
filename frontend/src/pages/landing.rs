use yew::prelude::*;

use crate::components::footer::Footer;
use crate::contact::section::ContactSection;
use crate::content::{
    self, Icon, BENEFITS, GOOGLE_RATING, PROJECTS, REVIEWS, SAVOIR_FAIRE, SERVICES, STATS, TEAM,
};
use crate::shell::HoverState;

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-pattern"></div>
            <div class="hero-content">
                <span class="hero-badge">{"✓ Certifié & Conforme aux normes"}</span>
                <h1>
                    {"Solutions d'échafaudage"}<br />
                    <span class="accent">{"sécurisées"}</span>
                    {" pour vos chantiers"}
                </h1>
                <p class="hero-lead">
                    {"Location, montage et démontage d'échafaudages conformes aux normes en vigueur"}
                </p>
                <div class="hero-actions">
                    <a href="#contact" class="btn-primary">{"Demander un devis gratuit ⌄"}</a>
                    <a href="#realisations" class="btn-secondary">{"Voir nos réalisations"}</a>
                </div>
                <div class="hero-stats">
                    { for STATS.iter().map(|stat| html! {
                        <div class="hero-stat">
                            <div class="hero-stat-value">{ stat.value }</div>
                            <div class="hero-stat-label">{ stat.label }</div>
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}

#[function_component(ServicesSection)]
fn services_section() -> Html {
    let hover = use_state(HoverState::default);

    html! {
        <section id="services" class="section light">
            <div class="section-header">
                <h2>{"Nos Services"}</h2>
                <p>{"Des solutions complètes pour tous vos besoins en échafaudage"}</p>
            </div>
            <div class="card-grid">
                { for SERVICES.iter().enumerate().map(|(idx, service)| {
                    let onmouseenter = {
                        let hover = hover.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = *hover;
                            next.enter(idx);
                            hover.set(next);
                        })
                    };
                    let onmouseleave = {
                        let hover = hover.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = *hover;
                            next.leave(idx);
                            hover.set(next);
                        })
                    };
                    let active = hover.is_active(idx);

                    html! {
                        <div
                            class={classes!("service-card", active.then(|| "active"))}
                            {onmouseenter}
                            {onmouseleave}
                        >
                            <div class={classes!("service-icon", active.then(|| "active"))}>
                                { service.icon.glyph() }
                            </div>
                            <h3>{ service.title }</h3>
                            <p>{ service.description }</p>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}

#[function_component(SavoirFaire)]
fn savoir_faire() -> Html {
    html! {
        <section class="section dark">
            <div class="split">
                <div>
                    <h2>{"Découvrez notre savoir-faire sur le terrain"}</h2>
                    <p class="lead">
                        {"Une équipe qualifiée, des procédures strictes et un engagement total pour la sécurité de vos chantiers."}
                    </p>
                    { for SAVOIR_FAIRE.iter().map(|item| html! {
                        <div class="check-line">
                            <span>{ Icon::CheckCircle.glyph() }</span>
                            <span>{ *item }</span>
                        </div>
                    })}
                </div>
                <div class="video-placeholder">
                    <div class="play-button"></div>
                    <p>{"Vidéo de présentation"}</p>
                </div>
            </div>
        </section>
    }
}

#[function_component(ProjectsGallery)]
fn projects_gallery() -> Html {
    html! {
        <section id="realisations" class="section muted">
            <div class="section-header">
                <h2>{"Projets Réalisés"}</h2>
                <p>{"Projets réalisés pour des chantiers de toutes tailles"}</p>
            </div>
            <div class="gallery-grid">
                { for PROJECTS.iter().map(|project| html! {
                    <div class="gallery-tile">
                        <div class="gallery-caption">
                            <h3>{ project.kind }</h3>
                            <p>{ Icon::MapPin.glyph() }{" "}{ project.location }</p>
                        </div>
                    </div>
                })}
            </div>
        </section>
    }
}

#[function_component(Benefits)]
fn benefits() -> Html {
    html! {
        <section class="section light">
            <div class="section-header">
                <h2>{"Pourquoi choisir AMR Échafaudage ?"}</h2>
            </div>
            <div class="card-grid">
                { for BENEFITS.iter().map(|benefit| html! {
                    <div class="benefit">
                        <div class="benefit-icon">{ benefit.icon.glyph() }</div>
                        <p>{ benefit.text }</p>
                    </div>
                })}
            </div>
        </section>
    }
}

fn stars(count: usize) -> Html {
    let filled = "★".repeat(count);
    html! {
        <span class="stars">{ filled }</span>
    }
}

#[function_component(Reviews)]
fn reviews() -> Html {
    html! {
        <section id="avis" class="section dark">
            <div class="section-header">
                <h2>{"Ce que disent nos clients"}</h2>
                <div class="rating-badge">
                    { stars(5) }
                    <span>{ format!("{} sur Google", GOOGLE_RATING) }</span>
                </div>
            </div>
            <div class="review-grid">
                { for REVIEWS.iter().map(|review| html! {
                    <div class="review-card">
                        { stars(content::review_stars(review.rating)) }
                        <p class="review-text">{ format!("\"{}\"", review.text) }</p>
                        <p class="review-name">{ review.name }</p>
                        <p class="review-company">{ review.company }</p>
                    </div>
                })}
            </div>
            if let Some(average) = content::average_rating(REVIEWS) {
                <p class="review-average">{ format!("Note moyenne des avis affichés : {:.1}/5", average) }</p>
            }
        </section>
    }
}

#[function_component(Team)]
fn team() -> Html {
    html! {
        <section id="equipe" class="section muted">
            <div class="section-header">
                <h2>{"Notre équipe"}</h2>
                <p>{"Des professionnels formés et certifiés à votre service"}</p>
            </div>
            <div class="card-grid">
                { for TEAM.iter().map(|member| html! {
                    <div class="team-card">
                        <div class="team-avatar">{ Icon::Users.glyph() }</div>
                        <h3>{ member.name }</h3>
                        <p class="team-role">{ member.role }</p>
                        <p>{ member.bio }</p>
                    </div>
                })}
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <section class="cta">
            <h2>{"Besoin d'un échafaudage fiable pour votre chantier ?"}</h2>
            <p>{"Recevez votre devis personnalisé sous 24h"}</p>
            <a href="#contact" class="btn-light">{"Obtenir un devis sous 24h"}</a>
        </section>
    }
}

// Mobile only, hidden by the stylesheet on wide screens
#[function_component(StickyCta)]
fn sticky_cta() -> Html {
    html! {
        <div class="sticky-cta">
            <a href="#contact">{"Devis gratuit sous 24h"}</a>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <Hero />
            <ServicesSection />
            <SavoirFaire />
            <ProjectsGallery />
            <Benefits />
            <Reviews />
            <Team />
            <CallToAction />
            <ContactSection />
            <Footer />
            <StickyCta />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_render_as_a_single_span() {
        match stars(content::review_stars(7)) {
            Html::VTag(tag) => assert_eq!(tag.tag(), "span"),
            _ => panic!("stars should render a span"),
        }
    }
}
