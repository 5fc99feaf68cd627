//! The ExpoTech landing page.
//!
//! Sections in page order: hero, `sobre`, `trilhas`, `regras`, `prazos`,
//! `faq`, partner call, countdown. Section ids are the scroll targets used
//! by the nav and footer links.

use leptos::prelude::*;

use crate::components::accordion::{AccordionItem, PrizeTable};
use crate::components::animated_counter::AnimatedCounter;
use crate::components::countdown_timer::CountdownTimer;
use crate::components::fade_in_section::FadeInSection;
use crate::components::nav_header::NavHeader;
use crate::components::site_footer::SiteFooter;
use crate::config::SiteConfig;
use crate::content::{
    ABOUT_CARDS, DEADLINES, DeadlineLink, ENGINEERING_TRACK, FAQS, PARTNER_BODY, PARTNER_TITLE, PRIZE_CATEGORIES,
    RULES, SEMESTER_TRACKS, SemesterTrack, Topic, TrackBody, requirement_marker,
};
use crate::state::page::PageStore;
use crate::util::scroll::scroll_to_section;

#[component]
pub fn LandingPage() -> impl IntoView {
    let store = PageStore::expect();
    let event_start_ms = expect_context::<SiteConfig>().event_start_ms();

    view! {
        <div class=move || store.tokens().page>
            <NavHeader/>
            <main>
                <Hero/>
                <AboutSection/>
                <TracksSection/>
                <RulesSection/>
                <DeadlinesSection/>
                <FaqSection/>
                <PartnerSection/>
                <FadeInSection>
                    <div class=move || store.tokens().panel>
                        <CountdownTimer
                            target_ms=event_start_ms
                            caption="⏰ ExpoTech 2026 em:"
                        />
                    </div>
                </FadeInSection>
            </main>
            <SiteFooter/>
        </div>
    }
}

// =============================================================
// Hero
// =============================================================

#[component]
fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <section class="hero" aria-label="Seção principal - ExpoTech 2026">
            <h1 class="hero__title">
                <span>"EXPO"</span>
                <span class="hero__title-accent">"TECH 2026"</span>
            </h1>
            <div class="hero__date">{format!("{} • {}", config.date_label, config.venue)}</div>
            <p class="hero__lead">
                "O maior evento de tecnologia e inovação da UniFECAF."
                <span class="hero__focus">"Smart Building & Tecnologias Disruptivas"</span>
            </p>
            <div class="hero__actions">
                <a
                    class="button button--primary"
                    href=config.registration_url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Inscrever seu projeto no ExpoTech 2026 - abre em nova aba"
                >
                    "🚀 Inscrever Seu Projeto"
                </a>
                <button
                    class="button button--ghost"
                    aria-label="Ir para seção de trilhas de projetos"
                    on:click=move |_| scroll_to_section("trilhas")
                >
                    "Ver Trilhas"
                </button>
            </div>
            <div class="hero__stats">
                {config
                    .stats
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class="stat">
                                <div class="stat__value">
                                    <AnimatedCounter target=stat.target suffix=stat.suffix duration_ms=stat.duration_ms/>
                                </div>
                                <div class="stat__label">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
                <div class="stat">
                    <div class="stat__value">"∞"</div>
                    <div class="stat__label">"Oportunidades"</div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SectionHeading(title: &'static str, #[prop(optional)] subtitle: Option<&'static str>) -> impl IntoView {
    let store = PageStore::expect();
    view! {
        <div class="section__heading">
            <h2>{title}</h2>
            {subtitle.map(|text| view! { <p class=move || store.tokens().text_secondary>{text}</p> })}
        </div>
    }
}

// =============================================================
// Sobre
// =============================================================

#[component]
fn AboutSection() -> impl IntoView {
    let store = PageStore::expect();

    view! {
        <section id="sobre" class="section">
            <SectionHeading
                title="Sobre o Evento"
                subtitle="Fechamento dos Projetos Integradores onde alunos apresentam protótipos e soluções para problemas reais"
            />
            <div class="grid grid--3">
                {ABOUT_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <FadeInSection delay_ms=card.delay_ms>
                                <div class=move || store.tokens().card>
                                    <h3>{card.title}</h3>
                                    <p class=move || store.tokens().text_secondary>{card.body}</p>
                                </div>
                            </FadeInSection>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

// =============================================================
// Trilhas
// =============================================================

fn topic_list(topics: &'static [Topic]) -> impl IntoView {
    view! {
        <ul class="topics">
            {topics
                .iter()
                .map(|topic| {
                    view! {
                        <li>
                            <strong>{format!("{}:", topic.name)}</strong>
                            " "
                            {topic.detail}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

fn track_body(body: TrackBody) -> AnyView {
    match body {
        TrackBody::Common { topics, guide_url } => view! {
            <div>
                {topic_list(topics)}
                <a class="button button--download" href=guide_url target="_blank" rel="noopener noreferrer">
                    "Baixar Roteiro Geral"
                </a>
            </div>
        }
        .into_any(),
        TrackBody::PerCourse(courses) => view! {
            <div class="grid grid--courses">
                {courses
                    .iter()
                    .map(|course| {
                        view! {
                            <div class="course">
                                <h4>{course.course}</h4>
                                <p>{course.summary}</p>
                                <a href=course.guide_url target="_blank" rel="noopener noreferrer">
                                    {format!("Roteiro {}", course.course)}
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn TrackCard(track: SemesterTrack) -> impl IntoView {
    let store = PageStore::expect();

    view! {
        <FadeInSection delay_ms=track.delay_ms>
            <div class=move || store.tokens().card>
                <div class="track__header">
                    <span class="track__badge">{track.badge}</span>
                    <div>
                        <h3>{track.title}</h3>
                        <p class=move || store.tokens().text_secondary>{track.audience}</p>
                    </div>
                </div>
                {track_body(track.body)}
            </div>
        </FadeInSection>
    }
}

#[component]
fn EngineeringCard() -> impl IntoView {
    let store = PageStore::expect();
    let track = ENGINEERING_TRACK;

    view! {
        <FadeInSection delay_ms=track.delay_ms>
            <div class=move || store.tokens().card>
                <div class="track__header">
                    <span class="track__badge">"PI"</span>
                    <div>
                        <h3>{track.title}</h3>
                        <p class=move || store.tokens().text_secondary>{track.audience}</p>
                    </div>
                </div>
                <h4>"▸ Sobre o Projeto"</h4>
                {track.about.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
                <h4>"▸ Áreas de Foco"</h4>
                {topic_list(&ENGINEERING_TRACK.focus)}
                <h4>"Requisitos do Projeto"</h4>
                <ol class="requirements">
                    {track
                        .requirements
                        .iter()
                        .enumerate()
                        .map(|(i, requirement)| {
                            view! {
                                <li>
                                    <span class="requirements__marker">{requirement_marker(i)}</span>
                                    {*requirement}
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
                <a class="button button--download" href=track.guide_url target="_blank" rel="noopener noreferrer">
                    "Baixar Roteiro Completo"
                </a>
            </div>
        </FadeInSection>
    }
}

#[component]
fn TracksSection() -> impl IntoView {
    view! {
        <section id="trilhas" class="section">
            <SectionHeading
                title="Trilhas de Projetos"
                subtitle="Explore os desafios por semestre e baixe os roteiros detalhados"
            />
            {SEMESTER_TRACKS.into_iter().map(|track| view! { <TrackCard track=track/> }).collect_view()}
            <EngineeringCard/>
        </section>
    }
}

// =============================================================
// Regras e Premiação
// =============================================================

#[component]
fn RulesSection() -> impl IntoView {
    let store = PageStore::expect();

    view! {
        <section id="regras" class="section">
            <SectionHeading title="Regras e Premiação"/>
            <div class="grid grid--2">
                <div class=move || store.tokens().card>
                    <h3>"Regras do Evento"</h3>
                    <ol class="rules">
                        {RULES
                            .iter()
                            .enumerate()
                            .map(|(i, rule)| {
                                view! {
                                    <li>
                                        <span class="rules__number">{i + 1}</span>
                                        <div>
                                            <p class="rules__title">{rule.title}</p>
                                            <p class=move || store.tokens().text_secondary>{rule.body}</p>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
                <div class=move || store.tokens().card>
                    <h3>"Premiação por Categoria"</h3>
                    {PRIZE_CATEGORIES.into_iter().map(|category| view! { <PrizeTable category=category/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

// =============================================================
// Prazos
// =============================================================

#[component]
fn DeadlinesSection() -> impl IntoView {
    let store = PageStore::expect();
    let config = expect_context::<SiteConfig>();

    view! {
        <section id="prazos" class="section">
            <SectionHeading title="Prazos Importantes" subtitle="Fique atento às datas e não perca os prazos!"/>
            <div class="grid grid--2">
                {DEADLINES
                    .iter()
                    .map(|deadline| {
                        let href = match deadline.link {
                            DeadlineLink::Registration => config.registration_url,
                            DeadlineLink::Submission => config.submission_url,
                        };
                        view! {
                            <div class=move || store.tokens().card>
                                <div class="deadline__head">
                                    <div>
                                        <h3>{deadline.title}</h3>
                                        <p class=move || store.tokens().text_secondary>{deadline.body}</p>
                                    </div>
                                    <div class="deadline__date">
                                        <div class="deadline__day">{deadline.day_month}</div>
                                        <div class="deadline__year">{deadline.year}</div>
                                    </div>
                                </div>
                                <a class="button button--primary" href=href target="_blank" rel="noopener noreferrer">
                                    {deadline.cta}
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

// =============================================================
// FAQ
// =============================================================

#[component]
fn FaqSection() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    view! {
        <FadeInSection>
            <section id="faq" class="section">
                <SectionHeading title="Perguntas Frequentes" subtitle="Tire suas dúvidas sobre o ExpoTech 2026"/>
                {FAQS
                    .iter()
                    .map(|faq| {
                        let contact = faq.with_contact.then(|| (config.contact_href(), config.contact_email));
                        view! {
                            <AccordionItem panel=faq.key title=faq.question>
                                {faq.answer.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                                {contact.clone().map(|(href, email)| view! { <a class="faq__contact" href=href>{email}</a> })}
                            </AccordionItem>
                        }
                    })
                    .collect_view()}
            </section>
        </FadeInSection>
    }
}

// =============================================================
// Parceiros
// =============================================================

#[component]
fn PartnerSection() -> impl IntoView {
    let store = PageStore::expect();
    let config = expect_context::<SiteConfig>();

    view! {
        <FadeInSection delay_ms=100.0>
            <section class="section">
                <div class=move || format!("partner {}", store.tokens().card)>
                    <h3>{PARTNER_TITLE}</h3>
                    <p class=move || store.tokens().text_secondary>{PARTNER_BODY}</p>
                    <a class="button button--primary" href=config.partner_href()>
                        "Seja parceiro"
                    </a>
                </div>
            </section>
        </FadeInSection>
    }
}
