//! Event configuration.
//!
//! Everything that changes from one edition of the exposition to the next
//! lives in [`SiteConfig`]. Components read it from context rather than
//! hard-coding dates and links.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use time::OffsetDateTime;
use time::macros::datetime;

/// Percent-encoded subject of the partner enquiry mail.
const PARTNER_SUBJECT: &str = "Interesse%20em%20Parceria%20-%20ExpoTech%202026";

/// Percent-encoded body template the partner fills in before sending.
const PARTNER_BODY: &str = concat!(
    "Olá%2C%20gostaria%20de%20saber%20mais%20sobre%20como%20ser%20uma%20empresa%20parceira%20do%20ExpoTech%202026.",
    "%0D%0A%0D%0A",
    "Nome%20da%20Empresa%3A%20%5BSeu%20Nome%5D%0D%0A",
    "Nome%20do%20Contato%3A%20%5BSeu%20Nome%5D%0D%0A",
    "Cargo%2FFunção%3A%20%5BSeu%20Cargo%5D%0D%0A",
    "Telefone%3A%20%5BSeu%20Telefone%5D%0D%0A",
    "Tipo%20de%20Parceria%20de%20interesse%3A%20%5BPatrocinador%2F%20Apoiador%2F%20Jurado%2F%20Outro%5D%0D%0A",
    "Mensagem%20adicional%3A%20%5BDesejo%20conhecer%20melhores%20projetos%20e%20talentos...%5D",
    "%0D%0A%0D%0A",
    "Aguardo%20seu%20retorno!",
);

/// One headline number shown in the hero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroStat {
    pub target: u64,
    pub suffix: &'static str,
    pub label: &'static str,
    pub duration_ms: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub title: &'static str,
    pub description: &'static str,
    pub event_start: OffsetDateTime,
    pub date_label: &'static str,
    pub hours_label: &'static str,
    pub venue: &'static str,
    pub venue_url: &'static str,
    pub registration_url: &'static str,
    pub submission_url: &'static str,
    pub contact_email: &'static str,
    pub stats: [HeroStat; 3],
}

impl SiteConfig {
    /// ExpoTech 2026: 13 June 2026, 08:00 in São Paulo.
    #[must_use]
    pub fn expotech_2026() -> Self {
        Self {
            title: "UNIFECAF - ExpoTech 2026",
            description: "Participe da ExpoTech 2026 da UniFECAF. Exposição de projetos práticos de tecnologia, \
                          inovação e criatividade. Concorra a prêmios e faça networking com profissionais do mercado.",
            event_start: datetime!(2026-06-13 08:00 -3),
            date_label: "13 de Junho de 2026",
            hours_label: "08h às 12h",
            venue: "UniFECAF",
            venue_url: "https://www.unifecaf.com.br/",
            registration_url: "https://forms.gle/mh3GX4FpsHroyDHE8",
            submission_url: "https://forms.gle/apt1wVXWuxsW5Mph6",
            contact_email: "luis.pires@fecaf.com.br",
            stats: [
                HeroStat { target: 70, suffix: "+", label: "Projetos", duration_ms: 2000.0 },
                HeroStat { target: 4, suffix: "h", label: "de Inovação", duration_ms: 2500.0 },
                HeroStat { target: 7, suffix: "", label: "Cursos", duration_ms: 1800.0 },
            ],
        }
    }

    /// Event start as Unix milliseconds, the unit the countdown ticks in.
    #[must_use]
    pub fn event_start_ms(&self) -> i64 {
        i64::try_from(self.event_start.unix_timestamp_nanos() / 1_000_000).unwrap_or(i64::MAX)
    }

    #[must_use]
    pub fn contact_href(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }

    /// Partner enquiry mail with the subject and a fill-in body template.
    #[must_use]
    pub fn partner_href(&self) -> String {
        format!("mailto:{}?subject={PARTNER_SUBJECT}&body={PARTNER_BODY}", self.contact_email)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::expotech_2026()
    }
}
