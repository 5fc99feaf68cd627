//! Static page content.
//!
//! DESIGN
//! ======
//! Copy lives in `&'static` tables so sections render by iterating data
//! instead of repeating markup. Accordion keys are plain strings shared by
//! the prize and FAQ tables; they must stay unique across both because the
//! page keeps a single open-panel selection.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

// =============================================================
// Navigation
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
}

pub static NAV_LINKS: [NavLink; 5] = [
    NavLink { id: "sobre", label: "Sobre" },
    NavLink { id: "trilhas", label: "Trilhas" },
    NavLink { id: "regras", label: "Regras" },
    NavLink { id: "prazos", label: "Prazos" },
    NavLink { id: "faq", label: "FAQ" },
];

/// Footer quick links: every nav target except the FAQ.
#[must_use]
pub fn footer_links() -> &'static [NavLink] {
    &NAV_LINKS[..4]
}

// =============================================================
// Sobre
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AboutCard {
    pub title: &'static str,
    pub body: &'static str,
    pub delay_ms: f64,
}

pub static ABOUT_CARDS: [AboutCard; 6] = [
    AboutCard {
        title: "Protótipos Reais",
        body: "Alunos desenvolvem soluções concretas para problemas do mundo real, aplicando conhecimento técnico e \
               criatividade.",
        delay_ms: 0.0,
    },
    AboutCard {
        title: "Banca de Avaliação",
        body: "Profissionais experientes de TI avaliam os projetos, oferecendo feedback valioso e reconhecendo o \
               trabalho das equipes.",
        delay_ms: 100.0,
    },
    AboutCard {
        title: "Networking",
        body: "Espaço de conexão entre estudantes, professores e empresas parceiras, abrindo portas para o mercado de \
               trabalho.",
        delay_ms: 200.0,
    },
    AboutCard {
        title: "Smart Building",
        body: "Foco especial em tecnologias para edifícios inteligentes, unindo IoT, automação e sustentabilidade.",
        delay_ms: 300.0,
    },
    AboutCard {
        title: "Tecnologias Disruptivas",
        body: "Projetos que exploram o futuro: IA, blockchain, realidade aumentada, machine learning e muito mais.",
        delay_ms: 400.0,
    },
    AboutCard {
        title: "Prêmios Exclusivos",
        body: "Os melhores projetos de cada categoria são premiados, reconhecendo a excelência e inovação das equipes.",
        delay_ms: 500.0,
    },
];

// =============================================================
// Trilhas
// =============================================================

/// A bold lead followed by its detail, e.g. "Redes: Cabeamento, RDP...".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Topic {
    pub name: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CourseGuide {
    pub course: &'static str,
    pub summary: &'static str,
    pub guide_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackBody {
    /// One shared guide for every course.
    Common { topics: &'static [Topic], guide_url: &'static str },
    /// One guide per course.
    PerCourse(&'static [CourseGuide]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SemesterTrack {
    pub badge: &'static str,
    pub title: &'static str,
    pub audience: &'static str,
    pub delay_ms: f64,
    pub body: TrackBody,
}

pub static SEMESTER_TRACKS: [SemesterTrack; 5] = [
    SemesterTrack {
        badge: "1º",
        title: "Primeiro Semestre",
        audience: "Todos os cursos",
        delay_ms: 0.0,
        body: TrackBody::Common {
            topics: &[
                Topic { name: "Sistemas Funcionais", detail: "Desenvolvimento completo em Python com banco de dados MySQL" },
                Topic {
                    name: "Lógica Computacional",
                    detail: "Estruturas de controle, algoritmos e manipulação de dados",
                },
                Topic { name: "Modelagem de Banco de Dados", detail: "MER, DER e operações CRUD" },
                Topic { name: "Metodologias Ágeis", detail: "SCRUM com backlog, sprints e ferramentas de gestão" },
            ],
            guide_url: "https://drive.google.com/file/d/1u4QoVOa_UBOmMMiapoczUYmRqXS1ve-l/view?usp=sharing",
        },
    },
    SemesterTrack {
        badge: "2º",
        title: "Segundo Semestre",
        audience: "Todos os cursos",
        delay_ms: 100.0,
        body: TrackBody::Common {
            topics: &[
                Topic { name: "Arquitetura de Computadores", detail: "Configuração de hardware, BIOS, dual boot" },
                Topic { name: "Virtualização", detail: "Hyper-V, VirtualBox, VMware e Windows Server" },
                Topic { name: "Redes", detail: "Cabeamento, RDP, SSH, firewall e conectividade" },
                Topic { name: "Cyber Security", detail: "DNS, VPN, Nmap, OpenVAS, Kali Linux" },
                Topic { name: "OOP & Algoritmos", detail: "Python/Java orientado a objetos" },
                Topic { name: "Cloud Computing", detail: "Git, GitHub, AWS, Azure, GCP" },
            ],
            guide_url: "https://drive.google.com/file/d/1B7XXgFunzKEidTsSbxc10suPv-2tw-EY/view?usp=sharing",
        },
    },
    SemesterTrack {
        badge: "3º",
        title: "Terceiro Semestre",
        audience: "Trilhas especializadas por curso",
        delay_ms: 200.0,
        body: TrackBody::PerCourse(&[
            CourseGuide {
                course: "ADS",
                summary: "Aplicações modernas em Rust/Python/Java com UX/UI. Design ágil, OOP e estruturas de dados.",
                guide_url: "https://drive.google.com/file/d/1yuTE5OIbk9RJcMa51w9SukwIHw1nvUOk/view?usp=sharing",
            },
            CourseGuide {
                course: "CDC",
                summary: "Modelagem matemática, otimização (Operations Research) e Python. Geometria Analítica, \
                          Álgebra Linear e Cálculo.",
                guide_url: "https://drive.google.com/file/d/1Jd1kYsY2xRRhM_uXqW7HZRdETuBiVzQy/view?usp=sharing",
            },
            CourseGuide {
                course: "ECO",
                summary: "Aplicação OOP explorando estruturas de dados complexas e modelagem algébrica. Engenharia de \
                          software.",
                guide_url: "https://drive.google.com/file/d/1nVJ4NrqYYtycMvV6NCqD8B7H8TRi9ttw/view?usp=sharing",
            },
            CourseGuide {
                course: "GTI",
                summary: "IA unindo Machine Learning, NLP e Prompt Engineering. Sistemas inteligentes com Deep Learning.",
                guide_url: "https://drive.google.com/file/d/1L7rlD_v5kBZTQIeEdoJb0VPxy6xZAzPl/view?usp=sharing",
            },
        ]),
    },
    SemesterTrack {
        badge: "4º",
        title: "Quarto Semestre",
        audience: "Trilhas especializadas por curso",
        delay_ms: 300.0,
        body: TrackBody::PerCourse(&[
            CourseGuide {
                course: "ADS",
                summary: "Web Apps completos com Front/Back-end em Node.js/TypeScript e integração de IA/Chatbots.",
                guide_url: "https://drive.google.com/file/d/1xiJJWq_n8IE2Hc3IDiNiLRG07ckLsErc/view?usp=sharing",
            },
            CourseGuide {
                course: "CDC",
                summary: "Sistema funcional moderno com design de software ágil em Rust/Python/Java.",
                guide_url: "https://drive.google.com/file/d/1qaDnHK4gqE_bPnp6l_P1SIL4d_pqi3Wx/view?usp=sharing",
            },
            CourseGuide {
                course: "GTI",
                summary: "Sistema inteligente de IA aplicando Deep Learning e Processamento de Linguagem Natural.",
                guide_url: "https://drive.google.com/file/d/16Wo_rL2tS-ffpGBFvqrCL3amVFSjt6KY/view?usp=sharing",
            },
        ]),
    },
    SemesterTrack {
        badge: "5º",
        title: "Quinto Semestre",
        audience: "Trilhas especializadas por curso",
        delay_ms: 400.0,
        body: TrackBody::PerCourse(&[
            CourseGuide {
                course: "ADS",
                summary: "Mobile Development (React Native + IoT) ou Game Development (Unity/Godot + AR) com CI/CD.",
                guide_url: "https://drive.google.com/file/d/1sMXFTdBjMkVJpLu8BdZCbQNopCp6oNHE/view?usp=sharing",
            },
            CourseGuide {
                course: "CDC",
                summary: "Mobile Development (React Native + IoT) ou Game Development (Unity/Godot + AR) com CI/CD.",
                guide_url: "https://drive.google.com/file/d/1WOHzPGJgIulzNdjQQbsIicpaKPkgmwcu/view?usp=sharing",
            },
            CourseGuide {
                course: "GTI",
                summary: "Frameworks de Governança de TI e Soluções de BI/Transformação Digital com Dashboards.",
                guide_url: "https://drive.google.com/file/d/1hg83VpxwPl0hglM8y4F9hAmeQ2qjV4LP/view?usp=sharing",
            },
        ]),
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineeringTrack {
    pub title: &'static str,
    pub audience: &'static str,
    pub about: [&'static str; 2],
    pub focus: [Topic; 4],
    pub requirements: [&'static str; 6],
    pub guide_url: &'static str,
    pub delay_ms: f64,
}

pub static ENGINEERING_TRACK: EngineeringTrack = EngineeringTrack {
    title: "Projeto Integrador em Engenharias",
    audience: "ECO (4º ao 8º) • Eng. Civil, Elétrica e Produção (6º ao 9º)",
    about: [
        "O Projeto Integrador em Engenharias segue os elementos do roteiro, desafiando alunos do 4º ao 8º da \
         Engenharia da Computação e do 6º ao 9º das Engenharias Civil, Elétrica e Produção a desenvolverem sistemas \
         robustos que integram conceitos avançados e metodologias científicas.",
        "Os projetos aplicam elementos do roteiro na prática, englobando engenharia de software, otimização \
         matemática e validação de desempenho, demonstrando maturidade técnica.",
    ],
    focus: [
        Topic {
            name: "OOP & Estruturas de Dados",
            detail: "Classes, herança, polimorfismo e algoritmos eficientes",
        },
        Topic {
            name: "Pesquisa Operacional",
            detail: "Otimização linear, alocação de recursos e simulações matemáticas",
        },
        Topic { name: "Física Aplicada", detail: "Simulações, energia, eficiência e tempo de resposta" },
        Topic {
            name: "UX/UI & Design Thinking",
            detail: "Prototipagem, interfaces intuitivas e experiência do usuário",
        },
    ],
    requirements: [
        "Equipes de 10 a 12 alunos de todas as engenharias",
        "Protótipo funcional ou prova de conceito implementada",
        "Documentação técnica completa e relatório de pesquisa",
        "Aplicação de metodologias de pesquisa científica",
        "Integração de pelo menos 3 áreas do conhecimento",
        "Vídeo pitch e apresentação técnica detalhada",
    ],
    guide_url: "https://drive.google.com/file/d/10UCWfeV8-NWUMZkXThJM-EFoueGNc170/view?usp=sharing",
    delay_ms: 500.0,
};

/// Two-digit requirement marker: `01`, `02`, ...
#[must_use]
pub fn requirement_marker(index: usize) -> String {
    format!("{:02}", index + 1)
}

// =============================================================
// Regras e Premiação
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub title: &'static str,
    pub body: &'static str,
}

pub static RULES: [Rule; 5] = [
    Rule { title: "Composição dos Grupos", body: "3 a 5 pessoas da mesma turma, com papéis definidos" },
    Rule { title: "Avaliação Prévia", body: "Apresentação em sala, apenas selecionados expõem no evento" },
    Rule { title: "Entregas Obrigatórias", body: "Vídeo pitch, GitHub com código e documentação completa" },
    Rule {
        title: "Apresentação no Evento",
        body: "Protótipo funcional + pitch de 5 minutos para banca avaliadora",
    },
    Rule {
        title: "Critérios de Avaliação",
        body: "Inovação, funcionalidade, design técnico, apresentação e documentação",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrizeCategory {
    /// Accordion key.
    pub key: &'static str,
    pub title: &'static str,
    /// First, second and third place in whole reais.
    pub amounts: [u32; 3],
}

pub const PRIZE_HINT: &str = "Clique para ver os prêmios";

pub static PRIZE_CATEGORIES: [PrizeCategory; 5] = [
    PrizeCategory { key: "start", title: "1º Semestre - Categoria START", amounts: [1000, 800, 500] },
    PrizeCategory { key: "foundation", title: "2º Semestre - Categoria FOUNDATION", amounts: [1400, 1000, 600] },
    PrizeCategory { key: "gti", title: "GTI (3º ao 5º) - Categoria BUILD-DATA & GESTÃO", amounts: [2000, 1300, 700] },
    PrizeCategory {
        key: "software",
        title: "CDC + ADS (3º ao 5º) - Categoria SOFTWARE & COMPUTAÇÃO",
        amounts: [2000, 1300, 700],
    },
    PrizeCategory {
        key: "proscale",
        title: "Projeto Integrador em Engenharias - Categoria PRO/SCALE",
        amounts: [6000, 3000, 1000],
    },
];

pub static PLACE_LABELS: [&str; 3] = ["1º", "2º", "3º"];

/// Brazilian currency label with `.` as the thousands separator.
#[must_use]
pub fn format_brl(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("R$ {grouped}")
}

// =============================================================
// Prazos
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeadlineLink {
    Registration,
    Submission,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deadline {
    pub title: &'static str,
    pub body: &'static str,
    pub day_month: &'static str,
    pub year: &'static str,
    pub cta: &'static str,
    pub link: DeadlineLink,
}

pub static DEADLINES: [Deadline; 2] = [
    Deadline {
        title: "Inscrições",
        body: "Preencha o formulário com os dados da equipe, proposta do projeto e links necessários",
        day_month: "20 MAR",
        year: "2026",
        cta: "Realizar Inscrição",
        link: DeadlineLink::Registration,
    },
    Deadline {
        title: "Entrega Final",
        body: "Submeta o projeto final com toda a documentação, código e materiais de apresentação",
        day_month: "22 MAI",
        year: "2026",
        cta: "Submeter Projeto",
        link: DeadlineLink::Submission,
    },
];

// =============================================================
// FAQ
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    /// Accordion key.
    pub key: &'static str,
    pub question: &'static str,
    /// Rendered one per line.
    pub answer: &'static [&'static str],
    /// Append a mailto link to the contact address.
    pub with_contact: bool,
}

pub static FAQS: [Faq; 7] = [
    Faq {
        key: "faq1",
        question: "O que é o ExpoTech 2026?",
        answer: &["O ExpoTech 2026 é o maior evento de tecnologia e inovação da UniFECAF, onde alunos apresentam seus \
                   Projetos Integradores com foco em Smart Building e Tecnologias Disruptivas."],
        with_contact: false,
    },
    Faq {
        key: "faq2",
        question: "Quando e onde vai acontecer?",
        answer: &["Data: 13 de Junho de 2026", "Horário: 08h às 12h", "Local: UniFECAF"],
        with_contact: false,
    },
    Faq {
        key: "faq3",
        question: "Quem pode participar?",
        answer: &["Estudantes de todos os cursos da área de tecnologia e engenharias (ADS, CDC, ECO, GTI, Eng. Civil, \
                   Eng. Elétrica e Eng. de Produção), do 1º ao 9º semestre."],
        with_contact: false,
    },
    Faq {
        key: "faq4",
        question: "Como faço para me inscrever?",
        answer: &["Preencha o formulário de inscrição até 20 de Março de 2026. O link está disponível na seção de \
                   navegação e no Hero do site."],
        with_contact: false,
    },
    Faq {
        key: "faq5",
        question: "O evento é aberto ao público?",
        answer: &["Sim! O ExpoTech 2026 é aberto ao público em geral e empresas interessadas em conhecer os projetos, \
                   networking e oportunidades de parceria."],
        with_contact: false,
    },
    Faq {
        key: "faq6",
        question: "Existem prêmios?",
        answer: &["Sim! Cada categoria premia os 3 melhores projetos com valores que variam de R$ 300 a R$ 6.000, \
                   dependendo da categoria. Consulte a seção de Premiação para mais detalhes."],
        with_contact: false,
    },
    Faq {
        key: "faq7",
        question: "Outras dúvidas? Entre em contato!",
        answer: &["Para dúvidas gerais sobre o evento, envie um email para:"],
        with_contact: true,
    },
];

// =============================================================
// Parceiros, rodapé
// =============================================================

pub const PARTNER_TITLE: &str = "Seja uma Empresa Parceira!";
pub const PARTNER_BODY: &str = "Apoie a inovação e conheça novos talentos em tecnologia. Parceiros do ExpoTech 2026 \
                                terão visibilidade, networking e acesso aos melhores projetos da região.";
pub const FOOTER_BLURB: &str =
    "O maior evento de tecnologia e inovação da UniFECAF. Conectando estudantes, professores e empresas.";
pub const COPYRIGHT: &str =
    "© 2026 Centro Universitário UniFECAF. Núcleo de Tecnologias e Engenharias. Todos os direitos reservados.";
